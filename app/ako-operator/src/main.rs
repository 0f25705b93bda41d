use clap::Parser;
use cli::{Commands, GlobalArgs, LogLevel};
use commands::{crd::print_crd, render::render};
use env_logger::Target;
use log::LevelFilter;

use crate::cli::Cli;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    configure_logging(&cli.global_args);

    if let Some(command) = cli.command {
        match command {
            Commands::Render(args) => render(args)?,
            Commands::Crd => print_crd()?,
        }
    }

    Ok(())
}

fn configure_logging(global_args: &GlobalArgs) {
    let log_level = global_args.get_log_level();
    let mut logger = env_logger::builder();

    logger
        .format_timestamp(None)
        .format_module_path(matches!(log_level, LogLevel::Trace))
        .format_target(false)
        .format_level(false)
        .target(Target::Stderr);

    match log_level {
        LogLevel::Normal => logger.filter(Some("ako_operator"), LevelFilter::Info),
        LogLevel::Verbose => logger.filter(Some("ako_operator"), LevelFilter::Debug),
        LogLevel::Trace => logger.filter(None, LevelFilter::Debug),
    };

    logger.init();
}
