use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// enable verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose_logging: bool,
    /// enable trace output (more detailed than verbose, overrides it if present)
    #[arg(long = "trace", global = true)]
    pub trace_logging: bool,
}

impl GlobalArgs {
    pub fn get_log_level(&self) -> LogLevel {
        if self.trace_logging {
            return LogLevel::Trace;
        }

        if self.verbose_logging {
            return LogLevel::Verbose;
        }

        LogLevel::Normal
    }
}

pub enum LogLevel {
    Normal,
    Verbose,
    Trace,
}

#[derive(Debug, Subcommand)]
#[command(arg_required_else_help = true)]
pub enum Commands {
    /// render the AKO add-on manifest from an AKODeploymentConfig
    #[command(alias = "r")]
    Render(RenderArgs),
    /// print the AKODeploymentConfig CustomResourceDefinition
    Crd,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// AKODeploymentConfig resource (or just its spec) in YAML
    #[arg(short = 'c', long)]
    pub config: PathBuf,
    /// YAML file with the AVI controller username, password and optionally certificateAuthorityData
    #[arg(long)]
    pub credentials: Option<PathBuf>,
    /// name of the management cluster the add-on is rendered for
    #[arg(long, env = "MANAGEMENT_CLUSTER_NAME")]
    pub management_cluster_name: String,
    /// if set, the command will write the manifest to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
