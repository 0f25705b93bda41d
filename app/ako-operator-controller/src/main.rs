use std::{error::Error, process::exit};

use ako_operator_core::config::OperatorConfig;
use controller::main_controller;
use kube::Client;

mod controller;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    configure_logger();

    let config = get_operator_config();
    let client = create_client().await;

    main_controller(client, config).await;

    Ok(())
}

async fn create_client() -> Client {
    match Client::try_default().await {
        Ok(client) => client,
        Err(error) => {
            log::error!("Couldn't create client! {error:?}");
            exit(6)
        }
    }
}

fn get_operator_config() -> OperatorConfig {
    match OperatorConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Couldn't read operator configuration! {error}");
            exit(7)
        }
    }
}

fn configure_logger() {
    env_logger::builder()
        .default_format()
        .format_module_path(false)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init()
}
