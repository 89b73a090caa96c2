//! Access Catalog CLI
//!
//! Lists, searches and inspects catalog resources from either the bundled
//! datasets or the remote API.

mod config;

use access_catalog::types::RESOURCE_TYPES;
use access_catalog::{DataProvider, ResourceGateway};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use config::{CliConfig, Command};

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("access_catalog={level},catalog={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let gateway = ResourceGateway::from_config(config.gateway_config());
    info!(provider = %gateway.provider_type(), "Starting access catalog");

    match &config.command {
        Command::Types => print_json(&RESOURCE_TYPES)?,
        Command::List(args) => {
            let page = gateway
                .fetch_all(&args.resource_type, &args.query_options())
                .await?;
            print_json(&page)?;
        }
        Command::Get { resource_type, id } => {
            let record = gateway.fetch_by_id(resource_type, id).await?;
            print_json(&record)?;
        }
        Command::Count { resource_type } => {
            let count = gateway.count(resource_type).await?;
            println!("{count}");
        }
        Command::Health => {
            let healthy = gateway.health_check().await;
            println!("{}", if healthy { "ok" } else { "unavailable" });
            if !healthy {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
