//! assetcheck server entry point.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use assetcheck_api::{AppConfig, ConfigOverrides, Server};
use clap::{Parser, Subcommand};

/// Asset inspection tracker
#[derive(Parser, Debug)]
#[command(name = "assetcheck", version)]
#[command(about = "Record asset inspections and export them to a spreadsheet", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "ASSETCHECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the resolved configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,assetcheck=debug".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply(&cli.overrides);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
        Command::Serve => {
            tracing::info!(bind = %config.bind, "Starting assetcheck");
            let server = Server::bind(&config).await?;
            server.run().await?;
        }
    }
    Ok(())
}
