mod args;
mod commands;

use anyhow::Result;
use args::{CliArgs, Command};
use clap::Parser;
use keplr_connect::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load the .env file before anything, in case it's used by the config overrides
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file loaded");
    }

    let args = CliArgs::parse();

    let tracing_level: tracing::Level = args.log_level.into();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false),
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::level_filters::LevelFilter::from_level(tracing_level).into()),
        )
        .try_init()?;

    let mut config = ChainConfig::load_sync(&args.config)?;
    config.apply_env(&args.env_prefix)?;
    tracing::debug!("loaded chain config for {}", config.chain_id);

    match args.command {
        Command::ChainInfo => commands::chain_info::run(&config)?,
        Command::Simulate {
            accounts,
            reject,
            no_wallet,
            disconnect,
        } => {
            let opts = commands::simulate::SimulateOpts {
                accounts,
                reject,
                no_wallet,
                disconnect,
            };
            commands::simulate::run(config, opts).await?;
        }
    }

    Ok(())
}
