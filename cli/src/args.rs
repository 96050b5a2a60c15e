use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Chain config file (toml)
    #[arg(long, global = true, default_value = "./config/chain.toml")]
    pub config: PathBuf,

    /// Prefix of the environment variables that override the config file
    #[arg(long, global = true, default_value = "KEPLR_CONNECT_")]
    pub env_prefix: String,

    /// Set the logging level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    /// The command to run
    pub command: Command,
}

#[derive(Clone, Subcommand)]
pub enum Command {
    /// Print the descriptor sent to `experimentalSuggestChain`
    ChainInfo,
    /// Run the connect flow against an in-memory wallet
    Simulate {
        /// Accounts the wallet returns, first one wins
        #[arg(long = "account")]
        accounts: Vec<String>,
        /// Make `enable` fail with this message
        #[arg(long)]
        reject: Option<String>,
        /// Behave as if the extension isn't installed
        #[arg(long, default_value_t = false)]
        no_wallet: bool,
        /// Disconnect after connecting
        #[arg(long, default_value_t = false)]
        disconnect: bool,
    },
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
