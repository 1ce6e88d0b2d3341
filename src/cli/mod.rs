//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the quickstart using clap.

pub mod commands;

use crate::config::{load_config, LoggingConfig};
use clap::{Parser, Subcommand};

/// Cosmos Quickstart - upsert, point read and query against Azure Cosmos DB
#[derive(Parser, Debug)]
#[command(name = "cosmos-quickstart")]
#[command(version, about, long_about = None)]
#[command(author = "Cosmos Quickstart Contributors")]
pub struct Cli {
    /// Path to configuration file (configuration comes from the environment if omitted)
    #[arg(short, long, env = "QUICKSTART_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "QUICKSTART_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upsert the sample product, read it back and query its category
    Run(commands::run::RunArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Log level and logging settings to start with
    ///
    /// Uses the config file's `[application]` and `[logging]` sections when the
    /// file loads; otherwise console-only logging. Load errors are reported by
    /// the command itself.
    pub fn logging_settings(&self) -> (String, LoggingConfig) {
        let loaded = self
            .config
            .as_deref()
            .and_then(|path| load_config(path).ok());

        match loaded {
            Some(config) => (
                self.log_level
                    .clone()
                    .unwrap_or(config.application.log_level),
                config.logging,
            ),
            None => (
                self.log_level.clone().unwrap_or_else(|| "info".to_string()),
                LoggingConfig::default(),
            ),
        }
    }
}
