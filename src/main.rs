// Cosmos Quickstart - Azure Cosmos DB document store quickstart
// Copyright (c) 2025 Cosmos Quickstart Contributors
// Licensed under the MIT License

use clap::Parser;
use cosmos_quickstart::cli::{Cli, Commands};
use cosmos_quickstart::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let (log_level, logging_config) = cli.logging_settings();
    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Cosmos Quickstart"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Run(args) => args.execute(config_path).await,
        Commands::ValidateConfig(args) => args.execute(config_path).await,
        Commands::Init(args) => args.execute().await,
    }
}
