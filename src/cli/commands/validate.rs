//! Validate config command implementation
//!
//! This module implements the `validate-config` command for checking the
//! configuration without contacting Cosmos DB.

use super::resolve_config;
use crate::config::QuickstartConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("environment");
        tracing::info!(source = %source, "Validating configuration");

        println!("🔍 Validating configuration from: {source}");
        println!();

        let config = match resolve_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(e.exit_code());
            }
        };

        println!();
        for line in Self::summary(&config) {
            println!("{line}");
        }
        println!();
        Ok(0)
    }

    fn summary(config: &QuickstartConfig) -> Vec<String> {
        let mut lines = vec![
            "Configuration Summary:".to_string(),
            format!("  Log Level: {}", config.application.log_level),
            format!("  Cosmos DB Endpoint: {}", config.cosmosdb.endpoint),
            format!("  Cosmos DB Database: {}", config.cosmosdb.database_name),
            format!("  Cosmos DB Container: {}", config.cosmosdb.container_name),
            format!("  Partition Key: {}", config.cosmosdb.partition_key),
            format!("  Credential: {}", config.cosmosdb.credential.kind()),
        ];

        lines.push(format!("  Sample Item: {}", config.sample.item_id));
        lines.push(format!("  Sample Category: {}", config.sample.category_name));
        lines.push(format!(
            "  Cross-partition Query: {}",
            config.sample.cross_partition
        ));
        lines
    }
}
