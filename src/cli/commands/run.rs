//! Run command implementation
//!
//! This module implements the `run` command: connect, upsert the sample
//! product, point read it and query its category.

use super::resolve_config;
use crate::adapters::database::create_document_store;
use crate::config::QuickstartConfig;
use crate::core::quickstart::QuickstartScenario;
use crate::domain::Result;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Override the sample item id (also its partition key value)
    #[arg(long)]
    pub item_id: Option<String>,

    /// Override the category written to the item and queried for
    #[arg(long)]
    pub category: Option<String>,

    /// Only query the sample item's own partition
    #[arg(long)]
    pub single_partition: bool,
}

impl RunArgs {
    /// Execute the run command
    ///
    /// Prints the report to stdout and returns the process exit code.
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        let config = match resolve_config(config_path).and_then(|c| self.apply(c)) {
            Ok(config) => config,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("❌ {e}");
                return Ok(e.exit_code());
            }
        };

        match self.run(&config).await {
            Ok(output) => {
                println!("{output}");
                Ok(0)
            }
            Err(e) => {
                log_error_with_context!(&e, "Quickstart failed");
                eprintln!("❌ {e}");
                Ok(e.exit_code())
            }
        }
    }

    /// Applies CLI overrides and revalidates
    fn apply(&self, mut config: QuickstartConfig) -> Result<QuickstartConfig> {
        if let Some(ref item_id) = self.item_id {
            tracing::info!(item_id = %item_id, "Overriding item id from CLI");
            config.sample.item_id = item_id.clone();
        }

        if let Some(ref category) = self.category {
            tracing::info!(category = %category, "Overriding category from CLI");
            config.sample.category_name = category.clone();
        }

        if self.single_partition {
            config.sample.cross_partition = false;
        }

        config.validate().map_err(|e| {
            crate::domain::QuickstartError::Configuration(format!(
                "Configuration validation failed: {e}"
            ))
        })?;

        Ok(config)
    }

    async fn run(&self, config: &QuickstartConfig) -> Result<String> {
        let store = create_document_store(config).await?;
        let report = QuickstartScenario::from_config(&config.sample)
            .run(store.as_ref())
            .await?;

        tracing::info!(
            results = report.results.len(),
            duration_ms = report.duration.as_millis() as u64,
            "Quickstart completed"
        );

        report.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuickstartError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn base_config() -> QuickstartConfig {
        QuickstartConfig::from_lookup(|name| {
            (name == "COSMOS_ENDPOINT").then(|| "https://acct.documents.azure.com:443/".to_string())
        })
        .unwrap()
    }

    #[test]
    fn test_apply_overrides() {
        let args = RunArgs {
            item_id: Some("Product9".to_string()),
            category: Some("gear".to_string()),
            single_partition: true,
        };
        let config = args.apply(base_config()).unwrap();

        assert_eq!(config.sample.item_id, "Product9");
        assert_eq!(config.sample.category_name, "gear");
        assert!(!config.sample.cross_partition);
        assert_eq!(config.cosmosdb.database_name, "sample");
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let config = RunArgs::default().apply(base_config()).unwrap();
        assert_eq!(config.sample.item_id, "Product1");
        assert!(config.sample.cross_partition);
    }

    #[test]
    fn test_apply_rejects_blank_item_id() {
        let args = RunArgs {
            item_id: Some("  ".to_string()),
            ..Default::default()
        };
        let result = args.apply(base_config());
        assert!(matches!(result, Err(QuickstartError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_execute_missing_config_file_exits_with_configuration_code() {
        let code = RunArgs::default()
            .execute(Some("/nonexistent/quickstart.toml"))
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_execute_invalid_config_file_exits_before_connecting() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[cosmosdb]\nendpoint = \"https://acct.documents.azure.com:443/\"\n\n[sample]\nitem_id = \" \"\n",
        )
        .unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let code = RunArgs::default().execute(Some(&path)).await.unwrap();
        assert_eq!(code, 2);
    }
}
