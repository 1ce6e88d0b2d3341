//! Document store factory
//!
//! This module provides the factory function that creates a document store
//! based on configuration.

use crate::adapters::cosmosdb::adapter::CosmosDbAdapter;
use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::cosmosdb::credential::credential_source_from_config;
use crate::adapters::database::traits::DocumentStore;
use crate::config::schema::QuickstartConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create a document store based on the configuration
///
/// Connects to Cosmos DB with the configured credential and, if
/// `verify_connection` is set, checks the credential and container.
///
/// # Errors
///
/// Returns authentication or connection errors from connecting to Cosmos DB.
pub async fn create_document_store(config: &QuickstartConfig) -> Result<Arc<dyn DocumentStore>> {
    let cosmos_config = &config.cosmosdb;

    let source = credential_source_from_config(&cosmos_config.credential);
    tracing::info!(credential = source.kind(), "Creating CosmosDB document store");

    let client = CosmosDbClient::connect(cosmos_config.clone(), source.as_ref()).await?;
    Ok(Arc::new(CosmosDbAdapter::new(client)) as Arc<dyn DocumentStore>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{secret_string, CredentialConfig};
    use crate::domain::QuickstartError;

    fn key_config() -> QuickstartConfig {
        let mut config = QuickstartConfig::from_lookup(|name| match name {
            "COSMOS_ENDPOINT" => Some("https://test.documents.azure.com:443/".to_string()),
            "COSMOS_CONTAINER" => Some("products".to_string()),
            _ => None,
        })
        .unwrap();
        config.cosmosdb.verify_connection = false;
        config.cosmosdb.credential = CredentialConfig::Key {
            key: secret_string("dGVzdC1rZXk=".to_string()),
        };
        config
    }

    #[tokio::test]
    async fn test_create_store_from_config() {
        let store = create_document_store(&key_config()).await.unwrap();
        assert_eq!(store.database_name(), "sample");
        assert_eq!(store.container_name(), "products");
        assert_eq!(store.partition_key_path().as_str(), "/id");
    }

    #[tokio::test]
    async fn test_invalid_partition_key_is_rejected() {
        let mut config = key_config();
        config.cosmosdb.partition_key = "id".to_string();
        let result = create_document_store(&config).await;
        assert!(matches!(result, Err(QuickstartError::Configuration(_))));
    }
}
