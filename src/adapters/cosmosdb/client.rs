//! Cosmos DB client implementation
//!
//! This module provides the client for one container in Azure Cosmos DB.

use super::credential::{request_token, token_scope, CosmosAuth, CredentialSource};
use crate::adapters::database::traits::ItemStream;
use crate::config::CosmosDbConfig;
use crate::domain::item::{Item, PartitionKeyPath};
use crate::domain::query::{PartitionScope, QuerySpec};
use crate::domain::{classify_azure_error, QuickstartError, RequestKind, Result};
use azure_core::credentials::Secret;
use azure_data_cosmos::clients::ContainerClient;
use azure_data_cosmos::{CosmosClient, CosmosClientOptions, PartitionKey, Query};
use futures::stream::StreamExt;

/// Cosmos DB client scoped to one database and one container
///
/// Created once and reused for every request. Dropping it is the only
/// teardown.
pub struct CosmosDbClient {
    /// Container client
    container: ContainerClient,

    /// Partition key path of the container
    partition_key: PartitionKeyPath,

    /// Configuration
    config: CosmosDbConfig,
}

impl CosmosDbClient {
    /// Connect to Cosmos DB
    ///
    /// Resolves the credential, builds the SDK client and derives the database
    /// and container handles. With `verify_connection` enabled one token is
    /// requested and the container is read before returning.
    ///
    /// # Arguments
    ///
    /// * `config` - Cosmos DB configuration
    /// * `source` - Where the credential comes from
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the credential cannot produce a
    /// valid token, and a connection error if the endpoint is unreachable or
    /// the container does not exist.
    pub async fn connect(config: CosmosDbConfig, source: &dyn CredentialSource) -> Result<Self> {
        let partition_key = PartitionKeyPath::new(config.partition_key.clone())?;
        let scope = token_scope(&config.endpoint)?;
        let options = Some(CosmosClientOptions::default());

        tracing::debug!(
            endpoint = %config.endpoint,
            credential = source.kind(),
            "Acquiring credential"
        );

        let client = match source.acquire(&scope).await? {
            CosmosAuth::Token(credential) => {
                if config.verify_connection {
                    request_token(credential.as_ref(), &scope).await?;
                }
                CosmosClient::new(&config.endpoint, credential, options).map_err(|e| {
                    classify_azure_error(&e, RequestKind::Connect, "Failed to create Cosmos client")
                })?
            }
            CosmosAuth::Key(key) => {
                use secrecy::ExposeSecret;

                let key_str: String = key.expose_secret().clone().into();
                CosmosClient::with_key(&config.endpoint, Secret::new(key_str), options).map_err(
                    |e| {
                        classify_azure_error(
                            &e,
                            RequestKind::Connect,
                            "Failed to create Cosmos client",
                        )
                    },
                )?
            }
        };

        let container = client
            .database_client(&config.database_name)
            .container_client(&config.container_name);

        let this = Self {
            container,
            partition_key,
            config,
        };

        if this.config.verify_connection {
            this.test_connection().await?;
        }

        tracing::info!(
            endpoint = %this.config.endpoint,
            database = %this.config.database_name,
            container = %this.config.container_name,
            "Connected to Cosmos DB"
        );

        Ok(this)
    }

    /// Test the connection to Cosmos DB
    ///
    /// Reads the container properties, which fails if the account, database
    /// or container is missing.
    pub async fn test_connection(&self) -> Result<()> {
        self.container.read(None).await.map_err(|e| {
            classify_azure_error(&e, RequestKind::Connect, "Connection test failed")
        })?;

        Ok(())
    }

    /// Insert or replace a document
    pub async fn upsert_item(&self, item: &Item) -> Result<()> {
        let id = item.require_id()?;
        let partition_key = item.partition_key(&self.partition_key)?;

        tracing::debug!(id = %id, partition_key = %partition_key, "Upserting item");

        self.container
            .upsert_item(PartitionKey::from(partition_key), item, None)
            .await
            .map_err(|e| {
                classify_azure_error(&e, RequestKind::Write, &format!("Failed to upsert item {id}"))
            })?;

        Ok(())
    }

    /// Point read by id and partition key
    pub async fn read_item(&self, id: &str, partition_key: &str) -> Result<Item> {
        tracing::debug!(id = %id, partition_key = %partition_key, "Reading item");

        let response = self
            .container
            .read_item::<Item>(PartitionKey::from(partition_key.to_string()), id, None)
            .await
            .map_err(|e| {
                classify_azure_error(
                    &e,
                    RequestKind::Read,
                    &format!("Failed to read item {id} (partition key {partition_key})"),
                )
            })?;

        response.into_body().map_err(|e| {
            QuickstartError::Serialization(format!("Failed to deserialize item {id}: {e}"))
        })
    }

    /// Start a query; results are fetched page by page as the stream is polled
    pub fn query_items(&self, query: &QuerySpec, scope: PartitionScope) -> Result<ItemStream> {
        query.validate()?;

        let mut cosmos_query = Query::from(query.text.clone());
        for param in &query.parameters {
            cosmos_query = cosmos_query
                .with_parameter(param.name.clone(), param.value.clone())
                .map_err(|e| {
                    QuickstartError::Serialization(format!(
                        "Failed to bind query parameter {}: {e}",
                        param.name
                    ))
                })?;
        }

        tracing::debug!(query = %query.text, params = query.parameters.len(), "Running query");

        // `()` selects a cross-partition query
        let pager = match scope {
            PartitionScope::Single(value) => self.container.query_items::<Item>(
                cosmos_query,
                PartitionKey::from(value),
                None,
            ),
            PartitionScope::CrossPartition => {
                self.container.query_items::<Item>(cosmos_query, (), None)
            }
        }
        .map_err(|e| classify_azure_error(&e, RequestKind::Query, "Failed to create query"))?;

        Ok(pager
            .map(|page_item| {
                page_item.map_err(|e| {
                    classify_azure_error(&e, RequestKind::Query, "Failed to fetch query results")
                })
            })
            .boxed())
    }

    /// Get the database name
    pub fn database_name(&self) -> &str {
        &self.config.database_name
    }

    /// Get the container name
    pub fn container_name(&self) -> &str {
        &self.config.container_name
    }

    /// Get the partition key path
    pub fn partition_key_path(&self) -> &PartitionKeyPath {
        &self.partition_key
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}
