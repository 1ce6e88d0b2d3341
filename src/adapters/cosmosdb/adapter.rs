//! CosmosDB adapter implementing the document store trait

use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::database::traits::{DocumentStore, ItemStream};
use crate::domain::item::{Item, PartitionKeyPath};
use crate::domain::query::{PartitionScope, QuerySpec};
use crate::domain::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// CosmosDB implementation of [`DocumentStore`]
///
/// This wraps the CosmosDbClient and implements the DocumentStore trait.
pub struct CosmosDbAdapter {
    client: Arc<CosmosDbClient>,
}

impl CosmosDbAdapter {
    /// Create a new CosmosDB adapter
    pub fn new(client: CosmosDbClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl DocumentStore for CosmosDbAdapter {
    async fn upsert_item(&self, item: &Item) -> Result<()> {
        self.client.upsert_item(item).await
    }

    async fn read_item(&self, id: &str, partition_key: &str) -> Result<Item> {
        self.client.read_item(id, partition_key).await
    }

    async fn query_items(&self, query: &QuerySpec, scope: PartitionScope) -> Result<ItemStream> {
        self.client.query_items(query, scope)
    }

    fn database_name(&self) -> &str {
        self.client.database_name()
    }

    fn container_name(&self) -> &str {
        self.client.container_name()
    }

    fn partition_key_path(&self) -> &PartitionKeyPath {
        self.client.partition_key_path()
    }
}
