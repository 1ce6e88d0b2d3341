//! Document store abstraction
//!
//! This module defines the trait the Cosmos DB adapter implements.

use crate::domain::item::{Item, PartitionKeyPath};
use crate::domain::query::{PartitionScope, QuerySpec};
use crate::domain::Result;
use async_trait::async_trait;
use futures::stream::{BoxStream, TryStreamExt};

/// Lazy sequence of query results
///
/// Finite and consumed once: the stream is taken by value and cannot be
/// rewound. Each element is fetched from the backend as the stream is polled.
pub type ItemStream = BoxStream<'static, Result<Item>>;

/// Access to one container in one database
///
/// Operations are independent requests; implementations hold no state between
/// calls beyond their connection configuration.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert the item, or replace the stored document with the same id and
    /// partition key
    ///
    /// # Errors
    ///
    /// Returns a validation error if `id` or the partition key field is
    /// missing, and a service error if the backend rejects the write.
    async fn upsert_item(&self, item: &Item) -> Result<()>;

    /// Point read by id and partition key value
    ///
    /// # Errors
    ///
    /// Returns [`QuickstartError::NotFound`](crate::domain::QuickstartError::NotFound)
    /// if no document matches.
    async fn read_item(&self, id: &str, partition_key: &str) -> Result<Item>;

    /// Run a parameterized query against one or all partitions
    ///
    /// A query that matches nothing yields an empty stream, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`QuickstartError::QuerySyntax`](crate::domain::QuickstartError::QuerySyntax)
    /// for malformed query text. Errors on individual pages surface as stream items.
    async fn query_items(&self, query: &QuerySpec, scope: PartitionScope) -> Result<ItemStream>;

    /// Database name
    fn database_name(&self) -> &str;

    /// Container name
    fn container_name(&self) -> &str;

    /// Partition key path of the container
    fn partition_key_path(&self) -> &PartitionKeyPath;
}

/// Drains a query stream into a vector, stopping at the first error
pub async fn collect_items(stream: ItemStream) -> Result<Vec<Item>> {
    stream.try_collect().await
}
