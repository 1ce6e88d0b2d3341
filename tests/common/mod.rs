//! Common test utilities: an in-process document store.
//!
//! Documents are keyed by (partition key, id). Queries are answered by a
//! closure over the bound parameters instead of interpreting the query text.

#![allow(dead_code)]

use async_trait::async_trait;
use cosmos_quickstart::adapters::database::{DocumentStore, ItemStream};
use cosmos_quickstart::domain::{Item, PartitionKeyPath, PartitionScope, QuerySpec, QuickstartError};
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Decides whether a stored item answers a query
pub type QueryPredicate = Box<dyn Fn(&QuerySpec, &Item) -> bool + Send + Sync>;

/// Matches items whose top-level fields equal every bound parameter, with the
/// `@` dropped from the parameter name. A query without parameters matches all.
pub fn fields_equal_parameters() -> QueryPredicate {
    Box::new(|query, item| {
        query
            .parameters
            .iter()
            .all(|param| item.get(param.name.trim_start_matches('@')) == Some(&param.value))
    })
}

pub struct TestStore {
    partition_key: PartitionKeyPath,
    documents: Mutex<BTreeMap<(String, String), Item>>,
    predicate: QueryPredicate,
}

impl TestStore {
    pub fn new(partition_key: PartitionKeyPath) -> Self {
        Self {
            partition_key,
            documents: Mutex::new(BTreeMap::new()),
            predicate: fields_equal_parameters(),
        }
    }

    pub fn with_predicate(
        mut self,
        predicate: impl Fn(&QuerySpec, &Item) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.predicate = Box::new(predicate);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new(PartitionKeyPath::id())
    }
}

#[async_trait]
impl DocumentStore for TestStore {
    async fn upsert_item(&self, item: &Item) -> cosmos_quickstart::domain::Result<()> {
        let id = item.require_id()?.to_string();
        let partition_key = item.partition_key(&self.partition_key)?;
        self.documents
            .lock()
            .unwrap()
            .insert((partition_key, id), item.clone());
        Ok(())
    }

    async fn read_item(&self, id: &str, partition_key: &str) -> cosmos_quickstart::domain::Result<Item> {
        self.documents
            .lock()
            .unwrap()
            .get(&(partition_key.to_string(), id.to_string()))
            .cloned()
            .ok_or_else(|| QuickstartError::NotFound(format!("{id} (partition key {partition_key})")))
    }

    async fn query_items(
        &self,
        query: &QuerySpec,
        scope: PartitionScope,
    ) -> cosmos_quickstart::domain::Result<ItemStream> {
        query.validate()?;

        let matches: Vec<Item> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|((pk, _), _)| match &scope {
                PartitionScope::Single(wanted) => pk == wanted,
                PartitionScope::CrossPartition => true,
            })
            .filter(|(_, item)| (self.predicate)(query, item))
            .map(|(_, item)| item.clone())
            .collect();

        Ok(stream::iter(matches.into_iter().map(Ok)).boxed())
    }

    fn database_name(&self) -> &str {
        "sample"
    }

    fn container_name(&self) -> &str {
        "sample-container"
    }

    fn partition_key_path(&self) -> &PartitionKeyPath {
        &self.partition_key
    }
}
