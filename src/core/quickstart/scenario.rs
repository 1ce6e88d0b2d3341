//! Quickstart scenario - upsert, point read and query against one container
//!
//! This module drives the sample workflow against any [`DocumentStore`].

use super::report::QuickstartReport;
use crate::adapters::database::traits::{collect_items, DocumentStore};
use crate::config::SampleConfig;
use crate::domain::product::Product;
use crate::domain::query::{PartitionScope, QuerySpec};
use crate::domain::Result;
use std::time::Instant;

/// Query run by the scenario
pub const CATEGORY_QUERY: &str = "SELECT * FROM p WHERE p.categoryName = @categoryName";

/// Name of the query parameter bound to the category
pub const CATEGORY_PARAMETER: &str = "@categoryName";

/// The sample workflow
#[derive(Debug, Clone)]
pub struct QuickstartScenario {
    product: Product,
    cross_partition: bool,
}

impl QuickstartScenario {
    /// Scenario for the given product
    pub fn new(product: Product) -> Self {
        Self {
            product,
            cross_partition: true,
        }
    }

    /// Scenario built from the `[sample]` settings
    pub fn from_config(config: &SampleConfig) -> Self {
        let product = Product {
            id: config.item_id.clone(),
            category_name: config.category_name.clone(),
            ..Product::sample()
        };

        Self {
            product,
            cross_partition: config.cross_partition,
        }
    }

    /// Restrict the query to the product's own partition
    pub fn with_cross_partition(mut self, cross_partition: bool) -> Self {
        self.cross_partition = cross_partition;
        self
    }

    /// The product written by the scenario
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The category query with its parameter bound
    pub fn query(&self) -> QuerySpec {
        QuerySpec::new(CATEGORY_QUERY)
            .with_parameter(CATEGORY_PARAMETER, self.product.category_name.clone())
    }

    /// Run the scenario
    ///
    /// Each request is awaited before the next starts. The first failure is
    /// returned as is.
    pub async fn run(&self, store: &dyn DocumentStore) -> Result<QuickstartReport> {
        let start_time = Instant::now();

        tracing::info!(
            database = %store.database_name(),
            container = %store.container_name(),
            id = %self.product.id,
            "Starting quickstart"
        );

        let item = self.product.to_item()?;
        let partition_key = item.partition_key(store.partition_key_path())?;

        store.upsert_item(&item).await?;
        tracing::info!(id = %self.product.id, "Upserted item");

        let point_read = store.read_item(&self.product.id, &partition_key).await?;
        tracing::info!(id = %self.product.id, partition_key = %partition_key, "Point read item");

        let scope = PartitionScope::from_flag(self.cross_partition, Some(partition_key))?;
        let results = collect_items(store.query_items(&self.query(), scope).await?).await?;
        tracing::info!(
            category = %self.product.category_name,
            count = results.len(),
            "Query completed"
        );

        Ok(QuickstartReport::new(point_read, results).with_duration(start_time.elapsed()))
    }
}

impl Default for QuickstartScenario {
    fn default() -> Self {
        Self::new(Product::sample())
    }
}
