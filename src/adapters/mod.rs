//! Document store backends.
//!
//! - [`database`] - The [`DocumentStore`](database::DocumentStore) trait and the backend factory
//! - [`cosmosdb`] - Azure Cosmos DB implementation
//!
//! # Design Pattern
//!
//! The quickstart scenario only sees the trait, so tests can run it against
//! an in-process store.
//!
//! # Cosmos DB Adapter
//!
//! ```rust,no_run
//! use cosmos_quickstart::adapters::cosmosdb::{AzureCliSource, CosmosDbClient};
//! use cosmos_quickstart::config::{CosmosDbConfig, CredentialConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CosmosDbConfig {
//!     endpoint: "https://account.documents.azure.com:443/".to_string(),
//!     database_name: "sample".to_string(),
//!     container_name: "sample-container".to_string(),
//!     partition_key: "/id".to_string(),
//!     verify_connection: true,
//!     credential: CredentialConfig::AzureCli,
//! };
//!
//! let client = CosmosDbClient::connect(config, &AzureCliSource).await?;
//! let item = client.read_item("Product1", "Product1").await?;
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod database;
