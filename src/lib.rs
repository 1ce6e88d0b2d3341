// Cosmos Quickstart - Azure Cosmos DB document store quickstart
// Copyright (c) 2025 Cosmos Quickstart Contributors
// Licensed under the MIT License

//! # Cosmos Quickstart
//!
//! A thin facade over one Azure Cosmos DB container: connect with an Azure
//! identity (or an account key), upsert a document, point read it back by id
//! and partition key, and run a parameterized query.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The quickstart scenario and its report
//! - [`adapters`] - The document store trait and its Cosmos DB implementation
//! - [`domain`] - Items, queries, the sample product and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cosmos_quickstart::adapters::database::create_document_store;
//! use cosmos_quickstart::config::QuickstartConfig;
//! use cosmos_quickstart::core::quickstart::QuickstartScenario;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // COSMOS_ENDPOINT is required
//!     let config = QuickstartConfig::from_env()?;
//!     let store = create_document_store(&config).await?;
//!
//!     let report = QuickstartScenario::default().run(store.as_ref()).await?;
//!     println!("{}", report.render()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Documents and queries
//!
//! ```rust,no_run
//! use cosmos_quickstart::adapters::database::{collect_items, DocumentStore};
//! use cosmos_quickstart::domain::{PartitionScope, Product, QuerySpec};
//!
//! # async fn example(store: &dyn DocumentStore) -> cosmos_quickstart::domain::Result<()> {
//! store.upsert_item(&Product::sample().to_item()?).await?;
//! let item = store.read_item("Product1", "Product1").await?;
//!
//! let query = QuerySpec::new("SELECT * FROM p WHERE p.categoryName = @categoryName")
//!     .with_parameter("@categoryName", "electronics");
//! let items = collect_items(store.query_items(&query, PartitionScope::CrossPartition).await?).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::QuickstartError`]. The CLI maps
//! each variant to a process exit code with [`domain::QuickstartError::exit_code`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
