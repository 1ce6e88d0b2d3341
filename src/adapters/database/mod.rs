//! Document store abstraction layer
//!
//! This module provides a trait-based abstraction for document operations,
//! so the quickstart scenario never touches the Cosmos DB SDK directly.

pub mod factory;
pub mod traits;

pub use factory::create_document_store;
pub use traits::{collect_items, DocumentStore, ItemStream};
