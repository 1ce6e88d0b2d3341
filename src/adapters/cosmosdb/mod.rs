//! Azure Cosmos DB integration
//!
//! This module provides the Cosmos DB backend of the document store:
//! credential sources, the SDK client wrapper and the trait adapter.

pub mod adapter;
pub mod client;
pub mod credential;

pub use adapter::CosmosDbAdapter;
pub use client::CosmosDbClient;
pub use credential::{
    credential_source_from_config, AzureCliSource, ChainedSource, ClientSecretSource,
    CosmosAuth, CredentialSource, KeySource, ManagedIdentitySource,
};
