//! Configuration management for the quickstart.
//!
//! # Overview
//!
//! Configuration comes from one of two places:
//! - the environment, via [`QuickstartConfig::from_env`] (`COSMOS_ENDPOINT` is required)
//! - a TOML file, via [`load_config`], with `${VAR_NAME}` substitution
//!
//! Either way the result is an explicit [`QuickstartConfig`] that is handed to
//! the store factory.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cosmos_quickstart::config::QuickstartConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = QuickstartConfig::from_env()?;
//! println!(
//!     "Cosmos DB: {} / {}",
//!     config.cosmosdb.database_name, config.cosmosdb.container_name
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cosmosdb]
//! endpoint = "${COSMOS_ENDPOINT}"
//! database_name = "sample"
//! container_name = "sample-container"
//!
//! [cosmosdb.credential]
//! kind = "default"
//!
//! [sample]
//! item_id = "Product1"
//! category_name = "electronics"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_with};
pub use schema::{
    ApplicationConfig, CosmosDbConfig, CredentialConfig, LoggingConfig, QuickstartConfig,
    SampleConfig, ENDPOINT_ENV_VAR,
};
pub use secret::{secret_string, SecretString, SecretValue};
