//! Configuration schema types
//!
//! This module defines the configuration structure for the quickstart.

use crate::config::{secret_string, SecretString};
use crate::domain::errors::QuickstartError;
use crate::domain::item::PartitionKeyPath;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable holding the Cosmos DB endpoint
pub const ENDPOINT_ENV_VAR: &str = "COSMOS_ENDPOINT";

/// Main quickstart configuration
///
/// This is the root configuration structure that maps to the TOML file. It is
/// passed explicitly to the store factory; nothing below it reads the process
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickstartConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Azure Cosmos DB configuration
    pub cosmosdb: CosmosDbConfig,

    /// Sample document and query settings
    #[serde(default)]
    pub sample: SampleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuickstartConfig {
    /// Builds the configuration from the process environment
    ///
    /// `COSMOS_ENDPOINT` is required. Optional variables:
    /// `COSMOS_DATABASE`, `COSMOS_CONTAINER`, `COSMOS_KEY`,
    /// `AZURE_TENANT_ID`, `AZURE_CLIENT_ID`, `AZURE_CLIENT_SECRET`,
    /// `QUICKSTART_LOG_LEVEL`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `COSMOS_ENDPOINT` is missing or the
    /// resulting configuration is invalid. No network call is made.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                QuickstartError::Configuration(format!(
                    "{ENDPOINT_ENV_VAR} environment variable is required"
                ))
            })?;

        let mut config = Self {
            application: ApplicationConfig::default(),
            cosmosdb: CosmosDbConfig {
                endpoint,
                database_name: default_database_name(),
                container_name: default_container_name(),
                partition_key: default_partition_key(),
                verify_connection: true,
                credential: CredentialConfig::from_lookup(&lookup),
            },
            sample: SampleConfig::default(),
            logging: LoggingConfig::default(),
        };
        config.apply_overrides(&lookup);

        config.validate().map_err(|e| {
            QuickstartError::Configuration(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }

    /// Applies `QUICKSTART_LOG_LEVEL` and the `COSMOS_*` location variables
    ///
    /// Unset and blank variables leave the current value alone.
    pub fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(level) = value("QUICKSTART_LOG_LEVEL") {
            self.application.log_level = level.to_lowercase();
        }
        if let Some(endpoint) = value(ENDPOINT_ENV_VAR) {
            self.cosmosdb.endpoint = endpoint;
        }
        if let Some(database) = value("COSMOS_DATABASE") {
            self.cosmosdb.database_name = database;
        }
        if let Some(container) = value("COSMOS_CONTAINER") {
            self.cosmosdb.container_name = container;
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.application.validate()?;
        self.cosmosdb.validate()?;
        self.sample.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Partition key path for the configured container
    pub fn partition_key_path(&self) -> Result<PartitionKeyPath> {
        PartitionKeyPath::new(self.cosmosdb.partition_key.clone())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Azure Cosmos DB configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CosmosDbConfig {
    /// Cosmos DB endpoint URL
    pub endpoint: String,

    /// Database name
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Container name
    #[serde(default = "default_container_name")]
    pub container_name: String,

    /// Partition key path of the container
    #[serde(default = "default_partition_key")]
    pub partition_key: String,

    /// Request a token and read the container when connecting
    #[serde(default = "default_true")]
    pub verify_connection: bool,

    /// How to authenticate
    #[serde(default)]
    pub credential: CredentialConfig,
}

impl CosmosDbConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("cosmosdb.endpoint cannot be empty".to_string());
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("cosmosdb.endpoint is not a valid URL: {e}"))?;
        let is_local = matches!(url.host_str(), Some("localhost") | Some("127.0.0.1"));
        match url.scheme() {
            "https" => {}
            "http" if is_local => {}
            _ => {
                return Err(
                    "cosmosdb.endpoint must start with https:// (http:// is only allowed for localhost)"
                        .to_string(),
                )
            }
        }

        if self.database_name.is_empty() {
            return Err("cosmosdb.database_name cannot be empty".to_string());
        }

        if self.container_name.is_empty() {
            return Err("cosmosdb.container_name cannot be empty".to_string());
        }

        PartitionKeyPath::new(self.partition_key.clone()).map_err(|e| e.to_string())?;

        self.credential.validate()
    }
}

/// Credential source selection
///
/// The default is a chain: the host's managed identity first, then the
/// signed-in Azure CLI.
///
/// ```toml
/// [cosmosdb.credential]
/// kind = "client_secret"
/// tenant_id = "..."
/// client_id = "..."
/// client_secret = "${AZURE_CLIENT_SECRET}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CredentialConfig {
    /// Managed identity, falling back to the Azure CLI
    #[serde(rename = "default")]
    Chained {
        /// Client id of a user-assigned identity
        #[serde(default)]
        client_id: Option<String>,
    },

    /// Managed identity of the host (system-assigned unless `client_id` is set)
    ManagedIdentity {
        /// Client id of a user-assigned identity
        #[serde(default)]
        client_id: Option<String>,
    },

    /// Token from the signed-in Azure CLI
    AzureCli,

    /// Azure AD app registration
    ClientSecret {
        tenant_id: String,
        client_id: String,
        /// Stored securely in memory and automatically zeroized on drop
        client_secret: SecretString,
    },

    /// Account key
    Key {
        /// Stored securely in memory and automatically zeroized on drop
        key: SecretString,
    },
}

impl CredentialConfig {
    /// Picks a credential from `COSMOS_KEY` or the `AZURE_*` variables
    ///
    /// An account key wins, then a complete service principal. Anything else
    /// falls back to the default chain, passing `AZURE_CLIENT_ID` along as a
    /// user-assigned identity.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("COSMOS_KEY") {
            return CredentialConfig::Key {
                key: secret_string(key),
            };
        }

        match (
            lookup("AZURE_TENANT_ID"),
            lookup("AZURE_CLIENT_ID"),
            lookup("AZURE_CLIENT_SECRET"),
        ) {
            (Some(tenant_id), Some(client_id), Some(client_secret)) => {
                CredentialConfig::ClientSecret {
                    tenant_id,
                    client_id,
                    client_secret: secret_string(client_secret),
                }
            }
            (_, client_id, _) => CredentialConfig::Chained { client_id },
        }
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            CredentialConfig::Chained { .. } => "default",
            CredentialConfig::ManagedIdentity { .. } => "managed_identity",
            CredentialConfig::AzureCli => "azure_cli",
            CredentialConfig::ClientSecret { .. } => "client_secret",
            CredentialConfig::Key { .. } => "key",
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        use secrecy::ExposeSecret;

        match self {
            CredentialConfig::Chained { client_id }
            | CredentialConfig::ManagedIdentity { client_id } => {
                if client_id.as_ref().is_some_and(|id| id.is_empty()) {
                    return Err("cosmosdb.credential.client_id cannot be empty".to_string());
                }
            }
            CredentialConfig::AzureCli => {}
            CredentialConfig::ClientSecret {
                tenant_id,
                client_id,
                client_secret,
            } => {
                if tenant_id.is_empty() {
                    return Err("cosmosdb.credential.tenant_id cannot be empty".to_string());
                }
                if client_id.is_empty() {
                    return Err("cosmosdb.credential.client_id cannot be empty".to_string());
                }
                if client_secret.expose_secret().is_empty() {
                    return Err("cosmosdb.credential.client_secret cannot be empty".to_string());
                }
            }
            CredentialConfig::Key { key } => {
                if key.expose_secret().is_empty() {
                    return Err("cosmosdb.credential.key cannot be empty".to_string());
                }
            }
        }
        Ok(())
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        CredentialConfig::Chained { client_id: None }
    }
}

/// Sample document and query settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Id of the sample product (also its partition key value)
    #[serde(default = "default_item_id")]
    pub item_id: String,

    /// Category written to the product and used as the query filter
    #[serde(default = "default_category_name")]
    pub category_name: String,

    /// Run the query across all partitions
    #[serde(default = "default_true")]
    pub cross_partition: bool,
}

impl SampleConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.item_id.trim().is_empty() {
            return Err("sample.item_id cannot be empty".to_string());
        }
        if self.category_name.is_empty() {
            return Err("sample.category_name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            item_id: default_item_id(),
            category_name: default_category_name(),
            cross_partition: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_database_name() -> String {
    "sample".to_string()
}

fn default_container_name() -> String {
    "sample-container".to_string()
}

fn default_partition_key() -> String {
    "/id".to_string()
}

fn default_item_id() -> String {
    "Product1".to_string()
}

fn default_category_name() -> String {
    "electronics".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
