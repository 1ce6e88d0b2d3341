//! Credential sources for Cosmos DB
//!
//! The client is polymorphic over [`CredentialSource`]. A source is asked once
//! for a [`CosmosAuth`], which the client keeps for every request. Token
//! refresh is handled by the Azure identity crate.
//!
//! [`ChainedSource`] tries several sources in order and keeps the first one
//! that yields a working credential. The default chain is the host's managed
//! identity followed by the Azure CLI.

use crate::config::{CredentialConfig, SecretString};
use crate::domain::{classify_azure_error, QuickstartError, RequestKind, Result};
use azure_core::credentials::TokenCredential;
use async_trait::async_trait;
use azure_identity::{
    AzureCliCredential, ClientSecretCredential, ManagedIdentityCredential,
    ManagedIdentityCredentialOptions, UserAssignedId,
};
use std::sync::Arc;
use url::Url;

/// Authentication material handed to the Cosmos client
pub enum CosmosAuth {
    /// Azure AD token credential
    Token(Arc<dyn TokenCredential>),

    /// Account key
    Key(SecretString),
}

impl std::fmt::Debug for CosmosAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CosmosAuth::Token(_) => f.write_str("CosmosAuth::Token(..)"),
            CosmosAuth::Key(_) => f.write_str("CosmosAuth::Key([REDACTED])"),
        }
    }
}

/// Something that can produce Cosmos DB authentication
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Short name used in logs
    fn kind(&self) -> &'static str;

    /// Builds the credential for the given AAD scope
    ///
    /// Single sources only construct the credential. The scope matters to
    /// sources that must check a token is obtainable before answering.
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the identity crate rejects the
    /// settings.
    async fn acquire(&self, scope: &str) -> Result<CosmosAuth>;
}

/// Managed identity of the host
#[derive(Debug, Clone, Default)]
pub struct ManagedIdentitySource {
    /// Client id of a user-assigned identity; system-assigned when `None`
    pub client_id: Option<String>,
}

#[async_trait]
impl CredentialSource for ManagedIdentitySource {
    fn kind(&self) -> &'static str {
        "managed_identity"
    }

    async fn acquire(&self, _scope: &str) -> Result<CosmosAuth> {
        let options = self
            .client_id
            .clone()
            .map(|id| ManagedIdentityCredentialOptions {
                user_assigned_id: Some(UserAssignedId::ClientId(id)),
                ..Default::default()
            });

        let credential = ManagedIdentityCredential::new(options).map_err(|e| {
            classify_azure_error(
                &e,
                RequestKind::Connect,
                "Failed to create managed identity credential",
            )
        })?;

        Ok(CosmosAuth::Token(credential))
    }
}

/// Token from the signed-in Azure CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct AzureCliSource;

#[async_trait]
impl CredentialSource for AzureCliSource {
    fn kind(&self) -> &'static str {
        "azure_cli"
    }

    async fn acquire(&self, _scope: &str) -> Result<CosmosAuth> {
        let credential = AzureCliCredential::new(None).map_err(|e| {
            classify_azure_error(&e, RequestKind::Connect, "Failed to create Azure CLI credential")
        })?;

        Ok(CosmosAuth::Token(credential))
    }
}

/// Azure AD app registration with a client secret
#[derive(Debug, Clone)]
pub struct ClientSecretSource {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
}

#[async_trait]
impl CredentialSource for ClientSecretSource {
    fn kind(&self) -> &'static str {
        "client_secret"
    }

    async fn acquire(&self, _scope: &str) -> Result<CosmosAuth> {
        use secrecy::ExposeSecret;

        let secret_str: String = self.client_secret.expose_secret().clone().into();
        let secret = azure_core::credentials::Secret::new(secret_str);

        let credential =
            ClientSecretCredential::new(&self.tenant_id, self.client_id.clone(), secret, None)
                .map_err(|e| {
                    QuickstartError::Authentication(format!(
                        "Failed to create Azure AD credential: {e}"
                    ))
                })?;

        Ok(CosmosAuth::Token(credential))
    }
}

/// Cosmos DB account key
#[derive(Debug, Clone)]
pub struct KeySource {
    pub key: SecretString,
}

#[async_trait]
impl CredentialSource for KeySource {
    fn kind(&self) -> &'static str {
        "key"
    }

    async fn acquire(&self, _scope: &str) -> Result<CosmosAuth> {
        Ok(CosmosAuth::Key(self.key.clone()))
    }
}

/// Ordered list of sources; the first that works wins
pub struct ChainedSource {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl ChainedSource {
    /// Chain over the given sources, tried in order
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// Managed identity, then the Azure CLI
    pub fn default_chain(client_id: Option<String>) -> Self {
        let sources: Vec<Box<dyn CredentialSource>> = vec![
            Box::new(ManagedIdentitySource { client_id }),
            Box::new(AzureCliSource),
        ];
        Self::new(sources)
    }

    /// Kinds of the chained sources, in the order they are tried
    pub fn kinds(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.kind()).collect()
    }
}

#[async_trait]
impl CredentialSource for ChainedSource {
    fn kind(&self) -> &'static str {
        "default"
    }

    async fn acquire(&self, scope: &str) -> Result<CosmosAuth> {
        let mut failures = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let outcome = match source.acquire(scope).await {
                Ok(CosmosAuth::Token(credential)) => {
                    match request_token(credential.as_ref(), scope).await {
                        Ok(()) => Ok(CosmosAuth::Token(credential)),
                        Err(e) => Err(e),
                    }
                }
                other => other,
            };

            match outcome {
                Ok(auth) => {
                    tracing::debug!(credential = source.kind(), "Credential chain resolved");
                    return Ok(auth);
                }
                Err(e) => {
                    tracing::debug!(
                        credential = source.kind(),
                        error = %e,
                        "Credential source unavailable, trying next"
                    );
                    failures.push(format!("{}: {e}", source.kind()));
                }
            }
        }

        Err(QuickstartError::Authentication(format!(
            "No credential in the chain could authenticate ({})",
            failures.join("; ")
        )))
    }
}

/// Requests one token so credential failures surface before any document call
pub(crate) async fn request_token(credential: &dyn TokenCredential, scope: &str) -> Result<()> {
    credential
        .get_token(&[scope], None)
        .await
        .map_err(|e| QuickstartError::Authentication(format!("Failed to acquire token: {e}")))?;

    tracing::debug!(scope = %scope, "Credential produced a token");
    Ok(())
}

/// Builds the credential source selected in configuration
pub fn credential_source_from_config(config: &CredentialConfig) -> Box<dyn CredentialSource> {
    match config {
        CredentialConfig::Chained { client_id } => {
            Box::new(ChainedSource::default_chain(client_id.clone()))
        }
        CredentialConfig::ManagedIdentity { client_id } => Box::new(ManagedIdentitySource {
            client_id: client_id.clone(),
        }),
        CredentialConfig::AzureCli => Box::new(AzureCliSource),
        CredentialConfig::ClientSecret {
            tenant_id,
            client_id,
            client_secret,
        } => Box::new(ClientSecretSource {
            tenant_id: tenant_id.clone(),
            client_id: client_id.clone(),
            client_secret: client_secret.clone(),
        }),
        CredentialConfig::Key { key } => Box::new(KeySource { key: key.clone() }),
    }
}

/// AAD scope for a Cosmos DB account, e.g. `https://acct.documents.azure.com/.default`
///
/// # Errors
///
/// Returns a configuration error if the endpoint is not a URL with a host.
pub fn token_scope(endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint).map_err(|e| {
        QuickstartError::Configuration(format!("Invalid Cosmos DB endpoint '{endpoint}': {e}"))
    })?;
    let host = url.host_str().ok_or_else(|| {
        QuickstartError::Configuration(format!("Cosmos DB endpoint '{endpoint}' has no host"))
    })?;

    Ok(format!("{}://{}/.default", url.scheme(), host))
}
