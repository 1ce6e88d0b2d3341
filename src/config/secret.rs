//! Account keys and client secrets held in memory
//!
//! Cosmos DB account keys and Azure AD client secrets are wrapped in
//! `secrecy::Secret`, which redacts them from `Debug` output and zeroes the
//! buffer on drop. Call `expose_secret()` only at the point where the value
//! is handed to the Azure SDK.
//!
//! ```rust
//! use cosmos_quickstart::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("account-key".to_string());
//! assert_eq!(key.expose_secret().as_ref(), "account-key");
//! assert!(!format!("{key:?}").contains("account-key"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload of a [`SecretString`]
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl SecretValue {
    /// Returns true if the secret is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A redacted, zeroize-on-drop string
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
