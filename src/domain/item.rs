//! Document items and partition key paths
//!
//! An [`Item`] is a JSON object with a required string `id`. The partition key
//! is read from the item through a [`PartitionKeyPath`] such as `/id`.

use super::errors::QuickstartError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A document stored in a container
///
/// Wraps a JSON object. Field values are arbitrary JSON. The `id` field must be
/// a non-empty string before the item can be written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Creates an item from any JSON value
    ///
    /// # Errors
    ///
    /// Returns a validation error if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(QuickstartError::Validation(format!(
                "Item must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Returns the document id, if present and a string
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Returns the document id or a validation error
    ///
    /// # Errors
    ///
    /// Fails if `id` is missing, not a string, or blank.
    pub fn require_id(&self) -> Result<&str> {
        match self.0.get("id") {
            None => Err(QuickstartError::Validation(
                "Item is missing required field 'id'".to_string(),
            )),
            Some(Value::String(id)) if !id.trim().is_empty() => Ok(id),
            Some(Value::String(_)) => Err(QuickstartError::Validation(
                "Item field 'id' cannot be empty".to_string(),
            )),
            Some(other) => Err(QuickstartError::Validation(format!(
                "Item field 'id' must be a string, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Extracts the partition key value for this item
    ///
    /// # Errors
    ///
    /// Fails if the field at `path` is missing or not a non-empty string.
    pub fn partition_key(&self, path: &PartitionKeyPath) -> Result<String> {
        match self.get_path(path.segments()) {
            Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
            Some(other) => Err(QuickstartError::Validation(format!(
                "Partition key '{path}' must be a non-empty string, got {}",
                json_type_name(other)
            ))),
            None => Err(QuickstartError::Validation(format!(
                "Item is missing partition key field '{path}'"
            ))),
        }
    }

    /// Looks up a nested field by path segments
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.0.get(first.as_ref())?;
        for segment in rest {
            current = current.as_object()?.get(segment.as_ref())?;
        }
        Some(current)
    }

    /// Returns a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Consumes the item and returns it as a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Item {
    type Error = QuickstartError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Path of the partition key field inside an item, e.g. `/id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKeyPath {
    raw: String,
    segments: Vec<String>,
}

impl PartitionKeyPath {
    /// Parses a partition key path
    ///
    /// # Errors
    ///
    /// Fails unless the path starts with `/` and has no empty segments.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let raw = path.into();
        let Some(stripped) = raw.strip_prefix('/') else {
            return Err(QuickstartError::Configuration(format!(
                "Partition key path '{raw}' must start with '/'"
            )));
        };

        let segments: Vec<String> = stripped.split('/').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(QuickstartError::Configuration(format!(
                "Partition key path '{raw}' contains an empty segment"
            )));
        }

        Ok(Self { raw, segments })
    }

    /// The `/id` path, where the document id doubles as the partition key
    pub fn id() -> Self {
        Self {
            raw: "/id".to_string(),
            segments: vec!["id".to_string()],
        }
    }

    /// Returns the path as written, e.g. `/id`
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the field names along the path
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Default for PartitionKeyPath {
    fn default() -> Self {
        Self::id()
    }
}

impl FromStr for PartitionKeyPath {
    type Err = QuickstartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for PartitionKeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        Item::from_value(value).unwrap()
    }

    #[test]
    fn test_require_id() {
        let it = item(json!({"id": "Product1", "quantity": 12}));
        assert_eq!(it.require_id().unwrap(), "Product1");
        assert_eq!(it.id(), Some("Product1"));
    }

    #[test]
    fn test_require_id_missing() {
        let it = item(json!({"name": "Surface Laptop"}));
        let err = it.require_id().unwrap_err();
        assert!(matches!(err, QuickstartError::Validation(_)));
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_require_id_wrong_type() {
        let it = item(json!({"id": 7}));
        assert!(matches!(
            it.require_id(),
            Err(QuickstartError::Validation(_))
        ));
    }

    #[test]
    fn test_require_id_blank() {
        let it = item(json!({"id": "   "}));
        assert!(it.require_id().is_err());
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Item::from_value(json!([1, 2, 3])).is_err());
        assert!(Item::from_value(json!("Product1")).is_err());
    }

    #[test]
    fn test_partition_key_defaults_to_id() {
        let it = item(json!({"id": "Product1"}));
        let pk = it.partition_key(&PartitionKeyPath::default()).unwrap();
        assert_eq!(pk, "Product1");
    }

    #[test]
    fn test_partition_key_nested_path() {
        let it = item(json!({"id": "1", "category": {"name": "electronics"}}));
        let path = PartitionKeyPath::new("/category/name").unwrap();
        assert_eq!(it.partition_key(&path).unwrap(), "electronics");
    }

    #[test]
    fn test_partition_key_missing() {
        let it = item(json!({"id": "1"}));
        let path = PartitionKeyPath::new("/categoryId").unwrap();
        assert!(matches!(
            it.partition_key(&path),
            Err(QuickstartError::Validation(_))
        ));
    }

    #[test]
    fn test_partition_key_path_validation() {
        assert!(PartitionKeyPath::new("id").is_err());
        assert!(PartitionKeyPath::new("/").is_err());
        assert!(PartitionKeyPath::new("/a//b").is_err());
        assert_eq!(
            PartitionKeyPath::new("/a/b").unwrap().segments(),
            &["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_serde_is_transparent() {
        let value = json!({"id": "Product1", "sale": true});
        let it = item(value.clone());
        assert_eq!(serde_json::to_value(&it).unwrap(), value);

        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, it);
    }

    #[test]
    fn test_display_is_compact_json() {
        let it = item(json!({"id": "Product1"}));
        assert_eq!(it.to_string(), r#"{"id":"Product1"}"#);
    }
}
