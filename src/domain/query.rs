//! Parameterized queries
//!
//! A [`QuerySpec`] pairs query text with an ordered list of named parameters.
//! The filter language itself belongs to the service; only the parameter
//! bindings are checked locally.

use super::errors::QuickstartError;
use super::result::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

/// A named query parameter, e.g. `@categoryName = "electronics"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    /// Parameter name including the leading `@`
    pub name: String,

    /// Bound value
    pub value: Value,
}

/// Query text plus its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Query text, e.g. `SELECT * FROM p WHERE p.categoryName = @categoryName`
    pub text: String,

    /// Parameters in binding order
    #[serde(default)]
    pub parameters: Vec<QueryParameter>,
}

impl QuerySpec {
    /// Creates a query without parameters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.push(QueryParameter {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Looks up a parameter value by name
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Checks the query text and parameter bindings
    ///
    /// # Errors
    ///
    /// Returns [`QuickstartError::QuerySyntax`] if the text is blank or does
    /// not start with `SELECT`, a parameter name is malformed or duplicated,
    /// or the text references a parameter that is not bound.
    pub fn validate(&self) -> Result<()> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(QuickstartError::QuerySyntax(
                "Query text cannot be empty".to_string(),
            ));
        }

        let starts_with_select = text
            .get(..6)
            .map(|head| head.eq_ignore_ascii_case("select"))
            .unwrap_or(false);
        if !starts_with_select {
            return Err(QuickstartError::QuerySyntax(format!(
                "Query must start with SELECT: {text}"
            )));
        }

        let name_re = parameter_regex();
        for (index, param) in self.parameters.iter().enumerate() {
            let well_formed = name_re
                .find(&param.name)
                .map(|m| m.start() == 0 && m.end() == param.name.len())
                .unwrap_or(false);
            if !well_formed {
                return Err(QuickstartError::QuerySyntax(format!(
                    "Invalid parameter name '{}': must look like @name",
                    param.name
                )));
            }
            if self.parameters[..index].iter().any(|p| p.name == param.name) {
                return Err(QuickstartError::QuerySyntax(format!(
                    "Parameter '{}' is bound more than once",
                    param.name
                )));
            }
        }

        let unbound: Vec<&str> = parameter_references(text)
            .into_iter()
            .filter(|name| self.parameter(name).is_none())
            .collect();
        if !unbound.is_empty() {
            return Err(QuickstartError::QuerySyntax(format!(
                "Query references unbound parameters: {}",
                unbound.join(", ")
            )));
        }

        Ok(())
    }
}

/// Which partitions a query runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionScope {
    /// Only the partition with this key value
    Single(String),

    /// Every partition in the container
    CrossPartition,
}

impl PartitionScope {
    /// Builds a scope from the cross-partition flag
    ///
    /// With `cross_partition == false` the query is pinned to `partition_key`.
    ///
    /// # Errors
    ///
    /// Fails if a single-partition query has no partition key.
    pub fn from_flag(cross_partition: bool, partition_key: Option<String>) -> Result<Self> {
        if cross_partition {
            return Ok(PartitionScope::CrossPartition);
        }
        partition_key.map(PartitionScope::Single).ok_or_else(|| {
            QuickstartError::Validation(
                "A partition key is required when cross-partition queries are disabled"
                    .to_string(),
            )
        })
    }
}

fn parameter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@[A-Za-z_][A-Za-z0-9_]*").expect("parameter pattern is valid"))
}

/// `@name` references outside string literals
///
/// A doubled quote inside a literal closes and reopens it, so `'O''Brien'`
/// stays one literal span.
fn parameter_references(text: &str) -> Vec<&str> {
    let mut references = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        match quote {
            Some(open) if ch == open => {
                quote = None;
                start = index + ch.len_utf8();
            }
            Some(_) => {}
            None if ch == '\'' || ch == '"' => {
                references.extend(
                    parameter_regex()
                        .find_iter(&text[start..index])
                        .map(|m| m.as_str()),
                );
                quote = Some(ch);
            }
            None => {}
        }
    }
    if quote.is_none() {
        references.extend(
            parameter_regex()
                .find_iter(&text[start..])
                .map(|m| m.as_str()),
        );
    }

    references
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CATEGORY_QUERY: &str = "SELECT * FROM p WHERE p.categoryName = @categoryName";

    #[test]
    fn test_valid_parameterized_query() {
        let query = QuerySpec::new(CATEGORY_QUERY).with_parameter("@categoryName", "electronics");
        assert!(query.validate().is_ok());
        assert_eq!(query.parameter("@categoryName"), Some(&json!("electronics")));
    }

    #[test]
    fn test_unbound_parameter() {
        let query = QuerySpec::new(CATEGORY_QUERY);
        let err = query.validate().unwrap_err();
        assert!(matches!(err, QuickstartError::QuerySyntax(_)));
        assert!(err.to_string().contains("@categoryName"));
    }

    #[test]
    fn test_at_sign_inside_literal_is_not_a_parameter() {
        let query = QuerySpec::new("SELECT * FROM c WHERE c.email = 'sales@contoso.com'");
        assert!(query.validate().is_ok());

        let query = QuerySpec::new("SELECT * FROM c WHERE c.note = \"ping @ops\" AND c.id = @id")
            .with_parameter("@id", "Product1");
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_parameter_after_escaped_quote_is_checked() {
        let query = QuerySpec::new("SELECT * FROM c WHERE c.name = 'O''Brien' AND c.id = @id");
        let err = query.validate().unwrap_err();
        assert!(err.to_string().contains("@id"));
    }

    #[test]
    fn test_rejects_non_select() {
        let query = QuerySpec::new("DELETE FROM p");
        assert!(matches!(
            query.validate(),
            Err(QuickstartError::QuerySyntax(_))
        ));
        assert!(QuerySpec::new("  ").validate().is_err());
    }

    #[test]
    fn test_select_is_case_insensitive() {
        assert!(QuerySpec::new("select * from c").validate().is_ok());
    }

    #[test]
    fn test_malformed_parameter_name() {
        let query = QuerySpec::new("SELECT * FROM c").with_parameter("categoryName", "x");
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_duplicate_parameter() {
        let query = QuerySpec::new("SELECT * FROM c WHERE c.a = @a")
            .with_parameter("@a", 1)
            .with_parameter("@a", 2);
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_partition_scope_from_flag() {
        assert_eq!(
            PartitionScope::from_flag(true, None).unwrap(),
            PartitionScope::CrossPartition
        );
        assert_eq!(
            PartitionScope::from_flag(false, Some("Product1".to_string())).unwrap(),
            PartitionScope::Single("Product1".to_string())
        );
        assert!(PartitionScope::from_flag(false, None).is_err());
    }
}
