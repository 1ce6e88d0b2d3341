//! Quickstart report
//!
//! Holds what the scenario read back and renders it for the console.

use crate::domain::item::Item;
use crate::domain::Result;
use std::time::Duration;

/// Outcome of a quickstart run
#[derive(Debug, Clone)]
pub struct QuickstartReport {
    /// Document returned by the point read
    pub point_read: Item,

    /// Documents returned by the category query, in service order
    pub results: Vec<Item>,

    /// Wall time of the run
    pub duration: Duration,
}

impl QuickstartReport {
    /// Create a report
    pub fn new(point_read: Item, results: Vec<Item>) -> Self {
        Self {
            point_read,
            results,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Console rendering
    ///
    /// ```text
    /// Point read\t{"id":"Product1",...}
    /// Result list\t[
    ///   {
    ///     "id": "Product1",
    /// ...
    /// ```
    pub fn render(&self) -> Result<String> {
        let point_read = serde_json::to_string(&self.point_read)?;
        let results = serde_json::to_string_pretty(&self.results)?;

        Ok(format!("Point read\t{point_read}\nResult list\t{results}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> Item {
        Item::from_value(value).unwrap()
    }

    #[test]
    fn test_render() {
        let doc = item(json!({"id": "Product1", "quantity": 12}));
        let report = QuickstartReport::new(doc.clone(), vec![doc]);
        let rendered = report.render().unwrap();

        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("Point read\t{\"id\":\"Product1\",\"quantity\":12}")
        );
        assert_eq!(lines.next(), Some("Result list\t["));
        assert!(rendered.ends_with(']'));
    }

    #[test]
    fn test_render_has_exactly_two_sections() {
        let doc = item(json!({"id": "Product1", "tags": ["a", "b"]}));
        let report = QuickstartReport::new(doc.clone(), vec![doc.clone(), doc]);
        let rendered = report.render().unwrap();

        assert_eq!(rendered.matches("Point read\t").count(), 1);
        assert_eq!(rendered.matches("\nResult list\t").count(), 1);
        assert!(!rendered.ends_with('\n'));

        let (_, list) = rendered.split_once("Result list\t").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(list).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_render_empty_results() {
        let report = QuickstartReport::new(item(json!({"id": "Product1"})), Vec::new());
        let rendered = report.render().unwrap();
        assert!(rendered.ends_with("Result list\t[]"));
    }
}
