//! Sample product document
//!
//! The typed form of the document the quickstart writes.

use super::item::Item;
use super::result::Result;
use serde::{Deserialize, Serialize};

/// Category id used by the sample product
pub const SAMPLE_CATEGORY_ID: &str = "61dba35b-4f02-45c5-b648-c6badc0cbd79";

/// A product in the sample catalogue
///
/// Serializes with camelCase field names:
///
/// ```json
/// {"id":"Product1","categoryId":"61dba35b-...","categoryName":"electronics",
///  "name":"Surface Laptop","quantity":12,"sale":true}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document id, also used as the partition key value
    pub id: String,
    pub category_id: String,
    pub category_name: String,
    pub name: String,
    pub quantity: u32,
    pub sale: bool,
}

impl Product {
    /// The product the quickstart upserts
    pub fn sample() -> Self {
        Self {
            id: "Product1".to_string(),
            category_id: SAMPLE_CATEGORY_ID.to_string(),
            category_name: "electronics".to_string(),
            name: "Surface Laptop".to_string(),
            quantity: 12,
            sale: true,
        }
    }

    /// Converts the product into a generic item
    pub fn to_item(&self) -> Result<Item> {
        Item::from_value(serde_json::to_value(self)?)
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::sample()
    }
}
