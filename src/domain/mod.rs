//! Domain models and types for the quickstart.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Documents** ([`Item`], [`PartitionKeyPath`], [`Product`])
//! - **Queries** ([`QuerySpec`], [`QueryParameter`], [`PartitionScope`])
//! - **Error types** ([`QuickstartError`])
//! - **Result type alias** ([`Result`])
//!
//! # Items
//!
//! ```rust
//! use cosmos_quickstart::domain::{Item, PartitionKeyPath};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let item = Item::from_value(json!({"id": "Product1", "quantity": 12}))?;
//! assert_eq!(item.require_id()?, "Product1");
//! assert_eq!(item.partition_key(&PartitionKeyPath::id())?, "Product1");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, QuickstartError>`]:
//!
//! ```rust
//! use cosmos_quickstart::domain::{QuickstartError, QuerySpec, Result};
//!
//! fn example() -> Result<()> {
//!     QuerySpec::new("SELECT * FROM p WHERE p.categoryName = @categoryName")
//!         .with_parameter("@categoryName", "electronics")
//!         .validate()?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod item;
pub mod product;
pub mod query;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{classify_azure_error, QuickstartError, RequestKind};
pub use item::{Item, PartitionKeyPath};
pub use product::Product;
pub use query::{PartitionScope, QueryParameter, QuerySpec};
pub use result::Result;
