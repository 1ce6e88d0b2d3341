//! Result type alias for the quickstart
//!
//! This module provides a convenient Result type alias that uses
//! `QuickstartError` as the error type.

use super::errors::QuickstartError;

/// Result type alias for quickstart operations
///
/// # Examples
///
/// ```
/// use cosmos_quickstart::domain::result::Result;
/// use cosmos_quickstart::domain::errors::QuickstartError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(QuickstartError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, QuickstartError>;
