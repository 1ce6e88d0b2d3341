//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod run;
pub mod validate;

use crate::config::{load_config, QuickstartConfig};
use crate::domain::Result;

/// Loads configuration from the file if one was given, otherwise from the
/// environment
pub fn resolve_config(config_path: Option<&str>) -> Result<QuickstartConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => QuickstartConfig::from_env(),
    }
}
