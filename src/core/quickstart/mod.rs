//! Quickstart workflow
//!
//! This module provides the scenario and its report.

pub mod report;
pub mod scenario;

pub use report::QuickstartReport;
pub use scenario::{QuickstartScenario, CATEGORY_PARAMETER, CATEGORY_QUERY};
