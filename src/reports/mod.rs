//! Report generation modules for different output formats
//!
//! This module contains report generators for inspection results:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::SbGraphvizError;
use crate::inspector::ActionInspector;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from inspection results
    fn generate_report(&self, inspector: &ActionInspector) -> Result<String, SbGraphvizError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
