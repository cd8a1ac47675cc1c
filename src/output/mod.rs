//! Output writers and renderers for analytics reports.
//!
//! This module handles:
//! - The versioned report schema
//! - JSON reports (write, read, string)
//! - Text summaries for the terminal

pub mod json;
pub mod schema;
pub mod summary;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::AnalyticsReport;
pub use summary::generate_text_summary;
