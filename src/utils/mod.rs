//! Utility modules for configuration, error handling, and operator naming.

pub mod config;
pub mod error;
pub mod naming;

// Re-export commonly used error types for convenience
pub use error::{AnalyticsError, CacheError, OutputError};
pub use naming::{shorten_address, EnsNames};
