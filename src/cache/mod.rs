//! Tracker cache loading and schema definitions.
//!
//! This module handles:
//! - Deserializing the validator tracker cache
//! - Deserializing the MEV analysis cache (gas limits)
//! - Validating counts and performance values at the boundary

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_gas_limits, load_validator_cache, parse_gas_limits, parse_validator_cache};
pub use schema::{validate_counts, validate_gas_limits, validate_performance, ValidatorCache};
