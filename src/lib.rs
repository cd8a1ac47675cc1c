//! Validator Analytics
//!
//! Concentration, performance and gas-limit strategy analytics over the
//! JSON caches produced by a validator tracker.
//!
//! The analyzers in [`analytics`] are pure functions over in-memory
//! collections; [`cache`] loads and validates tracker data and [`output`]
//! writes versioned reports.
//!
//! ## Getting Started
//!
//! ```bash
//! validator-analytics report --cache nodeset_validator_tracker_cache.json --summary
//! ```

pub mod analytics;
pub mod cache;
pub mod commands;
pub mod output;
pub mod utils;
