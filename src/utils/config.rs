//! Configuration and constants for the CLI.

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Default input and output file names
pub const DEFAULT_VALIDATOR_CACHE: &str = "nodeset_validator_tracker_cache.json";
pub const DEFAULT_REPORT_PATH: &str = "analytics_report.json";

// Gini breakpoints for decentralization status
pub const GINI_GOOD_BELOW: f64 = 0.5;
pub const GINI_MODERATE_BELOW: f64 = 0.7;

// Validator-weighted average performance breakpoints
pub const NETWORK_PERFORMANCE_EXCELLENT: f64 = 99.0;
pub const NETWORK_PERFORMANCE_GOOD: f64 = 98.0;

// Standard deviation breakpoints for performance consistency
pub const PERFORMANCE_STD_CONSISTENT_BELOW: f64 = 1.0;
pub const PERFORMANCE_STD_VARIABLE_BELOW: f64 = 2.5;

// Mean validators per operator breakpoints for operator size
pub const OPERATOR_SIZE_LOW_BELOW: f64 = 50.0;
pub const OPERATOR_SIZE_MODERATE_MAX: f64 = 100.0;

// Exit rate (percent of active plus exited) breakpoints
pub const EXIT_RATE_LOW_BELOW: f64 = 5.0;
pub const EXIT_RATE_MODERATE_BELOW: f64 = 15.0;

// ENS operator coverage (percent) breakpoints
pub const ENS_COVERAGE_GOOD_MIN: f64 = 50.0;
pub const ENS_COVERAGE_MODERATE_MIN: f64 = 25.0;
