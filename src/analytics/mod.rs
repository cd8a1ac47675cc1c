//! Analytical core over tracker data.
//!
//! Stateless analyzers:
//! - Concentration (Gini coefficient and top-K operator shares)
//! - Performance classification and health summary
//! - Gas-limit strategy per operator
//! - Network health (exit rate, ENS coverage)

pub mod concentration;
pub mod gas_strategy;
pub mod network;
pub mod performance;

// Re-export main types and functions
pub use concentration::{
    compute_concentration, ConcentrationMetrics, DecentralizationStatus, OperatorSizeStatus,
};
pub use gas_strategy::{
    analyze_gas_strategy, gas_category, most_common_limit, GasCategory, GasLimitRecord,
    GasStrategy, GasStrategyRecord,
};
pub use network::{
    compute_ens_coverage, compute_exit_health, ens_coverage_status, exit_rate_status,
    EnsCoverage, EnsCoverageStatus, ExitHealth, ExitRateStatus,
};
pub use performance::{
    build_performance_table, categorize, sort_by_category, summarize_performance,
    NetworkPerformanceStatus, PerformanceCategory, PerformanceConsistency, PerformanceHealth,
    PerformanceRecord,
};
