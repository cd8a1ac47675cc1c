//! Output JSON schema definitions for analytics reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::analytics::{
    ConcentrationMetrics, EnsCoverage, ExitHealth, GasStrategyRecord, PerformanceHealth,
    PerformanceRecord,
};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Validator cache the report was computed from
    pub source: String,

    /// Concentration metrics (absent when there are no validators)
    pub concentration: Option<ConcentrationMetrics>,

    /// Per-operator performance, best category first
    pub performance: Vec<PerformanceRecord>,

    /// Network-wide performance summary (absent for an empty table)
    pub performance_health: Option<PerformanceHealth>,

    /// Exit rate over active and exited validators
    #[serde(default)]
    pub exit_health: Option<ExitHealth>,

    /// ENS naming coverage of the operator set
    #[serde(default)]
    pub ens_coverage: Option<EnsCoverage>,

    /// Gas-limit strategies, highest max gas limit first
    #[serde(default)]
    pub gas_strategies: Vec<GasStrategyRecord>,

    /// Timestamp when report was generated
    pub generated_at: String,
}
