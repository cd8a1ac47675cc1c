//! Network-level health readings.
//!
//! Exit rate over active and exited validators, and how much of the
//! operator set has a resolved ENS name.

use crate::utils::config::{
    ENS_COVERAGE_GOOD_MIN, ENS_COVERAGE_MODERATE_MIN, EXIT_RATE_LOW_BELOW,
    EXIT_RATE_MODERATE_BELOW,
};
use crate::utils::naming::EnsNames;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Qualitative reading of the exit rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitRateStatus {
    Low,
    Moderate,
    High,
}

impl fmt::Display for ExitRateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExitRateStatus::Low => "Low",
            ExitRateStatus::Moderate => "Moderate",
            ExitRateStatus::High => "High",
        };
        f.write_str(label)
    }
}

/// Exited validators relative to everything ever run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitHealth {
    pub active_validators: u64,
    pub exited_validators: u64,

    /// exited / (active + exited), as a percentage
    pub exit_rate: f64,

    pub status: ExitRateStatus,
}

/// Compute the exit rate from per-operator active and exited counts
///
/// **Public** - returns `None` when there are no validators at all or a
/// total overflows `u64`
pub fn compute_exit_health(
    active: &BTreeMap<String, u64>,
    exited: &BTreeMap<String, u64>,
) -> Option<ExitHealth> {
    let active_validators = checked_total(active)?;
    let exited_validators = checked_total(exited)?;
    let total = active_validators.checked_add(exited_validators)?;
    if total == 0 {
        debug!("Skipping exit health: no validators");
        return None;
    }

    let exit_rate = exited_validators as f64 / total as f64 * 100.0;

    Some(ExitHealth {
        active_validators,
        exited_validators,
        exit_rate,
        status: exit_rate_status(exit_rate),
    })
}

/// Classify an exit rate (below 5% Low, below 15% Moderate)
pub fn exit_rate_status(exit_rate: f64) -> ExitRateStatus {
    if exit_rate < EXIT_RATE_LOW_BELOW {
        ExitRateStatus::Low
    } else if exit_rate < EXIT_RATE_MODERATE_BELOW {
        ExitRateStatus::Moderate
    } else {
        ExitRateStatus::High
    }
}

/// Qualitative reading of ENS operator coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnsCoverageStatus {
    Good,
    Moderate,
    Low,
}

impl fmt::Display for EnsCoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnsCoverageStatus::Good => "Good",
            EnsCoverageStatus::Moderate => "Moderate",
            EnsCoverageStatus::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Share of operators and validators behind a resolved ENS name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsCoverage {
    pub total_operators: usize,

    /// Tracked operators with a non-empty ENS name
    pub ens_operators: usize,

    /// ens_operators / total_operators, as a percentage
    pub operator_coverage: f64,

    pub total_validators: u64,

    /// Validators run by ENS-named operators
    pub validators_with_ens: u64,

    /// validators_with_ens / total_validators, as a percentage (0 when
    /// there are no validators)
    pub validator_coverage: f64,

    pub status: EnsCoverageStatus,
}

/// Measure ENS coverage over the tracked operator set
///
/// **Public** - returns `None` when no operators are tracked
///
/// Names for operators absent from `counts` are ignored.
pub fn compute_ens_coverage(
    ens_names: &EnsNames,
    counts: &BTreeMap<String, u64>,
) -> Option<EnsCoverage> {
    if counts.is_empty() {
        return None;
    }

    let total_validators = checked_total(counts)?;
    let mut ens_operators = 0usize;
    let mut validators_with_ens = 0u64;
    for (operator, &count) in counts {
        if ens_names.get(operator).is_some() {
            ens_operators += 1;
            validators_with_ens += count;
        }
    }

    let operator_coverage = ens_operators as f64 / counts.len() as f64 * 100.0;
    let validator_coverage = if total_validators == 0 {
        0.0
    } else {
        validators_with_ens as f64 / total_validators as f64 * 100.0
    };

    debug!(
        "ENS coverage: {} of {} operators named",
        ens_operators,
        counts.len()
    );

    Some(EnsCoverage {
        total_operators: counts.len(),
        ens_operators,
        operator_coverage,
        total_validators,
        validators_with_ens,
        validator_coverage,
        status: ens_coverage_status(operator_coverage),
    })
}

/// Classify ENS operator coverage (50% and up Good, 25% and up Moderate)
pub fn ens_coverage_status(operator_coverage: f64) -> EnsCoverageStatus {
    if operator_coverage >= ENS_COVERAGE_GOOD_MIN {
        EnsCoverageStatus::Good
    } else if operator_coverage >= ENS_COVERAGE_MODERATE_MIN {
        EnsCoverageStatus::Moderate
    } else {
        EnsCoverageStatus::Low
    }
}

fn checked_total(counts: &BTreeMap<String, u64>) -> Option<u64> {
    counts
        .values()
        .try_fold(0u64, |sum, &count| sum.checked_add(count))
}
