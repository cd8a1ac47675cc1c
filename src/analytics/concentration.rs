//! Validator concentration across operators.
//!
//! Measures how evenly validators are spread over operators using the
//! Gini coefficient and the share held by the largest 1, 5 and 10 operators.

use crate::utils::config::{
    GINI_GOOD_BELOW, GINI_MODERATE_BELOW, OPERATOR_SIZE_LOW_BELOW, OPERATOR_SIZE_MODERATE_MAX,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Concentration metrics for one validator distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationMetrics {
    /// Gini coefficient, 0 = perfect equality, 1 = maximum concentration
    pub gini_coefficient: f64,

    /// Percentage of validators run by the largest operator
    pub top_1_concentration: f64,

    /// Percentage of validators run by the 5 largest operators
    pub top_5_concentration: f64,

    /// Percentage of validators run by the 10 largest operators
    pub top_10_concentration: f64,

    /// Number of operators in the distribution (including zero-count ones)
    pub total_operators: usize,

    /// Sum of all validator counts
    pub total_validators: u64,
}

/// Qualitative reading of the Gini coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecentralizationStatus {
    Good,
    Moderate,
    Concentrated,
}

impl fmt::Display for DecentralizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DecentralizationStatus::Good => "Good",
            DecentralizationStatus::Moderate => "Moderate",
            DecentralizationStatus::Concentrated => "Concentrated",
        };
        f.write_str(label)
    }
}

/// Typical operator size, from mean validators per operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorSizeStatus {
    Low,
    Moderate,
    High,
}

impl fmt::Display for OperatorSizeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperatorSizeStatus::Low => "Low",
            OperatorSizeStatus::Moderate => "Moderate",
            OperatorSizeStatus::High => "High",
        };
        f.write_str(label)
    }
}

impl ConcentrationMetrics {
    /// Classify the distribution by its Gini coefficient
    pub fn decentralization_status(&self) -> DecentralizationStatus {
        if self.gini_coefficient < GINI_GOOD_BELOW {
            DecentralizationStatus::Good
        } else if self.gini_coefficient < GINI_MODERATE_BELOW {
            DecentralizationStatus::Moderate
        } else {
            DecentralizationStatus::Concentrated
        }
    }

    /// Mean validators per operator
    pub fn average_validators_per_operator(&self) -> f64 {
        if self.total_operators == 0 {
            0.0
        } else {
            self.total_validators as f64 / self.total_operators as f64
        }
    }

    /// Classify the mean operator size (below 50 Low, up to 100 Moderate)
    pub fn operator_size_status(&self) -> OperatorSizeStatus {
        let average = self.average_validators_per_operator();
        if average < OPERATOR_SIZE_LOW_BELOW {
            OperatorSizeStatus::Low
        } else if average <= OPERATOR_SIZE_MODERATE_MAX {
            OperatorSizeStatus::Moderate
        } else {
            OperatorSizeStatus::High
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and the text report
    pub fn summary(&self) -> String {
        format!(
            "Operators: {} | Validators: {} | Gini: {:.3} ({}) | Top 1: {:.1}% | Top 5: {:.1}% | Top 10: {:.1}%",
            self.total_operators,
            self.total_validators,
            self.gini_coefficient,
            self.decentralization_status(),
            self.top_1_concentration,
            self.top_5_concentration,
            self.top_10_concentration
        )
    }
}

/// Compute concentration metrics over per-operator validator counts
///
/// **Public** - main entry point for concentration analysis
///
/// # Arguments
/// * `counts` - Validator count per operator
///
/// # Returns
/// `None` when there are no operators, no validators at all, or the
/// total does not fit in a `u64`
pub fn compute_concentration(counts: &BTreeMap<String, u64>) -> Option<ConcentrationMetrics> {
    let Some(total) = counts
        .values()
        .try_fold(0u64, |sum, &count| sum.checked_add(count))
    else {
        debug!("Skipping concentration: validator total overflows u64");
        return None;
    };
    if counts.is_empty() || total == 0 {
        debug!(
            "Skipping concentration: {} operators, {} validators",
            counts.len(),
            total
        );
        return None;
    }

    let mut ascending: Vec<u64> = counts.values().copied().collect();
    ascending.sort_unstable();

    let gini_coefficient = gini(&ascending, total);

    let descending: Vec<u64> = ascending.iter().rev().copied().collect();

    Some(ConcentrationMetrics {
        gini_coefficient,
        top_1_concentration: top_k_share(&descending, 1, total),
        top_5_concentration: top_k_share(&descending, 5, total),
        top_10_concentration: top_k_share(&descending, 10, total),
        total_operators: counts.len(),
        total_validators: total,
    })
}

/// Gini coefficient of an ascending-sorted distribution, clamped to [0, 1]
///
/// **Private** - `total` must be the non-zero sum of `ascending`
fn gini(ascending: &[u64], total: u64) -> f64 {
    let n = ascending.len() as f64;
    let total = total as f64;

    let weighted: f64 = ascending
        .iter()
        .enumerate()
        .map(|(i, &count)| (i + 1) as f64 * count as f64)
        .sum();

    let raw = (2.0 * weighted) / (n * total) - (n + 1.0) / n;
    raw.clamp(0.0, 1.0)
}

/// Percentage of `total` held by the first `k` entries of a descending distribution
///
/// **Private** - fewer than `k` entries sums what is available
fn top_k_share(descending: &[u64], k: usize, total: u64) -> f64 {
    let top: u64 = descending.iter().take(k).sum();
    (top as f64 / total as f64) * 100.0
}
