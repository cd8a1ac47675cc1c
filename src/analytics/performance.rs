//! Operator performance classification.
//!
//! Buckets attestation performance percentages into ordinal categories and
//! joins them with validator counts into a per-operator table.

use crate::utils::config::{
    NETWORK_PERFORMANCE_EXCELLENT, NETWORK_PERFORMANCE_GOOD, PERFORMANCE_STD_CONSISTENT_BELOW,
    PERFORMANCE_STD_VARIABLE_BELOW,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lower bound (inclusive) of the Excellent category
pub const EXCELLENT_THRESHOLD: f64 = 99.5;
/// Lower bound (inclusive) of the Good category
pub const GOOD_THRESHOLD: f64 = 98.5;
/// Lower bound (inclusive) of the Average category
pub const AVERAGE_THRESHOLD: f64 = 95.0;

/// Ordinal performance category
///
/// Ordering is ascending badness: `Excellent < Good < Average < Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PerformanceCategory {
    Excellent = 0,
    Good = 1,
    Average = 2,
    Poor = 3,
}

impl PerformanceCategory {
    /// All categories, best first
    pub const ALL: [PerformanceCategory; 4] = [
        PerformanceCategory::Excellent,
        PerformanceCategory::Good,
        PerformanceCategory::Average,
        PerformanceCategory::Poor,
    ];

    /// Rank used for sorting, 0 is best
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceCategory::Excellent => "Excellent",
            PerformanceCategory::Good => "Good",
            PerformanceCategory::Average => "Average",
            PerformanceCategory::Poor => "Poor",
        }
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a performance percentage
///
/// **Public** - total over all inputs; no range validation
pub fn categorize(performance: f64) -> PerformanceCategory {
    if performance >= EXCELLENT_THRESHOLD {
        PerformanceCategory::Excellent
    } else if performance >= GOOD_THRESHOLD {
        PerformanceCategory::Good
    } else if performance >= AVERAGE_THRESHOLD {
        PerformanceCategory::Average
    } else {
        PerformanceCategory::Poor
    }
}

/// One row of the operator performance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Operator identifier (address)
    pub operator: String,

    /// Label produced by the naming function
    pub display_name: String,

    /// Raw performance percentage
    pub performance: f64,

    /// Active validators run by the operator
    pub validator_count: u64,

    pub category: PerformanceCategory,
}

/// Join performance values with validator counts
///
/// **Public** - main entry point for the performance table
///
/// # Arguments
/// * `performance` - Performance percentage per operator
/// * `validator_counts` - Validator count per operator
/// * `display_name` - Resolves an operator identifier to a label
///
/// # Returns
/// One record per operator that has both a performance entry and at least
/// one validator, in operator key order
pub fn build_performance_table<F>(
    performance: &BTreeMap<String, f64>,
    validator_counts: &BTreeMap<String, u64>,
    display_name: F,
) -> Vec<PerformanceRecord>
where
    F: Fn(&str) -> String,
{
    let records: Vec<PerformanceRecord> = performance
        .iter()
        .filter_map(|(operator, &value)| {
            let validator_count = validator_counts.get(operator).copied().unwrap_or(0);
            if validator_count == 0 {
                return None;
            }

            Some(PerformanceRecord {
                operator: operator.clone(),
                display_name: display_name(operator),
                performance: value,
                validator_count,
                category: categorize(value),
            })
        })
        .collect();

    debug!(
        "Performance table: {} of {} operators have active validators",
        records.len(),
        performance.len()
    );

    records
}

/// Sort records best category first, then by performance descending
///
/// **Public** - presentation helper for tables
pub fn sort_by_category(records: &mut [PerformanceRecord]) {
    records.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| b.performance.total_cmp(&a.performance))
    });
}

/// Network-wide reading of the weighted average performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkPerformanceStatus {
    Excellent,
    Good,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl fmt::Display for NetworkPerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NetworkPerformanceStatus::Excellent => "Excellent",
            NetworkPerformanceStatus::Good => "Good",
            NetworkPerformanceStatus::NeedsAttention => "Needs Attention",
        };
        f.write_str(label)
    }
}

/// How tightly operator performances cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceConsistency {
    Consistent,
    Variable,
    Inconsistent,
}

impl fmt::Display for PerformanceConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceConsistency::Consistent => "Consistent",
            PerformanceConsistency::Variable => "Variable",
            PerformanceConsistency::Inconsistent => "Inconsistent",
        };
        f.write_str(label)
    }
}

/// Validator-weighted health summary of a performance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHealth {
    /// Average performance weighted by validator count
    pub weighted_average: f64,

    /// Validators covered by the table
    pub total_validators: u64,

    /// Validators per category (every category present, possibly 0)
    pub validators_by_category: BTreeMap<PerformanceCategory, u64>,

    /// Share of validators in the Excellent category
    pub excellent_percentage: f64,

    /// Share of validators in the Poor category
    pub poor_percentage: f64,

    /// Population standard deviation over every reported operator
    /// performance, including operators with no active validators
    pub std_dev: f64,

    pub status: NetworkPerformanceStatus,
    pub consistency: PerformanceConsistency,
}

/// Summarize a performance table
///
/// **Public** - network health for the text report and JSON output
///
/// # Arguments
/// * `records` - Performance table built by `build_performance_table`
/// * `performance` - Full performance map the table was built from
///
/// # Returns
/// `None` when the table covers no validators
pub fn summarize_performance(
    records: &[PerformanceRecord],
    performance: &BTreeMap<String, f64>,
) -> Option<PerformanceHealth> {

    let mut validators_by_category: BTreeMap<PerformanceCategory, u64> =
        PerformanceCategory::ALL.iter().map(|&c| (c, 0)).collect();

    let mut total_validators = 0u64;
    let mut weighted_sum = 0.0;
    for record in records {
        total_validators += record.validator_count;
        weighted_sum += record.performance * record.validator_count as f64;
        *validators_by_category.entry(record.category).or_insert(0) += record.validator_count;
    }

    if total_validators == 0 {
        return None;
    }

    let weighted_average = weighted_sum / total_validators as f64;
    let share = |category: PerformanceCategory| {
        validators_by_category[&category] as f64 / total_validators as f64 * 100.0
    };
    let excellent_percentage = share(PerformanceCategory::Excellent);
    let poor_percentage = share(PerformanceCategory::Poor);

    let std_dev = population_std_dev(performance.values().copied());

    Some(PerformanceHealth {
        weighted_average,
        total_validators,
        validators_by_category,
        excellent_percentage,
        poor_percentage,
        std_dev,
        status: network_status(weighted_average),
        consistency: consistency(std_dev),
    })
}

fn network_status(weighted_average: f64) -> NetworkPerformanceStatus {
    if weighted_average >= NETWORK_PERFORMANCE_EXCELLENT {
        NetworkPerformanceStatus::Excellent
    } else if weighted_average >= NETWORK_PERFORMANCE_GOOD {
        NetworkPerformanceStatus::Good
    } else {
        NetworkPerformanceStatus::NeedsAttention
    }
}

fn consistency(std_dev: f64) -> PerformanceConsistency {
    if std_dev < PERFORMANCE_STD_CONSISTENT_BELOW {
        PerformanceConsistency::Consistent
    } else if std_dev < PERFORMANCE_STD_VARIABLE_BELOW {
        PerformanceConsistency::Variable
    } else {
        PerformanceConsistency::Inconsistent
    }
}

fn population_std_dev<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
