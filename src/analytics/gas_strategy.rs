//! Gas-limit strategy per operator.
//!
//! Each validator advertises an execution-layer gas limit. This module
//! checks how uniformly an operator configures its fleet and which gas
//! tier its highest setting falls in.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Lower bound (inclusive) of the Ultra High tier
pub const ULTRA_HIGH_GAS_LIMIT: u64 = 60_000_000;
/// Lower bound (inclusive) of the High tier
pub const HIGH_GAS_LIMIT: u64 = 36_000_000;
/// Lower bound (inclusive) of the Standard tier
pub const STANDARD_GAS_LIMIT: u64 = 30_000_000;

/// Raw gas-limit data for one operator, as supplied by the tracker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasLimitRecord {
    /// One gas limit per validator
    #[serde(default)]
    pub gas_limits: Vec<u64>,

    /// Precomputed average, passed through untouched
    #[serde(default)]
    pub average_gas_limit: f64,
}

/// Whether an operator uses a single gas limit across its validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasStrategy {
    Consistent,
    Mixed,
}

impl fmt::Display for GasStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasStrategy::Consistent => f.write_str("Consistent"),
            GasStrategy::Mixed => f.write_str("Mixed"),
        }
    }
}

/// Execution-layer gas tier of an operator's highest gas limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GasCategory {
    #[serde(rename = "Ultra High (60M+)")]
    UltraHigh,
    #[serde(rename = "High (36M)")]
    High,
    #[serde(rename = "Standard (30M)")]
    Standard,
    #[serde(rename = "Conservative")]
    Conservative,
}

impl GasCategory {
    pub fn label(self) -> &'static str {
        match self {
            GasCategory::UltraHigh => "Ultra High (60M+)",
            GasCategory::High => "High (36M)",
            GasCategory::Standard => "Standard (30M)",
            GasCategory::Conservative => "Conservative",
        }
    }
}

impl fmt::Display for GasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a gas limit to its tier, highest tier first
pub fn gas_category(max_gas_limit: u64) -> GasCategory {
    if max_gas_limit >= ULTRA_HIGH_GAS_LIMIT {
        GasCategory::UltraHigh
    } else if max_gas_limit >= HIGH_GAS_LIMIT {
        GasCategory::High
    } else if max_gas_limit >= STANDARD_GAS_LIMIT {
        GasCategory::Standard
    } else {
        GasCategory::Conservative
    }
}

/// Gas-limit strategy summary for one operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasStrategyRecord {
    pub operator: String,

    /// ENS-aware label for display
    pub display_name: String,

    /// Number of gas-limit entries (one per validator)
    pub total_validators: usize,

    /// Distinct gas limits, ascending
    pub unique_limits: Vec<u64>,

    pub min_gas_limit: u64,
    pub average_gas_limit: f64,
    pub max_gas_limit: u64,

    pub strategy: GasStrategy,

    /// Percentage of validators on the most common gas limit
    pub consistency_score: f64,

    pub gas_category: GasCategory,
}

/// Analyze gas-limit strategies for every operator
///
/// **Public** - main entry point for gas strategy analysis
///
/// # Arguments
/// * `records` - Gas-limit data per operator
/// * `display_name` - Resolves an operator identifier to a label
///
/// Operators with no gas limits are skipped. The result is ordered by
/// `max_gas_limit` descending; ties keep operator key order.
pub fn analyze_gas_strategy<F>(
    records: &BTreeMap<String, GasLimitRecord>,
    display_name: F,
) -> Vec<GasStrategyRecord>
where
    F: Fn(&str) -> String,
{
    let mut analyzed: Vec<GasStrategyRecord> = records
        .iter()
        .filter_map(|(operator, record)| {
            let mut analyzed = analyze_operator(operator, record)?;
            analyzed.display_name = display_name(operator);
            Some(analyzed)
        })
        .collect();

    debug!(
        "Gas strategy: analyzed {} of {} operators",
        analyzed.len(),
        records.len()
    );

    analyzed.sort_by(|a, b| b.max_gas_limit.cmp(&a.max_gas_limit));
    analyzed
}

/// Analyze a single operator's gas limits
///
/// **Public** - returns `None` for an empty gas-limit sequence. The
/// display name defaults to the operator identifier.
pub fn analyze_operator(operator: &str, record: &GasLimitRecord) -> Option<GasStrategyRecord> {
    let limits = &record.gas_limits;
    let min_gas_limit = *limits.iter().min()?;
    let max_gas_limit = *limits.iter().max()?;

    let unique_limits: Vec<u64> = limits
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let (strategy, consistency_score) = if unique_limits.len() == 1 {
        (GasStrategy::Consistent, 100.0)
    } else {
        let (_, occurrences) = most_common_limit(limits)?;
        let score = occurrences as f64 / limits.len() as f64 * 100.0;
        (GasStrategy::Mixed, score)
    };

    Some(GasStrategyRecord {
        operator: operator.to_string(),
        display_name: operator.to_string(),
        total_validators: limits.len(),
        unique_limits,
        min_gas_limit,
        average_gas_limit: record.average_gas_limit,
        max_gas_limit,
        strategy,
        consistency_score,
        gas_category: gas_category(max_gas_limit),
    })
}

/// Most frequent gas limit and its occurrence count
///
/// Ties go to the smallest gas limit.
pub fn most_common_limit(limits: &[u64]) -> Option<(u64, usize)> {
    let mut occurrences: BTreeMap<u64, usize> = BTreeMap::new();
    for &limit in limits {
        *occurrences.entry(limit).or_insert(0) += 1;
    }

    let mut best: Option<(u64, usize)> = None;
    for (limit, count) in occurrences {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((limit, count)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: u64 = 1_000_000;

    fn record(gas_limits: &[u64]) -> GasLimitRecord {
        let average_gas_limit = if gas_limits.is_empty() {
            0.0
        } else {
            gas_limits.iter().sum::<u64>() as f64 / gas_limits.len() as f64
        };
        GasLimitRecord {
            gas_limits: gas_limits.to_vec(),
            average_gas_limit,
        }
    }

    #[test]
    fn test_gas_category_boundaries() {
        assert_eq!(gas_category(60 * M), GasCategory::UltraHigh);
        assert_eq!(gas_category(60 * M - 1), GasCategory::High);
        assert_eq!(gas_category(36 * M), GasCategory::High);
        assert_eq!(gas_category(36 * M - 1), GasCategory::Standard);
        assert_eq!(gas_category(30 * M), GasCategory::Standard);
        assert_eq!(gas_category(30 * M - 1), GasCategory::Conservative);
        assert_eq!(gas_category(0), GasCategory::Conservative);
    }

    #[test]
    fn test_gas_category_serializes_as_label() {
        let json = serde_json::to_string(&GasCategory::UltraHigh).unwrap();
        assert_eq!(json, "\"Ultra High (60M+)\"");
    }

    #[test]
    fn test_consistent_operator() {
        let result = analyze_operator("op", &record(&[30 * M, 30 * M, 30 * M])).unwrap();

        assert_eq!(result.strategy, GasStrategy::Consistent);
        assert_eq!(result.consistency_score, 100.0);
        assert_eq!(result.unique_limits, vec![30 * M]);
        assert_eq!(result.gas_category, GasCategory::Standard);
        assert_eq!(result.total_validators, 3);
    }

    #[test]
    fn test_mixed_operator() {
        let result = analyze_operator("op", &record(&[30 * M, 36 * M, 30 * M])).unwrap();

        assert_eq!(result.strategy, GasStrategy::Mixed);
        assert!((result.consistency_score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.unique_limits, vec![30 * M, 36 * M]);
        assert_eq!(result.min_gas_limit, 30 * M);
        assert_eq!(result.max_gas_limit, 36 * M);
        assert_eq!(result.gas_category, GasCategory::High);
    }

    #[test]
    fn test_average_is_passed_through() {
        let input = GasLimitRecord {
            gas_limits: vec![30 * M],
            average_gas_limit: 12.5,
        };
        let result = analyze_operator("op", &input).unwrap();
        assert_eq!(result.average_gas_limit, 12.5);
    }

    #[test]
    fn test_display_name_defaults_to_operator() {
        let result = analyze_operator("0xop", &record(&[30 * M])).unwrap();
        assert_eq!(result.display_name, "0xop");
    }

    #[test]
    fn test_empty_operator_skipped() {
        assert!(analyze_operator("op", &record(&[])).is_none());
    }

    #[test]
    fn test_most_common_limit_tie_prefers_smallest() {
        assert_eq!(most_common_limit(&[36 * M, 30 * M]), Some((30 * M, 1)));
        assert_eq!(
            most_common_limit(&[60 * M, 36 * M, 60 * M, 36 * M, 30 * M]),
            Some((36 * M, 2))
        );
        assert_eq!(most_common_limit(&[]), None);
    }

    #[test]
    fn test_sorted_by_max_descending() {
        let mut input = BTreeMap::new();
        input.insert("a".to_string(), record(&[30 * M]));
        input.insert("b".to_string(), record(&[60 * M, 30 * M]));
        input.insert("c".to_string(), record(&[]));
        input.insert("d".to_string(), record(&[36 * M]));
        input.insert("e".to_string(), record(&[30 * M, 29 * M]));

        let result = analyze_gas_strategy(&input, |op| format!("{}.eth", op));
        let order: Vec<&str> = result.iter().map(|r| r.operator.as_str()).collect();

        // "a" and "e" tie on max and keep key order
        assert_eq!(order, vec!["b", "d", "a", "e"]);
        assert_eq!(result[0].display_name, "b.eth");
    }
}
