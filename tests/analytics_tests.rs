use std::collections::BTreeMap;
use validator_analytics::analytics::{
    analyze_gas_strategy, build_performance_table, categorize, compute_concentration,
    GasCategory, GasLimitRecord, GasStrategy, PerformanceCategory,
};

fn counts(values: &[u64]) -> BTreeMap<String, u64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &count)| (format!("op{:02}", i), count))
        .collect()
}

#[test]
fn test_gini_bounds() {
    let distributions: Vec<Vec<u64>> = vec![
        vec![1],
        vec![1, 1000],
        vec![0, 0, 0, 1],
        vec![5, 3, 8, 13, 21, 34, 55],
        vec![1; 50],
    ];

    for values in distributions {
        let metrics = compute_concentration(&counts(&values)).unwrap();
        assert!(
            (0.0..=1.0).contains(&metrics.gini_coefficient),
            "gini out of range for {:?}: {}",
            values,
            metrics.gini_coefficient
        );
    }
}

#[test]
fn test_gini_increases_as_mass_concentrates() {
    let stages = [
        vec![25, 25, 25, 25],
        vec![10, 20, 30, 40],
        vec![0, 10, 20, 70],
        vec![0, 0, 10, 90],
        vec![0, 0, 0, 100],
    ];

    let ginis: Vec<f64> = stages
        .iter()
        .map(|values| compute_concentration(&counts(values)).unwrap().gini_coefficient)
        .collect();

    for pair in ginis.windows(2) {
        assert!(pair[0] < pair[1], "gini not increasing: {:?}", ginis);
    }
    assert!((ginis[4] - 0.75).abs() < 1e-12);
}

#[test]
fn test_top_k_monotonic() {
    let values: Vec<u64> = (1..=15).map(|i| i * 7 % 23 + 1).collect();
    let metrics = compute_concentration(&counts(&values)).unwrap();

    assert!(metrics.top_1_concentration <= metrics.top_5_concentration);
    assert!(metrics.top_5_concentration <= metrics.top_10_concentration);
    assert!(metrics.top_10_concentration < 100.0);
}

#[test]
fn test_top_k_with_fewer_operators() {
    let metrics = compute_concentration(&counts(&[4, 4, 2])).unwrap();
    assert_eq!(metrics.top_5_concentration, 100.0);
    assert_eq!(metrics.top_10_concentration, 100.0);
}

#[test]
fn test_category_boundaries() {
    assert_eq!(categorize(99.5), PerformanceCategory::Excellent);
    assert_eq!(categorize(99.49999), PerformanceCategory::Good);
    assert_eq!(categorize(98.5), PerformanceCategory::Good);
    assert_eq!(categorize(95.0), PerformanceCategory::Average);
    assert_eq!(categorize(94.999), PerformanceCategory::Poor);
}

#[test]
fn test_performance_table_excludes_inactive_operators() {
    let mut performance = BTreeMap::new();
    performance.insert("active".to_string(), 99.0);
    performance.insert("zero".to_string(), 100.0);
    performance.insert("absent".to_string(), 100.0);

    let mut validator_counts = BTreeMap::new();
    validator_counts.insert("active".to_string(), 4);
    validator_counts.insert("zero".to_string(), 0);
    validator_counts.insert("no_perf".to_string(), 9);

    let table = build_performance_table(&performance, &validator_counts, |op| op.to_uppercase());

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].operator, "active");
    assert_eq!(table[0].display_name, "ACTIVE");
    assert_eq!(table[0].validator_count, 4);
    assert_eq!(table[0].category, PerformanceCategory::Good);
}

#[test]
fn test_gas_strategy_scenarios() {
    let mut records = BTreeMap::new();
    records.insert(
        "consistent".to_string(),
        GasLimitRecord {
            gas_limits: vec![30_000_000; 3],
            average_gas_limit: 30_000_000.0,
        },
    );
    records.insert(
        "mixed".to_string(),
        GasLimitRecord {
            gas_limits: vec![30_000_000, 30_000_000, 36_000_000],
            average_gas_limit: 32_000_000.0,
        },
    );
    records.insert("empty".to_string(), GasLimitRecord::default());

    let result = analyze_gas_strategy(&records, |op| op.to_uppercase());

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].operator, "mixed");
    assert_eq!(result[0].display_name, "MIXED");
    assert_eq!(result[0].strategy, GasStrategy::Mixed);
    assert!((result[0].consistency_score - 66.666_666).abs() < 1e-3);
    assert_eq!(result[0].gas_category, GasCategory::High);

    assert_eq!(result[1].operator, "consistent");
    assert_eq!(result[1].display_name, "CONSISTENT");
    assert_eq!(result[1].strategy, GasStrategy::Consistent);
    assert_eq!(result[1].consistency_score, 100.0);
    assert_eq!(result[1].gas_category, GasCategory::Standard);
}

#[test]
fn test_analyzers_are_idempotent() {
    let validator_counts = counts(&[100, 50, 50]);
    let performance: BTreeMap<String, f64> = validator_counts
        .keys()
        .zip([99.9, 97.0, 98.6])
        .map(|(op, perf)| (op.clone(), perf))
        .collect();
    let gas: BTreeMap<String, GasLimitRecord> = validator_counts
        .keys()
        .map(|op| {
            (
                op.clone(),
                GasLimitRecord {
                    gas_limits: vec![36_000_000, 60_000_000],
                    average_gas_limit: 48_000_000.0,
                },
            )
        })
        .collect();

    assert_eq!(
        compute_concentration(&validator_counts),
        compute_concentration(&validator_counts)
    );
    assert_eq!(
        build_performance_table(&performance, &validator_counts, str::to_string),
        build_performance_table(&performance, &validator_counts, str::to_string)
    );
    assert_eq!(
        analyze_gas_strategy(&gas, str::to_string),
        analyze_gas_strategy(&gas, str::to_string)
    );
}
