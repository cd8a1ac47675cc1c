//! Plain-text rendering of an analytics report for the terminal.

use super::schema::AnalyticsReport;
use crate::analytics::PerformanceCategory;

const NAME_WIDTH: usize = 40;

/// Render a text summary of a report
///
/// **Public** - used by the report command with `--summary`
///
/// # Arguments
/// * `report` - Report to render
/// * `max_rows` - Maximum rows per table
pub fn generate_text_summary(report: &AnalyticsReport, max_rows: usize) -> String {
    let mut lines = Vec::new();

    lines.push("  🌐 VALIDATOR CONCENTRATION".to_string());
    match &report.concentration {
        Some(metrics) => {
            lines.push(format!("  Operators:        {}", metrics.total_operators));
            lines.push(format!("  Validators:       {}", metrics.total_validators));
            lines.push(format!(
                "  Gini:             {:.3} ({})",
                metrics.gini_coefficient,
                metrics.decentralization_status()
            ));
            lines.push(format!(
                "  Top 1 / 5 / 10:   {:.1}% / {:.1}% / {:.1}%",
                metrics.top_1_concentration,
                metrics.top_5_concentration,
                metrics.top_10_concentration
            ));
            lines.push(format!(
                "  Avg per operator: {:.1} ({})",
                metrics.average_validators_per_operator(),
                metrics.operator_size_status()
            ));
        }
        None => lines.push("  No active validators".to_string()),
    }
    if let Some(exits) = &report.exit_health {
        lines.push(format!(
            "  Exit rate:        {:.1}% ({}, {} exited)",
            exits.exit_rate, exits.status, exits.exited_validators
        ));
    }
    if let Some(coverage) = &report.ens_coverage {
        lines.push(format!(
            "  ENS coverage:     {:.1}% of operators, {:.1}% of validators ({})",
            coverage.operator_coverage, coverage.validator_coverage, coverage.status
        ));
    }

    lines.push(String::new());
    lines.push("  🎯 PERFORMANCE".to_string());
    if let Some(health) = &report.performance_health {
        lines.push(format!(
            "  Network:     {} (weighted avg {:.2}%)",
            health.status, health.weighted_average
        ));
        lines.push(format!(
            "  Consistency: {} (std dev {:.2}%)",
            health.consistency, health.std_dev
        ));
        let breakdown: Vec<String> = PerformanceCategory::ALL
            .iter()
            .map(|category| {
                let count = health.validators_by_category.get(category).copied().unwrap_or(0);
                format!("{} {}", category, count)
            })
            .collect();
        lines.push(format!("  Validators:  {}", breakdown.join(" | ")));
    }

    if report.performance.is_empty() {
        lines.push("  No performance data".to_string());
    } else {
        lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━━┓".to_string());
        lines.push(format!(
            "  ┃ {:<40} ┃ {:^10} ┃ {:^10} ┃ {:^9} ┃",
            "Operator", "PERF %", "VALIDATORS", "CATEGORY"
        ));
        lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━━┫".to_string());
        for record in report.performance.iter().take(max_rows) {
            lines.push(format!(
                "  ┃ {:<40} ┃ {:>10.2} ┃ {:>10} ┃ {:<9} ┃",
                truncate(&record.display_name, NAME_WIDTH),
                record.performance,
                record.validator_count,
                record.category.label()
            ));
        }
        lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━━┛".to_string());
    }

    lines.push(String::new());
    lines.push("  ⛽ GAS LIMIT STRATEGY".to_string());
    if report.gas_strategies.is_empty() {
        lines.push("  No gas-limit data".to_string());
    } else {
        for record in report.gas_strategies.iter().take(max_rows) {
            lines.push(format!(
                "  {:<40} {:<18} {:<10} {:>6.1}%  max {}",
                truncate(&record.display_name, NAME_WIDTH),
                record.gas_category.label(),
                record.strategy,
                record.consistency_score,
                record.max_gas_limit
            ));
        }
    }

    lines.join("\n")
}

/// Shorten a label to `width` characters, keeping the tail
fn truncate(label: &str, width: usize) -> String {
    let count = label.chars().count();
    if count <= width {
        return label.to_string();
    }
    let tail: String = label.chars().skip(count - (width - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{
        analyze_gas_strategy, build_performance_table, compute_concentration,
        compute_exit_health, summarize_performance, GasLimitRecord,
    };
    use std::collections::BTreeMap;

    fn sample_report() -> AnalyticsReport {
        let mut counts = BTreeMap::new();
        counts.insert("0xaaa".to_string(), 10);
        counts.insert("0xbbb".to_string(), 5);

        let mut performance = BTreeMap::new();
        performance.insert("0xaaa".to_string(), 99.8);
        performance.insert("0xbbb".to_string(), 94.0);

        let mut gas = BTreeMap::new();
        gas.insert(
            "0xaaa".to_string(),
            GasLimitRecord {
                gas_limits: vec![36_000_000],
                average_gas_limit: 36_000_000.0,
            },
        );

        let mut exited = BTreeMap::new();
        exited.insert("0xbbb".to_string(), 5);

        let table = build_performance_table(&performance, &counts, |op| op.to_string());
        AnalyticsReport {
            version: "1.0.0".to_string(),
            source: "test".to_string(),
            concentration: compute_concentration(&counts),
            performance_health: summarize_performance(&table, &performance),
            performance: table,
            exit_health: compute_exit_health(&counts, &exited),
            ens_coverage: None,
            gas_strategies: analyze_gas_strategy(&gas, |op| format!("{}.eth", op)),
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_summary_contains_sections() {
        let summary = generate_text_summary(&sample_report(), 10);

        assert!(summary.contains("VALIDATOR CONCENTRATION"));
        assert!(summary.contains("Validators:       15"));
        assert!(summary.contains("Excellent 10"));
        assert!(summary.contains("Poor 5"));
        assert!(summary.contains("High (36M)"));
        assert!(summary.contains("0xaaa.eth"));
        assert!(summary.contains("Avg per operator: 7.5 (Low)"));
        assert!(summary.contains("Exit rate:        25.0% (High, 5 exited)"));
    }

    #[test]
    fn test_summary_empty_report() {
        let mut report = sample_report();
        report.concentration = None;
        report.performance.clear();
        report.performance_health = None;
        report.gas_strategies.clear();
        report.exit_health = None;

        let summary = generate_text_summary(&report, 10);
        assert!(summary.contains("No active validators"));
        assert!(summary.contains("No performance data"));
        assert!(summary.contains("No gas-limit data"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789abc", 10), "...6789abc");
    }
}
