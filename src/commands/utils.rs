use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    match &report.concentration {
        Some(metrics) => println!("  Gini: {:.3}", metrics.gini_coefficient),
        None => println!("  Gini: n/a"),
    }
    println!("  Performance Rows: {}", report.performance.len());
    println!("  Gas Strategies: {}", report.gas_strategies.len());

    if report.version != REPORT_SCHEMA_VERSION {
        println!(
            "  ⚠ Schema version differs from current ({})",
            REPORT_SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Validator Analytics Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string               - Schema version (e.g., '1.0.0')");
        println!("  source: string                - Validator cache path");
        println!("  concentration: object?        - Absent when no validators");
        println!("    gini_coefficient: number    - 0 (equal) to 1 (concentrated)");
        println!("    top_1/5/10_concentration    - Percent held by largest operators");
        println!("    total_operators: number");
        println!("    total_validators: number");
        println!("  performance: array            - Best category first");
        println!("    operator, display_name: string");
        println!("    performance: number         - Percent of expected rewards");
        println!("    validator_count: number");
        println!("    category: string            - Excellent | Good | Average | Poor");
        println!("  performance_health: object?   - Weighted summary");
        println!("  exit_health: object?          - Exit rate and status");
        println!("  ens_coverage: object?         - ENS naming coverage");
        println!("  gas_strategies: array         - Highest max gas limit first");
        println!("    unique_limits: number[]");
        println!("    min/average/max_gas_limit: number");
        println!("    strategy: string            - Consistent | Mixed");
        println!("    consistency_score: number   - Percent on most common limit");
        println!("    gas_category: string        - Gas tier of max limit");
        println!("  generated_at: string          - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Validator Analytics v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Concentration, performance and gas-limit analytics for validator operators.");
}
