//! Report command implementation.
//!
//! The report command:
//! 1. Loads the validator cache
//! 2. Loads gas-limit data (if requested)
//! 3. Runs the analyzers
//! 4. Writes the JSON report

use super::models::ReportArgs;
use crate::analytics::{
    analyze_gas_strategy, build_performance_table, compute_concentration, compute_ens_coverage,
    compute_exit_health, sort_by_category, summarize_performance, GasLimitRecord,
};
use crate::cache::{load_gas_limits, load_validator_cache, ValidatorCache};
use crate::output::{generate_text_summary, write_report, AnalyticsReport};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::BTreeMap;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Cache files missing or malformed
/// * Report file cannot be written
pub fn execute_report(args: &ReportArgs) -> Result<AnalyticsReport> {
    let start_time = Instant::now();

    info!("Step 1/4: Loading validator cache...");
    let cache = load_validator_cache(&args.cache_path).with_context(|| {
        format!(
            "Failed to load validator cache {}",
            args.cache_path.display()
        )
    })?;

    let gas_limits = match &args.mev_path {
        Some(path) => {
            info!("Step 2/4: Loading gas-limit data...");
            load_gas_limits(path)
                .with_context(|| format!("Failed to load MEV analysis {}", path.display()))?
        }
        None => {
            info!("Step 2/4: Skipping gas-limit analysis (no MEV cache given)");
            BTreeMap::new()
        }
    };

    info!("Step 3/4: Analyzing...");
    let source = args.cache_path.display().to_string();
    let report = build_report(&cache, &gas_limits, &source);

    if let Some(metrics) = &report.concentration {
        info!("Concentration: {}", metrics.summary());
    }

    info!("Step 4/4: Writing report...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("VALIDATOR ANALYTICS SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source: {}", report.source);
        println!("\n{}", generate_text_summary(&report, args.max_rows));
        println!("{}", "=".repeat(80));
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Run all analyzers over loaded data
///
/// **Public** - pure orchestration, no I/O
pub fn build_report(
    cache: &ValidatorCache,
    gas_limits: &BTreeMap<String, GasLimitRecord>,
    source: &str,
) -> AnalyticsReport {
    let concentration = compute_concentration(&cache.validator_counts);

    let mut performance = build_performance_table(
        &cache.performance,
        &cache.validator_counts,
        |operator| cache.ens_names.display_name(operator),
    );
    sort_by_category(&mut performance);
    let performance_health = summarize_performance(&performance, &cache.performance);

    let exit_health = compute_exit_health(&cache.validator_counts, &cache.exited_counts);
    let ens_coverage = compute_ens_coverage(&cache.ens_names, &cache.validator_counts);

    let gas_strategies = analyze_gas_strategy(gas_limits, |operator| {
        cache.ens_names.display_name(operator)
    });

    debug!(
        "Report: {} performance rows, {} gas strategies",
        performance.len(),
        gas_strategies.len()
    );

    AnalyticsReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        concentration,
        performance,
        performance_health,
        exit_health,
        ens_coverage,
        gas_strategies,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.cache_path.as_os_str().is_empty() {
        anyhow::bail!("Validator cache path cannot be empty");
    }

    if !args.cache_path.exists() {
        anyhow::bail!(
            "Validator cache not found: {}",
            args.cache_path.display()
        );
    }

    if let Some(mev_path) = &args.mev_path {
        if !mev_path.exists() {
            anyhow::bail!("MEV analysis cache not found: {}", mev_path.display());
        }
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.max_rows == 0 {
        anyhow::bail!("max_rows must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::parse_validator_cache;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn cache_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"operator_validators": {"0xaaa": 3}}"#)
            .unwrap();
        file
    }

    #[test]
    fn test_validate_args_valid() {
        let file = cache_file();
        let args = ReportArgs {
            cache_path: file.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_missing_cache() {
        let args = ReportArgs {
            cache_path: PathBuf::from("/nonexistent/cache.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_mev() {
        let file = cache_file();
        let args = ReportArgs {
            cache_path: file.path().to_path_buf(),
            mev_path: Some(PathBuf::from("/nonexistent/mev.json")),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_rows() {
        let file = cache_file();
        let args = ReportArgs {
            cache_path: file.path().to_path_buf(),
            max_rows: 0,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_report_sorts_performance() {
        let cache = parse_validator_cache(
            r#"{
                "operator_validators": {"0xaaa": 1, "0xbbb": 2, "0xccc": 0},
                "operator_performance": {"0xaaa": 90.0, "0xbbb": 99.9, "0xccc": 100.0}
            }"#,
        )
        .unwrap();

        let report = build_report(&cache, &BTreeMap::new(), "mem");

        assert_eq!(report.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.performance.len(), 2);
        assert_eq!(report.performance[0].operator, "0xbbb");
        assert_eq!(report.performance[1].operator, "0xaaa");
        assert!(report.gas_strategies.is_empty());
        assert_eq!(report.concentration.unwrap().total_validators, 3);
    }

    #[test]
    fn test_build_report_network_health() {
        let cache = parse_validator_cache(
            r#"{
                "operator_validators": {"0xaaa": 90, "0xbbb": 0},
                "operator_exited": {"0xaaa": 10},
                "ens_names": {"0xaaa": "alpha.eth"}
            }"#,
        )
        .unwrap();

        let mut gas = BTreeMap::new();
        gas.insert(
            "0xaaa".to_string(),
            GasLimitRecord {
                gas_limits: vec![30_000_000],
                average_gas_limit: 30_000_000.0,
            },
        );

        let report = build_report(&cache, &gas, "mem");

        let exits = report.exit_health.unwrap();
        assert_eq!(exits.exit_rate, 10.0);

        let coverage = report.ens_coverage.unwrap();
        assert_eq!(coverage.operator_coverage, 50.0);
        assert_eq!(coverage.validators_with_ens, 90);

        assert_eq!(report.gas_strategies[0].display_name, "alpha.eth (0xaaa)");
    }
}
