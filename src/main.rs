//! Validator Analytics CLI
//!
//! Analyzes validator tracker caches and writes concentration,
//! performance and gas-limit strategy reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use validator_analytics::commands::{
    display_schema, display_version, execute_report, validate_args, validate_report_file,
    ReportArgs,
};
use validator_analytics::utils::config::{DEFAULT_REPORT_PATH, DEFAULT_VALIDATOR_CACHE};

/// Validator Analytics - operator concentration and performance reports
#[derive(Parser, Debug)]
#[command(name = "validator-analytics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze tracker caches and write a report
    Report {
        /// Validator tracker cache JSON
        #[arg(short, long, env = "VALIDATOR_CACHE", default_value = DEFAULT_VALIDATOR_CACHE)]
        cache: PathBuf,

        /// MEV analysis cache JSON with per-operator gas limits
        #[arg(short, long, env = "MEV_ANALYSIS_CACHE")]
        mev: Option<PathBuf>,

        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Maximum rows per table in the summary
        #[arg(long, default_value = "20")]
        max_rows: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            cache,
            mev,
            output,
            summary,
            max_rows,
        } => {
            let args = ReportArgs {
                cache_path: cache,
                mev_path: mev,
                output_json: output,
                print_summary: summary,
                max_rows,
            };

            validate_args(&args)?;
            execute_report(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
