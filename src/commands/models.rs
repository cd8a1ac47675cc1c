use crate::utils::config::{DEFAULT_REPORT_PATH, DEFAULT_VALIDATOR_CACHE};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Validator tracker cache (counts, performance, ENS names)
    pub cache_path: PathBuf,

    /// MEV analysis cache with per-operator gas limits (optional)
    pub mev_path: Option<PathBuf>,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Maximum rows per table in the text summary
    pub max_rows: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_VALIDATOR_CACHE),
            mev_path: None,
            output_json: PathBuf::from(DEFAULT_REPORT_PATH),
            print_summary: false,
            max_rows: 20,
        }
    }
}
