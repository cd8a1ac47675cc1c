//! Loading of tracker cache files.
//!
//! Reads the JSON written by the tracker and validates it at the boundary
//! so the analyzers only ever see well-formed collections.

use super::schema::{validate_gas_limits, RawMevAnalysis, RawValidatorCache, ValidatorCache};
use crate::analytics::GasLimitRecord;
use crate::utils::error::CacheError;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load and validate the validator tracker cache
///
/// **Public** - main entry point for validator data
///
/// # Errors
/// * `CacheError::Io` - File cannot be opened
/// * `CacheError::Json` - Invalid JSON structure
/// * `CacheError::InvalidInput` - Negative counts or non-finite performance
pub fn load_validator_cache(path: impl AsRef<Path>) -> Result<ValidatorCache, CacheError> {
    let path = path.as_ref();
    info!("Loading validator cache: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let raw: RawValidatorCache = serde_json::from_reader(reader)?;
    let cache = ValidatorCache::try_from(raw)?;

    debug!(
        "Validator cache: {} operators with counts, {} with performance, {} ENS names",
        cache.validator_counts.len(),
        cache.performance.len(),
        cache.ens_names.len()
    );

    Ok(cache)
}

/// Parse a validator cache from a JSON string
///
/// **Public** - useful for tests and in-memory data
pub fn parse_validator_cache(json: &str) -> Result<ValidatorCache, CacheError> {
    let raw: RawValidatorCache = serde_json::from_str(json)?;
    Ok(ValidatorCache::try_from(raw)?)
}

/// Load per-operator gas-limit data from the MEV analysis cache
///
/// **Public** - main entry point for gas-limit data
pub fn load_gas_limits(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, GasLimitRecord>, CacheError> {
    let path = path.as_ref();
    info!("Loading MEV analysis cache: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let raw: RawMevAnalysis = serde_json::from_reader(reader)?;

    debug!("MEV analysis: {} operators", raw.operator_analysis.len());

    Ok(validate_gas_limits(raw.operator_analysis)?)
}

/// Parse gas-limit data from a JSON string
pub fn parse_gas_limits(json: &str) -> Result<BTreeMap<String, GasLimitRecord>, CacheError> {
    let raw: RawMevAnalysis = serde_json::from_str(json)?;
    Ok(validate_gas_limits(raw.operator_analysis)?)
}
