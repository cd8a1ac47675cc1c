//! JSON schema of the tracker caches.
//!
//! The tracker owns these files; every key is optional so partially
//! populated caches still load.

use crate::analytics::GasLimitRecord;
use crate::utils::error::AnalyticsError;
use crate::utils::naming::EnsNames;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Validator tracker cache as stored on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawValidatorCache {
    /// Active validators per operator (signed so bad data can be reported)
    #[serde(default)]
    pub operator_validators: BTreeMap<String, i64>,

    /// Exited validators per operator
    #[serde(default)]
    pub operator_exited: BTreeMap<String, i64>,

    /// Attestation performance percentage per operator
    #[serde(default)]
    pub operator_performance: BTreeMap<String, f64>,

    /// ENS name per operator address
    #[serde(default)]
    pub ens_names: BTreeMap<String, String>,
}

/// Gas-limit entry of the MEV analysis cache as stored on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGasLimitRecord {
    #[serde(default)]
    pub gas_limits: Vec<i64>,

    #[serde(default)]
    pub average_gas_limit: f64,
}

/// MEV analysis cache as stored on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMevAnalysis {
    /// Gas-limit data per operator
    #[serde(default)]
    pub operator_analysis: BTreeMap<String, RawGasLimitRecord>,
}

/// Validated validator cache
#[derive(Debug, Clone, Default)]
pub struct ValidatorCache {
    pub validator_counts: BTreeMap<String, u64>,
    pub exited_counts: BTreeMap<String, u64>,
    pub performance: BTreeMap<String, f64>,
    pub ens_names: EnsNames,
}

impl TryFrom<RawValidatorCache> for ValidatorCache {
    type Error = AnalyticsError;

    fn try_from(raw: RawValidatorCache) -> Result<Self, Self::Error> {
        let validator_counts = validate_counts(raw.operator_validators)?;
        let exited_counts = validate_counts(raw.operator_exited)?;
        validate_performance(&raw.operator_performance)?;

        Ok(ValidatorCache {
            validator_counts,
            exited_counts,
            performance: raw.operator_performance,
            ens_names: EnsNames::new(raw.ens_names),
        })
    }
}

/// Reject negative validator counts
pub fn validate_counts(
    counts: BTreeMap<String, i64>,
) -> Result<BTreeMap<String, u64>, AnalyticsError> {
    counts
        .into_iter()
        .map(|(operator, count)| {
            u64::try_from(count).map(|count| (operator.clone(), count)).map_err(|_| {
                AnalyticsError::InvalidInput(format!(
                    "negative validator count {} for operator {}",
                    count, operator
                ))
            })
        })
        .collect()
}

/// Reject NaN or infinite performance values
///
/// Out-of-range but finite values are accepted.
pub fn validate_performance(performance: &BTreeMap<String, f64>) -> Result<(), AnalyticsError> {
    match performance.iter().find(|(_, value)| !value.is_finite()) {
        Some((operator, value)) => Err(AnalyticsError::InvalidInput(format!(
            "non-finite performance {} for operator {}",
            value, operator
        ))),
        None => Ok(()),
    }
}

/// Reject zero or negative gas limits
///
/// **Public** - converts the raw MEV analysis entries into analyzer input
pub fn validate_gas_limits(
    records: BTreeMap<String, RawGasLimitRecord>,
) -> Result<BTreeMap<String, GasLimitRecord>, AnalyticsError> {
    records
        .into_iter()
        .map(|(operator, raw)| -> Result<(String, GasLimitRecord), AnalyticsError> {
            let gas_limits = raw
                .gas_limits
                .iter()
                .map(|&limit| match u64::try_from(limit) {
                    Ok(limit) if limit > 0 => Ok(limit),
                    _ => Err(AnalyticsError::InvalidInput(format!(
                        "non-positive gas limit {} for operator {}",
                        limit, operator
                    ))),
                })
                .collect::<Result<Vec<u64>, _>>()?;

            let record = GasLimitRecord {
                gas_limits,
                average_gas_limit: raw.average_gas_limit,
            };
            Ok((operator, record))
        })
        .collect()
}
