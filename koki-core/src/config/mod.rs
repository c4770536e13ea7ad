//! Calibration and runtime configuration.
//!
//! Every value has a compiled-in default (see [`defaults`]); a TOML document
//! only needs to name what it overrides.

mod accumulation_config;
mod comparison_config;
pub mod defaults;
mod observability_config;
mod regression_config;
mod utilization_config;

pub use accumulation_config::{AccumulationConfig, StructureFactors};
pub use comparison_config::ComparisonConfig;
pub use observability_config::ObservabilityConfig;
pub use regression_config::{RegressionConfig, RegressionTable};
pub use utilization_config::UtilizationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{KokiError, KokiResult};

/// Top-level configuration aggregating every subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KokiConfig {
    pub utilization: UtilizationConfig,
    pub accumulation: AccumulationConfig,
    pub regression: RegressionConfig,
    pub comparison: ComparisonConfig,
    pub observability: ObservabilityConfig,
}

impl KokiConfig {
    /// Parse a (possibly partial) TOML document and validate the result.
    pub fn from_toml(source: &str) -> KokiResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject calibration values that would break duration invariants.
    pub fn validate(&self) -> KokiResult<()> {
        positive("utilization.base_annual_hours", self.utilization.base_annual_hours)?;
        for (preset, coefficient) in &self.utilization.preset_coefficients {
            positive(&format!("utilization.preset_coefficients.{preset:?}"), *coefficient)?;
        }

        let acc = &self.accumulation;
        non_negative("accumulation.substructure_rate", acc.substructure_rate)?;
        non_negative("accumulation.superstructure_rate", acc.superstructure_rate)?;
        non_negative("accumulation.pile_base_duration", acc.pile_base_duration)?;
        non_negative("accumulation.finishing_duration", acc.finishing_duration)?;
        for (structure, factors) in &acc.structure_factors {
            let prefix = format!("accumulation.structure_factors.{structure}");
            non_negative(&format!("{prefix}.substructure_multiplier"), factors.substructure_multiplier)?;
            non_negative(&format!("{prefix}.superstructure_multiplier"), factors.superstructure_multiplier)?;
            ratio(&format!("{prefix}.top_down_reduction_ratio"), factors.top_down_reduction_ratio)?;
        }
        for (usage, multiplier) in &acc.finishing_multipliers {
            non_negative(&format!("accumulation.finishing_multipliers.{usage:?}"), *multiplier)?;
        }

        let reg = &self.regression;
        positive("regression.tier_threshold_floors", reg.tier_threshold_floors)?;
        for (name, table) in [("low_rise", &reg.low_rise), ("high_rise", &reg.high_rise)] {
            regression_table(name, table)?;
        }

        non_negative(
            "comparison.discrepancy_threshold_months",
            self.comparison.discrepancy_threshold_months,
        )?;
        Ok(())
    }
}

/// Every regression duration stays non-negative for non-negative scale
/// inputs: weights are non-negative and the constant covers the most
/// negative adjustment each category map can contribute.
fn regression_table(name: &str, table: &RegressionTable) -> KokiResult<()> {
    let deflation = table.deflation_multiplier;
    if !deflation.is_finite() || deflation <= 0.0 || deflation > 1.0 {
        return Err(KokiError::config(format!(
            "regression.{name}.deflation_multiplier must be in (0, 1], got {deflation}"
        )));
    }
    ratio(&format!("regression.{name}.top_down_reduction_ratio"), table.top_down_reduction_ratio)?;

    let weights = [
        ("footprint_weight", table.footprint_weight),
        ("total_area_weight", table.total_area_weight),
        ("below_weight", table.below_weight),
        ("above_weight", table.above_weight),
        ("penthouse_weight", table.penthouse_weight),
    ];
    for (field, weight) in weights {
        non_negative(&format!("regression.{name}.{field}"), weight)?;
    }

    finite(&format!("regression.{name}.constant"), table.constant)?;
    for (usage, adj) in &table.usage {
        finite(&format!("regression.{name}.usage.{usage:?}"), *adj)?;
    }
    for (location, adj) in &table.location {
        finite(&format!("regression.{name}.location.{location:?}"), *adj)?;
    }
    for (structure, adj) in &table.structure {
        finite(&format!("regression.{name}.structure.{structure}"), *adj)?;
    }

    // Categories missing from a map contribute 0, so 0 is always reachable.
    let floor = table.constant
        + most_negative(table.usage.values())
        + most_negative(table.location.values())
        + most_negative(table.structure.values());
    if floor < 0.0 {
        return Err(KokiError::config(format!(
            "regression.{name}.constant {} does not cover the most negative adjustments (sum {floor})",
            table.constant
        )));
    }
    Ok(())
}

fn most_negative<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.copied().fold(0.0, f64::min)
}

fn finite(field: &str, value: f64) -> KokiResult<()> {
    if !value.is_finite() {
        return Err(KokiError::config(format!("{field} must be finite, got {value}")));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> KokiResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(KokiError::config(format!("{field} must be positive, got {value}")));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> KokiResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(KokiError::config(format!("{field} must be non-negative, got {value}")));
    }
    Ok(())
}

fn ratio(field: &str, value: f64) -> KokiResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(KokiError::config(format!("{field} must be in [0, 1], got {value}")));
    }
    Ok(())
}
