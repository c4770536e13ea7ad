use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{AccumulationUsage, StructureCategory};

/// Structure-dependent calibration of the accumulation model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureFactors {
    /// Slowdown applied to the substructure rate.
    pub substructure_multiplier: f64,
    /// Slowdown applied to the superstructure rate.
    pub superstructure_multiplier: f64,
    /// Fraction of substructure duration recovered by top-down sequencing.
    pub top_down_reduction_ratio: f64,
}

impl Default for StructureFactors {
    /// Baseline speed, used for any structure missing from the table.
    fn default() -> Self {
        Self {
            substructure_multiplier: defaults::NEUTRAL_MULTIPLIER,
            superstructure_multiplier: defaults::NEUTRAL_MULTIPLIER,
            top_down_reduction_ratio: defaults::DEFAULT_TOP_DOWN_REDUCTION_RATIO,
        }
    }
}

/// Accumulation (per-trade) model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulationConfig {
    /// Months per floor below grade at baseline speed.
    pub substructure_rate: f64,
    /// Months per floor above grade at baseline speed.
    pub superstructure_rate: f64,
    /// Piling duration in pure labor months.
    pub pile_base_duration: f64,
    /// Calendar months from power-on to completion.
    pub finishing_duration: f64,
    pub structure_factors: BTreeMap<StructureCategory, StructureFactors>,
    /// Finishing scale per usage. Missing usages are neutral.
    pub finishing_multipliers: BTreeMap<AccumulationUsage, f64>,
}

impl AccumulationConfig {
    /// Factors for a structure, baseline when absent.
    pub fn factors_for(&self, structure: StructureCategory) -> StructureFactors {
        self.structure_factors
            .get(&structure)
            .copied()
            .unwrap_or_default()
    }

    /// Finishing multiplier for a usage, neutral when absent.
    pub fn finishing_multiplier(&self, usage: AccumulationUsage) -> f64 {
        self.finishing_multipliers
            .get(&usage)
            .copied()
            .unwrap_or(defaults::NEUTRAL_MULTIPLIER)
    }
}

impl Default for AccumulationConfig {
    fn default() -> Self {
        Self {
            substructure_rate: defaults::DEFAULT_SUBSTRUCTURE_RATE,
            superstructure_rate: defaults::DEFAULT_SUPERSTRUCTURE_RATE,
            pile_base_duration: defaults::DEFAULT_PILE_BASE_DURATION,
            finishing_duration: defaults::DEFAULT_FINISHING_DURATION,
            structure_factors: defaults::DEFAULT_STRUCTURE_FACTORS
                .into_iter()
                .map(|(structure, sub, sup, ratio)| {
                    (
                        structure,
                        StructureFactors {
                            substructure_multiplier: sub,
                            superstructure_multiplier: sup,
                            top_down_reduction_ratio: ratio,
                        },
                    )
                })
                .collect(),
            finishing_multipliers: defaults::DEFAULT_FINISHING_MULTIPLIERS
                .into_iter()
                .collect(),
        }
    }
}
