use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{HeightTier, LocationCategory, RegressionUsage, StructureCategory};

/// One tier's coefficient table for the regression model.
///
/// A table given in TOML replaces the compiled-in one wholesale, so every
/// field is required there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTable {
    pub constant: f64,
    pub footprint_weight: f64,
    pub total_area_weight: f64,
    pub below_weight: f64,
    pub above_weight: f64,
    pub penthouse_weight: f64,
    pub deflation_multiplier: f64,
    /// Fraction of the below-grade term recovered by top-down sequencing.
    pub top_down_reduction_ratio: f64,
    pub usage: BTreeMap<RegressionUsage, f64>,
    pub location: BTreeMap<LocationCategory, f64>,
    pub structure: BTreeMap<StructureCategory, f64>,
}

impl RegressionTable {
    pub fn usage_adjustment(&self, usage: RegressionUsage) -> f64 {
        lookup_or_neutral(&self.usage, &usage)
    }

    pub fn location_adjustment(&self, location: LocationCategory) -> f64 {
        lookup_or_neutral(&self.location, &location)
    }

    pub fn structure_adjustment(&self, structure: StructureCategory) -> f64 {
        lookup_or_neutral(&self.structure, &structure)
    }

    /// Compiled-in table for buildings below the tier threshold.
    pub fn low_rise() -> Self {
        Self {
            constant: defaults::LOW_RISE_CONSTANT,
            usage: defaults::LOW_RISE_USAGE.into_iter().collect(),
            location: defaults::LOW_RISE_LOCATION.into_iter().collect(),
            structure: defaults::LOW_RISE_STRUCTURE.into_iter().collect(),
            footprint_weight: defaults::LOW_RISE_FOOTPRINT_WEIGHT,
            total_area_weight: defaults::LOW_RISE_TOTAL_AREA_WEIGHT,
            below_weight: defaults::LOW_RISE_BELOW_WEIGHT,
            above_weight: defaults::LOW_RISE_ABOVE_WEIGHT,
            penthouse_weight: defaults::LOW_RISE_PENTHOUSE_WEIGHT,
            deflation_multiplier: defaults::DEFAULT_DEFLATION_MULTIPLIER,
            top_down_reduction_ratio: defaults::DEFAULT_TOP_DOWN_REDUCTION_RATIO,
        }
    }

    /// Compiled-in table for buildings at or above the tier threshold.
    pub fn high_rise() -> Self {
        Self {
            constant: defaults::HIGH_RISE_CONSTANT,
            usage: defaults::HIGH_RISE_USAGE.into_iter().collect(),
            location: defaults::HIGH_RISE_LOCATION.into_iter().collect(),
            structure: defaults::HIGH_RISE_STRUCTURE.into_iter().collect(),
            footprint_weight: defaults::HIGH_RISE_FOOTPRINT_WEIGHT,
            total_area_weight: defaults::HIGH_RISE_TOTAL_AREA_WEIGHT,
            below_weight: defaults::HIGH_RISE_BELOW_WEIGHT,
            above_weight: defaults::HIGH_RISE_ABOVE_WEIGHT,
            penthouse_weight: defaults::HIGH_RISE_PENTHOUSE_WEIGHT,
            deflation_multiplier: defaults::DEFAULT_DEFLATION_MULTIPLIER,
            top_down_reduction_ratio: defaults::DEFAULT_TOP_DOWN_REDUCTION_RATIO,
        }
    }
}

/// Categories missing from a table contribute nothing rather than failing.
fn lookup_or_neutral<K: Ord>(table: &BTreeMap<K, f64>, key: &K) -> f64 {
    table
        .get(key)
        .copied()
        .unwrap_or(defaults::UNKNOWN_CATEGORY_ADJUSTMENT)
}

/// Regression (statistical) model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionConfig {
    /// Floors above grade at which the high-rise table takes over.
    pub tier_threshold_floors: f64,
    pub low_rise: RegressionTable,
    pub high_rise: RegressionTable,
}

impl RegressionConfig {
    pub fn tier_for(&self, floors_above: f64) -> HeightTier {
        HeightTier::for_floors(floors_above, self.tier_threshold_floors)
    }

    pub fn table(&self, tier: HeightTier) -> &RegressionTable {
        match tier {
            HeightTier::LowRise => &self.low_rise,
            HeightTier::HighRise => &self.high_rise,
        }
    }
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            tier_threshold_floors: defaults::DEFAULT_TIER_THRESHOLD_FLOORS,
            low_rise: RegressionTable::low_rise(),
            high_rise: RegressionTable::high_rise(),
        }
    }
}
