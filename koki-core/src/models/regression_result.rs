use serde::{Deserialize, Serialize};

use super::category::HeightTier;

/// Every additive term of the regression sum, before deflation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionTerms {
    pub constant: f64,
    pub usage: f64,
    pub location: f64,
    pub structure: f64,
    pub footprint_area: f64,
    pub total_area: f64,
    pub floors_below: f64,
    pub floors_above: f64,
    pub penthouse_floors: f64,
}

impl RegressionTerms {
    pub fn sum(&self) -> f64 {
        self.constant
            + self.usage
            + self.location
            + self.structure
            + self.footprint_area
            + self.total_area
            + self.floors_below
            + self.floors_above
            + self.penthouse_floors
    }
}

/// Regression model output with the full term breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub tier: HeightTier,
    pub terms: RegressionTerms,
    pub raw_sum: f64,
    pub deflation_multiplier: f64,
    pub special_conditions: f64,
    /// `raw_sum × deflation_multiplier + special_conditions`.
    pub total: f64,
    pub reduction: f64,
    pub top_down_total: f64,
}
