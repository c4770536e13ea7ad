use serde::{Deserialize, Serialize};

use super::category::{LocationCategory, StructureCategory};
use super::usage::{AccumulationUsage, RegressionUsage};
use crate::errors::{KokiError, KokiResult};

/// Immutable input bundle describing one building.
///
/// Floor counts are reals so half floors can be expressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Display name, carried through to the report only.
    #[serde(default)]
    pub project_name: Option<String>,
    /// Site label, carried through to the report only.
    #[serde(default)]
    pub site: Option<String>,
    pub floors_below: f64,
    pub floors_above: f64,
    /// Rooftop / penthouse floors. Regression model only.
    #[serde(default)]
    pub penthouse_floors: f64,
    /// Total floor area in m².
    pub total_area: f64,
    /// Single-floor footprint in m². Regression model only.
    #[serde(default)]
    pub footprint_area: f64,
    #[serde(default)]
    pub has_piling: bool,
    /// Above-grade structural system.
    pub structure: StructureCategory,
    /// Below-grade structural system. Falls back to `structure`.
    #[serde(default)]
    pub substructure: Option<StructureCategory>,
    pub usage: AccumulationUsage,
    /// Explicit regression usage. Falls back to the translation of `usage`.
    #[serde(default)]
    pub regression_usage: Option<RegressionUsage>,
    #[serde(default)]
    pub location: LocationCategory,
    /// Extra months for special site conditions, added to every total.
    #[serde(default)]
    pub special_conditions_months: f64,
}

impl ProjectParameters {
    /// Structural system used below grade.
    pub fn substructure_category(&self) -> StructureCategory {
        self.substructure.unwrap_or(self.structure)
    }

    /// Usage as seen by the regression model.
    pub fn regression_usage(&self) -> RegressionUsage {
        self.regression_usage
            .unwrap_or_else(|| RegressionUsage::from(self.usage))
    }

    /// Reject negative or non-finite scale inputs.
    ///
    /// The engines assume validated input; this is what keeps every duration
    /// component non-negative.
    pub fn validate(&self) -> KokiResult<()> {
        let fields = [
            ("floors_below", self.floors_below),
            ("floors_above", self.floors_above),
            ("penthouse_floors", self.penthouse_floors),
            ("total_area", self.total_area),
            ("footprint_area", self.footprint_area),
            ("special_conditions_months", self.special_conditions_months),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(KokiError::invalid_input(
                    field,
                    format!("must be a non-negative finite number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ProjectParameters {
    /// Mid-size urban SRC office: 4 floors below, 16 above, 28,224 m².
    fn default() -> Self {
        Self {
            project_name: None,
            site: None,
            floors_below: 4.0,
            floors_above: 16.0,
            penthouse_floors: 1.0,
            total_area: 28_224.0,
            footprint_area: 1_764.0,
            has_piling: true,
            structure: StructureCategory::Src,
            substructure: None,
            usage: AccumulationUsage::Office,
            regression_usage: None,
            location: LocationCategory::Urban,
            special_conditions_months: 0.0,
        }
    }
}
