use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::WorkSchedulePreset;

/// Utilization calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilizationConfig {
    /// Annual working hours that correspond to a coefficient of 1.0.
    pub base_annual_hours: f64,
    /// Coefficient per named work schedule.
    pub preset_coefficients: BTreeMap<WorkSchedulePreset, f64>,
}

impl Default for UtilizationConfig {
    fn default() -> Self {
        Self {
            base_annual_hours: defaults::DEFAULT_BASE_ANNUAL_HOURS,
            preset_coefficients: defaults::DEFAULT_PRESET_COEFFICIENTS.into_iter().collect(),
        }
    }
}
