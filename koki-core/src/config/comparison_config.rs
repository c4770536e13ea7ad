use serde::{Deserialize, Serialize};

use super::defaults;

/// Comparator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Absolute difference in months below which the models agree.
    pub discrepancy_threshold_months: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            discrepancy_threshold_months: defaults::DEFAULT_DISCREPANCY_THRESHOLD_MONTHS,
        }
    }
}
