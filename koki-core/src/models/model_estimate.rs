use std::fmt;

use serde::{Deserialize, Serialize};

/// Which estimation model produced a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMethod {
    /// Method A: per-trade accumulation scaled by utilization.
    Accumulation,
    /// Method B: weighted-sum statistical formula.
    Regression,
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accumulation => f.write_str("accumulation"),
            Self::Regression => f.write_str("regression"),
        }
    }
}

/// Headline totals shared by both models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelEstimate {
    pub method: EstimationMethod,
    pub bottom_up_total: f64,
    pub top_down_total: f64,
}
