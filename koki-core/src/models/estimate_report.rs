use serde::{Deserialize, Serialize};

use super::comparison::Comparison;
use super::duration_result::DurationResult;
use super::regression_result::RegressionResult;
use super::utilization::UtilizationCoefficient;

/// Everything one estimate produces, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub project_name: Option<String>,
    pub site: Option<String>,
    pub coefficient: UtilizationCoefficient,
    pub method_a: DurationResult,
    pub method_b: RegressionResult,
    /// Bottom-up totals compared.
    pub comparison: Comparison,
    /// Top-down totals compared.
    pub top_down_comparison: Comparison,
}
