use koki_core::config::RegressionConfig;
use koki_core::errors::KokiResult;
use koki_core::models::{
    EstimationMethod, ModelEstimate, ProjectParameters, RegressionResult, UtilizationCoefficient,
};
use koki_core::traits::IDurationModel;

use crate::formula;

/// Regression engine holding both tier tables.
#[derive(Debug, Clone, Default)]
pub struct RegressionEngine {
    config: RegressionConfig,
}

impl RegressionEngine {
    pub fn new(config: RegressionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RegressionConfig {
        &self.config
    }

    /// Evaluate with the full term breakdown.
    pub fn evaluate(&self, params: &ProjectParameters) -> RegressionResult {
        formula::compute(params, &self.config)
    }

    /// Headline bottom-up total in months.
    pub fn total(&self, params: &ProjectParameters) -> f64 {
        self.evaluate(params).total
    }
}

impl IDurationModel for RegressionEngine {
    fn method(&self) -> EstimationMethod {
        EstimationMethod::Regression
    }

    fn estimate(
        &self,
        params: &ProjectParameters,
        _coefficient: UtilizationCoefficient,
    ) -> KokiResult<ModelEstimate> {
        let result = self.evaluate(params);
        Ok(ModelEstimate {
            method: EstimationMethod::Regression,
            bottom_up_total: result.total,
            top_down_total: result.top_down_total,
        })
    }
}
