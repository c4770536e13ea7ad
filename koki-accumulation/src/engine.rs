use koki_core::config::AccumulationConfig;
use koki_core::errors::KokiResult;
use koki_core::models::{
    DurationResult, EstimationMethod, ModelEstimate, ProjectParameters, UtilizationCoefficient,
};
use koki_core::traits::IDurationModel;

use crate::formula;

/// Accumulation engine holding one set of calibration rates.
#[derive(Debug, Clone, Default)]
pub struct AccumulationEngine {
    config: AccumulationConfig,
}

impl AccumulationEngine {
    pub fn new(config: AccumulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccumulationConfig {
        &self.config
    }

    /// Evaluate the full per-trade breakdown.
    pub fn evaluate(
        &self,
        params: &ProjectParameters,
        coefficient: UtilizationCoefficient,
    ) -> DurationResult {
        formula::compute(params, coefficient, &self.config)
    }
}

impl IDurationModel for AccumulationEngine {
    fn method(&self) -> EstimationMethod {
        EstimationMethod::Accumulation
    }

    fn estimate(
        &self,
        params: &ProjectParameters,
        coefficient: UtilizationCoefficient,
    ) -> KokiResult<ModelEstimate> {
        let result = self.evaluate(params, coefficient);
        Ok(ModelEstimate {
            method: EstimationMethod::Accumulation,
            bottom_up_total: result.bottom_up_total,
            top_down_total: result.top_down_total,
        })
    }
}
