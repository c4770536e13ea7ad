use koki_accumulation::AccumulationEngine;
use koki_comparison::Comparator;
use koki_core::config::KokiConfig;
use koki_core::errors::KokiResult;
use koki_core::models::{EstimateReport, ProjectParameters, UtilizationInputs};
use koki_core::traits::IDurationModel;
use koki_observability::estimate_span;
use koki_observability::tracing_setup::events;
use koki_regression::RegressionEngine;
use koki_utilization::UtilizationCalculator;

/// The estimator: owns one calibration and every component built from it.
///
/// Holds no mutable state; `&Estimator` is shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    utilization: UtilizationCalculator,
    accumulation: AccumulationEngine,
    regression: RegressionEngine,
    comparator: Comparator,
}

impl Estimator {
    /// Build every component from one configuration.
    pub fn new(config: KokiConfig) -> Self {
        Self {
            utilization: UtilizationCalculator::new(config.utilization),
            accumulation: AccumulationEngine::new(config.accumulation),
            regression: RegressionEngine::new(config.regression),
            comparator: Comparator::new(config.comparison),
        }
    }

    /// Parse, validate, and build from a TOML calibration document.
    pub fn from_toml(source: &str) -> KokiResult<Self> {
        Ok(Self::new(KokiConfig::from_toml(source)?))
    }

    pub fn accumulation(&self) -> &AccumulationEngine {
        &self.accumulation
    }

    pub fn regression(&self) -> &RegressionEngine {
        &self.regression
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Both models as trait objects, in A, B order.
    pub fn models(&self) -> [&dyn IDurationModel; 2] {
        [&self.accumulation, &self.regression]
    }

    /// Run one full estimate.
    ///
    /// Fails atomically with `InvalidInput` on bad utilization or scale input.
    pub fn estimate(
        &self,
        params: &ProjectParameters,
        inputs: &UtilizationInputs,
    ) -> KokiResult<EstimateReport> {
        let span = estimate_span!(params.project_name.as_deref().unwrap_or("unnamed"));
        let _enter = span.enter();

        if let Err(err) = params.validate() {
            events::input_rejected(&err.to_string());
            return Err(err);
        }
        let coefficient = match self.utilization.resolve(inputs) {
            Ok(c) => c,
            Err(err) => {
                events::input_rejected(&err.to_string());
                return Err(err);
            }
        };
        events::coefficient_resolved(input_source(inputs), coefficient.value());

        let method_a = self.accumulation.evaluate(params, coefficient);
        let method_b = self.regression.evaluate(params);

        let comparison = self
            .comparator
            .compare(method_a.bottom_up_total, method_b.total);
        let top_down_comparison = self
            .comparator
            .compare(method_a.top_down_total, method_b.top_down_total);

        if !comparison.is_consistent() {
            events::discrepancy_flagged(&comparison);
        }
        events::estimate_completed(
            method_a.bottom_up_total,
            method_b.total,
            comparison.verdict,
        );

        Ok(EstimateReport {
            project_name: params.project_name.clone(),
            site: params.site.clone(),
            coefficient,
            method_a,
            method_b,
            comparison,
            top_down_comparison,
        })
    }
}

fn input_source(inputs: &UtilizationInputs) -> &'static str {
    match inputs {
        UtilizationInputs::Schedule { .. } => "schedule",
        UtilizationInputs::Override { .. } => "override",
        UtilizationInputs::Preset { .. } => "preset",
    }
}
