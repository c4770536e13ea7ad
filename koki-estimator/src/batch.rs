use koki_core::constants::MAX_BATCH_SIZE;
use koki_core::errors::{KokiError, KokiResult};
use koki_core::models::{EstimateReport, ProjectParameters, UtilizationInputs};
use koki_observability::batch_span;
use koki_observability::tracing_setup::events;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::Estimator;

/// One independent estimate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub project: ProjectParameters,
    #[serde(default)]
    pub utilization: UtilizationInputs,
}

impl Estimator {
    /// Evaluate independent requests in parallel.
    ///
    /// Output order matches input order; each entry succeeds or fails on its own.
    pub fn estimate_batch(
        &self,
        requests: &[EstimateRequest],
    ) -> KokiResult<Vec<KokiResult<EstimateReport>>> {
        if requests.len() > MAX_BATCH_SIZE {
            return Err(KokiError::invalid_input(
                "requests",
                format!("batch of {} exceeds limit {MAX_BATCH_SIZE}", requests.len()),
            ));
        }

        let span = batch_span!(requests.len());
        let _enter = span.enter();

        let results: Vec<KokiResult<EstimateReport>> = requests
            .par_iter()
            .map(|request| self.estimate(&request.project, &request.utilization))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        events::batch_completed(results.len(), failed);
        Ok(results)
    }
}
