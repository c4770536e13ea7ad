use crate::errors::KokiResult;
use crate::models::{EstimationMethod, ModelEstimate, ProjectParameters, UtilizationCoefficient};

/// A construction-duration model.
pub trait IDurationModel: Send + Sync {
    /// Which model this is.
    fn method(&self) -> EstimationMethod;

    /// Estimate bottom-up and top-down totals in calendar months.
    /// Models that are already calendar-adjusted may ignore `coefficient`.
    fn estimate(
        &self,
        params: &ProjectParameters,
        coefficient: UtilizationCoefficient,
    ) -> KokiResult<ModelEstimate>;
}
