mod category;
mod comparison;
mod duration_result;
mod estimate_report;
mod model_estimate;
mod project;
mod regression_result;
mod usage;
mod utilization;

pub use category::{HeightTier, LocationCategory, StructureCategory};
pub use comparison::{Comparison, DiscrepancyReason, Verdict};
pub use duration_result::{DurationBreakdown, DurationResult};
pub use estimate_report::EstimateReport;
pub use model_estimate::{EstimationMethod, ModelEstimate};
pub use project::ProjectParameters;
pub use regression_result::{RegressionResult, RegressionTerms};
pub use usage::{AccumulationUsage, RegressionUsage};
pub use utilization::{UtilizationCoefficient, UtilizationInputs, WorkSchedulePreset};
