//! # koki-core
//!
//! Foundation crate for the koki construction-duration estimator.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::KokiConfig;
pub use errors::{KokiError, KokiResult};
pub use models::{
    AccumulationUsage, DurationResult, LocationCategory, ProjectParameters, RegressionUsage,
    StructureCategory, UtilizationCoefficient, UtilizationInputs,
};
