//! # koki-estimator
//!
//! Single entry point for the presentation layer.
//! Pipeline: utilization coefficient → accumulation + regression → comparator.
//! Evaluations share no mutable state, so batches run in parallel.

pub mod batch;
pub mod engine;

pub use batch::EstimateRequest;
pub use engine::Estimator;
