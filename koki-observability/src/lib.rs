//! # koki-observability
//!
//! Structured logging for the estimator: subscriber setup, span macros,
//! and typed log events.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
