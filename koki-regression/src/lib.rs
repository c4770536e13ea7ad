//! # koki-regression
//!
//! Regression duration model ("Method B").
//! Computes total duration directly from a weighted sum of categorical and
//! scale terms, with a coefficient table chosen by height tier.
//! Already calendar-adjusted: it never reads the utilization coefficient.

pub mod engine;
pub mod formula;

pub use engine::RegressionEngine;
