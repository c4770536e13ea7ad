//! # koki-utilization
//!
//! Converts a site's working calendar into a dimensionless work-rate
//! coefficient: actual annual working hours over a calibration baseline.
//! The coefficient can also be supplied directly or taken from a named preset.

pub mod calculator;
pub mod schedule;

pub use calculator::UtilizationCalculator;
pub use schedule::AnnualSchedule;
