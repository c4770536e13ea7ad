//! # koki-accumulation
//!
//! Accumulation duration model ("Method A").
//! Sums per-trade durations: piling, substructure, superstructure, finishing.
//! Labor-bound trades are divided by the utilization coefficient; finishing
//! is calendar-fixed. A top-down variant recovers part of the substructure.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::AccumulationEngine;
pub use factors::TradeRates;
