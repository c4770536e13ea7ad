//! # koki-comparison
//!
//! Classifies the gap between the two models' totals.

pub mod comparator;

pub use comparator::Comparator;
