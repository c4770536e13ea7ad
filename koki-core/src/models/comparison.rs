use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of comparing the two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Consistent,
    BHigher,
    BLower,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consistent => f.write_str("consistent"),
            Self::BHigher => f.write_str("B higher"),
            Self::BLower => f.write_str("B lower"),
        }
    }
}

/// Qualitative explanation attached to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyReason {
    /// Difference below the threshold.
    WithinTolerance,
    /// The regression model weights area, usage and site terms the per-trade model ignores.
    ScaleAndSiteEffects,
    /// The utilization coefficient stretches per-trade durations past the calendar statistic.
    UtilizationPenalty,
}

impl DiscrepancyReason {
    pub fn for_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Consistent => Self::WithinTolerance,
            Verdict::BHigher => Self::ScaleAndSiteEffects,
            Verdict::BLower => Self::UtilizationPenalty,
        }
    }
}

/// Comparator output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub verdict: Verdict,
    /// `method_b_total - method_a_total`, signed.
    pub magnitude: f64,
    /// `magnitude / method_a_total`; absent when the accumulation total is zero.
    pub relative_difference: Option<f64>,
    pub reason: DiscrepancyReason,
    /// Threshold the verdict was judged against.
    pub threshold: f64,
}

impl Comparison {
    pub fn is_consistent(&self) -> bool {
        self.verdict == Verdict::Consistent
    }
}
