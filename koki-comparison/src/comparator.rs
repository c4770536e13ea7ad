use koki_core::config::ComparisonConfig;
use koki_core::models::{Comparison, DiscrepancyReason, Verdict};

/// Pure comparator of two totals.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: ComparisonConfig,
}

impl Comparator {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Comparator with an explicit threshold in months.
    pub fn with_threshold(threshold_months: f64) -> Self {
        Self {
            config: ComparisonConfig {
                discrepancy_threshold_months: threshold_months,
            },
        }
    }

    pub fn threshold(&self) -> f64 {
        self.config.discrepancy_threshold_months
    }

    /// Compare Method A against Method B.
    ///
    /// `magnitude = b − a`; `|magnitude| < threshold` is consistent, and so
    /// is an exact tie even when the threshold is zero.
    pub fn compare(&self, method_a_total: f64, method_b_total: f64) -> Comparison {
        let threshold = self.threshold();
        let magnitude = method_b_total - method_a_total;

        let verdict = if magnitude == 0.0 || magnitude.abs() < threshold {
            Verdict::Consistent
        } else if magnitude > 0.0 {
            Verdict::BHigher
        } else {
            Verdict::BLower
        };

        let relative_difference = if method_a_total != 0.0 {
            Some(magnitude / method_a_total)
        } else {
            None
        };

        Comparison {
            verdict,
            magnitude,
            relative_difference,
            reason: DiscrepancyReason::for_verdict(verdict),
            threshold,
        }
    }
}
