//! Structured log events for key estimator operations.
//!
//! Each function emits a `tracing` event with structured fields.

use koki_core::models::{Comparison, Verdict};

/// Log the coefficient an estimate will use.
pub fn coefficient_resolved(source: &str, coefficient: f64) {
    tracing::debug!(
        event = "coefficient_resolved",
        source = %source,
        coefficient = coefficient,
        "utilization coefficient resolved"
    );
}

/// Log a finished estimate.
pub fn estimate_completed(method_a_total: f64, method_b_total: f64, verdict: Verdict) {
    tracing::info!(
        event = "estimate_completed",
        method_a_total = method_a_total,
        method_b_total = method_b_total,
        verdict = %verdict,
        "estimate completed"
    );
}

/// Log a model disagreement beyond the threshold.
pub fn discrepancy_flagged(comparison: &Comparison) {
    tracing::warn!(
        event = "discrepancy_flagged",
        verdict = %comparison.verdict,
        magnitude = comparison.magnitude,
        threshold = comparison.threshold,
        reason = ?comparison.reason,
        "models disagree beyond threshold"
    );
}

/// Log an input rejected before evaluation.
pub fn input_rejected(reason: &str) {
    tracing::warn!(
        event = "input_rejected",
        reason = %reason,
        "estimate input rejected"
    );
}

/// Log a finished batch.
pub fn batch_completed(total: usize, failed: usize) {
    tracing::info!(
        event = "batch_completed",
        total = total,
        failed = failed,
        "estimate batch completed"
    );
}
