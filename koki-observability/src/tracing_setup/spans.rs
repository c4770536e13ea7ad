//! Span definitions per operation: single estimate and batch.

/// Create a span for one estimate.
#[macro_export]
macro_rules! estimate_span {
    ($project:expr) => {
        tracing::info_span!("koki.estimate", project = %$project)
    };
}

/// Create a span for a batch of estimates.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("koki.batch", batch_size = $batch_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATE: &str = "koki.estimate";
    pub const BATCH: &str = "koki.batch";
}
