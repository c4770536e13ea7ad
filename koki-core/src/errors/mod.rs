mod koki_error;

pub use koki_error::KokiError;

/// Result alias used across the workspace.
pub type KokiResult<T> = Result<T, KokiError>;
