/// Top-level error for the estimator.
///
/// Engines only ever raise `InvalidInput`. `ConfigError` belongs to the
/// calibration loading layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KokiError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl KokiError {
    /// Shorthand for an `InvalidInput` error on a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a `ConfigError`.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Whether this error stems from caller-supplied input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<toml::de::Error> for KokiError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}
