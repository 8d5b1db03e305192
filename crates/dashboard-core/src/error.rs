// File: crates/dashboard-core/src/error.rs
// Summary: Error taxonomy shared by palette lookup, color parsing, derivation and settings.

use thiserror::Error;

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Unknown palette key.
    #[error("palette `{0}` not found")]
    NotFound(String),

    /// Malformed hex color or alpha suffix.
    #[error("invalid color `{input}`: {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    /// Mismatched lengths, out-of-range parameters, zero baselines.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl DashboardError {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        Self::InvalidFormat { input: input.to_string(), reason }
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
