//! Error types for footprint calculation

use thiserror::Error;

/// Main error type for footprint operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FootprintError {
    /// A request field could not be coerced to its declared type
    #[error("invalid value for '{field}': {reason}")]
    InvalidInput {
        /// Wire name of the offending field
        field: &'static str,
        /// What was wrong with the value
        reason: String,
    },
}

impl FootprintError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FootprintError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for footprint operations
pub type Result<T> = std::result::Result<T, FootprintError>;
