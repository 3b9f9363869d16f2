use thiserror::Error;

/// Errors from numeric utilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Deep comparison found differently-shaped containers. This is a caller
    /// bug, not an unequal result, so it surfaces as an error.
    #[error("shape mismatch at depth {depth}: {reason}")]
    ShapeMismatch { depth: usize, reason: String },

    #[error("value is not a finite number")]
    NotANumber,
}
