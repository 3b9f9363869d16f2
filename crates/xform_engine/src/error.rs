use thiserror::Error;

/// Errors from the evaluation and equivalence machinery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Numeric evaluation produced no usable value (unbound variable,
    /// unknown function, or NaN retries exhausted).
    #[error("numeric evaluation failed: {0}")]
    NumericEvaluation(String),
}
