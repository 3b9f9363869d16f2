use crate::kind::TransformKind;
use thiserror::Error;
use xform_num::NumError;

/// Errors across the transform operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Malformed caller input (mismatched lengths, empty data,
    /// non-increasing axis). Fatal, never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The discrete approximation of this transform is lossy and has no
    /// general closed-form inverse. A well-defined refusal, not a bug.
    #[error("the discrete {0} transform is not invertible")]
    NotInvertible(TransformKind),

    /// The operation is not provided for this transform kind.
    #[error("the {0} transform does not support this operation")]
    Unsupported(TransformKind),

    /// A numeric evaluation produced no usable value.
    #[error("numeric evaluation failed: {0}")]
    NumericEvaluation(String),
}

impl From<NumError> for TransformError {
    fn from(err: NumError) -> Self {
        match err {
            NumError::InvalidInput(msg) => TransformError::InvalidInput(msg),
            NumError::ShapeMismatch { depth, reason } => TransformError::InvalidInput(format!(
                "shape mismatch at depth {depth}: {reason}"
            )),
            NumError::NotANumber => {
                TransformError::NumericEvaluation("value is not a finite number".to_string())
            }
        }
    }
}
