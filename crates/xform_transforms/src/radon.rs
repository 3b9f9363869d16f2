//! Radon transform.
//!
//! The Radon transform integrates over lines in a two-dimensional field;
//! one-dimensional sample vectors carry no geometry to project. Both
//! directions are declared unsupported rather than silently producing a
//! meaningless number.

use crate::error::TransformError;
use crate::kind::TransformKind;
use num_complex::Complex64;

pub fn transform_samples(_values: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    Err(TransformError::Unsupported(TransformKind::Radon))
}

pub fn invert_samples(_values: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    Err(TransformError::Unsupported(TransformKind::Radon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions_are_unsupported() {
        let data = [Complex64::new(1.0, 0.0)];
        assert_eq!(
            transform_samples(&data).unwrap_err(),
            TransformError::Unsupported(TransformKind::Radon)
        );
        assert_eq!(
            invert_samples(&data).unwrap_err(),
            TransformError::Unsupported(TransformKind::Radon)
        );
    }
}
