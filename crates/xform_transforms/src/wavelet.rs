//! Wavelet transform.
//!
//! A discrete wavelet decomposition needs a mother wavelet and a scale
//! ladder that this crate does not model; no single weighted sum stands in
//! for it the way the other discretizations do. Both directions are
//! declared unsupported.

use crate::error::TransformError;
use crate::kind::TransformKind;
use num_complex::Complex64;

pub fn transform_samples(_values: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    Err(TransformError::Unsupported(TransformKind::Wavelet))
}

pub fn invert_samples(_values: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    Err(TransformError::Unsupported(TransformKind::Wavelet))
}
