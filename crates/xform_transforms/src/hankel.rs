//! Discrete Hankel transform.
//!
//! The forward direction approximates `∫ f(r)·J_ν(k·r)·r dr` on sampled data
//! as `Σ v_i · J_ν(k·r_i) · r_i`, evaluated at each requested wavenumber.
//! Bessel values are irrational, so this transform works in floating point
//! rather than over rationals. The weighted Bessel sum has no general
//! closed-form inverse, so inversion is refused as
//! [`TransformError::NotInvertible`].

use crate::error::TransformError;
use crate::kind::TransformKind;
use num_complex::Complex64;
use xform_num::bessel_j;

/// Evaluate the discrete Hankel transform of order `order` at each point of
/// `k_values`.
///
/// `radii` defaults to `0, 1, 2, …`; when given it must match `values` in
/// length and be finite and strictly increasing. A sample at `r = 0`
/// contributes nothing because the kernel carries the measure factor `r`.
pub fn transform_samples(
    values: &[Complex64],
    radii: Option<&[f64]>,
    k_values: &[f64],
    order: u32,
) -> Result<Vec<Complex64>, TransformError> {
    if values.is_empty() {
        return Err(TransformError::InvalidInput(
            "no sample values given".to_string(),
        ));
    }
    if k_values.iter().any(|k| !k.is_finite()) {
        return Err(TransformError::InvalidInput(
            "wavenumbers must be finite".to_string(),
        ));
    }
    if values.iter().any(|v| !v.re.is_finite() || !v.im.is_finite()) {
        return Err(TransformError::InvalidInput(
            "sample values must be finite".to_string(),
        ));
    }
    let radii: Vec<f64> = match radii {
        Some(given) => {
            if given.len() != values.len() {
                return Err(TransformError::InvalidInput(format!(
                    "{} values but {} radii",
                    values.len(),
                    given.len()
                )));
            }
            if given.iter().any(|r| !r.is_finite()) {
                return Err(TransformError::InvalidInput(
                    "radii must be finite".to_string(),
                ));
            }
            if given.windows(2).any(|w| w[0] >= w[1]) {
                return Err(TransformError::InvalidInput(
                    "radii must be strictly increasing".to_string(),
                ));
            }
            given.to_vec()
        }
        None => (0..values.len()).map(|i| i as f64).collect(),
    };

    let mut out = Vec::with_capacity(k_values.len());
    for &k in k_values {
        let mut acc = Complex64::new(0.0, 0.0);
        for (value, &r) in values.iter().zip(&radii) {
            let kernel = bessel_j(order, Complex64::new(k * r, 0.0));
            acc += value * kernel * r;
        }
        out.push(acc);
    }
    Ok(out)
}

/// The weighted Bessel sum cannot be decomposed back into samples.
pub fn invert_samples(_values: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    Err(TransformError::NotInvertible(TransformKind::Hankel))
}
