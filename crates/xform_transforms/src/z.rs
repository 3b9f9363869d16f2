//! Discrete Z transform.
//!
//! The forward direction is the exact sum `Σ v_i · z^(-n_i)`, evaluated over
//! rationals at each requested `z`. The discretization keeps no record of
//! the index axis inside the evaluated numbers, so inversion is refused as
//! [`TransformError::NotInvertible`].

use crate::error::TransformError;
use crate::kind::TransformKind;
use num_traits::ToPrimitive;
use xform_num::{is_strictly_increasing, standard_axis, CNum};

/// Evaluate `Σ v_i · z^(-n_i)` exactly at each point of `z_values`.
///
/// `indices` defaults to `0, 1, 2, …` and must otherwise be strictly
/// increasing integers of the same length as `values`. A zero `z` is
/// refused up front since every term would divide by zero.
pub fn transform_samples(
    values: &[CNum],
    indices: Option<&[CNum]>,
    z_values: &[CNum],
) -> Result<Vec<CNum>, TransformError> {
    if values.is_empty() {
        return Err(TransformError::InvalidInput(
            "no sample values given".to_string(),
        ));
    }
    if z_values.iter().any(CNum::is_zero) {
        return Err(TransformError::InvalidInput(
            "z must be nonzero".to_string(),
        ));
    }
    let indices: Vec<i64> = match indices {
        Some(given) => {
            if given.len() != values.len() {
                return Err(TransformError::InvalidInput(format!(
                    "{} values but {} index points",
                    values.len(),
                    given.len()
                )));
            }
            if !is_strictly_increasing(given) {
                return Err(TransformError::InvalidInput(
                    "index axis must be strictly increasing".to_string(),
                ));
            }
            given.iter().map(index_as_integer).collect::<Result<_, _>>()?
        }
        None => (0..values.len() as i64).collect(),
    };

    let mut out = Vec::with_capacity(z_values.len());
    for z in z_values {
        let mut acc = CNum::zero();
        for (value, &n) in values.iter().zip(&indices) {
            let power = z.powi(-n).ok_or_else(|| {
                TransformError::NumericEvaluation(
                    "zero base raised to a negative power".to_string(),
                )
            })?;
            acc = acc + value.clone() * power;
        }
        out.push(acc);
    }
    Ok(out)
}

/// The discrete Z transform collapses the whole sequence into one number per
/// evaluation point; there is nothing to invert.
pub fn invert_samples(_values: &[CNum]) -> Result<Vec<CNum>, TransformError> {
    Err(TransformError::NotInvertible(TransformKind::Z))
}

fn index_as_integer(index: &CNum) -> Result<i64, TransformError> {
    if !index.is_real() || !index.re.is_integer() {
        return Err(TransformError::InvalidInput(format!(
            "index {index} is not an integer"
        )));
    }
    index.re.to_integer().to_i64().ok_or_else(|| {
        TransformError::InvalidInput(format!("index {index} is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    fn reals(values: &[i64]) -> Vec<CNum> {
        values.iter().map(|&v| CNum::from_i64(v)).collect()
    }

    #[test]
    fn unit_sequence_sums_geometric_tail() {
        // Σ z^-n for n = 0..3: 1 + 1/2 + 1/4 + 1/8 = 15/8 at z = 2 and
        // 1 + 1/3 + 1/9 + 1/27 = 40/27 at z = 3.
        let values = reals(&[1, 1, 1, 1]);
        let out = transform_samples(&values, None, &reals(&[2, 3])).unwrap();
        assert_eq!(
            out,
            vec![
                CNum::from_re(BigRational::new(15.into(), 8.into())),
                CNum::from_re(BigRational::new(40.into(), 27.into())),
            ]
        );
    }

    #[test]
    fn custom_integer_indices() {
        // 2·z^0 + 3·z^-2 at z = 2 is 2 + 3/4.
        let values = reals(&[2, 3]);
        let indices = reals(&[0, 2]);
        let out = transform_samples(&values, Some(&indices), &reals(&[2])).unwrap();
        assert_eq!(out, vec![CNum::from_re(BigRational::new(11.into(), 4.into()))]);
    }

    #[test]
    fn zero_z_is_invalid() {
        let values = reals(&[1]);
        let err = transform_samples(&values, None, &[CNum::zero()]).unwrap_err();
        assert!(matches!(err, TransformError::InvalidInput(_)));
    }

    #[test]
    fn fractional_index_is_invalid() {
        let values = reals(&[1]);
        let indices = vec![CNum::from_re(BigRational::new(1.into(), 2.into()))];
        let err = transform_samples(&values, Some(&indices), &reals(&[2])).unwrap_err();
        assert!(matches!(err, TransformError::InvalidInput(_)));
    }

    #[test]
    fn inversion_is_refused() {
        assert_eq!(
            invert_samples(&reals(&[1])).unwrap_err(),
            TransformError::NotInvertible(TransformKind::Z)
        );
    }
}
