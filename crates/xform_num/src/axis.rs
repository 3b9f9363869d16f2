//! Sampling-axis helpers shared by the discrete transforms.

use crate::complex::CNum;
use crate::error::NumError;
use num_bigint::BigInt;
use num_rational::BigRational;

/// Default axis `0, 1, …, n-1` used when the caller supplies no time points.
pub fn standard_axis(n: usize) -> Vec<CNum> {
    (0..n).map(|i| CNum::from_i64(i as i64)).collect()
}

/// Per-sample integration weights for the discrete weighted sum.
///
/// `delta[i] = axis[i+1] - axis[i]` for all but the last entry. The last
/// sample has no successor, so it is weighted by the arithmetic mean of the
/// preceding deltas; this keeps the final sample contributing finite weight
/// instead of being dropped. A single-point axis gets the unit delta.
pub fn summation_deltas(axis: &[CNum]) -> Result<Vec<CNum>, NumError> {
    if axis.is_empty() {
        return Err(NumError::InvalidInput("axis must not be empty".to_string()));
    }
    if axis.len() == 1 {
        return Ok(vec![CNum::from_i64(1)]);
    }

    let mut deltas: Vec<CNum> = axis.windows(2).map(|w| w[1].clone() - w[0].clone()).collect();
    let count = BigRational::from_integer(BigInt::from(deltas.len() as i64));
    let sum = deltas.iter().cloned().fold(CNum::zero(), |acc, d| acc + d);
    let mean = CNum::new(sum.re / &count, sum.im / &count);
    deltas.push(mean);
    Ok(deltas)
}

/// Strictly increasing real parts; the invariant a time axis must hold.
pub fn is_strictly_increasing(axis: &[CNum]) -> bool {
    axis.windows(2).all(|w| w[0].re < w[1].re)
}
