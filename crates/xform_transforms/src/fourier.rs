//! Discrete Fourier transform pair.
//!
//! Forward is `X_k = Σ x_n · exp(-2πi·k·n/N)`, inverse is the conjugate sum
//! scaled by `1/N`, so the pair round-trips exactly up to floating error.
//! Power-of-two lengths take an iterative radix-2 path; everything else
//! falls back to the direct `O(N²)` sum.

use crate::error::TransformError;
use num_complex::Complex64;
use std::f64::consts::PI;
use tracing::trace;

/// Forward DFT of the samples.
pub fn transform_samples(values: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    dft(values, Direction::Forward)
}

/// Inverse DFT, scaled by `1/N`.
pub fn invert_samples(values: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    let n = values.len() as f64;
    let mut out = dft(values, Direction::Inverse)?;
    for v in &mut out {
        *v /= n;
    }
    Ok(out)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

fn dft(values: &[Complex64], direction: Direction) -> Result<Vec<Complex64>, TransformError> {
    if values.is_empty() {
        return Err(TransformError::InvalidInput(
            "no sample values given".to_string(),
        ));
    }
    if values.iter().any(|v| !v.re.is_finite() || !v.im.is_finite()) {
        return Err(TransformError::InvalidInput(
            "sample values must be finite".to_string(),
        ));
    }
    if values.len().is_power_of_two() {
        trace!(len = values.len(), "radix-2 path");
        Ok(fft_radix2(values, direction))
    } else {
        trace!(len = values.len(), "direct sum path");
        Ok(dft_direct(values, direction))
    }
}

fn dft_direct(values: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = values.len();
    let base = direction.sign() * 2.0 * PI / n as f64;
    (0..n)
        .map(|k| {
            values
                .iter()
                .enumerate()
                .map(|(j, &x)| x * Complex64::from_polar(1.0, base * (k * j) as f64))
                .sum()
        })
        .collect()
}

/// Iterative radix-2 FFT: bit-reversal permutation, then in-place butterfly
/// passes of doubling width.
fn fft_radix2(values: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = values.len();
    let mut data = values.to_vec();

    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_bits(i, bits);
        if j > i {
            data.swap(i, j);
        }
    }

    let mut width = 2;
    while width <= n {
        let angle = direction.sign() * 2.0 * PI / width as f64;
        let root = Complex64::from_polar(1.0, angle);
        for chunk in data.chunks_mut(width) {
            let mut twiddle = Complex64::new(1.0, 0.0);
            for pair in 0..width / 2 {
                let upper = chunk[pair];
                let lower = chunk[pair + width / 2] * twiddle;
                chunk[pair] = upper + lower;
                chunk[pair + width / 2] = upper - lower;
                twiddle *= root;
            }
        }
        width <<= 1;
    }
    data
}

fn reverse_bits(value: usize, bits: u32) -> usize {
    let mut reversed = 0;
    for bit in 0..bits {
        if value & (1 << bit) != 0 {
            reversed |= 1 << (bits - 1 - bit);
        }
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &[Complex64], b: &[Complex64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).norm() < 1e-9)
    }

    fn reals(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|&v| Complex64::new(v, 0.0)).collect()
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let spectrum = transform_samples(&reals(&[1.0, 0.0, 0.0, 0.0])).unwrap();
        assert!(close(&spectrum, &reals(&[1.0, 1.0, 1.0, 1.0])));
    }

    #[test]
    fn constant_concentrates_in_dc_bin() {
        let spectrum = transform_samples(&reals(&[1.0, 1.0, 1.0, 1.0])).unwrap();
        assert!(close(&spectrum, &reals(&[4.0, 0.0, 0.0, 0.0])));
    }

    #[test]
    fn round_trip_power_of_two() {
        let data = reals(&[3.0, -1.5, 0.25, 8.0, -2.0, 0.0, 1.0, 1.0]);
        let back = invert_samples(&transform_samples(&data).unwrap()).unwrap();
        assert!(close(&back, &data));
    }

    #[test]
    fn round_trip_non_power_of_two() {
        // Length 6 exercises the direct-sum path.
        let data = vec![
            Complex64::new(1.0, 2.0),
            Complex64::new(-3.0, 0.5),
            Complex64::new(0.0, -1.0),
            Complex64::new(4.0, 4.0),
            Complex64::new(-0.5, 0.0),
            Complex64::new(2.0, -2.0),
        ];
        let back = invert_samples(&transform_samples(&data).unwrap()).unwrap();
        assert!(close(&back, &data));
    }

    #[test]
    fn radix2_matches_direct_sum() {
        let data = reals(&[0.5, 1.5, -2.0, 3.25, 0.0, -1.0, 7.0, 2.0]);
        let fast = fft_radix2(&data, Direction::Forward);
        let slow = dft_direct(&data, Direction::Forward);
        assert!(close(&fast, &slow));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(
            transform_samples(&[]),
            Err(TransformError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_finite_input_is_invalid() {
        let data = vec![Complex64::new(f64::NAN, 0.0)];
        assert!(matches!(
            transform_samples(&data),
            Err(TransformError::InvalidInput(_))
        ));
    }
}
