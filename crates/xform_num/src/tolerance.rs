//! Decimal-places tolerance for numeric comparison.
//!
//! A tolerance of `dps` decimal places accepts `a` and `b` when
//! `|a - b| <= 10^-dps * max(1, |a|, |b|)`: relative agreement with an
//! absolute floor near zero. The rational form compares squared magnitudes
//! so the check is exact.

use crate::complex::CNum;
use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::One;

/// Number of decimal places two values must agree to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    pub dps: u32,
}

impl Default for Tolerance {
    fn default() -> Self {
        // Matches the tolerance the original test-suite compares with.
        Tolerance { dps: 10 }
    }
}

impl Tolerance {
    pub fn new(dps: u32) -> Self {
        Self { dps }
    }

    /// `(10^-dps)^2` as an exact rational.
    fn eps_sqr(&self) -> BigRational {
        let scale = BigInt::from(10u32).pow(self.dps);
        BigRational::new(BigInt::from(1), &scale * &scale)
    }

    pub fn eps_f64(&self) -> f64 {
        10f64.powi(-(self.dps as i32))
    }
}

/// Exact almost-equality of two rational complex numbers.
pub fn almost_eq(a: &CNum, b: &CNum, tol: Tolerance) -> bool {
    let diff = a.clone() - b.clone();
    let diff_sqr = diff.norm_sqr();
    let mut scale_sqr = BigRational::one();
    let a_sqr = a.norm_sqr();
    let b_sqr = b.norm_sqr();
    if a_sqr > scale_sqr {
        scale_sqr = a_sqr;
    }
    if b_sqr > scale_sqr {
        scale_sqr = b_sqr;
    }
    diff_sqr <= tol.eps_sqr() * scale_sqr
}

/// Floating variant used by the sampling strategies.
pub fn almost_eq_c64(a: Complex64, b: Complex64, tol: Tolerance) -> bool {
    // Bitwise-equal values short-circuit, so two sides overflowing to the
    // same infinity still agree. NaN never equals itself and falls through
    // to the rejection below.
    if a == b {
        return true;
    }
    if !a.re.is_finite() || !a.im.is_finite() || !b.re.is_finite() || !b.im.is_finite() {
        return false;
    }
    let scale = a.norm().max(b.norm()).max(1.0);
    (a - b).norm() <= tol.eps_f64() * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> CNum {
        CNum::from_f64_pair(re, im).unwrap()
    }

    #[test]
    fn identical_values_are_equal() {
        assert!(almost_eq(&c(1.5, -2.0), &c(1.5, -2.0), Tolerance::default()));
    }

    #[test]
    fn tolerance_is_relative_to_magnitude() {
        let a = c(1_000_000.0, 0.0);
        let b = c(1_000_000.0001, 0.0);
        assert!(almost_eq(&a, &b, Tolerance::new(9)));
        assert!(!almost_eq(&a, &b, Tolerance::new(12)));
    }

    #[test]
    fn absolute_floor_near_zero() {
        let a = c(0.0, 0.0);
        let b = c(1e-12, 0.0);
        assert!(almost_eq(&a, &b, Tolerance::new(10)));
        assert!(!almost_eq(&a, &b, Tolerance::new(14)));
    }

    #[test]
    fn floating_variant_rejects_nan() {
        let tol = Tolerance::default();
        assert!(!almost_eq_c64(
            Complex64::new(f64::NAN, 0.0),
            Complex64::new(0.0, 0.0),
            tol
        ));
        assert!(!almost_eq_c64(
            Complex64::new(f64::NAN, 0.0),
            Complex64::new(f64::NAN, 0.0),
            tol
        ));
    }

    #[test]
    fn equal_infinities_compare_equal() {
        let tol = Tolerance::default();
        let inf = Complex64::new(f64::INFINITY, 0.0);
        assert!(almost_eq_c64(inf, inf, tol));
        assert!(!almost_eq_c64(inf, Complex64::new(f64::NEG_INFINITY, 0.0), tol));
        assert!(!almost_eq_c64(inf, Complex64::new(1.0, 0.0), tol));
    }
}
