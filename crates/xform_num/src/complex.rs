//! Exact complex numbers over `BigRational`.

use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A complex number with exact rational components.
///
/// Division by an exact zero panics, matching the behavior of the underlying
/// `BigRational` operators; callers validate divisors where zero is possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CNum {
    pub re: BigRational,
    pub im: BigRational,
}

impl CNum {
    pub fn new(re: BigRational, im: BigRational) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_i64(n: i64) -> Self {
        Self { re: BigRational::from_integer(BigInt::from(n)), im: BigRational::zero() }
    }

    pub fn from_re(re: BigRational) -> Self {
        Self { re, im: BigRational::zero() }
    }

    /// Exact conversion of a pair of binary floats. Returns `None` for
    /// non-finite components.
    pub fn from_f64_pair(re: f64, im: f64) -> Option<Self> {
        Some(Self {
            re: BigRational::from_f64(re)?,
            im: BigRational::from_f64(im)?,
        })
    }

    pub fn i() -> Self {
        Self { re: BigRational::zero(), im: BigRational::from_integer(BigInt::from(1)) }
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    pub fn conj(&self) -> Self {
        Self { re: self.re.clone(), im: -self.im.clone() }
    }

    /// Squared modulus, exact. Comparisons on magnitudes go through this to
    /// avoid an irrational square root.
    pub fn norm_sqr(&self) -> BigRational {
        &self.re * &self.re + &self.im * &self.im
    }

    /// Integer power by repeated squaring. Negative exponents invert;
    /// `0^negative` is refused with `None`.
    pub fn powi(&self, exp: i64) -> Option<Self> {
        if exp < 0 {
            if self.is_zero() {
                return None;
            }
            let inv = CNum::from_i64(1) / self.clone();
            return inv.powi(-exp);
        }
        let mut base = self.clone();
        let mut exp = exp as u64;
        let mut acc = CNum::from_i64(1);
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }
        Some(acc)
    }

    /// Lossy conversion for floating evaluation.
    pub fn to_complex64(&self) -> Complex64 {
        Complex64::new(
            self.re.to_f64().unwrap_or(f64::NAN),
            self.im.to_f64().unwrap_or(f64::NAN),
        )
    }
}

impl fmt::Display for CNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_zero() {
            write!(f, "{}", self.re)
        } else if self.re.is_zero() {
            write!(f, "{}i", self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl Add for CNum {
    type Output = CNum;
    fn add(self, rhs: CNum) -> CNum {
        CNum { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}

impl Sub for CNum {
    type Output = CNum;
    fn sub(self, rhs: CNum) -> CNum {
        CNum { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}

impl Mul for CNum {
    type Output = CNum;
    fn mul(self, rhs: CNum) -> CNum {
        CNum {
            re: &self.re * &rhs.re - &self.im * &rhs.im,
            im: &self.re * &rhs.im + &self.im * &rhs.re,
        }
    }
}

impl Div for CNum {
    type Output = CNum;
    fn div(self, rhs: CNum) -> CNum {
        let denom = rhs.norm_sqr();
        let num = self * rhs.conj();
        CNum { re: num.re / &denom, im: num.im / &denom }
    }
}

impl Neg for CNum {
    type Output = CNum;
    fn neg(self) -> CNum {
        CNum { re: -self.re, im: -self.im }
    }
}
