//! Exact complex arithmetic and numeric comparison utilities.
//!
//! Sample values flow through the transforms as [`CNum`], a complex number
//! with `BigRational` components, so forward/inverse round trips stay exact.
//! Floating-point only enters at sampling and presentation boundaries.

pub mod axis;
pub mod bessel;
pub mod complex;
pub mod deep;
pub mod error;
pub mod tolerance;

pub use axis::{is_strictly_increasing, standard_axis, summation_deltas};
pub use bessel::bessel_j;
pub use complex::CNum;
pub use deep::{deep_almost_equal, Nested};
pub use error::NumError;
pub use tolerance::{almost_eq, almost_eq_c64, Tolerance};
