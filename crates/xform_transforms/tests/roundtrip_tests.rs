//! Property tests for the invertible discrete transforms.

use num_complex::Complex64;
use proptest::prelude::*;
use xform_ast::Context;
use xform_num::CNum;
use xform_transforms::{fourier, hankel, laplace, z, TransformError, TransformKind};

/// Sample values paired with strictly increasing integer times.
fn arb_samples() -> impl Strategy<Value = (Vec<CNum>, Vec<CNum>)> {
    prop::collection::vec((-100i64..=100, 1u8..=9), 1..12).prop_map(|pairs| {
        let mut t = 0i64;
        let mut values = Vec::with_capacity(pairs.len());
        let mut times = Vec::with_capacity(pairs.len());
        for (value, gap) in pairs {
            values.push(CNum::from_i64(value));
            times.push(CNum::from_i64(t));
            t += gap as i64;
        }
        (values, times)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Inverting the weighted Laplace sum recovers values and times exactly,
    /// zeros included.
    #[test]
    fn laplace_round_trip_is_exact((values, times) in arb_samples()) {
        let mut ctx = Context::new();
        let sum = laplace::transform_samples(&mut ctx, &values, Some(&times)).unwrap();
        let (recovered, recovered_times) = laplace::invert_samples(&mut ctx, sum).unwrap();
        prop_assert_eq!(recovered, values);
        prop_assert_eq!(recovered_times, times);
    }

    /// Forward-then-inverse DFT reproduces the input within floating error.
    #[test]
    fn fourier_round_trip(data in prop::collection::vec(
        (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(re, im)| Complex64::new(re, im)),
        1..20,
    )) {
        let back = fourier::invert_samples(&fourier::transform_samples(&data).unwrap()).unwrap();
        for (x, y) in data.iter().zip(&back) {
            prop_assert!((x - y).norm() < 1e-6);
        }
    }
}

#[test]
fn lossy_transforms_refuse_inversion() {
    assert_eq!(
        z::invert_samples(&[CNum::from_i64(7)]).unwrap_err(),
        TransformError::NotInvertible(TransformKind::Z)
    );
    assert_eq!(
        hankel::invert_samples(&[Complex64::new(7.0, 0.0)]).unwrap_err(),
        TransformError::NotInvertible(TransformKind::Hankel)
    );
}
