//! Property tests for exact complex arithmetic and axis weights.

use num_rational::BigRational;
use proptest::prelude::*;
use xform_num::{almost_eq, standard_axis, summation_deltas, CNum, Tolerance};

fn arb_cnum() -> impl Strategy<Value = CNum> {
    (-50i64..=50, 1i64..=10, -50i64..=50, 1i64..=10).prop_map(|(re_n, re_d, im_n, im_d)| {
        CNum::new(
            BigRational::new(re_n.into(), re_d.into()),
            BigRational::new(im_n.into(), im_d.into()),
        )
    })
}

proptest! {
    #[test]
    fn multiplication_distributes_over_addition(
        a in arb_cnum(), b in arb_cnum(), c in arb_cnum()
    ) {
        let lhs = a.clone() * (b.clone() + c.clone());
        let rhs = a.clone() * b + a * c;
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn division_inverts_multiplication(a in arb_cnum(), b in arb_cnum()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.clone() * b.clone() / b, a);
    }

    #[test]
    fn powi_splits_over_exponent_sum(a in arb_cnum(), m in 0i64..6, n in 0i64..6) {
        let combined = a.powi(m + n).unwrap();
        let split = a.powi(m).unwrap() * a.powi(n).unwrap();
        prop_assert_eq!(combined, split);
    }

    #[test]
    fn almost_eq_is_reflexive_and_symmetric(a in arb_cnum(), b in arb_cnum()) {
        let tol = Tolerance::default();
        prop_assert!(almost_eq(&a, &a, tol));
        prop_assert_eq!(almost_eq(&a, &b, tol), almost_eq(&b, &a, tol));
    }

    #[test]
    fn deltas_cover_the_axis_span(n in 2usize..20) {
        // The first n-1 deltas are the diffs, so they telescope to
        // last - first; the axis is 0..n so that span is n-1.
        let axis = standard_axis(n);
        let deltas = summation_deltas(&axis).unwrap();
        prop_assert_eq!(deltas.len(), n);
        let span = deltas[..n - 1]
            .iter()
            .cloned()
            .fold(CNum::zero(), |acc, d| acc + d);
        prop_assert_eq!(span, CNum::from_i64((n - 1) as i64));
    }
}
