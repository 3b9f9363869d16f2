//! Discrete approximations of integral transforms and their inversions.
//!
//! Each transform lives in its own module with free functions; the common
//! vocabulary is [`TransformKind`] for capability queries and
//! [`TransformError`] for the shared failure modes. The Laplace transform is
//! the fully symbolic one: its forward pass builds an expression in `s` that
//! [`laplace::invert_samples`] can take apart exactly. Z stays exact over
//! rationals, Fourier and Hankel evaluate in floating point.

pub mod error;
pub mod fourier;
pub mod hankel;
pub mod kind;
pub mod laplace;
pub mod radon;
pub mod wavelet;
pub mod z;

pub use error::TransformError;
pub use kind::TransformKind;

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use xform_ast::{Context, DisplayExpr, ExprId};
use xform_engine::eval_complex;

/// Evaluate a symbolic transform result numerically at a list of points for
/// its free variable.
///
/// This is the presentation-side bridge: exact expressions come out of
/// [`laplace::transform_samples`], and plotting or spot-checking wants plain
/// complex numbers at concrete `s`.
pub fn eval_at(
    ctx: &Context,
    expr: ExprId,
    var: &str,
    points: &[Complex64],
) -> Result<Vec<Complex64>, TransformError> {
    let mut out = Vec::with_capacity(points.len());
    let mut vars = FxHashMap::default();
    for &point in points {
        vars.insert(var.to_string(), point);
        let value = eval_complex(ctx, expr, &vars)
            .filter(|v| v.re.is_finite() && v.im.is_finite())
            .ok_or_else(|| {
                TransformError::NumericEvaluation(format!(
                    "cannot evaluate {} at {} = {}",
                    DisplayExpr { context: ctx, id: expr },
                    var,
                    point
                ))
            })?;
        out.push(value);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xform_num::CNum;

    #[test]
    fn eval_at_matches_hand_computation() {
        let mut ctx = Context::new();
        let values = [CNum::from_i64(2), CNum::from_i64(3)];
        let sum = laplace::transform_samples(&mut ctx, &values, None).unwrap();
        // 2·Δ0 + 3·exp(-s)·Δ1 with Δ0 = 1, Δ1 = 1; at s = 0 that is 5.
        let out = eval_at(&ctx, sum, laplace::LAPLACE_VAR, &[Complex64::new(0.0, 0.0)]).unwrap();
        assert!((out[0] - Complex64::new(5.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn eval_at_reports_unevaluable_points() {
        let mut ctx = Context::new();
        let s = ctx.var("s");
        let one = ctx.num(1);
        let recip = ctx.add(xform_ast::Expr::Div(one, s));
        let err = eval_at(&ctx, recip, "s", &[Complex64::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, TransformError::NumericEvaluation(_)));
    }
}
