//! Structural/semantic equality of expressions.
//!
//! A cheap, sound check: `true` means the expressions are definitely equal,
//! `false` means this strategy could not prove it (not that they differ).
//! Handles commutative `Add`/`Mul`, `Neg`/`Mul(-1, ·)` aliasing, and exact
//! constant equality across different spellings (`Div(1,2)` vs `1/2`).

use crate::const_eval::as_complex_const;
use num_rational::BigRational;
use xform_ast::{unwrap_hold, Context, Expr, ExprId};

/// Sound one-sided equality: `true` ⇒ equal.
pub fn semantically_equal(ctx: &Context, a: ExprId, b: ExprId) -> bool {
    let a = unwrap_hold(ctx, a);
    let b = unwrap_hold(ctx, b);
    if a == b {
        return true;
    }

    // Exact constant fragment: different spellings of the same value.
    if let (Some(x), Some(y)) = (as_complex_const(ctx, a), as_complex_const(ctx, b)) {
        return x == y;
    }

    match (ctx.get(a), ctx.get(b)) {
        (Expr::Number(n1), Expr::Number(n2)) => n1 == n2,
        (Expr::Variable(v1), Expr::Variable(v2)) => v1 == v2,
        (Expr::Constant(c1), Expr::Constant(c2)) => c1 == c2,
        (Expr::Add(l1, r1), Expr::Add(l2, r2)) | (Expr::Mul(l1, r1), Expr::Mul(l2, r2)) => {
            (semantically_equal(ctx, *l1, *l2) && semantically_equal(ctx, *r1, *r2))
                || (semantically_equal(ctx, *l1, *r2) && semantically_equal(ctx, *r1, *l2))
        }
        (Expr::Sub(l1, r1), Expr::Sub(l2, r2))
        | (Expr::Div(l1, r1), Expr::Div(l2, r2))
        | (Expr::Pow(l1, r1), Expr::Pow(l2, r2)) => {
            semantically_equal(ctx, *l1, *l2) && semantically_equal(ctx, *r1, *r2)
        }
        (Expr::Neg(e1), Expr::Neg(e2)) => semantically_equal(ctx, *e1, *e2),
        (Expr::Function(n1, a1), Expr::Function(n2, a2)) => {
            n1 == n2
                && a1.len() == a2.len()
                && a1.iter().zip(a2).all(|(x, y)| semantically_equal(ctx, *x, *y))
        }
        // Neg(x) vs Mul(-1, x) in either orientation.
        (Expr::Neg(inner), Expr::Mul(l, r)) | (Expr::Mul(l, r), Expr::Neg(inner)) => {
            let minus_one = BigRational::from_integer((-1).into());
            let is_minus_one =
                |id: ExprId| matches!(ctx.get(id), Expr::Number(n) if *n == minus_one);
            (is_minus_one(*l) && semantically_equal(ctx, *inner, *r))
                || (is_minus_one(*r) && semantically_equal(ctx, *inner, *l))
        }
        _ => false,
    }
}
