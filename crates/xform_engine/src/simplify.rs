//! Lightweight bottom-up simplification.
//!
//! Identity elimination and exact constant folding only; no expansion, no
//! factoring. This is the engine behind the "difference simplifies to zero"
//! equivalence strategy, so the rules are conservative and always sound.
//! `Hold` nodes are opaque: nothing under a barrier is rewritten or erased.

use crate::semantic_eq::semantically_equal;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use xform_ast::{Context, Expr, ExprId};

const MAX_FOLD_EXPONENT: i64 = 64;

fn as_number(ctx: &Context, id: ExprId) -> Option<BigRational> {
    match ctx.get(id) {
        Expr::Number(n) => Some(n.clone()),
        _ => None,
    }
}

/// Simplify an expression, returning a (possibly new) node in the same
/// context. Deterministic and idempotent on its own output.
pub fn simplify(ctx: &mut Context, id: ExprId) -> ExprId {
    match ctx.get(id).clone() {
        Expr::Number(_) | Expr::Variable(_) | Expr::Constant(_) | Expr::Hold(_) => id,
        Expr::Add(l, r) => {
            let l = simplify(ctx, l);
            let r = simplify(ctx, r);
            if ctx.is_zero(l) {
                return r;
            }
            if ctx.is_zero(r) {
                return l;
            }
            if let (Some(a), Some(b)) = (as_number(ctx, l), as_number(ctx, r)) {
                return ctx.num_rational(a + b);
            }
            // x + (-x) cancels.
            if let Expr::Neg(inner) = ctx.get(r).clone() {
                if semantically_equal(ctx, l, inner) {
                    return ctx.num(0);
                }
            }
            ctx.add(Expr::Add(l, r))
        }
        Expr::Sub(l, r) => {
            let l = simplify(ctx, l);
            let r = simplify(ctx, r);
            if ctx.is_zero(r) {
                return l;
            }
            if let (Some(a), Some(b)) = (as_number(ctx, l), as_number(ctx, r)) {
                return ctx.num_rational(a - b);
            }
            if semantically_equal(ctx, l, r) {
                return ctx.num(0);
            }
            if ctx.is_zero(l) {
                return ctx.add(Expr::Neg(r));
            }
            ctx.add(Expr::Sub(l, r))
        }
        Expr::Mul(l, r) => {
            let l = simplify(ctx, l);
            let r = simplify(ctx, r);
            if ctx.is_zero(l) || ctx.is_zero(r) {
                return ctx.num(0);
            }
            if ctx.is_one(l) {
                return r;
            }
            if ctx.is_one(r) {
                return l;
            }
            if let (Some(a), Some(b)) = (as_number(ctx, l), as_number(ctx, r)) {
                return ctx.num_rational(a * b);
            }
            // i * i = -1
            if matches!(
                (ctx.get(l), ctx.get(r)),
                (
                    Expr::Constant(xform_ast::Constant::I),
                    Expr::Constant(xform_ast::Constant::I)
                )
            ) {
                return ctx.num(-1);
            }
            ctx.add(Expr::Mul(l, r))
        }
        Expr::Div(l, r) => {
            let l = simplify(ctx, l);
            let r = simplify(ctx, r);
            if ctx.is_one(r) {
                return l;
            }
            if let (Some(a), Some(b)) = (as_number(ctx, l), as_number(ctx, r)) {
                if !b.is_zero() {
                    return ctx.num_rational(a / b);
                }
            }
            if ctx.is_zero(l) && !ctx.is_zero(r) {
                return ctx.num(0);
            }
            ctx.add(Expr::Div(l, r))
        }
        Expr::Pow(b, e) => {
            let b = simplify(ctx, b);
            let e = simplify(ctx, e);
            if ctx.is_one(e) {
                return b;
            }
            if ctx.is_zero(e) {
                // 0^0 is left alone; anything else to the zero is 1.
                if !ctx.is_zero(b) {
                    return ctx.num(1);
                }
            }
            if let (Some(base), Some(exp)) = (as_number(ctx, b), as_number(ctx, e)) {
                if exp.is_integer() {
                    if let Some(k) = exp.to_integer().to_i64() {
                        if k.abs() <= MAX_FOLD_EXPONENT && !(base.is_zero() && k < 0) {
                            return ctx.num_rational(rational_pow(base, k));
                        }
                    }
                }
            }
            ctx.add(Expr::Pow(b, e))
        }
        Expr::Neg(inner) => {
            let inner = simplify(ctx, inner);
            match ctx.get(inner).clone() {
                Expr::Neg(deep) => deep,
                Expr::Number(n) => ctx.num_rational(-n),
                _ => ctx.add(Expr::Neg(inner)),
            }
        }
        Expr::Function(name, args) => {
            let args: Vec<ExprId> = args.into_iter().map(|a| simplify(ctx, a)).collect();
            if args.len() == 1 {
                let arg = args[0];
                match name.as_str() {
                    "exp" if ctx.is_zero(arg) => return ctx.num(1),
                    "ln" if ctx.is_one(arg) => return ctx.num(0),
                    "sin" if ctx.is_zero(arg) => return ctx.num(0),
                    "cos" if ctx.is_zero(arg) => return ctx.num(1),
                    _ => {}
                }
            }
            ctx.add(Expr::Function(name, args))
        }
    }
}

fn rational_pow(base: BigRational, exp: i64) -> BigRational {
    let positive = base.pow(exp.unsigned_abs() as i32);
    if exp < 0 {
        positive.recip()
    } else {
        positive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_identities() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let zero = ctx.num(0);
        let e = ctx.add(Expr::Add(x, zero));
        assert_eq!(simplify(&mut ctx, e), x);
    }

    #[test]
    fn difference_of_equal_terms_is_zero() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let y = ctx.var("y");
        let xy = ctx.add(Expr::Add(x, y));
        let y2 = ctx.var("y");
        let x2 = ctx.var("x");
        let yx = ctx.add(Expr::Add(y2, x2));
        let diff = ctx.add(Expr::Sub(xy, yx));
        let out = simplify(&mut ctx, diff);
        assert!(ctx.is_zero(out));
    }

    #[test]
    fn zero_factor_collapses_unless_held() {
        let mut ctx = Context::new();
        let zero = ctx.num(0);
        let x = ctx.var("x");
        let prod = ctx.add(Expr::Mul(zero, x));
        let out = simplify(&mut ctx, prod);
        assert!(ctx.is_zero(out));

        let zero2 = ctx.num(0);
        let held = ctx.hold(zero2);
        let x2 = ctx.var("x");
        let held_prod = ctx.add(Expr::Mul(held, x2));
        let out = simplify(&mut ctx, held_prod);
        assert!(matches!(ctx.get(out), Expr::Mul(_, _)));
    }

    #[test]
    fn constant_folding_with_rationals() {
        let mut ctx = Context::new();
        let three = ctx.num(3);
        let two = ctx.num(2);
        let pow = ctx.add(Expr::Pow(three, two));
        let nine = simplify(&mut ctx, pow);
        assert!(matches!(ctx.get(nine), Expr::Number(n) if *n == BigRational::from_integer(9.into())));

        let neg_exp = ctx.num(-2);
        let two2 = ctx.num(2);
        let pow2 = ctx.add(Expr::Pow(two2, neg_exp));
        let quarter = simplify(&mut ctx, pow2);
        assert!(
            matches!(ctx.get(quarter), Expr::Number(n) if *n == BigRational::new(1.into(), 4.into()))
        );
    }

    #[test]
    fn i_squared_is_minus_one() {
        let mut ctx = Context::new();
        let i1 = ctx.constant(xform_ast::Constant::I);
        let i2 = ctx.constant(xform_ast::Constant::I);
        let prod = ctx.add(Expr::Mul(i1, i2));
        let out = simplify(&mut ctx, prod);
        assert!(matches!(ctx.get(out), Expr::Number(n) if *n == BigRational::from_integer((-1).into())));
    }

    #[test]
    fn exp_of_zero_folds_to_one() {
        let mut ctx = Context::new();
        let zero = ctx.num(0);
        let e = ctx.func("exp", vec![zero]);
        let out = simplify(&mut ctx, e);
        assert!(ctx.is_one(out));
    }
}
