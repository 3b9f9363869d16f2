//! Exact constant evaluation of closed numeric expressions.

use num_traits::{Signed, ToPrimitive, Zero};
use xform_ast::{Constant, Context, Expr, ExprId};
use xform_num::CNum;

/// Evaluate an expression with no free variables to an exact complex
/// rational. Returns `None` for anything outside the rational-complex
/// fragment (free variables, `pi`, `e`, transcendental functions,
/// non-integer exponents). Hold barriers are transparent: a held zero
/// evaluates to zero.
pub fn as_complex_const(ctx: &Context, id: ExprId) -> Option<CNum> {
    match ctx.get(id) {
        Expr::Number(n) => Some(CNum::from_re(n.clone())),
        Expr::Constant(Constant::I) => Some(CNum::i()),
        Expr::Constant(_) => None,
        Expr::Variable(_) => None,
        Expr::Hold(inner) => as_complex_const(ctx, *inner),
        Expr::Neg(e) => Some(-as_complex_const(ctx, *e)?),
        Expr::Add(l, r) => Some(as_complex_const(ctx, *l)? + as_complex_const(ctx, *r)?),
        Expr::Sub(l, r) => Some(as_complex_const(ctx, *l)? - as_complex_const(ctx, *r)?),
        Expr::Mul(l, r) => Some(as_complex_const(ctx, *l)? * as_complex_const(ctx, *r)?),
        Expr::Div(l, r) => {
            let denom = as_complex_const(ctx, *r)?;
            if denom.is_zero() {
                return None;
            }
            Some(as_complex_const(ctx, *l)? / denom)
        }
        Expr::Pow(b, e) => {
            let exp = as_complex_const(ctx, *e)?;
            if !exp.is_real() || !exp.re.is_integer() {
                return None;
            }
            let exp = exp.re.to_integer().to_i64()?;
            as_complex_const(ctx, *b)?.powi(exp)
        }
        Expr::Function(_, _) => None,
    }
}

/// Build the canonical expression for an exact complex value:
/// `re`, `im*i`, or `re + im*i`, with real values as plain numbers.
pub fn cnum_to_expr(ctx: &mut Context, value: &CNum) -> ExprId {
    if value.is_real() {
        return ctx.num_rational(value.re.clone());
    }
    let i = ctx.constant(Constant::I);
    let imag_part = if value.im.abs() == num_rational::BigRational::from_integer(1.into()) {
        i
    } else {
        let coeff = ctx.num_rational(value.im.abs());
        ctx.add(Expr::Mul(coeff, i))
    };
    let imag_part = if value.im.is_negative() {
        ctx.add(Expr::Neg(imag_part))
    } else {
        imag_part
    };
    if value.re.is_zero() {
        imag_part
    } else {
        let re = ctx.num_rational(value.re.clone());
        ctx.add(Expr::Add(re, imag_part))
    }
}
