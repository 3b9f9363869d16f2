//! Floating complex evaluation under a variable assignment.

use num_complex::Complex64;
use num_traits::ToPrimitive;
use rustc_hash::FxHashMap;
use xform_ast::{Constant, Context, Expr, ExprId};
use xform_num::bessel_j;

/// Evaluate an expression to a `Complex64` given values for its free
/// variables. Returns `None` for unbound variables or unknown functions;
/// NaN/Inf results are returned as-is so callers can apply their retry
/// policy. Hold barriers are transparent.
pub fn eval_complex(
    ctx: &Context,
    id: ExprId,
    vars: &FxHashMap<String, Complex64>,
) -> Option<Complex64> {
    match ctx.get(id) {
        Expr::Number(n) => Some(Complex64::new(n.to_f64()?, 0.0)),
        Expr::Variable(name) => vars.get(name).copied(),
        Expr::Constant(c) => Some(match c {
            Constant::Pi => Complex64::new(std::f64::consts::PI, 0.0),
            Constant::E => Complex64::new(std::f64::consts::E, 0.0),
            Constant::I => Complex64::new(0.0, 1.0),
        }),
        Expr::Hold(inner) => eval_complex(ctx, *inner, vars),
        Expr::Add(l, r) => Some(eval_complex(ctx, *l, vars)? + eval_complex(ctx, *r, vars)?),
        Expr::Sub(l, r) => Some(eval_complex(ctx, *l, vars)? - eval_complex(ctx, *r, vars)?),
        Expr::Mul(l, r) => Some(eval_complex(ctx, *l, vars)? * eval_complex(ctx, *r, vars)?),
        Expr::Div(l, r) => Some(eval_complex(ctx, *l, vars)? / eval_complex(ctx, *r, vars)?),
        Expr::Pow(b, e) => {
            let base = eval_complex(ctx, *b, vars)?;
            let exp = eval_complex(ctx, *e, vars)?;
            // Integer exponents avoid the branch cut of the complex log.
            if exp.im == 0.0 && exp.re.fract() == 0.0 && exp.re.abs() <= i32::MAX as f64 {
                Some(base.powi(exp.re as i32))
            } else {
                Some(base.powc(exp))
            }
        }
        Expr::Neg(e) => Some(-eval_complex(ctx, *e, vars)?),
        Expr::Function(name, args) => {
            let first = || -> Option<Complex64> { eval_complex(ctx, *args.first()?, vars) };
            match name.as_str() {
                "exp" => Some(first()?.exp()),
                "ln" => Some(first()?.ln()),
                "sqrt" => Some(first()?.sqrt()),
                "sin" => Some(first()?.sin()),
                "cos" => Some(first()?.cos()),
                "tan" => Some(first()?.tan()),
                "sinh" => Some(first()?.sinh()),
                "cosh" => Some(first()?.cosh()),
                "tanh" => Some(first()?.tanh()),
                "abs" => Some(Complex64::new(first()?.norm(), 0.0)),
                // besselj(order, z) with a constant integer order
                "besselj" if args.len() == 2 => {
                    let order = eval_complex(ctx, args[0], vars)?;
                    if order.im != 0.0 || order.re.fract() != 0.0 || order.re < 0.0 {
                        return None;
                    }
                    let z = eval_complex(ctx, args[1], vars)?;
                    Some(bessel_j(order.re as u32, z))
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(pairs: &[(&str, f64)]) -> FxHashMap<String, Complex64> {
        pairs
            .iter()
            .map(|(name, v)| (name.to_string(), Complex64::new(*v, 0.0)))
            .collect()
    }

    #[test]
    fn evaluates_exponential_with_complex_argument() {
        let mut ctx = Context::new();
        let i = ctx.constant(Constant::I);
        let pi = ctx.constant(Constant::Pi);
        let arg = ctx.add(Expr::Mul(i, pi));
        let e = ctx.func("exp", vec![arg]);
        // exp(i*pi) = -1
        let value = eval_complex(&ctx, e, &FxHashMap::default()).unwrap();
        assert!((value - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn unbound_variable_yields_none() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        assert!(eval_complex(&ctx, x, &FxHashMap::default()).is_none());
    }

    #[test]
    fn pythagorean_identity_numerically() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let sin = ctx.func("sin", vec![x]);
        let cos = ctx.func("cos", vec![x]);
        let two = ctx.num(2);
        let sin2 = ctx.add(Expr::Pow(sin, two));
        let two2 = ctx.num(2);
        let cos2 = ctx.add(Expr::Pow(cos, two2));
        let sum = ctx.add(Expr::Add(sin2, cos2));

        let vars = assignment(&[("x", 1.234)]);
        let value = eval_complex(&ctx, sum, &vars).unwrap();
        assert!((value.re - 1.0).abs() < 1e-12 && value.im.abs() < 1e-12);
    }

    #[test]
    fn besselj_requires_integer_order() {
        let mut ctx = Context::new();
        let half = {
            use num_rational::BigRational;
            ctx.num_rational(BigRational::new(1.into(), 2.into()))
        };
        let one = ctx.num(1);
        let bad = ctx.func("besselj", vec![half, one]);
        assert!(eval_complex(&ctx, bad, &FxHashMap::default()).is_none());

        let zero = ctx.num(0);
        let one2 = ctx.num(1);
        let good = ctx.func("besselj", vec![zero, one2]);
        let value = eval_complex(&ctx, good, &FxHashMap::default()).unwrap();
        assert!((value.re - 0.765_197_686_557_966_6).abs() < 1e-12);
    }
}
