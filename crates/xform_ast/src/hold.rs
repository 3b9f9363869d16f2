//! Hold barrier utilities.
//!
//! `Hold(expr)` blocks simplification and term collection from erasing a
//! subexpression. The discrete transforms wrap exact-zero sample values as
//! `Hold(0)` so the corresponding weighted-sum term is not dropped; dropping
//! it would make the sample unrecoverable on inversion.
//!
//! Contract:
//! 1. `Hold` blocks: identity elimination, constant folding of the wrapper.
//! 2. `Hold` is transparent to: display, numeric evaluation.
//! 3. `Hold` must be stripped before comparison or user-facing output.

use crate::{Context, Expr, ExprId};

/// Unwrap one level of hold. Returns the node unchanged if it is not held.
#[inline]
pub fn unwrap_hold(ctx: &Context, id: ExprId) -> ExprId {
    match ctx.get(id) {
        Expr::Hold(inner) => *inner,
        _ => id,
    }
}

/// Recursively strip every hold barrier from an expression tree.
///
/// This is the canonical presentation-boundary pass: after it, a held zero
/// is a literal zero again.
pub fn strip_holds(ctx: &mut Context, id: ExprId) -> ExprId {
    match ctx.get(id).clone() {
        Expr::Hold(inner) => strip_holds(ctx, inner),
        Expr::Add(l, r) => {
            let (l2, r2) = (strip_holds(ctx, l), strip_holds(ctx, r));
            if l2 == l && r2 == r {
                id
            } else {
                ctx.add(Expr::Add(l2, r2))
            }
        }
        Expr::Sub(l, r) => {
            let (l2, r2) = (strip_holds(ctx, l), strip_holds(ctx, r));
            if l2 == l && r2 == r {
                id
            } else {
                ctx.add(Expr::Sub(l2, r2))
            }
        }
        Expr::Mul(l, r) => {
            let (l2, r2) = (strip_holds(ctx, l), strip_holds(ctx, r));
            if l2 == l && r2 == r {
                id
            } else {
                ctx.add(Expr::Mul(l2, r2))
            }
        }
        Expr::Div(l, r) => {
            let (l2, r2) = (strip_holds(ctx, l), strip_holds(ctx, r));
            if l2 == l && r2 == r {
                id
            } else {
                ctx.add(Expr::Div(l2, r2))
            }
        }
        Expr::Pow(b, e) => {
            let (b2, e2) = (strip_holds(ctx, b), strip_holds(ctx, e));
            if b2 == b && e2 == e {
                id
            } else {
                ctx.add(Expr::Pow(b2, e2))
            }
        }
        Expr::Neg(e) => {
            let e2 = strip_holds(ctx, e);
            if e2 == e {
                id
            } else {
                ctx.add(Expr::Neg(e2))
            }
        }
        Expr::Function(name, args) => {
            let stripped: Vec<ExprId> = args.iter().map(|a| strip_holds(ctx, *a)).collect();
            if stripped == args {
                id
            } else {
                ctx.add(Expr::Function(name, stripped))
            }
        }
        Expr::Number(_) | Expr::Variable(_) | Expr::Constant(_) => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_nested_holds() {
        let mut ctx = Context::new();
        let zero = ctx.num(0);
        let held = ctx.hold(zero);
        let held_twice = ctx.hold(held);
        let x = ctx.var("x");
        let sum = ctx.add(Expr::Add(held_twice, x));

        let stripped = strip_holds(&mut ctx, sum);
        match ctx.get(stripped) {
            Expr::Add(l, _) => assert!(ctx.is_zero(*l)),
            other => panic!("expected Add, got {:?}", other),
        }
    }

    #[test]
    fn strip_is_identity_without_holds() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let one = ctx.num(1);
        let sum = ctx.add(Expr::Add(x, one));
        assert_eq!(strip_holds(&mut ctx, sum), sum);
    }
}
