//! Precedence-aware display of expressions.

use crate::{Constant, Context, Expr, ExprId};
use num_traits::Signed;
use std::fmt;

/// Borrowing display adapter: `format!("{}", DisplayExpr { context, id })`.
pub struct DisplayExpr<'a> {
    pub context: &'a Context,
    pub id: ExprId,
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Add(_, _) | Expr::Sub(_, _) => 1,
        Expr::Mul(_, _) | Expr::Div(_, _) => 2,
        Expr::Pow(_, _) => 3,
        Expr::Neg(_) => 4,
        Expr::Number(n) if n.is_negative() => 4,
        _ => 5,
    }
}

fn write_child(
    f: &mut fmt::Formatter<'_>,
    ctx: &Context,
    child: ExprId,
    parent_prec: u8,
    needs_parens_on_tie: bool,
) -> fmt::Result {
    let child_expr = ctx.get(child);
    let child_prec = precedence(child_expr);
    let parens = child_prec < parent_prec || (needs_parens_on_tie && child_prec == parent_prec);
    if parens {
        write!(f, "({})", DisplayExpr { context: ctx, id: child })
    } else {
        write!(f, "{}", DisplayExpr { context: ctx, id: child })
    }
}

impl fmt::Display for DisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.context;
        let expr = ctx.get(self.id);
        let prec = precedence(expr);
        match expr {
            Expr::Number(n) => {
                if n.is_integer() {
                    write!(f, "{}", n.numer())
                } else {
                    write!(f, "{}/{}", n.numer(), n.denom())
                }
            }
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Constant(c) => write!(f, "{}", c),
            Expr::Add(l, r) => {
                write_child(f, ctx, *l, prec, false)?;
                write!(f, " + ")?;
                write_child(f, ctx, *r, prec, false)
            }
            Expr::Sub(l, r) => {
                write_child(f, ctx, *l, prec, false)?;
                write!(f, " - ")?;
                write_child(f, ctx, *r, prec, true)
            }
            Expr::Mul(l, r) => {
                write_child(f, ctx, *l, prec, false)?;
                write!(f, " * ")?;
                write_child(f, ctx, *r, prec, false)
            }
            Expr::Div(l, r) => {
                write_child(f, ctx, *l, prec, false)?;
                write!(f, " / ")?;
                write_child(f, ctx, *r, prec, true)
            }
            Expr::Pow(b, e) => {
                write_child(f, ctx, *b, prec, true)?;
                write!(f, "^")?;
                write_child(f, ctx, *e, prec, true)
            }
            Expr::Neg(e) => {
                write!(f, "-")?;
                write_child(f, ctx, *e, prec, true)
            }
            Expr::Function(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", DisplayExpr { context: ctx, id: *arg })?;
                }
                write!(f, ")")
            }
            // The barrier is an internal artifact; display it transparently.
            Expr::Hold(inner) => write!(f, "{}", DisplayExpr { context: ctx, id: *inner }),
        }
    }
}
