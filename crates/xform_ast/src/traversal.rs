//! Term collection, free-variable scans and substitution.

use crate::{Context, Expr, ExprId};
use std::collections::BTreeSet;

/// An additive term together with the sign it carries in the original sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedTerm {
    pub expr: ExprId,
    /// `false` means the term enters the sum negated.
    pub positive: bool,
}

impl SignedTerm {
    fn flipped(self) -> Self {
        SignedTerm { expr: self.expr, positive: !self.positive }
    }
}

/// Flatten an `Add`/`Sub`/`Neg` spine into its additive terms, in order.
///
/// `a + b - c` yields `[+a, +b, -c]`. Terms under `Hold` are not entered;
/// the barrier itself is the term.
pub fn collect_additive_terms(ctx: &Context, id: ExprId) -> Vec<SignedTerm> {
    let mut terms = Vec::new();
    collect_terms_recursive(ctx, id, true, &mut terms);
    terms
}

fn collect_terms_recursive(ctx: &Context, id: ExprId, positive: bool, out: &mut Vec<SignedTerm>) {
    match ctx.get(id) {
        Expr::Add(l, r) => {
            collect_terms_recursive(ctx, *l, positive, out);
            collect_terms_recursive(ctx, *r, positive, out);
        }
        Expr::Sub(l, r) => {
            collect_terms_recursive(ctx, *l, positive, out);
            collect_terms_recursive(ctx, *r, !positive, out);
        }
        Expr::Neg(e) => collect_terms_recursive(ctx, *e, !positive, out),
        _ => out.push(SignedTerm { expr: id, positive }),
    }
}

/// Flatten a `Mul` spine into its factors, in order. A leading `Neg` flips
/// the sign of the first emitted term instead of producing a `-1` factor.
pub fn collect_factors(ctx: &Context, term: SignedTerm) -> (Vec<ExprId>, bool) {
    let mut factors = Vec::new();
    let mut positive = term.positive;
    let mut stack = vec![term.expr];
    while let Some(id) = stack.pop() {
        match ctx.get(id) {
            Expr::Mul(l, r) => {
                // Push right first so factors come out left-to-right.
                stack.push(*r);
                stack.push(*l);
            }
            Expr::Neg(e) => {
                positive = !positive;
                stack.push(*e);
            }
            _ => factors.push(id),
        }
    }
    (factors, positive)
}

/// Collect the free variable names of an expression.
pub fn free_variables(ctx: &Context, id: ExprId) -> BTreeSet<String> {
    let mut vars = BTreeSet::new();
    free_vars_recursive(ctx, id, &mut vars);
    vars
}

fn free_vars_recursive(ctx: &Context, id: ExprId, out: &mut BTreeSet<String>) {
    match ctx.get(id) {
        Expr::Variable(name) => {
            out.insert(name.clone());
        }
        Expr::Number(_) | Expr::Constant(_) => {}
        Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r)
        | Expr::Pow(l, r) => {
            free_vars_recursive(ctx, *l, out);
            free_vars_recursive(ctx, *r, out);
        }
        Expr::Neg(e) | Expr::Hold(e) => free_vars_recursive(ctx, *e, out),
        Expr::Function(_, args) => {
            for arg in args {
                free_vars_recursive(ctx, *arg, out);
            }
        }
    }
}

/// Replace every occurrence of the variable `var` with `replacement`.
pub fn substitute(ctx: &mut Context, id: ExprId, var: &str, replacement: ExprId) -> ExprId {
    match ctx.get(id).clone() {
        Expr::Variable(name) if name == var => replacement,
        Expr::Variable(_) | Expr::Number(_) | Expr::Constant(_) => id,
        Expr::Add(l, r) => {
            let (l2, r2) = (substitute(ctx, l, var, replacement), substitute(ctx, r, var, replacement));
            if l2 == l && r2 == r { id } else { ctx.add(Expr::Add(l2, r2)) }
        }
        Expr::Sub(l, r) => {
            let (l2, r2) = (substitute(ctx, l, var, replacement), substitute(ctx, r, var, replacement));
            if l2 == l && r2 == r { id } else { ctx.add(Expr::Sub(l2, r2)) }
        }
        Expr::Mul(l, r) => {
            let (l2, r2) = (substitute(ctx, l, var, replacement), substitute(ctx, r, var, replacement));
            if l2 == l && r2 == r { id } else { ctx.add(Expr::Mul(l2, r2)) }
        }
        Expr::Div(l, r) => {
            let (l2, r2) = (substitute(ctx, l, var, replacement), substitute(ctx, r, var, replacement));
            if l2 == l && r2 == r { id } else { ctx.add(Expr::Div(l2, r2)) }
        }
        Expr::Pow(b, e) => {
            let (b2, e2) = (substitute(ctx, b, var, replacement), substitute(ctx, e, var, replacement));
            if b2 == b && e2 == e { id } else { ctx.add(Expr::Pow(b2, e2)) }
        }
        Expr::Neg(e) => {
            let e2 = substitute(ctx, e, var, replacement);
            if e2 == e { id } else { ctx.add(Expr::Neg(e2)) }
        }
        Expr::Hold(e) => {
            let e2 = substitute(ctx, e, var, replacement);
            if e2 == e { id } else { ctx.add(Expr::Hold(e2)) }
        }
        Expr::Function(name, args) => {
            let subbed: Vec<ExprId> =
                args.iter().map(|a| substitute(ctx, *a, var, replacement)).collect();
            if subbed == args { id } else { ctx.add(Expr::Function(name, subbed)) }
        }
    }
}
