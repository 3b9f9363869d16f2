//! Expression arena.

use crate::expression::{Constant, Expr};
use num_bigint::BigInt;
use num_rational::BigRational;

/// Handle to an expression node inside a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub usize);

/// Arena of expression nodes.
///
/// Not thread-safe; intended for single-threaded use, one context per
/// computation. Nodes are never removed, so every issued [`ExprId`] stays
/// valid for the lifetime of the context.
#[derive(Debug, Default, Clone)]
pub struct Context {
    nodes: Vec<Expr>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and return its handle.
    pub fn add(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.nodes.len());
        self.nodes.push(expr);
        id
    }

    /// Resolve a handle. Handles are only minted by [`Context::add`], so the
    /// index is always in bounds.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.nodes[id.0]
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Convenience constructors, mirroring common call sites.

    pub fn num(&mut self, n: i64) -> ExprId {
        self.add(Expr::Number(BigRational::from_integer(BigInt::from(n))))
    }

    pub fn num_rational(&mut self, n: BigRational) -> ExprId {
        self.add(Expr::Number(n))
    }

    pub fn var(&mut self, name: &str) -> ExprId {
        self.add(Expr::Variable(name.to_string()))
    }

    pub fn constant(&mut self, c: Constant) -> ExprId {
        self.add(Expr::Constant(c))
    }

    pub fn func(&mut self, name: &str, args: Vec<ExprId>) -> ExprId {
        self.add(Expr::Function(name.to_string(), args))
    }

    pub fn hold(&mut self, inner: ExprId) -> ExprId {
        self.add(Expr::Hold(inner))
    }

    /// Is this node the literal rational zero? `Hold(0)` is *not* zero for
    /// this predicate; that is the whole point of the barrier.
    pub fn is_zero(&self, id: ExprId) -> bool {
        use num_traits::Zero;
        matches!(self.get(id), Expr::Number(n) if n.is_zero())
    }

    /// Is this node the literal rational one?
    pub fn is_one(&self, id: ExprId) -> bool {
        use num_traits::One;
        matches!(self.get(id), Expr::Number(n) if n.is_one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get_round_trip() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let one = ctx.num(1);
        let sum = ctx.add(Expr::Add(x, one));
        assert!(matches!(ctx.get(sum), Expr::Add(a, b) if *a == x && *b == one));
    }

    #[test]
    fn hold_zero_is_not_literal_zero() {
        let mut ctx = Context::new();
        let zero = ctx.num(0);
        let held = ctx.hold(zero);
        assert!(ctx.is_zero(zero));
        assert!(!ctx.is_zero(held));
    }
}
