//! Arena-based symbolic expression trees.
//!
//! Expressions are stored in a [`Context`] arena and addressed by [`ExprId`].
//! The node set is closed and deliberately small: rational numbers, named
//! variables, a few constants, the arithmetic operators, named functions and
//! a [`Hold`](Expr::Hold) barrier that protects a subexpression from being
//! erased by simplification or term collection.

pub mod context;
pub mod display;
pub mod expression;
pub mod hold;
pub mod traversal;

pub use context::{Context, ExprId};
pub use display::DisplayExpr;
pub use expression::{Constant, Expr};
pub use hold::{strip_holds, unwrap_hold};
pub use traversal::{
    collect_additive_terms, collect_factors, free_variables, substitute, SignedTerm,
};
