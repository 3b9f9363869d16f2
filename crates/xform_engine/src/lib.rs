//! Simplification, evaluation and the tolerant equivalence cascade.
//!
//! Purely symbolic equality checking is undecidable in general; purely
//! numeric sampling can only disprove equality. [`functions_equal`] layers
//! exact strategies (structural equality, difference simplification,
//! polynomial canonicalization) before randomized sampling so each decides
//! only what it can decide soundly.

pub mod const_eval;
pub mod equivalence;
pub mod error;
pub mod eval;
pub mod poly;
pub mod semantic_eq;
pub mod simplify;

pub use const_eval::{as_complex_const, cnum_to_expr};
pub use equivalence::{functions_equal, functions_equal_with, EquivOptions, Equivalence};
pub use error::EngineError;
pub use eval::eval_complex;
pub use poly::{multipoly_from_expr, MultiPoly, PolyBudget};
pub use semantic_eq::semantically_equal;
pub use simplify::simplify;
