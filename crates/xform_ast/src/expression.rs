use num_rational::BigRational;

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    /// The imaginary unit.
    I,
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::Pi => write!(f, "pi"),
            Constant::E => write!(f, "e"),
            Constant::I => write!(f, "i"),
        }
    }
}

/// An expression node. Children are [`crate::ExprId`] handles into the
/// owning [`crate::Context`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Number(BigRational),
    Variable(String),
    Constant(Constant),
    Add(crate::ExprId, crate::ExprId),
    Sub(crate::ExprId, crate::ExprId),
    Mul(crate::ExprId, crate::ExprId),
    Div(crate::ExprId, crate::ExprId),
    Pow(crate::ExprId, crate::ExprId),
    Neg(crate::ExprId),
    Function(String, Vec<crate::ExprId>),
    /// Barrier node: the wrapped expression must survive simplification and
    /// term collection untouched. Stripped only at presentation boundaries
    /// via [`crate::strip_holds`].
    Hold(crate::ExprId),
}
