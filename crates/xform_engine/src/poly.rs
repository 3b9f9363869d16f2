//! Sparse multivariate polynomial canonical forms.
//!
//! Expressions in the polynomial fragment (numbers, variables, `+ - * ^`
//! with small non-negative integer exponents, division by constants) convert
//! to a canonical term map. Two polynomials are equal iff their canonical
//! forms are equal, which gives the equivalence cascade an exact decision
//! procedure for this fragment. Conversion is budgeted so pathological
//! inputs fail fast instead of blowing up.

use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::collections::BTreeMap;
use xform_ast::{Context, Expr, ExprId};

/// Monomial: variable name -> exponent, zero exponents never stored.
pub type Monomial = BTreeMap<String, u32>;

/// Limits on canonicalization work.
#[derive(Debug, Clone, Copy)]
pub struct PolyBudget {
    pub max_terms: usize,
    pub max_pow_exp: u32,
}

impl Default for PolyBudget {
    fn default() -> Self {
        PolyBudget { max_terms: 200, max_pow_exp: 16 }
    }
}

/// A canonical sparse polynomial over the rationals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiPoly {
    terms: BTreeMap<Monomial, BigRational>,
}

impl MultiPoly {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn constant(value: BigRational) -> Self {
        let mut poly = Self::default();
        if !value.is_zero() {
            poly.terms.insert(Monomial::new(), value);
        }
        poly
    }

    pub fn variable(name: &str) -> Self {
        let mut mono = Monomial::new();
        mono.insert(name.to_string(), 1);
        let mut poly = Self::default();
        poly.terms.insert(mono, BigRational::one());
        poly
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    fn insert_term(&mut self, mono: Monomial, coeff: BigRational) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(mono) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let sum = slot.get() + &coeff;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (mono, coeff) in &other.terms {
            out.insert_term(mono.clone(), coeff.clone());
        }
        out
    }

    pub fn neg(&self) -> Self {
        let mut out = self.clone();
        for coeff in out.terms.values_mut() {
            *coeff = -coeff.clone();
        }
        out
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Self, budget: &PolyBudget) -> Option<Self> {
        let mut out = Self::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let mut mono = m1.clone();
                for (var, exp) in m2 {
                    *mono.entry(var.clone()).or_insert(0) += exp;
                }
                out.insert_term(mono, c1 * c2);
                if out.terms.len() > budget.max_terms {
                    return None;
                }
            }
        }
        Some(out)
    }

    pub fn pow(&self, exp: u32, budget: &PolyBudget) -> Option<Self> {
        if exp > budget.max_pow_exp {
            return None;
        }
        let mut out = Self::constant(BigRational::one());
        for _ in 0..exp {
            out = out.mul(self, budget)?;
        }
        Some(out)
    }

    pub fn scale(&self, factor: &BigRational) -> Self {
        let mut out = Self::default();
        for (mono, coeff) in &self.terms {
            out.insert_term(mono.clone(), coeff * factor);
        }
        out
    }
}

/// Convert an expression to canonical polynomial form.
///
/// Returns `None` when the expression leaves the polynomial fragment
/// (functions, symbolic constants, division by a non-constant, fractional
/// or negative exponents) or exceeds the budget. `Hold` is transparent.
pub fn multipoly_from_expr(ctx: &Context, id: ExprId, budget: &PolyBudget) -> Option<MultiPoly> {
    let poly = match ctx.get(id) {
        Expr::Number(n) => MultiPoly::constant(n.clone()),
        Expr::Variable(name) => MultiPoly::variable(name),
        Expr::Constant(_) => return None,
        Expr::Hold(inner) => multipoly_from_expr(ctx, *inner, budget)?,
        Expr::Add(l, r) => multipoly_from_expr(ctx, *l, budget)?
            .add(&multipoly_from_expr(ctx, *r, budget)?),
        Expr::Sub(l, r) => multipoly_from_expr(ctx, *l, budget)?
            .sub(&multipoly_from_expr(ctx, *r, budget)?),
        Expr::Neg(e) => multipoly_from_expr(ctx, *e, budget)?.neg(),
        Expr::Mul(l, r) => {
            let a = multipoly_from_expr(ctx, *l, budget)?;
            let b = multipoly_from_expr(ctx, *r, budget)?;
            a.mul(&b, budget)?
        }
        Expr::Div(l, r) => {
            // Only division by a nonzero constant stays polynomial.
            let denom = match ctx.get(*r) {
                Expr::Number(n) if !n.is_zero() => n.clone(),
                _ => return None,
            };
            multipoly_from_expr(ctx, *l, budget)?.scale(&denom.recip())
        }
        Expr::Pow(b, e) => {
            let exp = match ctx.get(*e) {
                Expr::Number(n) if n.is_integer() && !n.is_negative() => {
                    n.to_integer().to_u32()?
                }
                _ => return None,
            };
            multipoly_from_expr(ctx, *b, budget)?.pow(exp, budget)?
        }
        Expr::Function(_, _) => return None,
    };
    if poly.num_terms() > budget.max_terms {
        return None;
    }
    Some(poly)
}
