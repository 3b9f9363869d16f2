//! Deep structural almost-equality over nested value trees.

use crate::complex::CNum;
use crate::error::NumError;
use crate::tolerance::{almost_eq, Tolerance};
use std::collections::BTreeMap;

/// A nested structure of numeric leaves, the shape the transform fixtures
/// come in: sequences, string-keyed mappings, and numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    Num(CNum),
    Seq(Vec<Nested>),
    Map(BTreeMap<String, Nested>),
}

impl Nested {
    pub fn num(value: CNum) -> Self {
        Nested::Num(value)
    }

    pub fn seq<I: IntoIterator<Item = Nested>>(items: I) -> Self {
        Nested::Seq(items.into_iter().collect())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Nested::Num(_) => "number",
            Nested::Seq(_) => "sequence",
            Nested::Map(_) => "mapping",
        }
    }
}

impl From<CNum> for Nested {
    fn from(value: CNum) -> Self {
        Nested::Num(value)
    }
}

impl From<Vec<CNum>> for Nested {
    fn from(values: Vec<CNum>) -> Self {
        Nested::Seq(values.into_iter().map(Nested::Num).collect())
    }
}

/// Recursively compare two nested structures.
///
/// Containers must match in variant, length and key set at every level;
/// a variant mismatch is a [`NumError::ShapeMismatch`] error rather than an
/// unequal result. Leaves compare with [`almost_eq`].
pub fn deep_almost_equal(a: &Nested, b: &Nested, tol: Tolerance) -> Result<bool, NumError> {
    deep_recursive(a, b, tol, 0)
}

fn deep_recursive(a: &Nested, b: &Nested, tol: Tolerance, depth: usize) -> Result<bool, NumError> {
    match (a, b) {
        (Nested::Num(x), Nested::Num(y)) => Ok(almost_eq(x, y, tol)),
        (Nested::Seq(xs), Nested::Seq(ys)) => {
            if xs.len() != ys.len() {
                return Ok(false);
            }
            for (x, y) in xs.iter().zip(ys) {
                if !deep_recursive(x, y, tol, depth + 1)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Nested::Map(xs), Nested::Map(ys)) => {
            if xs.keys().ne(ys.keys()) {
                return Ok(false);
            }
            for (key, x) in xs {
                // Key sets were just checked equal.
                let y = &ys[key];
                if !deep_recursive(x, y, tol, depth + 1)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => Err(NumError::ShapeMismatch {
            depth,
            reason: format!("{} vs {}", a.variant_name(), b.variant_name()),
        }),
    }
}
