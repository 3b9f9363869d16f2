//! The tolerant equivalence cascade.
//!
//! Strategies run in order and each returns an explicit
//! [`Equivalence`] verdict; `Inconclusive` falls through to the next
//! strategy instead of being reported as inequality:
//!
//! 1. hold-barrier stripping (zero-sentinel normalization),
//! 2. structural/semantic equality (sound for `Equal` only),
//! 3. difference simplifies to literal zero (sound for `Equal` only),
//! 4. polynomial canonicalization (decisive on the polynomial fragment),
//! 5. randomized numerical sampling (decisive, statistical).

use crate::error::EngineError;
use crate::eval::eval_complex;
use crate::poly::{multipoly_from_expr, PolyBudget};
use crate::semantic_eq::semantically_equal;
use crate::simplify::simplify;
use num_complex::Complex64;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use xform_ast::{free_variables, strip_holds, Context, Expr, ExprId};
use xform_num::{almost_eq_c64, Tolerance};

/// Verdict of a single equivalence strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equivalence {
    Equal,
    NotEqual,
    /// The strategy cannot decide; the cascade moves on.
    Inconclusive,
}

/// Knobs for the cascade, mainly for the sampling strategy.
#[derive(Debug, Clone, Copy)]
pub struct EquivOptions {
    /// Decimal places two sampled values must agree to.
    pub tolerance: Tolerance,
    /// Number of random assignments that must all agree.
    pub num_trials: u32,
    /// Fresh redraws allowed when an evaluation lands on NaN.
    pub max_nan_retries: u32,
    /// Sampling interval for each free variable.
    pub sample_min: f64,
    pub sample_max: f64,
}

impl Default for EquivOptions {
    fn default() -> Self {
        EquivOptions {
            tolerance: Tolerance::default(),
            num_trials: 8,
            max_nan_retries: 5,
            sample_min: -10.0,
            sample_max: 10.0,
        }
    }
}

/// Decide whether two expressions represent the same function, with default
/// options and a thread-local RNG.
pub fn functions_equal(ctx: &mut Context, f1: ExprId, f2: ExprId) -> Result<bool, EngineError> {
    functions_equal_with(ctx, f1, f2, EquivOptions::default(), &mut rand::thread_rng())
}

/// Full-control variant: caller supplies options and the random source, so
/// tests can be deterministic.
pub fn functions_equal_with<R: Rng>(
    ctx: &mut Context,
    f1: ExprId,
    f2: ExprId,
    opts: EquivOptions,
    rng: &mut R,
) -> Result<bool, EngineError> {
    // Strategy 1: normalize away the internal zero sentinel before any
    // comparison sees it.
    let f1 = strip_holds(ctx, f1);
    let f2 = strip_holds(ctx, f2);

    if semantically_equal(ctx, f1, f2) {
        debug!("equivalence decided structurally");
        return Ok(true);
    }

    // One-sided: only ever proves equality.
    if difference_simplifies_to_zero(ctx, f1, f2) {
        debug!("equivalence decided by difference simplification");
        return Ok(true);
    }

    match polynomial_verdict(ctx, f1, f2) {
        Equivalence::Equal => {
            debug!("equivalence decided by polynomial canonicalization");
            return Ok(true);
        }
        Equivalence::NotEqual => {
            debug!("inequality decided by polynomial canonicalization");
            return Ok(false);
        }
        Equivalence::Inconclusive => {}
    }

    debug!("falling through to randomized sampling");
    match sampling_verdict(ctx, f1, f2, opts, rng)? {
        Equivalence::NotEqual => Ok(false),
        // Every trial agreed; statistically equal.
        _ => Ok(true),
    }
}

fn difference_simplifies_to_zero(ctx: &mut Context, f1: ExprId, f2: ExprId) -> bool {
    let diff = ctx.add(Expr::Sub(f1, f2));
    let simplified = simplify(ctx, diff);
    ctx.is_zero(simplified)
}

fn polynomial_verdict(ctx: &Context, f1: ExprId, f2: ExprId) -> Equivalence {
    let budget = PolyBudget::default();
    let (Some(p1), Some(p2)) = (
        multipoly_from_expr(ctx, f1, &budget),
        multipoly_from_expr(ctx, f2, &budget),
    ) else {
        return Equivalence::Inconclusive;
    };
    if p1 == p2 {
        Equivalence::Equal
    } else {
        Equivalence::NotEqual
    }
}

fn sampling_verdict<R: Rng>(
    ctx: &Context,
    f1: ExprId,
    f2: ExprId,
    opts: EquivOptions,
    rng: &mut R,
) -> Result<Equivalence, EngineError> {
    let mut vars = free_variables(ctx, f1);
    vars.extend(free_variables(ctx, f2));
    let vars: Vec<String> = vars.into_iter().collect();

    for trial in 0..opts.num_trials.max(1) {
        let (v1, v2) = sample_once(ctx, f1, f2, &vars, opts, rng)?;
        trace!(trial, ?v1, ?v2, "sampled values");
        if !almost_eq_c64(v1, v2, opts.tolerance) {
            return Ok(Equivalence::NotEqual);
        }
    }
    Ok(Equivalence::Equal)
}

/// One sampling trial, redrawing on NaN up to the retry budget.
fn sample_once<R: Rng>(
    ctx: &Context,
    f1: ExprId,
    f2: ExprId,
    vars: &[String],
    opts: EquivOptions,
    rng: &mut R,
) -> Result<(Complex64, Complex64), EngineError> {
    for attempt in 0..=opts.max_nan_retries {
        let assignment: FxHashMap<String, Complex64> = vars
            .iter()
            .map(|name| {
                let value = rng.gen_range(opts.sample_min..opts.sample_max);
                (name.clone(), Complex64::new(value, 0.0))
            })
            .collect();

        let v1 = eval_complex(ctx, f1, &assignment)
            .ok_or_else(|| EngineError::NumericEvaluation("left side did not evaluate".into()))?;
        let v2 = eval_complex(ctx, f2, &assignment)
            .ok_or_else(|| EngineError::NumericEvaluation("right side did not evaluate".into()))?;

        if v1.is_nan() || v2.is_nan() {
            trace!(attempt, "NaN sample, redrawing");
            continue;
        }
        return Ok((v1, v2));
    }
    Err(EngineError::NumericEvaluation(
        "NaN retries exhausted during sampling".into(),
    ))
}
