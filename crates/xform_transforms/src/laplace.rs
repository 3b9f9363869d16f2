//! Discrete and table-driven symbolic Laplace transforms.
//!
//! The discrete forward pass turns samples `f_i` at times `t_i` into the
//! weighted sum `Σ f_i · exp(-s·t_i) · Δ_i`. Every construction step has a
//! matching inversion step, so [`invert_samples`] recovers the exact inputs:
//! zero-valued samples enter as held zeros rather than vanishing, and the
//! final sample's weight is the mean of the preceding deltas on both sides.

use crate::error::TransformError;
use crate::kind::TransformKind;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive};
use tracing::{debug, trace};
use xform_ast::{
    collect_additive_terms, collect_factors, free_variables, substitute, Context, DisplayExpr,
    Expr, ExprId,
};
use xform_engine::{as_complex_const, cnum_to_expr, simplify};
use xform_num::{is_strictly_increasing, standard_axis, summation_deltas, CNum};

/// Free variable of the transformed domain.
pub const LAPLACE_VAR: &str = "s";
/// Free variable of the base (time) domain.
pub const TIME_VAR: &str = "t";

/// Build an additive chain from a list of terms; empty input is `0`.
fn build_sum(ctx: &mut Context, terms: &[ExprId]) -> ExprId {
    match terms.split_first() {
        None => ctx.num(0),
        Some((&first, rest)) => rest
            .iter()
            .fold(first, |acc, &term| ctx.add(Expr::Add(acc, term))),
    }
}

/// Approximate the Laplace transform of sampled data as a symbolic weighted
/// sum in the free variable `s`.
///
/// `times` defaults to `0, 1, 2, …`; when given it must match `values` in
/// length and be strictly increasing in its real parts. One term is emitted
/// per sample, in order. An exactly-zero sample value is wrapped in a hold
/// barrier so its term cannot be simplified away, which would make the
/// sample unrecoverable on inversion.
pub fn transform_samples(
    ctx: &mut Context,
    values: &[CNum],
    times: Option<&[CNum]>,
) -> Result<ExprId, TransformError> {
    if values.is_empty() {
        return Err(TransformError::InvalidInput(
            "no sample values given".to_string(),
        ));
    }
    let times: Vec<CNum> = match times {
        Some(given) => {
            if given.len() != values.len() {
                return Err(TransformError::InvalidInput(format!(
                    "{} values but {} time points",
                    values.len(),
                    given.len()
                )));
            }
            if !is_strictly_increasing(given) {
                return Err(TransformError::InvalidInput(
                    "time axis must be strictly increasing".to_string(),
                ));
            }
            given.to_vec()
        }
        None => standard_axis(values.len()),
    };
    let deltas = summation_deltas(&times)?;

    let mut terms = Vec::with_capacity(values.len());
    for ((value, time), delta) in values.iter().zip(&times).zip(&deltas) {
        let coeff = if value.is_zero() {
            let zero = ctx.num(0);
            ctx.hold(zero)
        } else {
            cnum_to_expr(ctx, value)
        };
        let delta_expr = cnum_to_expr(ctx, delta);
        // exp(-s*0) is 1; the basis factor is omitted at t = 0, and
        // inversion attributes basis-free terms to t = 0.
        let term = if time.is_zero() {
            ctx.add(Expr::Mul(coeff, delta_expr))
        } else {
            let s = ctx.var(LAPLACE_VAR);
            let t_expr = cnum_to_expr(ctx, time);
            let st = ctx.add(Expr::Mul(s, t_expr));
            let neg_st = ctx.add(Expr::Neg(st));
            let basis = ctx.func("exp", vec![neg_st]);
            let weighted = ctx.add(Expr::Mul(coeff, basis));
            ctx.add(Expr::Mul(weighted, delta_expr))
        };
        terms.push(term);
    }
    let sum = build_sum(ctx, &terms);
    debug!(samples = values.len(), "built discrete Laplace sum");
    Ok(sum)
}

/// Invert a weighted sum produced by [`transform_samples`] back into
/// `(values, times)`.
///
/// Each additive term is decomposed into its `exp` basis factor (absent
/// means `t = 0`) and a constant coefficient `f_i·Δ_i`; coordinates are
/// sorted by ascending real part (stable for ties), the deltas are
/// recomputed with the forward rule, and divided back out.
pub fn invert_samples(
    ctx: &mut Context,
    expr: ExprId,
) -> Result<(Vec<CNum>, Vec<CNum>), TransformError> {
    let terms = collect_additive_terms(ctx, expr);
    let mut recovered: Vec<(CNum, CNum)> = Vec::with_capacity(terms.len());

    for term in terms {
        let (factors, positive) = collect_factors(ctx, term);
        let basis = factors
            .iter()
            .enumerate()
            .find_map(|(index, &f)| exp_argument_in_s(ctx, f).map(|arg| (index, arg)));

        let (time, coeff_factors) = match basis {
            Some((index, arg)) => {
                // The exponent must be -s*t_i; probe it for linearity in s
                // and read the slope.
                let slope = linear_coeff(ctx, arg, LAPLACE_VAR).ok_or_else(|| {
                    TransformError::NumericEvaluation(format!(
                        "exponent {} is not linear in {}",
                        DisplayExpr { context: ctx, id: arg },
                        LAPLACE_VAR
                    ))
                })?;
                let mut rest = factors.clone();
                rest.remove(index);
                (-slope, rest)
            }
            None => (CNum::zero(), factors),
        };
        trace!(time = %time, "recovered term coordinate");

        let mut coeff = CNum::from_i64(1);
        for factor in coeff_factors {
            let value = as_complex_const(ctx, factor).ok_or_else(|| {
                TransformError::NumericEvaluation(format!(
                    "non-constant factor {} in weighted sum",
                    DisplayExpr { context: ctx, id: factor }
                ))
            })?;
            coeff = coeff * value;
        }
        if !positive {
            coeff = -coeff;
        }
        recovered.push((time, coeff));
    }

    // Ascending real part; sort_by is stable, so ties keep encounter order.
    recovered.sort_by(|a, b| a.0.re.cmp(&b.0.re));

    let times: Vec<CNum> = recovered.iter().map(|(t, _)| t.clone()).collect();
    let deltas = summation_deltas(&times)?;
    let mut values = Vec::with_capacity(recovered.len());
    for ((_, coeff), delta) in recovered.into_iter().zip(deltas) {
        if delta.is_zero() {
            return Err(TransformError::NumericEvaluation(
                "zero integration weight while inverting".to_string(),
            ));
        }
        values.push(coeff / delta);
    }
    debug!(samples = values.len(), "inverted discrete Laplace sum");
    Ok((values, times))
}

/// The argument of an `exp` call whose body mentions `s`, if this node is one.
fn exp_argument_in_s(ctx: &Context, id: ExprId) -> Option<ExprId> {
    match ctx.get(id) {
        Expr::Function(name, args) if name == "exp" && args.len() == 1 => {
            let arg = args[0];
            free_variables(ctx, arg).contains(LAPLACE_VAR).then_some(arg)
        }
        _ => None,
    }
}

/// If `expr == a * var` exactly (no constant offset, no higher powers),
/// return `a`. Probes by substitution at 0, 1, 2 and constant-evaluates.
fn linear_coeff(ctx: &mut Context, expr: ExprId, var: &str) -> Option<CNum> {
    let zero = ctx.num(0);
    let at_zero = substitute(ctx, expr, var, zero);
    if !as_complex_const(ctx, at_zero)?.is_zero() {
        return None;
    }
    let one = ctx.num(1);
    let at_one = substitute(ctx, expr, var, one);
    let slope = as_complex_const(ctx, at_one)?;
    let two = ctx.num(2);
    let at_two = substitute(ctx, expr, var, two);
    let doubled = as_complex_const(ctx, at_two)?;
    if doubled != slope.clone() + slope.clone() {
        return None;
    }
    Some(slope)
}

// ---------------------------------------------------------------------------
// Table-driven symbolic transform for closed-form functions of t.
// ---------------------------------------------------------------------------

/// Symbolic Laplace transform of a closed-form function of `t`.
///
/// Covers linear combinations of the classic pairs
/// `c ↦ c/s`, `t^n ↦ n!/s^(n+1)`, `exp(-a·t) ↦ 1/(s+a)`,
/// `sin(ω·t) ↦ ω/(s²+ω²)`, `cos(ω·t) ↦ s/(s²+ω²)` with numeric `a`, `ω`.
/// Anything outside the table is [`TransformError::Unsupported`].
pub fn transform_function(ctx: &mut Context, f: ExprId) -> Result<ExprId, TransformError> {
    let terms = collect_additive_terms(ctx, f);
    let mut out_terms = Vec::with_capacity(terms.len());
    for term in terms {
        let (coeff, core) = split_constant_coefficient(ctx, term, TIME_VAR)?;
        let transformed = match core {
            None => {
                // Constant c has transform c/s.
                let s = ctx.var(LAPLACE_VAR);
                let one = ctx.num(1);
                ctx.add(Expr::Div(one, s))
            }
            Some(core) => transform_core(ctx, core)?,
        };
        let coeff_expr = cnum_to_expr(ctx, &coeff);
        out_terms.push(ctx.add(Expr::Mul(coeff_expr, transformed)));
    }
    let sum = build_sum(ctx, &out_terms);
    Ok(simplify(ctx, sum))
}

/// Symbolic inverse Laplace transform over the same table, matched against
/// expressions in `s`.
pub fn inverse_transform_function(ctx: &mut Context, f: ExprId) -> Result<ExprId, TransformError> {
    let terms = collect_additive_terms(ctx, f);
    let mut out_terms = Vec::with_capacity(terms.len());
    for term in terms {
        let (coeff, core) = split_constant_coefficient(ctx, term, LAPLACE_VAR)?;
        let core = core.ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
        let inverted = invert_core(ctx, core)?;
        let coeff_expr = cnum_to_expr(ctx, &coeff);
        out_terms.push(ctx.add(Expr::Mul(coeff_expr, inverted)));
    }
    let sum = build_sum(ctx, &out_terms);
    Ok(simplify(ctx, sum))
}

/// Split a term into a constant complex coefficient (with the term's sign
/// applied) and at most one factor containing `var`.
fn split_constant_coefficient(
    ctx: &mut Context,
    term: xform_ast::SignedTerm,
    var: &str,
) -> Result<(CNum, Option<ExprId>), TransformError> {
    let (factors, positive) = collect_factors(ctx, term);
    let mut coeff = CNum::from_i64(1);
    let mut core = None;
    for factor in factors {
        if free_variables(ctx, factor).contains(var) {
            if core.is_some() {
                return Err(TransformError::Unsupported(TransformKind::Laplace));
            }
            core = Some(factor);
        } else {
            let value = as_complex_const(ctx, factor)
                .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
            coeff = coeff * value;
        }
    }
    if !positive {
        coeff = -coeff;
    }
    Ok((coeff, core))
}

fn transform_core(ctx: &mut Context, core: ExprId) -> Result<ExprId, TransformError> {
    match ctx.get(core).clone() {
        Expr::Variable(name) if name == TIME_VAR => Ok(s_power_reciprocal(ctx, 2, BigRational::one())),
        Expr::Pow(base, exp)
            if matches!(ctx.get(base), Expr::Variable(name) if name == TIME_VAR) =>
        {
            let n = integer_exponent(ctx, exp)
                .filter(|&n| n >= 1)
                .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
            // t^n ↦ n!/s^(n+1)
            Ok(s_power_reciprocal(ctx, n + 1, factorial(n as u64)))
        }
        Expr::Function(name, args) if args.len() == 1 => {
            let arg = args[0];
            match name.as_str() {
                "exp" => {
                    // exp(-a*t) ↦ 1/(s + a)
                    let slope = require_linear(ctx, arg, TIME_VAR)?;
                    let a = -slope;
                    let s = ctx.var(LAPLACE_VAR);
                    let a_expr = cnum_to_expr(ctx, &a);
                    let den = ctx.add(Expr::Add(s, a_expr));
                    let one = ctx.num(1);
                    Ok(ctx.add(Expr::Div(one, den)))
                }
                "sin" => {
                    // sin(w*t) ↦ w/(s² + w²)
                    let w = require_linear(ctx, arg, TIME_VAR)?;
                    let den = s_squared_plus(ctx, &w)?;
                    let w_expr = cnum_to_expr(ctx, &w);
                    Ok(ctx.add(Expr::Div(w_expr, den)))
                }
                "cos" => {
                    // cos(w*t) ↦ s/(s² + w²)
                    let w = require_linear(ctx, arg, TIME_VAR)?;
                    let den = s_squared_plus(ctx, &w)?;
                    let s = ctx.var(LAPLACE_VAR);
                    Ok(ctx.add(Expr::Div(s, den)))
                }
                _ => Err(TransformError::Unsupported(TransformKind::Laplace)),
            }
        }
        _ => Err(TransformError::Unsupported(TransformKind::Laplace)),
    }
}

fn invert_core(ctx: &mut Context, core: ExprId) -> Result<ExprId, TransformError> {
    match ctx.get(core).clone() {
        // s^-n written as a power
        Expr::Pow(base, exp)
            if matches!(ctx.get(base), Expr::Variable(name) if name == LAPLACE_VAR) =>
        {
            let n = integer_exponent(ctx, exp)
                .filter(|&n| n <= -1)
                .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
            time_monomial(ctx, (-n) as u64)
        }
        Expr::Div(num, den) => {
            let den_expr = ctx.get(den).clone();
            match den_expr {
                // c/s ↦ c
                Expr::Variable(name) if name == LAPLACE_VAR => constant_numerator(ctx, num),
                // c/s^n ↦ c·t^(n-1)/(n-1)!
                Expr::Pow(base, exp)
                    if matches!(ctx.get(base), Expr::Variable(name) if name == LAPLACE_VAR) =>
                {
                    let n = integer_exponent(ctx, exp)
                        .filter(|&n| n >= 1)
                        .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
                    let c = as_complex_const(ctx, num)
                        .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
                    let mono = time_monomial(ctx, n as u64)?;
                    let c_expr = cnum_to_expr(ctx, &c);
                    Ok(ctx.add(Expr::Mul(c_expr, mono)))
                }
                Expr::Add(l, r) => invert_rational_pair(ctx, num, l, r),
                _ => Err(TransformError::Unsupported(TransformKind::Laplace)),
            }
        }
        _ => Err(TransformError::Unsupported(TransformKind::Laplace)),
    }
}

/// Denominator `l + r`: either `s + a` (exponential decay) or `s² + w²`
/// (sine/cosine).
fn invert_rational_pair(
    ctx: &mut Context,
    num: ExprId,
    l: ExprId,
    r: ExprId,
) -> Result<ExprId, TransformError> {
    let is_s = |ctx: &Context, id: ExprId| {
        matches!(ctx.get(id), Expr::Variable(name) if name == LAPLACE_VAR)
    };
    let is_s_squared = |ctx: &Context, id: ExprId| match ctx.get(id) {
        Expr::Pow(base, exp) => {
            matches!(ctx.get(*base), Expr::Variable(name) if name == LAPLACE_VAR)
                && integer_exponent(ctx, *exp) == Some(2)
        }
        _ => false,
    };

    // s + a in either order
    let linear_rest = if is_s(ctx, l) {
        Some(r)
    } else if is_s(ctx, r) {
        Some(l)
    } else {
        None
    };
    if let Some(rest) = linear_rest {
        let a = as_complex_const(ctx, rest)
            .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
        let c = as_complex_const(ctx, num)
            .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
        // c/(s+a) ↦ c·exp(-a·t)
        let t = ctx.var(TIME_VAR);
        let a_expr = cnum_to_expr(ctx, &a);
        let at = ctx.add(Expr::Mul(a_expr, t));
        let neg_at = ctx.add(Expr::Neg(at));
        let exp = ctx.func("exp", vec![neg_at]);
        let c_expr = cnum_to_expr(ctx, &c);
        return Ok(ctx.add(Expr::Mul(c_expr, exp)));
    }

    // s² + w² in either order
    let quadratic_rest = if is_s_squared(ctx, l) {
        Some(r)
    } else if is_s_squared(ctx, r) {
        Some(l)
    } else {
        None
    };
    if let Some(rest) = quadratic_rest {
        let w_squared = as_complex_const(ctx, rest)
            .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
        if !w_squared.is_real() || !w_squared.re.is_positive() {
            return Err(TransformError::Unsupported(TransformKind::Laplace));
        }
        let w = rational_sqrt(&w_squared.re)
            .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
        let t = ctx.var(TIME_VAR);
        let w_expr = ctx.num_rational(w.clone());
        let wt = ctx.add(Expr::Mul(w_expr, t));

        // s/(s²+w²) ↦ cos(w·t)
        if matches!(ctx.get(num), Expr::Variable(name) if name == LAPLACE_VAR) {
            return Ok(ctx.func("cos", vec![wt]));
        }
        // c/(s²+w²) ↦ (c/w)·sin(w·t)
        let c = as_complex_const(ctx, num)
            .ok_or(TransformError::Unsupported(TransformKind::Laplace))?;
        let scale = c / CNum::from_re(w);
        let sin = ctx.func("sin", vec![wt]);
        let scale_expr = cnum_to_expr(ctx, &scale);
        return Ok(ctx.add(Expr::Mul(scale_expr, sin)));
    }

    Err(TransformError::Unsupported(TransformKind::Laplace))
}

fn constant_numerator(ctx: &Context, num: ExprId) -> Result<ExprId, TransformError> {
    match as_complex_const(ctx, num) {
        Some(_) => Ok(num),
        None => Err(TransformError::Unsupported(TransformKind::Laplace)),
    }
}

/// `t^(n-1)/(n-1)!` — the inverse of `1/s^n`.
fn time_monomial(ctx: &mut Context, n: u64) -> Result<ExprId, TransformError> {
    if n == 0 {
        return Err(TransformError::Unsupported(TransformKind::Laplace));
    }
    let t = ctx.var(TIME_VAR);
    let mono = if n == 1 {
        ctx.num(1)
    } else if n == 2 {
        t
    } else {
        let exp = ctx.num((n - 1) as i64);
        ctx.add(Expr::Pow(t, exp))
    };
    let fact = factorial(n - 1);
    let fact_expr = ctx.num_rational(fact);
    Ok(ctx.add(Expr::Div(mono, fact_expr)))
}

/// `coeff/s^n` as an expression.
fn s_power_reciprocal(ctx: &mut Context, n: i64, coeff: BigRational) -> ExprId {
    let s = ctx.var(LAPLACE_VAR);
    let den = if n == 1 {
        s
    } else {
        let exp = ctx.num(n);
        ctx.add(Expr::Pow(s, exp))
    };
    let num = ctx.num_rational(coeff);
    ctx.add(Expr::Div(num, den))
}

/// `s² + w²` as an expression; `w` must be real.
fn s_squared_plus(ctx: &mut Context, w: &CNum) -> Result<ExprId, TransformError> {
    if !w.is_real() {
        return Err(TransformError::Unsupported(TransformKind::Laplace));
    }
    let s = ctx.var(LAPLACE_VAR);
    let two = ctx.num(2);
    let s2 = ctx.add(Expr::Pow(s, two));
    let w2 = ctx.num_rational(&w.re * &w.re);
    Ok(ctx.add(Expr::Add(s2, w2)))
}

fn require_linear(ctx: &mut Context, arg: ExprId, var: &str) -> Result<CNum, TransformError> {
    linear_coeff(ctx, arg, var).ok_or(TransformError::Unsupported(TransformKind::Laplace))
}

fn integer_exponent(ctx: &Context, exp: ExprId) -> Option<i64> {
    match ctx.get(exp) {
        Expr::Number(n) if n.is_integer() => n.to_integer().to_i64(),
        Expr::Neg(inner) => integer_exponent(ctx, *inner).map(|n| -n),
        _ => None,
    }
}

fn factorial(n: u64) -> BigRational {
    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= BigInt::from(k);
    }
    BigRational::from_integer(acc)
}

fn rational_sqrt(value: &BigRational) -> Option<BigRational> {
    if value.is_negative() {
        return None;
    }
    let numer = value.numer().sqrt();
    let denom = value.denom().sqrt();
    let candidate = BigRational::new(numer, denom);
    if &(&candidate * &candidate) == value {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;
    use xform_engine::eval_complex;

    fn reals(values: &[i64]) -> Vec<CNum> {
        values.iter().map(|&v| CNum::from_i64(v)).collect()
    }

    #[test]
    fn mismatched_lengths_are_invalid() {
        let mut ctx = Context::new();
        let values = reals(&[1, 2]);
        let times = reals(&[0]);
        let err = transform_samples(&mut ctx, &values, Some(&times)).unwrap_err();
        assert!(matches!(err, TransformError::InvalidInput(_)));
    }

    #[test]
    fn non_increasing_axis_is_invalid() {
        let mut ctx = Context::new();
        let values = reals(&[1, 2]);
        let times = reals(&[3, 3]);
        let err = transform_samples(&mut ctx, &values, Some(&times)).unwrap_err();
        assert!(matches!(err, TransformError::InvalidInput(_)));
    }

    #[test]
    fn round_trip_with_default_axis() {
        let mut ctx = Context::new();
        let values = reals(&[3, -1, 4, 1]);
        let sum = transform_samples(&mut ctx, &values, None).unwrap();
        let (recovered, times) = invert_samples(&mut ctx, sum).unwrap();
        assert_eq!(recovered, values);
        assert_eq!(times, standard_axis(4));
    }

    #[test]
    fn round_trip_preserves_zero_samples() {
        let mut ctx = Context::new();
        let values = reals(&[0, 5, 0, 7]);
        let times = reals(&[0, 2, 5, 6]);
        let sum = transform_samples(&mut ctx, &values, Some(&times)).unwrap();
        let (recovered, recovered_times) = invert_samples(&mut ctx, sum).unwrap();
        assert_eq!(recovered, values);
        assert_eq!(recovered_times, times);
    }

    #[test]
    fn round_trip_with_complex_values() {
        let mut ctx = Context::new();
        let values = vec![
            CNum::from_f64_pair(10.5, 0.0).unwrap(),
            CNum::from_f64_pair(-3.0, 2.0).unwrap(),
            CNum::from_f64_pair(0.0, -1.0).unwrap(),
        ];
        let times = reals(&[0, 4, 9]);
        let sum = transform_samples(&mut ctx, &values, Some(&times)).unwrap();
        let (recovered, recovered_times) = invert_samples(&mut ctx, sum).unwrap();
        assert_eq!(recovered, values);
        assert_eq!(recovered_times, times);
    }

    #[test]
    fn delta_signal_has_flat_spectrum() {
        // values [1,0,0,0] at t=[0,1,2,3]: the sum evaluates to 1 at any s.
        let mut ctx = Context::new();
        let values = reals(&[1, 0, 0, 0]);
        let times = reals(&[0, 1, 2, 3]);
        let sum = transform_samples(&mut ctx, &values, Some(&times)).unwrap();
        for (re, im) in [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)] {
            let mut vars = FxHashMap::default();
            vars.insert(
                LAPLACE_VAR.to_string(),
                num_complex::Complex64::new(re, im),
            );
            let value = eval_complex(&ctx, sum, &vars).unwrap();
            assert!((value - num_complex::Complex64::new(1.0, 0.0)).norm() < 1e-12);
        }
    }

    #[test]
    fn symbolic_table_round_trips_exponential() {
        let mut ctx = Context::new();
        // f(t) = exp(-2t)
        let two = ctx.num(2);
        let t = ctx.var(TIME_VAR);
        let two_t = ctx.add(Expr::Mul(two, t));
        let neg = ctx.add(Expr::Neg(two_t));
        let f = ctx.func("exp", vec![neg]);

        let transformed = transform_function(&mut ctx, f).unwrap();
        let back = inverse_transform_function(&mut ctx, transformed).unwrap();
        assert!(xform_engine::semantically_equal(&ctx, back, f));
    }

    #[test]
    fn symbolic_table_matches_classic_pairs() {
        let mut ctx = Context::new();
        // L{t} = 1/s²
        let t = ctx.var(TIME_VAR);
        let transformed = transform_function(&mut ctx, t).unwrap();
        let s = ctx.var(LAPLACE_VAR);
        let two = ctx.num(2);
        let s2 = ctx.add(Expr::Pow(s, two));
        let one = ctx.num(1);
        let expected = ctx.add(Expr::Div(one, s2));
        assert!(xform_engine::semantically_equal(&ctx, transformed, expected));
    }

    #[test]
    fn sine_inverts_back_to_sine() {
        let mut ctx = Context::new();
        // f(t) = sin(3t)
        let three = ctx.num(3);
        let t = ctx.var(TIME_VAR);
        let arg = ctx.add(Expr::Mul(three, t));
        let f = ctx.func("sin", vec![arg]);
        let transformed = transform_function(&mut ctx, f).unwrap();
        let back = inverse_transform_function(&mut ctx, transformed).unwrap();
        assert!(xform_engine::semantically_equal(&ctx, back, f));
    }

    #[test]
    fn unsupported_shape_is_refused() {
        let mut ctx = Context::new();
        let t = ctx.var(TIME_VAR);
        let f = ctx.func("ln", vec![t]);
        assert!(matches!(
            transform_function(&mut ctx, f),
            Err(TransformError::Unsupported(TransformKind::Laplace))
        ));
    }
}
