use std::collections::BTreeSet;

use num_integer::Integer;
use num_rational::Rational64;
use tracing::trace;

use crate::error::Result;
use crate::expression::Expression;
use crate::term::{Powers, Term};

/// One layer of a shelled expression: `expr = factor * reduced + residual`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    pub factor: Term,
    pub reduced: Expression,
    pub residual: f64,
}

/// Repeatedly splits off the constant terms and factors the greatest common
/// monomial out of the rest, exposing the nested form
/// `f1 * (f2 * (... ) + r2) + r1`.
///
/// Stops once a single term remains or the common factor is `1`. A zero
/// residual in the first layer means the factor's variables give zero roots.
pub fn shell(expr: &Expression) -> Result<Vec<Shell>> {
    let mut shells = Vec::new();
    let mut current = expr.clone();
    while current.len() > 1 {
        let (constants, rest): (Vec<&Term>, Vec<&Term>) =
            current.terms().iter().partition(|term| term.is_constant());
        let residual: f64 = constants.iter().map(|term| term.coefficient()).sum();
        let factor = common_factor(&rest);
        if factor.is_one() {
            break;
        }
        let reduced = rest
            .iter()
            .map(|term| term.checked_div(&factor))
            .collect::<Result<Expression>>()?;
        trace!(factor = %factor, reduced = %reduced, residual, "shelled");
        shells.push(Shell {
            factor,
            reduced: reduced.clone(),
            residual,
        });
        current = reduced;
    }
    Ok(shells)
}

/// Greatest common monomial of `terms`: the coefficient gcd times every
/// variable raised to its smallest exponent. The sign follows the first term
/// so the reduced expression keeps a positive leading coefficient.
pub fn common_factor(terms: &[&Term]) -> Term {
    let Some(first) = terms.first() else {
        return Term::one();
    };
    let names: BTreeSet<&str> = terms.iter().copied().flat_map(Term::variables).collect();
    let powers: Powers = names
        .into_iter()
        .filter_map(|name| {
            let min = terms.iter().map(|term| term.exponent(name)).min()?;
            (min != 0).then(|| (name.to_string(), min))
        })
        .collect();
    let coefficients: Vec<f64> = terms.iter().map(|term| term.coefficient()).collect();
    let gcd = coefficient_gcd(&coefficients);
    let sign = if first.coefficient() < 0.0 { -1.0 } else { 1.0 };
    Term::from_powers(sign * gcd, powers)
}

/// Gcd of real coefficients through their rational approximations:
/// gcd of numerators over lcm of denominators. Falls back to `1` when a
/// coefficient has no small rational form.
fn coefficient_gcd(coefficients: &[f64]) -> f64 {
    let mut numer_gcd: i64 = 0;
    let mut denom_lcm: i64 = 1;
    for &c in coefficients {
        let Some(ratio) = Rational64::approximate_float(c.abs()) else {
            return 1.0;
        };
        let approximated = *ratio.numer() as f64 / *ratio.denom() as f64;
        if (approximated - c.abs()).abs() > f64::EPSILON * c.abs() {
            return 1.0;
        }
        numer_gcd = numer_gcd.gcd(ratio.numer());
        let step = denom_lcm / denom_lcm.gcd(ratio.denom());
        match step.checked_mul(*ratio.denom()) {
            Some(lcm) => denom_lcm = lcm,
            None => return 1.0,
        }
    }
    if numer_gcd == 0 {
        return 1.0;
    }
    numer_gcd as f64 / denom_lcm as f64
}
