use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{CasError, Result};
use crate::term::Term;

/// Exact roots of `a·xⁿ = value`: the principal n-th root of `value / a`
/// rotated by each n-th root of unity, giving exactly `n` values.
pub fn solve_monomial(term: &Term, value: f64) -> Result<Vec<Complex64>> {
    let Some(var) = term.variable()? else {
        return Err(CasError::Unsupported(format!(
            "{term} has no variable to solve for"
        )));
    };
    let n = term.exponent(var);
    if n < 1 {
        return Err(CasError::Unsupported(format!(
            "{term} is not a positive power of {var}"
        )));
    }
    if term.is_zero() {
        return Err(CasError::NotDivisible {
            dividend: value,
            divisor: 0.0,
        });
    }
    let principal = Complex64::new(value / term.coefficient(), 0.0).powf(1.0 / f64::from(n));
    Ok((0..n)
        .map(|k| principal * Complex64::cis(2.0 * PI * f64::from(k) / f64::from(n)))
        .collect())
}
