use super::univariate;
use crate::error::Result;
use crate::expression::Expression;

/// Synthetic division of a univariate expression by `(x - root)`.
///
/// Returns the quotient and the remainder; the remainder always equals the
/// expression evaluated at `root`.
pub fn divide(expr: &Expression, root: f64) -> Result<(Expression, f64)> {
    let (var, poly) = univariate(expr)?;
    let (quotient, remainder) = poly.synthetic_division(&root);
    let quotient = match var {
        Some(var) => quotient.to_expression(&var)?,
        None => Expression::zero(),
    };
    Ok((quotient, remainder))
}
