use crate::error::Result;
use crate::expression::Expression;

/// Slope and intercept of the tangent line to a univariate expression at `x`.
pub fn tangent_line(expr: &Expression, x: f64) -> Result<(f64, f64)> {
    let y = expr.at(x)?;
    let slope = match expr.variable()? {
        Some(var) => expr.derivative(&var, 1)?.at(x)?,
        None => 0.0,
    };
    Ok((slope, y - slope * x))
}
