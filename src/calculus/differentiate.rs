use crate::error::{CasError, Result};
use crate::expression::Expression;
use crate::term::{Term, normalize_var};

/// First derivative of `expr` with respect to `var`.
pub fn differentiate(var: &str, expr: &Expression) -> Result<Expression> {
    expr.terms()
        .iter()
        .map(|term| differentiate_term(var, term))
        .collect()
}

/// Power rule on a single term. Terms without `var` differentiate to zero.
pub fn differentiate_term(var: &str, term: &Term) -> Result<Term> {
    let var = normalize_var(var);
    let exp = term.exponent(&var);
    if exp == 0 {
        return Ok(Term::constant(0.0));
    }
    let mut derived = term.scale(f64::from(exp));
    derived.accumulate(var, -1)?;
    Ok(derived)
}

pub fn nth_derivative(var: &str, expr: &Expression, order: usize) -> Result<Expression> {
    let mut result = expr.clone();
    for _ in 0..order {
        if result.is_zero() {
            break;
        }
        result = differentiate(var, &result)?;
    }
    Ok(result)
}

/// Derivative of the given order. Without an explicit variable the
/// expression must be univariate; constants differentiate to zero.
pub fn derivative(expr: &Expression, var: Option<&str>, order: usize) -> Result<Expression> {
    if let Some(var) = var {
        return nth_derivative(var, expr, order);
    }
    if order == 0 {
        return Ok(expr.clone());
    }
    if expr.is_zero() {
        return Err(CasError::Unsupported(
            "no variable to differentiate the zero polynomial by".to_string(),
        ));
    }
    match expr.variable()? {
        Some(var) => nth_derivative(&var, expr, order),
        None => Ok(Expression::zero()),
    }
}

impl Term {
    /// Derivative of a single term. Without an explicit variable the term
    /// must have at most one variable.
    pub fn derivative(&self, var: Option<&str>, order: usize) -> Result<Term> {
        let var = match var {
            Some(var) => normalize_var(var),
            None => match self.variable()? {
                Some(var) => var.to_string(),
                None if order == 0 => return Ok(self.clone()),
                None => return Ok(Term::constant(0.0)),
            },
        };
        let mut result = self.clone();
        for _ in 0..order {
            result = differentiate_term(&var, &result)?;
        }
        Ok(result)
    }
}
