use num_complex::Complex64;
use tracing::{debug, trace, warn};

use super::univariate;
use crate::error::Result;
use crate::expression::Expression;
use crate::polynomial::{CoeffOps, Polynomial};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewtonStatus {
    /// Every iteration allowed by the cap was performed.
    Exhausted,
    /// The derivative vanished at the current guess; the guess is unconverged.
    ZeroDerivative,
}

/// Result of a Newton-Raphson run. The root is only an approximation; check
/// the residual when precision matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonEstimate<T = f64> {
    pub root: T,
    pub iterations: usize,
    pub status: NewtonStatus,
}

impl<T> NewtonEstimate<T> {
    pub fn is_degenerate(&self) -> bool {
        self.status == NewtonStatus::ZeroDerivative
    }
}

/// Newton-Raphson on a univariate expression, iterating
/// `guess <- guess - f(guess) / f'(guess)` exactly `accuracy` times unless
/// the derivative vanishes first.
pub fn zero(expr: &Expression, starting_guess: f64, accuracy: usize) -> Result<NewtonEstimate> {
    let (_, poly) = univariate(expr)?;
    Ok(newton(&poly, starting_guess, accuracy))
}

/// [`zero`] in complex arithmetic, able to reach non-real roots from a
/// non-real starting guess.
pub fn zero_complex(
    expr: &Expression,
    starting_guess: Complex64,
    accuracy: usize,
) -> Result<NewtonEstimate<Complex64>> {
    let (_, poly) = univariate(expr)?;
    Ok(newton(&poly.to_complex(), starting_guess, accuracy))
}

pub(crate) fn newton<C: CoeffOps>(
    poly: &Polynomial<C>,
    starting_guess: C,
    accuracy: usize,
) -> NewtonEstimate<C> {
    let slope = poly.derivative();
    let mut guess = starting_guess;
    for iteration in 0..accuracy {
        let dy = slope.evaluate(&guess);
        let step = poly.evaluate(&guess).div(&dy);
        if dy.is_zero() || !step.norm().is_finite() {
            warn!(iteration, guess = ?guess, "newton stopped on a vanishing derivative");
            return NewtonEstimate {
                root: guess,
                iterations: iteration,
                status: NewtonStatus::ZeroDerivative,
            };
        }
        guess = guess.sub(&step);
        trace!(iteration, step = step.norm(), "newton step");
    }
    debug!(iterations = accuracy, root = ?guess, "newton finished");
    NewtonEstimate {
        root: guess,
        iterations: accuracy,
        status: NewtonStatus::Exhausted,
    }
}
