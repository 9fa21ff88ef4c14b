//! Root engine for univariate expressions: Newton-Raphson, synthetic
//! division, monomial shelling and exact power-equation roots, combined in
//! [`roots`] into a full deflation pipeline.

pub mod monomial;
pub mod newton;
pub mod shell;
pub mod synthetic;

use num_complex::Complex64;
use tracing::{debug, warn};

use crate::error::{CasError, Result};
use crate::expression::Expression;
use crate::polynomial::{Poly, Polynomial};

pub use monomial::solve_monomial;
pub use newton::{NewtonEstimate, NewtonStatus, zero, zero_complex};
pub use shell::{Shell, common_factor, shell};
pub use synthetic::divide;

/// Tuning knobs for [`roots`].
#[derive(Debug, Clone, PartialEq)]
pub struct RootOptions {
    /// Newton-Raphson iteration cap per root.
    pub accuracy: usize,
    /// Cap on deflation passes.
    pub max_passes: usize,
    /// Newton starting guess. Off the real axis so complex roots are reachable.
    pub starting_guess: Complex64,
    /// Real or imaginary parts smaller than this are reported as zero.
    pub snap_epsilon: f64,
}

impl Default for RootOptions {
    fn default() -> Self {
        RootOptions {
            accuracy: 100,
            max_passes: 64,
            starting_guess: Complex64::new(0.4, 0.9),
            snap_epsilon: 1e-9,
        }
    }
}

impl RootOptions {
    pub fn with_accuracy(mut self, accuracy: usize) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn with_starting_guess(mut self, guess: Complex64) -> Self {
        self.starting_guess = guess;
        self
    }

    pub fn with_snap_epsilon(mut self, epsilon: f64) -> Self {
        self.snap_epsilon = epsilon;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootMethod {
    /// A zero root peeled off by factoring out a power of the variable.
    Shelling,
    /// From the closed form of `a·xⁿ = c`.
    Exact,
    /// Newton-Raphson followed by synthetic deflation.
    Newton,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub value: Complex64,
    pub method: RootMethod,
    /// False when Newton stopped on a vanishing derivative.
    pub converged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootReport {
    pub variable: Option<String>,
    pub roots: Vec<Root>,
    /// The constant left once every root is divided out, i.e. the leading
    /// coefficient `c` of `c·(x - r1)·…·(x - rn)`.
    pub constant: f64,
    /// False when the pass cap stopped deflation before degree 0.
    pub complete: bool,
}

impl RootReport {
    fn new(variable: Option<String>) -> Self {
        RootReport {
            variable,
            roots: Vec::new(),
            constant: 0.0,
            complete: true,
        }
    }

    pub fn values(&self) -> Vec<Complex64> {
        self.roots.iter().map(|root| root.value).collect()
    }

    /// Roots whose imaginary part is within `epsilon` of zero.
    pub fn real_values(&self, epsilon: f64) -> Vec<f64> {
        self.roots
            .iter()
            .filter(|root| root.value.im.abs() <= epsilon)
            .map(|root| root.value.re)
            .collect()
    }

    fn push(&mut self, value: Complex64, method: RootMethod, converged: bool) {
        self.roots.push(Root {
            value,
            method,
            converged,
        });
    }
}

/// Approximates every root of a univariate expression.
///
/// Zero roots are shelled off first, binomials `a·xⁿ + c` are solved exactly,
/// and anything else alternates Newton-Raphson with synthetic division until
/// the remaining polynomial is constant or the pass cap is hit. Precision
/// lost in early passes carries into later ones.
pub fn roots(expr: &Expression, options: &RootOptions) -> Result<RootReport> {
    let (var, _) = univariate(expr)?;
    let mut report = RootReport::new(var.clone());
    let Some(var) = var else {
        report.constant = expr.leading_coefficient();
        return Ok(report);
    };

    let mut current = expr.clone();
    if let Some(outer) = shell(&current)?.into_iter().next() {
        if outer.residual == 0.0 {
            let multiplicity = outer.factor.exponent(&var);
            debug!(multiplicity, "shelled zero roots");
            for _ in 0..multiplicity {
                report.push(Complex64::new(0.0, 0.0), RootMethod::Shelling, true);
            }
            current = outer.reduced.scale(outer.factor.coefficient());
        }
    }

    match current.terms() {
        [term] if term.is_constant() => {
            report.constant = term.coefficient();
        }
        [term] => {
            for value in solve_monomial(term, 0.0)? {
                report.push(snap(value, options.snap_epsilon), RootMethod::Exact, true);
            }
            report.constant = term.coefficient();
        }
        [lead, constant] if constant.is_constant() => {
            for value in solve_monomial(lead, -constant.coefficient())? {
                report.push(snap(value, options.snap_epsilon), RootMethod::Exact, true);
            }
            report.constant = lead.coefficient();
        }
        _ => {
            let poly = Polynomial::from_expression(&current, &var)?.to_complex();
            deflate(poly, options, &mut report);
        }
    }
    Ok(report)
}

fn deflate(mut poly: Polynomial<Complex64>, options: &RootOptions, report: &mut RootReport) {
    let mut passes = 0;
    while poly.degree().unwrap_or(0) > 0 {
        if passes == options.max_passes {
            warn!(
                passes,
                remaining_degree = poly.degree(),
                "deflation stopped at the pass cap"
            );
            report.complete = false;
            break;
        }
        let estimate = newton::newton(&poly, options.starting_guess, options.accuracy);
        let root = snap(estimate.root, options.snap_epsilon);
        let (quotient, remainder) = poly.synthetic_division(&root);
        debug!(pass = passes, %root, residual = remainder.norm(), "deflated root");
        report.push(root, RootMethod::Newton, !estimate.is_degenerate());
        poly = quotient;
        passes += 1;
    }
    report.constant = poly.leading_coeff().re;
}

fn snap(value: Complex64, epsilon: f64) -> Complex64 {
    let clean = |part: f64| if part.abs() < epsilon { 0.0 } else { part };
    Complex64::new(clean(value.re), clean(value.im))
}

/// Validates a univariate polynomial and returns its variable (if any) with
/// its dense form.
pub(crate) fn univariate(expr: &Expression) -> Result<(Option<String>, Poly)> {
    if expr.is_zero() {
        return Err(CasError::Unsupported(
            "the zero polynomial has no isolated roots".to_string(),
        ));
    }
    let var = expr.variable()?;
    let poly = match &var {
        Some(name) => Polynomial::from_expression(expr, name)?,
        None => Polynomial::from_constant(expr.leading_coefficient()),
    };
    Ok((var, poly))
}
