//! Polynomials as canonical sums of [`Term`]s.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{CasError, Result};
use crate::polynomial::Polynomial;
use crate::term::{Powers, Term, normalize_var};

/// A sum of terms kept in canonical form: like terms combined, zero terms
/// dropped and the rest sorted by descending total degree. The empty sum is
/// the zero polynomial.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    pub fn new(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut combined: BTreeMap<Powers, f64> = BTreeMap::new();
        for term in terms {
            *combined.entry(term.powers().clone()).or_insert(0.0) += term.coefficient();
        }
        let mut terms: Vec<Term> = combined
            .into_iter()
            .filter(|(_, coefficient)| *coefficient != 0.0)
            .map(|(powers, coefficient)| Term::from_powers(coefficient, powers))
            .collect();
        terms.sort_by(Term::canonical_cmp);
        Expression { terms }
    }

    pub fn zero() -> Self {
        Expression { terms: Vec::new() }
    }

    pub fn one() -> Self {
        Expression::from(Term::one())
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(Term::is_constant)
    }

    /// Value of a constant expression; `None` if any variable remains.
    pub fn constant_value(&self) -> Option<f64> {
        self.is_constant()
            .then(|| self.terms.iter().map(Term::coefficient).sum())
    }

    /// The single term of a one-term expression.
    pub fn as_term(&self) -> Option<&Term> {
        match self.terms.as_slice() {
            [term] => Some(term),
            _ => None,
        }
    }

    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.leading_term().map(Term::coefficient).unwrap_or(0.0)
    }

    pub fn variables(&self) -> BTreeSet<String> {
        self.terms
            .iter()
            .flat_map(|term| term.variables().map(str::to_string))
            .collect()
    }

    /// The only variable of a univariate expression, `None` for constants.
    pub fn variable(&self) -> Result<Option<String>> {
        let mut names = self.variables().into_iter();
        match (names.next(), names.next()) {
            (first, None) => Ok(first),
            _ => Err(CasError::AmbiguousVariable(self.to_string())),
        }
    }

    /// Highest exponent of `var` over all terms; `None` for the zero polynomial.
    pub fn degree_in(&self, var: &str) -> Option<i32> {
        self.terms.iter().map(|term| term.exponent(var)).max()
    }

    /// Degree in the expression's only variable.
    pub fn degree(&self) -> Result<i32> {
        if self.is_zero() {
            return Err(CasError::Unsupported(
                "degree of the zero polynomial".to_string(),
            ));
        }
        match self.variable()? {
            Some(var) => Ok(self.degree_in(&var).unwrap_or(0)),
            None => Ok(0),
        }
    }

    pub fn add(&self, other: &Expression) -> Expression {
        Expression::new(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    pub fn sub(&self, other: &Expression) -> Expression {
        Expression::new(
            self.terms
                .iter()
                .cloned()
                .chain(other.terms.iter().map(Term::negate)),
        )
    }

    /// Full distributive product, every term against every term. Fails only
    /// when an exponent overflows.
    pub fn checked_mul(&self, other: &Expression) -> Result<Expression> {
        let products = self
            .terms
            .iter()
            .flat_map(|a| other.terms.iter().map(move |b| a.checked_mul(b)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Expression::new(products))
    }

    pub fn neg(&self) -> Expression {
        Expression {
            terms: self.terms.iter().map(Term::negate).collect(),
        }
    }

    pub fn scale(&self, k: f64) -> Expression {
        Expression::new(self.terms.iter().map(|term| term.scale(k)))
    }

    pub fn pow(&self, exp: u32) -> Result<Expression> {
        let mut result = Expression::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n % 2 == 1 {
                result = result.checked_mul(&base)?;
            }
            n /= 2;
            if n > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(result)
    }

    pub fn div_term(&self, divisor: &Term) -> Result<Expression> {
        let terms = self
            .terms
            .iter()
            .map(|term| term.checked_div(divisor))
            .collect::<Result<Vec<_>>>()?;
        Ok(Expression::new(terms))
    }

    /// Term-wise division; only defined for single-term divisors. Use
    /// [`Expression::div_rem`] for polynomial long division.
    pub fn checked_div(&self, divisor: &Expression) -> Result<Expression> {
        match divisor.as_term() {
            Some(term) => self.div_term(term),
            None if divisor.is_zero() => Err(CasError::NotDivisible {
                dividend: self.leading_coefficient(),
                divisor: 0.0,
            }),
            None => Err(CasError::Unsupported(format!(
                "term-wise division by the multi-term expression {divisor}"
            ))),
        }
    }

    /// Euclidean long division in the shared variable: `self = q·divisor + r`
    /// with `deg r < deg divisor`.
    pub fn div_rem(&self, divisor: &Expression) -> Result<(Expression, Expression)> {
        if divisor.is_zero() {
            return Err(CasError::NotDivisible {
                dividend: self.leading_coefficient(),
                divisor: 0.0,
            });
        }
        let mut names = self.variables();
        names.extend(divisor.variables());
        if names.len() > 1 {
            return Err(CasError::AmbiguousVariable(format!("{self} and {divisor}")));
        }
        let Some(var) = names.pop_first() else {
            return Ok((self.div_term(&divisor.terms[0])?, Expression::zero()));
        };
        let dividend = Polynomial::from_expression(self, &var)?;
        let divisor = Polynomial::from_expression(divisor, &var)?;
        let (quotient, remainder) = dividend.div_rem(&divisor);
        Ok((quotient.to_expression(&var)?, remainder.to_expression(&var)?))
    }

    /// Replaces `var` by `value` everywhere, leaving the other variables.
    pub fn substitute(&self, var: &str, value: f64) -> Expression {
        Expression::new(self.terms.iter().map(|term| term.substitute(var, value)))
    }

    pub fn evaluate(&self, bindings: &[(&str, f64)]) -> Result<f64> {
        self.terms
            .iter()
            .map(|term| term.evaluate(bindings))
            .sum()
    }

    /// Evaluates a univariate expression at `x`.
    pub fn at(&self, x: f64) -> Result<f64> {
        match self.variable()? {
            Some(var) => self.evaluate(&[(var.as_str(), x)]),
            None => Ok(self.constant_value().unwrap_or(0.0)),
        }
    }

    /// `order`-th derivative with respect to `var`.
    pub fn derivative(&self, var: &str, order: usize) -> Result<Expression> {
        crate::calculus::nth_derivative(&normalize_var(var), self, order)
    }

    /// `order`-th derivative in the expression's only variable.
    pub fn derivative_inferred(&self, order: usize) -> Result<Expression> {
        crate::calculus::derivative(self, None, order)
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::new([term])
    }
}

impl From<&Term> for Expression {
    fn from(term: &Term) -> Self {
        Expression::new([term.clone()])
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::from(Term::from(value))
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Expression::from(Term::from(value))
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Expression::from(Term::from(value))
    }
}

impl FromIterator<Term> for Expression {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Expression::new(iter)
    }
}

impl FromStr for Expression {
    type Err = CasError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_expression(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}
