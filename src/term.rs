//! Monomials: a real coefficient times a product of variables raised to integer powers.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{CasError, Result};

/// Variable name to exponent. Every stored exponent is nonzero.
pub type Powers = BTreeMap<String, i32>;

#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    coefficient: f64,
    powers: Powers,
}

impl Term {
    /// Builds a term from a coefficient and `(variable, exponent)` pairs.
    ///
    /// Names must be single letters. They are lowercased and repeated
    /// variables accumulate, so `Term::new(2.0, [("x", 1), ("X", 2)])` is `2x³`.
    pub fn new<S, I>(coefficient: f64, powers: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, i32)>,
    {
        let mut term = Term::constant(coefficient);
        for (name, exp) in powers {
            term.accumulate(variable_name(name.as_ref())?, exp)?;
        }
        Ok(term)
    }

    /// Rebuilds a term from an already normalized power map.
    pub(crate) fn from_powers(coefficient: f64, powers: Powers) -> Self {
        Term {
            coefficient,
            powers,
        }
    }

    pub fn constant(coefficient: f64) -> Self {
        Term::from_powers(coefficient, Powers::new())
    }

    /// `coefficient · var^exponent`.
    pub fn monomial(coefficient: f64, var: char, exponent: i32) -> Self {
        let mut powers = Powers::new();
        if exponent != 0 {
            powers.insert(lowercase(var), exponent);
        }
        Term::from_powers(coefficient, powers)
    }

    pub fn var(name: char) -> Self {
        Term::monomial(1.0, name, 1)
    }

    pub fn one() -> Self {
        Term::constant(1.0)
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn powers(&self) -> &Powers {
        &self.powers
    }

    /// Exponent of `var`; absent variables are raised to the 0th power.
    pub fn exponent(&self, var: &str) -> i32 {
        self.powers
            .get(var)
            .or_else(|| self.powers.get(&normalize_var(var)))
            .copied()
            .unwrap_or(0)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.powers.keys().map(String::as_str)
    }

    /// Sum of all exponents.
    pub fn degree(&self) -> i64 {
        self.powers.values().map(|&exp| i64::from(exp)).sum()
    }

    pub fn is_constant(&self) -> bool {
        self.powers.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    pub fn is_one(&self) -> bool {
        self.coefficient == 1.0 && self.powers.is_empty()
    }

    pub fn has_powers_of(&self, other: &Term) -> bool {
        self.powers == other.powers
    }

    pub fn with_coefficient(&self, coefficient: f64) -> Self {
        Term {
            coefficient,
            powers: self.powers.clone(),
        }
    }

    pub fn negate(&self) -> Self {
        self.with_coefficient(-self.coefficient)
    }

    pub fn scale(&self, k: f64) -> Self {
        self.with_coefficient(self.coefficient * k)
    }

    /// Sums two like terms; `None` when the power signatures differ.
    pub fn combine(&self, other: &Term) -> Option<Term> {
        self.has_powers_of(other)
            .then(|| self.with_coefficient(self.coefficient + other.coefficient))
    }

    /// Multiplies coefficients and adds exponents.
    pub fn checked_mul(&self, other: &Term) -> Result<Term> {
        let mut product = self.with_coefficient(self.coefficient * other.coefficient);
        for (name, exp) in &other.powers {
            product.accumulate(name.clone(), *exp)?;
        }
        Ok(product)
    }

    /// Divides coefficients and subtracts exponents, which may go negative.
    pub fn checked_div(&self, other: &Term) -> Result<Term> {
        if other.coefficient == 0.0 {
            return Err(CasError::NotDivisible {
                dividend: self.coefficient,
                divisor: other.coefficient,
            });
        }
        let mut quotient = self.with_coefficient(self.coefficient / other.coefficient);
        for (name, exp) in &other.powers {
            let negated = exp
                .checked_neg()
                .ok_or_else(|| CasError::ExponentOverflow(name.clone()))?;
            quotient.accumulate(name.clone(), negated)?;
        }
        Ok(quotient)
    }

    /// Replaces `var` by `value`, folding it into the coefficient.
    pub fn substitute(&self, var: &str, value: f64) -> Term {
        let var = normalize_var(var);
        let mut powers = self.powers.clone();
        match powers.remove(&var) {
            Some(exp) => Term {
                coefficient: self.coefficient * value.powi(exp),
                powers,
            },
            None => self.clone(),
        }
    }

    pub fn evaluate(&self, bindings: &[(&str, f64)]) -> Result<f64> {
        let mut value = self.coefficient;
        for (name, exp) in &self.powers {
            let bound = bindings
                .iter()
                .find(|(var, _)| normalize_var(var) == *name)
                .map(|(_, v)| *v)
                .ok_or_else(|| CasError::UnboundVariable(name.clone()))?;
            value *= bound.powi(*exp);
        }
        Ok(value)
    }

    /// The only variable of this term, or `None` for constants.
    pub fn variable(&self) -> Result<Option<&str>> {
        let mut names = self.variables();
        match (names.next(), names.next()) {
            (first, None) => Ok(first),
            _ => Err(CasError::AmbiguousVariable(self.to_string())),
        }
    }

    pub(crate) fn accumulate(&mut self, name: String, exp: i32) -> Result<()> {
        let total = self
            .powers
            .get(&name)
            .copied()
            .unwrap_or(0)
            .checked_add(exp)
            .ok_or_else(|| CasError::ExponentOverflow(name.clone()))?;
        if total == 0 {
            self.powers.remove(&name);
        } else {
            self.powers.insert(name, total);
        }
        Ok(())
    }

    /// Canonical ordering: higher total degree first, then graded lexicographic
    /// on the variable names.
    pub(crate) fn canonical_cmp(&self, other: &Term) -> Ordering {
        other.degree().cmp(&self.degree()).then_with(|| {
            let names: BTreeSet<&String> = self.powers.keys().chain(other.powers.keys()).collect();
            names
                .into_iter()
                .map(|name| other.exponent(name).cmp(&self.exponent(name)))
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Lookup key for a variable name. Lookups accept any text; only
/// construction insists on single letters.
pub(crate) fn normalize_var(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => lowercase(c),
        _ => name.to_lowercase(),
    }
}

/// Validates and lowercases a variable name. Variables are single letters so
/// that rendered text reads back unchanged.
pub(crate) fn variable_name(name: &str) -> Result<String> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(lowercase(c)),
        _ => Err(CasError::InvalidVariable(name.to_string())),
    }
}

/// Letters whose lowercase form spans several characters stay as written.
pub(crate) fn lowercase(c: char) -> String {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l.to_string(),
        _ => c.to_string(),
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::constant(value)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::constant(value as f64)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::constant(f64::from(value))
    }
}

impl FromStr for Term {
    type Err = CasError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_term(s)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty_term(self))
    }
}
