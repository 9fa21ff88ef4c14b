//! Dense univariate polynomials indexed by exponent, the working form of the
//! root engine.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::error::{CasError, Result};
use crate::expression::Expression;
use crate::term::{Powers, Term, variable_name};

pub trait CoeffOps: Clone + Debug {
    fn zero() -> Self;
    fn one() -> Self;
    fn from_real(value: f64) -> Self;
    fn is_zero(&self) -> bool;
    fn norm(&self) -> f64;
    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn div(&self, other: &Self) -> Self;
}

impl CoeffOps for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_real(value: f64) -> Self {
        value
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn norm(&self) -> f64 {
        self.abs()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn div(&self, other: &Self) -> Self {
        self / other
    }
}

impl CoeffOps for Complex64 {
    fn zero() -> Self {
        <Complex64 as Zero>::zero()
    }

    fn one() -> Self {
        <Complex64 as One>::one()
    }

    fn from_real(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn norm(&self) -> f64 {
        Complex64::norm(*self)
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn div(&self, other: &Self) -> Self {
        self / other
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<C> {
    pub(crate) coeffs: BTreeMap<usize, C>,
}

pub type Poly = Polynomial<f64>;

impl<C: CoeffOps> Polynomial<C> {
    pub fn zero() -> Self {
        Polynomial {
            coeffs: BTreeMap::new(),
        }
    }

    pub fn from_constant(c: C) -> Self {
        Polynomial::from_coeffs([(0, c)])
    }

    /// Builds from `(exponent, coefficient)` pairs, summing repeats.
    pub fn from_coeffs(entries: impl IntoIterator<Item = (usize, C)>) -> Self {
        entries
            .into_iter()
            .map(|(exp, coeff)| Polynomial::monomial(exp, coeff))
            .fold(Polynomial::zero(), |acc, p| acc + p)
    }

    /// Builds from coefficients listed from the highest degree down to the
    /// constant term.
    pub fn from_descending(coeffs: &[C]) -> Self {
        let degree = coeffs.len().saturating_sub(1);
        Polynomial::from_coeffs(
            coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| (degree - i, c.clone())),
        )
    }

    fn monomial(exp: usize, coeff: C) -> Self {
        let mut coeffs = BTreeMap::new();
        if !coeff.is_zero() {
            coeffs.insert(exp, coeff);
        }
        Polynomial { coeffs }
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.keys().next_back().copied()
    }

    pub fn leading_coeff(&self) -> C {
        self.degree()
            .and_then(|d| self.coeffs.get(&d).cloned())
            .unwrap_or_else(C::zero)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn coeff(&self, power: usize) -> C {
        self.coeffs.get(&power).cloned().unwrap_or_else(C::zero)
    }

    pub fn coeff_entries(&self) -> impl Iterator<Item = (usize, C)> + '_ {
        self.coeffs.iter().map(|(e, c)| (*e, c.clone()))
    }

    /// Every coefficient from the leading one down to the constant term,
    /// including zeros for missing powers.
    pub fn descending_coeffs(&self) -> Vec<C> {
        match self.degree() {
            Some(d) => (0..=d).rev().map(|e| self.coeff(e)).collect(),
            None => Vec::new(),
        }
    }

    pub fn scale(&self, k: &C) -> Self {
        Polynomial::from_coeffs(self.coeff_entries().map(|(e, c)| (e, c.mul(k))))
    }

    /// Horner evaluation.
    pub fn evaluate(&self, x: &C) -> C {
        self.descending_coeffs()
            .iter()
            .fold(C::zero(), |acc, c| acc.mul(x).add(c))
    }

    pub fn derivative(&self) -> Self {
        Polynomial::from_coeffs(
            self.coeff_entries()
                .filter(|(e, _)| *e > 0)
                .map(|(e, c)| (e - 1, c.mul(&C::from_real(e as f64)))),
        )
    }

    /// Divides by `(x - root)`. Each coefficient of the running sequence is
    /// `previous * root + next`; the last one is the remainder, which equals
    /// the value of the polynomial at `root`.
    pub fn synthetic_division(&self, root: &C) -> (Self, C) {
        let coeffs = self.descending_coeffs();
        let mut under: Vec<C> = Vec::with_capacity(coeffs.len());
        for c in &coeffs {
            let next = match under.last() {
                Some(prev) => prev.mul(root).add(c),
                None => c.clone(),
            };
            under.push(next);
        }
        let remainder = under.pop().unwrap_or_else(C::zero);
        (Polynomial::from_descending(&under), remainder)
    }

    /// Euclidean long division: `self = q * divisor + r` with `deg r < deg divisor`.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let divisor_degree = match divisor.degree() {
            Some(deg) => deg,
            None => return (Polynomial::zero(), self.clone()),
        };
        let divisor_lc = divisor.leading_coeff();
        let mut remainder = self.clone();
        let mut quotient = Polynomial::zero();

        while let Some(r_deg) = remainder.degree() {
            if r_deg < divisor_degree {
                break;
            }
            let power = r_deg - divisor_degree;
            let coeff = remainder.leading_coeff().div(&divisor_lc);
            let term_poly = Polynomial::monomial(power, coeff);
            quotient = quotient + term_poly.clone();
            remainder = remainder - term_poly * divisor.clone();
            // rounding can leave a residue where the leading term cancelled
            remainder.coeffs.remove(&r_deg);
        }

        (quotient, remainder)
    }
}

impl<C: CoeffOps> std::ops::Add for Polynomial<C> {
    type Output = Polynomial<C>;
    fn add(self, rhs: Polynomial<C>) -> Polynomial<C> {
        let mut coeffs = self.coeffs;
        for (exp, coeff) in rhs.coeffs {
            match coeffs.entry(exp) {
                Entry::Vacant(entry) => {
                    if !coeff.is_zero() {
                        entry.insert(coeff);
                    }
                }
                Entry::Occupied(mut entry) => {
                    let updated = entry.get().add(&coeff);
                    if updated.is_zero() {
                        entry.remove();
                    } else {
                        *entry.get_mut() = updated;
                    }
                }
            }
        }
        Polynomial { coeffs }
    }
}

impl<C: CoeffOps> std::ops::Sub for Polynomial<C> {
    type Output = Polynomial<C>;
    fn sub(self, rhs: Polynomial<C>) -> Polynomial<C> {
        let negated = rhs.scale(&C::from_real(-1.0));
        self + negated
    }
}

impl<C: CoeffOps> std::ops::Mul for Polynomial<C> {
    type Output = Polynomial<C>;
    fn mul(self, rhs: Polynomial<C>) -> Polynomial<C> {
        let mut product = Polynomial::zero();
        for (exp_a, coeff_a) in &self.coeffs {
            for (exp_b, coeff_b) in &rhs.coeffs {
                product = product + Polynomial::monomial(exp_a + exp_b, coeff_a.mul(coeff_b));
            }
        }
        product
    }
}

impl Polynomial<f64> {
    /// Reads a univariate expression in `var`. Other variables or negative
    /// exponents are rejected.
    pub fn from_expression(expr: &Expression, var: &str) -> Result<Self> {
        let mut entries = Vec::with_capacity(expr.len());
        for term in expr.terms() {
            if term.variables().any(|name| name != var) {
                return Err(CasError::AmbiguousVariable(expr.to_string()));
            }
            let exp = usize::try_from(term.exponent(var)).map_err(|_| {
                CasError::Unsupported(format!("negative exponent in {expr}"))
            })?;
            entries.push((exp, term.coefficient()));
        }
        Ok(Polynomial::from_coeffs(entries))
    }

    /// Writes the polynomial back as an expression in `var`, which must be a
    /// single letter.
    pub fn to_expression(&self, var: &str) -> Result<Expression> {
        let name = variable_name(var)?;
        self.coeff_entries()
            .map(|(exp, coeff)| {
                let exp = i32::try_from(exp)
                    .map_err(|_| CasError::ExponentOverflow(name.clone()))?;
                let mut powers = Powers::new();
                if exp != 0 {
                    powers.insert(name.clone(), exp);
                }
                Ok(Term::from_powers(coeff, powers))
            })
            .collect()
    }

    pub fn to_complex(&self) -> Polynomial<Complex64> {
        Polynomial::from_coeffs(
            self.coeff_entries()
                .map(|(e, c)| (e, Complex64::new(c, 0.0))),
        )
    }
}
