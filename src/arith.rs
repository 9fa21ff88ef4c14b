//! Operator overloads and operand coercion for [`Term`] and [`Expression`].
//!
//! Every operator returns a fresh canonical value; operands are never mutated.
//!
//! # Panics
//!
//! The `*` operators panic when an exponent overflows `i32`, the way
//! `Instant + Duration` does. [`Expression::checked_mul`], [`Term::checked_mul`]
//! and [`Expression::try_mul`] return
//! [`CasError::ExponentOverflow`](crate::CasError::ExponentOverflow) instead.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::Result;
use crate::expression::Expression;
use crate::term::Term;

/// Values accepted wherever an operand may be a number, raw text, a term or an
/// expression. Text goes through the parser, numbers become constant terms.
pub trait IntoExpression {
    fn into_expression(self) -> Result<Expression>;
}

impl IntoExpression for Expression {
    fn into_expression(self) -> Result<Expression> {
        Ok(self)
    }
}

impl IntoExpression for &Expression {
    fn into_expression(self) -> Result<Expression> {
        Ok(self.clone())
    }
}

impl IntoExpression for Term {
    fn into_expression(self) -> Result<Expression> {
        Ok(Expression::from(self))
    }
}

impl IntoExpression for &Term {
    fn into_expression(self) -> Result<Expression> {
        Ok(Expression::from(self))
    }
}

impl IntoExpression for &str {
    fn into_expression(self) -> Result<Expression> {
        crate::parser::parse_expression(self)
    }
}

impl IntoExpression for String {
    fn into_expression(self) -> Result<Expression> {
        crate::parser::parse_expression(&self)
    }
}

macro_rules! numeric_operand {
    ($($ty:ty),*) => {
        $(
            impl IntoExpression for $ty {
                fn into_expression(self) -> Result<Expression> {
                    Ok(Expression::from(self))
                }
            }
        )*
    };
}

numeric_operand!(f64, i64, i32);

impl Expression {
    pub fn try_add(&self, rhs: impl IntoExpression) -> Result<Expression> {
        Ok(self.add(&rhs.into_expression()?))
    }

    pub fn try_sub(&self, rhs: impl IntoExpression) -> Result<Expression> {
        Ok(self.sub(&rhs.into_expression()?))
    }

    pub fn try_mul(&self, rhs: impl IntoExpression) -> Result<Expression> {
        self.checked_mul(&rhs.into_expression()?)
    }

    pub fn try_div(&self, rhs: impl IntoExpression) -> Result<Expression> {
        self.checked_div(&rhs.into_expression()?)
    }
}

impl<R: Into<Expression>> Add<R> for Expression {
    type Output = Expression;
    fn add(self, rhs: R) -> Expression {
        Expression::add(&self, &rhs.into())
    }
}

impl<'a> Add<&'a Expression> for &'a Expression {
    type Output = Expression;
    fn add(self, rhs: &'a Expression) -> Expression {
        Expression::add(self, rhs)
    }
}

impl<R: Into<Expression>> Sub<R> for Expression {
    type Output = Expression;
    fn sub(self, rhs: R) -> Expression {
        Expression::sub(&self, &rhs.into())
    }
}

impl<'a> Sub<&'a Expression> for &'a Expression {
    type Output = Expression;
    fn sub(self, rhs: &'a Expression) -> Expression {
        Expression::sub(self, rhs)
    }
}

fn overflowed<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<R: Into<Expression>> Mul<R> for Expression {
    type Output = Expression;
    fn mul(self, rhs: R) -> Expression {
        overflowed(self.checked_mul(&rhs.into()))
    }
}

impl<'a> Mul<&'a Expression> for &'a Expression {
    type Output = Expression;
    fn mul(self, rhs: &'a Expression) -> Expression {
        overflowed(self.checked_mul(rhs))
    }
}

impl Neg for Expression {
    type Output = Expression;
    fn neg(self) -> Expression {
        Expression::neg(&self)
    }
}

impl Neg for &Expression {
    type Output = Expression;
    fn neg(self) -> Expression {
        Expression::neg(self)
    }
}

/// Sum of two terms. Like terms collapse into a single-term expression.
impl<R: Into<Expression>> Add<R> for Term {
    type Output = Expression;
    fn add(self, rhs: R) -> Expression {
        Expression::add(&Expression::from(self), &rhs.into())
    }
}

impl<R: Into<Expression>> Sub<R> for Term {
    type Output = Expression;
    fn sub(self, rhs: R) -> Expression {
        Expression::sub(&Expression::from(self), &rhs.into())
    }
}

impl Mul for Term {
    type Output = Term;
    fn mul(self, rhs: Term) -> Term {
        overflowed(self.checked_mul(&rhs))
    }
}

impl<'a> Mul<&'a Term> for &'a Term {
    type Output = Term;
    fn mul(self, rhs: &'a Term) -> Term {
        overflowed(self.checked_mul(rhs))
    }
}

impl Mul<Expression> for Term {
    type Output = Expression;
    fn mul(self, rhs: Expression) -> Expression {
        overflowed(Expression::from(self).checked_mul(&rhs))
    }
}

impl Neg for Term {
    type Output = Term;
    fn neg(self) -> Term {
        self.negate()
    }
}
