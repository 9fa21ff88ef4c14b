//! Equations as a pair of expressions.

use std::fmt;
use std::str::FromStr;

use crate::error::{CasError, Result};
use crate::expression::Expression;
use crate::solver::{RootOptions, RootReport, roots};

#[derive(Clone, Debug, PartialEq)]
pub struct Equation {
    pub left: Expression,
    pub right: Expression,
}

impl Equation {
    pub fn new(left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Equation {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Moves everything to the left: `left - right = 0`.
    pub fn normalized(&self) -> Expression {
        self.left.sub(&self.right)
    }

    pub fn roots(&self, options: &RootOptions) -> Result<RootReport> {
        roots(&self.normalized(), options)
    }
}

impl FromStr for Equation {
    type Err = CasError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_equation(s)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}
