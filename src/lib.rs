//! Symbolic polynomial algebra: parse polynomials written by hand, combine
//! them, differentiate them and approximate their roots.

pub mod arith;
pub mod calculus;
pub mod equation;
pub mod error;
pub mod expression;
pub mod format;
pub mod parser;
pub mod polynomial;
pub mod solver;
pub mod term;

pub use arith::IntoExpression;
pub use calculus::{derivative, differentiate, nth_derivative, tangent_line};
pub use equation::Equation;
pub use error::{CasError, Result};
pub use expression::Expression;
pub use format::{pretty, pretty_term};
pub use num_complex::Complex64;
pub use parser::{parse_equation, parse_expression, parse_term};
pub use polynomial::{CoeffOps, Poly, Polynomial};
pub use solver::{
    NewtonEstimate, NewtonStatus, Root, RootMethod, RootOptions, RootReport, Shell, common_factor,
    divide, roots, shell, solve_monomial, zero, zero_complex,
};
pub use term::{Powers, Term};
