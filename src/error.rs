use thiserror::Error;

pub type Result<T> = std::result::Result<T, CasError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CasError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("coefficient {dividend} is not divisible by {divisor}")]
    NotDivisible { dividend: f64, divisor: f64 },
    #[error("ambiguous variable: {0} has more than one variable, name the one to use")]
    AmbiguousVariable(String),
    #[error("invalid variable name {0:?}: variables are single letters")]
    InvalidVariable(String),
    #[error("exponent of {0} overflows")]
    ExponentOverflow(String),
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
