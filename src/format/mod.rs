//! Canonical text rendering for terms and expressions.

pub mod expr;

pub use expr::{pretty, pretty_term, superscript};
