//! Calculus routines (differentiation and tangent lines).

pub mod differentiate;
pub mod tangent;

pub use differentiate::{derivative, differentiate, differentiate_term, nth_derivative};
pub use tangent::tangent_line;
