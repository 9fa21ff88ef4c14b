use crate::expression::Expression;
use crate::term::Term;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Renders an expression as a signed sum, e.g. `x² - 5x - 2`. The zero
/// polynomial renders as `0`.
pub fn pretty(expr: &Expression) -> String {
    let mut terms = expr.terms().iter();
    let Some(first) = terms.next() else {
        return "0".to_string();
    };
    let mut out = pretty_term(first);
    for term in terms {
        if term.coefficient() < 0.0 {
            out.push_str(" - ");
            out.push_str(&pretty_term(&term.negate()));
        } else {
            out.push_str(" + ");
            out.push_str(&pretty_term(term));
        }
    }
    out
}

/// Renders a term as coefficient followed by variables with superscript
/// exponents; unit coefficients and exponents are left implicit.
pub fn pretty_term(term: &Term) -> String {
    let body: String = term
        .powers()
        .iter()
        .map(|(name, exp)| match exp {
            1 => name.clone(),
            _ => format!("{name}{}", superscript(*exp)),
        })
        .collect();
    if body.is_empty() {
        return show_coefficient(term.coefficient());
    }
    match term.coefficient() {
        c if c == 1.0 => body,
        c if c == -1.0 => format!("-{body}"),
        c => format!("{}{body}", show_coefficient(c)),
    }
}

pub fn superscript(exp: i32) -> String {
    let text = exp.unsigned_abs().to_string();
    let digits = text
        .chars()
        .filter_map(|d| d.to_digit(10).map(|v| SUPERSCRIPT_DIGITS[v as usize]));
    if exp < 0 {
        std::iter::once('⁻').chain(digits).collect()
    } else {
        digits.collect()
    }
}

fn show_coefficient(c: f64) -> String {
    // `-0` would not survive a round trip through the parser.
    format!("{}", c + 0.0)
}
