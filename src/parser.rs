use crate::equation::Equation;
use crate::error::{CasError, Result};
use crate::expression::Expression;
use crate::term::Term;
use nom::branch::alt;
use nom::character::complete::{anychar, char, digit0, digit1, one_of, satisfy};
use nom::combinator::{all_consuming, map, map_opt, map_res, opt, recognize, verify};
use nom::error::{VerboseError, context, convert_error};
use nom::multi::{fold_many0, many0, many1};
use nom::sequence::{pair, preceded, separated_pair};
use nom::{Finish, IResult};
use tracing::trace;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Coefficient and `(variable, exponent)` atoms of one unsigned term.
type TermParts = (Option<f64>, Vec<(String, i32)>);

pub fn parse_term(input: &str) -> Result<Term> {
    run(input, signed_term)
}

pub fn parse_expression(input: &str) -> Result<Expression> {
    let expr = run(input, expression)?;
    trace!(input, terms = expr.len(), "parsed expression");
    Ok(expr)
}

pub fn parse_equation(input: &str) -> Result<Equation> {
    run(input, equation)
}

/// Whitespace carries no meaning in the grammar, so it is dropped before parsing.
fn run<O>(input: &str, parser: impl FnMut(&str) -> ParseResult<'_, O>) -> Result<O> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(CasError::Parse(format!("empty input {input:?}")));
    }
    let parsed = all_consuming(parser)(cleaned.as_str())
        .finish()
        .map(|(_, value)| value)
        .map_err(|e| CasError::Parse(convert_error(cleaned.as_str(), e)));
    parsed
}

fn equation(input: &str) -> ParseResult<'_, Equation> {
    map(
        separated_pair(expression, char('='), expression),
        |(left, right)| Equation::new(left, right),
    )(input)
}

/// Only the first term may carry its own sign; later terms take the sign of
/// the operator in front of them, so `x--2` is rejected.
fn expression(input: &str) -> ParseResult<'_, Expression> {
    let (rest, first) = signed_term(input)?;
    let (rest, terms) = fold_many0(
        pair(one_of("+-"), term),
        move || vec![first.clone()],
        |mut acc: Vec<Term>, (op, rhs): (char, Term)| {
            acc.push(if op == '-' { rhs.negate() } else { rhs });
            acc
        },
    )(rest)?;
    Ok((rest, Expression::new(terms)))
}

fn signed_term(input: &str) -> ParseResult<'_, Term> {
    map(
        pair(opt(one_of("+-")), term),
        |(sign, term): (Option<char>, Term)| {
            if sign == Some('-') { term.negate() } else { term }
        },
    )(input)
}

fn term(input: &str) -> ParseResult<'_, Term> {
    let parts = verify(
        pair(opt(coefficient), many0(atom)),
        |(coeff, atoms): &TermParts| coeff.is_some() || !atoms.is_empty(),
    );
    context(
        "term",
        map_res(parts, |(coeff, atoms): TermParts| {
            Term::new(coeff.unwrap_or(1.0), atoms)
        }),
    )(input)
}

fn coefficient(input: &str) -> ParseResult<'_, f64> {
    context(
        "coefficient",
        verify(
            map_res(
                recognize(alt((
                    recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                    recognize(pair(char('.'), digit1)),
                ))),
                |s: &str| s.parse::<f64>(),
            ),
            |c: &f64| c.is_finite(),
        ),
    )(input)
}

fn atom(input: &str) -> ParseResult<'_, (String, i32)> {
    pair(
        map(satisfy(char::is_alphabetic), |c: char| c.to_string()),
        map(opt(exponent), |exp: Option<i32>| exp.unwrap_or(1)),
    )(input)
}

fn exponent(input: &str) -> ParseResult<'_, i32> {
    context("exponent", alt((caret_exponent, superscript_exponent)))(input)
}

fn caret_exponent(input: &str) -> ParseResult<'_, i32> {
    preceded(
        char('^'),
        map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
            s.parse::<i32>()
        }),
    )(input)
}

fn superscript_exponent(input: &str) -> ParseResult<'_, i32> {
    map_res(
        pair(
            opt(char('\u{207B}')),
            many1(map_opt(anychar, superscript_digit)),
        ),
        |(minus, digits): (Option<char>, Vec<char>)| {
            let mut text: String = digits.into_iter().collect();
            if minus.is_some() {
                text.insert(0, '-');
            }
            text.parse::<i32>()
        },
    )(input)
}

/// Maps a unicode superscript digit to its ASCII counterpart.
fn superscript_digit(c: char) -> Option<char> {
    match c {
        '\u{2070}' => Some('0'),
        '\u{00B9}' => Some('1'),
        '\u{00B2}' => Some('2'),
        '\u{00B3}' => Some('3'),
        '\u{2074}'..='\u{2079}' => char::from_digit(c as u32 - 0x2070, 10),
        _ => None,
    }
}
