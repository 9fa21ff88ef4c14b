use polycas::{CasError, Equation, Expression, Term, parse_equation, parse_expression, parse_term};

fn term(input: &str) -> Term {
    parse_term(input).expect("parse term")
}

fn expr(input: &str) -> Expression {
    parse_expression(input).expect("parse expression")
}

fn exponents(t: &Term) -> Vec<(&str, i32)> {
    t.powers().iter().map(|(name, exp)| (name.as_str(), *exp)).collect()
}

#[test]
fn caret_exponent_term() {
    let t = term("14x^2");
    assert_eq!(t.coefficient(), 14.0);
    assert_eq!(exponents(&t), vec![("x", 2)]);
    assert_eq!(t.to_string(), "14x²");
}

#[test]
fn superscript_exponents() {
    assert_eq!(exponents(&term("x²")), vec![("x", 2)]);
    assert_eq!(exponents(&term("3y¹⁰")), vec![("y", 10)]);
    assert_eq!(exponents(&term("x⁻¹")), vec![("x", -1)]);
    assert_eq!(exponents(&term("x^-3")), vec![("x", -3)]);
    assert_eq!(exponents(&term("x⁰")), vec![]);
}

#[test]
fn coefficient_forms() {
    let cases = vec![
        ("x", 1.0),
        ("-x", -1.0),
        ("+x", 1.0),
        ("7", 7.0),
        ("-7", -7.0),
        ("2.5y", 2.5),
        (".5y", 0.5),
        ("3.", 3.0),
        ("-0.25x^2", -0.25),
    ];
    for (input, expected) in cases {
        assert_eq!(term(input).coefficient(), expected, "coefficient of {input}");
    }
}

#[test]
fn variables_are_case_insensitive_and_accumulate() {
    assert_eq!(exponents(&term("X^3")), vec![("x", 3)]);
    assert_eq!(exponents(&term("2xyx")), vec![("x", 2), ("y", 1)]);
    assert_eq!(exponents(&term("x^2X^-2")), vec![]);
    assert_eq!(exponents(&term("ab²c³")), vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn out_of_range_numbers_are_rejected() {
    let huge = format!("{}x", "9".repeat(400));
    assert!(matches!(parse_expression(&huge), Err(CasError::Parse(_))));
    assert!(matches!(parse_term(&huge), Err(CasError::Parse(_))));
    assert!(matches!(parse_term("x^2147483648"), Err(CasError::Parse(_))));
    assert!(matches!(parse_term("x^2147483647x"), Err(CasError::Parse(_))));
    assert!(matches!(parse_term("x^-2147483648x^-1"), Err(CasError::Parse(_))));
    assert_eq!(exponents(&term("x^2147483647")), vec![("x", i32::MAX)]);
}

#[test]
fn only_the_first_term_carries_its_own_sign() {
    for input in ["x--2", "x+-2", "5 - -3", "x - +1"] {
        assert!(
            matches!(parse_expression(input), Err(CasError::Parse(_))),
            "expression {input:?} should not parse"
        );
    }
    assert_eq!(expr("-x - 2").leading_coefficient(), -1.0);
    assert_eq!(expr("+x + 2"), expr("x + 2"));
    let eq = parse_equation("x = -4").expect("parse equation");
    assert_eq!(eq.right, expr("-4"));
}

#[test]
fn variables_are_single_letters() {
    assert_eq!(
        Term::new(1.0, [("xy", 1)]),
        Err(CasError::InvalidVariable("xy".to_string()))
    );
    assert_eq!(
        Term::new(1.0, [("", 1)]),
        Err(CasError::InvalidVariable(String::new()))
    );
    assert_eq!(
        Term::new(1.0, [("2", 1)]),
        Err(CasError::InvalidVariable("2".to_string()))
    );
    let t = Term::new(3.0, [("X", 2), ("y", 1)]).expect("term");
    assert_eq!(t.to_string(), "3x²y");
    assert_eq!(term(&t.to_string()), t);
    assert_eq!(Term::var('Z').to_string(), "z");
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(term("  3 x ^ 2 "), term("3x^2"));
    assert_eq!(expr("x^2-5x-2"), expr(" x ^ 2  -  5 x - 2 "));
}

#[test]
fn malformed_input_is_rejected() {
    for input in ["", "   ", "x^", "2$", "x^a", "..", "x⁻", "+", "x +", "x^2.5", "3 = 4"] {
        assert!(
            matches!(parse_term(input), Err(CasError::Parse(_))),
            "term {input:?} should not parse"
        );
    }
    for input in ["x +", "- ", "x + + ", "x^ + 1", "2x = 3"] {
        assert!(
            matches!(parse_expression(input), Err(CasError::Parse(_))),
            "expression {input:?} should not parse"
        );
    }
}

#[test]
fn expression_splits_on_top_level_signs() {
    let e = expr("x^2 - 5x - 2");
    assert_eq!(e.len(), 3);
    assert_eq!(e.degree().expect("degree"), 2);
    assert_eq!(e.leading_coefficient(), 1.0);

    let e = expr("x^-1 + 2");
    assert_eq!(e.len(), 2);
    assert_eq!(e.terms()[0], Term::constant(2.0));
    assert_eq!(e.terms()[1], Term::monomial(1.0, 'x', -1));

    assert_eq!(expr("-x + 3"), Expression::new([Term::var('x').negate(), Term::constant(3.0)]));
}

#[test]
fn canonical_text_is_idempotent() {
    let inputs = [
        "x^2 - 5x - 2",
        "2xy^2 + 3.5y - x⁻¹",
        "-x + 1",
        "y + x",
        "4 - 4",
        "0.125z^3 - z",
    ];
    for input in inputs {
        let once = expr(input).to_string();
        let twice = expr(&once).to_string();
        assert_eq!(once, twice, "canonical text of {input}");
    }
    assert_eq!(expr("2xy^2 + 3.5y - x⁻¹").to_string(), "2xy² + 3.5y - x⁻¹");
}

#[test]
fn equation_parsing() {
    let eq: Equation = "x^2 = 4".parse().expect("parse equation");
    assert_eq!(eq.left, expr("x^2"));
    assert_eq!(eq.right, expr("4"));
    assert_eq!(eq.to_string(), "x² = 4");
    assert_eq!(eq.normalized(), expr("x^2 - 4"));

    assert!(matches!(parse_equation("x = y = z"), Err(CasError::Parse(_))));
    assert!(matches!(parse_equation("x^2 + 1"), Err(CasError::Parse(_))));
}

#[test]
fn from_str_matches_parser_functions() {
    let t: Term = "14x^2".parse().expect("term");
    assert_eq!(t, term("14x^2"));
    let e: Expression = "x - 1".parse().expect("expression");
    assert_eq!(e, expr("x - 1"));
}
