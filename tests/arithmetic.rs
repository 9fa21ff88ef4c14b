use polycas::{CasError, Expression, Term, parse_expression, parse_term};

fn term(input: &str) -> Term {
    parse_term(input).expect("parse term")
}

fn expr(input: &str) -> Expression {
    parse_expression(input).expect("parse expression")
}

#[test]
fn term_product_cancels_to_constant() {
    let product = term("x") * term("x^-1");
    assert!(product.is_constant());
    assert!(product.is_one());
    assert_eq!(product.coefficient(), 1.0);
}

#[test]
fn term_product_and_quotient() {
    let p = term("14x^2");
    let q = term("7x");
    assert_eq!(&p * &q, term("98x^3"));
    assert_eq!(p.checked_div(&q).expect("divide"), term("2x"));
    assert_eq!(q.checked_div(&p).expect("divide"), term("0.5x^-1"));
    assert_eq!(term("6xy").checked_div(&term("3y")).expect("divide"), term("2x"));
    assert_eq!(
        p.checked_div(&Term::constant(0.0)),
        Err(CasError::NotDivisible {
            dividend: 14.0,
            divisor: 0.0
        })
    );
}

#[test]
fn term_sums() {
    assert_eq!(term("3x") + term("4x"), expr("7x"));
    assert_eq!((term("3x") + term("4x")).as_term(), Some(&term("7x")));
    assert_eq!(term("3x") - term("3x"), Expression::zero());
    assert_eq!((term("14x^2") + term("7x")).len(), 2);
    assert_eq!(term("14x^2") - term("7x"), expr("14x^2 - 7x"));
    assert_eq!(term("2y").combine(&term("5y")), Some(term("7y")));
    assert_eq!(term("2y").combine(&term("5y^2")), None);
}

#[test]
fn operands_are_left_untouched() {
    let a = expr("x + 1");
    let b = expr("x - 1");
    let product = &a * &b;
    assert_eq!(product, expr("x^2 - 1"));
    assert_eq!(a, expr("x + 1"));
    assert_eq!(b, expr("x - 1"));
}

#[test]
fn distributive_product() {
    assert_eq!(expr("x + y").pow(2).expect("pow"), expr("x^2 + 2xy + y^2"));
    assert_eq!(expr("x - 1").pow(3).expect("pow"), expr("x^3 - 3x^2 + 3x - 1"));
    assert_eq!(expr("x + 2").pow(0).expect("pow"), expr("1"));
    assert_eq!(term("3x") * expr("x - 2"), expr("3x^2 - 6x"));
    assert_eq!(expr("x^2 - 5x - 2") * Expression::zero(), Expression::zero());
}

#[test]
fn numbers_and_text_are_coerced() {
    let base = expr("x^2 - 5x - 2");
    assert_eq!(base.try_add("5x").expect("add text"), expr("x^2 - 2"));
    assert_eq!(base.try_sub(3).expect("sub integer"), expr("x^2 - 5x - 5"));
    assert_eq!(base.try_mul(2.0).expect("mul float"), expr("2x^2 - 10x - 4"));
    assert_eq!(base.try_add(term("x")).expect("add term"), expr("x^2 - 4x - 2"));
    assert_eq!(base.try_div("x").expect("div text"), expr("x - 5 - 2x^-1"));
    assert!(matches!(base.try_add("x^"), Err(CasError::Parse(_))));

    assert_eq!(base.clone() + 5, expr("x^2 - 5x + 3"));
    assert_eq!(base.clone() - 2.5, expr("x^2 - 5x - 4.5"));
    assert_eq!(-base, expr("-x^2 + 5x + 2"));
}

#[test]
fn termwise_division() {
    assert_eq!(
        expr("4x^2 + 2x").checked_div(&expr("2x")).expect("divide"),
        expr("2x + 1")
    );
    assert!(matches!(
        expr("x^2 - 1").checked_div(&expr("x - 1")),
        Err(CasError::Unsupported(_))
    ));
    assert!(matches!(
        expr("x").checked_div(&Expression::zero()),
        Err(CasError::NotDivisible { .. })
    ));
}

#[test]
fn euclidean_division() {
    let (q, r) = expr("x^3 - 1").div_rem(&expr("x - 1")).expect("divide");
    assert_eq!(q, expr("x^2 + x + 1"));
    assert!(r.is_zero());

    let (q, r) = expr("x^3 + x + 1").div_rem(&expr("x^2 + 1")).expect("divide");
    assert_eq!(q, expr("x"));
    assert_eq!(r, expr("1"));

    let (q, r) = expr("x^2 - 5x - 2").div_rem(&expr("x - 1")).expect("divide");
    assert_eq!(q, expr("x - 4"));
    assert_eq!(r, expr("-6"));

    let (q, r) = expr("6").div_rem(&expr("3")).expect("divide");
    assert_eq!(q, expr("2"));
    assert!(r.is_zero());

    assert!(matches!(
        expr("x^2").div_rem(&expr("y")),
        Err(CasError::AmbiguousVariable(_))
    ));
}

#[test]
fn euclidean_division_with_cancelling_operands() {
    let a = expr("x^2 + 1");
    let b = expr("-x^2 + 2");
    let (q, r) = a.div_rem(&b).expect("divide");
    assert_eq!(q, expr("-1"));
    assert_eq!(r, expr("3"));
    assert_eq!(q * b + r, a);

    let (q, r) = expr("x + 3").div_rem(&expr("-x")).expect("divide");
    assert_eq!(q, expr("-1"));
    assert_eq!(r, expr("3"));
}

#[test]
fn exponent_overflow_is_reported() {
    let big = term("x^2147483647");
    assert_eq!(
        big.checked_mul(&term("x")),
        Err(CasError::ExponentOverflow("x".to_string()))
    );
    assert_eq!(
        term("x").checked_div(&term("x^-2147483648")),
        Err(CasError::ExponentOverflow("x".to_string()))
    );
    assert_eq!(
        term("x^-2147483647").checked_div(&term("x^2")),
        Err(CasError::ExponentOverflow("x".to_string()))
    );
    assert!(matches!(
        expr("x^2147483647 + 1").try_mul("x"),
        Err(CasError::ExponentOverflow(_))
    ));
    assert!(matches!(
        expr("x^1073741824").pow(2),
        Err(CasError::ExponentOverflow(_))
    ));
}

#[test]
#[should_panic(expected = "exponent of x overflows")]
fn product_operator_panics_on_exponent_overflow() {
    let _ = expr("x^2147483647") * expr("x");
}

#[test]
fn substitution_and_evaluation() {
    let e = expr("x^2y + 3");
    assert_eq!(e.substitute("y", 2.0), expr("2x^2 + 3"));
    assert_eq!(e.substitute("z", 2.0), e);
    assert_eq!(e.evaluate(&[("x", 1.0), ("y", 2.0)]).expect("evaluate"), 5.0);
    assert_eq!(
        e.evaluate(&[("x", 1.0)]),
        Err(CasError::UnboundVariable("y".to_string()))
    );
    assert!(matches!(e.at(1.0), Err(CasError::AmbiguousVariable(_))));

    let p = expr("x^2 - 5x - 2");
    assert_eq!(p.at(1.0).expect("at"), -6.0);
    assert_eq!(p.at(0.0).expect("at"), -2.0);
    assert_eq!(expr("4").at(10.0).expect("at"), 4.0);
    assert_eq!(expr("2x^-1").at(4.0).expect("at"), 0.5);
}
