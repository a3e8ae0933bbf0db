//! Integration tests for plural rule parsing.
//!
//! These tests cover every production of the condition grammar and the ways a
//! rule can be malformed.

use cldr_plural::parser::{
    Condition, Expr, Method, Operand, ParseError, Range, RangeList, Relation, parse_rule,
};

fn parse(input: &str) -> Condition {
    parse_rule(input)
        .unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
        .unwrap_or_else(|| panic!("{input:?} has no condition"))
}

fn relation(method: Method, expr: Expr, ranges: &[(u64, u64)]) -> Relation {
    Relation {
        method,
        expr,
        ranges: RangeList(ranges.iter().map(|&(l, h)| Range::new(l, h)).collect()),
    }
}

const N: Expr = Expr::Operand(Operand::N);

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn test_each_operand() {
    for operand in Operand::ALL {
        let rule = format!("{operand} is 0");
        assert_eq!(parse(&rule), Condition::Is(Expr::Operand(operand), 0));
    }
}

#[test]
fn test_mod_word_and_symbol_are_equivalent() {
    let expected = Condition::Is(Expr::Mod(Operand::I, 10), 1);
    assert_eq!(parse("i mod 10 is 1"), expected);
    assert_eq!(parse("i % 10 is 1"), expected);
}

// =============================================================================
// Relations
// =============================================================================

#[test]
fn test_is_and_is_not() {
    assert_eq!(parse("n is 1"), Condition::Is(N, 1));
    assert_eq!(parse("n is not 1"), Condition::IsNot(N, 1));
}

#[test]
fn test_range_list() {
    assert_eq!(
        parse("n in 3,5,7..15"),
        Condition::Relation(relation(Method::In, N, &[(3, 3), (5, 5), (7, 15)]))
    );
}

#[test]
fn test_range_list_is_not_normalized() {
    assert_eq!(
        parse("n in 5..7,1,1,6..9"),
        Condition::Relation(relation(
            Method::In,
            N,
            &[(5, 7), (1, 1), (1, 1), (6, 9)]
        ))
    );
}

#[test]
fn test_within() {
    assert_eq!(
        parse("n within 0..2"),
        Condition::Relation(relation(Method::Within, N, &[(0, 2)]))
    );
    assert_eq!(
        parse("n not within 0..2"),
        Condition::Not(relation(Method::Within, N, &[(0, 2)]))
    );
}

#[test]
fn test_not_in() {
    assert_eq!(
        parse("n not in 3,5"),
        Condition::Not(relation(Method::In, N, &[(3, 3), (5, 5)]))
    );
}

#[test]
fn test_equals_is_in() {
    assert_eq!(parse("n = 2..4"), parse("n in 2..4"));
}

#[test]
fn test_not_equals_is_not_in() {
    assert_eq!(parse("n != 2..4"), parse("n not in 2..4"));
    assert_eq!(
        parse("n % 100 != 11"),
        Condition::Not(relation(Method::In, Expr::Mod(Operand::N, 100), &[(11, 11)]))
    );
}

// =============================================================================
// Boolean structure
// =============================================================================

#[test]
fn test_and_binds_tighter_than_or() {
    let a = Condition::Is(Expr::Operand(Operand::V), 0);
    let b = Condition::Is(Expr::Operand(Operand::I), 1);
    let c = Condition::Is(Expr::Operand(Operand::F), 2);
    assert_eq!(
        parse("v is 0 and i is 1 or f is 2"),
        Condition::or(Condition::and(a.clone(), b.clone()), c.clone())
    );
    assert_eq!(
        parse("f is 2 or v is 0 and i is 1"),
        Condition::or(c, Condition::and(a, b))
    );
}

#[test]
fn test_and_is_left_associative() {
    let a = Condition::Is(N, 1);
    let b = Condition::Is(N, 2);
    let c = Condition::Is(N, 3);
    assert_eq!(
        parse("n is 1 and n is 2 and n is 3"),
        Condition::and(Condition::and(a, b), c)
    );
}

#[test]
fn test_or_is_left_associative() {
    let a = Condition::Is(N, 1);
    let b = Condition::Is(N, 2);
    let c = Condition::Is(N, 3);
    assert_eq!(
        parse("n is 1 or n is 2 or n is 3"),
        Condition::or(Condition::or(a, b), c)
    );
}

#[test]
fn test_compound_rule_ast() {
    assert_eq!(
        parse("n mod 10 is 1 and n mod 100 is not 11"),
        Condition::and(
            Condition::Is(Expr::Mod(Operand::N, 10), 1),
            Condition::IsNot(Expr::Mod(Operand::N, 100), 11),
        )
    );
}

// =============================================================================
// Samples and empty rules
// =============================================================================

#[test]
fn test_samples_do_not_change_ast() {
    assert_eq!(parse("n is 1 @integer 1, 21, 31"), parse("n is 1"));
}

#[test]
fn test_empty_rule_has_no_condition() {
    assert_eq!(parse_rule("@integer 0~5").unwrap(), None);
    assert_eq!(parse_rule("").unwrap(), None);
    assert_eq!(parse_rule("  \t ").unwrap(), None);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_negated_operator_is_rejected() {
    assert_eq!(
        parse_rule("n not = 3").unwrap_err(),
        ParseError::NegatedOperator {
            found: "=".to_string(),
            offset: 6,
        }
    );
    assert!(matches!(
        parse_rule("n not != 3"),
        Err(ParseError::NegatedOperator { .. })
    ));
    assert!(matches!(
        parse_rule("n not 3"),
        Err(ParseError::NegatedOperator { .. })
    ));
}

#[test]
fn test_dangling_not_reaches_end() {
    assert!(matches!(
        parse_rule("n not"),
        Err(ParseError::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_missing_operator() {
    let err = parse_rule("n 3").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "3"));
    assert!(matches!(parse_rule("n"), Err(ParseError::UnexpectedEnd { .. })));
}

#[test]
fn test_missing_operand() {
    let err = parse_rule("is 1").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: "an operand variable".to_string(),
            found: "is".to_string(),
            offset: 0,
        }
    );
    assert!(parse_rule("3 is 1").is_err());
}

#[test]
fn test_missing_value() {
    assert_eq!(
        parse_rule("n is").unwrap_err(),
        ParseError::UnexpectedEnd {
            expected: "a value".to_string()
        }
    );
    assert!(parse_rule("n in 1,").is_err());
    assert!(parse_rule("n in 1..").is_err());
    assert!(parse_rule("n mod is 1").is_err());
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(
        parse_rule("n is 1 2").unwrap_err(),
        ParseError::TrailingInput {
            found: "2".to_string(),
            offset: 7,
        }
    );
    assert!(matches!(
        parse_rule("n is 1 and"),
        Err(ParseError::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_value_out_of_range() {
    let err = parse_rule("n is 99999999999999999999").unwrap_err();
    assert!(matches!(err, ParseError::ValueOutOfRange { offset: 5, .. }));
}

#[test]
fn test_error_messages_name_the_problem() {
    let msg = parse_rule("n is x").unwrap_err().to_string();
    assert!(msg.contains("'x'"), "message: {msg}");

    let msg = parse_rule("n is 1 n").unwrap_err().to_string();
    assert!(msg.contains("end of rule"), "message: {msg}");

    let msg = parse_rule("n not = 1").unwrap_err().to_string();
    assert!(msg.contains("cannot negate"), "message: {msg}");
}
