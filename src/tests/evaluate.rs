use std::thread;

use crate::config::{Config, DEFAULT_MAX_DEPTH};
use crate::parser::{evaluate, ParseErrKind, Parser};
use crate::scanner::{ScanErrKind, Token};

use super::init_logger;

fn check_value(source: &str, expected: f64) {
    let result = evaluate(source);
    assert!(result.is_ok(), "{source:?} failed: {:?}", result.err());
    assert_eq!(result.unwrap(), expected, "{source:?}");
}

#[test]
fn evaluate_arithmetic() {
    init_logger();
    check_value("2+3*4", 14.0);
    check_value("10-2-3", 5.0);
    check_value("(2+3)*4", 20.0);
    check_value("10/2/5", 1.0);
    check_value("1.5 * 4 - 0.5", 5.5);
    check_value(" ( 1 + 2 ) * ( 3 + 4 ) / 7 ", 3.0);
}

#[test]
fn evaluate_whitespace_merges_numbers() {
    check_value("1 2 + 1", 13.0);
    check_value("1 . 5 * 2", 3.0);
}

#[test]
fn evaluate_division_by_zero() {
    check_value("5/0", f64::INFINITY);
    check_value("(0-5)/0", f64::NEG_INFINITY);
}

#[test]
fn evaluate_trailing_garbage_is_ignored() {
    check_value("2+3)", 5.0);
    check_value("2+3)))", 5.0);
    check_value("4 (5)", 4.0);
}

#[test]
fn evaluate_errors() {
    assert_eq!(evaluate("(1+2").unwrap_err().kind, ParseErrKind::MismatchedParentheses);
    assert_eq!(evaluate("1+").unwrap_err().kind, ParseErrKind::UnexpectedToken(Token::End));
    assert_eq!(
        evaluate("1+@").unwrap_err().kind,
        ParseErrKind::ScanErr(ScanErrKind::UnknownToken("@".to_owned()))
    );
}

#[test]
fn evaluate_deep_nesting_within_default_limit() {
    let depth = DEFAULT_MAX_DEPTH;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    check_value(&source, 1.0);
}

#[test]
fn evaluate_deep_nesting_beyond_default_limit() {
    let depth = DEFAULT_MAX_DEPTH + 1;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let err = evaluate(&source).unwrap_err();
    assert_eq!(err.kind, ParseErrKind::MaxDepthExceeded(DEFAULT_MAX_DEPTH));
}

#[test]
fn evaluate_with_debug_config() {
    init_logger();
    let mut parser = Parser::with_config("3*(4-1)", Config::default().debug(true)).unwrap();
    assert_eq!(parser.parse().unwrap(), 9.0);
}

#[test]
fn evaluate_on_independent_threads() {
    let sources = ["1+1", "2*3", "(4+4)/2", "9-3-3"];
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let mut parser = Parser::new(source).unwrap();
            thread::spawn(move || parser.parse())
        })
        .collect();
    let values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_eq!(values, vec![2.0, 6.0, 4.0, 3.0]);
}
