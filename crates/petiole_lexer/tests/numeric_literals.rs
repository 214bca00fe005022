//! Numeric literal scanning: decimal, hex, octal, binary, float/exponent,
//! underscore separators, and malformed numbers.

use petiole_lexer::{lex, LexError, LiteralValue, TokenKind};

fn literals(src: &str) -> Vec<LiteralValue> {
    lex(src)
        .unwrap()
        .into_iter()
        .filter_map(|t| t.literal)
        .collect()
}

#[test]
fn decimal_integer() {
    assert_eq!(literals("42\n"), vec![LiteralValue::Integer(42)]);
}

#[test]
fn hex_octal_binary_bases() {
    let vals = literals("0x1F\n0o17\n0b101\n");
    assert_eq!(
        vals,
        vec![
            LiteralValue::Integer(31),
            LiteralValue::Integer(15),
            LiteralValue::Integer(5),
        ]
    );
}

#[test]
fn float_with_fraction_and_exponent() {
    let vals = literals("3.14\n2e10\n1.5e-3\n");
    assert_eq!(
        vals,
        vec![
            LiteralValue::Float(3.14),
            LiteralValue::Float(2e10),
            LiteralValue::Float(1.5e-3),
        ]
    );
}

#[test]
fn underscore_separators_are_ignored_in_the_parsed_value() {
    assert_eq!(literals("1_000_000\n"), vec![LiteralValue::Integer(1_000_000)]);
}

#[test]
fn underscore_separators_are_retained_verbatim_in_the_lexeme() {
    let tokens = lex("1_000\n").unwrap();
    assert_eq!(tokens[0].lexeme, "1_000");
}

#[test]
fn dot_not_followed_by_a_digit_is_not_part_of_the_number() {
    let kinds: Vec<_> = lex("1.method()\n")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn empty_hex_digits_after_prefix_is_a_fatal_number_error() {
    assert!(matches!(lex("0x\n"), Err(LexError::InvalidNumber { .. })));
}
