//! Numeric literal scanning: decimal, hex (`0x`), octal (`0o`), binary
//! (`0b`), and floating point with optional exponent (spec §4.1).

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::span::{Position, Span};
use crate::token::{LiteralValue, TokenKind};
use std::rc::Rc;

fn is_digit(c: char, radix: u32) -> bool {
    c == '_' || c.is_digit(radix)
}

/// Scans a numeric literal starting at the cursor's current position (the
/// first digit has not yet been consumed). Returns the token kind, the raw
/// lexeme text (underscores retained, exactly as written), and the parsed
/// literal value.
pub fn scan_number(
    cursor: &mut Cursor,
    file: &Rc<str>,
    start: Position,
) -> Result<(TokenKind, String, LiteralValue), LexError> {
    let mut text = String::new();
    let mut radix = 10u32;
    let mut is_float = false;

    if cursor.peek() == Some('0') && matches!(cursor.peek2(), Some('x') | Some('X')) {
        text.push(cursor.bump().unwrap());
        text.push(cursor.bump().unwrap());
        radix = 16;
        consume_digits(cursor, &mut text, radix);
    } else if cursor.peek() == Some('0') && matches!(cursor.peek2(), Some('o') | Some('O')) {
        text.push(cursor.bump().unwrap());
        text.push(cursor.bump().unwrap());
        radix = 8;
        consume_digits(cursor, &mut text, radix);
    } else if cursor.peek() == Some('0') && matches!(cursor.peek2(), Some('b') | Some('B')) {
        text.push(cursor.bump().unwrap());
        text.push(cursor.bump().unwrap());
        radix = 2;
        consume_digits(cursor, &mut text, radix);
    } else {
        consume_digits(cursor, &mut text, 10);

        if cursor.peek() == Some('.') && cursor.peek2().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            text.push(cursor.bump().unwrap()); // '.'
            consume_digits(cursor, &mut text, 10);
        }

        if matches!(cursor.peek(), Some('e') | Some('E'))
            && cursor
                .peek2()
                .is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-')
        {
            is_float = true;
            text.push(cursor.bump().unwrap()); // e/E
            if matches!(cursor.peek(), Some('+') | Some('-')) {
                text.push(cursor.bump().unwrap());
            }
            consume_digits(cursor, &mut text, 10);
        }
    }

    let end = cursor.position();
    let span = Span::new(file.clone(), start, end);

    let cleaned: String = text.chars().filter(|c| *c != '_').collect();

    if is_float {
        match cleaned.parse::<f64>() {
            Ok(v) => Ok((TokenKind::Float, text, LiteralValue::Float(v))),
            Err(_) => Err(LexError::InvalidNumber { span, text }),
        }
    } else {
        let digits = match radix {
            16 => cleaned.strip_prefix("0x").or(cleaned.strip_prefix("0X")),
            8 => cleaned.strip_prefix("0o").or(cleaned.strip_prefix("0O")),
            2 => cleaned.strip_prefix("0b").or(cleaned.strip_prefix("0B")),
            _ => Some(cleaned.as_str()),
        };
        let digits = match digits {
            Some(d) if !d.is_empty() => d,
            _ => return Err(LexError::InvalidNumber { span, text }),
        };
        match i64::from_str_radix(digits, radix) {
            Ok(v) => Ok((TokenKind::Integer, text, LiteralValue::Integer(v))),
            Err(_) => Err(LexError::InvalidNumber { span, text }),
        }
    }
}

fn consume_digits(cursor: &mut Cursor, text: &mut String, radix: u32) {
    while let Some(c) = cursor.peek() {
        if is_digit(c, radix) {
            text.push(cursor.bump().unwrap());
        } else {
            break;
        }
    }
}
