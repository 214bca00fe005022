//! String, raw-string, and rune literal scanning (spec §4.1).

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::span::{Position, Span};
use crate::token::LiteralValue;
use std::rc::Rc;

/// Scans a double-quoted string. The opening quote has already been
/// consumed by the caller. Escapes are resolved except for `{expr}`
/// interpolation markers, which are copied verbatim and flagged.
pub fn scan_string(
    cursor: &mut Cursor,
    file: &Rc<str>,
    start: Position,
) -> Result<(String, LiteralValue), LexError> {
    let mut value = String::new();
    let mut interpolated = false;

    loop {
        match cursor.peek() {
            None | Some('\n') => {
                let end = cursor.position();
                return Err(LexError::UnterminatedString {
                    span: Span::new(file.clone(), start, end),
                });
            }
            Some('"') => {
                cursor.bump();
                break;
            }
            Some('\\') => {
                let esc_start = cursor.position();
                cursor.bump();
                value.push(resolve_escape(cursor, file, esc_start)?);
            }
            Some('{') => {
                interpolated = true;
                value.push(cursor.bump().unwrap());
                let mut depth = 1;
                while depth > 0 {
                    match cursor.peek() {
                        None => {
                            let end = cursor.position();
                            return Err(LexError::UnterminatedString {
                                span: Span::new(file.clone(), start, end),
                            });
                        }
                        Some('{') => {
                            depth += 1;
                            value.push(cursor.bump().unwrap());
                        }
                        Some('}') => {
                            depth -= 1;
                            value.push(cursor.bump().unwrap());
                        }
                        Some(c) => {
                            value.push(c);
                            cursor.bump();
                        }
                    }
                }
            }
            Some(c) => {
                value.push(c);
                cursor.bump();
            }
        }
    }

    Ok((
        value.clone(),
        LiteralValue::Str { value, interpolated },
    ))
}

/// Scans a backtick-delimited raw string. No escape processing at all.
pub fn scan_raw_string(
    cursor: &mut Cursor,
    file: &Rc<str>,
    start: Position,
) -> Result<(String, LiteralValue), LexError> {
    let mut value = String::new();
    loop {
        match cursor.peek() {
            None => {
                let end = cursor.position();
                return Err(LexError::UnterminatedRawString {
                    span: Span::new(file.clone(), start, end),
                });
            }
            Some('`') => {
                cursor.bump();
                break;
            }
            Some(c) => {
                value.push(c);
                cursor.bump();
            }
        }
    }
    Ok((
        value.clone(),
        LiteralValue::Str {
            value,
            interpolated: false,
        },
    ))
}

/// Scans a single-quoted rune literal: exactly one code point after escape
/// resolution.
pub fn scan_rune(
    cursor: &mut Cursor,
    file: &Rc<str>,
    start: Position,
) -> Result<(String, LiteralValue), LexError> {
    let mut codepoints: Vec<char> = Vec::new();
    loop {
        match cursor.peek() {
            None | Some('\n') => {
                let end = cursor.position();
                return Err(LexError::UnterminatedRune {
                    span: Span::new(file.clone(), start, end),
                });
            }
            Some('\'') => {
                cursor.bump();
                break;
            }
            Some('\\') => {
                let esc_start = cursor.position();
                cursor.bump();
                codepoints.push(resolve_escape(cursor, file, esc_start)?);
            }
            Some(c) => {
                codepoints.push(c);
                cursor.bump();
            }
        }
    }

    if codepoints.len() != 1 {
        let end = cursor.position();
        return Err(LexError::InvalidRune {
            span: Span::new(file.clone(), start, end),
            found: codepoints.len(),
        });
    }

    let ch = codepoints[0];
    Ok((ch.to_string(), LiteralValue::Rune(ch)))
}

/// Resolves one escape sequence. `\` has already been consumed; `esc_start`
/// is the position of that backslash (for diagnostics).
fn resolve_escape(
    cursor: &mut Cursor,
    file: &Rc<str>,
    esc_start: Position,
) -> Result<char, LexError> {
    let Some(c) = cursor.peek() else {
        let end = cursor.position();
        return Err(LexError::InvalidEscape {
            span: Span::new(file.clone(), esc_start, end),
            escape: '\0',
        });
    };

    let resolved = match c {
        'n' => {
            cursor.bump();
            '\n'
        }
        't' => {
            cursor.bump();
            '\t'
        }
        'r' => {
            cursor.bump();
            '\r'
        }
        '\\' => {
            cursor.bump();
            '\\'
        }
        '"' => {
            cursor.bump();
            '"'
        }
        '\'' => {
            cursor.bump();
            '\''
        }
        'x' => {
            cursor.bump();
            read_hex_escape(cursor, file, &esc_start, 2)?
        }
        'u' => {
            cursor.bump();
            read_hex_escape(cursor, file, &esc_start, 4)?
        }
        other => {
            let end = cursor.position();
            return Err(LexError::InvalidEscape {
                span: Span::new(file.clone(), esc_start, end),
                escape: other,
            });
        }
    };
    Ok(resolved)
}

fn read_hex_escape(
    cursor: &mut Cursor,
    file: &Rc<str>,
    esc_start: &Position,
    digits: usize,
) -> Result<char, LexError> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        match cursor.peek().and_then(|c| c.to_digit(16)) {
            Some(d) => {
                value = value * 16 + d;
                cursor.bump();
            }
            None => {
                let end = cursor.position();
                return Err(LexError::InvalidEscape {
                    span: Span::new(file.clone(), esc_start.clone(), end),
                    escape: if digits == 2 { 'x' } else { 'u' },
                });
            }
        }
    }
    char::from_u32(value).ok_or_else(|| LexError::InvalidEscape {
        span: Span::new(file.clone(), esc_start.clone(), cursor.position()),
        escape: if digits == 2 { 'x' } else { 'u' },
    })
}
