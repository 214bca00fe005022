//! Fatal lexical errors. The lexer halts at the first one (spec §4.1, §4.3).

use crate::span::Span;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("unterminated raw string literal")]
    UnterminatedRawString { span: Span },

    #[error("unterminated character literal")]
    UnterminatedRune { span: Span },

    #[error("character literal must contain exactly one code point, found {found}")]
    InvalidRune { span: Span, found: usize },

    #[error("invalid escape sequence '\\{escape}'")]
    InvalidEscape { span: Span, escape: char },

    #[error("invalid numeric literal '{text}'")]
    InvalidNumber { span: Span, text: String },

    #[error("tab characters are not allowed in leading whitespace")]
    TabInIndentation { span: Span },

    #[error("inconsistent indentation: expected a dedent to width {expected}, found {found}")]
    InconsistentIndentation {
        span: Span,
        expected: usize,
        found: usize,
    },

    #[error("unmatched bracket: {count} bracket(s) still open at end of file")]
    UnmatchedBracket { span: Span, count: i32 },

    #[error("unrecognized character '{found}'")]
    UnrecognizedCharacter { span: Span, found: char },
}

impl LexError {
    pub fn span(&self) -> &Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnterminatedRawString { span }
            | LexError::UnterminatedRune { span }
            | LexError::InvalidRune { span, .. }
            | LexError::InvalidEscape { span, .. }
            | LexError::InvalidNumber { span, .. }
            | LexError::TabInIndentation { span }
            | LexError::InconsistentIndentation { span, .. }
            | LexError::UnmatchedBracket { span, .. }
            | LexError::UnrecognizedCharacter { span, .. } => span,
        }
    }

    /// `(file, line, column, message)` as specified by §6.3.
    pub fn as_record(&self) -> (String, usize, usize, String) {
        let span = self.span();
        (
            span.file.to_string(),
            span.start.line,
            span.start.column,
            self.to_string(),
        )
    }
}
