//! Lexer for the Petiole surface language: converts UTF-8 source text into
//! a flat token stream with synthetic INDENT/DEDENT markers (spec §4.1).
//!
//! The lexer is single-pass and halts at the first fatal lexical error;
//! see [`LexError`] for the taxonomy. Downstream, [`petiole_parser`] never
//! re-invokes the lexer — all tokenization completes before parsing starts.

mod cursor;
mod error;
mod indent;
mod number;
mod span;
mod string_lit;
mod token;

pub use error::LexError;
pub use span::{Position, Span};
pub use token::{LiteralValue, Token, TokenKind};

use cursor::Cursor;
use indent::IndentStack;
use std::rc::Rc;
use unicode_normalization::UnicodeNormalization;

/// Scans `source` and returns its token stream, or the first fatal lexical
/// error encountered. Equivalent to `Lexer::new(source).lex()`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).lex()
}

pub struct Lexer {
    cursor: Cursor,
    file: Rc<str>,
    indent: IndentStack,
    bracket_depth: i32,
    tokens: Vec<Token>,
    at_line_start: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self::with_file(source, "<input>")
    }

    pub fn with_file(source: &str, file: impl Into<String>) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            file: Rc::from(file.into().into_boxed_str()),
            indent: IndentStack::new(),
            bracket_depth: 0,
            tokens: Vec::new(),
            at_line_start: true,
        }
    }

    /// Runs the lexer to completion, consuming it.
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            if self.at_line_start && self.bracket_depth == 0 {
                if self.handle_line_start()? {
                    break;
                }
            }

            self.skip_inline_whitespace();

            if self.cursor.is_at_end() {
                break;
            }

            if self.cursor.peek() == Some('\n') {
                self.cursor.bump();
                self.at_line_start = true;
                continue;
            }

            self.at_line_start = false;
            self.scan_one_token()?;
        }
        self.finish()
    }

    // ---- layout -----------------------------------------------------

    /// Processes zero or more blank/comment-only lines, then the leading
    /// whitespace of the next content-bearing line, emitting NEWLINE /
    /// INDENT / DEDENT as needed. Returns `true` if EOF was reached with
    /// no further content.
    fn handle_line_start(&mut self) -> Result<bool, LexError> {
        loop {
            let width = self.measure_indent()?;
            match self.cursor.peek() {
                None => return Ok(true),
                Some('\n') => {
                    self.cursor.bump();
                    continue;
                }
                Some('#') => {
                    let start = self.cursor.position();
                    self.scan_line_comment(start)?;
                    if self.cursor.peek() == Some('\n') {
                        self.cursor.bump();
                    }
                    continue;
                }
                Some(_) => {
                    self.apply_indent_transition(width)?;
                    self.at_line_start = false;
                    return Ok(false);
                }
            }
        }
    }

    fn measure_indent(&mut self) -> Result<usize, LexError> {
        let mut width = 0;
        loop {
            match self.cursor.peek() {
                Some(' ') => {
                    self.cursor.bump();
                    width += 1;
                }
                Some('\t') => {
                    let pos = self.cursor.position();
                    return Err(LexError::TabInIndentation {
                        span: Span::new(self.file.clone(), pos.clone(), pos),
                    });
                }
                _ => break,
            }
        }
        Ok(width)
    }

    fn apply_indent_transition(&mut self, width: usize) -> Result<(), LexError> {
        let top = self.indent.top();
        if width == top {
            if !self.tokens.is_empty() {
                self.push_newline();
            }
        } else if width > top {
            self.push_newline();
            self.indent.push(width);
            self.push_indent();
        } else {
            while self.indent.top() > width {
                self.indent.pop();
                self.push_dedent();
            }
            if self.indent.top() != width {
                let pos = self.cursor.position();
                return Err(LexError::InconsistentIndentation {
                    span: Span::new(self.file.clone(), pos.clone(), pos),
                    expected: self.indent.top(),
                    found: width,
                });
            }
            self.push_newline();
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Token>, LexError> {
        if self.bracket_depth != 0 {
            let pos = self.cursor.position();
            return Err(LexError::UnmatchedBracket {
                span: Span::new(self.file.clone(), pos.clone(), pos),
                count: self.bracket_depth,
            });
        }
        while !self.indent.is_base() {
            self.indent.pop();
            self.push_dedent();
        }
        self.push_eof();
        Ok(self.tokens)
    }

    // ---- token scanning ----------------------------------------------

    fn skip_inline_whitespace(&mut self) {
        while matches!(self.cursor.peek(), Some(' ') | Some('\t')) {
            self.cursor.bump();
        }
    }

    fn scan_one_token(&mut self) -> Result<(), LexError> {
        let start = self.cursor.position();
        let c = self.cursor.peek().expect("caller checked not at end");

        match c {
            '#' => self.scan_line_comment(start),
            '"' => {
                self.cursor.bump();
                let (lexeme, literal) = string_lit::scan_string(&mut self.cursor, &self.file, start.clone())?;
                self.push(TokenKind::String, lexeme, Some(literal), start);
                Ok(())
            }
            '`' => {
                self.cursor.bump();
                let (lexeme, literal) =
                    string_lit::scan_raw_string(&mut self.cursor, &self.file, start.clone())?;
                self.push(TokenKind::String, lexeme, Some(literal), start);
                Ok(())
            }
            '\'' => {
                self.cursor.bump();
                let (lexeme, literal) = string_lit::scan_rune(&mut self.cursor, &self.file, start.clone())?;
                self.push(TokenKind::Rune, lexeme, Some(literal), start);
                Ok(())
            }
            '0'..='9' => {
                let (kind, lexeme, literal) =
                    number::scan_number(&mut self.cursor, &self.file, start.clone())?;
                self.push(kind, lexeme, Some(literal), start);
                Ok(())
            }
            c if c == '_' || unicode_ident::is_xid_start(c) => self.scan_identifier(start),
            _ => self.scan_operator(start),
        }
    }

    fn scan_line_comment(&mut self, start: Position) -> Result<(), LexError> {
        self.cursor.bump(); // '#'
        let mut text = String::new();
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.cursor.bump();
        }
        self.push(TokenKind::Comment, text, None, start);
        Ok(())
    }

    fn scan_identifier(&mut self, start: Position) -> Result<(), LexError> {
        let mut word = String::new();
        while let Some(c) = self.cursor.peek() {
            if c == '_' || unicode_ident::is_xid_continue(c) {
                word.push(c);
                self.cursor.bump();
            } else {
                break;
            }
        }
        // NFC-normalize so visually identical identifiers typed with
        // different combining-character sequences compare equal.
        let word: String = word.nfc().collect();
        let kind = Token::keyword_kind(&word).unwrap_or(TokenKind::Identifier);
        let literal = match kind {
            TokenKind::True => Some(LiteralValue::Bool(true)),
            TokenKind::False => Some(LiteralValue::Bool(false)),
            _ => None,
        };
        self.push(kind, word, literal, start);
        Ok(())
    }

    fn scan_operator(&mut self, start: Position) -> Result<(), LexError> {
        let c = self.cursor.bump().expect("caller checked not at end");
        let (kind, lexeme): (TokenKind, &'static str) = match c {
            '|' if self.cursor.eat('>') => (TokenKind::Pipe, "|>"),
            '|' => (TokenKind::BitOr, "|"),
            '=' if self.cursor.eat('=') => (TokenKind::DoubleEquals, "=="),
            '=' if self.cursor.eat('>') => (TokenKind::FatArrow, "=>"),
            '=' => (TokenKind::Assign, "="),
            '!' if self.cursor.eat('=') => (TokenKind::NotEquals, "!="),
            '!' => (TokenKind::Bang, "!"),
            '<' if self.cursor.eat('=') => (TokenKind::Lte, "<="),
            '<' => (TokenKind::Lt, "<"),
            '>' if self.cursor.eat('=') => (TokenKind::Gte, ">="),
            '>' => (TokenKind::Gt, ">"),
            ':' if self.cursor.eat('=') => (TokenKind::Walrus, ":="),
            ':' => (TokenKind::Colon, ":"),
            '+' if self.cursor.eat('+') => (TokenKind::PlusPlus, "++"),
            '+' => (TokenKind::Plus, "+"),
            '-' if self.cursor.eat('-') => (TokenKind::MinusMinus, "--"),
            '-' => (TokenKind::Minus, "-"),
            '*' => (TokenKind::Star, "*"),
            '/' => (TokenKind::Slash, "/"),
            '%' => (TokenKind::Percent, "%"),
            '.' => (TokenKind::Dot, "."),
            ',' => (TokenKind::Comma, ","),
            ';' => (TokenKind::Semicolon, ";"),
            '(' => {
                self.bracket_depth += 1;
                (TokenKind::LParen, "(")
            }
            ')' => {
                if self.bracket_depth > 0 {
                    self.bracket_depth -= 1;
                }
                (TokenKind::RParen, ")")
            }
            '[' => {
                self.bracket_depth += 1;
                (TokenKind::LBracket, "[")
            }
            ']' => {
                if self.bracket_depth > 0 {
                    self.bracket_depth -= 1;
                }
                (TokenKind::RBracket, "]")
            }
            '{' => {
                self.bracket_depth += 1;
                (TokenKind::LBrace, "{")
            }
            '}' => {
                if self.bracket_depth > 0 {
                    self.bracket_depth -= 1;
                }
                (TokenKind::RBrace, "}")
            }
            other => {
                let end = self.cursor.position();
                return Err(LexError::UnrecognizedCharacter {
                    span: Span::new(self.file.clone(), start, end),
                    found: other,
                });
            }
        };
        self.push(kind, lexeme.to_string(), None, start);
        Ok(())
    }

    // ---- emission helpers ----------------------------------------------

    fn push(&mut self, kind: TokenKind, lexeme: String, literal: Option<LiteralValue>, start: Position) {
        let end = self.cursor.position();
        let span = Span::new(self.file.clone(), start, end);
        self.tokens.push(Token::new(kind, lexeme, literal, span));
    }

    fn push_newline(&mut self) {
        let pos = self.cursor.position();
        self.push(TokenKind::Newline, String::new(), None, pos);
    }

    fn push_indent(&mut self) {
        let pos = self.cursor.position();
        self.push(TokenKind::Indent, String::new(), None, pos);
    }

    fn push_dedent(&mut self) {
        let pos = self.cursor.position();
        self.push(TokenKind::Dedent, String::new(), None, pos);
    }

    fn push_eof(&mut self) {
        let pos = self.cursor.position();
        self.push(TokenKind::Eof, String::new(), None, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_emits_eof() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn minimal_function() {
        let src = "func Add(a int, b int) int\n    return a + b\n";
        let kinds: Vec<_> = lex(src).unwrap().into_iter().map(|t| t.kind).collect();
        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Func, Identifier, LParen, Identifier, Identifier, Comma, Identifier, Identifier,
                RParen, Identifier, Indent, Return, Identifier, Plus, Identifier, Dedent, Eof,
            ]
        );
    }
}
