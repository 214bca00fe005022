//! Token stream interface consumed by the parser.
//!
//! All peek/check operations transparently skip COMMENT and SEMICOLON
//! tokens; `consume` advances past exactly one significant token. A
//! separate raw accessor exposes the underlying stream without that
//! skipping, for the handful of constructs that must see a literal
//! SEMICOLON or NEWLINE where it occurs (if-init detection, for-loop
//! variant detection).

use petiole_lexer::{Token, TokenKind};

/// Trait for token streams that can be consumed by the parser.
pub trait TokenStream {
    /// Peek at the current significant token without consuming it.
    fn peek(&self) -> &Token;

    /// Peek at the `offset`-th significant token ahead of the current one.
    fn peek_ahead(&self, offset: usize) -> Option<&Token>;

    /// Peek at the raw token `offset` slots ahead of the raw cursor,
    /// without skipping COMMENT/SEMICOLON.
    fn peek_raw(&self, offset: usize) -> Option<&Token>;

    /// Consume and return the current significant token.
    fn consume(&mut self) -> Token;

    fn is_at_end(&self) -> bool;

    /// Raw cursor index, valid as an argument to `seek` on the same stream.
    fn position(&self) -> usize;

    /// Restore the raw cursor to a previously observed position. Used for
    /// the three bounded-backtracking call sites named in the grammar:
    /// arrow-lambda lookahead, for-loop variant detection, if-init
    /// detection.
    fn seek(&mut self, position: usize);
}

fn is_insignificant(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Comment | TokenKind::Semicolon)
}

/// A vector-backed token stream over a fully lexed token list.
#[derive(Debug, Clone)]
pub struct VecTokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl VecTokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut stream = VecTokenStream { tokens, cursor: 0 };
        if stream.tokens.is_empty() || !stream.tokens.last().unwrap().is_eof() {
            stream.tokens.push(eof_token());
        }
        stream
    }

    /// Index of the next significant token at or after `from`.
    fn next_significant(&self, from: usize) -> usize {
        let mut idx = from;
        while idx < self.tokens.len() - 1 && is_insignificant(&self.tokens[idx]) {
            idx += 1;
        }
        idx
    }
}

fn eof_token() -> Token {
    Token::new(
        TokenKind::Eof,
        String::new(),
        None,
        petiole_lexer::Span::dummy(),
    )
}

impl TokenStream for VecTokenStream {
    fn peek(&self) -> &Token {
        let idx = self.next_significant(self.cursor);
        &self.tokens[idx]
    }

    fn peek_ahead(&self, offset: usize) -> Option<&Token> {
        let mut idx = self.next_significant(self.cursor);
        for _ in 0..offset {
            if idx >= self.tokens.len() - 1 {
                return self.tokens.last();
            }
            idx = self.next_significant(idx + 1);
        }
        self.tokens.get(idx)
    }

    fn peek_raw(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.cursor + offset)
    }

    fn consume(&mut self) -> Token {
        self.cursor = self.next_significant(self.cursor);
        let token = self.tokens[self.cursor].clone();
        if self.cursor < self.tokens.len() - 1 {
            self.cursor += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    fn position(&self) -> usize {
        self.cursor
    }

    fn seek(&mut self, position: usize) {
        self.cursor = position.min(self.tokens.len() - 1);
    }
}
