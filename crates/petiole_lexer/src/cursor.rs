//! Character-level cursor with small (≤2 char) lookahead and line/column
//! tracking (spec §4.1 "scanning discipline").

use crate::span::Position;

pub struct Cursor {
    chars: Vec<char>,
    idx: usize,
    pos: Position,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        // CRLF is normalized to LF on read (spec §6.1).
        let normalized = source.replace("\r\n", "\n");
        Cursor {
            chars: normalized.chars().collect(),
            idx: 0,
            pos: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        self.pos.clone()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    pub fn peek2(&self) -> Option<char> {
        self.chars.get(self.idx + 1).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.idx >= self.chars.len()
    }

    /// Consume and return the current character, advancing line/column
    /// tracking. Column resets on newline.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.idx += 1;
        self.pos.offset += c.len_utf8();
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        Some(c)
    }

    /// Consume `c` if it's next, returning whether it matched.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }
}
