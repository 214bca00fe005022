//! Source positions and spans.

use std::rc::Rc;

/// A single position in a source file: 1-based line, 1-based column, 0-based
/// byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// A range in a source file, carrying the file name so diagnostics never
/// need to thread it separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub file: Rc<str>,
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(file: Rc<str>, start: Position, end: Position) -> Self {
        Span { file, start, end }
    }

    /// Combine two spans that share a file into one covering both.
    pub fn combine(&self, other: &Span) -> Span {
        Span {
            file: self.file.clone(),
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }

    pub fn dummy() -> Self {
        Span {
            file: Rc::from("<dummy>"),
            start: Position::start(),
            end: Position::start(),
        }
    }
}
