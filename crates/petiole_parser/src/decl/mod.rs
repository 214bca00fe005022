//! Type, interface, function, and top-level var declaration grammar.

pub mod parser;
