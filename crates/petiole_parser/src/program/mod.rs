//! Top-level grammar and the shared `Parser` type.

pub mod parser;

pub use parser::Parser;
