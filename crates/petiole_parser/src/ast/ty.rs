//! Type annotation grammar (spec §4.2.8).

use petiole_lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A bare primitive name (`int`, `string`, `bool`, ...).
    Primitive { name: String, token: Token },
    /// Any other identifier, optionally qualified (`pkg.Type`), plus the
    /// `error` keyword-as-type special case.
    Named {
        qualifier: Option<String>,
        name: String,
        token: Token,
    },
    Reference { inner: Box<Type>, token: Token },
    List { element: Box<Type>, token: Token },
    Map {
        key: Box<Type>,
        value: Box<Type>,
        token: Token,
    },
    Channel { element: Box<Type>, token: Token },
    Function {
        params: Vec<Type>,
        returns: Vec<Type>,
        token: Token,
    },
}

impl Type {
    pub fn token(&self) -> &Token {
        match self {
            Type::Primitive { token, .. }
            | Type::Named { token, .. }
            | Type::Reference { token, .. }
            | Type::List { token, .. }
            | Type::Map { token, .. }
            | Type::Channel { token, .. }
            | Type::Function { token, .. } => token,
        }
    }
}

pub(crate) const PRIMITIVE_NAMES: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "float32", "float64", "string", "bool", "byte", "rune", "any",
];
