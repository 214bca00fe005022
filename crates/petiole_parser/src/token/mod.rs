//! Token stream adaptation over `petiole_lexer`'s output.

pub mod stream;

pub use petiole_lexer::{LiteralValue, Span, Token, TokenKind};
pub use stream::{TokenStream, VecTokenStream};
