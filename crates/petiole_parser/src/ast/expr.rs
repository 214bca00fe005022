//! Expression AST (spec §3.2, §4.2.7).

use crate::ast::ty::Type;
use petiole_lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    Eq,
    NotEq,
    Lt,
    Gt,
    Lte,
    Gte,
    In,
    NotIn,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnaryOp {
    Not,
    Neg,
    AddressOf,
    Dereference,
}

/// A call argument: positional, or named via `name: value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub name: Option<String>,
    pub value: Expr,
    pub is_spread: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LambdaParam {
    pub name: String,
    pub ty: Option<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LambdaBody {
    Expr(Box<Expr>),
    Block(Vec<crate::ast::stmt::Stmt>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier {
        name: String,
        token: Token,
    },
    Integer {
        value: i64,
        token: Token,
    },
    Float {
        value: f64,
        token: Token,
    },
    /// `interpolated` mirrors the lexer's unresolved `{expr}` marker flag;
    /// expansion is left to the semantic pass.
    Str {
        value: String,
        interpolated: bool,
        token: Token,
    },
    Rune {
        value: char,
        token: Token,
    },
    Bool {
        value: bool,
        token: Token,
    },
    /// The `_` placeholder, legal as an l-value target or a pipe argument.
    Discard {
        token: Token,
    },

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        token: Token,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        token: Token,
    },
    /// Structural only: placeholder substitution is a semantic-pass concern.
    Pipe {
        left: Box<Expr>,
        right: Box<Expr>,
        token: Token,
    },

    Call {
        callee: Box<Expr>,
        args: Vec<Arg>,
        token: Token,
    },
    /// `.Method(args)` on the right of a pipe, or `recv.Method(args)`.
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Arg>,
        token: Token,
    },
    /// `.Method(args)` with no receiver yet bound (right of a pipe).
    ShorthandMethodCall {
        method: String,
        args: Vec<Arg>,
        token: Token,
    },
    Index {
        receiver: Box<Expr>,
        index: Box<Expr>,
        token: Token,
    },
    Slice {
        receiver: Box<Expr>,
        from: Option<Box<Expr>>,
        to: Option<Box<Expr>>,
        token: Token,
    },
    TypeCast {
        expr: Box<Expr>,
        target: Type,
        token: Token,
    },
    TypeAssertion {
        expr: Box<Expr>,
        target: Type,
        token: Token,
    },

    Grouped {
        inner: Box<Expr>,
        token: Token,
    },

    StructLiteral {
        name: String,
        qualifier: Option<String>,
        fields: Vec<StructField>,
        token: Token,
    },
    ListLiteral {
        element_type: Option<Type>,
        elements: Vec<Expr>,
        token: Token,
    },
    MapLiteral {
        key_type: Option<Type>,
        value_type: Option<Type>,
        entries: Vec<(Expr, Expr)>,
        token: Token,
    },

    FunctionLiteral {
        params: Vec<crate::ast::decl::Param>,
        returns: Vec<Type>,
        body: Vec<crate::ast::stmt::Stmt>,
        token: Token,
    },
    ArrowLambda {
        params: Vec<LambdaParam>,
        body: LambdaBody,
        token: Token,
    },

    Empty {
        ty: Option<Type>,
        token: Token,
    },
    /// `error message`, or a bare `error` referencing the enclosing
    /// `onerr` block's default error binding when no message follows.
    Error {
        message: Option<Box<Expr>>,
        token: Token,
    },
    Make {
        ty: Type,
        args: Vec<Expr>,
        token: Token,
    },
    Close {
        channel: Box<Expr>,
        token: Token,
    },
    Panic {
        message: Box<Expr>,
        token: Token,
    },
    Recover {
        token: Token,
    },
    Receive {
        channel: Box<Expr>,
        token: Token,
    },

    /// `return` used as an expression, legal in any primary position per
    /// the preserved source permissiveness (spec §9 Open Questions).
    Return {
        values: Vec<Expr>,
        token: Token,
    },
    /// A block used as an expression (e.g. an arrow lambda's block body
    /// evaluated for its last statement's value downstream).
    Block {
        statements: Vec<crate::ast::stmt::Stmt>,
        token: Token,
    },

    /// Synthesized in place of a missing required expression so the AST
    /// stays structurally valid after a parse error (spec §3.3).
    Error_ {
        token: Token,
    },
}

impl Expr {
    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier { token, .. }
            | Expr::Integer { token, .. }
            | Expr::Float { token, .. }
            | Expr::Str { token, .. }
            | Expr::Rune { token, .. }
            | Expr::Bool { token, .. }
            | Expr::Discard { token }
            | Expr::Binary { token, .. }
            | Expr::Unary { token, .. }
            | Expr::Pipe { token, .. }
            | Expr::Call { token, .. }
            | Expr::MethodCall { token, .. }
            | Expr::ShorthandMethodCall { token, .. }
            | Expr::Index { token, .. }
            | Expr::Slice { token, .. }
            | Expr::TypeCast { token, .. }
            | Expr::TypeAssertion { token, .. }
            | Expr::Grouped { token, .. }
            | Expr::StructLiteral { token, .. }
            | Expr::ListLiteral { token, .. }
            | Expr::MapLiteral { token, .. }
            | Expr::FunctionLiteral { token, .. }
            | Expr::ArrowLambda { token, .. }
            | Expr::Empty { token, .. }
            | Expr::Error { token, .. }
            | Expr::Make { token, .. }
            | Expr::Close { token, .. }
            | Expr::Panic { token, .. }
            | Expr::Recover { token }
            | Expr::Receive { token, .. }
            | Expr::Return { token, .. }
            | Expr::Block { token, .. }
            | Expr::Error_ { token } => token,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Expr::Error_ { .. })
    }
}
