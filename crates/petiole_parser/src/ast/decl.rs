//! Declaration AST (spec §3.2, §4.2.1-4.2.4).

use crate::ast::expr::Expr;
use crate::ast::stmt::Block;
use crate::ast::ty::Type;
use petiole_lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct PackageDecl {
    pub name: String,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillDecl {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub path: String,
    pub alias: Option<String>,
    pub token: Token,
}

/// A struct field: `fieldName TypeAnnotation [as "json_name"] [tagKey:"tagValue"]`.
/// `alias` and `tag` are mutually exclusive (spec §4.2.2).
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub ty: Type,
    pub alias: Option<String>,
    pub tag: Option<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDeclBody {
    Struct(Vec<StructField>),
    /// A type alias for a function signature.
    Alias(Type),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub body: TypeDeclBody,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Type,
    pub default: Option<Expr>,
    pub is_variadic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: Vec<Type>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: String,
    pub methods: Vec<MethodSignature>,
    pub token: Token,
}

/// Method receiver: `on RECV_NAME RecvType`. A pointer receiver is encoded
/// by `ty` being a `Type::Reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub receiver: Option<Receiver>,
    pub params: Vec<Param>,
    pub returns: Vec<Type>,
    pub body: Block,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopLevelVarDecl {
    pub names: Vec<String>,
    pub values: Vec<Expr>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Type(TypeDecl),
    Interface(InterfaceDecl),
    Function(FunctionDecl),
    Var(TopLevelVarDecl),
    /// Synthesized in place of an unparseable top-level declaration so the
    /// rest of the program remains well-formed (spec §3.3, §9 "favor
    /// synthetic placeholder nodes over panic-and-skip").
    Error_(Token),
}

impl Decl {
    pub fn token(&self) -> &Token {
        match self {
            Decl::Type(d) => &d.token,
            Decl::Interface(d) => &d.token,
            Decl::Function(d) => &d.token,
            Decl::Var(d) => &d.token,
            Decl::Error_(t) => t,
        }
    }
}
