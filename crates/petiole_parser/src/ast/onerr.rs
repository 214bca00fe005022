//! The `onerr` statement clause (spec §4.2.6). Not an expression operator —
//! it attaches to a VarDecl, Assign, or ExpressionStmt after their RHS.

use crate::ast::expr::Expr;
use petiole_lexer::Token;

/// Carries everything needed to reconstruct any of the eight `onerr` forms:
/// a plain handler expression, a `panic` flag folded into `handler`, a bare
/// return (`is_bare_return`), explicit return values, a discard flag, an
/// explain message, and an optional block/alias pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OnErrClause {
    pub token: Token,
    /// `onerr EXPR` / `onerr panic EXPR` fallback or panic handler.
    pub handler: Option<Box<Expr>>,
    /// True for `onerr panic ...`.
    pub is_panic: bool,
    /// `onerr return` with no following values on the same line.
    pub is_bare_return: bool,
    /// `onerr return EXPR, EXPR...`.
    pub return_values: Vec<Expr>,
    /// `onerr discard`.
    pub is_discard: bool,
    /// `onerr explain "hint"` / `onerr EXPR explain "hint"`.
    pub explain: Option<String>,
    /// `onerr as NAME` — the error binding name for a block handler.
    /// Defaults to `"error"` when the block form omits `as NAME`.
    pub alias: Option<String>,
    /// `onerr INDENT ... DEDENT` / `onerr as NAME INDENT ... DEDENT`.
    pub block: Option<Vec<crate::ast::stmt::Stmt>>,
}

impl OnErrClause {
    pub fn bound_name(&self) -> &str {
        self.alias.as_deref().unwrap_or("error")
    }
}
