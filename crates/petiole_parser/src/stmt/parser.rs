//! Block parsing, statement dispatch, and the simple statement forms:
//! VarDecl, Assign, IncDec, ExpressionStmt (spec §4.2.5).

use crate::ast::expr::Expr;
use crate::ast::stmt::{Block, Stmt};
use crate::error::ParseError;
use crate::program::Parser;
use crate::token::{TokenKind, TokenStream};

impl<S: TokenStream> Parser<S> {
    /// `NEWLINE INDENT statement* DEDENT`, following the header that
    /// introduced the block.
    pub(crate) fn parse_block(&mut self) -> Block {
        let token = self.peek().clone();
        self.expect_kind(TokenKind::Newline, "a newline before an indented block");
        self.expect_kind(TokenKind::Indent, "an indented block");
        let mut statements = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                break;
            }
            statements.push(self.parse_statement());
        }
        self.expect_kind(TokenKind::Dedent, "a dedent ending the block");
        Block { statements, token }
    }

    pub(crate) fn parse_statement(&mut self) -> Stmt {
        match self.peek().kind {
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::Switch => self.parse_switch_stmt(),
            TokenKind::Select => self.parse_select_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Defer => self.parse_defer_stmt(),
            TokenKind::Go => self.parse_go_stmt(),
            TokenKind::Send => self.parse_send_stmt(),
            TokenKind::Break => Stmt::Break(self.advance()),
            TokenKind::Continue => Stmt::Continue(self.advance()),
            _ => self.parse_simple_stmt(),
        }
    }

    fn parse_return_stmt(&mut self) -> Stmt {
        let token = self.advance();
        let mut values = Vec::new();
        if self.starts_expr() {
            values.push(self.parse_expr());
            while self.match_kind(TokenKind::Comma) {
                values.push(self.parse_expr());
            }
        }
        Stmt::Return { values, token }
    }

    /// True when the current token could begin a value on this line —
    /// used both for optional `return` values and for the `onerr return`
    /// bare-vs-explicit distinction.
    pub(crate) fn starts_expr(&self) -> bool {
        !matches!(
            self.peek().kind,
            TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof
        )
    }

    /// VarDecl / Assign / IncDec / ExpressionStmt, with bounded lookahead
    /// for the multi-value `a, b, err := f()` form (spec §4.2.5).
    pub(crate) fn parse_simple_stmt(&mut self) -> Stmt {
        let token = self.peek().clone();

        if let Some(count) = self.multi_value_lhs_len() {
            let mut names = Vec::with_capacity(count);
            for i in 0..count {
                names.push(self.expect_lvalue_name());
                if i + 1 < count {
                    self.expect_kind(TokenKind::Comma, "','");
                }
            }
            let is_decl = self.check(TokenKind::Walrus);
            self.advance(); // `:=` or `=`
            let values = self.parse_expr_list();
            let onerr = self.parse_optional_onerr();
            return if is_decl {
                Stmt::VarDecl {
                    names,
                    values,
                    onerr,
                    token,
                }
            } else {
                let targets = names
                    .into_iter()
                    .map(|name| Expr::Identifier {
                        name,
                        token: token.clone(),
                    })
                    .collect();
                Stmt::Assign {
                    targets,
                    values,
                    onerr,
                    token,
                }
            };
        }

        let expr = self.parse_expr();

        if matches!(self.peek().kind, TokenKind::PlusPlus | TokenKind::MinusMinus) {
            let op_token = self.advance();
            let increment = op_token.kind == TokenKind::PlusPlus;
            return Stmt::IncDec {
                target: expr,
                increment,
                token: op_token,
            };
        }

        if self.check(TokenKind::Walrus) {
            self.advance();
            let name = match &expr {
                Expr::Identifier { name, .. } => name.clone(),
                _ => {
                    self.error(ParseError::WalrusNonIdentifier {
                        span: expr.token().span.clone(),
                    });
                    String::new()
                }
            };
            let values = self.parse_expr_list();
            let onerr = self.parse_optional_onerr();
            return Stmt::VarDecl {
                names: vec![name],
                values,
                onerr,
                token,
            };
        }

        if self.check(TokenKind::Assign) {
            self.advance();
            let values = self.parse_expr_list();
            let onerr = self.parse_optional_onerr();
            return Stmt::Assign {
                targets: vec![expr],
                values,
                onerr,
                token,
            };
        }

        let onerr = self.parse_optional_onerr();
        Stmt::Expression { expr, onerr, token }
    }

    fn parse_expr_list(&mut self) -> Vec<Expr> {
        let mut values = vec![self.parse_expr()];
        while self.match_kind(TokenKind::Comma) {
            values.push(self.parse_expr());
        }
        values
    }

    /// `_`, `empty`, `error`, or a plain identifier — all legal LHS names
    /// in a multi-value VarDecl/Assign (spec §4.2.5).
    fn is_lvalue_token(&self, kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Identifier | TokenKind::Empty | TokenKind::Error
        )
    }

    fn expect_lvalue_name(&mut self) -> String {
        if self.is_lvalue_token(self.peek().kind) {
            self.advance().lexeme
        } else {
            let found = self.peek().clone();
            self.error(ParseError::UnexpectedToken {
                expected: "an identifier, `_`, `empty`, or `error`".to_string(),
                found: format!("{:?}", found.kind),
                span: found.span.clone(),
            });
            String::new()
        }
    }

    /// Returns the number of LHS names if the cursor is at a multi-value
    /// declaration/assignment head (`NAME (, NAME)* (:= | =)`), without
    /// consuming anything.
    fn multi_value_lhs_len(&self) -> Option<usize> {
        if !self.is_lvalue_token(self.peek().kind) {
            return None;
        }
        let mut count = 1;
        let mut offset = 0;
        loop {
            let next = self.peek_ahead_kind(offset + 1)?;
            if next == TokenKind::Comma {
                let name_kind = self.peek_ahead_kind(offset + 2)?;
                if !self.is_lvalue_token(name_kind) {
                    return None;
                }
                count += 1;
                offset += 2;
                continue;
            }
            return if matches!(next, TokenKind::Walrus | TokenKind::Assign) {
                Some(count)
            } else {
                None
            };
        }
    }
}
