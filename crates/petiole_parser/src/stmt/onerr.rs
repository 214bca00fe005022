//! The `onerr` statement clause — eight forms (spec §4.2.6). Attaches
//! after the RHS of a VarDecl, Assign, or ExpressionStmt; never an
//! expression operator, never legal inside a parenthesized expression
//! (spec I6).

use crate::ast::onerr::OnErrClause;
use crate::program::Parser;
use crate::token::{TokenKind, TokenStream};

impl<S: TokenStream> Parser<S> {
    pub(crate) fn parse_optional_onerr(&mut self) -> Option<OnErrClause> {
        if !self.check(TokenKind::Onerr) {
            return None;
        }
        let token = self.advance();

        // `onerr as NAME` block form.
        if self.match_kind(TokenKind::As) {
            let alias = self.expect_name("an error binding name");
            let block = self.parse_block();
            return Some(OnErrClause {
                token,
                handler: None,
                is_panic: false,
                is_bare_return: false,
                return_values: Vec::new(),
                is_discard: false,
                explain: None,
                alias: Some(alias),
                block: Some(block.statements),
            });
        }

        // `onerr` block form, error bound to the default name `error`.
        if self.block_follows() {
            let block = self.parse_block();
            return Some(OnErrClause {
                token,
                handler: None,
                is_panic: false,
                is_bare_return: false,
                return_values: Vec::new(),
                is_discard: false,
                explain: None,
                alias: None,
                block: Some(block.statements),
            });
        }

        if self.match_kind(TokenKind::Discard) {
            return Some(OnErrClause {
                token,
                handler: None,
                is_panic: false,
                is_bare_return: false,
                return_values: Vec::new(),
                is_discard: true,
                explain: None,
                alias: None,
                block: None,
            });
        }

        if self.match_kind(TokenKind::Panic) {
            let handler = Some(Box::new(self.parse_expr()));
            return Some(OnErrClause {
                token,
                handler,
                is_panic: true,
                is_bare_return: false,
                return_values: Vec::new(),
                is_discard: false,
                explain: None,
                alias: None,
                block: None,
            });
        }

        if self.check(TokenKind::Return) {
            self.advance();
            let value_follows = !matches!(
                self.peek().kind,
                TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof | TokenKind::Explain
            );
            let (is_bare_return, return_values) = if value_follows {
                let mut values = vec![self.parse_expr()];
                while self.match_kind(TokenKind::Comma) {
                    values.push(self.parse_expr());
                }
                (false, values)
            } else {
                (true, Vec::new())
            };
            let explain = self.parse_optional_explain();
            return Some(OnErrClause {
                token,
                handler: None,
                is_panic: false,
                is_bare_return,
                return_values,
                is_discard: false,
                explain,
                alias: None,
                block: None,
            });
        }

        if self.check(TokenKind::Explain) {
            let explain = self.parse_optional_explain();
            return Some(OnErrClause {
                token,
                handler: None,
                is_panic: false,
                is_bare_return: false,
                return_values: Vec::new(),
                is_discard: false,
                explain,
                alias: None,
                block: None,
            });
        }

        // `onerr EXPR` / `onerr EXPR explain "hint"`.
        let handler = Some(Box::new(self.parse_expr()));
        let explain = self.parse_optional_explain();
        Some(OnErrClause {
            token,
            handler,
            is_panic: false,
            is_bare_return: false,
            return_values: Vec::new(),
            is_discard: false,
            explain,
            alias: None,
            block: None,
        })
    }

    fn parse_optional_explain(&mut self) -> Option<String> {
        if self.match_kind(TokenKind::Explain) {
            Some(self.expect_string("an explain message"))
        } else {
            None
        }
    }
}
