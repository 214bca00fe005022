//! If/Switch/TypeSwitch/Select/For/Go/Defer/Send (spec §4.2.5).

use crate::ast::expr::Expr;
use crate::ast::stmt::{ForKind, GoTarget, SelectCase, Stmt, TypeSwitchCase, WhenCase};
use crate::ast::ty::Type;
use crate::error::ParseError;
use crate::program::Parser;
use crate::token::{Token, TokenKind, TokenStream};

impl<S: TokenStream> Parser<S> {
    // ---- if ---------------------------------------------------------

    pub(crate) fn parse_if_stmt(&mut self) -> Stmt {
        let token = self.advance(); // if

        let init = if self.if_has_init() {
            let stmt = self.parse_simple_stmt();
            self.expect_kind(TokenKind::Semicolon, "';' after an if-init statement");
            Some(Box::new(stmt))
        } else {
            None
        };

        let condition = self.parse_header_expr();
        let consequence = self.parse_block();

        self.skip_newlines();
        let alternative = if self.match_kind(TokenKind::Else) {
            if self.check(TokenKind::If) {
                Some(Box::new(self.parse_if_stmt()))
            } else {
                Some(Box::new(Stmt::Block(self.parse_block())))
            }
        } else {
            None
        };

        Stmt::If {
            init,
            condition,
            consequence,
            alternative,
            token,
        }
    }

    /// Bounded lookahead over the raw token stream (bypassing the
    /// COMMENT/SEMICOLON skip) for a top-level `;` before the next
    /// NEWLINE — the one named backtracking-free detection the spec
    /// calls out for if-init (spec §9).
    fn if_has_init(&self) -> bool {
        let mut offset = 0;
        let mut depth = 0i32;
        loop {
            let kind = match self.tokens.peek_raw(offset) {
                Some(t) => t.kind,
                None => return false,
            };
            match kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => depth -= 1,
                TokenKind::Semicolon if depth == 0 => return true,
                TokenKind::Newline | TokenKind::Indent | TokenKind::Eof if depth == 0 => {
                    return false
                }
                _ => {}
            }
            offset += 1;
        }
    }

    // ---- switch / type switch -----------------------------------------

    pub(crate) fn parse_switch_stmt(&mut self) -> Stmt {
        let token = self.advance(); // switch
        let subject = if self.block_follows() {
            None
        } else {
            Some(self.parse_header_expr())
        };

        match subject {
            Some(Expr::TypeCast {
                expr,
                target:
                    Type::Named {
                        qualifier: None,
                        name,
                        ..
                    },
                ..
            }) => self.parse_type_switch_body(token, *expr, name),
            other => self.parse_plain_switch_body(token, other),
        }
    }

    fn parse_plain_switch_body(&mut self, token: Token, subject: Option<Expr>) -> Stmt {
        self.expect_kind(TokenKind::Newline, "a newline before a switch body");
        self.expect_kind(TokenKind::Indent, "an indented switch body");
        let mut cases = Vec::new();
        let mut otherwise = None;
        loop {
            self.skip_newlines();
            if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                break;
            }
            if self.check(TokenKind::Otherwise) {
                let other_token = self.advance();
                if otherwise.is_some() {
                    self.error(ParseError::DuplicateOtherwise {
                        span: other_token.span.clone(),
                    });
                }
                otherwise = Some(self.parse_block());
                continue;
            }
            let when_token = self.peek().clone();
            self.expect_kind(TokenKind::When, "'when'");
            if otherwise.is_some() {
                self.error(ParseError::WhenAfterOtherwise {
                    span: when_token.span.clone(),
                });
            }
            let mut values = vec![self.parse_header_expr()];
            while self.match_kind(TokenKind::Comma) {
                values.push(self.parse_header_expr());
            }
            let body = self.parse_block();
            cases.push(WhenCase { values, body });
        }
        self.expect_kind(TokenKind::Dedent, "a dedent ending the switch body");
        Stmt::Switch {
            subject,
            cases,
            otherwise,
            token,
        }
    }

    fn parse_type_switch_body(&mut self, token: Token, subject: Expr, binding: String) -> Stmt {
        self.expect_kind(TokenKind::Newline, "a newline before a type switch body");
        self.expect_kind(TokenKind::Indent, "an indented type switch body");
        let mut cases = Vec::new();
        let mut otherwise = None;
        loop {
            self.skip_newlines();
            if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                break;
            }
            if self.check(TokenKind::Otherwise) {
                let other_token = self.advance();
                if otherwise.is_some() {
                    self.error(ParseError::DuplicateOtherwise {
                        span: other_token.span.clone(),
                    });
                }
                otherwise = Some(self.parse_block());
                continue;
            }
            let when_token = self.peek().clone();
            self.expect_kind(TokenKind::When, "'when'");
            if otherwise.is_some() {
                self.error(ParseError::WhenAfterOtherwise {
                    span: when_token.span.clone(),
                });
            }
            let ty = self.parse_type();
            let body = self.parse_block();
            cases.push(TypeSwitchCase { ty, body });
        }
        self.expect_kind(TokenKind::Dedent, "a dedent ending the type switch body");
        Stmt::TypeSwitch {
            subject,
            binding,
            cases,
            otherwise,
            token,
        }
    }

    // ---- select ---------------------------------------------------------

    pub(crate) fn parse_select_stmt(&mut self) -> Stmt {
        let token = self.advance(); // select
        self.expect_kind(TokenKind::Newline, "a newline before a select body");
        self.expect_kind(TokenKind::Indent, "an indented select body");
        let mut cases = Vec::new();
        let mut otherwise = None;
        loop {
            self.skip_newlines();
            if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                break;
            }
            if self.check(TokenKind::Otherwise) {
                self.advance();
                otherwise = Some(self.parse_block());
                continue;
            }
            self.expect_kind(TokenKind::When, "'when'");
            cases.push(self.parse_select_case());
        }
        self.expect_kind(TokenKind::Dedent, "a dedent ending the select body");
        Stmt::Select {
            cases,
            otherwise,
            token,
        }
    }

    fn parse_select_case(&mut self) -> SelectCase {
        if self.check(TokenKind::Receive) {
            self.advance();
            self.expect_kind(TokenKind::From, "'from'");
            let channel = self.parse_header_expr();
            let body = self.parse_block();
            SelectCase::Receive {
                binding: None,
                ok_binding: None,
                channel,
                body,
            }
        } else if self.check(TokenKind::Send) {
            self.advance();
            let value = self.parse_expr();
            self.expect_kind(TokenKind::To, "'to'");
            let channel = self.parse_header_expr();
            let body = self.parse_block();
            SelectCase::Send {
                value,
                channel,
                body,
            }
        } else {
            let binding = self.expect_name("a receive binding");
            let ok_binding = if self.match_kind(TokenKind::Comma) {
                Some(self.expect_name("an ok binding"))
            } else {
                None
            };
            self.expect_kind(TokenKind::Walrus, "':='");
            self.expect_kind(TokenKind::Receive, "'receive'");
            self.expect_kind(TokenKind::From, "'from'");
            let channel = self.parse_header_expr();
            let body = self.parse_block();
            SelectCase::Receive {
                binding: Some(binding),
                ok_binding,
                channel,
                body,
            }
        }
    }

    // ---- for --------------------------------------------------------

    pub(crate) fn parse_for_stmt(&mut self) -> Stmt {
        let token = self.advance(); // for
        let kind = if self.check(TokenKind::Newline) {
            ForKind::Bare
        } else if self.for_is_range() {
            self.parse_for_range()
        } else if self.for_is_numeric() {
            self.parse_for_numeric()
        } else {
            ForKind::Condition(self.parse_header_expr())
        };
        let body = self.parse_block();
        Stmt::For { kind, body, token }
    }

    fn for_is_range(&self) -> bool {
        if !self.check(TokenKind::Identifier) {
            return false;
        }
        if self.peek_ahead_kind(1) == Some(TokenKind::In) {
            return true;
        }
        self.peek_ahead_kind(1) == Some(TokenKind::Comma)
            && self.peek_ahead_kind(2) == Some(TokenKind::Identifier)
            && self.peek_ahead_kind(3) == Some(TokenKind::In)
    }

    fn parse_for_range(&mut self) -> ForKind {
        let first = self.expect_name("a loop variable");
        let (index, binding) = if self.match_kind(TokenKind::Comma) {
            let second = self.expect_name("a loop variable");
            (Some(first), second)
        } else {
            (None, first)
        };
        self.expect_kind(TokenKind::In, "'in'");
        let collection = self.parse_header_expr();
        ForKind::Range {
            index,
            binding,
            collection,
        }
    }

    fn for_is_numeric(&self) -> bool {
        self.check(TokenKind::Identifier) && self.peek_ahead_kind(1) == Some(TokenKind::From)
    }

    fn parse_for_numeric(&mut self) -> ForKind {
        let binding = self.expect_name("a loop variable");
        self.expect_kind(TokenKind::From, "'from'");
        let start = self.parse_expr();
        let inclusive = if self.match_kind(TokenKind::To) {
            false
        } else if self.match_kind(TokenKind::Through) {
            true
        } else {
            let found = self.peek().clone();
            self.error(ParseError::UnexpectedToken {
                expected: "'to' or 'through'".to_string(),
                found: format!("{:?}", found.kind),
                span: found.span.clone(),
            });
            false
        };
        let end = self.parse_header_expr();
        ForKind::Numeric {
            binding,
            start,
            end,
            inclusive,
        }
    }

    // ---- go / defer / send -----------------------------------------

    pub(crate) fn parse_go_stmt(&mut self) -> Stmt {
        let token = self.advance(); // go
        let target = if self.block_follows() {
            GoTarget::Block(self.parse_block())
        } else {
            let expr = self.parse_expr();
            self.require_call("'go'", &expr);
            GoTarget::Call(expr)
        };
        Stmt::Go { target, token }
    }

    pub(crate) fn parse_defer_stmt(&mut self) -> Stmt {
        let token = self.advance(); // defer
        let call = self.parse_expr();
        self.require_call("'defer'", &call);
        Stmt::Defer { call, token }
    }

    /// Accepts anything call-shaped: a plain call, a method call, or one
    /// of the parenthesized builtin forms (`close(ch)`, `make(...)`,
    /// `panic(...)`) — all legal `go`/`defer` targets.
    fn require_call(&mut self, what: &str, expr: &Expr) {
        let is_call_shaped = matches!(
            expr,
            Expr::Call { .. }
                | Expr::MethodCall { .. }
                | Expr::ShorthandMethodCall { .. }
                | Expr::Close { .. }
                | Expr::Make { .. }
                | Expr::Panic { .. }
        );
        if !is_call_shaped {
            self.error(ParseError::Syntax {
                message: format!("{what} requires a function call"),
                span: expr.token().span.clone(),
            });
        }
    }

    pub(crate) fn parse_send_stmt(&mut self) -> Stmt {
        let token = self.advance(); // send
        let value = self.parse_expr();
        self.expect_kind(TokenKind::To, "'to'");
        let channel = self.parse_expr();
        Stmt::Send {
            value,
            channel,
            token,
        }
    }
}
