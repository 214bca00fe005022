//! Unary, postfix, and primary expressions (spec §4.2.7): the tightest
//! bindings at the bottom of the precedence chain in `precedence.rs`.

use crate::ast::expr::{Arg, Expr, LambdaBody, LambdaParam, StructField, UnaryOp};
use crate::error::ParseError;
use crate::program::Parser;
use crate::token::{Token, TokenKind, TokenStream};

impl<S: TokenStream> Parser<S> {
    pub(crate) fn parse_unary(&mut self) -> Expr {
        match self.peek().kind {
            TokenKind::Not | TokenKind::Bang => {
                let token = self.advance();
                let operand = Box::new(self.parse_unary());
                Expr::Unary {
                    op: UnaryOp::Not,
                    operand,
                    token,
                }
            }
            TokenKind::Minus => {
                let token = self.advance();
                let operand = Box::new(self.parse_unary());
                Expr::Unary {
                    op: UnaryOp::Neg,
                    operand,
                    token,
                }
            }
            TokenKind::Reference => {
                let token = self.advance();
                self.expect_kind(TokenKind::Of, "'of'");
                let operand = Box::new(self.parse_unary());
                Expr::Unary {
                    op: UnaryOp::AddressOf,
                    operand,
                    token,
                }
            }
            TokenKind::Dereference => {
                let token = self.advance();
                let operand = Box::new(self.parse_unary());
                Expr::Unary {
                    op: UnaryOp::Dereference,
                    operand,
                    token,
                }
            }
            _ => self.parse_postfix(),
        }
    }

    fn parse_postfix(&mut self) -> Expr {
        let mut expr = self.parse_primary();
        loop {
            match self.peek().kind {
                TokenKind::LParen => {
                    let token = self.peek().clone();
                    let args = self.parse_call_args();
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                        token,
                    };
                }
                TokenKind::Dot => {
                    expr = self.parse_dot_postfix(expr);
                }
                TokenKind::LBracket => {
                    expr = self.parse_index_or_slice(expr);
                }
                TokenKind::As => {
                    let token = self.advance();
                    let target = self.parse_type();
                    expr = Expr::TypeCast {
                        expr: Box::new(expr),
                        target,
                        token,
                    };
                }
                _ => break,
            }
        }
        expr
    }

    fn parse_dot_postfix(&mut self, receiver: Expr) -> Expr {
        let dot_token = self.advance(); // .

        if self.match_kind(TokenKind::LParen) {
            let target = self.parse_type();
            self.expect_kind(TokenKind::RParen, "')'");
            return Expr::TypeAssertion {
                expr: Box::new(receiver),
                target,
                token: dot_token,
            };
        }

        let name = self.expect_name("a method or field name");

        if self.check(TokenKind::LBrace) {
            let qualifier = match &receiver {
                Expr::Identifier { name: q, .. } => Some(q.clone()),
                _ => None,
            };
            return self.parse_struct_literal_braces(qualifier, name, dot_token);
        }

        let args = if self.check(TokenKind::LParen) {
            self.parse_call_args()
        } else {
            Vec::new()
        };
        Expr::MethodCall {
            receiver: Box::new(receiver),
            method: name,
            args,
            token: dot_token,
        }
    }

    /// Index `recv[i]` or slice `recv[from:to]`, either bound open at
    /// either end.
    fn parse_index_or_slice(&mut self, receiver: Expr) -> Expr {
        let token = self.advance(); // [

        if self.match_kind(TokenKind::Colon) {
            let to = self.parse_optional_slice_bound();
            self.expect_kind(TokenKind::RBracket, "']'");
            return Expr::Slice {
                receiver: Box::new(receiver),
                from: None,
                to,
                token,
            };
        }

        let first = self.parse_expr();
        if self.match_kind(TokenKind::Colon) {
            let to = self.parse_optional_slice_bound();
            self.expect_kind(TokenKind::RBracket, "']'");
            return Expr::Slice {
                receiver: Box::new(receiver),
                from: Some(Box::new(first)),
                to,
                token,
            };
        }

        self.expect_kind(TokenKind::RBracket, "']'");
        Expr::Index {
            receiver: Box::new(receiver),
            index: Box::new(first),
            token,
        }
    }

    fn parse_optional_slice_bound(&mut self) -> Option<Box<Expr>> {
        if self.check(TokenKind::RBracket) {
            None
        } else {
            Some(Box::new(self.parse_expr()))
        }
    }

    pub(crate) fn parse_call_args(&mut self) -> Vec<Arg> {
        self.advance(); // (
        let mut args = Vec::new();
        let mut seen_named = false;

        if !self.check(TokenKind::RParen) {
            loop {
                let is_spread = self.match_kind(TokenKind::Many);
                let name = if self.check(TokenKind::Identifier)
                    && self.peek_ahead_kind(1) == Some(TokenKind::Colon)
                {
                    let n = self.advance().lexeme;
                    self.advance(); // ':'
                    Some(n)
                } else {
                    None
                };

                let value = self.parse_expr();
                if name.is_some() {
                    seen_named = true;
                } else if seen_named {
                    self.error(ParseError::PositionalAfterNamed {
                        span: value.token().span.clone(),
                    });
                }
                args.push(Arg {
                    name,
                    value,
                    is_spread,
                });

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_kind(TokenKind::RParen, "')'");
        args
    }

    // ---- primary ------------------------------------------------------

    fn parse_primary(&mut self) -> Expr {
        match self.peek().kind {
            TokenKind::Integer => self.parse_integer_literal(),
            TokenKind::Float => self.parse_float_literal(),
            TokenKind::String => self.parse_string_literal(),
            TokenKind::Rune => self.parse_rune_literal(),
            TokenKind::True | TokenKind::False => self.parse_bool_literal(),
            TokenKind::Identifier => {
                if self.peek_ahead_kind(1) == Some(TokenKind::FatArrow) {
                    self.parse_arrow_lambda()
                } else {
                    self.parse_identifier_primary()
                }
            }
            TokenKind::LParen => {
                if self.is_arrow_lambda_ahead() {
                    self.parse_arrow_lambda()
                } else {
                    self.parse_grouped()
                }
            }
            TokenKind::LBracket => self.parse_bracket_list_literal(),
            TokenKind::Empty => self.parse_empty_expr(),
            TokenKind::Error => self.parse_error_expr(),
            TokenKind::Make => self.parse_make_expr(),
            TokenKind::Close => self.parse_close_expr(),
            TokenKind::Panic => self.parse_panic_expr(),
            TokenKind::Recover => {
                let token = self.advance();
                Expr::Recover { token }
            }
            TokenKind::Receive => self.parse_receive_expr(),
            TokenKind::List => self.parse_list_typed_literal(),
            TokenKind::Map => self.parse_map_typed_literal(),
            TokenKind::Func => self.parse_function_literal(),
            TokenKind::Dot => self.parse_shorthand_method_call(),
            TokenKind::Return => self.parse_return_expr(),
            _ => {
                // Consume the offending token so a malformed primary can
                // never stall the enclosing statement loop in place.
                let found = self.advance();
                self.error(ParseError::ExpectedExpression {
                    span: found.span.clone(),
                });
                Expr::Error_ { token: found }
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Expr {
        let token = self.advance();
        let value = match &token.literal {
            Some(petiole_lexer::LiteralValue::Integer(v)) => *v,
            _ => 0,
        };
        Expr::Integer { value, token }
    }

    fn parse_float_literal(&mut self) -> Expr {
        let token = self.advance();
        let value = match &token.literal {
            Some(petiole_lexer::LiteralValue::Float(v)) => *v,
            _ => 0.0,
        };
        Expr::Float { value, token }
    }

    fn parse_string_literal(&mut self) -> Expr {
        let token = self.advance();
        let (value, interpolated) = match &token.literal {
            Some(petiole_lexer::LiteralValue::Str { value, interpolated }) => {
                (value.clone(), *interpolated)
            }
            _ => (String::new(), false),
        };
        Expr::Str {
            value,
            interpolated,
            token,
        }
    }

    fn parse_rune_literal(&mut self) -> Expr {
        let token = self.advance();
        let value = match &token.literal {
            Some(petiole_lexer::LiteralValue::Rune(c)) => *c,
            _ => '\0',
        };
        Expr::Rune { value, token }
    }

    fn parse_bool_literal(&mut self) -> Expr {
        let token = self.advance();
        let value = token.kind == TokenKind::True;
        Expr::Bool { value, token }
    }

    /// A bare identifier: the `_` discard, a qualified/unqualified struct
    /// literal continuation, or a plain name reference. The indented-block
    /// struct-literal form is suppressed inside a control header (spec §9).
    fn parse_identifier_primary(&mut self) -> Expr {
        let token = self.advance();
        if token.lexeme == "_" {
            return Expr::Discard { token };
        }
        let name = token.lexeme.clone();

        if self.check(TokenKind::LBrace) {
            self.parse_struct_literal_braces(None, name, token)
        } else if !self.in_control_header() && self.block_follows() {
            self.parse_struct_literal_block(None, name, token)
        } else {
            Expr::Identifier { name, token }
        }
    }

    fn parse_grouped(&mut self) -> Expr {
        let token = self.advance(); // (
        let inner = Box::new(self.parse_expr());
        self.expect_kind(TokenKind::RParen, "')'");
        Expr::Grouped { inner, token }
    }

    /// Bounded lookahead from a `(` to its matching `)`, checking whether
    /// `=>` follows — the one named backtracking call site (besides
    /// if-init and for-variant detection) the grammar calls for (spec §9).
    fn is_arrow_lambda_ahead(&mut self) -> bool {
        let mark = self.mark();
        let mut depth = 0i32;
        loop {
            if self.tokens.is_at_end() {
                self.reset(mark);
                return false;
            }
            match self.peek().kind {
                TokenKind::LParen => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen => {
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        break;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        let is_lambda = self.check(TokenKind::FatArrow);
        self.reset(mark);
        is_lambda
    }

    /// `x => expr`, `(x T) => expr`, `(x, y) => expr`, `() => expr`, any
    /// with an indented block body instead of a single trailing expression.
    fn parse_arrow_lambda(&mut self) -> Expr {
        let token = self.peek().clone();
        let params = if self.check(TokenKind::LParen) {
            self.advance();
            let mut params = Vec::new();
            if !self.check(TokenKind::RParen) {
                loop {
                    let name = self.expect_name("a lambda parameter");
                    let ty = if self.starts_type() {
                        Some(self.parse_type())
                    } else {
                        None
                    };
                    params.push(LambdaParam { name, ty });
                    if !self.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect_kind(TokenKind::RParen, "')'");
            params
        } else {
            let name = self.expect_name("a lambda parameter");
            vec![LambdaParam { name, ty: None }]
        };

        self.expect_kind(TokenKind::FatArrow, "'=>'");
        let body = if self.block_follows() {
            LambdaBody::Block(self.parse_block().statements)
        } else {
            LambdaBody::Expr(Box::new(self.parse_expr()))
        };
        Expr::ArrowLambda {
            params,
            body,
            token,
        }
    }

    fn parse_function_literal(&mut self) -> Expr {
        let token = self.advance(); // func
        let params = if self.check(TokenKind::LParen) {
            self.parse_params()
        } else {
            Vec::new()
        };
        let returns = self.parse_optional_return_types();
        let body = self.parse_block().statements;
        Expr::FunctionLiteral {
            params,
            returns,
            body,
            token,
        }
    }

    fn parse_empty_expr(&mut self) -> Expr {
        let token = self.advance();
        let ty = if self.starts_type() {
            Some(self.parse_type())
        } else {
            None
        };
        Expr::Empty { ty, token }
    }

    /// `error message`, or a bare `error` when nothing that could start an
    /// expression follows — e.g. `log(error)` referencing the default
    /// `onerr` binding rather than constructing a new error.
    fn parse_error_expr(&mut self) -> Expr {
        let token = self.advance();
        let message = if self.can_start_expr() {
            Some(Box::new(self.parse_unary()))
        } else {
            None
        };
        Expr::Error { message, token }
    }

    fn can_start_expr(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Rune
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Identifier
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::Empty
                | TokenKind::Error
                | TokenKind::Make
                | TokenKind::Close
                | TokenKind::Panic
                | TokenKind::Recover
                | TokenKind::Receive
                | TokenKind::List
                | TokenKind::Map
                | TokenKind::Func
                | TokenKind::Dot
                | TokenKind::Return
                | TokenKind::Not
                | TokenKind::Bang
                | TokenKind::Minus
                | TokenKind::Reference
                | TokenKind::Dereference
        )
    }

    fn parse_make_expr(&mut self) -> Expr {
        let token = self.advance();
        self.expect_kind(TokenKind::LParen, "'('");
        let ty = self.parse_type();
        let mut args = Vec::new();
        while self.match_kind(TokenKind::Comma) {
            args.push(self.parse_expr());
        }
        self.expect_kind(TokenKind::RParen, "')'");
        Expr::Make { ty, args, token }
    }

    fn parse_close_expr(&mut self) -> Expr {
        let token = self.advance();
        self.expect_kind(TokenKind::LParen, "'('");
        let channel = Box::new(self.parse_expr());
        self.expect_kind(TokenKind::RParen, "')'");
        Expr::Close { channel, token }
    }

    fn parse_panic_expr(&mut self) -> Expr {
        let token = self.advance();
        self.expect_kind(TokenKind::LParen, "'('");
        let message = Box::new(self.parse_expr());
        self.expect_kind(TokenKind::RParen, "')'");
        Expr::Panic { message, token }
    }

    fn parse_receive_expr(&mut self) -> Expr {
        let token = self.advance();
        self.expect_kind(TokenKind::From, "'from'");
        let channel = Box::new(self.parse_unary());
        Expr::Receive { channel, token }
    }

    fn parse_return_expr(&mut self) -> Expr {
        let token = self.advance();
        let mut values = Vec::new();
        if self.starts_expr() {
            values.push(self.parse_expr());
            while self.match_kind(TokenKind::Comma) {
                values.push(self.parse_expr());
            }
        }
        Expr::Return { values, token }
    }

    /// `.Method(args)` with no receiver bound yet — legal on the right of
    /// a pipe (spec §4.2.7).
    fn parse_shorthand_method_call(&mut self) -> Expr {
        let token = self.advance(); // .
        let method = self.expect_name("a method name");
        let args = if self.check(TokenKind::LParen) {
            self.parse_call_args()
        } else {
            Vec::new()
        };
        Expr::ShorthandMethodCall {
            method,
            args,
            token,
        }
    }

    fn parse_list_typed_literal(&mut self) -> Expr {
        let token = self.advance(); // list
        self.expect_kind(TokenKind::Of, "'of'");
        let element_type = Some(self.parse_type());
        let elements = if self.check(TokenKind::LBrace) {
            self.parse_brace_elements()
        } else {
            Vec::new()
        };
        Expr::ListLiteral {
            element_type,
            elements,
            token,
        }
    }

    fn parse_map_typed_literal(&mut self) -> Expr {
        let token = self.advance(); // map
        self.expect_kind(TokenKind::Of, "'of'");
        let key_type = Some(self.parse_type());
        self.expect_kind(TokenKind::To, "'to'");
        let value_type = Some(self.parse_type());
        let entries = if self.check(TokenKind::LBrace) {
            self.parse_brace_map_entries()
        } else {
            Vec::new()
        };
        Expr::MapLiteral {
            key_type,
            value_type,
            entries,
            token,
        }
    }

    fn parse_bracket_list_literal(&mut self) -> Expr {
        let token = self.advance(); // [
        let mut elements = Vec::new();
        if !self.check(TokenKind::RBracket) {
            loop {
                elements.push(self.parse_expr());
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBracket) {
                    break;
                }
            }
        }
        self.expect_kind(TokenKind::RBracket, "']'");
        Expr::ListLiteral {
            element_type: None,
            elements,
            token,
        }
    }

    fn parse_brace_elements(&mut self) -> Vec<Expr> {
        self.advance(); // {
        let mut elements = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                elements.push(self.parse_expr());
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBrace) {
                    break;
                }
            }
        }
        self.expect_kind(TokenKind::RBrace, "'}'");
        elements
    }

    fn parse_brace_map_entries(&mut self) -> Vec<(Expr, Expr)> {
        self.advance(); // {
        let mut entries = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let key = self.parse_expr();
                self.expect_kind(TokenKind::Colon, "':'");
                let value = self.parse_expr();
                entries.push((key, value));
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBrace) {
                    break;
                }
            }
        }
        self.expect_kind(TokenKind::RBrace, "'}'");
        entries
    }

    /// `Name { field: value, ... }`, legal anywhere — the brace form never
    /// collides with a control header.
    fn parse_struct_literal_braces(
        &mut self,
        qualifier: Option<String>,
        name: String,
        token: Token,
    ) -> Expr {
        self.advance(); // {
        let mut fields = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let field_name = self.expect_name("a field name");
                self.expect_kind(TokenKind::Colon, "':'");
                let value = self.parse_expr();
                fields.push(StructField {
                    name: field_name,
                    value,
                });
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
                if self.check(TokenKind::RBrace) {
                    break;
                }
            }
        }
        self.expect_kind(TokenKind::RBrace, "'}'");
        Expr::StructLiteral {
            name,
            qualifier,
            fields,
            token,
        }
    }

    /// `Name` followed by an indented `field: value` block, the layout
    /// counterpart to the brace form.
    fn parse_struct_literal_block(
        &mut self,
        qualifier: Option<String>,
        name: String,
        token: Token,
    ) -> Expr {
        self.advance(); // Newline
        self.advance(); // Indent
        let mut fields = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                break;
            }
            let field_name = self.expect_name("a field name");
            self.expect_kind(TokenKind::Colon, "':'");
            let value = self.parse_expr();
            fields.push(StructField {
                name: field_name,
                value,
            });
        }
        self.expect_kind(TokenKind::Dedent, "a dedent ending the struct literal");
        Expr::StructLiteral {
            name,
            qualifier,
            fields,
            token,
        }
    }
}
