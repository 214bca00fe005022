//! Type annotation grammar (spec §4.2.8).

use crate::ast::ty::{Type, PRIMITIVE_NAMES};
use crate::error::ParseError;
use crate::program::Parser;
use crate::token::{TokenKind, TokenStream};

impl<S: TokenStream> Parser<S> {
    pub fn parse_type(&mut self) -> Type {
        match self.peek().kind {
            TokenKind::Reference => {
                let token = self.advance();
                let inner = Box::new(self.parse_type());
                Type::Reference { inner, token }
            }
            TokenKind::List => {
                let token = self.advance();
                self.expect_kind(TokenKind::Of, "'of'");
                let element = Box::new(self.parse_type());
                Type::List { element, token }
            }
            TokenKind::Map => {
                let token = self.advance();
                self.expect_kind(TokenKind::Of, "'of'");
                let key = Box::new(self.parse_type());
                self.expect_kind(TokenKind::To, "'to'");
                let value = Box::new(self.parse_type());
                Type::Map { key, value, token }
            }
            TokenKind::Channel => {
                let token = self.advance();
                self.expect_kind(TokenKind::Of, "'of'");
                let element = Box::new(self.parse_type());
                Type::Channel { element, token }
            }
            TokenKind::Func => {
                let token = self.advance();
                self.expect_kind(TokenKind::LParen, "'('");
                let mut params = Vec::new();
                if !self.check(TokenKind::RParen) {
                    loop {
                        params.push(self.parse_type());
                        if !self.match_kind(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.expect_kind(TokenKind::RParen, "')'");
                let returns = self.parse_optional_return_types();
                Type::Function {
                    params,
                    returns,
                    token,
                }
            }
            TokenKind::Error => {
                let token = self.advance();
                Type::Named {
                    qualifier: None,
                    name: "error".to_string(),
                    token,
                }
            }
            TokenKind::Identifier => {
                let token = self.advance();
                let name = token.lexeme.clone();
                if self.check(TokenKind::Dot) {
                    self.advance();
                    let member = self.expect_name("a type name");
                    Type::Named {
                        qualifier: Some(name),
                        name: member,
                        token,
                    }
                } else if PRIMITIVE_NAMES.contains(&name.as_str()) {
                    Type::Primitive { name, token }
                } else {
                    Type::Named {
                        qualifier: None,
                        name,
                        token,
                    }
                }
            }
            _ => {
                let found = self.peek().clone();
                self.error(ParseError::ExpectedType {
                    span: found.span.clone(),
                });
                Type::Named {
                    qualifier: None,
                    name: String::new(),
                    token: found,
                }
            }
        }
    }

    /// True when the current token could start a type annotation. Used to
    /// detect optional return types without committing to parsing one.
    pub(crate) fn starts_type(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Reference
                | TokenKind::List
                | TokenKind::Map
                | TokenKind::Channel
                | TokenKind::Func
                | TokenKind::Error
                | TokenKind::Identifier
        )
    }

    /// Zero, one, or a parenthesized comma-separated list of return types
    /// (spec §4.2.4, §4.2.8).
    pub(crate) fn parse_optional_return_types(&mut self) -> Vec<Type> {
        if self.check(TokenKind::LParen) {
            self.advance();
            let mut returns = Vec::new();
            if !self.check(TokenKind::RParen) {
                loop {
                    returns.push(self.parse_type());
                    if !self.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect_kind(TokenKind::RParen, "')'");
            returns
        } else if self.starts_type() {
            vec![self.parse_type()]
        } else {
            Vec::new()
        }
    }
}
