//! Type, interface, function, and top-level var declarations
//! (spec §4.2.2-4.2.4).

use crate::ast::decl::{
    Decl, FunctionDecl, InterfaceDecl, MethodSignature, Param, Receiver, StructField,
    TopLevelVarDecl, TypeDecl, TypeDeclBody,
};
use crate::ast::ty::Type;
use crate::error::ParseError;
use crate::program::Parser;
use crate::token::{TokenKind, TokenStream};

impl<S: TokenStream> Parser<S> {
    pub(crate) fn parse_type_decl(&mut self) -> Decl {
        let token = self.advance();
        let name = self.expect_name("a type name");

        if self.block_follows() {
            self.advance(); // Newline
            self.advance(); // Indent
            let mut fields = Vec::new();
            loop {
                self.skip_newlines();
                if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                    break;
                }
                fields.push(self.parse_struct_field());
            }
            self.expect_kind(TokenKind::Dedent, "dedent ending type block");
            Decl::Type(TypeDecl {
                name,
                body: TypeDeclBody::Struct(fields),
                token,
            })
        } else {
            let ty = self.parse_type();
            Decl::Type(TypeDecl {
                name,
                body: TypeDeclBody::Alias(ty),
                token,
            })
        }
    }

    fn parse_struct_field(&mut self) -> StructField {
        let name = self.expect_name("a field name");
        let ty = self.parse_type();
        let mut alias = None;
        let mut tag = None;

        if self.match_kind(TokenKind::As) {
            alias = Some(self.expect_string("a json field name"));
        }

        if self.check(TokenKind::Identifier) && self.peek_ahead_kind(1) == Some(TokenKind::Colon) {
            let key_token = self.advance();
            self.advance(); // ':'
            let value = self.expect_string("a tag value");
            if alias.is_some() {
                self.error(ParseError::AliasAndTag {
                    span: key_token.span.clone(),
                });
            } else {
                tag = Some((key_token.lexeme, value));
            }
        }

        StructField {
            name,
            ty,
            alias,
            tag,
        }
    }

    pub(crate) fn parse_interface_decl(&mut self) -> Decl {
        let token = self.advance();
        let name = self.expect_name("an interface name");
        self.expect_kind(TokenKind::Newline, "newline before interface body");
        self.expect_kind(TokenKind::Indent, "indented interface body");
        let mut methods = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                break;
            }
            methods.push(self.parse_method_signature());
        }
        self.expect_kind(TokenKind::Dedent, "dedent ending interface body");
        Decl::Interface(InterfaceDecl {
            name,
            methods,
            token,
        })
    }

    fn parse_method_signature(&mut self) -> MethodSignature {
        let token = self.peek().clone();
        let name = self.expect_name("a method name");
        let params = self.parse_params();
        let returns = self.parse_optional_return_types();
        MethodSignature {
            name,
            params,
            returns,
            token,
        }
    }

    pub(crate) fn parse_function_decl(&mut self) -> Decl {
        let token = self.advance();
        let name = self.expect_name("a function name");

        let receiver = if self.match_kind(TokenKind::On) {
            let recv_name = self.expect_name("a receiver name");
            let recv_ty = self.parse_type();
            Some(Receiver {
                name: recv_name,
                ty: recv_ty,
            })
        } else {
            None
        };

        let params = if self.check(TokenKind::LParen) {
            self.parse_params()
        } else {
            Vec::new()
        };
        let returns = self.parse_optional_return_types();
        let body = self.parse_block();

        Decl::Function(FunctionDecl {
            name,
            receiver,
            params,
            returns,
            body,
            token,
        })
    }

    /// Shared by function declarations, method receivers, and interface
    /// method signatures. Enforces: defaults form a contiguous suffix,
    /// variadic parameters carry no default, and a variadic parameter (if
    /// any) is last (spec §4.2.4).
    pub(crate) fn parse_params(&mut self) -> Vec<Param> {
        self.expect_kind(TokenKind::LParen, "'('");
        let mut params = Vec::new();
        let mut seen_default = false;
        let mut seen_variadic = false;

        if !self.check(TokenKind::RParen) {
            loop {
                let is_variadic = self.match_kind(TokenKind::Many);
                let name_token = self.peek().clone();
                let name = self.expect_name("a parameter name");
                // An untyped `many` parameter defaults to `any` rather than
                // reporting a missing type (spec §4.2.4).
                let ty = if is_variadic && !self.starts_type() {
                    Type::Primitive {
                        name: "any".to_string(),
                        token: name_token.clone(),
                    }
                } else {
                    self.parse_type()
                };
                let default = if self.match_kind(TokenKind::Assign) {
                    Some(self.parse_expr())
                } else {
                    None
                };

                if seen_variadic {
                    self.error(ParseError::VariadicNotLast {
                        span: name_token.span.clone(),
                        name: name.clone(),
                    });
                }
                if is_variadic && default.is_some() {
                    self.error(ParseError::VariadicWithDefault {
                        span: name_token.span.clone(),
                        name: name.clone(),
                    });
                }
                if default.is_some() {
                    seen_default = true;
                } else if seen_default && !is_variadic {
                    self.error(ParseError::DefaultParamOrder {
                        span: name_token.span.clone(),
                    });
                }
                if is_variadic {
                    seen_variadic = true;
                }

                params.push(Param {
                    name,
                    ty,
                    default,
                    is_variadic,
                });

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_kind(TokenKind::RParen, "')'");
        params
    }

    pub(crate) fn parse_top_level_var_decl(&mut self) -> Decl {
        let token = self.advance();
        let mut names = vec![self.expect_name("a variable name")];
        while self.match_kind(TokenKind::Comma) {
            names.push(self.expect_name("a variable name"));
        }
        self.expect_kind(TokenKind::Assign, "'='");
        let mut values = vec![self.parse_expr()];
        while self.match_kind(TokenKind::Comma) {
            values.push(self.parse_expr());
        }
        Decl::Var(TopLevelVarDecl {
            names,
            values,
            token,
        })
    }
}
