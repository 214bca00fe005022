//! The `Parser` type and the top-level grammar (spec §4.2.1): a Program is
//! an optional PackageDecl, an optional SkillDecl, zero or more ImportDecl,
//! then zero or more Declaration.
//!
//! Grammar-specific parsing lives in sibling modules (`decl`, `stmt`,
//! `expr`, `types`), each adding inherent methods to this same `Parser`.

use crate::ast::decl::{Decl, ImportDecl, PackageDecl, SkillDecl};
use crate::ast::Program;
use crate::error::{recover_to, DiagnosticReport, ParseError, SyncToken};
use crate::token::{Token, TokenKind, TokenStream};

pub struct Parser<S: TokenStream> {
    pub(crate) tokens: S,
    pub(crate) errors: DiagnosticReport,
    /// Nonzero while parsing an if/switch/for header expression. Suppresses
    /// the indented-block struct-literal continuation so a bare identifier
    /// condition doesn't swallow the statement block that follows it.
    pub(crate) control_header_depth: u32,
}

impl<S: TokenStream> Parser<S> {
    pub fn new(tokens: S) -> Self {
        Parser {
            tokens,
            errors: DiagnosticReport::new(),
            control_header_depth: 0,
        }
    }

    pub(crate) fn in_control_header(&self) -> bool {
        self.control_header_depth > 0
    }

    pub(crate) fn parse_header_expr(&mut self) -> crate::ast::expr::Expr {
        self.control_header_depth += 1;
        let expr = self.parse_expr();
        self.control_header_depth -= 1;
        expr
    }

    /// Parse a full Program, returning it alongside the collected
    /// diagnostics (spec §4.3: the parser always returns a Program plus an
    /// error vector).
    pub fn parse_program(mut self) -> (Program, DiagnosticReport) {
        let mut program = Program {
            package: None,
            skill: None,
            imports: Vec::new(),
            declarations: Vec::new(),
        };

        self.skip_newlines();
        if self.check(TokenKind::Petiole) {
            program.package = Some(self.parse_package_decl());
            self.skip_newlines();
        }
        if self.check(TokenKind::Skill) {
            program.skill = Some(self.parse_skill_decl());
            self.skip_newlines();
        }
        while self.check(TokenKind::Import) {
            program.imports.push(self.parse_import_decl());
            self.skip_newlines();
        }
        while !self.check(TokenKind::Eof) {
            self.skip_newlines();
            if self.check(TokenKind::Eof) {
                break;
            }
            program.declarations.push(self.parse_declaration());
            self.skip_newlines();
        }

        (program, self.errors)
    }

    // ---- top-level declarations ----------------------------------------

    fn parse_package_decl(&mut self) -> PackageDecl {
        let token = self.advance();
        let name = self.expect_name("a package name");
        PackageDecl { name, token }
    }

    fn parse_skill_decl(&mut self) -> SkillDecl {
        let token = self.advance();
        let name = self.expect_name("a skill name");
        let mut description = None;
        let mut version = None;

        if self.block_follows() {
            self.advance(); // Newline
            self.advance(); // Indent
            loop {
                self.skip_newlines();
                if self.check(TokenKind::Dedent) || self.check(TokenKind::Eof) {
                    break;
                }
                let field_name = self.expect_name("`description` or `version`");
                self.expect_kind(TokenKind::Colon, "':'");
                let value = self.expect_string("a string literal");
                match field_name.as_str() {
                    "description" => description = Some(value),
                    "version" => version = Some(value),
                    other => {
                        let span = self.peek().span.clone();
                        self.error(ParseError::Syntax {
                            message: format!(
                                "unknown skill field `{other}`; expected `description` or `version`"
                            ),
                            span,
                        });
                    }
                }
            }
            self.expect_kind(TokenKind::Dedent, "dedent ending skill block");
        }

        SkillDecl {
            name,
            description,
            version,
            token,
        }
    }

    fn parse_import_decl(&mut self) -> ImportDecl {
        let token = self.advance();
        let path = self.expect_string("an import path");
        let alias = if self.check(TokenKind::As) {
            self.advance();
            Some(self.expect_name("an alias"))
        } else {
            None
        };
        ImportDecl { path, alias, token }
    }

    fn parse_declaration(&mut self) -> Decl {
        match self.peek().kind {
            TokenKind::Type => self.parse_type_decl(),
            TokenKind::Interface => self.parse_interface_decl(),
            TokenKind::Func => self.parse_function_decl(),
            TokenKind::Var => self.parse_top_level_var_decl(),
            _ => {
                let token = self.peek().clone();
                self.error(ParseError::UnexpectedDeclaration {
                    span: token.span.clone(),
                });
                self.advance();
                recover_to(&mut self.tokens, &[SyncToken::DeclarationStart]);
                Decl::Error_(token)
            }
        }
    }

    // ---- core token helpers, shared by every grammar module ------------

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.peek()
    }

    pub(crate) fn peek_ahead_kind(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.peek_ahead(offset).map(|t| t.kind)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        self.tokens.consume()
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn error(&mut self, err: ParseError) {
        self.errors.push(err);
    }

    pub(crate) fn mark(&self) -> usize {
        self.tokens.position()
    }

    pub(crate) fn reset(&mut self, mark: usize) {
        self.tokens.seek(mark);
    }

    /// True when a Newline immediately followed by an Indent appears next
    /// — i.e. an indented block is about to start. Used to detect optional
    /// blocks (skill fields, else clauses) without consuming anything.
    pub(crate) fn block_follows(&self) -> bool {
        self.check(TokenKind::Newline) && self.peek_ahead_kind(1) == Some(TokenKind::Indent)
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Consume `kind`, or report a missing-token error and leave the
    /// cursor in place (spec §4.2: "for a missing expected token it
    /// synthesizes a null/placeholder node and continues").
    pub(crate) fn expect_kind(&mut self, kind: TokenKind, what: &str) -> Token {
        if self.check(kind) {
            self.advance()
        } else {
            let found = self.peek().clone();
            self.error(ParseError::UnexpectedToken {
                expected: what.to_string(),
                found: format!("{:?}", found.kind),
                span: found.span.clone(),
            });
            found
        }
    }

    /// An identifier name, falling back to the context-sensitive
    /// `list`/`map`/`channel`/`of` keyword lexemes when they appear where
    /// an identifier is expected (spec §4.1).
    pub(crate) fn expect_name(&mut self, what: &str) -> String {
        match self.peek().kind {
            TokenKind::Identifier
            | TokenKind::List
            | TokenKind::Map
            | TokenKind::Channel
            | TokenKind::Of => self.advance().lexeme,
            _ => {
                let found = self.peek().clone();
                self.error(ParseError::UnexpectedToken {
                    expected: what.to_string(),
                    found: format!("{:?}", found.kind),
                    span: found.span.clone(),
                });
                String::new()
            }
        }
    }

    pub(crate) fn expect_string(&mut self, what: &str) -> String {
        if self.check(TokenKind::String) {
            let token = self.advance();
            match token.literal {
                Some(petiole_lexer::LiteralValue::Str { value, .. }) => value,
                _ => String::new(),
            }
        } else {
            let found = self.peek().clone();
            self.error(ParseError::UnexpectedToken {
                expected: what.to_string(),
                found: format!("{:?}", found.kind),
                span: found.span.clone(),
            });
            String::new()
        }
    }
}
