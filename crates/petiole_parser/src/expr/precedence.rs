//! Precedence-climbing levels, lowest to highest (spec §4.2.7):
//! or, pipe, and, bitor, comparison, additive, multiplicative. Unary,
//! postfix, and primary live in `parser`.
//!
//! All binary operators left-associate. Comparison does not chain — it
//! parses at most one pair per level descent (spec invariant I4/I5).

use crate::ast::expr::{BinaryOp, Expr};
use crate::program::Parser;
use crate::token::{TokenKind, TokenStream};

impl<S: TokenStream> Parser<S> {
    pub(crate) fn parse_expr(&mut self) -> Expr {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Expr {
        let mut left = self.parse_pipe();
        while self.check(TokenKind::Or) {
            let token = self.advance();
            let right = self.parse_pipe();
            left = Expr::Binary {
                op: BinaryOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
        }
        left
    }

    fn parse_pipe(&mut self) -> Expr {
        let mut left = self.parse_and();
        while self.check(TokenKind::Pipe) {
            let token = self.advance();
            let right = self.parse_and();
            left = Expr::Pipe {
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
        }
        left
    }

    fn parse_and(&mut self) -> Expr {
        let mut left = self.parse_bitor();
        while self.check(TokenKind::And) {
            let token = self.advance();
            let right = self.parse_bitor();
            left = Expr::Binary {
                op: BinaryOp::And,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
        }
        left
    }

    fn parse_bitor(&mut self) -> Expr {
        let mut left = self.parse_comparison();
        while self.check(TokenKind::BitOr) {
            let token = self.advance();
            let right = self.parse_comparison();
            left = Expr::Binary {
                op: BinaryOp::BitOr,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
        }
        left
    }

    /// `==`, `!=`, `<`, `>`, `<=`, `>=`, `equals`, `not equals`, `in`,
    /// `not in` — exactly one pair, never chained (spec I5).
    fn parse_comparison(&mut self) -> Expr {
        let left = self.parse_additive();
        let (op, token) = match self.peek().kind {
            TokenKind::DoubleEquals => (BinaryOp::Eq, self.advance()),
            TokenKind::NotEquals => (BinaryOp::NotEq, self.advance()),
            TokenKind::Lt => (BinaryOp::Lt, self.advance()),
            TokenKind::Gt => (BinaryOp::Gt, self.advance()),
            TokenKind::Lte => (BinaryOp::Lte, self.advance()),
            TokenKind::Gte => (BinaryOp::Gte, self.advance()),
            TokenKind::Equals => (BinaryOp::Eq, self.advance()),
            TokenKind::In => (BinaryOp::In, self.advance()),
            TokenKind::Not if self.peek_ahead_kind(1) == Some(TokenKind::Equals) => {
                let token = self.advance();
                self.advance();
                (BinaryOp::NotEq, token)
            }
            TokenKind::Not if self.peek_ahead_kind(1) == Some(TokenKind::In) => {
                let token = self.advance();
                self.advance();
                (BinaryOp::NotIn, token)
            }
            _ => return left,
        };
        let right = self.parse_additive();
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            token,
        }
    }

    fn parse_additive(&mut self) -> Expr {
        let mut left = self.parse_multiplicative();
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let token = self.advance();
            let right = self.parse_multiplicative();
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
        }
        left
    }

    fn parse_multiplicative(&mut self) -> Expr {
        let mut left = self.parse_unary();
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Rem,
                _ => break,
            };
            let token = self.advance();
            let right = self.parse_unary();
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
        }
        left
    }
}
