//! Error recovery: advance-and-resume at declaration boundaries, and
//! synthetic placeholder nodes in place of a missing required token
//! (spec §4.2, §9 "favor synthetic placeholder nodes over panic-and-skip").

use crate::token::{TokenKind, TokenStream};

/// Sets of tokens recognized as synchronization points during panic-mode
/// recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncToken {
    DeclarationStart,
    StatementStart,
    BlockEnd,
}

impl SyncToken {
    pub fn matches(self, kind: TokenKind) -> bool {
        match self {
            SyncToken::DeclarationStart => matches!(
                kind,
                TokenKind::Type | TokenKind::Interface | TokenKind::Func | TokenKind::Var
            ),
            SyncToken::StatementStart => matches!(
                kind,
                TokenKind::Return
                    | TokenKind::If
                    | TokenKind::Switch
                    | TokenKind::Select
                    | TokenKind::For
                    | TokenKind::Defer
                    | TokenKind::Go
                    | TokenKind::Send
                    | TokenKind::Break
                    | TokenKind::Continue
                    | TokenKind::Var
            ),
            SyncToken::BlockEnd => matches!(kind, TokenKind::Dedent | TokenKind::Eof),
        }
    }
}

/// Skip tokens until one of `sync` matches the current token, or EOF.
/// Used at a declaration or statement boundary after an unexpected token
/// has already been reported.
pub fn recover_to<S: TokenStream>(tokens: &mut S, sync: &[SyncToken]) {
    while !tokens.is_at_end() {
        let kind = tokens.peek().kind;
        if sync.iter().any(|s| s.matches(kind)) {
            return;
        }
        tokens.consume();
    }
}
