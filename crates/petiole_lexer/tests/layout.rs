//! Indentation-sensitive layout: INDENT/DEDENT emission, bracket-depth
//! suppression, blank/comment-only lines, and the fatal layout errors.

use petiole_lexer::{lex, LexError, TokenKind};

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn nested_indent_then_full_dedent() {
    let src = "func F()\n    if x\n        g()\n    h()\n";
    let ks = kinds(src);
    let indents = ks.iter().filter(|k| **k == TokenKind::Indent).count();
    let dedents = ks.iter().filter(|k| **k == TokenKind::Dedent).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
    assert_eq!(ks.last(), Some(&TokenKind::Eof));
}

#[test]
fn trailing_unindent_at_eof_still_closes_every_block() {
    let src = "func F()\n    if x\n        g()\n";
    let ks = kinds(src);
    let trailing: Vec<_> = ks.iter().rev().take(3).cloned().collect();
    assert_eq!(trailing, vec![TokenKind::Eof, TokenKind::Dedent, TokenKind::Dedent]);
}

#[test]
fn same_indent_separates_statements_with_one_newline() {
    let src = "func F()\n    a()\n    b()\n";
    let ks = kinds(src);
    let runs = ks
        .windows(2)
        .filter(|w| w[0] == TokenKind::Newline && w[1] == TokenKind::Newline)
        .count();
    assert_eq!(runs, 0);
}

#[test]
fn blank_and_comment_only_lines_are_invisible_to_layout() {
    let with_noise = kinds("func F()\n    # a comment\n\n    x := 1\n");
    let without_noise = kinds("func F()\n    x := 1\n");
    assert_eq!(with_noise, without_noise);
}

#[test]
fn bracket_depth_suppresses_layout_across_newlines() {
    let src = "x := (\n    1,\n    2,\n)\n";
    let ks = kinds(src);
    assert!(!ks.contains(&TokenKind::Indent));
    assert!(!ks.contains(&TokenKind::Dedent));
}

#[test]
fn bracket_depth_suppression_nests_across_bracket_kinds() {
    let src = "x := [\n    (1, 2),\n    (3, 4),\n]\n";
    let ks = kinds(src);
    assert!(!ks.contains(&TokenKind::Indent));
    assert!(!ks.contains(&TokenKind::Dedent));
}

#[test]
fn tab_in_indentation_is_fatal() {
    let src = "func F()\n\tx := 1\n";
    assert!(matches!(lex(src), Err(LexError::TabInIndentation { .. })));
}

#[test]
fn inconsistent_dedent_is_fatal() {
    let src = "func F()\n    if x\n        y := 1\n      z := 2\n";
    assert!(matches!(lex(src), Err(LexError::InconsistentIndentation { .. })));
}

#[test]
fn unmatched_opening_bracket_is_fatal_at_eof() {
    let src = "x := (1, 2\n";
    assert!(matches!(lex(src), Err(LexError::UnmatchedBracket { .. })));
}

#[test]
fn whitespace_only_source_has_no_content_line_to_indent() {
    let ks = kinds("   \n");
    assert_eq!(ks, vec![TokenKind::Eof]);
}
