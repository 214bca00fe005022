//! Non-ASCII identifiers and NFC normalization.

use petiole_lexer::{lex, TokenKind};

#[test]
fn greek_letters_form_a_single_identifier() {
    let tokens = lex("αβγ\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "αβγ");
}

#[test]
fn underscore_prefixed_cyrillic_identifier() {
    let tokens = lex("_Привет\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "_Привет");
}

#[test]
fn katakana_identifier() {
    let tokens = lex("変数名\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "変数名");
}

#[test]
fn combining_tilde_normalizes_to_precomposed_n_with_tilde() {
    // U+006E (n) + U+0303 (combining tilde) should normalize to U+00F1 (ñ).
    let tokens = lex("n\u{0303}ombre\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "\u{00F1}ombre");
}

#[test]
fn combining_acute_normalizes_to_precomposed_i_with_acute() {
    let tokens = lex("vari\u{0301}vel\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "var\u{00ED}vel");
}
