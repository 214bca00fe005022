//! Keyword classification: unconditional keywords, the context-sensitive
//! `list`/`map`/`channel`/`of` group, and identifiers that only look like
//! keywords (`description`, `version`, `_`).

use petiole_lexer::{lex, TokenKind};

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn structural_and_value_keywords_are_recognized() {
    use TokenKind::*;
    assert_eq!(kinds("func\n")[0], Func);
    assert_eq!(kinds("onerr\n")[0], Onerr);
    assert_eq!(kinds("make\n")[0], Make);
    assert_eq!(kinds("discard\n")[0], Discard);
    assert_eq!(kinds("reference\n")[0], Reference);
}

#[test]
fn word_operators_are_recognized() {
    use TokenKind::*;
    assert_eq!(kinds("and\n")[0], And);
    assert_eq!(kinds("or\n")[0], Or);
    assert_eq!(kinds("not\n")[0], Not);
    assert_eq!(kinds("equals\n")[0], Equals);
}

#[test]
fn list_map_channel_of_lex_as_keywords_unconditionally() {
    use TokenKind::*;
    assert_eq!(kinds("list of string\n")[..2], [List, Of]);
    assert_eq!(kinds("map of string to int\n")[..2], [Map, Of]);
    assert_eq!(kinds("channel of int\n")[..2], [Channel, Of]);
}

#[test]
fn description_and_version_are_never_keywords() {
    use TokenKind::*;
    assert_eq!(kinds("description\nversion\n"), vec![Identifier, Newline, Identifier, Eof]);
}

#[test]
fn underscore_lexes_as_a_plain_identifier() {
    let tokens = lex("_\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "_");
}

#[test]
fn identifiers_may_contain_digits_and_underscores_after_the_first_letter() {
    let tokens = lex("x1_2\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "x1_2");
}

#[test]
fn keyword_prefixed_identifiers_are_not_misclassified() {
    // `forever` must not be lexed as `for` + `ever`.
    let tokens = lex("forever\n").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "forever");
}

#[test]
fn true_and_false_carry_bool_literals() {
    use petiole_lexer::LiteralValue;
    let tokens = lex("true\nfalse\n").unwrap();
    assert_eq!(tokens[0].literal, Some(LiteralValue::Bool(true)));
    assert_eq!(tokens[2].literal, Some(LiteralValue::Bool(false)));
}
