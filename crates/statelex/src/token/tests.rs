use pretty_assertions::assert_eq;

use super::*;

// === TokenType ===

#[test]
fn reserved_types_are_distinct() {
    assert_ne!(TokenType::EOF, TokenType::ILLEGAL);
    assert_eq!(TokenType::EOF.as_str(), "EOF");
    assert_eq!(TokenType::ILLEGAL.as_str(), "ILLEGAL");
}

#[test]
fn consumer_vocabulary_compares_by_name() {
    const WORD: TokenType = TokenType("WORD");
    assert_eq!(WORD, TokenType("WORD"));
    assert_ne!(WORD, TokenType("NUMBER"));
    assert_ne!(WORD, TokenType::EOF);
}

#[test]
fn type_displays_as_its_name() {
    assert_eq!(TokenType("NUMBER").to_string(), "NUMBER");
    assert_eq!(TokenType::EOF.to_string(), "EOF");
}

// === Token ===

#[test]
fn eof_token_has_empty_literal() {
    let token = Token::eof();
    assert_eq!(token.kind, TokenType::EOF);
    assert_eq!(token.literal, "");
    assert!(token.is_eof());
    assert!(!token.is_illegal());
}

#[test]
fn borrowed_and_owned_literals_compare_equal() {
    let borrowed = Token::new(TokenType("WORD"), "this");
    let owned = Token::new(TokenType("WORD"), String::from("this"));
    assert_eq!(borrowed, owned);
}

#[test]
fn illegal_token_is_flagged() {
    let token = Token::new(TokenType::ILLEGAL, "bad punctuation");
    assert!(token.is_illegal());
    assert!(!token.is_eof());
}

#[test]
fn token_displays_kind_and_literal() {
    let token = Token::new(TokenType("WORD"), "this");
    assert_eq!(token.to_string(), "WORD(\"this\")");
    assert_eq!(Token::eof().to_string(), "EOF(\"\")");
}
