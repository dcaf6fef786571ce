//! Unit tests for the scanner.
//!
//! This module contains tests for tokenization including:
//! - Reserved words, including the hyphenated terminators
//! - Identifiers and numbers
//! - Operators and punctuation
//! - Comments and line tracking
//! - Error cases
//! - The `TokenStream` token source

use super::{
    lexer::tokenize,
    source::{TokenSource, TokenStream},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.tny".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "if then else end repeat until read write while end-while do end-do for to downto mod";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::End,
            TokenKind::Repeat,
            TokenKind::Until,
            TokenKind::Read,
            TokenKind::Write,
            TokenKind::While,
            TokenKind::EndWhile,
            TokenKind::Do,
            TokenKind::EndDo,
            TokenKind::For,
            TokenKind::To,
            TokenKind::DownTo,
            TokenKind::Mod,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo Bar endless dot".to_string();
    let tokens = tokenize(source, Some("test.tny".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "Bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "endless");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "dot");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 100".to_string();
    let tokens = tokenize(source, Some("test.tny".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds(":= = < > + - * / ( ) ;"),
        vec![
            TokenKind::Assign,
            TokenKind::Equals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_spaces() {
    assert_eq!(
        kinds("x:=x-1;write(x)"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Write,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_end_followed_by_minus_is_not_a_terminator() {
    // `end - whilex` is three tokens, not `end-while`
    assert_eq!(
        kinds("end-whilex"),
        vec![TokenKind::End, TokenKind::Dash, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("{ a comment } read x { another\n one }"),
        vec![TokenKind::Read, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_line_numbers() {
    let source = "read x;\n{ two\nline comment }\nwrite x\n".to_string();
    let tokens = tokenize(source, Some("test.tny".to_string())).unwrap();

    assert_eq!(tokens[0].line(), 1); // read
    assert_eq!(tokens[2].line(), 1); // ;
    assert_eq!(tokens[3].line(), 4); // write
    assert_eq!(tokens[4].line(), 4); // x
    assert_eq!(tokens[5].kind, TokenKind::EOF);
    assert_eq!(tokens[5].line(), 5);
    assert_eq!(tokens[0].position.1.as_str(), "test.tny");
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_character() {
    let result = tokenize("x := 1;\ny := @".to_string(), Some("test.tny".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_unterminated_comment() {
    let result = tokenize("read x { never closed".to_string(), None);

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.get_position().1.as_str(), "shell");
}

#[test]
fn test_token_descriptions() {
    let tokens = tokenize("if x 12 := end-do".to_string(), None).unwrap();

    assert_eq!(tokens[0].describe(), "reserved word: if");
    assert_eq!(tokens[1].describe(), "ID, name= x");
    assert_eq!(tokens[2].describe(), "NUM, val= 12");
    assert_eq!(tokens[3].describe(), ":=");
    assert_eq!(tokens[4].describe(), "reserved word: end-do");
    assert_eq!(tokens[5].describe(), "EOF");
}

#[test]
fn test_spelling_matches_scanner() {
    for kind in [TokenKind::EndWhile, TokenKind::Assign, TokenKind::Mod, TokenKind::Slash] {
        let spelling = kind.spelling().unwrap();
        let tokens = tokenize(spelling.to_string(), None).unwrap();
        assert_eq!(tokens[0].kind, kind);
    }
    assert_eq!(TokenKind::Identifier.spelling(), None);
}

#[test]
fn test_token_stream_repeats_eof() {
    let tokens = tokenize("read x".to_string(), None).unwrap();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Read);
    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_without_trailing_eof() {
    let mut tokens = tokenize("write 1".to_string(), None).unwrap();
    tokens.pop();
    let mut stream = TokenStream::new(tokens);

    stream.next_token();
    stream.next_token();
    let eof = stream.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.line(), 1);

    let mut empty = TokenStream::new(vec![]);
    assert_eq!(empty.next_token().kind, TokenKind::EOF);
}
