use std::{rc::Rc, vec::IntoIter};

use crate::Position;

use super::tokens::{Token, TokenKind};

/// Pull-based supply of tokens for the parser.
///
/// Once the end of input has been reached every further call keeps
/// returning an `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A `TokenSource` over an already scanned token list.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::EOF => last.clone(),
            Some(last) => Token::new(TokenKind::EOF, "EOF", last.position.clone()),
            None => Token::new(TokenKind::EOF, "EOF", Position(1, Rc::new(String::from("shell")))),
        };

        TokenStream {
            tokens: tokens.into_iter(),
            eof,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof.clone())
    }
}
