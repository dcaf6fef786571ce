use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("until", TokenKind::Until);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("to", TokenKind::To);
        map.insert("downto", TokenKind::DownTo);
        map.insert("mod", TokenKind::Mod);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenParen,
    CloseParen,
    Semicolon,
    Assign, // :=

    Less,
    Equals,
    Greater,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
    While,
    EndWhile,
    Do,
    EndDo,
    For,
    To,
    DownTo,
    Mod,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
                | TokenKind::While
                | TokenKind::EndWhile
                | TokenKind::Do
                | TokenKind::EndDo
                | TokenKind::For
                | TokenKind::To
                | TokenKind::DownTo
                | TokenKind::Mod
        )
    }

    /// Source spelling of keywords and symbols; `None` for tokens whose text varies.
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::EOF | TokenKind::Number | TokenKind::Identifier => return None,
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Assign => ":=",
            TokenKind::Less => "<",
            TokenKind::Equals => "=",
            TokenKind::Greater => ">",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::While => "while",
            TokenKind::EndWhile => "end-while",
            TokenKind::Do => "do",
            TokenKind::EndDo => "end-do",
            TokenKind::For => "for",
            TokenKind::To => "to",
            TokenKind::DownTo => "downto",
            TokenKind::Mod => "mod",
        };
        Some(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: &str, position: Position) -> Self {
        Token {
            kind,
            value: String::from(value),
            position,
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line()
    }

    /// Listing form of the token, e.g. `reserved word: if`, `ID, name= x`, `NUM, val= 5`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("EOF"),
            TokenKind::Number => format!("NUM, val= {}", self.value),
            TokenKind::Identifier => format!("ID, name= {}", self.value),
            kind if kind.is_reserved() => format!("reserved word: {}", self.value),
            _ => self.value.clone(),
        }
    }
}
