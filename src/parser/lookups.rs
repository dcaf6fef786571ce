use std::collections::HashMap;

use crate::{ast::statements::StmtNode, lexer::{source::TokenSource, tokens::TokenKind}};

use super::{parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler<S> = fn(&mut Parser<S>) -> StmtNode;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Relational, at most one per expression
    parser.binary(TokenKind::Less, BindingPower::Relational);
    parser.binary(TokenKind::Equals, BindingPower::Relational);
    parser.binary(TokenKind::Greater, BindingPower::Relational);

    // Additive and multiplicative
    parser.binary(TokenKind::Plus, BindingPower::Additive);
    parser.binary(TokenKind::Dash, BindingPower::Additive);
    parser.binary(TokenKind::Star, BindingPower::Multiplicative);
    parser.binary(TokenKind::Slash, BindingPower::Multiplicative);
    parser.binary(TokenKind::Mod, BindingPower::Multiplicative);

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt::<S>);
    parser.stmt(TokenKind::Repeat, parse_repeat_stmt::<S>);
    parser.stmt(TokenKind::Identifier, parse_assign_stmt::<S>);
    parser.stmt(TokenKind::Read, parse_read_stmt::<S>);
    parser.stmt(TokenKind::Write, parse_write_stmt::<S>);
    parser.stmt(TokenKind::While, parse_while_stmt::<S>);
    parser.stmt(TokenKind::Do, parse_do_while_stmt::<S>);
    parser.stmt(TokenKind::For, parse_for_stmt::<S>);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
