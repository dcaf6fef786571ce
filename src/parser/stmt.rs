use crate::{
    ast::statements::{link_siblings, ForDirection, StmtKind, StmtNode},
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{
    expr::{parse_expr, parse_simple_expr},
    parser::Parser,
};

/// Tokens that end a statement sequence. They are left for the enclosing rule.
pub const STMT_SEQUENCE_TERMINATORS: [TokenKind; 7] = [
    TokenKind::EOF,
    TokenKind::End,
    TokenKind::Else,
    TokenKind::Until,
    TokenKind::While,
    TokenKind::EndWhile,
    TokenKind::EndDo,
];

/// `sequence := statement (';' statement)*`
///
/// Statements that fail to parse are left out of the chain. A missing `;` is
/// reported and the next statement is parsed anyway.
pub fn parse_stmt_sequence<S: TokenSource>(parser: &mut Parser<S>) -> Option<Box<StmtNode>> {
    let mut statements = Vec::new();
    statements.extend(parse_stmt(parser));

    while !STMT_SEQUENCE_TERMINATORS.contains(&parser.current_token_kind()) {
        parser.expect(TokenKind::Semicolon);
        statements.extend(parse_stmt(parser));
    }

    link_siblings(statements)
}

/// Picks the statement production from the lookahead.
///
/// A token that cannot start a statement is reported and always consumed.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<StmtNode> {
    match parser.stmt_handler(parser.current_token_kind()) {
        Some(handler) => Some(handler(parser)),
        None => {
            parser.report_unexpected();
            parser.advance();
            None
        }
    }
}

/// Consumes an identifier and returns its text, or reports and returns `None`.
fn parse_identifier<S: TokenSource>(parser: &mut Parser<S>) -> Option<String> {
    parser.expect(TokenKind::Identifier).map(|token| token.value)
}

pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    parser.expect(TokenKind::If);
    parser.expect(TokenKind::OpenParen);
    let condition = parse_expr(parser).map(Box::new);
    parser.expect(TokenKind::CloseParen);
    parser.expect(TokenKind::Then);
    let then_body = parse_stmt_sequence(parser);

    let else_body;
    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        else_body = parse_stmt_sequence(parser);
    } else {
        else_body = None;
    }

    parser.expect(TokenKind::End);

    StmtNode::new(
        StmtKind::If {
            condition,
            then_body,
            else_body,
        },
        line,
    )
}

pub fn parse_repeat_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    parser.expect(TokenKind::Repeat);
    let body = parse_stmt_sequence(parser);
    parser.expect(TokenKind::Until);
    let condition = parse_expr(parser).map(Box::new);

    StmtNode::new(StmtKind::Repeat { body, condition }, line)
}

pub fn parse_assign_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    let name = parse_identifier(parser);
    parser.expect(TokenKind::Assign);
    let value = parse_expr(parser).map(Box::new);

    StmtNode::new(StmtKind::Assign { name, value }, line)
}

pub fn parse_read_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    parser.expect(TokenKind::Read);
    let name = parse_identifier(parser);

    StmtNode::new(StmtKind::Read { name }, line)
}

pub fn parse_write_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    parser.expect(TokenKind::Write);
    let value = parse_expr(parser).map(Box::new);

    StmtNode::new(StmtKind::Write { value }, line)
}

pub fn parse_while_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    parser.expect(TokenKind::While);
    let condition = parse_expr(parser).map(Box::new);
    parser.expect(TokenKind::Do);
    let body = parse_stmt_sequence(parser);
    parser.expect(TokenKind::EndWhile);

    StmtNode::new(StmtKind::While { condition, body }, line)
}

/// `do seq while '(' exp ')'`; unlike `while`, the condition is parenthesized.
pub fn parse_do_while_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    parser.expect(TokenKind::Do);
    let body = parse_stmt_sequence(parser);
    parser.expect(TokenKind::While);
    parser.expect(TokenKind::OpenParen);
    let condition = parse_expr(parser).map(Box::new);
    parser.expect(TokenKind::CloseParen);

    StmtNode::new(StmtKind::DoWhile { body, condition }, line)
}

/// `for id ':=' simple-exp (to | downto) simple-exp do seq end-do`
pub fn parse_for_stmt<S: TokenSource>(parser: &mut Parser<S>) -> StmtNode {
    let line = parser.line();

    parser.expect(TokenKind::For);
    let name = parse_identifier(parser);
    parser.expect(TokenKind::Assign);
    let start = parse_simple_expr(parser).map(Box::new);

    let direction = match parser.current_token_kind() {
        TokenKind::To => {
            parser.advance();
            Some(ForDirection::To)
        }
        TokenKind::DownTo => {
            parser.advance();
            Some(ForDirection::DownTo)
        }
        _ => {
            let token = parser.current_token().describe();
            parser.report(ErrorImpl::UnexpectedTokenDetailed {
                token,
                message: String::from("expected `to` or `downto`"),
            });
            None
        }
    };

    let end = parse_simple_expr(parser).map(Box::new);
    parser.expect(TokenKind::Do);
    let body = parse_stmt_sequence(parser);
    parser.expect(TokenKind::EndDo);

    StmtNode::new(
        StmtKind::For {
            name,
            direction,
            start,
            end,
            body,
        },
        line,
    )
}
