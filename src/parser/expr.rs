use crate::{
    ast::expressions::ExprNode,
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// `exp := simple-exp [ ('<' | '=' | '>') simple-exp ]`
///
/// A single relational operator only: in `a < b < c` the second `<` is left
/// for the caller.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprNode> {
    let left = parse_simple_expr(parser);

    match parser.binary_operator(BindingPower::Relational) {
        Some(operator) => {
            let line = parser.line();
            parser.advance();
            let right = parse_simple_expr(parser);

            Some(ExprNode::op(operator, left, right, line))
        }
        None => left,
    }
}

/// `simple-exp := term (('+' | '-') term)*`, folded to the left.
pub fn parse_simple_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprNode> {
    parse_binary_chain(parser, BindingPower::Additive, parse_term::<S>)
}

/// `term := factor (('*' | '/' | 'mod') factor)*`, folded to the left.
pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprNode> {
    parse_binary_chain(parser, BindingPower::Multiplicative, parse_factor::<S>)
}

fn parse_binary_chain<S: TokenSource>(
    parser: &mut Parser<S>,
    level: BindingPower,
    operand: fn(&mut Parser<S>) -> Option<ExprNode>,
) -> Option<ExprNode> {
    let mut left = operand(parser);

    while let Some(operator) = parser.binary_operator(level) {
        let line = parser.line();
        parser.advance();
        let right = operand(parser);

        left = Some(ExprNode::op(operator, left, right, line));
    }

    left
}

/// `factor := NUM | ID | '(' exp ')'`
///
/// Any other token is reported and consumed.
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Option<ExprNode> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse::<i64>();

            match result {
                Ok(value) => Some(ExprNode::constant(value, parser.advance().line())),
                Err(_) => {
                    let token = parser.current_token().value.clone();
                    parser.report(ErrorImpl::NumberParseError { token });
                    parser.advance();
                    None
                }
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            let line = token.line();
            Some(ExprNode::id(token.value, line))
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser);
            parser.expect(TokenKind::CloseParen);

            expr
        }
        _ => {
            parser.report_unexpected();
            parser.advance();
            None
        }
    }
}
