//! Parser state and the parse entry point.
//!
//! This module contains the `Parser` struct, which buffers exactly one
//! lookahead token pulled from a `TokenSource`, and the functions that run a
//! whole parse. It maintains lookup tables for:
//! - Statement handlers, keyed by the token that starts the statement
//! - Binding powers of the binary operators

use std::collections::HashMap;

use crate::{
    ast::{
        expressions::Operator,
        statements::{Siblings, StmtNode},
    },
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::tokenize,
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt_sequence,
};

/// The main parser structure that maintains parsing state.
pub struct Parser<S: TokenSource> {
    /// Where tokens are pulled from
    source: S,
    /// The lookahead token
    current: Token,
    /// Errors recorded so far
    diagnostics: Diagnostics,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    /// Lookup table for binary operator binding powers
    binding_power_lookup: BPLookup,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser and pulls the first lookahead token.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();

        Parser {
            source,
            current,
            diagnostics: Diagnostics::new(),
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Line of the current token, used to tag nodes created at this point.
    pub fn line(&self) -> u32 {
        self.current.line()
    }

    pub fn get_position(&self) -> Position {
        self.current.position.clone()
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        tracing::trace!(token = %next, line = next.line(), "advance");
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// On a mismatch the error is recorded and the current token is left in
    /// place, so later expectations see the same token again.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.current.kind == expected_kind {
            Some(self.advance())
        } else {
            self.report_unexpected();
            None
        }
    }

    /// Records an error at the current token.
    pub fn report(&mut self, error: ErrorImpl) {
        let position = self.get_position();
        self.diagnostics.report(error, position);
    }

    pub fn report_unexpected(&mut self) {
        let token = self.current.describe();
        self.report(ErrorImpl::UnexpectedToken { token });
    }

    pub fn get_diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Returns the handler for statements starting with `kind`, if any.
    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler<S>> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// The current token as an operator, if it belongs to the given level.
    pub fn binary_operator(&self, level: BindingPower) -> Option<Operator> {
        let kind = self.current_token_kind();
        if self.binding_power(kind) == level {
            Operator::from_token_kind(kind)
        } else {
            None
        }
    }

    /// Registers a binary operator at the given precedence level.
    pub fn binary(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Result of a parse: the (possibly partial) tree and the errors met on the way.
#[derive(Debug)]
pub struct ParseOutput {
    pub root: Option<Box<StmtNode>>,
    pub diagnostics: Diagnostics,
}

impl ParseOutput {
    /// True when any syntax error was recorded; the tree should not be
    /// handed to later phases in that case.
    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    /// Top-level statements in program order.
    pub fn statements(&self) -> Siblings<'_> {
        Siblings::new(self.root.as_deref())
    }
}

/// Parses a whole program from a token source.
///
/// Pulls the first token, parses the top-level statement sequence and
/// checks that it ends at `EOF`. Never fails: syntax errors are collected in
/// the returned `ParseOutput`.
#[tracing::instrument(skip_all)]
pub fn parse<S: TokenSource>(source: S) -> ParseOutput {
    let mut parser = Parser::new(source);
    create_token_lookups(&mut parser);

    let root = parse_stmt_sequence(&mut parser);

    if parser.current_token_kind() != TokenKind::EOF {
        let token = parser.current_token().describe();
        parser.report(ErrorImpl::TrailingInput { token });
    }

    let output = ParseOutput {
        root,
        diagnostics: parser.into_diagnostics(),
    };
    tracing::debug!(
        statements = output.statements().count(),
        errors = output.diagnostics.len(),
        "parsed"
    );

    output
}

/// Scans and parses source text.
///
/// Scanner errors stop the pipeline and are returned as `Err`; syntax
/// errors are reported through `ParseOutput::diagnostics`.
pub fn parse_source(source: String, file: Option<String>) -> Result<ParseOutput, Error> {
    let tokens = tokenize(source, file)?;
    Ok(parse(TokenStream::new(tokens)))
}
