//! Parser module for building the syntax tree of a TINY program.
//!
//! This module contains the recursive-descent parser that turns a stream of
//! tokens into a tree of statement and expression nodes. It handles:
//!
//! - Statement sequences and their terminators
//! - Statement parsing (if, repeat, assignment, read, write, while, do-while, for)
//! - Expressions over four precedence levels (relational, additive, multiplicative, factor)
//! - Error reporting and local recovery
//!
//! Statement dispatch goes through a token-kind lookup table and each binary
//! level asks the binding power table whether the lookahead is one of its
//! operators. Errors never stop the parse: they are recorded in
//! `Diagnostics` and a best-effort tree is still returned.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
