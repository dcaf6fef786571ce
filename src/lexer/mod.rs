//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts TINY source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of reserved words (including `end-while` / `end-do`), identifiers and numbers
//! - Line tracking for error reporting
//! - `{ ... }` comments and whitespace
//!
//! The parser reads tokens through the `TokenSource` trait, so it can be
//! driven by `TokenStream` or any other supplier.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
