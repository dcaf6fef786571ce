//! Error types and error collection for the front end.
//!
//! This module defines:
//!
//! - Error structures carrying the source line they refer to
//! - Specific error variants for the scanner and the parser
//! - Short suggestions shown alongside rendered errors
//! - The `Diagnostics` accumulator the parser records syntax errors into

pub mod diagnostics;
pub mod errors;
