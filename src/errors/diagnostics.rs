use std::slice::Iter;

use crate::Position;

use super::errors::{Error, ErrorImpl};

/// Append-only collection of the errors recorded during one parse.
///
/// Owned by the parser while it runs and handed back to the caller in
/// `ParseOutput`; callers check `had_error()` before passing the tree on.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: Vec::new() }
    }

    pub fn report(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        tracing::debug!(line = error.get_line(), "{}", error);
        self.errors.push(error);
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
