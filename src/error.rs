/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// input line: unrecognized characters, oversized literals, and every kind of
/// grammar violation detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed tree, such as division
/// by zero, integer overflow, or a placeholder node that was never built.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError, SyntaxError};
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of the full tokenize, parse and evaluate pipeline.
///
/// Returned by [`crate::get_result`]. The wrapped error is forwarded unchanged
/// from the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree was parsed but could not be reduced to an integer.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(error.into())
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Parse(error.into())
    }
}
