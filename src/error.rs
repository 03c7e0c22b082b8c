//! Error conditions raised by the token primitives and the extraction layer.

use thiserror::Error;

/// Errors that can occur while matching, slicing or walking a token sequence.
///
/// None of these are transient: the input is already in memory, so a caller
/// either fixes the input or gives up on that unit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A token predicate could not be built from the given description.
    #[error("invalid token predicate: {0}")]
    InvalidPredicate(String),
    /// A slice was requested with its end before its start.
    #[error("endIndex ({end}) must be greater than startIndex ({start})")]
    OutOfOrderRange { start: usize, end: usize },
    /// Line bounds were requested for tokens that carry no line number.
    #[error("no line number found in the given tokens")]
    NoLineInformation,
    /// Delimiters are unbalanced or the sequence is truncated.
    #[error("structural mismatch at token {index}: {reason}")]
    StructuralMismatch { index: usize, reason: String },
    /// The navigator was asked to start from something that is not an opening delimiter.
    #[error("token at {index} is not an opening delimiter")]
    NotADelimiter { index: usize },
}

pub type Result<T> = std::result::Result<T, TokenError>;
