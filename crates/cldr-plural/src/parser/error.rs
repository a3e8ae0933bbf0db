//! Parse error types for plural rules.

use thiserror::Error;

/// An error raised while tokenizing or parsing a plural rule.
///
/// Offsets are byte offsets into the rule text as passed in, sample
/// annotations included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token rule matched at `offset`.
    #[error("malformed plural rule: unexpected '{found}' at offset {offset}")]
    UnexpectedCharacter {
        offset: usize,
        found: char,
        /// The unscanned rest of the rule, starting at `found`.
        remainder: String,
    },

    /// A token other than the one the grammar requires.
    #[error("expected {expected} but got '{found}'")]
    UnexpectedToken {
        expected: String,
        found: String,
        offset: usize,
    },

    /// The rule ended where the grammar requires another token.
    #[error("expected {expected} but end of rule reached")]
    UnexpectedEnd { expected: String },

    /// `not` used without `in` or `within`, e.g. `n not = 3`.
    #[error("cannot negate operator based rules: got '{found}' after 'not'")]
    NegatedOperator { found: String, offset: usize },

    /// A complete condition was parsed but tokens remain.
    #[error("expected end of rule, got '{found}'")]
    TrailingInput { found: String, offset: usize },

    /// An integer literal too large to represent.
    #[error("value '{text}' is out of range")]
    ValueOutOfRange { text: String, offset: usize },
}

impl ParseError {
    /// Byte offset of the offending input, when the error points at a token.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCharacter { offset, .. }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::NegatedOperator { offset, .. }
            | ParseError::TrailingInput { offset, .. }
            | ParseError::ValueOutOfRange { offset, .. } => Some(*offset),
            ParseError::UnexpectedEnd { .. } => None,
        }
    }
}
