//! Lexer error definitions.

use smol_str::SmolStr;
use thiserror::Error;

/// A lexer error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("illegal character {text:?}")]
    UnexpectedChar {
        text: SmolStr,
        span: std::ops::Range<usize>,
    },
}

impl LexError {
    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            LexError::UnexpectedChar { span, .. } => span.clone(),
        }
    }
}
