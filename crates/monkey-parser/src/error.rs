//! Parser error definitions.

use monkey_ast::IncompleteNode;
use monkey_lexer::{LexError, TokenKind};
use smol_str::SmolStr;
use thiserror::Error;

/// A parser error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: std::ops::Range<usize>,
    },

    #[error("no prefix parse rule for {found}")]
    NoPrefixRule {
        found: TokenKind,
        span: std::ops::Range<usize>,
    },

    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        literal: SmolStr,
        span: std::ops::Range<usize>,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    /// A draft was finished with a slot still empty. Every parse function
    /// attaches all children before finishing, so this indicates a parser
    /// bug rather than bad input; it is reported instead of panicking.
    #[error(transparent)]
    Incomplete(#[from] IncompleteNode),
}

impl ParseError {
    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            ParseError::UnexpectedToken { span, .. } => span.clone(),
            ParseError::NoPrefixRule { span, .. } => span.clone(),
            ParseError::InvalidInteger { span, .. } => span.clone(),
            ParseError::Lex(err) => err.span(),
            ParseError::Incomplete(err) => err.span(),
        }
    }
}
