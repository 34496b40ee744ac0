//! High-level lexer interface.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use logos::Logos;

/// A lexer for Monkey source code.
///
/// Wraps the logos-generated lexer, attaches literal text to every token and
/// terminates the stream with exactly one `Eof` token.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
    peeked: Option<Result<Token, LexError>>,
    /// Track if we've emitted EOF
    done: bool,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            peeked: None,
            done: false,
        }
    }

    /// Peek at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Result<Token, LexError>> {
        if self.peeked.is_none() {
            self.peeked = self.next_inner();
        }
        self.peeked.as_ref()
    }

    /// Get the source text.
    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    fn next_inner(&mut self) -> Option<Result<Token, LexError>> {
        match self.inner.next() {
            Some(Ok(kind)) => {
                let span = self.inner.span();
                Some(Ok(Token::new(kind, self.inner.slice(), span)))
            }
            Some(Err(())) => {
                let span = self.inner.span();
                Some(Err(LexError::UnexpectedChar {
                    text: self.inner.slice().into(),
                    span,
                }))
            }
            None => {
                if self.done {
                    return None;
                }
                self.done = true;
                let pos = self.inner.source().len();
                Some(Ok(Token::new(TokenKind::Eof, "", pos..pos)))
            }
        }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        self.next_inner()
    }
}
