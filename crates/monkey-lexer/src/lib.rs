//! # Monkey Lexer
//!
//! Tokenizes Monkey source code into a stream of tokens.
//!
//! The lexer uses the `logos` crate for tokenization. Every token keeps the
//! exact source text it was read from, which the AST reports back as each
//! node's literal text.
//!
//! ## Example
//!
//! ```
//! use monkey_lexer::{Lexer, TokenKind};
//!
//! let source = "let x = 42;";
//! let lexer = Lexer::new(source);
//!
//! for token in lexer {
//!     println!("{:?}", token);
//! }
//! ```

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenize source code into a vector of tokens.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for result in lexer {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    (tokens, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_errors() {
        let (tokens, errors) = tokenize("let a = 1 # 2;");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span(), 10..11);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(tokens.len(), 7);
    }
}
