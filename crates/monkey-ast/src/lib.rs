//! # Monkey AST
//!
//! Abstract Syntax Tree definitions for the Monkey programming language.
//!
//! The AST is produced by the parser and consumed by later stages. Every node
//! reports the literal text of the token that introduced it and renders back
//! to source-equivalent text through `Display`, with prefix and infix
//! expressions always fully parenthesized:
//!
//! ```
//! use monkey_ast::{Expression, InfixExpression, InfixOperator, IntegerLiteral, Node};
//! use monkey_lexer::{Token, TokenKind};
//!
//! let five = |text: &str| -> Expression {
//!     IntegerLiteral::new(Token::synthetic(TokenKind::Int, text), 5).into()
//! };
//! let sum = InfixExpression::new(
//!     Token::synthetic(TokenKind::Plus, "+"),
//!     five("5"),
//!     InfixOperator::Add,
//!     five("5"),
//! );
//!
//! assert_eq!(sum.to_string(), "(5 + 5)");
//! assert_eq!(sum.token_literal(), "+");
//! ```

mod ast;
pub mod draft;
mod node;

pub use ast::*;
pub use draft::IncompleteNode;
pub use node::Node;
