//! # Monkey Parser
//!
//! Parses Monkey source code into an Abstract Syntax Tree.
//!
//! Uses recursive descent with Pratt parsing for expressions. Each compound
//! node is built through its draft in `monkey_ast::draft` and finished once
//! all of its children are attached.
//!
//! ## Example
//!
//! ```
//! use monkey_parser::parse;
//!
//! let result = parse("let x = 5 + 5 * 2;");
//! assert!(result.errors.is_empty());
//! assert_eq!(result.program.to_string(), "let x = (5 + (5 * 2));");
//! ```

mod error;
mod parser;

pub use error::ParseError;
pub use parser::Parser;

use monkey_ast::Program;

/// Result of parsing.
pub struct ParseResult {
    /// The parsed AST (statements that failed to parse are left out)
    pub program: Program,
    /// Any errors encountered during parsing
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse source code into an AST.
pub fn parse(source: &str) -> ParseResult {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    ParseResult {
        program,
        errors: parser.into_errors(),
    }
}
