//! CLI commands.

pub mod check;
pub mod lex;
pub mod parse;
pub mod repl;
