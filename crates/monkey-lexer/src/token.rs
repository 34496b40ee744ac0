//! Token definitions for Monkey.

use logos::Logos;
use smol_str::SmolStr;
use std::fmt;

/// A token with its kind, literal text and span.
///
/// The literal is the exact source slice the token was lexed from, so
/// `5`, `005` and `let` keep their original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub literal: SmolStr,
    pub span: std::ops::Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<SmolStr>, span: std::ops::Range<usize>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Build a token without source position, for nodes assembled by hand.
    pub fn synthetic(kind: TokenKind, literal: impl Into<SmolStr>) -> Self {
        Self::new(kind, literal, 0..0)
    }

    /// The literal text that introduced this token.
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

/// Token kinds for Monkey.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // ========================================================================
    // Keywords
    // ========================================================================
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // ========================================================================
    // Operators
    // ========================================================================
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,

    // ========================================================================
    // Delimiters
    // ========================================================================
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // ========================================================================
    // Literals
    // ========================================================================
    /// Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// Integer literal; the value is decoded by the parser from the literal text
    #[regex(r"[0-9]+")]
    Int,

    /// End of file
    Eof,
}

impl TokenKind {
    /// Check if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Check if this token can appear as a binary operator.
    pub fn is_infix_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq
        )
    }

    /// A short human-readable name, used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    #[test]
    fn test_keywords() {
        let mut lex = TokenKind::lexer("fn let true false if else return");
        assert_eq!(lex.next(), Some(Ok(TokenKind::Function)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Let)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::True)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::False)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::If)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Else)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Return)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let mut lex = TokenKind::lexer("letter returns fnord");
        assert_eq!(lex.next(), Some(Ok(TokenKind::Ident)));
        assert_eq!(lex.slice(), "letter");
        assert_eq!(lex.next(), Some(Ok(TokenKind::Ident)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Ident)));
    }

    #[test]
    fn test_operators() {
        let mut lex = TokenKind::lexer("= + - ! * / < > == !=");
        assert_eq!(lex.next(), Some(Ok(TokenKind::Assign)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Plus)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Minus)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Bang)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Asterisk)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Slash)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Lt)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Gt)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::Eq)));
        assert_eq!(lex.next(), Some(Ok(TokenKind::NotEq)));
    }

    #[test]
    fn test_integers_keep_their_spelling() {
        let mut lex = TokenKind::lexer("5 0042");
        assert_eq!(lex.next(), Some(Ok(TokenKind::Int)));
        assert_eq!(lex.slice(), "5");
        assert_eq!(lex.next(), Some(Ok(TokenKind::Int)));
        assert_eq!(lex.slice(), "0042");
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let mut lex = TokenKind::lexer("@");
        assert_eq!(lex.next(), Some(Err(())));
    }

    #[test]
    fn test_kind_classification() {
        assert!(TokenKind::Return.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(TokenKind::NotEq.is_infix_operator());
        assert!(!TokenKind::Bang.is_infix_operator());
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
    }
}
