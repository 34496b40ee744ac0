//! Recursive descent parser for Monkey.

use monkey_ast::draft::{
    ExpressionStatementDraft, InfixExpressionDraft, LetStatementDraft, PrefixExpressionDraft,
    ReturnStatementDraft,
};
use monkey_ast::*;
use monkey_lexer::{Lexer, Token, TokenKind};

use crate::error::ParseError;

/// Operator precedence levels for Pratt parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
}

impl Precedence {
    fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

/// Parser for Monkey source code.
///
/// Keeps a one-token lookahead; statement parsers leave `current` on the
/// last token of the statement they consumed.
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source),
            current: Token::new(TokenKind::Eof, "", 0..0),
            peek: Token::new(TokenKind::Eof, "", 0..0),
            errors: Vec::new(),
        };

        // Fill both current and peek
        parser.advance();
        parser.advance();
        parser
    }

    /// Errors collected so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Get the collected errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    fn next_token(&mut self) -> Token {
        loop {
            match self.lexer.next() {
                Some(Ok(token)) => return token,
                Some(Err(err)) => {
                    tracing::debug!(error = %err, "skipping illegal input");
                    self.errors.push(ParseError::Lex(err));
                }
                None => {
                    let end = self.lexer.source().len();
                    return Token::new(TokenKind::Eof, "", end..end);
                }
            }
        }
    }

    fn advance(&mut self) {
        let next = self.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn at_end(&self) -> bool {
        self.current_is(TokenKind::Eof)
    }

    /// Advance if the next token has the given kind, otherwise record an error.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
                span: self.peek.span.clone(),
            });
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    fn error(&mut self, err: ParseError) {
        self.errors.push(err);
    }

    /// Unwrap a finished draft, recording `ParseError::Incomplete` if a slot
    /// was left empty.
    fn complete<T>(&mut self, result: Result<T, IncompleteNode>) -> Option<T> {
        match result {
            Ok(node) => Some(node),
            Err(err) => {
                self.error(err.into());
                None
            }
        }
    }

    /// Skip to the end of the current statement after an error.
    fn synchronize(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.at_end() {
            self.advance();
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse a complete program.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.at_end() {
            match self.parse_statement() {
                Some(stmt) => {
                    tracing::debug!(statement = %stmt, "parsed statement");
                    statements.push(stmt);
                }
                None => {
                    // Error recovery: skip to the next statement
                    self.synchronize();
                }
            }
            self.advance();
        }

        Program::new(statements)
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::from),
            TokenKind::Return => self.parse_return_statement().map(Statement::from),
            _ => self.parse_expression_statement().map(Statement::from),
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::from_token(self.current.clone());
        let draft = LetStatementDraft::new(token, name);

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        self.complete(draft.with_value(value).finish())
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let draft = ReturnStatementDraft::new(self.current.clone());
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        self.complete(draft.with_value(value).finish())
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let draft = ExpressionStatementDraft::new(self.current.clone());

        let expression = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        self.complete(draft.with_expression(expression).finish())
    }

    // ========================================================================
    // Expressions (Pratt parser)
    // ========================================================================

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            tracing::trace!(
                operator = %self.peek.kind,
                ?precedence,
                "binding infix operator"
            );
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        if let Some(operator) = PrefixOperator::from_token(self.current.kind) {
            return self.parse_prefix_expression(operator);
        }

        match self.current.kind {
            TokenKind::Ident => Some(Identifier::from_token(self.current.clone()).into()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::LParen => self.parse_grouped_expression(),
            found => {
                self.error(ParseError::NoPrefixRule {
                    found,
                    span: self.current.span.clone(),
                });
                None
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token.literal().parse::<i64>() {
            Ok(value) => Some(IntegerLiteral::new(token, value).into()),
            Err(_) => {
                self.error(ParseError::InvalidInteger {
                    literal: token.literal.clone(),
                    span: token.span,
                });
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expression> {
        let draft = PrefixExpressionDraft::new(self.current.clone(), operator);
        self.advance();

        let right = self.parse_expression(Precedence::Prefix)?;
        self.complete(draft.with_right(right).finish()).map(Expression::from)
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        let Some(operator) = InfixOperator::from_token(self.current.kind) else {
            return Some(left);
        };
        let precedence = Precedence::of(self.current.kind);
        let draft = InfixExpressionDraft::new(self.current.clone(), operator).with_left(left);
        self.advance();

        let right = self.parse_expression(precedence)?;
        self.complete(draft.with_right(right).finish()).map(Expression::from)
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expression)
    }
}
