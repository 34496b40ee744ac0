//! AST node definitions for Monkey.
//!
//! These are finished nodes: every required child is present and nothing can
//! be reassigned once a node has been built. Partially built nodes live in
//! [`crate::draft`].

use crate::node::Node;
use monkey_lexer::{Token, TokenKind};
use smol_str::SmolStr;
use std::fmt;

/// The root of a parsed Monkey program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Top-level statements in source order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|statement| statement.token_literal())
            .unwrap_or("")
    }
}

/// Statements are written back to back. An expression statement that is
/// followed by another statement is terminated with `;`, otherwise `a; b;`
/// would come out as the single identifier `ab`.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut statements = self.statements.iter().peekable();
        while let Some(statement) = statements.next() {
            write!(f, "{statement}")?;
            if matches!(statement, Statement::Expression(_)) && statements.peek().is_some() {
                f.write_str(";")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// Binding: `let x = 5;`
    Let(LetStatement),
    /// Return: `return x;`
    Return(ReturnStatement),
    /// Bare expression: `x + 1;`
    Expression(ExpressionStatement),
}

impl Statement {
    /// The token that introduced this statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => &stmt.token,
            Statement::Return(stmt) => &stmt.token,
            Statement::Expression(stmt) => &stmt.token,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        self.token().literal()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Return(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Expression(stmt) => fmt::Display::fmt(stmt, f),
        }
    }
}

impl From<LetStatement> for Statement {
    fn from(stmt: LetStatement) -> Self {
        Statement::Let(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Statement::Return(stmt)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(stmt: ExpressionStatement) -> Self {
        Statement::Expression(stmt)
    }
}

/// A let binding: `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetStatement {
    token: Token,
    name: Identifier,
    value: Expression,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier, value: Expression) -> Self {
        Self { token, name, value }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

/// A return statement: `return <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStatement {
    token: Token,
    value: Expression,
}

impl ReturnStatement {
    pub fn new(token: Token, value: Expression) -> Self {
        Self { token, value }
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

/// An expression in statement position.
///
/// The token is the first token of the wrapped expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionStatement {
    token: Token,
    expression: Expression,
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: Expression) -> Self {
        Self { token, expression }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expression, f)
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    /// Identifier: `foo`
    Identifier(Identifier),
    /// Integer literal: `42`
    IntegerLiteral(IntegerLiteral),
    /// Prefix operation: `-x`, `!x`
    Prefix(PrefixExpression),
    /// Infix operation: `a + b`
    Infix(InfixExpression),
}

impl Expression {
    /// The token that introduced this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(expr) => &expr.token,
            Expression::IntegerLiteral(expr) => &expr.token,
            Expression::Prefix(expr) => &expr.token,
            Expression::Infix(expr) => &expr.token,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        self.token().literal()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => fmt::Display::fmt(expr, f),
            Expression::IntegerLiteral(expr) => fmt::Display::fmt(expr, f),
            Expression::Prefix(expr) => fmt::Display::fmt(expr, f),
            Expression::Infix(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl From<Identifier> for Expression {
    fn from(expr: Identifier) -> Self {
        Expression::Identifier(expr)
    }
}

impl From<IntegerLiteral> for Expression {
    fn from(expr: IntegerLiteral) -> Self {
        Expression::IntegerLiteral(expr)
    }
}

impl From<PrefixExpression> for Expression {
    fn from(expr: PrefixExpression) -> Self {
        Expression::Prefix(expr)
    }
}

impl From<InfixExpression> for Expression {
    fn from(expr: InfixExpression) -> Self {
        Expression::Infix(expr)
    }
}

/// An identifier: `foo`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    token: Token,
    value: SmolStr,
}

impl Identifier {
    pub fn new(token: Token, value: impl Into<SmolStr>) -> Self {
        Self {
            token,
            value: value.into(),
        }
    }

    /// Build an identifier whose name is its token's literal.
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// An integer literal: `42`
///
/// Renders as its token text, so `007` stays `007`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerLiteral {
    token: Token,
    value: i64,
}

impl IntegerLiteral {
    pub fn new(token: Token, value: i64) -> Self {
        Self { token, value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token.literal())
    }
}

/// A prefix expression: `-x`, `!x`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixExpression {
    token: Token,
    operator: PrefixOperator,
    right: Box<Expression>,
}

impl PrefixExpression {
    pub fn new(token: Token, operator: PrefixOperator, right: Expression) -> Self {
        Self {
            token,
            operator,
            right: Box::new(right),
        }
    }

    pub fn operator(&self) -> PrefixOperator {
        self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// An infix expression: `a + b`
///
/// The token is the operator token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfixExpression {
    token: Token,
    left: Box<Expression>,
    operator: InfixOperator,
    right: Box<Expression>,
}

impl InfixExpression {
    pub fn new(token: Token, left: Expression, operator: InfixOperator, right: Expression) -> Self {
        Self {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn operator(&self) -> InfixOperator {
        self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// ============================================================================
// Operators
// ============================================================================

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrefixOperator {
    Neg, // -
    Not, // !
}

impl PrefixOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(PrefixOperator::Neg),
            TokenKind::Bang => Some(PrefixOperator::Not),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Neg => "-",
            PrefixOperator::Not => "!",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfixOperator {
    // Arithmetic
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    // Comparison
    Lt,  // <
    Gt,  // >
    Eq,  // ==
    Ne,  // !=
}

impl InfixOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => InfixOperator::Add,
            TokenKind::Minus => InfixOperator::Sub,
            TokenKind::Asterisk => InfixOperator::Mul,
            TokenKind::Slash => InfixOperator::Div,
            TokenKind::Lt => InfixOperator::Lt,
            TokenKind::Gt => InfixOperator::Gt,
            TokenKind::Eq => InfixOperator::Eq,
            TokenKind::NotEq => InfixOperator::Ne,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InfixOperator::Add => "+",
            InfixOperator::Sub => "-",
            InfixOperator::Mul => "*",
            InfixOperator::Div => "/",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::Eq => "==",
            InfixOperator::Ne => "!=",
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        Identifier::new(Token::synthetic(TokenKind::Ident, name), name)
    }

    fn int(literal: &str) -> Expression {
        let value = literal.parse().expect("test literal");
        IntegerLiteral::new(Token::synthetic(TokenKind::Int, literal), value).into()
    }

    fn infix(left: Expression, op: InfixOperator, right: Expression) -> Expression {
        let kind = match op {
            InfixOperator::Add => TokenKind::Plus,
            InfixOperator::Sub => TokenKind::Minus,
            InfixOperator::Mul => TokenKind::Asterisk,
            InfixOperator::Div => TokenKind::Slash,
            InfixOperator::Lt => TokenKind::Lt,
            InfixOperator::Gt => TokenKind::Gt,
            InfixOperator::Eq => TokenKind::Eq,
            InfixOperator::Ne => TokenKind::NotEq,
        };
        assert_eq!(InfixOperator::from_token(kind), Some(op));
        let token = Token::synthetic(kind, op.as_str());
        InfixExpression::new(token, left, op, right).into()
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
        assert!(program.is_empty());
    }

    #[test]
    fn test_let_statement() {
        let program = Program::new(vec![LetStatement::new(
            Token::synthetic(TokenKind::Let, "let"),
            Identifier::new(Token::synthetic(TokenKind::Ident, "myVar"), "myVar"),
            ident("anotherVar").into(),
        )
        .into()]);

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_let_with_integer() {
        let stmt = LetStatement::new(Token::synthetic(TokenKind::Let, "let"), ident("x"), int("5"));
        assert_eq!(stmt.to_string(), "let x = 5;");
        assert_eq!(stmt.name().value(), "x");
    }

    #[test]
    fn test_return_statement() {
        let stmt = ReturnStatement::new(Token::synthetic(TokenKind::Return, "return"), int("10"));
        assert_eq!(stmt.to_string(), "return 10;");
        assert_eq!(stmt.token_literal(), "return");
    }

    #[test]
    fn test_expression_statement() {
        let stmt = ExpressionStatement::new(
            Token::synthetic(TokenKind::Ident, "foo"),
            ident("foo").into(),
        );
        assert_eq!(stmt.to_string(), "foo");
    }

    #[test]
    fn test_integer_literal_keeps_spelling() {
        let lit = int("0042");
        assert_eq!(lit.to_string(), "0042");
        match &lit {
            Expression::IntegerLiteral(lit) => assert_eq!(lit.value(), 42),
            _ => panic!("expected integer literal"),
        }
    }

    #[test]
    fn test_prefix_expression() {
        let expr = PrefixExpression::new(
            Token::synthetic(TokenKind::Minus, "-"),
            PrefixOperator::Neg,
            int("5"),
        );
        assert_eq!(expr.to_string(), "(-5)");

        let not = PrefixExpression::new(
            Token::synthetic(TokenKind::Bang, "!"),
            PrefixOperator::Not,
            expr.into(),
        );
        assert_eq!(not.to_string(), "(!(-5))");
    }

    #[test]
    fn test_infix_expression() {
        let expr = infix(int("5"), InfixOperator::Add, int("5"));
        assert_eq!(expr.to_string(), "(5 + 5)");
    }

    #[test]
    fn test_nested_infix_is_fully_parenthesized() {
        let product = infix(int("5"), InfixOperator::Mul, int("5"));
        let sum = infix(int("5"), InfixOperator::Add, product);
        assert_eq!(sum.to_string(), "(5 + (5 * 5))");
    }

    #[test]
    fn test_reconstruction_is_deterministic() {
        let expr = infix(
            infix(ident("a").into(), InfixOperator::Lt, ident("b").into()),
            InfixOperator::Ne,
            int("1"),
        );
        let program = Program::new(vec![ExpressionStatement::new(
            expr.token().clone(),
            expr,
        )
        .into()]);

        assert_eq!(program.to_string(), program.to_string());
        assert_eq!(program.to_string(), "((a < b) != 1)");
    }

    #[test]
    fn test_program_concatenates_statements() {
        let program: Program = vec![
            Statement::from(LetStatement::new(
                Token::synthetic(TokenKind::Let, "let"),
                ident("x"),
                int("5"),
            )),
            Statement::from(ReturnStatement::new(
                Token::synthetic(TokenKind::Return, "return"),
                ident("x").into(),
            )),
        ]
        .into_iter()
        .collect();

        assert_eq!(program.len(), 2);
        assert_eq!(program.to_string(), "let x = 5;return x;");
    }

    #[test]
    fn test_program_separates_expression_statements() {
        let bare = |name: &str| {
            Statement::from(ExpressionStatement::new(
                Token::synthetic(TokenKind::Ident, name),
                ident(name).into(),
            ))
        };

        let program: Program = vec![bare("a"), bare("b")].into_iter().collect();
        assert_eq!(program.to_string(), "a;b");

        let program: Program = vec![
            bare("a"),
            Statement::from(ReturnStatement::new(
                Token::synthetic(TokenKind::Return, "return"),
                ident("b").into(),
            )),
        ]
        .into_iter()
        .collect();
        assert_eq!(program.to_string(), "a;return b;");

        // A lone expression statement renders without a terminator.
        let program: Program = vec![bare("foo")].into_iter().collect();
        assert_eq!(program.to_string(), "foo");
    }

    #[test]
    fn test_token_literal_is_introducing_token() {
        let token = Token::synthetic(TokenKind::Plus, "+");
        let expr = InfixExpression::new(token, int("1"), InfixOperator::Add, int("2"));
        assert_eq!(expr.token_literal(), "+");
        assert_eq!(Expression::from(expr).token_literal(), "+");
    }

    #[test]
    fn test_finished_trees_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Program>();
    }

    #[test]
    fn test_operator_lookup() {
        assert_eq!(PrefixOperator::from_token(TokenKind::Bang), Some(PrefixOperator::Not));
        assert_eq!(PrefixOperator::from_token(TokenKind::Plus), None);
        assert_eq!(InfixOperator::from_token(TokenKind::NotEq), Some(InfixOperator::Ne));
        assert_eq!(InfixOperator::from_token(TokenKind::Assign), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_preserves_rendering() {
        let program = Program::new(vec![ReturnStatement::new(
            Token::synthetic(TokenKind::Return, "return"),
            infix(int("1"), InfixOperator::Sub, int("2")),
        )
        .into()]);

        let json = serde_json::to_string(&program).expect("serialize");
        let back: Program = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.to_string(), "return (1 - 2);");
    }
}
