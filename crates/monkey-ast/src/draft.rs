//! Nodes under construction.
//!
//! The parser creates a draft as soon as it knows which variant it is
//! building, attaches each child once it has been parsed, and calls
//! `finish()` to obtain the finished node. Attaching consumes the draft, and
//! finished nodes have no setters, so a child cannot be swapped out after
//! the tree is handed off. Each slot is attached at most once; attaching an
//! occupied slot is a bug in the caller and panics in debug builds.
//!
//! Drafts render like their finished counterparts, with absent children
//! rendered as empty text.

use crate::ast::{
    Expression, ExpressionStatement, Identifier, InfixExpression, InfixOperator, LetStatement,
    PrefixExpression, PrefixOperator, ReturnStatement,
};
use crate::node::{Node, Slot};
use monkey_lexer::Token;
use std::fmt;
use thiserror::Error;

/// A draft was finished before all of its required children were attached.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{node} is missing its {slot}")]
pub struct IncompleteNode {
    /// Kind of node being finished, e.g. `let statement`
    pub node: &'static str,
    /// Name of the missing child, e.g. `value`
    pub slot: &'static str,
    pub span: std::ops::Range<usize>,
}

impl IncompleteNode {
    fn new(node: &'static str, slot: &'static str, token: &Token) -> Self {
        Self {
            node,
            slot,
            span: token.span.clone(),
        }
    }

    /// Get the span of the token that introduced the incomplete node.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.span.clone()
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A `let` statement whose value has not been parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatementDraft {
    token: Token,
    name: Identifier,
    value: Option<Expression>,
}

impl LetStatementDraft {
    pub fn new(token: Token, name: Identifier) -> Self {
        Self {
            token,
            name,
            value: None,
        }
    }

    pub fn with_value(self, value: Expression) -> Self {
        debug_assert!(self.value.is_none(), "value attached twice");
        Self {
            value: Some(value),
            ..self
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }

    pub fn finish(self) -> Result<LetStatement, IncompleteNode> {
        match self.value {
            Some(value) => Ok(LetStatement::new(self.token, self.name, value)),
            None => Err(IncompleteNode::new("let statement", "value", &self.token)),
        }
    }
}

impl Node for LetStatementDraft {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for LetStatementDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, Slot(self.value.as_ref()))
    }
}

/// A `return` statement whose value has not been parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatementDraft {
    token: Token,
    value: Option<Expression>,
}

impl ReturnStatementDraft {
    pub fn new(token: Token) -> Self {
        Self { token, value: None }
    }

    pub fn with_value(self, value: Expression) -> Self {
        debug_assert!(self.value.is_none(), "value attached twice");
        Self {
            value: Some(value),
            ..self
        }
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }

    pub fn finish(self) -> Result<ReturnStatement, IncompleteNode> {
        match self.value {
            Some(value) => Ok(ReturnStatement::new(self.token, value)),
            None => Err(IncompleteNode::new("return statement", "value", &self.token)),
        }
    }
}

impl Node for ReturnStatementDraft {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ReturnStatementDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", Slot(self.value.as_ref()))
    }
}

/// An expression statement whose expression has not been parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatementDraft {
    token: Token,
    expression: Option<Expression>,
}

impl ExpressionStatementDraft {
    pub fn new(token: Token) -> Self {
        Self {
            token,
            expression: None,
        }
    }

    pub fn with_expression(self, expression: Expression) -> Self {
        debug_assert!(self.expression.is_none(), "expression attached twice");
        Self {
            expression: Some(expression),
            ..self
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn finish(self) -> Result<ExpressionStatement, IncompleteNode> {
        match self.expression {
            Some(expression) => Ok(ExpressionStatement::new(self.token, expression)),
            None => Err(IncompleteNode::new(
                "expression statement",
                "expression",
                &self.token,
            )),
        }
    }
}

impl Node for ExpressionStatementDraft {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ExpressionStatementDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Slot(self.expression.as_ref()))
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// A prefix expression whose operand has not been parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpressionDraft {
    token: Token,
    operator: PrefixOperator,
    right: Option<Expression>,
}

impl PrefixExpressionDraft {
    pub fn new(token: Token, operator: PrefixOperator) -> Self {
        Self {
            token,
            operator,
            right: None,
        }
    }

    pub fn with_right(self, right: Expression) -> Self {
        debug_assert!(self.right.is_none(), "right operand attached twice");
        Self {
            right: Some(right),
            ..self
        }
    }

    pub fn operator(&self) -> PrefixOperator {
        self.operator
    }

    pub fn right(&self) -> Option<&Expression> {
        self.right.as_ref()
    }

    pub fn finish(self) -> Result<PrefixExpression, IncompleteNode> {
        match self.right {
            Some(right) => Ok(PrefixExpression::new(self.token, self.operator, right)),
            None => Err(IncompleteNode::new("prefix expression", "operand", &self.token)),
        }
    }
}

impl Node for PrefixExpressionDraft {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for PrefixExpressionDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, Slot(self.right.as_ref()))
    }
}

/// An infix expression with one or both operands still missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpressionDraft {
    token: Token,
    left: Option<Expression>,
    operator: InfixOperator,
    right: Option<Expression>,
}

impl InfixExpressionDraft {
    pub fn new(token: Token, operator: InfixOperator) -> Self {
        Self {
            token,
            left: None,
            operator,
            right: None,
        }
    }

    pub fn with_left(self, left: Expression) -> Self {
        debug_assert!(self.left.is_none(), "left operand attached twice");
        Self {
            left: Some(left),
            ..self
        }
    }

    pub fn with_right(self, right: Expression) -> Self {
        debug_assert!(self.right.is_none(), "right operand attached twice");
        Self {
            right: Some(right),
            ..self
        }
    }

    pub fn left(&self) -> Option<&Expression> {
        self.left.as_ref()
    }

    pub fn operator(&self) -> InfixOperator {
        self.operator
    }

    pub fn right(&self) -> Option<&Expression> {
        self.right.as_ref()
    }

    pub fn finish(self) -> Result<InfixExpression, IncompleteNode> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Ok(InfixExpression::new(
                self.token,
                left,
                self.operator,
                right,
            )),
            (None, _) => Err(IncompleteNode::new("infix expression", "left operand", &self.token)),
            (Some(_), None) => Err(IncompleteNode::new(
                "infix expression",
                "right operand",
                &self.token,
            )),
        }
    }
}

impl Node for InfixExpressionDraft {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for InfixExpressionDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {})",
            Slot(self.left.as_ref()),
            self.operator,
            Slot(self.right.as_ref())
        )
    }
}
