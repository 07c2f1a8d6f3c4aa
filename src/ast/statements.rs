use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

use super::{ast::Expression, expressions::Identifier};

/// `let <identifier> = ...;`
///
/// The bound value is skipped by the parser, so only the name is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    token: Token,
    identifier: Identifier,
}

impl LetStmt {
    /// # Panics
    ///
    /// Panics if `token` is not a `LET` token.
    pub fn new(token: Token, identifier: Identifier) -> Self {
        assert_eq!(token.kind, TokenKind::Let, "let statement built from a {} token", token.kind);
        LetStmt { token, identifier }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token.literal, self.identifier)
    }
}

/// `return ...;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    token: Token,
    value: Option<Expression>,
}

impl ReturnStmt {
    /// # Panics
    ///
    /// Panics if `token` is not a `RETURN` token.
    pub fn new(token: Token, value: Option<Expression>) -> Self {
        assert_eq!(
            token.kind,
            TokenKind::Return,
            "return statement built from a {} token",
            token.kind
        );
        ReturnStmt { token, value }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Always `None` for parsed programs; the parser skips return values.
    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.literal, value),
            None => write!(f, "{};", self.token.literal),
        }
    }
}

/// A bare expression used as a statement.
///
/// `expression` is `None` when the expression failed to parse; the
/// diagnostic for that is on the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    token: Token,
    expression: Option<Expression>,
}

impl ExpressionStmt {
    pub fn new(token: Token, expression: Option<Expression>) -> Self {
        ExpressionStmt { token, expression }
    }

    /// First token of the expression.
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => Ok(()),
        }
    }
}
