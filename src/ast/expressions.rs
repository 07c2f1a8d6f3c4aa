use std::fmt::Display;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::ast::Expression;

// LITERALS

/// Identifier
/// A name used as an expression, or the target of a `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    token: Token,
}

impl Identifier {
    /// # Panics
    ///
    /// Panics if `token` is not an `IDENT` token.
    pub fn new(token: Token) -> Self {
        assert_eq!(
            token.kind,
            TokenKind::Ident,
            "identifier built from a {} token",
            token.kind
        );
        Identifier { token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn value(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Integer Literal Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteralExpr {
    token: Token,
    value: i64,
}

impl IntegerLiteralExpr {
    /// # Panics
    ///
    /// Panics if `token` is not an `INT` token or its literal does not
    /// spell `value`.
    pub fn new(token: Token, value: i64) -> Self {
        assert_eq!(
            token.kind,
            TokenKind::Int,
            "integer literal built from a {} token",
            token.kind
        );
        assert_eq!(
            token.literal.parse::<i64>().ok(),
            Some(value),
            "integer literal {:?} does not match value {}",
            token.literal,
            value
        );
        IntegerLiteralExpr { token, value }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Display for IntegerLiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Boolean Literal Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteralExpr {
    token: Token,
    value: bool,
}

impl BooleanLiteralExpr {
    /// # Panics
    ///
    /// Panics unless `token` is `TRUE` with `value == true` or `FALSE` with
    /// `value == false`.
    pub fn new(token: Token, value: bool) -> Self {
        let expected = match token.kind {
            TokenKind::True => true,
            TokenKind::False => false,
            kind => panic!("boolean literal built from a {} token", kind),
        };
        assert_eq!(expected, value, "boolean literal value does not match its token");
        BooleanLiteralExpr { token, value }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl Display for BooleanLiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator applied to the expression on its right (`!x`, `-5`).
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    operator: Token,
    right: Box<Expression>,
}

impl PrefixExpr {
    /// # Panics
    ///
    /// Panics if `operator` is neither `BANG` nor `MINUS`.
    pub fn new(operator: Token, right: Expression) -> Self {
        assert!(
            operator.is_one_of_many(&[TokenKind::Bang, TokenKind::Minus]),
            "prefix operator must be {} or {}, got {}",
            TokenKind::Bang,
            TokenKind::Minus,
            operator.kind
        );
        PrefixExpr {
            operator,
            right: Box::new(right),
        }
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl PrefixExpr {
    pub(super) fn detach_operands(&mut self, pending: &mut Vec<Expression>) {
        detach(&mut self.right, &self.operator.span, pending);
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.literal, self.right)
    }
}

/// Infix Expression
/// A binary operation between two expressions (`a + b`, `x == y`).
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    left: Box<Expression>,
    operator: Token,
    right: Box<Expression>,
}

impl InfixExpr {
    pub fn new(left: Expression, operator: Token, right: Expression) -> Self {
        InfixExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl InfixExpr {
    pub(super) fn detach_operands(&mut self, pending: &mut Vec<Expression>) {
        detach(&mut self.left, &self.operator.span, pending);
        detach(&mut self.right, &self.operator.span, pending);
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.literal, self.right)
    }
}

/// Moves a compound operand onto `pending`, leaving an empty identifier in
/// its slot. Leaf operands stay where they are.
fn detach(slot: &mut Expression, span: &Span, pending: &mut Vec<Expression>) {
    if !matches!(slot, Expression::Prefix(_) | Expression::Infix(_)) {
        return;
    }

    let hollow = Expression::Identifier(Identifier {
        token: Token {
            kind: TokenKind::Ident,
            literal: String::new(),
            span: span.clone(),
        },
    });
    pending.push(std::mem::replace(slot, hollow));
}
