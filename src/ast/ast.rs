use std::{fmt::Display, slice::Iter};

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{BooleanLiteralExpr, Identifier, InfixExpr, IntegerLiteralExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// The closed set of statement kinds the parser produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Statement {
    /// The token that introduced the statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => stmt.token(),
            Statement::Return(stmt) => stmt.token(),
            Statement::Expression(stmt) => stmt.token(),
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.token().span
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// The closed set of expression kinds the parser produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteralExpr),
    Boolean(BooleanLiteralExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expression {
    /// The token that introduced the expression. For infix expressions
    /// this is the operator.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(expr) => expr.token(),
            Expression::Integer(expr) => expr.token(),
            Expression::Boolean(expr) => expr.token(),
            Expression::Prefix(expr) => expr.operator(),
            Expression::Infix(expr) => expr.operator(),
        }
    }
}

/// Output still to be written while rendering an expression.
enum Fragment<'a> {
    Expr(&'a Expression),
    Text(&'a str),
}

impl Display for Expression {
    /// Renders with an explicit stack so that arbitrarily long operator
    /// chains do not exhaust the call stack.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Fragment::Expr(self)];

        while let Some(fragment) = pending.pop() {
            match fragment {
                Fragment::Text(text) => f.write_str(text)?,
                Fragment::Expr(Expression::Identifier(expr)) => write!(f, "{}", expr)?,
                Fragment::Expr(Expression::Integer(expr)) => write!(f, "{}", expr)?,
                Fragment::Expr(Expression::Boolean(expr)) => write!(f, "{}", expr)?,
                Fragment::Expr(Expression::Prefix(expr)) => pending.extend([
                    Fragment::Text(")"),
                    Fragment::Expr(expr.right()),
                    Fragment::Text(&expr.operator().literal),
                    Fragment::Text("("),
                ]),
                Fragment::Expr(Expression::Infix(expr)) => pending.extend([
                    Fragment::Text(")"),
                    Fragment::Expr(expr.right()),
                    Fragment::Text(" "),
                    Fragment::Text(&expr.operator().literal),
                    Fragment::Text(" "),
                    Fragment::Expr(expr.left()),
                    Fragment::Text("("),
                ]),
            }
        }

        Ok(())
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_operands(&mut pending);

        // each popped node is emptied before it drops, so drops stay shallow
        while let Some(mut expr) = pending.pop() {
            expr.detach_operands(&mut pending);
        }
    }
}

impl Expression {
    fn detach_operands(&mut self, pending: &mut Vec<Expression>) {
        match self {
            Expression::Prefix(expr) => expr.detach_operands(pending),
            Expression::Infix(expr) => expr.detach_operands(pending),
            Expression::Identifier(_) | Expression::Integer(_) | Expression::Boolean(_) => {}
        }
    }
}

/// Program
///
/// The root of the tree: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
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

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
