//! Unit tests for AST construction and rendering.

use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    ast::{Expression, Program, Statement},
    expressions::{BooleanLiteralExpr, Identifier, InfixExpr, IntegerLiteralExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn token(kind: TokenKind, literal: &str) -> Token {
    let file = Rc::new("test.lang".to_string());
    MK_TOKEN!(
        kind,
        literal.to_string(),
        Span {
            start: Position(0, Rc::clone(&file)),
            end: Position(literal.len() as u32, file),
        }
    )
}

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(token(TokenKind::Ident, name)))
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteralExpr::new(
        token(TokenKind::Int, &value.to_string()),
        value,
    ))
}

#[test]
fn test_render_let_statement() {
    let stmt = LetStmt::new(
        token(TokenKind::Let, "let"),
        Identifier::new(token(TokenKind::Ident, "myVar")),
    );

    assert_eq!(stmt.identifier().value(), "myVar");
    assert_eq!(stmt.to_string(), "let myVar;");
}

#[test]
fn test_render_return_statement() {
    let bare = ReturnStmt::new(token(TokenKind::Return, "return"), None);
    let bound = ReturnStmt::new(token(TokenKind::Return, "return"), Some(int(5)));

    assert_eq!(bare.to_string(), "return;");
    assert!(bare.value().is_none());
    assert_eq!(bound.to_string(), "return 5;");
}

#[test]
fn test_render_nested_expressions() {
    let product = Expression::Infix(InfixExpr::new(
        ident("b"),
        token(TokenKind::Asterisk, "*"),
        ident("c"),
    ));
    let sum = Expression::Infix(InfixExpr::new(
        Expression::Prefix(PrefixExpr::new(token(TokenKind::Minus, "-"), ident("a"))),
        token(TokenKind::Plus, "+"),
        product,
    ));

    assert_eq!(sum.to_string(), "((-a) + (b * c))");
    assert_eq!(sum.token().kind, TokenKind::Plus);
}

#[test]
fn test_render_program_concatenates_statements() {
    let first = Statement::Expression(ExpressionStmt::new(
        token(TokenKind::Int, "3"),
        Some(Expression::Infix(InfixExpr::new(
            int(3),
            token(TokenKind::Plus, "+"),
            int(4),
        ))),
    ));
    let second = Statement::Expression(ExpressionStmt::new(token(TokenKind::Ident, "x"), None));
    let program = Program::new(vec![first, second]);

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "(3 + 4)");
    assert_eq!(program.statements()[1].token().literal, "x");
}

#[test]
fn test_boolean_literal() {
    let expr = BooleanLiteralExpr::new(token(TokenKind::False, "false"), false);

    assert!(!expr.value());
    assert_eq!(expr.to_string(), "false");
}

#[test]
#[should_panic(expected = "identifier built from a INT token")]
fn test_identifier_rejects_other_tokens() {
    Identifier::new(token(TokenKind::Int, "5"));
}

#[test]
#[should_panic]
fn test_integer_literal_rejects_mismatched_value() {
    IntegerLiteralExpr::new(token(TokenKind::Int, "5"), 6);
}

#[test]
#[should_panic]
fn test_boolean_literal_rejects_mismatched_value() {
    BooleanLiteralExpr::new(token(TokenKind::True, "true"), false);
}

#[test]
#[should_panic(expected = "prefix operator must be BANG or MINUS, got PLUS")]
fn test_prefix_rejects_other_operators() {
    PrefixExpr::new(token(TokenKind::Plus, "+"), ident("a"));
}

#[test]
#[should_panic(expected = "let statement built from a RETURN token")]
fn test_let_rejects_other_tokens() {
    LetStmt::new(
        token(TokenKind::Return, "return"),
        Identifier::new(token(TokenKind::Ident, "x")),
    );
}

#[test]
#[should_panic]
fn test_return_rejects_other_tokens() {
    ReturnStmt::new(token(TokenKind::Let, "let"), None);
}

#[test]
fn test_deeply_nested_tree_renders_and_drops() {
    let depth = 100_000;
    let mut expr = Expression::Integer(IntegerLiteralExpr::new(token(TokenKind::Int, "1"), 1));
    for _ in 0..depth {
        expr = Expression::Prefix(PrefixExpr::new(token(TokenKind::Bang, "!"), expr));
    }

    let rendered = expr.to_string();
    assert_eq!(rendered.len(), 3 * depth + 1);
    assert!(rendered.starts_with("(!(!"));

    drop(expr);
}
