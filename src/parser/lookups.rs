use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

/// Returns how tightly `kind` binds as an infix operator.
///
/// Anything that is not an infix operator is `Lowest`, which is what stops
/// the expression loop at statement terminators and stray tokens.
pub fn precedence_for(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.led(TokenKind::Eq, parse_infix_expr);
    parser.led(TokenKind::NotEq, parse_infix_expr);
    parser.led(TokenKind::Lt, parse_infix_expr);
    parser.led(TokenKind::Gt, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, parse_infix_expr);
    parser.led(TokenKind::Minus, parse_infix_expr);
    parser.led(TokenKind::Slash, parse_infix_expr);
    parser.led(TokenKind::Asterisk, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Ident, parse_identifier_expr);
    parser.nud(TokenKind::Int, parse_integer_literal_expr);
    parser.nud(TokenKind::True, parse_boolean_literal_expr);
    parser.nud(TokenKind::False, parse_boolean_literal_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
