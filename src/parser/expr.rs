use crate::{
    ast::{
        ast::Expression,
        expressions::{BooleanLiteralExpr, Identifier, InfixExpr, IntegerLiteralExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{precedence_for, Precedence},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    parser.enter_expression()?;
    let expression = parse_nud_then_led(parser, precedence);
    parser.leave_expression();

    expression
}

fn parse_nud_then_led(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.current_token().span.start.clone(),
        ));
    };

    let mut left = nud(parser)?;

    // While the upcoming operator binds tighter than `precedence`, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon
        && precedence < precedence_for(parser.peek_token_kind())
    {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expression::Integer(IntegerLiteralExpr::new(token, value))),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                token: token.literal.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_boolean_literal_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let value = token.kind == TokenKind::True;

    Ok(Expression::Boolean(BooleanLiteralExpr::new(token, value)))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expression::Prefix(PrefixExpr::new(operator_token, right)))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    let precedence = precedence_for(operator_token.kind);
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Ok(Expression::Infix(InfixExpr::new(left, operator_token, right)))
}
