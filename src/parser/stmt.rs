use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Leaves the current token on the statement's `;`, or on EOF if the
/// statement is unterminated.
fn skip_to_semicolon(parser: &mut Parser) {
    while !matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::Eof
    ) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect_peek(TokenKind::Ident)?;

    let start_token = parser.current_token().clone();
    let identifier = Identifier::new(parser.peek_token().clone());
    parser.advance();

    parser.expect_peek(TokenKind::Assign)?;

    // the bound value is skipped up to `;`
    skip_to_semicolon(parser);

    Ok(Statement::Let(LetStmt::new(start_token, identifier)))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let stmt = ReturnStmt::new(parser.current_token().clone(), None);

    parser.advance();
    skip_to_semicolon(parser);

    Ok(Statement::Return(stmt))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start_token = parser.current_token().clone();

    let expression = match parse_expr(parser, Precedence::Lowest) {
        Ok(expression) => Some(expression),
        Err(error) => {
            let too_deep = matches!(error.get_kind(), ErrorImpl::ExpressionTooDeep { .. });
            parser.record_error(error);

            // the rest of an over-deep statement is discarded
            if too_deep {
                skip_to_semicolon(parser);
                return Ok(Statement::Expression(ExpressionStmt::new(start_token, None)));
            }
            None
        }
    };

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStmt::new(
        start_token,
        expression,
    )))
}
