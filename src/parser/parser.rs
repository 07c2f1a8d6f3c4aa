//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from a [`Lexer`] through a two-token window (current and peek) and uses
//! a Pratt parser approach with NUD/LED handlers for expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//!
//! Syntax errors never stop the parse. They are collected on the parser
//! and the statement that caused them is skipped or left incomplete.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, StmtHandler,
        StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions may be open at once before the parser gives up on
/// the statement with `ExpressionTooDeep`.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token under examination
    current_token: Token,
    /// The token after `current_token`
    peek_token: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently in progress
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`.
    ///
    /// Pulls two tokens so that both the current and peek slots are filled,
    /// and registers every statement, prefix and infix handler.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the window one token forward.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Checks that the peek token is of `expected_kind` without advancing.
    ///
    /// # Returns
    ///
    /// `Ok(())` on a match, otherwise an `UnexpectedToken` error positioned
    /// at the peek token. Callers abort the construct they are parsing.
    pub fn expect_peek(&self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token.kind == expected_kind {
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek_token.kind,
                },
                self.peek_token.span.start.clone(),
            ))
        }
    }

    /// Opens one level of expression nesting, failing once
    /// [`MAX_EXPRESSION_DEPTH`] levels are already open.
    pub fn enter_expression(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            return Err(Error::new(
                ErrorImpl::ExpressionTooDeep {
                    limit: MAX_EXPRESSION_DEPTH,
                },
                self.current_token.span.start.clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_expression(&mut self) {
        self.depth -= 1;
    }

    /// Records a diagnostic and carries on.
    pub fn record_error(&mut self, error: Error) {
        debug!(
            error = %error,
            offset = error.get_position().0,
            "recorded parse error"
        );
        self.errors.push(error);
    }

    /// Messages of every diagnostic so far, in the order they were found.
    /// An empty list means a clean parse.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Every diagnostic so far, with positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until EOF.
    ///
    /// A statement that fails to parse is dropped and its diagnostic
    /// recorded; parsing resumes at the following token.
    pub fn parse_program(&mut self) -> Program {
        let mut body = vec![];

        while self.current_token_kind() != TokenKind::Eof {
            match parse_stmt(self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => self.record_error(error),
            }
            self.advance();
        }

        debug!(
            statements = body.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        Program::new(body)
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and a
/// parser and parses all statements until EOF.
///
/// # Returns
///
/// The Program (possibly incomplete) and every diagnostic found.
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.errors)
}
