use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A recoverable diagnostic produced while parsing.
///
/// The parser collects these rather than stopping at the first one; the
/// position points at the token the diagnostic is about.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::ExpressionTooDeep { .. } => "ExpressionTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, received } => {
                if *received == TokenKind::Illegal {
                    ErrorTip::Suggestion(format!(
                        "Expected {}, found a character that cannot start any token",
                        expected
                    ))
                } else {
                    ErrorTip::Suggestion(format!("Expected {}, found {}", expected, received))
                }
            }
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal } => ErrorTip::Suggestion(
                String::from("Unrecognised character or malformed number"),
            ),
            ErrorImpl::NoPrefixParseFn { .. } => ErrorTip::None,
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpressionTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Break the expression up with `let` bindings",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expecting next token to be {expected}, got {received} instead")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("no prefix parse function for type {kind}")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
    #[error("expression nested deeper than {limit} levels")]
    ExpressionTooDeep { limit: usize },
}
