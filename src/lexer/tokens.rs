use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("fn", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map
    };
}

/// Classifies an identifier spelling, returning its keyword kind if it is
/// reserved and [`TokenKind::Ident`] otherwise.
pub fn lookup_ident(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Ident)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,

    // Identifiers + literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Asterisk, // *
    Bang,     // !
    Gt,       // >
    Lt,       // <
    Minus,    // -
    Plus,     // +
    Slash,    // /

    // Delimiters
    Comma,
    LBrace,
    LParen,
    RBrace,
    RParen,
    Semicolon,

    // Reserved
    Else,
    Eq,    // ==
    False,
    Function,
    If,
    Let,
    NotEq, // !=
    Return,
    True,
}

impl TokenKind {
    /// The upper-case name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Bang => "BANG",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Comma => "COMMA",
            TokenKind::LBrace => "LBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RBrace => "RBRACE",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Else => "ELSE",
            TokenKind::Eq => "EQ",
            TokenKind::False => "FALSE",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Let => "LET",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{}({})", self.kind, self.literal)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
