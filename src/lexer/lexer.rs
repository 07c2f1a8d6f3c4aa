use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref INTEGER_LITERAL: Regex = Regex::new("^[0-9]+$").unwrap();
}

/// End-of-input sentinel, also used as the literal of the EOF token.
const EOF_CHAR: char = '\0';

/// A pull-based scanner over a source string.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// input is exhausted every further call yields an EOF token.
#[derive(Clone)]
pub struct Lexer {
    source: Vec<char>,
    /// Offset of `ch`
    pos: usize,
    /// Offset of the character after `ch`
    read_pos: usize,
    ch: char,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source: source.chars().collect(),
            pos: 0,
            read_pos: 0,
            ch: EOF_CHAR,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn read_char(&mut self) {
        if self.read_pos >= self.source.len() {
            self.ch = EOF_CHAR;
            self.pos = self.source.len();
            return;
        }

        self.ch = self.source[self.read_pos];
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn peek_char(&self) -> char {
        self.source.get(self.read_pos).copied().unwrap_or(EOF_CHAR)
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.pos;
        while !self.at_eof() && accept(self.ch) {
            self.read_char();
        }
        self.source[start..self.pos].iter().collect()
    }

    /// Emits a token covering the `len` characters starting at the current
    /// one and moves past them.
    fn single(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let literal: String = self.source[start..start + len].iter().collect();
        for _ in 0..len {
            self.read_char();
        }
        MK_TOKEN!(kind, literal, MK_SPAN!(start, start + len, self.file))
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(
                TokenKind::Eof,
                EOF_CHAR.to_string(),
                MK_SPAN!(self.pos, self.pos, self.file)
            );
        }

        match self.ch {
            '=' if self.peek_char() == '=' => self.single(TokenKind::Eq, 2),
            '!' if self.peek_char() == '=' => self.single(TokenKind::NotEq, 2),
            '=' => self.single(TokenKind::Assign, 1),
            '!' => self.single(TokenKind::Bang, 1),
            '+' => self.single(TokenKind::Plus, 1),
            '-' => self.single(TokenKind::Minus, 1),
            '*' => self.single(TokenKind::Asterisk, 1),
            '/' => self.single(TokenKind::Slash, 1),
            '<' => self.single(TokenKind::Lt, 1),
            '>' => self.single(TokenKind::Gt, 1),
            '(' => self.single(TokenKind::LParen, 1),
            ')' => self.single(TokenKind::RParen, 1),
            '{' => self.single(TokenKind::LBrace, 1),
            '}' => self.single(TokenKind::RBrace, 1),
            ',' => self.single(TokenKind::Comma, 1),
            ';' => self.single(TokenKind::Semicolon, 1),
            c if is_letter(c) => self.read_identifier(),
            c if c.is_ascii_digit() => self.read_number(),
            _ => {
                let token = self.single(TokenKind::Illegal, 1);
                trace!(literal = %token.literal, offset = token.span.start.0, "illegal character");
                token
            }
        }
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.pos;
        let ident = self.read_while(is_letter);
        let kind = lookup_ident(&ident);

        MK_TOKEN!(kind, ident, MK_SPAN!(start, self.pos, self.file))
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        let number = self.read_while(|c| c.is_ascii_digit() || c == '_');

        let kind = if INTEGER_LITERAL.is_match(&number) {
            TokenKind::Int
        } else {
            trace!(literal = %number, offset = start, "malformed number");
            TokenKind::Illegal
        };

        MK_TOKEN!(kind, number, MK_SPAN!(start, self.pos, self.file))
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Scans the whole source, returning every token up to and including the
/// first EOF.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
