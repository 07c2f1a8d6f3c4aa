//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based, character-level scanning (one token per call)
//! - Recognition of keywords, identifiers, integers, and operators
//! - Token position tracking for error reporting
//! - Turning unscannable input into `ILLEGAL` tokens instead of failing

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod property_tests;
