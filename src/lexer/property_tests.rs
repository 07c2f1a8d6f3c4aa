//! Property-based tests for the lexer.
//!
//! These tests use `proptest` to verify lexer invariants over generated inputs:
//!
//! 1. **Lexer never panics** - arbitrary string input always produces tokens
//! 2. **EOF is always last** - `tokenize` ends with exactly one EOF
//! 3. **Spans stay within the input** and never overlap
//! 4. **Literals are exact source text** for every non-EOF token

use proptest::prelude::*;

use super::lexer::{tokenize, Lexer};
use super::tokens::TokenKind;

proptest! {
    #[test]
    fn lexer_never_panics(source in "\\PC{0,200}") {
        let _ = tokenize(source, None);
    }

    #[test]
    fn eof_is_last_and_unique(source in "\\PC{0,200}") {
        let tokens = tokenize(source, None);

        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }

    #[test]
    fn spans_within_input_and_ordered(source in "[a-z0-9_ =!<>+*/;(){},@\\-]{0,120}") {
        let len = source.chars().count() as u32;
        let tokens = tokenize(source, None);

        let mut previous_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start.0 <= token.span.end.0);
            prop_assert!(token.span.end.0 <= len);
            prop_assert!(token.span.start.0 >= previous_end);
            previous_end = token.span.end.0;
        }
    }

    #[test]
    fn literals_match_source(source in "[a-z0-9_ =!<>+*/;(){},@\\-]{0,120}") {
        let chars: Vec<char> = source.chars().collect();
        let tokens = tokenize(source, None);

        for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
            let text: String = chars[token.span.start.0 as usize..token.span.end.0 as usize]
                .iter()
                .collect();
            prop_assert_eq!(&token.literal, &text);
        }
    }

    #[test]
    fn eof_repeats_forever(source in "[a-z0-9 ;]{0,40}", extra in 1usize..10) {
        let mut lexer = Lexer::new(source, None);
        while lexer.next_token().kind != TokenKind::Eof {}

        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }
}
