#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A character offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the character at `position`.
///
/// Returns the 1-based line number, the line's text (with its newline) and
/// the offset of `position` within that line. A position at the very end of
/// the source maps onto the last line; anything past that is `None`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    // EOF sits one past the last character
    if pos == start {
        let last = source.split_inclusive('\n').last().unwrap_or("");
        let line_number = source.split_inclusive('\n').count().max(1);
        let column = last.trim_end_matches(|c: char| c == '\n' || c == '\r').chars().count();
        return Some((line_number, last.to_string(), column));
    }

    None
}

/// Renders a diagnostic against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (Expected ASSIGN, found INT)
/// -> test.lang
///   |
/// 1 | let x 5;
///   | ------^ expecting next token to be ASSIGN, got INT instead
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        rendered.push_str(&format!("   {}\n", error));
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$} {}\n", "|", "^", error));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::parser::parser::parse;

    use super::{get_line_at_position, render_error};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        assert_eq!(get_line_at_position("", 0), Some((1, String::new(), 0)));
        assert!(get_line_at_position("let x", 9).is_none());
    }

    #[test]
    fn test_get_line_at_end_of_input_after_newline() {
        assert_eq!(
            get_line_at_position("let x\n", 6),
            Some((1, "let x\n".to_string(), 5))
        );
        assert_eq!(
            get_line_at_position("a;\nlet x\r\n", 10),
            Some((2, "let x\r\n".to_string(), 5))
        );
    }

    #[test]
    fn test_render_error_at_end_of_input() {
        let source = "let x\n";
        let (_, errors) = parse(source.to_string(), Some("test.lang".to_string()));

        let rendered = render_error(&errors[0], source, "test.lang");

        assert_eq!(
            rendered,
            "Error: UnexpectedToken (Expected ASSIGN, found EOF)\n\
             -> test.lang\n  \
             |\n\
             1 | let x\n  \
             | -----^ expecting next token to be ASSIGN, got EOF instead\n"
        );
    }

    #[test]
    fn test_render_error() {
        let source = "let y = 1;\n  let x 5;\n";
        let (_, errors) = parse(source.to_string(), Some("test.lang".to_string()));

        let rendered = render_error(&errors[0], source, "test.lang");

        assert_eq!(
            rendered,
            "Error: UnexpectedToken (Expected ASSIGN, found INT)\n\
             -> test.lang\n  \
             |\n\
             2 | let x 5;\n  \
             | ------^ expecting next token to be ASSIGN, got INT instead\n"
        );
    }
}
