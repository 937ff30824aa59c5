//! Helpers for line-oriented puzzle inputs

use crate::error::ParseError;
use std::fmt::Display;

/// Parse every non-blank line of `input` with `parse_line`
///
/// Lines are trimmed before parsing. The first failure is reported as
/// [`ParseError::Line`] with its 1-based line number.
///
/// ```
/// use aoc_solver::{parse_lines, ParseError};
///
/// let values = parse_lines("1\n\n 2 \n", |l| l.parse::<u32>()).unwrap();
/// assert_eq!(values, vec![1, 2]);
///
/// let err = parse_lines("1\nx\n", |l| l.parse::<u32>()).unwrap_err();
/// assert!(matches!(err, ParseError::Line { line: 2, .. }));
/// ```
pub fn parse_lines<'a, T, E, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    E: Display,
    F: FnMut(&'a str) -> Result<T, E>,
{
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| parse_line(line).map_err(|e| ParseError::at_line(line_no, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = parse_lines("\n\n7\nseven\n", |l| l.parse::<i32>()).unwrap_err();
        match err {
            ParseError::Line { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("invalid digit"), "{}", message);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_borrowed_lines() {
        let input = String::from("a b\n  c  \n");
        let lines: Vec<&str> = parse_lines(&input, Ok::<_, ParseError>).unwrap();
        assert_eq!(lines, vec!["a b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_lines("\n \n", |l| l.parse::<u8>()).unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        let err = ParseError::at_line(3, "bad token");
        assert_eq!(err.to_string(), "Invalid format: line 3: bad token");
    }
}
