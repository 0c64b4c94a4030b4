// Console input as a stream of whitespace-separated tokens
// A line holding several tokens answers several prompts in turn

use crate::session_errors::{SessionError, SessionResult};
use log::debug;
use std::collections::VecDeque;
use std::io::BufRead;
use std::num::IntErrorKind;

/// Why a typed token was not accepted at a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIssue {
    /// Parsed, but outside the accepted range
    OutOfRange,
    /// Not a number where one was expected
    Malformed,
}

/// Parse an integer and accept it only within `min..=max`
pub fn parse_int_in_range(token: &str, min: i64, max: i64) -> Result<i64, InputIssue> {
    let value: i64 = token.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputIssue::OutOfRange,
        _ => InputIssue::Malformed,
    })?;
    if value < min || value > max {
        return Err(InputIssue::OutOfRange);
    }
    Ok(value)
}

/// Parse a finite float and accept it only within `min..=max`
pub fn parse_float_in_range(token: &str, min: f64, max: f64) -> Result<f64, InputIssue> {
    let value: f64 = match token.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Err(InputIssue::Malformed),
    };
    if value < min || value > max {
        return Err(InputIssue::OutOfRange);
    }
    Ok(value)
}

pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
    lines_read: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
            lines_read: 0,
        }
    }

    /// Next token, reading more lines as needed. Blank lines are skipped.
    pub fn next_token(&mut self) -> SessionResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                debug!("Input closed after {} lines", self.lines_read);
                return Err(SessionError::InputClosed);
            }
            self.lines_read += 1;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines() {
        let mut reader = TokenReader::new(Cursor::new("2 3\n\n   a\n"));
        assert_eq!(reader.next_token().unwrap(), "2");
        assert_eq!(reader.next_token().unwrap(), "3");
        assert_eq!(reader.next_token().unwrap(), "a");
        assert_eq!(reader.lines_read(), 3);
        assert!(matches!(reader.next_token(), Err(SessionError::InputClosed)));
    }

    #[test]
    fn test_int_range_is_inclusive() {
        assert_eq!(parse_int_in_range("1", 1, 10), Ok(1));
        assert_eq!(parse_int_in_range("10", 1, 10), Ok(10));
        assert_eq!(parse_int_in_range("0", 1, 10), Err(InputIssue::OutOfRange));
        assert_eq!(parse_int_in_range("11", 1, 10), Err(InputIssue::OutOfRange));
        assert_eq!(parse_int_in_range("2.5", 1, 10), Err(InputIssue::Malformed));
        assert_eq!(parse_int_in_range("x", 1, 10), Err(InputIssue::Malformed));
    }

    #[test]
    fn test_huge_integers_are_out_of_range() {
        assert_eq!(
            parse_int_in_range("99999999999999999999", 1, 10),
            Err(InputIssue::OutOfRange)
        );
        assert_eq!(
            parse_int_in_range("-99999999999999999999", 1, 10),
            Err(InputIssue::OutOfRange)
        );
    }

    #[test]
    fn test_float_rejects_non_finite() {
        assert_eq!(parse_float_in_range("60.5", 45.0, 200.0), Ok(60.5));
        assert_eq!(parse_float_in_range("45", 45.0, 200.0), Ok(45.0));
        assert_eq!(parse_float_in_range("200.01", 45.0, 200.0), Err(InputIssue::OutOfRange));
        assert_eq!(parse_float_in_range("nan", 45.0, 200.0), Err(InputIssue::Malformed));
        assert_eq!(parse_float_in_range("inf", 45.0, 200.0), Err(InputIssue::Malformed));
        assert_eq!(parse_float_in_range("heavy", 45.0, 200.0), Err(InputIssue::Malformed));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = TokenReader::new(Cursor::new("x"));
        assert_eq!(reader.next_token().unwrap(), "x");
        assert!(matches!(reader.next_token(), Err(SessionError::InputClosed)));
    }
}
