// Row letters and 1-based position numbers as typed at the console

use crate::config::ROW_LETTER_LIMIT;
use crate::input::{parse_int_in_range, InputIssue};
use std::fmt;

/// A row named by its letter, 'A' is index 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(usize);

impl RowId {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ROW_LETTER_LIMIT).then_some(Self(index))
    }

    /// Case-insensitive; anything outside 'A'..='J' is rejected
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        Self::from_index((upper as u8 - b'A') as usize)
    }

    /// Resolve a typed token against the rows that actually exist.
    /// Only the first character counts, so "b" and "Bravo" both name row B.
    pub fn parse(token: &str, row_count: usize) -> Result<Self, InputIssue> {
        let first = token.chars().next().ok_or(InputIssue::OutOfRange)?;
        match Self::from_letter(first) {
            Some(row) if row.0 < row_count => Ok(row),
            _ => Err(InputIssue::OutOfRange),
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn letter(self) -> char {
        (b'A' + self.0 as u8) as char
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A 1-based position number within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionId(usize);

impl PositionId {
    /// Accepts 1..=row_len
    pub fn parse(token: &str, row_len: usize) -> Result<Self, InputIssue> {
        let number = parse_int_in_range(token, 1, row_len as i64)?;
        Ok(Self(number as usize - 1))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
