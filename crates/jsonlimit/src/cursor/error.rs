use std::io;

use thiserror::Error;

/// Malformed JSON, with the line and column where the problem was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError {
    pub(crate) source: SyntaxError,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParseError {
    /// What went wrong.
    #[must_use]
    pub fn syntax_error(&self) -> &SyntaxError {
        &self.source
    }

    /// One-based line number.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column of the offending character (one past the last
    /// character at end of input).
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// The kinds of malformed input the cursor reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that cannot appear here.
    #[error("invalid character '{}'", .0.escape_debug())]
    InvalidCharacter(char),
    /// `\` followed by something other than a JSON escape.
    #[error("invalid escape sequence '\\{}'", .0.escape_debug())]
    InvalidEscape(char),
    /// A non-hex digit inside `\uXXXX`.
    #[error("invalid unicode escape sequence at character: '{}'", .0.escape_debug())]
    InvalidUnicodeEscapeChar(char),
    /// A surrogate escape without its other half.
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscapeSequence(u32),
    #[error("leading zeros are not allowed")]
    LeadingZero,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
