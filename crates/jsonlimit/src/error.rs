use core::fmt;
use std::io;

use thiserror::Error;

use crate::cursor::ParseError;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The limit a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    /// Total input length, in bytes or characters depending on the source.
    Total,
    /// Textual length of a single integer or floating-point literal.
    Number,
    /// Textual length of a single string literal.
    String,
}

impl LimitKind {
    /// Lower-case name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LimitKind::Total => "total",
            LimitKind::Number => "number",
            LimitKind::String => "string",
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced by the size checks.
#[derive(Debug, Error)]
pub enum Error {
    /// A builder limit was set to a negative value.
    #[error("cannot set the maximum {limit} length to a negative value ({value})")]
    InvalidArgument {
        /// The limit that was being configured.
        limit: LimitKind,
        /// The rejected value.
        value: i64,
    },

    /// A length exceeded its configured maximum.
    #[error("{kind} length ({observed}) exceeds the maximum length ({max})")]
    LimitExceeded {
        /// Which limit was exceeded.
        kind: LimitKind,
        /// The observed length.
        observed: usize,
        /// The configured maximum.
        max: usize,
    },

    /// Failure reported by the input source or the tokenizer.
    ///
    /// Read-cap violations ([`ReadLimitExceeded`]), malformed JSON
    /// ([`ParseError`]) and undecodable bytes all arrive here, next to
    /// genuine I/O errors.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The limit this error reports, if any.
    ///
    /// A read-cap violation from a length-capped source maps to
    /// [`LimitKind::Total`], since the cap is the total-length limit.
    #[must_use]
    pub fn limit_kind(&self) -> Option<LimitKind> {
        match self {
            Error::LimitExceeded { kind, .. } => Some(*kind),
            Error::Io(_) if self.read_limit().is_some() => Some(LimitKind::Total),
            _ => None,
        }
    }

    /// The read-cap violation carried by an [`Error::Io`], if that is what
    /// it is.
    #[must_use]
    pub fn read_limit(&self) -> Option<&ReadLimitExceeded> {
        self.io_payload()
    }

    /// The syntax error carried by an [`Error::Io`], if the input was
    /// malformed JSON.
    #[must_use]
    pub fn parse_error(&self) -> Option<&ParseError> {
        self.io_payload()
    }

    fn io_payload<T: std::error::Error + 'static>(&self) -> Option<&T> {
        match self {
            Error::Io(err) => err.get_ref()?.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Unit counted by a length-capped source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Bytes of a byte-oriented source.
    Bytes,
    /// Characters of a character-oriented source.
    Chars,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Bytes => "bytes",
            Unit::Chars => "chars",
        })
    }
}

/// Payload of the `io::Error` raised when a length-capped source delivers
/// more units than its cap allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("read {read} {unit}, more than the size limit of {limit} {unit}")]
pub struct ReadLimitExceeded {
    /// Units delivered so far, including the read that crossed the cap.
    pub read: u64,
    /// The configured cap.
    pub limit: u64,
    /// What was being counted.
    pub unit: Unit,
}

impl From<ReadLimitExceeded> for io::Error {
    fn from(err: ReadLimitExceeded) -> Self {
        io::Error::other(err)
    }
}
