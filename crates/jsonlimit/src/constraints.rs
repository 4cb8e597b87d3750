//! Limits applied while JSON input is being read.
//!
//! The limits guard against malicious input by rejecting "too big" constructs
//! before they are handed to anything expensive, such as arbitrary-precision
//! number parsing or large string allocations downstream.
//!
//! Lengths are counted in units of the literal's rendered text (characters),
//! not in numeric magnitude or decoded byte size.
//!
//! ```
//! use jsonlimit::StreamReadConstraints;
//!
//! let constraints = StreamReadConstraints::builder()
//!     .with_max_number_length(20)?
//!     .with_max_string_length(4096)?
//!     .build();
//! assert_eq!(constraints.max_number_length(), 20);
//! assert_eq!(
//!     constraints.max_total_length(),
//!     StreamReadConstraints::defaults().max_total_length()
//! );
//! # Ok::<(), jsonlimit::Error>(())
//! ```

use tracing::debug;

use crate::error::{Error, LimitKind, Result};

/// Default maximum total length, in bytes or characters depending on the
/// source kind.
pub const DEFAULT_MAX_TOTAL_LENGTH: usize = 100_000_000;

/// Default maximum textual length of a number literal.
pub const DEFAULT_MAX_NUMBER_LENGTH: usize = 1_000;

/// Default maximum textual length of a string literal.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1_000_000;

static DEFAULT: StreamReadConstraints = StreamReadConstraints {
    max_total_length: DEFAULT_MAX_TOTAL_LENGTH,
    max_number_length: DEFAULT_MAX_NUMBER_LENGTH,
    max_string_length: DEFAULT_MAX_STRING_LENGTH,
};

/// Immutable set of limits for a streaming read.
///
/// Build one with [`StreamReadConstraints::builder`], or derive a variant of
/// an existing set with [`StreamReadConstraints::rebuild`]. Values are `Copy`
/// and may be shared across threads.
///
/// # Default
///
/// | limit  | value         |
/// |--------|---------------|
/// | total  | `100_000_000` |
/// | number | `1_000`       |
/// | string | `1_000_000`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StreamReadConstraints {
    max_total_length: usize,
    max_number_length: usize,
    max_string_length: usize,
}

impl Default for StreamReadConstraints {
    fn default() -> Self {
        DEFAULT
    }
}

impl StreamReadConstraints {
    /// The shared default instance.
    #[must_use]
    pub fn defaults() -> &'static StreamReadConstraints {
        &DEFAULT
    }

    /// A builder seeded with the default limits.
    pub fn builder() -> StreamReadConstraintsBuilder {
        StreamReadConstraintsBuilder::from(DEFAULT)
    }

    /// A builder seeded with the limits of `self`.
    pub fn rebuild(&self) -> StreamReadConstraintsBuilder {
        StreamReadConstraintsBuilder::from(*self)
    }

    /// Maximum total length, in bytes or characters depending on the source.
    #[must_use]
    pub fn max_total_length(&self) -> usize {
        self.max_total_length
    }

    /// Maximum textual length of a number literal.
    #[must_use]
    pub fn max_number_length(&self) -> usize {
        self.max_number_length
    }

    /// Maximum textual length of a string literal.
    #[must_use]
    pub fn max_string_length(&self) -> usize {
        self.max_string_length
    }

    /// Checks the length of a fully known input.
    ///
    /// Unlike the streaming caps, a maximum of zero is not "unlimited" here:
    /// only empty input passes a zero limit.
    ///
    /// # Errors
    ///
    /// [`Error::LimitExceeded`] with [`LimitKind::Total`] if `length` is over
    /// the maximum.
    pub fn validate_total_length(&self, length: usize) -> Result<()> {
        check(LimitKind::Total, length, self.max_total_length)
    }

    /// Checks the textual length of an integer literal.
    ///
    /// # Errors
    ///
    /// [`Error::LimitExceeded`] with [`LimitKind::Number`] if `length` is over
    /// the maximum.
    pub fn validate_integer_length(&self, length: usize) -> Result<()> {
        check(LimitKind::Number, length, self.max_number_length)
    }

    /// Checks the textual length of a floating-point literal.
    ///
    /// Same limit as [`validate_integer_length`](Self::validate_integer_length);
    /// the separate entry point lets callers tell the two literal kinds apart.
    ///
    /// # Errors
    ///
    /// [`Error::LimitExceeded`] with [`LimitKind::Number`] if `length` is over
    /// the maximum.
    pub fn validate_fp_length(&self, length: usize) -> Result<()> {
        check(LimitKind::Number, length, self.max_number_length)
    }

    /// Checks the length of a string literal.
    ///
    /// # Errors
    ///
    /// [`Error::LimitExceeded`] with [`LimitKind::String`] if `length` is over
    /// the maximum.
    pub fn validate_string_length(&self, length: usize) -> Result<()> {
        check(LimitKind::String, length, self.max_string_length)
    }
}

fn check(kind: LimitKind, observed: usize, max: usize) -> Result<()> {
    if observed > max {
        debug!(%kind, observed, max, "length limit exceeded");
        return Err(Error::LimitExceeded {
            kind,
            observed,
            max,
        });
    }
    Ok(())
}

/// Builder for [`StreamReadConstraints`].
///
/// Setters consume the builder and hand it back on success, so a rejected
/// value leaves nothing half-configured behind:
///
/// ```
/// use jsonlimit::{Error, LimitKind, StreamReadConstraints};
///
/// let err = StreamReadConstraints::builder()
///     .with_max_string_length(-1)
///     .unwrap_err();
/// assert!(matches!(
///     err,
///     Error::InvalidArgument { limit: LimitKind::String, value: -1 }
/// ));
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct StreamReadConstraintsBuilder {
    max_total_length: usize,
    max_number_length: usize,
    max_string_length: usize,
}

impl From<StreamReadConstraints> for StreamReadConstraintsBuilder {
    fn from(src: StreamReadConstraints) -> Self {
        Self {
            max_total_length: src.max_total_length,
            max_number_length: src.max_number_length,
            max_string_length: src.max_string_length,
        }
    }
}

impl StreamReadConstraintsBuilder {
    /// Sets the maximum total length (in bytes or characters, depending on the
    /// source kind). The default is 100,000,000.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `max` is negative.
    pub fn with_max_total_length(mut self, max: i64) -> Result<Self> {
        self.max_total_length = non_negative(LimitKind::Total, max)?;
        Ok(self)
    }

    /// Sets the maximum number literal length. The default is 1,000.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `max` is negative.
    pub fn with_max_number_length(mut self, max: i64) -> Result<Self> {
        self.max_number_length = non_negative(LimitKind::Number, max)?;
        Ok(self)
    }

    /// Sets the maximum string literal length. The default is 1,000,000.
    ///
    /// Setting this lower than the number limit is not recommended.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `max` is negative.
    pub fn with_max_string_length(mut self, max: i64) -> Result<Self> {
        self.max_string_length = non_negative(LimitKind::String, max)?;
        Ok(self)
    }

    /// Snapshots the current settings into an immutable constraint set.
    #[must_use]
    pub fn build(&self) -> StreamReadConstraints {
        StreamReadConstraints {
            max_total_length: self.max_total_length,
            max_number_length: self.max_number_length,
            max_string_length: self.max_string_length,
        }
    }
}

fn non_negative(limit: LimitKind, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidArgument { limit, value })
}
