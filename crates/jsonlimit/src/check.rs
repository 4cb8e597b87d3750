//! Entry points that size-check a whole JSON document.
//!
//! Every entry point applies the same limits. The streaming variants put a
//! length-capped wrapper around the source, with the total-length limit as
//! its cap, so oversized input is rejected while it is being read instead of
//! after it has been buffered.
//!
//! The source is consumed on failure: the wrapper is closed and the source
//! dropped. On success it is handed back, and closing it is up to the
//! caller. Pass `&mut source` to keep the source in both cases.

use std::io::Read;

use tracing::{debug, instrument};

use crate::{
    constraints::StreamReadConstraints,
    cursor::JsonCursor,
    error::Result,
    limited::{LimitedCharReader, LimitedReader},
    source::CharRead,
    validate::validate,
};

/// Cap for the length-capped wrappers; `0` leaves the source uncapped.
pub(crate) fn read_cap(constraints: &StreamReadConstraints) -> u64 {
    u64::try_from(constraints.max_total_length()).unwrap_or(u64::MAX)
}

/// Checks in-memory JSON text.
///
/// The total length (in characters) is checked first, then every literal.
///
/// # Errors
///
/// [`Error::LimitExceeded`](crate::Error::LimitExceeded) for the first
/// violated limit, [`Error::Io`](crate::Error::Io) for malformed JSON.
///
/// ```rust
/// use jsonlimit::{LimitKind, StreamReadConstraints, check_text};
///
/// let constraints = StreamReadConstraints::builder()
///     .with_max_total_length(5)?
///     .build();
/// let err = check_text(&constraints, r#"{"a":1.0,"b":"xyz"}"#).unwrap_err();
/// assert_eq!(err.limit_kind(), Some(LimitKind::Total));
/// assert_eq!(err.to_string(), "total length (19) exceeds the maximum length (5)");
/// # Ok::<(), jsonlimit::Error>(())
/// ```
#[instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn check_text(constraints: &StreamReadConstraints, text: &str) -> Result<()> {
    constraints.validate_total_length(text.chars().count())?;
    validate(constraints, &mut JsonCursor::from_text(text))
}

/// Checks JSON read from a character source, capped at the total-length
/// limit in characters.
///
/// Returns the source once the check passes.
///
/// # Errors
///
/// As [`check_text`], plus I/O errors of the source. Crossing the cap fails
/// with an [`Error::Io`](crate::Error::Io) carrying
/// [`ReadLimitExceeded`](crate::ReadLimitExceeded). The source is dropped.
#[instrument(level = "debug", skip_all, fields(cap = constraints.max_total_length()))]
pub fn check_reader<C: CharRead>(constraints: &StreamReadConstraints, source: C) -> Result<C> {
    let mut limited = LimitedCharReader::new(source, read_cap(constraints));
    let outcome = validate(constraints, &mut JsonCursor::new(&mut limited));
    match outcome {
        Ok(()) => Ok(limited.into_inner()),
        Err(err) => {
            debug!(read = limited.units_read(), error = %err, "size check failed");
            limited.close();
            Err(err)
        }
    }
}

/// Checks UTF-8 JSON read from a byte source, capped at the total-length
/// limit in bytes.
///
/// Returns the source once the check passes.
///
/// # Errors
///
/// As [`check_reader`]; bytes that are not valid UTF-8 fail with an
/// [`Error::Io`](crate::Error::Io) of kind
/// [`InvalidData`](std::io::ErrorKind::InvalidData).
///
/// ```rust
/// use jsonlimit::{StreamReadConstraints, check_stream};
///
/// let input: &[u8] = br#"{"pi": 3.14159}"#;
/// let rest = check_stream(StreamReadConstraints::defaults(), input)?;
/// assert!(rest.is_empty());
/// # Ok::<(), jsonlimit::Error>(())
/// ```
#[instrument(level = "debug", skip_all, fields(cap = constraints.max_total_length()))]
pub fn check_stream<R: Read>(constraints: &StreamReadConstraints, source: R) -> Result<R> {
    let mut limited = LimitedReader::new(source, read_cap(constraints));
    let outcome = validate(constraints, &mut JsonCursor::from_reader(&mut limited));
    match outcome {
        Ok(()) => Ok(limited.into_inner()),
        Err(err) => {
            debug!(read = limited.units_read(), error = %err, "size check failed");
            limited.close();
            Err(err)
        }
    }
}
