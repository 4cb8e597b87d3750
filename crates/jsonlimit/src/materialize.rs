//! Size checks that keep the text they read.
//!
//! These drain the capped source into a `String` first and check the text
//! afterwards, for callers that need the document in memory anyway.

use std::io::Read;

use tracing::{debug, instrument};

use crate::{
    check::{check_text, read_cap},
    constraints::StreamReadConstraints,
    error::Result,
    limited::{LimitedCharReader, LimitedReader},
    source::{CharRead, DecodingReader, Encoding},
};

/// Text drained from a source, with the source handed back.
#[derive(Debug)]
pub struct Materialized<S> {
    /// The full document.
    pub text: String,
    /// The source, at end of input. Closing it is up to the caller.
    pub source: S,
}

/// Reads all of `source`, capped at the total-length limit in characters, and
/// checks the result with [`check_text`].
///
/// # Errors
///
/// As [`check_reader`](crate::check_reader). The source is dropped.
///
/// ```rust
/// use jsonlimit::{StrReader, StreamReadConstraints, materialize_reader};
///
/// let doc = materialize_reader(StreamReadConstraints::defaults(), StrReader::new("[1, 2]"))?;
/// assert_eq!(doc.text, "[1, 2]");
/// assert_eq!(doc.source.remaining(), "");
/// # Ok::<(), jsonlimit::Error>(())
/// ```
#[instrument(level = "debug", skip_all, fields(cap = constraints.max_total_length()))]
pub fn materialize_reader<C: CharRead>(
    constraints: &StreamReadConstraints,
    source: C,
) -> Result<Materialized<C>> {
    let mut limited = LimitedCharReader::new(source, read_cap(constraints));
    let mut text = String::new();
    let outcome = match limited.drain_into(&mut text) {
        Ok(_) => check_text(constraints, &text),
        Err(err) => Err(err.into()),
    };
    match outcome {
        Ok(()) => Ok(Materialized {
            text,
            source: limited.into_inner(),
        }),
        Err(err) => {
            debug!(read = limited.units_read(), error = %err, "size check failed");
            limited.close();
            Err(err)
        }
    }
}

/// Reads all of `source`, capped at the total-length limit in bytes, decodes
/// it with `encoding` and checks the result with [`check_text`].
///
/// # Errors
///
/// As [`check_stream`](crate::check_stream); bytes that do not decode under
/// `encoding` fail with [`InvalidData`](std::io::ErrorKind::InvalidData). The
/// source is dropped.
#[instrument(level = "debug", skip_all, fields(cap = constraints.max_total_length(), encoding = %encoding))]
pub fn materialize_stream<R: Read>(
    constraints: &StreamReadConstraints,
    source: R,
    encoding: Encoding,
) -> Result<Materialized<R>> {
    let mut decoder = DecodingReader::new(LimitedReader::new(source, read_cap(constraints)), encoding);
    let mut text = String::new();
    let outcome = match decoder.drain_into(&mut text) {
        Ok(_) => check_text(constraints, &text),
        Err(err) => Err(err.into()),
    };
    let limited = decoder.into_inner();
    match outcome {
        Ok(()) => Ok(Materialized {
            text,
            source: limited.into_inner(),
        }),
        Err(err) => {
            debug!(read = limited.units_read(), error = %err, "size check failed");
            limited.close();
            Err(err)
        }
    }
}
