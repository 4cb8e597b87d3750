use std::io::{self, Read};

use super::Meter;
use crate::error::Unit;

/// Byte source that fails once more than `limit` bytes have been read.
#[derive(Debug)]
pub struct LimitedReader<R> {
    inner: R,
    meter: Meter,
}

impl<R: Read> LimitedReader<R> {
    /// Caps `inner` at `limit` bytes; `0` means no cap.
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            meter: Meter::new(limit, Unit::Bytes),
        }
    }

    /// Reads one byte, `None` at end of input.
    ///
    /// # Errors
    ///
    /// Errors of the wrapped source, or a [`ReadLimitExceeded`] payload once
    /// the byte just taken puts the count over the cap. That byte is not
    /// given back.
    ///
    /// [`ReadLimitExceeded`]: crate::ReadLimitExceeded
    pub fn read_one(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8];
        if self.inner.read(&mut byte)? == 0 {
            return Ok(None);
        }
        self.meter.record(1)?;
        Ok(Some(byte[0]))
    }
}

impl<R> LimitedReader<R> {
    /// Bytes delivered so far.
    pub fn units_read(&self) -> u64 {
        self.meter.read
    }

    /// The cap, `0` when unlimited.
    pub fn limit(&self) -> u64 {
        self.meter.limit
    }

    /// The wrapped source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps the source without closing it.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Closes the wrapped source by dropping it.
    pub fn close(self) {
        tracing::debug!(read = self.meter.read, "closing capped byte source");
        drop(self.inner);
    }
}

impl<R: Read> Read for LimitedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.meter.record(n)?;
        }
        Ok(n)
    }
}
