use std::io;

use super::Meter;
use crate::{error::Unit, source::CharRead};

/// Character source that fails once more than `limit` characters have been
/// read.
#[derive(Debug)]
pub struct LimitedCharReader<C> {
    inner: C,
    meter: Meter,
}

impl<C: CharRead> LimitedCharReader<C> {
    /// Caps `inner` at `limit` characters; `0` means no cap.
    pub fn new(inner: C, limit: u64) -> Self {
        Self {
            inner,
            meter: Meter::new(limit, Unit::Chars),
        }
    }

    /// Reads one character, `None` at end of input. Same as
    /// [`CharRead::read_char`].
    ///
    /// # Errors
    ///
    /// Errors of the wrapped source, or a [`ReadLimitExceeded`] payload once
    /// the character just taken puts the count over the cap.
    ///
    /// [`ReadLimitExceeded`]: crate::ReadLimitExceeded
    pub fn read_one(&mut self) -> io::Result<Option<char>> {
        self.read_char()
    }
}

impl<C> LimitedCharReader<C> {
    /// Characters delivered so far.
    pub fn units_read(&self) -> u64 {
        self.meter.read
    }

    /// The cap, `0` when unlimited.
    pub fn limit(&self) -> u64 {
        self.meter.limit
    }

    /// The wrapped source.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwraps the source without closing it.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Closes the wrapped source by dropping it.
    pub fn close(self) {
        tracing::debug!(read = self.meter.read, "closing capped char source");
        drop(self.inner);
    }
}

impl<C: CharRead> CharRead for LimitedCharReader<C> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let n = self.inner.read_chars(buf)?;
        if n > 0 {
            self.meter.record(n)?;
        }
        Ok(n)
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        let ch = self.inner.read_char()?;
        if ch.is_some() {
            self.meter.record(1)?;
        }
        Ok(ch)
    }
}
