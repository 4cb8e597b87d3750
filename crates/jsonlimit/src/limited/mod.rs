//! Length-capped source decorators.
//!
//! [`LimitedReader`] counts bytes, [`LimitedCharReader`] counts characters.
//! Both fail a read once the running count goes past the cap, with an
//! [`io::Error`](std::io::Error) carrying [`ReadLimitExceeded`] so the failure
//! travels the same way as any other I/O error. A cap of zero disables the
//! check.
//!
//! The count only grows: neither wrapper supports seeking or rewinding, and
//! units already delivered are never given back.

mod bytes;
mod chars;

pub use bytes::LimitedReader;
pub use chars::LimitedCharReader;

use crate::error::{ReadLimitExceeded, Unit};

/// Shared counter and cap logic.
#[derive(Debug, Clone, Copy)]
struct Meter {
    read: u64,
    limit: u64,
    unit: Unit,
}

impl Meter {
    fn new(limit: u64, unit: Unit) -> Self {
        Self { read: 0, limit, unit }
    }

    /// Counts `n` delivered units and checks the cap.
    fn record(&mut self, n: usize) -> Result<(), ReadLimitExceeded> {
        self.read = self.read.saturating_add(n as u64);
        if self.limit > 0 && self.read > self.limit {
            tracing::debug!(
                read = self.read,
                limit = self.limit,
                unit = %self.unit,
                "read limit exceeded"
            );
            return Err(ReadLimitExceeded {
                read: self.read,
                limit: self.limit,
                unit: self.unit,
            });
        }
        Ok(())
    }
}
