//! Accumulator for the four hex digits of a `\uXXXX` escape.
//!
//! The result is a UTF-16 code unit rather than a `char`: surrogate halves
//! are legal here and get paired up by the caller.

use super::error::SyntaxError;

#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn hex_val(c: char) -> Option<u16> {
        c.to_digit(16).and_then(|d| u16::try_from(d).ok())
    }

    /// Feeds one hex digit; yields the code unit after the fourth.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<u16>, SyntaxError> {
        let d = Self::hex_val(c).ok_or(SyntaxError::InvalidUnicodeEscapeChar(c))?;
        debug_assert!(self.len < 4);

        self.acc = (self.acc << 4) | d;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        *self = Self::default();
        Ok(Some(unit))
    }
}
