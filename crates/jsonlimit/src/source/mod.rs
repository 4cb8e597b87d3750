//! Character-oriented input sources.
//!
//! [`std::io::Read`] covers byte sources. [`CharRead`] is its counterpart for
//! sources that hand out already-decoded characters: borrowed text
//! ([`StrReader`]) or bytes decoded under an [`Encoding`]
//! ([`DecodingReader`]).

use std::io;

mod decode;

pub use decode::{DecodingReader, Encoding};

/// A source of characters.
///
/// Mirrors [`io::Read`]: `read_chars` fills a prefix of `buf` and returns how
/// many characters it wrote, with `Ok(0)` meaning end of input (for a
/// non-empty `buf`).
pub trait CharRead {
    /// Reads up to `buf.len()` characters into `buf`.
    ///
    /// # Errors
    ///
    /// Any I/O or decoding failure of the underlying source.
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize>;

    /// Reads a single character, `None` at end of input.
    ///
    /// # Errors
    ///
    /// Same as [`read_chars`](Self::read_chars).
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let mut one = ['\0'];
        Ok(match self.read_chars(&mut one)? {
            0 => None,
            _ => Some(one[0]),
        })
    }

    /// Reads everything that is left into `out`, returning the number of
    /// characters appended.
    ///
    /// # Errors
    ///
    /// The first error of the underlying source other than
    /// [`io::ErrorKind::Interrupted`], which is retried.
    fn drain_into(&mut self, out: &mut String) -> io::Result<usize> {
        let mut chunk = ['\0'; 1024];
        let mut total = 0;
        loop {
            match self.read_chars(&mut chunk) {
                Ok(0) => return Ok(total),
                Ok(n) => {
                    out.extend(&chunk[..n]);
                    total += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl<C: CharRead + ?Sized> CharRead for &mut C {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read_chars(buf)
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

impl<C: CharRead + ?Sized> CharRead for Box<C> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read_chars(buf)
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// Characters of a borrowed string.
#[derive(Debug, Clone)]
pub struct StrReader<'a> {
    rest: core::str::Chars<'a>,
}

impl<'a> StrReader<'a> {
    /// Reads the characters of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { rest: text.chars() }
    }

    /// The part of the text not read yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.rest.as_str()
    }
}

impl<'a> From<&'a str> for StrReader<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl CharRead for StrReader<'_> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let mut n = 0;
        for (slot, ch) in buf.iter_mut().zip(self.rest.by_ref()) {
            *slot = ch;
            n += 1;
        }
        Ok(n)
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.rest.next())
    }
}
