use core::fmt;
use std::io::{self, Read};

use super::CharRead;

const READ_CHUNK: usize = 8 * 1024;

/// Character encoding of a byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8.
    #[default]
    Utf8,
    /// UTF-16, little endian.
    Utf16Le,
    /// UTF-16, big endian.
    Utf16Be,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

impl Encoding {
    /// Resolves a label such as `"utf-8"`, `"UTF-16LE"` or `"iso-8859-1"`.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    #[must_use]
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        Some(match label.as_str() {
            "utf-8" | "utf8" => Encoding::Utf8,
            "utf-16le" | "utf16le" => Encoding::Utf16Le,
            "utf-16be" | "utf16be" => Encoding::Utf16Be,
            "iso-8859-1" | "iso8859-1" | "latin1" | "l1" => Encoding::Latin1,
            _ => return None,
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Latin1 => "ISO-8859-1",
        })
    }
}

/// Decodes characters out of a byte source.
///
/// Invalid sequences and sequences cut short by the end of input fail with
/// [`io::ErrorKind::InvalidData`]. The reader pulls bytes from `inner` in
/// blocks and keeps an incomplete trailing sequence until the next block
/// arrives.
#[derive(Debug)]
pub struct DecodingReader<R> {
    inner: R,
    encoding: Encoding,
    pending: Vec<u8>,
    pos: usize,
    consumed: u64,
    eof: bool,
}

impl<R: Read> DecodingReader<R> {
    /// Decodes `inner` as `encoding`.
    pub fn new(inner: R, encoding: Encoding) -> Self {
        Self {
            inner,
            encoding,
            pending: Vec::new(),
            pos: 0,
            consumed: 0,
            eof: false,
        }
    }

    /// The encoding in use.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns the byte source. Bytes read ahead but not decoded are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> io::Result<bool> {
        if self.eof {
            return Ok(false);
        }
        self.pending.drain(..self.pos);
        self.pos = 0;

        let mut chunk = [0u8; READ_CHUNK];
        let n = loop {
            match self.inner.read(&mut chunk) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };
        if n == 0 {
            self.eof = true;
            return Ok(false);
        }
        self.pending.extend_from_slice(&chunk[..n]);
        Ok(true)
    }

    /// Decodes the next character from `pending`, or `None` when more bytes
    /// are needed (or none are left).
    fn decode_next(&mut self) -> io::Result<Option<char>> {
        let rest = &self.pending[self.pos..];
        if rest.is_empty() {
            return Ok(None);
        }
        let decoded = match self.encoding {
            Encoding::Utf8 => match bstr::decode_utf8(rest) {
                (Some(ch), len) => Some((ch, len)),
                // A maximal prefix running to the end of the block may still
                // complete once more bytes arrive.
                (None, len) if len == rest.len() && !self.eof => None,
                (None, _) => return Err(self.invalid()),
            },
            Encoding::Latin1 => Some((char::from(rest[0]), 1)),
            Encoding::Utf16Le | Encoding::Utf16Be => self.decode_utf16(rest)?,
        };
        Ok(decoded.map(|(ch, len)| {
            self.pos += len;
            self.consumed += len as u64;
            ch
        }))
    }

    fn decode_utf16(&self, rest: &[u8]) -> io::Result<Option<(char, usize)>> {
        let unit = |at: usize| -> Option<u16> {
            let pair = [*rest.get(at)?, *rest.get(at + 1)?];
            Some(match self.encoding {
                Encoding::Utf16Le => u16::from_le_bytes(pair),
                _ => u16::from_be_bytes(pair),
            })
        };
        let Some(first) = unit(0) else {
            return self.incomplete();
        };
        let (units, len) = if (0xD800..0xDC00).contains(&first) {
            let Some(second) = unit(2) else {
                return self.incomplete();
            };
            ([first, second], 4)
        } else {
            ([first, 0], 2)
        };
        match char::decode_utf16(units[..len / 2].iter().copied()).next() {
            Some(Ok(ch)) => Ok(Some((ch, len))),
            _ => Err(self.invalid()),
        }
    }

    fn incomplete<T>(&self) -> io::Result<Option<T>> {
        if self.eof {
            Err(self.invalid())
        } else {
            Ok(None)
        }
    }

    fn invalid(&self) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "invalid {} sequence at byte offset {}",
                self.encoding, self.consumed
            ),
        )
    }
}

impl<R: Read> CharRead for DecodingReader<R> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let mut produced = 0;
        while produced < buf.len() {
            if let Some(ch) = self.decode_next()? {
                buf[produced] = ch;
                produced += 1;
                continue;
            }
            // Hand back what is decoded rather than block on another read.
            if produced > 0 {
                break;
            }
            if !self.refill()? {
                if self.pos < self.pending.len() {
                    return Err(self.invalid());
                }
                break;
            }
        }
        Ok(produced)
    }
}
