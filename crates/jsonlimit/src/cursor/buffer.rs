#![expect(clippy::inline_always)]

use std::{collections::VecDeque, io};

use crate::source::CharRead;

const FILL_CHUNK: usize = 4 * 1024;

/// Characters read from the source but not consumed by the lexer yet.
#[derive(Debug)]
pub(crate) struct Buffer {
    data: VecDeque<char>,
    chunk: Box<[char]>,
}

impl Buffer {
    pub(crate) fn new() -> Self {
        Self {
            data: VecDeque::new(),
            chunk: vec!['\0'; FILL_CHUNK].into_boxed_slice(),
        }
    }

    /// Pulls the next block from `source`, returning the number of characters
    /// added (`0` at end of input).
    pub(crate) fn fill<C: CharRead + ?Sized>(&mut self, source: &mut C) -> io::Result<usize> {
        let n = loop {
            match source.read_chars(&mut self.chunk) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                other => break other?,
            }
        };
        self.data.extend(&self.chunk[..n]);
        Ok(n)
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<char> {
        self.data.front().copied()
    }

    /// Moves the longest prefix matching `predicate` into `dst`, returning how
    /// many characters moved.
    #[inline]
    pub(crate) fn copy_while<F>(&mut self, dst: &mut String, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut copied = 0;
        loop {
            let (front_len, prefix) = {
                let (front, _) = self.data.as_slices();
                if front.is_empty() {
                    break;
                }

                let prefix = front.iter().take_while(|&&ch| predicate(ch)).count();
                if prefix == 0 {
                    break;
                }

                (front.len(), prefix)
            };

            dst.extend(self.data.drain(..prefix));
            copied += prefix;

            if prefix < front_len {
                break;
            }
        }
        copied
    }
}

impl Iterator for Buffer {
    type Item = char;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.data.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StrReader;

    #[test]
    fn fill_appends_blocks() {
        let text = "a".repeat(FILL_CHUNK + 10);
        let mut source = StrReader::new(&text);
        let mut buffer = Buffer::new();
        assert_eq!(buffer.fill(&mut source).unwrap(), FILL_CHUNK);
        assert_eq!(buffer.fill(&mut source).unwrap(), 10);
        assert_eq!(buffer.fill(&mut source).unwrap(), 0);
        assert_eq!(buffer.count(), FILL_CHUNK + 10);
    }

    #[test]
    fn copy_while_stops_at_first_mismatch() {
        let mut buffer = Buffer::new();
        buffer.fill(&mut StrReader::new("123abc")).unwrap();
        let mut digits = String::new();
        assert_eq!(buffer.copy_while(&mut digits, |c| c.is_ascii_digit()), 3);
        assert_eq!(digits, "123");
        assert_eq!(buffer.peek(), Some('a'));
    }

    #[test]
    fn copy_while_drains_everything_when_all_match() {
        let mut buffer = Buffer::new();
        buffer.fill(&mut StrReader::new("9999")).unwrap();
        let mut digits = String::new();
        assert_eq!(buffer.copy_while(&mut digits, |c| c.is_ascii_digit()), 4);
        assert!(buffer.is_empty());
    }
}
