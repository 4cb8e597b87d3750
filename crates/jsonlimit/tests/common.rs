#![allow(missing_docs, dead_code)]

use std::{
    cell::Cell,
    io::{self, Read},
    rc::Rc,
};

use jsonlimit::CharRead;

/// Counts how often the wrapped source gets dropped.
#[derive(Debug)]
pub struct Tracked<S> {
    inner: S,
    drops: Rc<Cell<usize>>,
}

impl<S> Tracked<S> {
    pub fn new(inner: S) -> (Self, Rc<Cell<usize>>) {
        let drops = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                drops: Rc::clone(&drops),
            },
            drops,
        )
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }
}

impl<S> Drop for Tracked<S> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl<R: Read> Read for Tracked<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<C: CharRead> CharRead for Tracked<C> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        self.inner.read_chars(buf)
    }
}

/// Hands out one byte per read.
#[derive(Debug)]
pub struct Trickle<'a>(pub &'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match (self.0.split_first(), buf.first_mut()) {
            (Some((&byte, rest)), Some(slot)) => {
                *slot = byte;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

/// Fails with `kind` once `ok_reads` reads have succeeded.
#[derive(Debug)]
pub struct Broken<'a> {
    pub data: &'a [u8],
    pub ok_reads: usize,
    pub kind: io::ErrorKind,
}

impl Read for Broken<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.ok_reads == 0 {
            return Err(io::Error::new(self.kind, "source went away"));
        }
        self.ok_reads -= 1;
        self.data.read(buf)
    }
}

/// Interrupted on every other call.
#[derive(Debug)]
pub struct Flaky<'a> {
    pub data: &'a [u8],
    pub interrupt: bool,
}

impl Read for Flaky<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let n = buf.len().min(3);
        self.data.read(&mut buf[..n])
    }
}

pub fn constraints(total: i64, number: i64, string: i64) -> jsonlimit::StreamReadConstraints {
    jsonlimit::StreamReadConstraints::builder()
        .with_max_total_length(total)
        .and_then(|b| b.with_max_number_length(number))
        .and_then(|b| b.with_max_string_length(string))
        .unwrap()
        .build()
}
