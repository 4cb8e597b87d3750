#![allow(missing_docs)]

mod common;

use std::io;

use common::{Broken, Flaky, Tracked, Trickle, constraints};
use jsonlimit::{
    Error, LimitKind, StrReader, StreamReadConstraints, Unit, check_reader, check_stream,
};

const DOC: &str = r#"{"user": {"name": "Ada", "langs": ["en", "fr"]}, "age": 36, "score": 0.875}"#;

#[test]
fn failing_reader_is_closed_exactly_once() {
    let (source, drops) = Tracked::new(StrReader::new(DOC));
    let err = check_reader(&constraints(10, 100, 100), source).unwrap_err();
    assert_eq!(err.limit_kind(), Some(LimitKind::Total));
    assert_eq!(drops.get(), 1);
}

#[test]
fn failing_stream_is_closed_exactly_once() {
    let (source, drops) = Tracked::new(DOC.as_bytes());
    let err = check_stream(&constraints(1_000, 100, 2), source).unwrap_err();
    assert_eq!(err.limit_kind(), Some(LimitKind::String));
    assert_eq!(drops.get(), 1);
}

#[test]
fn passing_sources_are_handed_back_open() {
    let (source, drops) = Tracked::new(StrReader::new(DOC));
    let source = check_reader(StreamReadConstraints::defaults(), source).unwrap();
    assert_eq!(drops.get(), 0);
    drop(source);
    assert_eq!(drops.get(), 1);

    let (source, drops) = Tracked::new(DOC.as_bytes());
    let source = check_stream(StreamReadConstraints::defaults(), source).unwrap();
    assert_eq!(drops.get(), 0);
    assert!(source.get_ref().is_empty());
}

#[test]
fn borrowed_sources_are_never_closed() {
    let (mut source, drops) = Tracked::new(DOC.as_bytes());
    assert!(check_stream(&constraints(10, 100, 100), &mut source).is_err());
    assert!(check_stream(&constraints(10, 100, 100), &mut source).is_ok());
    assert_eq!(drops.get(), 0);
}

#[test]
fn byte_cap_is_checked_on_every_read() {
    let err = check_stream(&constraints(10, 100, 100), Trickle(DOC.as_bytes())).unwrap_err();
    let read = err.read_limit().copied().unwrap();
    assert_eq!(read.read, 11);
    assert_eq!(read.limit, 10);
    assert_eq!(read.unit, Unit::Bytes);
}

#[test]
fn multibyte_text_trickled_byte_by_byte() {
    let doc = r#"{"greeting": "こんにちは", "emoji": "🦀"}"#;
    check_stream(StreamReadConstraints::defaults(), Trickle(doc.as_bytes())).unwrap();

    let strict = constraints(1_000, 100, 4);
    let err = check_stream(&strict, Trickle(doc.as_bytes())).unwrap_err();
    assert!(matches!(
        err,
        Error::LimitExceeded {
            kind: LimitKind::String,
            observed: 5,
            max: 4
        }
    ));
}

#[test]
fn interrupted_reads_are_retried() {
    let source = Flaky {
        data: DOC.as_bytes(),
        interrupt: false,
    };
    check_stream(StreamReadConstraints::defaults(), source).unwrap();
}

#[test]
fn io_errors_propagate_unchanged() {
    let source = Broken {
        data: DOC.as_bytes(),
        ok_reads: 0,
        kind: io::ErrorKind::ConnectionReset,
    };
    let err = check_stream(StreamReadConstraints::defaults(), source).unwrap_err();
    match &err {
        Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert_eq!(err.limit_kind(), None);
    assert_eq!(err.read_limit(), None);
}

#[test]
fn truncated_document_is_malformed() {
    let err = check_stream(StreamReadConstraints::defaults(), &DOC.as_bytes()[..30]).unwrap_err();
    assert!(err.parse_error().is_some());
}

#[test]
fn zero_cap_streams_are_unbounded() {
    let big = format!(r#"{{"items": [{}1]}}"#, "1, ".repeat(20_000));
    let unlimited = constraints(0, 100, 100);
    check_stream(&unlimited, big.as_bytes()).unwrap();
    check_reader(&unlimited, StrReader::new(&big)).unwrap();
}

#[test]
fn large_documents_trip_the_cap_before_being_read_in_full() {
    let big = format!(r#"{{"items": [{}1]}}"#, "1, ".repeat(20_000));
    let (source, drops) = Tracked::new(big.as_bytes());
    let err = check_stream(&constraints(1_000, 100, 100), source).unwrap_err();
    let read = err.read_limit().copied().unwrap();
    assert!(read.read < u64::try_from(big.len()).unwrap());
    assert_eq!(drops.get(), 1);
}
