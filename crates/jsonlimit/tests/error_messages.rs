#![allow(missing_docs)]

mod common;

use common::constraints;
use jsonlimit::{
    Error, JsonCursor, LimitKind, ReadLimitExceeded, StrReader, StreamReadConstraints, TokenCursor, Unit,
    check_reader, check_stream, check_text,
};

#[test]
fn invalid_argument() {
    let err = StreamReadConstraints::builder()
        .with_max_number_length(-5)
        .unwrap_err();
    insta::assert_snapshot!(err, @"cannot set the maximum number length to a negative value (-5)");
}

#[test]
fn limit_exceeded() {
    let err = Error::LimitExceeded {
        kind: LimitKind::String,
        observed: 1_000_001,
        max: 1_000_000,
    };
    insta::assert_snapshot!(err, @"string length (1000001) exceeds the maximum length (1000000)");
}

#[test]
fn read_limits() {
    let bytes = check_stream(&constraints(4, 100, 100), &b"[1, 2, 3]"[..]).unwrap_err();
    insta::assert_snapshot!(bytes, @"I/O failure: read 9 bytes, more than the size limit of 4 bytes");

    let chars = check_reader(&constraints(4, 100, 100), StrReader::new("[1, 2, 3]")).unwrap_err();
    insta::assert_snapshot!(chars, @"I/O failure: read 9 chars, more than the size limit of 4 chars");

    let payload = ReadLimitExceeded {
        read: 2,
        limit: 1,
        unit: Unit::Bytes,
    };
    insta::assert_snapshot!(payload, @"read 2 bytes, more than the size limit of 1 bytes");
}

#[test]
fn syntax_errors() {
    let err = check_text(StreamReadConstraints::defaults(), "{\"a\":\n  [1, 2,]}").unwrap_err();
    insta::assert_snapshot!(err, @"I/O failure: invalid character ']' at 2:9");

    let err = check_text(StreamReadConstraints::defaults(), r#"["\q"]"#).unwrap_err();
    insta::assert_snapshot!(err, @r#"I/O failure: invalid escape sequence '\q' at 1:4"#);

    let err = check_text(StreamReadConstraints::defaults(), r#"["\ud800"]"#).unwrap_err();
    insta::assert_snapshot!(err, @r#"I/O failure: invalid unicode escape sequence \uD800 at 1:9"#);

    let err = check_text(StreamReadConstraints::defaults(), "[true").unwrap_err();
    insta::assert_snapshot!(err, @"I/O failure: unexpected end of input at 1:6");
}

#[test]
fn cursor_errors_carry_their_position() {
    let mut cursor = JsonCursor::from_text("[\n00]");
    assert!(cursor.next_token().unwrap().is_some());
    let err = cursor.next_token().unwrap_err();
    insta::assert_snapshot!(err, @"leading zeros are not allowed at 2:2");
}
