//! Size limits for streaming JSON input.
//!
//! `jsonlimit` sits in front of a JSON consumer and rejects documents that are
//! too big before anything expensive happens to them. It enforces three
//! limits from a [`StreamReadConstraints`]:
//!
//! - the total input length (characters for text and [`CharRead`] sources,
//!   bytes for [`std::io::Read`] sources),
//! - the textual length of every number literal,
//! - the textual length of every string literal.
//!
//! Streaming sources are wrapped in a length-capped decorator
//! ([`LimitedReader`], [`LimitedCharReader`]), so an oversized stream fails
//! while it is being read. Tokens come from a [`TokenCursor`]; the bundled
//! [`JsonCursor`] is a pull tokenizer that never builds a document tree.
//!
//! ```rust
//! use jsonlimit::{LimitKind, StreamReadConstraints, check_text};
//!
//! let constraints = StreamReadConstraints::builder()
//!     .with_max_number_length(1)?
//!     .build();
//!
//! let err = check_text(&constraints, r#"{"a":1.0,"b":"xyz"}"#).unwrap_err();
//! assert_eq!(err.limit_kind(), Some(LimitKind::Number));
//! assert_eq!(err.to_string(), "number length (3) exceeds the maximum length (1)");
//! # Ok::<(), jsonlimit::Error>(())
//! ```
//!
//! Malformed JSON and I/O failures surface as [`Error::Io`]; a read-cap
//! violation is an I/O failure carrying [`ReadLimitExceeded`], and
//! [`Error::limit_kind`] reports it as [`LimitKind::Total`].

mod check;
mod constraints;
pub mod cursor;
mod error;
pub mod limited;
mod materialize;
pub mod source;
mod validate;


pub use check::{check_reader, check_stream, check_text};
pub use constraints::{
    DEFAULT_MAX_NUMBER_LENGTH, DEFAULT_MAX_STRING_LENGTH, DEFAULT_MAX_TOTAL_LENGTH, StreamReadConstraints,
    StreamReadConstraintsBuilder,
};
pub use cursor::{CursorOptions, JsonCursor, ParseError, SyntaxError, Token, TokenCursor};
pub use error::{Error, LimitKind, ReadLimitExceeded, Result, Unit};
pub use limited::{LimitedCharReader, LimitedReader};
pub use materialize::{Materialized, materialize_reader, materialize_stream};
pub use source::{CharRead, DecodingReader, Encoding, StrReader};
pub use validate::validate;
