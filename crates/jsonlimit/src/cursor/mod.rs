//! Pull tokenizer for JSON text.
//!
//! [`JsonCursor`] reads characters from a [`CharRead`] source in blocks and
//! hands out one [`Token`] per call. It keeps no document tree: the only
//! structural state is a stack of open containers, which is enough to reject
//! malformed input. String and number tokens borrow a scratch buffer owned by
//! the cursor, so each token is valid until the next call.
//!
//! The validator only depends on the [`TokenCursor`] seam, so any other
//! tokenizer can be plugged in instead.

#![expect(clippy::inline_always)]

mod buffer;
mod error;
mod escape_buffer;
mod options;

use std::io::{self, Read};

use buffer::Buffer;
pub use error::{ParseError, SyntaxError};
use escape_buffer::UnicodeEscapeBuffer;
pub use options::CursorOptions;

use crate::source::{CharRead, DecodingReader, Encoding, StrReader};

/// One lexical token of a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// A property name, unescaped.
    FieldName(&'a str),
    /// An integer literal as written.
    Integer(&'a str),
    /// A number literal with a fraction or exponent, as written.
    Float(&'a str),
    /// A string value, unescaped.
    String(&'a str),
    /// `true` or `false`
    Boolean(bool),
    /// `null`
    Null,
}

impl Token<'_> {
    /// The token's text: decoded content for names and strings, source text
    /// for numbers, and the literal or punctuator otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        match *self {
            Token::ObjectStart => "{",
            Token::ObjectEnd => "}",
            Token::ArrayStart => "[",
            Token::ArrayEnd => "]",
            Token::FieldName(s) | Token::Integer(s) | Token::Float(s) | Token::String(s) => s,
            Token::Boolean(true) => "true",
            Token::Boolean(false) => "false",
            Token::Null => "null",
        }
    }
}

/// A source of JSON tokens.
pub trait TokenCursor {
    /// Advances to the next token. `Ok(None)` means the input is exhausted.
    ///
    /// # Errors
    ///
    /// I/O failures of the underlying source, and malformed input reported as
    /// [`io::ErrorKind::InvalidData`] carrying a [`ParseError`].
    fn next_token(&mut self) -> io::Result<Option<Token<'_>>>;
}

impl<T: TokenCursor + ?Sized> TokenCursor for &mut T {
    fn next_token(&mut self) -> io::Result<Option<Token<'_>>> {
        (**self).next_token()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Start,
    ObjectOpened,
    BeforePropertyName,
    AfterPropertyName,
    BeforePropertyValue,
    ArrayOpened,
    BeforeArrayValue,
    AfterPropertyValue,
    AfterArrayValue,
    End,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

/// Token kinds before the scratch buffer is lent out.
#[derive(Debug, Clone, Copy)]
enum Lexed {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    FieldName,
    Integer,
    Float,
    String,
    Boolean(bool),
    Null,
}

/// What a failed cursor keeps reporting.
#[derive(Debug)]
enum Failure {
    Syntax(ParseError),
    Io(io::ErrorKind, String),
}

impl Failure {
    fn of(err: &io::Error) -> Self {
        match err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<ParseError>())
        {
            Some(parse) => Failure::Syntax(parse.clone()),
            None => Failure::Io(err.kind(), err.to_string()),
        }
    }

    fn to_error(&self) -> io::Error {
        match self {
            Failure::Syntax(parse) => parse.clone().into(),
            Failure::Io(kind, message) => io::Error::new(*kind, message.clone()),
        }
    }
}

/// Streaming tokenizer over a character source.
///
/// ```rust
/// use jsonlimit::{JsonCursor, Token, TokenCursor};
///
/// let mut cursor = JsonCursor::from_text(r#"{"id": 7}"#);
/// assert_eq!(cursor.next_token().unwrap(), Some(Token::ObjectStart));
/// assert_eq!(cursor.next_token().unwrap(), Some(Token::FieldName("id")));
/// assert_eq!(cursor.next_token().unwrap(), Some(Token::Integer("7")));
/// assert_eq!(cursor.next_token().unwrap(), Some(Token::ObjectEnd));
/// assert_eq!(cursor.next_token().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct JsonCursor<C> {
    source: C,
    /// Characters read from `source` but not lexed yet.
    buffer: Buffer,
    end_of_input: bool,

    line: usize,
    column: usize,

    state: ParseState,
    stack: Vec<Container>,
    /// Text of the current name, string or number token.
    scratch: String,
    failure: Option<Failure>,
    options: CursorOptions,
}

impl<'a> JsonCursor<StrReader<'a>> {
    /// Tokenizes in-memory text.
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::new(StrReader::new(text))
    }
}

impl<R: Read> JsonCursor<DecodingReader<R>> {
    /// Tokenizes UTF-8 bytes.
    pub fn from_reader(reader: R) -> Self {
        Self::new(DecodingReader::new(reader, Encoding::Utf8))
    }
}

impl<C: CharRead> JsonCursor<C> {
    /// Tokenizes `source` with strict RFC 8259 rules.
    pub fn new(source: C) -> Self {
        Self::with_options(source, CursorOptions::default())
    }

    /// Tokenizes `source` with the given relaxations.
    pub fn with_options(source: C, options: CursorOptions) -> Self {
        Self {
            source,
            buffer: Buffer::new(),
            end_of_input: false,
            line: 1,
            column: 1,
            state: ParseState::Start,
            stack: Vec::new(),
            scratch: String::new(),
            failure: None,
            options,
        }
    }

    /// The options in effect.
    pub fn options(&self) -> CursorOptions {
        self.options
    }

    /// One-based line of the next character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column of the next character.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the source. Characters already buffered by the cursor are lost.
    pub fn into_inner(self) -> C {
        self.source
    }

    // ---------------------------------------------------------------------------------------------
    // Character access
    // ---------------------------------------------------------------------------------------------

    #[inline(always)]
    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.buffer.is_empty() && !self.end_of_input && self.buffer.fill(&mut self.source)? == 0 {
            self.end_of_input = true;
        }
        Ok(self.buffer.peek())
    }

    #[inline(always)]
    fn advance(&mut self) {
        match self.buffer.next() {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
    }

    /// Moves the next character into the scratch buffer.
    #[inline(always)]
    fn bump(&mut self, c: char) {
        self.scratch.push(c);
        self.advance();
    }

    /// Copies a run of characters matching `predicate` into the scratch
    /// buffer, refilling as needed. `predicate` must reject `'\n'`.
    fn copy_run<F>(&mut self, mut predicate: F) -> io::Result<usize>
    where
        F: FnMut(char) -> bool,
    {
        let mut total = 0;
        loop {
            let copied = self.buffer.copy_while(&mut self.scratch, &mut predicate);
            self.column += copied;
            total += copied;
            if !self.buffer.is_empty() || self.peek()?.is_none() {
                return Ok(total);
            }
        }
    }

    fn skip_whitespace(&mut self) -> io::Result<Option<char>> {
        loop {
            match self.peek()? {
                Some(' ' | '\n' | '\r' | '\t') => self.advance(),
                Some(c) if self.options.allow_unicode_whitespace && c.is_whitespace() => self.advance(),
                other => return Ok(other),
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Errors
    // ---------------------------------------------------------------------------------------------

    fn syntax_error(&self, source: SyntaxError) -> io::Error {
        ParseError {
            source,
            line: self.line,
            column: self.column,
        }
        .into()
    }

    fn invalid_char(&self, c: Option<char>) -> io::Error {
        match c {
            Some(c) => self.syntax_error(SyntaxError::InvalidCharacter(c)),
            None => self.syntax_error(SyntaxError::UnexpectedEndOfInput),
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Parser
    // ---------------------------------------------------------------------------------------------

    fn step(&mut self) -> io::Result<Option<Lexed>> {
        loop {
            match self.state {
                ParseState::Start => match self.skip_whitespace()? {
                    None => {
                        self.state = ParseState::End;
                        return Ok(None);
                    }
                    Some(c) => return self.value(c).map(Some),
                },
                ParseState::ObjectOpened => match self.skip_whitespace()? {
                    Some('}') => return Ok(Some(self.close_container())),
                    Some('"') => return self.property_name().map(Some),
                    c => return Err(self.invalid_char(c)),
                },
                ParseState::BeforePropertyName => match self.skip_whitespace()? {
                    Some('"') => return self.property_name().map(Some),
                    c => return Err(self.invalid_char(c)),
                },
                ParseState::AfterPropertyName => match self.skip_whitespace()? {
                    Some(':') => {
                        self.advance();
                        self.state = ParseState::BeforePropertyValue;
                    }
                    c => return Err(self.invalid_char(c)),
                },
                ParseState::BeforePropertyValue | ParseState::BeforeArrayValue => {
                    match self.skip_whitespace()? {
                        Some(c) => return self.value(c).map(Some),
                        None => return Err(self.invalid_char(None)),
                    }
                }
                ParseState::ArrayOpened => match self.skip_whitespace()? {
                    Some(']') => return Ok(Some(self.close_container())),
                    Some(c) => return self.value(c).map(Some),
                    None => return Err(self.invalid_char(None)),
                },
                ParseState::AfterPropertyValue => match self.skip_whitespace()? {
                    Some(',') => {
                        self.advance();
                        self.state = ParseState::BeforePropertyName;
                    }
                    Some('}') => return Ok(Some(self.close_container())),
                    c => return Err(self.invalid_char(c)),
                },
                ParseState::AfterArrayValue => match self.skip_whitespace()? {
                    Some(',') => {
                        self.advance();
                        self.state = ParseState::BeforeArrayValue;
                    }
                    Some(']') => return Ok(Some(self.close_container())),
                    c => return Err(self.invalid_char(c)),
                },
                ParseState::End => match self.skip_whitespace()? {
                    None => return Ok(None),
                    Some(_) if self.options.allow_multiple_json_values => {
                        self.state = ParseState::Start;
                    }
                    c => return Err(self.invalid_char(c)),
                },
                // `next_token` reports the stored failure before getting here
                ParseState::Error => return Ok(None),
            }
        }
    }

    fn value(&mut self, c: char) -> io::Result<Lexed> {
        match c {
            '{' => {
                self.advance();
                self.stack.push(Container::Object);
                self.state = ParseState::ObjectOpened;
                Ok(Lexed::ObjectStart)
            }
            '[' => {
                self.advance();
                self.stack.push(Container::Array);
                self.state = ParseState::ArrayOpened;
                Ok(Lexed::ArrayStart)
            }
            '"' => {
                self.string()?;
                self.after_value();
                Ok(Lexed::String)
            }
            '-' | '0'..='9' => {
                let float = self.number()?;
                self.after_value();
                Ok(if float { Lexed::Float } else { Lexed::Integer })
            }
            't' => self.literal("true", Lexed::Boolean(true)),
            'f' => self.literal("false", Lexed::Boolean(false)),
            'n' => self.literal("null", Lexed::Null),
            c => Err(self.invalid_char(Some(c))),
        }
    }

    fn after_value(&mut self) {
        self.state = match self.stack.last() {
            None => ParseState::End,
            Some(Container::Object) => ParseState::AfterPropertyValue,
            Some(Container::Array) => ParseState::AfterArrayValue,
        };
    }

    fn close_container(&mut self) -> Lexed {
        self.advance();
        let closed = self.stack.pop();
        self.after_value();
        match closed {
            Some(Container::Array) => Lexed::ArrayEnd,
            _ => Lexed::ObjectEnd,
        }
    }

    fn property_name(&mut self) -> io::Result<Lexed> {
        self.string()?;
        self.state = ParseState::AfterPropertyName;
        Ok(Lexed::FieldName)
    }

    fn literal(&mut self, word: &'static str, token: Lexed) -> io::Result<Lexed> {
        for expected in word.chars() {
            match self.peek()? {
                Some(c) if c == expected => self.advance(),
                c => return Err(self.invalid_char(c)),
            }
        }
        self.after_value();
        Ok(token)
    }

    // ---------------------------------------------------------------------------------------------
    // Lexer
    // ---------------------------------------------------------------------------------------------

    /// Lexes a number into the scratch buffer; returns whether it has a
    /// fraction or an exponent.
    fn number(&mut self) -> io::Result<bool> {
        self.scratch.clear();
        if self.peek()? == Some('-') {
            self.bump('-');
        }

        match self.peek()? {
            Some('0') => {
                self.bump('0');
                if self.peek()?.is_some_and(|c| c.is_ascii_digit()) {
                    return Err(self.syntax_error(SyntaxError::LeadingZero));
                }
            }
            Some('1'..='9') => {
                self.copy_run(|c| c.is_ascii_digit())?;
            }
            c => return Err(self.invalid_char(c)),
        }

        let mut float = false;
        if self.peek()? == Some('.') {
            float = true;
            self.bump('.');
            self.digits()?;
        }

        if let Some(e @ ('e' | 'E')) = self.peek()? {
            float = true;
            self.bump(e);
            if let Some(sign @ ('+' | '-')) = self.peek()? {
                self.bump(sign);
            }
            self.digits()?;
        }

        Ok(float)
    }

    /// At least one digit.
    fn digits(&mut self) -> io::Result<()> {
        if self.copy_run(|c| c.is_ascii_digit())? == 0 {
            let c = self.peek()?;
            return Err(self.invalid_char(c));
        }
        Ok(())
    }

    /// Lexes a quoted string, unescaped, into the scratch buffer.
    fn string(&mut self) -> io::Result<()> {
        self.advance();
        self.scratch.clear();
        loop {
            self.copy_run(|c| c != '"' && c != '\\' && c >= ' ')?;
            match self.peek()? {
                Some('"') => {
                    self.advance();
                    return Ok(());
                }
                Some('\\') => {
                    self.advance();
                    self.escape()?;
                }
                c => return Err(self.invalid_char(c)),
            }
        }
    }

    fn escape(&mut self) -> io::Result<()> {
        let Some(c) = self.peek()? else {
            return Err(self.invalid_char(None));
        };
        let unescaped = match c {
            '"' | '\\' | '/' => c,
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.advance();
                let decoded = self.unicode_escape()?;
                self.scratch.push(decoded);
                return Ok(());
            }
            c => return Err(self.syntax_error(SyntaxError::InvalidEscape(c))),
        };
        self.bump(unescaped);
        Ok(())
    }

    /// Decodes the digits after `\u`, pairing a high surrogate with the
    /// escape that must follow it.
    fn unicode_escape(&mut self) -> io::Result<char> {
        let high = self.hex_unit()?;
        if !(0xD800..=0xDBFF).contains(&high) {
            return char::from_u32(u32::from(high))
                .ok_or_else(|| self.syntax_error(SyntaxError::InvalidUnicodeEscapeSequence(u32::from(high))));
        }

        for expected in ['\\', 'u'] {
            if self.peek()? != Some(expected) {
                return Err(self.syntax_error(SyntaxError::InvalidUnicodeEscapeSequence(u32::from(high))));
            }
            self.advance();
        }
        let low = self.hex_unit()?;
        match char::decode_utf16([high, low]).next() {
            Some(Ok(c)) => Ok(c),
            _ => Err(self.syntax_error(SyntaxError::InvalidUnicodeEscapeSequence(u32::from(low)))),
        }
    }

    fn hex_unit(&mut self) -> io::Result<u16> {
        let mut escape = UnicodeEscapeBuffer::new();
        loop {
            let Some(c) = self.peek()? else {
                return Err(self.invalid_char(None));
            };
            let unit = escape.feed(c).map_err(|err| self.syntax_error(err))?;
            self.advance();
            if let Some(unit) = unit {
                return Ok(unit);
            }
        }
    }
}

impl<C: CharRead> TokenCursor for JsonCursor<C> {
    fn next_token(&mut self) -> io::Result<Option<Token<'_>>> {
        if let Some(failure) = &self.failure {
            return Err(failure.to_error());
        }

        let lexed = match self.step() {
            Ok(lexed) => lexed,
            Err(err) => {
                tracing::trace!(line = self.line, column = self.column, error = %err, "tokenizer failed");
                self.state = ParseState::Error;
                self.failure = Some(Failure::of(&err));
                return Err(err);
            }
        };

        let text = self.scratch.as_str();
        Ok(lexed.map(|lexed| match lexed {
            Lexed::ObjectStart => Token::ObjectStart,
            Lexed::ObjectEnd => Token::ObjectEnd,
            Lexed::ArrayStart => Token::ArrayStart,
            Lexed::ArrayEnd => Token::ArrayEnd,
            Lexed::FieldName => Token::FieldName(text),
            Lexed::Integer => Token::Integer(text),
            Lexed::Float => Token::Float(text),
            Lexed::String => Token::String(text),
            Lexed::Boolean(b) => Token::Boolean(b),
            Lexed::Null => Token::Null,
        }))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn tokens(text: &str) -> io::Result<Vec<String>> {
        tokens_with(text, CursorOptions::default())
    }

    fn tokens_with(text: &str, options: CursorOptions) -> io::Result<Vec<String>> {
        let mut cursor = JsonCursor::with_options(StrReader::new(text), options);
        let mut out = Vec::new();
        while let Some(token) = cursor.next_token()? {
            out.push(format!("{token:?}"));
        }
        Ok(out)
    }

    fn syntax_error(text: &str) -> ParseError {
        let err = tokens(text).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        err.get_ref()
            .and_then(|e| e.downcast_ref::<ParseError>())
            .cloned()
            .expect("parse error payload")
    }

    #[test]
    fn tokenizes_a_document() {
        let toks = tokens(r#" {"a": [1, -2.5e3, "x\ny", true, false, null], "b": {}} "#).unwrap();
        insta::assert_snapshot!(toks.join("\n"), @r#"
        ObjectStart
        FieldName("a")
        ArrayStart
        Integer("1")
        Float("-2.5e3")
        String("x\ny")
        Boolean(true)
        Boolean(false)
        Null
        ArrayEnd
        FieldName("b")
        ObjectStart
        ObjectEnd
        ObjectEnd
        "#);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokens("").unwrap().is_empty());
        assert!(tokens(" \n\t ").unwrap().is_empty());
    }

    #[rstest]
    #[case("0", "Integer(\"0\")")]
    #[case("-0", "Integer(\"-0\")")]
    #[case("12345678901234567890", "Integer(\"12345678901234567890\")")]
    #[case("0.5", "Float(\"0.5\")")]
    #[case("1E+2", "Float(\"1E+2\")")]
    #[case("1e-2", "Float(\"1e-2\")")]
    fn numbers_keep_their_source_text(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(tokens(text).unwrap(), vec![expected.to_string()]);
    }

    #[rstest]
    #[case(r#""\"\\\/\b\f\n\r\t""#, "\"\\/\u{8}\u{c}\n\r\t")]
    #[case(r#""\u0041\u00e9""#, "Aé")]
    #[case(r#""\ud83d\ude00""#, "😀")]
    #[case(r#""漢字""#, "漢字")]
    fn strings_are_unescaped(#[case] text: &str, #[case] expected: &str) {
        let mut cursor = JsonCursor::from_text(text);
        assert_eq!(cursor.next_token().unwrap(), Some(Token::String(expected)));
    }

    #[rstest]
    #[case("01", SyntaxError::LeadingZero)]
    #[case("[1,]", SyntaxError::InvalidCharacter(']'))]
    #[case(r#"{"a":1,}"#, SyntaxError::InvalidCharacter('}'))]
    #[case(r#"{"a" 1}"#, SyntaxError::InvalidCharacter('1'))]
    #[case(r#""\x""#, SyntaxError::InvalidEscape('x'))]
    #[case(r#""\u12G4""#, SyntaxError::InvalidUnicodeEscapeChar('G'))]
    #[case(r#""\udc00""#, SyntaxError::InvalidUnicodeEscapeSequence(0xDC00))]
    #[case(r#""\ud83dx""#, SyntaxError::InvalidUnicodeEscapeSequence(0xD83D))]
    #[case("\"a\tb\"", SyntaxError::InvalidCharacter('\t'))]
    #[case("1.", SyntaxError::UnexpectedEndOfInput)]
    #[case("-", SyntaxError::UnexpectedEndOfInput)]
    #[case("1.e3", SyntaxError::InvalidCharacter('e'))]
    #[case("tru", SyntaxError::UnexpectedEndOfInput)]
    #[case("nul!", SyntaxError::InvalidCharacter('!'))]
    #[case(r#"{"a":1"#, SyntaxError::UnexpectedEndOfInput)]
    #[case("{} {}", SyntaxError::InvalidCharacter('{'))]
    #[case("]", SyntaxError::InvalidCharacter(']'))]
    fn malformed_input_is_rejected(#[case] text: &str, #[case] expected: SyntaxError) {
        assert_eq!(syntax_error(text).syntax_error(), &expected);
    }

    #[test]
    fn errors_point_at_the_offending_character() {
        let err = syntax_error("{\n  \"a\": ?}");
        assert_eq!((err.line(), err.column()), (2, 8));
        assert_eq!(err.to_string(), "invalid character '?' at 2:8");
    }

    #[test]
    fn cursor_stays_failed() {
        let mut cursor = JsonCursor::from_text("[x, 1]");
        assert_eq!(cursor.next_token().unwrap(), Some(Token::ArrayStart));
        let first = cursor.next_token().unwrap_err().to_string();
        let second = cursor.next_token().unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn multiple_values_need_the_option() {
        let options = CursorOptions {
            allow_multiple_json_values: true,
            ..Default::default()
        };
        let toks = tokens_with("{}\n[] 3", options).unwrap();
        assert_eq!(toks, ["ObjectStart", "ObjectEnd", "ArrayStart", "ArrayEnd", "Integer(\"3\")"]);
        assert!(tokens("{}\n[]").is_err());
    }

    #[test]
    fn unicode_whitespace_needs_the_option() {
        let input = "\u{00A0}[\u{2028}]";
        assert_eq!(
            syntax_error(input).syntax_error(),
            &SyntaxError::InvalidCharacter('\u{00A0}')
        );
        let options = CursorOptions {
            allow_unicode_whitespace: true,
            ..Default::default()
        };
        assert_eq!(tokens_with(input, options).unwrap(), ["ArrayStart", "ArrayEnd"]);
    }

    #[test]
    fn tokens_spanning_block_boundaries() {
        let long = "7".repeat(10_000);
        let text = format!("[{long}, \"{long}\"]");
        let mut cursor = JsonCursor::from_text(&text);
        assert_eq!(cursor.next_token().unwrap(), Some(Token::ArrayStart));
        assert_eq!(cursor.next_token().unwrap(), Some(Token::Integer(long.as_str())));
        assert_eq!(cursor.next_token().unwrap(), Some(Token::String(long.as_str())));
        assert_eq!(cursor.next_token().unwrap(), Some(Token::ArrayEnd));
        assert_eq!(cursor.next_token().unwrap(), None);
    }

    #[test]
    fn reads_utf8_bytes() {
        let mut cursor = JsonCursor::from_reader("[\"café\"]".as_bytes());
        assert_eq!(cursor.next_token().unwrap(), Some(Token::ArrayStart));
        assert_eq!(cursor.next_token().unwrap(), Some(Token::String("café")));
    }

    #[test]
    fn token_text() {
        assert_eq!(Token::Boolean(false).text(), "false");
        assert_eq!(Token::ObjectEnd.text(), "}");
        assert_eq!(Token::Float("1.5").text(), "1.5");
    }
}
