/// Grammar relaxations for [`JsonCursor`](super::JsonCursor).
///
/// # Examples
///
/// ```rust
/// use jsonlimit::{CursorOptions, JsonCursor, Token, TokenCursor};
///
/// let options = CursorOptions {
///     allow_multiple_json_values: true,
///     ..Default::default()
/// };
/// let mut cursor = JsonCursor::with_options(jsonlimit::StrReader::new("1 2"), options);
/// assert_eq!(cursor.next_token().unwrap(), Some(Token::Integer("1")));
/// assert_eq!(cursor.next_token().unwrap(), Some(Token::Integer("2")));
/// assert_eq!(cursor.next_token().unwrap(), None);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CursorOptions {
    /// Whether to accept any Unicode whitespace between tokens.
    ///
    /// By default only the four JSON whitespace characters are recognized:
    /// space (U+0020), line feed (U+000A), carriage return (U+000D) and
    /// horizontal tab (U+0009).
    pub allow_unicode_whitespace: bool,

    /// Whether more top-level values may follow the first one.
    ///
    /// Enables JSON Lines and plain concatenation:
    ///
    /// ```json
    /// {}{}{}
    /// ```
    pub allow_multiple_json_values: bool,
}
