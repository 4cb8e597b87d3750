use crate::{
    constraints::StreamReadConstraints,
    cursor::{Token, TokenCursor},
    error::Result,
};

/// Pulls tokens from `cursor` and checks every number and string literal
/// against `constraints`.
///
/// Only object nesting is tracked: the run stops as soon as the object that
/// was opened first is closed again, or when the cursor reports end of input.
/// A top-level array whose first element is an object is therefore only
/// inspected up to the end of that object.
///
/// Lengths are counted in characters of the literal text as the cursor
/// reports it.
///
/// # Errors
///
/// The first constraint violation, or whatever the cursor fails with
/// (malformed input, I/O errors, read-cap violations).
///
/// ```rust
/// use jsonlimit::{JsonCursor, LimitKind, StreamReadConstraints, validate};
///
/// let constraints = StreamReadConstraints::builder()
///     .with_max_string_length(2)?
///     .build();
/// let mut cursor = JsonCursor::from_text(r#"{"k": "abc"}"#);
/// let err = validate(&constraints, &mut cursor).unwrap_err();
/// assert_eq!(err.limit_kind(), Some(LimitKind::String));
/// # Ok::<(), jsonlimit::Error>(())
/// ```
pub fn validate<T>(constraints: &StreamReadConstraints, cursor: &mut T) -> Result<()>
where
    T: TokenCursor + ?Sized,
{
    let mut depth: usize = 0;
    let mut tokens: u64 = 0;
    while let Some(token) = cursor.next_token()? {
        tokens += 1;
        match token {
            Token::ObjectStart => depth += 1,
            Token::ObjectEnd => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    tracing::trace!(tokens, "outermost object closed");
                    return Ok(());
                }
            }
            Token::Integer(text) => constraints.validate_integer_length(text.chars().count())?,
            Token::Float(text) => constraints.validate_fp_length(text.chars().count())?,
            Token::String(text) => constraints.validate_string_length(text.chars().count())?,
            Token::ArrayStart | Token::ArrayEnd | Token::FieldName(_) | Token::Boolean(_) | Token::Null => {}
        }
    }
    tracing::trace!(tokens, "end of input");
    Ok(())
}
