#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsonlimit::{
    CursorOptions, JsonCursor, StrReader, StreamReadConstraints, check_reader, check_stream, check_text,
    validate,
};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// Characters the cursor pulls per read; inputs up to this size are read in a
/// single block, so the capped and uncapped paths must agree on them.
const BLOCK: usize = 4 * 1024;

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?)
            }
            3 => Value::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
        };
        Ok(ArbitraryValue(value))
    }
}

#[derive(Debug, Arbitrary)]
enum Document {
    /// Well-formed JSON, so the limits are what gets exercised.
    Json(ArbitraryValue),
    /// Anything at all, for the tokenizer.
    Raw(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    total: u16,
    number: u8,
    string: u16,
    allow_unicode_whitespace: bool,
    allow_multiple_json_values: bool,
    document: Document,
}

fn run(input: Input) {
    let text = match input.document {
        Document::Json(value) => value.0.to_string(),
        Document::Raw(text) => text,
    };

    let constraints = StreamReadConstraints::builder()
        .with_max_total_length(i64::from(input.total))
        .and_then(|b| b.with_max_number_length(i64::from(input.number)))
        .and_then(|b| b.with_max_string_length(i64::from(input.string)))
        .expect("non-negative limits are accepted")
        .build();

    let by_text = check_text(&constraints, &text).map_err(|e| e.limit_kind());
    let by_reader = check_reader(&constraints, StrReader::new(&text))
        .map(drop)
        .map_err(|e| e.limit_kind());
    let _ = check_stream(&constraints, text.as_bytes());

    if input.total > 0 && text.chars().count() < BLOCK {
        assert_eq!(by_text, by_reader, "text and reader disagree on {text:?}");
    }

    let options = CursorOptions {
        allow_unicode_whitespace: input.allow_unicode_whitespace,
        allow_multiple_json_values: input.allow_multiple_json_values,
    };
    let _ = validate(&constraints, &mut JsonCursor::with_options(StrReader::new(&text), options));
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary(&mut Unstructured::new(data)) {
        run(input);
    }
});
