//! JSON formatting.
//!
//! Numbers are carried through verbatim (serde_json `arbitrary_precision`),
//! so values outside the f64 range format unchanged. serde_json's fixed
//! 128-level recursion limit is lifted in favour of [`MAX_JSON_DEPTH`].

use serde::Deserialize;

use crate::config::MAX_JSON_DEPTH;
use crate::core::error::JsonFormatError;

/// Parse `input` as JSON and re-serialize it with 2-space indentation.
///
/// Object keys keep their input order. Empty or whitespace-only input is
/// rejected before parsing.
pub fn format_json(input: &str) -> Result<String, JsonFormatError> {
    if input.trim().is_empty() {
        return Err(JsonFormatError::Empty);
    }
    if nesting_depth(input) > MAX_JSON_DEPTH {
        return Err(JsonFormatError::TooDeep(MAX_JSON_DEPTH));
    }

    let mut de = serde_json::Deserializer::from_str(input);
    de.disable_recursion_limit();
    let value = serde_json::Value::deserialize(&mut de).map_err(parse_error)?;
    de.end().map_err(parse_error)?;

    serde_json::to_string_pretty(&value).map_err(parse_error)
}

fn parse_error(e: serde_json::Error) -> JsonFormatError {
    JsonFormatError::Parse(e.to_string())
}

/// Deepest bracket nesting in `input`, ignoring brackets inside strings.
///
/// Only a guard: malformed input is left for the parser to report.
fn nesting_depth(input: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in input.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}
