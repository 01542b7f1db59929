//! Encode pipeline.
//!
//! The fast path runs the baseline encoder once; documents without big
//! integers pay nothing beyond that single pass. When a big integer is seen,
//! the fast-path text is kept as the marker-collision candidate, the value
//! graph is re-encoded with every big integer as a marker-tagged string, and
//! the tagging is stripped textually afterwards, leaving a bare numeral the
//! baseline encoder itself could never have produced.

use crate::marker::{make_marker, Marker};
use crate::matcher::MAX_SAFE_INTEGER_F;
use crate::{Error, Result, Transform, Value};
use regex::Regex;

/// Indentation for [`stringify_with`](crate::stringify_with).
///
/// # Examples
///
/// ```rust
/// use json_numerals::{stringify_with, Indent, Value};
///
/// let value = Value::from(vec![Value::from(1)]);
/// let text = stringify_with(&value, |_, v| v, Indent::Spaces(2)).unwrap();
/// assert_eq!(text, "[\n  1\n]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Compact output, no whitespace.
    #[default]
    None,
    /// Pretty output indented with the given number of spaces.
    /// `Spaces(0)` behaves like [`Indent::None`].
    Spaces(usize),
    /// Pretty output indented with tabs.
    Tab,
}

pub(crate) fn write_json(
    value: &Value,
    replacer: &mut Option<&mut Transform<'_>>,
    indent: Indent,
) -> Result<String> {
    let transformed = match replacer.as_deref_mut() {
        Some(f) => apply_replacer("", value.clone(), f),
        None => value.clone(),
    };

    let mut saw_bigint = false;
    let candidate = render(&to_raw_probe(&transformed, &mut saw_bigint), indent)?;
    if !saw_bigint {
        return Ok(candidate);
    }

    // The probe text is a safe superset proxy for collision checking: digits
    // cannot contain marker characters, so a marker absent from the candidate
    // is also absent from the real output.
    let marker = make_marker(&candidate);
    let marked = render(&to_raw_marked(&transformed, &marker), indent)?;
    strip_markers(&marked, &marker)
}

/// Applies the caller's replacer the way the baseline encoder would: the root
/// under the key `""`, then each member or element under its own key, with the
/// replaced value recursed into rather than the original.
fn apply_replacer(key: &str, value: Value, f: &mut Transform<'_>) -> Value {
    match f(key, value) {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| apply_replacer(&i.to_string(), item, f))
                .collect(),
        ),
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(k, v)| {
                    let replaced = apply_replacer(&k, v, f);
                    (k, replaced)
                })
                .collect(),
        ),
        other => other,
    }
}

/// Baseline rendering of a number. Integral in-range floats print as bare
/// integers and non-finite floats as `null`, matching the baseline encoder's
/// number output exactly.
fn raw_number(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER_F {
        serde_json::Value::Number(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

/// Fast-path conversion. Big integers render as quoted digit strings, which is
/// wrong for real output but fine for a rendering that is either returned
/// unchanged (no big integers seen) or discarded in favor of the marked pass.
fn to_raw_probe(value: &Value, saw_bigint: &mut bool) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => raw_number(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(|v| to_raw_probe(v, saw_bigint)).collect(),
        ),
        Value::Object(members) => serde_json::Value::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), to_raw_probe(v, saw_bigint)))
                .collect(),
        ),
        Value::BigInt(big) => {
            *saw_bigint = true;
            serde_json::Value::String(big.to_string())
        }
    }
}

/// Slow-path conversion: every big integer becomes the tagged string
/// `"<marker><digits>"`, a valid string literal that survives the baseline
/// encoder intact.
fn to_raw_marked(value: &Value, marker: &Marker) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => raw_number(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(|v| to_raw_marked(v, marker)).collect(),
        ),
        Value::Object(members) => serde_json::Value::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), to_raw_marked(v, marker)))
                .collect(),
        ),
        Value::BigInt(big) => {
            serde_json::Value::String(format!("{}{}", marker.as_str(), big))
        }
    }
}

/// Replaces every `"<marker><digits>"` with the bare digits. The marker was
/// chosen to be absent from the document, so this cannot fire on anything but
/// our own taggings.
fn strip_markers(marked: &str, marker: &Marker) -> Result<String> {
    let pattern = format!("\"{}(-?\\d+)\"", regex::escape(marker.as_str()));
    let re = Regex::new(&pattern).map_err(Error::custom)?;
    Ok(re.replace_all(marked, "$1").into_owned())
}

fn render(raw: &serde_json::Value, indent: Indent) -> Result<String> {
    match indent {
        Indent::None | Indent::Spaces(0) => Ok(serde_json::to_string(raw)?),
        Indent::Spaces(n) => render_pretty(raw, " ".repeat(n).as_bytes()),
        Indent::Tab => render_pretty(raw, b"\t"),
    }
}

fn render_pretty(raw: &serde_json::Value, pad: &[u8]) -> Result<String> {
    use serde::Serialize;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(pad);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    raw.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(Error::custom)
}
