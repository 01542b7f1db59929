//! Decode pipeline with repair loop.
//!
//! The fast path is one baseline parse plus one conversion walk; detection of
//! out-of-range numerals is a side effect of that walk, so documents without
//! them are never parsed twice. The slow path rewrites every matcher hit into
//! a marker-tagged string literal and parses again. The matcher is grammar
//! blind, so a tagging can land inside a string value and break the document;
//! the baseline decoder's own error location then points at the bad tagging,
//! which is undone one at a time until the parse succeeds. Anything that
//! cannot be attributed to a tagging falls back to the baseline parse of the
//! untagged original, so malformed input surfaces exactly the baseline error.

use crate::marker::{make_marker, Marker};
use crate::matcher::{exceeds_safe_range, find_long_numerals};
use crate::{Result, Transform, Value};
use num_bigint::BigInt;
use std::ops::Range;

pub(crate) fn read_json(text: &str, reviver: &mut Option<&mut Transform<'_>>) -> Result<Value> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    let mut saw_long = false;
    let value = revive_checked("", raw, reviver, &mut saw_long);
    if !saw_long {
        return Ok(value);
    }
    parse_with_long_numerals(text, reviver)
}

fn apply(reviver: &mut Option<&mut Transform<'_>>, key: &str, value: Value) -> Value {
    match reviver.as_deref_mut() {
        Some(f) => f(key, value),
        None => value,
    }
}

/// Fast-path conversion: baseline (lossy) numbers, reviver applied bottom-up,
/// and every revived number inspected for the out-of-range flag.
fn revive_checked(
    key: &str,
    raw: serde_json::Value,
    reviver: &mut Option<&mut Transform<'_>>,
    saw_long: &mut bool,
) -> Value {
    let value = match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| revive_checked(&i.to_string(), item, reviver, saw_long))
                .collect(),
        ),
        serde_json::Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(k, v)| {
                    let revived = revive_checked(&k, v, reviver, saw_long);
                    (k, revived)
                })
                .collect(),
        ),
    };
    let value = apply(reviver, key, value);
    if let Value::Number(n) = &value {
        if exceeds_safe_range(*n) {
            *saw_long = true;
        }
    }
    value
}

fn parse_with_long_numerals(
    text: &str,
    reviver: &mut Option<&mut Transform<'_>>,
) -> Result<Value> {
    let marker = make_marker(text);
    let mut tagged = tag_long_numerals(text, &marker);

    // Each successful repair removes one tagging, so this terminates: either
    // the parse succeeds or no tagging can be blamed and we fall back.
    loop {
        let err = match serde_json::from_str::<serde_json::Value>(&tagged) {
            Ok(raw) => return Ok(convert_marked("", raw, &marker, reviver)),
            Err(err) => err,
        };
        match error_offset(&tagged, &err)
            .and_then(|offset| tagged_numeral_near(&tagged, &marker, offset))
        {
            Some(span) => tagged = untag(&tagged, &marker, span),
            None => break,
        }
    }

    // Degrade to lossy-but-correct-shape decoding of the untagged original.
    // Genuinely malformed input never reaches this point: the fast-path parse
    // of the same text has already failed by then.
    let raw: serde_json::Value = serde_json::from_str(text)?;
    let mut ignored = false;
    Ok(revive_checked("", raw, reviver, &mut ignored))
}

/// Rewrites every matcher hit into `"<marker><numeral>"`, a syntactically
/// valid string literal that survives the baseline parse.
fn tag_long_numerals(text: &str, marker: &Marker) -> String {
    let spans = find_long_numerals(text);
    if spans.is_empty() {
        return text.to_string();
    }
    let mut tagged = String::with_capacity(text.len() + spans.len() * (marker.len() + 2));
    let mut last = 0;
    for span in spans {
        tagged.push_str(&text[last..span.start]);
        tagged.push('"');
        tagged.push_str(marker.as_str());
        tagged.push_str(&text[span.clone()]);
        tagged.push('"');
        last = span.end;
    }
    tagged.push_str(&text[last..]);
    tagged
}

/// Removes one `"<marker><digits>"` tagging in place, restoring the bare
/// numeral.
fn untag(tagged: &str, marker: &Marker, span: Range<usize>) -> String {
    let numeral_start = span.start + 1 + marker.len();
    let mut repaired = String::with_capacity(tagged.len());
    repaired.push_str(&tagged[..span.start]);
    repaired.push_str(&tagged[numeral_start..span.end - 1]);
    repaired.push_str(&tagged[span.end..]);
    repaired
}

/// Slow-path conversion: tagged strings become big integers before the
/// caller's reviver runs, so the reviver observes the promoted value.
fn convert_marked(
    key: &str,
    raw: serde_json::Value,
    marker: &Marker,
    reviver: &mut Option<&mut Transform<'_>>,
) -> Value {
    let value = match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => {
            let promoted = marker
                .strip(&s)
                .filter(|rest| is_bare_numeral(rest))
                .and_then(|rest| rest.parse::<BigInt>().ok());
            match promoted {
                Some(big) => Value::BigInt(big),
                None => Value::String(s),
            }
        }
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| convert_marked(&i.to_string(), item, marker, reviver))
                .collect(),
        ),
        serde_json::Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(k, v)| {
                    let converted = convert_marked(&k, v, marker, reviver);
                    (k, converted)
                })
                .collect(),
        ),
    };
    apply(reviver, key, value)
}

/// Optional sign followed by one or more ASCII digits, nothing else.
fn is_bare_numeral(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Maps the baseline decoder's line/column report to a byte offset. Columns
/// are 1-based byte counts since the last newline.
fn error_offset(text: &str, err: &serde_json::Error) -> Option<usize> {
    if !(err.is_syntax() || err.is_eof()) {
        return None;
    }
    let (line, column) = (err.line(), err.column());
    if line < 1 || column < 1 {
        return None;
    }
    let mut line_start = 0;
    for _ in 1..line {
        line_start += text[line_start..].find('\n')? + 1;
    }
    Some((line_start + column - 1).min(text.len()))
}

/// Looks for a `"<marker>-?<digits>"` span in a small byte window around the
/// reported offset. Decoder error positions land on or next to the quote that
/// opens the bad tagging depending on the error shape, so the window absorbs
/// that variation; a hit is conclusive either way because the marker cannot
/// occur outside our own taggings.
fn tagged_numeral_near(tagged: &str, marker: &Marker, offset: usize) -> Option<Range<usize>> {
    let bytes = tagged.as_bytes();
    let lo = offset.saturating_sub(4);
    let hi = (offset + 4).min(tagged.len());
    for start in lo..hi {
        if bytes[start] != b'"' {
            continue;
        }
        let Some(rest) = tagged.get(start + 1..) else {
            continue;
        };
        let Some(after_marker) = marker.strip(rest) else {
            continue;
        };
        let digits_len = numeral_prefix_len(after_marker);
        if digits_len == 0 {
            continue;
        }
        let close = start + 1 + marker.len() + digits_len;
        if bytes.get(close) == Some(&b'"') {
            return Some(start..close + 1);
        }
    }
    None
}

fn numeral_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        0
    } else {
        i
    }
}
