//! # json_numerals
//!
//! A drop-in, bit-compatible replacement for a plain JSON `stringify`/`parse`
//! pair that preserves integers beyond the exact-representable range of an
//! `f64`.
//!
//! ## Why?
//!
//! Many systems exchange numeric identifiers (IDs, counters, timestamps) with
//! more digits than a 64-bit float can hold exactly. The largest such integer
//! is 2^53 − 1 = 9,007,199,254,740,991; anything bigger is silently rounded by
//! an ordinary decode and corrupted forever. This crate decodes those numerals
//! as [`BigInt`] values and encodes them back as bare numerals, without paying
//! for a custom JSON parser: the baseline codec ([`serde_json`]) does all the
//! real parsing, and a precompiled pattern plus a marker-based text rewrite
//! handles the promotion.
//!
//! ## Key Properties
//!
//! - **Drop-in**: documents without long numerals decode and encode exactly as
//!   the baseline codec would, in a single baseline pass
//! - **Lossless**: `parse(stringify(v)) == v` for big integers of any size,
//!   and the wire text carries them as plain unquoted numerals
//! - **Self-repairing**: the textual numeral matcher intentionally overmatches;
//!   decode failures caused by a false positive are located through the
//!   baseline decoder's own error report and undone one at a time
//! - **No new failure modes**: malformed input surfaces the baseline error,
//!   and encoding rejects nothing the baseline would have accepted
//!
//! ## Quick Start
//!
//! ```rust
//! use json_numerals::{parse, stringify, big_json};
//!
//! let doc = parse(r#"{"id": 12345678901234567890}"#).unwrap();
//! assert!(doc.get("id").unwrap().is_bigint());
//!
//! let value = big_json!({"id": (big "12345678901234567890")});
//! assert_eq!(stringify(&value).unwrap(), r#"{"id":12345678901234567890}"#);
//! ```
//!
//! ## Revivers and Replacers
//!
//! [`parse_with`] and [`stringify_with`] accept a transform callback with the
//! same shape as the baseline codec's: `(key, value) -> value`, the root under
//! the key `""`, array elements under their decimal index. Revivers run
//! bottom-up after big-integer promotion; replacers run top-down before
//! encoding.
//!
//! ## Concurrency
//!
//! The codec is purely synchronous and holds no shared mutable state: every
//! marker and rewrite buffer is local to one call, and the only process-wide
//! datum is the read-only compiled numeral pattern. Calls are freely
//! re-entrant across threads.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod marker;
pub mod matcher;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::JsonMap;
pub use marker::{make_marker, Marker};
pub use matcher::MAX_SAFE_INTEGER;
pub use num_bigint::BigInt;
pub use ser::Indent;
pub use value::Value;

/// The `(key, value) -> value` callback shape shared by revivers and replacers.
pub(crate) type Transform<'a> = dyn FnMut(&str, Value) -> Value + 'a;

/// Decodes JSON text, promoting out-of-range integer literals to [`BigInt`].
///
/// Every numeral within the safe range decodes as an `f64`, exactly as the
/// baseline decoder produces it; every integer literal beyond
/// [`MAX_SAFE_INTEGER`] decodes as [`Value::BigInt`] with full precision.
///
/// If the promotion pass cannot account for a decode failure (which only
/// happens on adversarial inputs the matcher mis-tagged beyond repair), the
/// result degrades to the baseline decode of the original text: correct shape,
/// baseline-lossy numbers. Malformed input fails with the baseline error.
///
/// # Examples
///
/// ```rust
/// use json_numerals::{parse, Value};
///
/// let doc = parse("[1, 2, 99999999999999999999, 3]").unwrap();
/// let items = doc.as_array().unwrap();
/// assert_eq!(items[0], Value::Number(1.0));
/// assert!(items[2].is_bigint());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the baseline decoder's line and column when
/// the text is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    de::read_json(text, &mut None)
}

/// Decodes JSON text with a reviver callback.
///
/// The reviver runs bottom-up over the decoded tree, after out-of-range
/// numerals have been promoted to [`Value::BigInt`], so it observes the
/// lossless value. Unlike the baseline reviver it cannot delete members;
/// returning [`Value::Null`] keeps the key with a null value.
///
/// # Examples
///
/// ```rust
/// use json_numerals::{parse_with, Value};
///
/// let doc = parse_with(r#"{"n": 2}"#, |_key, value| match value {
///     Value::Number(n) => Value::Number(n * 10.0),
///     other => other,
/// })
/// .unwrap();
/// assert_eq!(doc.get("n"), Some(&Value::Number(20.0)));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the text is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with<F>(text: &str, mut reviver: F) -> Result<Value>
where
    F: FnMut(&str, Value) -> Value,
{
    let mut transform: Option<&mut Transform<'_>> = Some(&mut reviver);
    de::read_json(text, &mut transform)
}

/// Encodes a value as compact JSON text, with [`Value::BigInt`] rendered as a
/// bare numeral.
///
/// Semantically identical to the baseline encoder everywhere else: integral
/// in-range numbers print without a decimal point, non-finite numbers print as
/// `null`, strings and collections are untouched.
///
/// # Examples
///
/// ```rust
/// use json_numerals::{big_json, stringify};
///
/// let value = big_json!({"id": (big "12345678901234567890")});
/// assert_eq!(stringify(&value).unwrap(), r#"{"id":12345678901234567890}"#);
/// ```
///
/// # Errors
///
/// Propagates any failure the baseline encoder itself would raise; encoding
/// adds no constraints of its own.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify(value: &Value) -> Result<String> {
    ser::write_json(value, &mut None, Indent::None)
}

/// Encodes a value as pretty-printed JSON text, indented with two spaces.
///
/// # Errors
///
/// Propagates any failure the baseline encoder itself would raise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_pretty(value: &Value) -> Result<String> {
    ser::write_json(value, &mut None, Indent::Spaces(2))
}

/// Encodes a value with a replacer callback and explicit indentation.
///
/// The replacer runs top-down, the root under the key `""`, and its return
/// value is what gets encoded (and recursed into).
///
/// # Examples
///
/// ```rust
/// use json_numerals::{big_json, stringify_with, Indent, Value};
///
/// let value = big_json!({"secret": "hunter2", "id": 7});
/// let text = stringify_with(
///     &value,
///     |key, v| if key == "secret" { Value::Null } else { v },
///     Indent::None,
/// )
/// .unwrap();
/// assert_eq!(text, r#"{"secret":null,"id":7}"#);
/// ```
///
/// # Errors
///
/// Propagates any failure the baseline encoder itself would raise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_with<F>(value: &Value, mut replacer: F, indent: Indent) -> Result<String>
where
    F: FnMut(&str, Value) -> Value,
{
    let mut transform: Option<&mut Transform<'_>> = Some(&mut replacer);
    ser::write_json(value, &mut transform, indent)
}
