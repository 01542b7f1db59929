//! Dynamic value representation for decoded JSON documents.
//!
//! This module provides the [`Value`] enum which represents any JSON value this
//! codec can produce or consume. It mirrors the baseline JSON data model with
//! one extension: integer literals whose magnitude exceeds the exact-representable
//! threshold (2^53 − 1) are held as [`BigInt`] instead of a lossy `f64`.
//!
//! ## Examples
//!
//! ```rust
//! use json_numerals::Value;
//! use num_bigint::BigInt;
//!
//! let null = Value::Null;
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let big = Value::BigInt("12345678901234567890".parse::<BigInt>().unwrap());
//!
//! assert!(number.is_number());
//! assert!(big.is_bigint());
//! ```

use crate::matcher::MAX_SAFE_INTEGER;
use crate::JsonMap;
use num_bigint::BigInt;
use std::fmt;

/// A dynamically-typed representation of any JSON value.
///
/// In-range numerals decode as [`Value::Number`] carrying an `f64`, exactly as
/// the baseline decoder produces them. Numerals whose magnitude exceeds
/// [`MAX_SAFE_INTEGER`](crate::MAX_SAFE_INTEGER) decode as [`Value::BigInt`]
/// and encode back to bare (unquoted) numerals.
///
/// # Examples
///
/// ```rust
/// use json_numerals::Value;
///
/// let num = Value::Number(42.0);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(JsonMap),
    BigInt(BigInt),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is a big integer.
    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`. Otherwise returns `None`.
    ///
    /// Big integers are deliberately not flattened here; use
    /// [`as_bigint`](Value::as_bigint) for those.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a whole number that fits in an `i64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_numerals::Value;
    ///
    /// assert_eq!(Value::Number(42.0).as_i64(), Some(42));
    /// assert_eq!(Value::Number(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => {
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                    Some(*n as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a big integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    /// If the value is an object, returns the member with the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_numerals::parse;
    ///
    /// let doc = parse(r#"{"id": 7}"#).unwrap();
    /// assert_eq!(doc.get("id").and_then(|v| v.as_i64()), Some(7));
    /// assert!(doc.get("missing").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value as compact JSON text via [`stringify`](crate::stringify).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::stringify(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    /// Values beyond the safe range become [`Value::BigInt`] so no precision is
    /// lost on the way in.
    fn from(value: i64) -> Self {
        if value.unsigned_abs() <= MAX_SAFE_INTEGER {
            Value::Number(value as f64)
        } else {
            Value::BigInt(BigInt::from(value))
        }
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    /// Values beyond the safe range become [`Value::BigInt`] so no precision is
    /// lost on the way in.
    fn from(value: u64) -> Self {
        if value <= MAX_SAFE_INTEGER {
            Value::Number(value as f64)
        } else {
            Value::BigInt(BigInt::from(value))
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<JsonMap> for Value {
    fn from(value: JsonMap) -> Self {
        Value::Object(value)
    }
}

impl From<serde_json::Value> for Value {
    /// Lossy conversion from a baseline parse tree: every number becomes an
    /// `f64`, exactly as the baseline decoder reports it. Promotion of
    /// out-of-range numerals happens in [`parse`](crate::parse), not here.
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for BigInt {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::BigInt(bi) => Ok(bi),
            _ => Err(crate::Error::custom(format!(
                "expected big integer, found {:?}",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(42.0));
        assert_eq!(Value::from(3.5f64), Value::Number(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
    }

    #[test]
    fn test_from_i64_promotes_out_of_range() {
        assert_eq!(
            Value::from(9_007_199_254_740_991i64),
            Value::Number(9_007_199_254_740_991.0)
        );
        assert_eq!(
            Value::from(9_007_199_254_740_993i64),
            Value::BigInt(BigInt::from(9_007_199_254_740_993i64))
        );
        assert_eq!(
            Value::from(-9_007_199_254_740_993i64),
            Value::BigInt(BigInt::from(-9_007_199_254_740_993i64))
        );
        assert_eq!(
            Value::from(u64::MAX),
            Value::BigInt(BigInt::from(u64::MAX))
        );
    }

    #[test]
    fn test_tryfrom_i64() {
        let result: i64 = Value::Number(42.0).try_into().unwrap();
        assert_eq!(result, 42);
        assert!(i64::try_from(Value::String("test".to_string())).is_err());
    }

    #[test]
    fn test_tryfrom_bigint() {
        let big: BigInt = "12345678901234567890".parse().unwrap();
        let result: BigInt = Value::BigInt(big.clone()).try_into().unwrap();
        assert_eq!(result, big);
        assert!(BigInt::try_from(Value::Number(42.0)).is_err());
    }

    #[test]
    fn test_from_raw_is_lossy() {
        let raw: serde_json::Value = serde_json::from_str("[1, 2.5, \"x\", null]").unwrap();
        assert_eq!(
            Value::from(raw),
            Value::Array(vec![
                Value::Number(1.0),
                Value::Number(2.5),
                Value::String("x".to_string()),
                Value::Null,
            ])
        );
    }

    #[test]
    fn test_accessors() {
        let value = Value::Number(42.0);
        assert!(value.is_number());
        assert_eq!(value.as_i64(), Some(42));
        assert_eq!(value.as_f64(), Some(42.0));
        assert_eq!(value.as_str(), None);

        let mut map = JsonMap::new();
        map.insert("key".to_string(), Value::from(1));
        let obj = Value::Object(map);
        assert!(obj.get("key").is_some());
        assert!(obj.get("other").is_none());
    }

    #[test]
    fn test_display_is_json() {
        let mut map = JsonMap::new();
        map.insert("a".to_string(), Value::from(1));
        assert_eq!(Value::Object(map).to_string(), r#"{"a":1}"#);
    }
}
