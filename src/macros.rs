/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Rust integer literals stop at 64 bits, so out-of-range integers are written
/// as `big "<digits>"` (parenthesized when nested inside arrays or objects).
///
/// # Examples
///
/// ```rust
/// use json_numerals::big_json;
///
/// let doc = big_json!({
///     "id": (big "12345678901234567890"),
///     "name": "Alice",
///     "scores": [1, 2, 3]
/// });
/// assert!(doc.get("id").unwrap().is_bigint());
/// ```
#[macro_export]
macro_rules! big_json {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle big integer literals, written as digit strings
    (big $digits:literal) => {
        $crate::Value::BigInt(
            $digits
                .parse::<$crate::BigInt>()
                .expect("big integer literal"),
        )
    };
    ((big $digits:literal)) => {
        $crate::big_json!(big $digits)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::big_json!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::big_json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression with a From conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
