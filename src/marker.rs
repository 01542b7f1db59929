//! Per-document marker generation.
//!
//! Tagged numerals ride through the baseline codec as string literals prefixed
//! by a marker that is provably absent from the document text. The marker is
//! built from a tiny alphabet of code points that essentially never occur in
//! real payloads, so a length-1 marker succeeds in practice; the grow-length
//! loop is the correctness guarantee, not a performance assumption.
//!
//! ## Examples
//!
//! ```rust
//! use json_numerals::make_marker;
//!
//! let text = r#"{"id": 12345678901234567890}"#;
//! let marker = make_marker(text);
//! assert!(!text.contains(marker.as_str()));
//! ```

/// Characters with a vanishingly small chance of occurring in document text,
/// alone or in combination.
const MARKER_CHARS: [char; 3] = ['෴', '߷', '֍'];

/// A collision-checked sentinel string, unique to one document.
///
/// Produced by [`make_marker`]; valid only for the text it was generated from
/// and discarded when the encode/decode call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker(String);

impl Marker {
    /// Returns the marker text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the marker length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Markers are never empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// If `s` begins with this marker, returns the remainder.
    #[inline]
    #[must_use]
    pub fn strip<'a>(&self, s: &'a str) -> Option<&'a str> {
        s.strip_prefix(self.0.as_str())
    }
}

/// All combinations (with repetition, non-decreasing index) of the marker
/// alphabet at the requested length.
///
/// Order never needs to vary for uniqueness, so permutations of the same
/// multiset are enumerated once.
fn marker_choices(length: usize) -> Vec<String> {
    fn fill(choices: &mut Vec<String>, current: &mut String, remaining: usize, start: usize) {
        if remaining == 0 {
            choices.push(current.clone());
            return;
        }
        for (i, ch) in MARKER_CHARS.iter().enumerate().skip(start) {
            current.push(*ch);
            fill(choices, current, remaining - 1, i);
            current.pop();
        }
    }

    let mut choices = Vec::new();
    fill(&mut choices, &mut String::new(), length, 0);
    choices
}

/// Finds a marker that does not occur anywhere in `text`.
///
/// Tries every combination at length 1, then length 2, and so on. A long
/// enough marker always exists because the text is finite, so this cannot
/// fail.
///
/// # Examples
///
/// ```rust
/// use json_numerals::make_marker;
///
/// let marker = make_marker("plain text");
/// assert_eq!(marker.as_str().chars().count(), 1);
/// ```
#[must_use]
pub fn make_marker(text: &str) -> Marker {
    let mut length = 1;
    loop {
        if let Some(found) = marker_choices(length)
            .into_iter()
            .find(|candidate| !text.contains(candidate.as_str()))
        {
            return Marker(found);
        }
        length += 1;
    }
}
