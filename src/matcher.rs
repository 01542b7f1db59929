//! Long-numeral detection.
//!
//! A 64-bit float stores integers exactly only up to 2^53 − 1. Numerals beyond
//! that threshold corrupt silently under a plain decode, so this module locates
//! them textually: one pattern, compiled once per process from the threshold's
//! decimal string, matching integer literals in numeral-syntactic position
//! whose magnitude is provably out of range.
//!
//! The match is deliberately a superset of true grammar positions. A string
//! value whose content merely looks like `[ <numeral> ]` will match too; those
//! false positives are undone by the decode repair loop rather than avoided
//! here, because grammar-exact matching would need a full parser.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// The largest integer magnitude an `f64` represents exactly: 2^53 − 1.
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

pub(crate) const MAX_SAFE_INTEGER_F: f64 = MAX_SAFE_INTEGER as f64;

/// Whether a decoded number lies outside the exact-representable range.
#[inline]
pub(crate) fn exceeds_safe_range(value: f64) -> bool {
    value.is_finite() && (value < -MAX_SAFE_INTEGER_F || value > MAX_SAFE_INTEGER_F)
}

/// The compiled long-numeral pattern, shared by all calls.
///
/// Built as a disjunction of `[0-9]{17,}` (more digits than the threshold) plus,
/// for every non-`9` digit position of the threshold, a branch matching
/// same-length numerals that share the prefix and exceed that digit. Taking
/// each digit onward keeps 16-digit numerals at or below the threshold out of
/// the slow path entirely.
///
/// The engine has no lookaround, so the numeral-start anchor (`[`, `,`, or
/// `":`) is consumed by the match and [`find_long_numerals`] re-checks the two
/// conditions a lookaround would have expressed: the quote must not be escaped,
/// and the numeral must be followed by `,`, `}`, `]`, or end of input.
fn long_numeral_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let threshold = MAX_SAFE_INTEGER.to_string();
        // [0-9] rather than \d: the grammar's digits are ASCII only
        let mut tokens = vec![format!("[0-9]{{{},}}", threshold.len() + 1)];
        for (i, digit) in threshold.bytes().enumerate() {
            if digit != b'9' {
                tokens.push(format!(
                    "{}[{}-9][0-9]{{{}}}",
                    &threshold[..i],
                    digit - b'0' + 1,
                    threshold.len() - i - 1
                ));
            }
        }
        let pattern = format!(r#"(?:\[|,|"\s*:)\s*(-?(?:{}))"#, tokens.join("|"));
        Regex::new(&pattern).expect("threshold-derived pattern is valid")
    })
}

/// Byte spans of every numeral (sign included) that is out of range and sits
/// in a position where the grammar could allow a bare number.
///
/// Matching resumes at the end of each numeral rather than the end of the
/// whole match, so a delimiter that terminates one numeral can still anchor
/// the next one.
pub(crate) fn find_long_numerals(text: &str) -> Vec<Range<usize>> {
    let re = long_numeral_pattern();
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut at = 0;

    while let Some(caps) = re.captures_at(text, at) {
        let Some(numeral) = caps.get(1) else { break };
        let Some(whole) = caps.get(0) else { break };
        at = numeral.end();

        // A `":` anchor preceded by a backslash is string content, not a key.
        if bytes[whole.start()] == b'"'
            && whole.start() > 0
            && bytes[whole.start() - 1] == b'\\'
        {
            continue;
        }

        // Only a delimiter or end of input may follow, after optional
        // whitespace. Nothing is consumed here.
        let mut after = numeral.end();
        while after < bytes.len() && bytes[after].is_ascii_whitespace() {
            after += 1;
        }
        if after < bytes.len() && !matches!(bytes[after], b',' | b'}' | b']') {
            continue;
        }

        spans.push(numeral.range());
    }
    spans
}
