//! Error types for the numeral-safe codec.
//!
//! The codec deliberately introduces no failure modes of its own: everything a
//! caller can observe is either a baseline syntax error (surfaced with the
//! baseline decoder's own line/column report) or a value the baseline encoder
//! cannot represent. Tagging false positives are repaired internally and never
//! reach this type.
//!
//! ## Examples
//!
//! ```rust
//! use json_numerals::{parse, Error};
//!
//! let result = parse("{\"unterminated\": ");
//! assert!(result.is_err());
//!
//! if let Err(Error::Syntax { line, column, .. }) = result {
//!     assert_eq!(line, 1);
//!     assert!(column > 0);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during encoding or decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input text is not valid JSON. Carries the baseline decoder's
    /// location report; the message is the baseline message verbatim.
    #[error("{msg}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A value the baseline encoder cannot represent.
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_numerals::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected token");
    /// assert!(err.to_string().contains("unexpected token"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported-value error for values the baseline encoder rejects.
    pub fn unsupported(msg: &str) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Custom(err.to_string())
        } else {
            Error::Syntax {
                line: err.line(),
                column: err.column(),
                msg: err.to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
