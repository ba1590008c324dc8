//! Error types shared by the tokenizer, the flat-object filter, and the parse
//! entry points.
//!
//! Tokenizer diagnostics are [`SyntaxError`] values carrying a
//! [`SyntaxErrorKind`] and the 1-based line and column where lexing stopped.
//! Everything a caller of [`parse`](crate::parse) can see is a [`ParseError`]:
//! either a wrapped tokenizer diagnostic or a schema violation raised while
//! filtering events.

use alloc::{
    format,
    string::{String, ToString},
};

use thiserror::Error;

/// The reason a tokenizer diagnostic was raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A character that cannot start or continue the current token.
    #[error("invalid character '{}'", format_char(.0))]
    InvalidCharacter(char),
    /// A non-hexadecimal character inside a `\uXXXX` escape.
    #[error("invalid character '{}' in unicode escape", format_char(.0))]
    InvalidUnicodeEscapeChar(char),
    /// A UTF-16 surrogate half without its mate.
    #[error("unpaired surrogate \\u{0:04X} in string")]
    UnpairedSurrogate(u32),
    /// Containers nested beyond the configured limit.
    #[error("nesting exceeds {0} levels")]
    TooDeeplyNested(usize),
    /// Non-whitespace input after the root value.
    #[error("unexpected trailing character '{}'", format_char(.0))]
    TrailingCharacter(char),
    /// The input ended in the middle of a document.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// A positioned tokenizer diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character.
    pub column: usize,
}

/// The uniform error surface of a parse.
///
/// Two kinds of failure exist: the input is not JSON at all
/// ([`ParseError::Syntax`]), or it is well-formed JSON that does not satisfy
/// the flat-object shape ([`ParseError::Schema`]). Handlers may also raise
/// `Schema` errors for data-level problems; see
/// [`ParseError::schema`].
///
/// # Examples
///
/// ```rust
/// use flatjson::ParseError;
///
/// let err = ParseError::schema("a", "nested objects not allowed");
/// assert_eq!(err.to_string(), "variable: a, error: nested objects not allowed");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed JSON, wrapping the tokenizer's diagnostic.
    #[error("error in JSON parsing: {0}")]
    Syntax(#[from] SyntaxError),
    /// Well-formed JSON rejected by the flat-object filter or by the handler.
    #[error("variable: {variable}, error: {reason}")]
    Schema {
        /// The most recent key seen before the violation, possibly empty.
        variable: String,
        /// Human-readable description of the violation.
        reason: String,
    },
}

impl ParseError {
    /// Builds a schema violation for `variable`.
    ///
    /// Intended for [`Handler`](crate::Handler) implementations that validate
    /// the data they receive and want their rejection to travel the same
    /// error channel as the built-in flat-object guard.
    pub fn schema(variable: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::Schema {
            variable: variable.into(),
            reason: reason.into(),
        }
    }
}

// Escapes a character for use in diagnostics.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn format_char(c: &char) -> String {
    match c {
        '"' => "\\\"".into(),
        '\\' => "\\\\".into(),
        '\u{0008}' => "\\b".into(),
        '\u{000C}' => "\\f".into(),
        '\n' => "\\n".into(),
        '\r' => "\\r".into(),
        '\t' => "\\t".into(),
        '\0' => "\\0".into(),
        c if c.is_control() => format!("\\u{:04X}", *c as u32),
        c if c.is_whitespace() && !c.is_ascii_whitespace() => {
            format!("\\u{:04X}", *c as u32)
        }
        c => c.to_string(),
    }
}
