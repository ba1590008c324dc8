//! Validated tokenizer limits.
//!
//! Each limit is an immutable value object with a description, a validation
//! predicate over candidate values, and a default. They carry no state and
//! never interact with event filtering; callers that accept limits from user
//! configuration run `validate` before handing the value to
//! [`TokenizerOptions`](crate::TokenizerOptions).

use thiserror::Error;

/// A candidate configuration value was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidArgument(pub &'static str);

/// Maximum container nesting depth accepted by the tokenizer.
///
/// Bounds the tokenizer's frame stack. Exceeding the configured depth raises
/// [`SyntaxErrorKind::TooDeeplyNested`](crate::SyntaxErrorKind::TooDeeplyNested).
///
/// # Examples
///
/// ```
/// use flatjson::MaxDepth;
///
/// assert!(MaxDepth::validate(MaxDepth::default_value()).is_ok());
/// assert!(MaxDepth::validate(0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaxDepth;

impl MaxDepth {
    /// The depth used when callers do not configure one.
    pub const DEFAULT: usize = 128;

    /// Human-readable description of the limit.
    #[must_use]
    pub fn description() -> &'static str {
        "Maximum container nesting depth."
    }

    /// Checks a candidate depth.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when `candidate` is zero.
    pub fn validate(candidate: usize) -> Result<(), InvalidArgument> {
        if candidate == 0 {
            return Err(InvalidArgument("max depth must be greater than 0."));
        }
        Ok(())
    }

    /// The default depth.
    #[must_use]
    pub fn default_value() -> usize {
        Self::DEFAULT
    }
}
