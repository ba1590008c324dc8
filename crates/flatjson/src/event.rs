//! Events emitted by the streaming tokenizer.
//!
//! [`SyntaxEvent`] enumerates the syntactic shapes of a JSON document in
//! document order. Numeric literals arrive already classified as a
//! [`Number`], preserving the width and signedness of the literal.
//!
//! # Examples
//!
//! ```
//! use flatjson::{Number, SyntaxEvent, Tokenizer, TokenizerOptions};
//!
//! let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
//! tokenizer.feed("[1, \"two\"]");
//! let events: Vec<_> = tokenizer.finish().collect::<Result<_, _>>().unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         SyntaxEvent::StartArray,
//!         SyntaxEvent::Number {
//!             value: Number::I32(1),
//!         },
//!         SyntaxEvent::String {
//!             value: "two".to_string(),
//!         },
//!         SyntaxEvent::EndArray { elements: 2 },
//!     ]
//! );
//! ```

use alloc::string::String;

/// A numeric literal classified by magnitude, sign, and fractional presence.
///
/// Classification picks the first representation that holds the literal
/// exactly: `I32`, then `U32`, then (for negative literals) `I64`, then
/// `U64`, falling back to the nearest `f64`. A literal with a fraction or an
/// exponent is always `F64`, as are the extension literals `NaN`,
/// `Infinity`, and `-Infinity`.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Fits a 32-bit signed integer.
    I32(i32),
    /// Non-negative, fits a 32-bit unsigned integer but not `i32`.
    U32(u32),
    /// Negative, fits a 64-bit signed integer but not `i32`.
    I64(i64),
    /// Non-negative, fits a 64-bit unsigned integer but not `u32`.
    U64(u64),
    /// Everything else: fractions, exponents, out-of-range integers.
    F64(f64),
}

impl Number {
    /// Widens the value to an `f64`, rounding 64-bit integers that exceed
    /// 2^53 to the nearest representable double.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::I32(v) => f64::from(v),
            Number::U32(v) => f64::from(v),
            Number::I64(v) => v as f64,
            Number::U64(v) => v as f64,
            Number::F64(v) => v,
        }
    }
}

/// One syntactic event of a JSON document.
///
/// Produced by [`Tokenizer`](crate::Tokenizer) in document order. String
/// payloads are fully unescaped. Container close events carry the number of
/// immediate children the container held.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxEvent {
    /// A `null` literal.
    Null,
    /// A `true` or `false` literal.
    Boolean {
        /// The literal's value.
        value: bool,
    },
    /// A classified numeric literal.
    Number {
        /// The classified value.
        value: Number,
    },
    /// A numeric literal delivered as unparsed text.
    ///
    /// Only produced when
    /// [`TokenizerOptions::numbers_as_text`](crate::TokenizerOptions::numbers_as_text)
    /// is set.
    RawNumber {
        /// The literal exactly as written, including any sign.
        text: String,
    },
    /// A string value.
    String {
        /// The unescaped contents.
        value: String,
    },
    /// An object member name.
    Key {
        /// The unescaped member name, possibly empty.
        name: String,
    },
    /// An object opened.
    StartObject,
    /// An object closed.
    EndObject {
        /// Number of members the object held.
        members: usize,
    },
    /// An array opened.
    StartArray,
    /// An array closed.
    EndArray {
        /// Number of elements the array held.
        elements: usize,
    },
}
