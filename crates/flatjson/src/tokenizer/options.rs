use crate::limits::MaxDepth;

/// Configuration for the streaming tokenizer.
///
/// # Examples
///
/// ```rust
/// use flatjson::{Tokenizer, TokenizerOptions};
///
/// let tokenizer = Tokenizer::new(TokenizerOptions {
///     allow_nan_and_infinity: true,
///     ..TokenizerOptions::default()
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    /// Whether to accept the non-standard literals `NaN`, `Infinity`, and
    /// `-Infinity` wherever a number is legal. Each produces an `F64` event.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_nan_and_infinity: bool,

    /// Whether to deliver numeric literals as unparsed text
    /// ([`SyntaxEvent::RawNumber`](crate::SyntaxEvent::RawNumber)) instead of
    /// classifying them.
    ///
    /// The text is the literal exactly as written. With
    /// [`allow_nan_and_infinity`](Self::allow_nan_and_infinity) also set, the
    /// extension literals arrive as their spelled-out text.
    ///
    /// # Default
    ///
    /// `false`
    pub numbers_as_text: bool,

    /// Maximum container nesting depth before the tokenizer reports
    /// [`TooDeeplyNested`](crate::SyntaxErrorKind::TooDeeplyNested).
    ///
    /// # Default
    ///
    /// [`MaxDepth::DEFAULT`](crate::MaxDepth::DEFAULT)
    pub max_depth: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            allow_nan_and_infinity: false,
            numbers_as_text: false,
            max_depth: MaxDepth::default_value(),
        }
    }
}
