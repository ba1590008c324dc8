//! Buffering and decoding of four-digit Unicode escape sequences.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates up to four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) and decodes them into a [`char`] once exactly
//! four digits have been provided. Code units in the surrogate ranges are
//! held back: a high surrogate parks the buffer in a state that demands a
//! second `\uXXXX` escape for the low half, and the pair is combined into a
//! single supplementary-plane scalar. After a successful decode the buffer
//! resets automatically to begin a new escape sequence.

use crate::error::SyntaxErrorKind;

/// Outcome of feeding one hexadecimal digit into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeStep {
    /// Fewer than four digits have been seen so far.
    Pending,
    /// Four digits decoded to a high surrogate; the next escape sequence must
    /// supply the low half.
    NeedLowSurrogate,
    /// A complete Unicode scalar value was decoded.
    Done(char),
}

/// Accumulator for `\uXXXX` escapes, including surrogate pairs.
#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    value: u32,
    len: u8,
    high: Option<u32>,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self {
            value: 0,
            len: 0,
            high: None,
        }
    }

    /// Clears accumulated digits and any pending high surrogate.
    pub(crate) fn reset(&mut self) {
        self.value = 0;
        self.len = 0;
        self.high = None;
    }

    /// The high surrogate waiting for its low half, if any.
    pub(crate) fn pending_high(&self) -> Option<u32> {
        self.high
    }

    /// Feeds a single ASCII hexadecimal digit into the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxErrorKind::InvalidUnicodeEscapeChar`] if `c` is not a
    /// hex digit, and [`SyntaxErrorKind::UnpairedSurrogate`] if four digits
    /// decode to a low surrogate with no high half before it, or to anything
    /// but a low surrogate while a high half is pending.
    pub(crate) fn feed(&mut self, c: char) -> Result<EscapeStep, SyntaxErrorKind> {
        let Some(digit) = c.to_digit(16) else {
            return Err(SyntaxErrorKind::InvalidUnicodeEscapeChar(c));
        };
        debug_assert!(self.len < 4);
        self.value = (self.value << 4) | digit;
        self.len += 1;

        if self.len < 4 {
            return Ok(EscapeStep::Pending);
        }

        let code = self.value;
        self.value = 0;
        self.len = 0;

        match self.high.take() {
            None => match code {
                0xD800..=0xDBFF => {
                    self.high = Some(code);
                    Ok(EscapeStep::NeedLowSurrogate)
                }
                0xDC00..=0xDFFF => Err(SyntaxErrorKind::UnpairedSurrogate(code)),
                _ => {
                    // Safe: a non-surrogate value below 0x10000 is a scalar
                    Ok(EscapeStep::Done(char::from_u32(code).unwrap()))
                }
            },
            Some(high) => match code {
                0xDC00..=0xDFFF => {
                    let scalar = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                    // Safe: combined pairs land in 0x10000..=0x10FFFF
                    Ok(EscapeStep::Done(char::from_u32(scalar).unwrap()))
                }
                _ => Err(SyntaxErrorKind::UnpairedSurrogate(high)),
            },
        }
    }
}
