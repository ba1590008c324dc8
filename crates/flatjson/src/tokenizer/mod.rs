//! The incremental JSON tokenizer.
//!
//! This module provides the [`Tokenizer`], which consumes UTF-8 text in
//! chunks and yields [`SyntaxEvent`]s as soon as complete tokens are
//! recognized. Input may stop at any character boundary; the tokenizer picks
//! up mid-token on the next [`feed`](Tokenizer::feed).
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use flatjson::{Tokenizer, TokenizerOptions};
//!
//! let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
//! tokenizer.feed(r#"{"key": [null, true, 3.14]}"#);
//! for event in tokenizer.finish() {
//!     let event = event.unwrap();
//!     println!("{event:?}");
//! }
//! ```
#![allow(clippy::single_match_else)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::inline_always)]

mod buffer;
mod escape_buffer;
mod literal_buffer;
mod numbers;
mod options;

use alloc::{string::String, vec::Vec};

use self::{
    buffer::ChunkRing,
    escape_buffer::{EscapeStep, UnicodeEscapeBuffer},
    literal_buffer::LiteralMatcher,
};
use crate::{
    error::{SyntaxError, SyntaxErrorKind},
    event::{Number, SyntaxEvent},
};

pub use options::TokenizerOptions;

// ------------------------------------------------------------------------------------------------
// Lexer - internal tokens & states
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Eof,
    PropertyName {
        value: String,
    },
    String {
        value: String,
    },
    Boolean(bool),
    Null,
    Number(Number),
    RawNumber(String),
    /// Must be one of: `{` `}` `[` `]` `:` `,`
    Punctuator(u8),
}

impl Token {
    fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents a peeked character from the input buffer.
enum PeekedChar {
    /// None if the buffer is empty
    Empty,
    /// Some character
    Char(char),
    /// End of input, the input stream is closed.
    EndOfInput,
}

use PeekedChar::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Start,
    BeforePropertyName,
    AfterPropertyName,
    BeforePropertyValue,
    BeforeArrayValue,
    AfterPropertyValue,
    AfterArrayValue,
    End,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Default,
    Value,
    ValueLiteral,
    Sign,
    Zero,
    DecimalInteger,
    DecimalPoint,
    DecimalFraction,
    DecimalExponent,
    DecimalExponentSign,
    DecimalExponentInteger,
    String,
    StringEscape,
    StringEscapeUnicode,
    StringLowSurrogateEscape,
    StringLowSurrogateU,
    Start,
    BeforePropertyName,
    AfterPropertyName,
    BeforePropertyValue,
    BeforeArrayValue,
    AfterPropertyValue,
    AfterArrayValue,
    End,
    Error,
}

impl From<ParseState> for LexState {
    fn from(state: ParseState) -> Self {
        match state {
            ParseState::Start => LexState::Start,
            ParseState::BeforePropertyName => LexState::BeforePropertyName,
            ParseState::AfterPropertyName => LexState::AfterPropertyName,
            ParseState::BeforePropertyValue => LexState::BeforePropertyValue,
            ParseState::BeforeArrayValue => LexState::BeforeArrayValue,
            ParseState::AfterPropertyValue => LexState::AfterPropertyValue,
            ParseState::AfterArrayValue => LexState::AfterArrayValue,
            ParseState::End => LexState::End,
            ParseState::Error => LexState::Error,
        }
    }
}

/// Stack entry, one per open container. The counter tracks completed
/// immediate children and is reported on the matching close event.
#[derive(Debug, Clone, Copy)]
enum Frame {
    Array { elements: usize },
    Object { members: usize },
}

#[derive(Debug)]
/// The streaming JSON tokenizer.
///
/// `Tokenizer` can be fed partial or complete JSON input in chunks. It
/// implements `Iterator` to yield [`SyntaxEvent`]s for tokens and container
/// boundaries as soon as they are complete.
///
/// A tokenizer processes exactly one JSON document. Once the root value has
/// closed, any further non-whitespace input is a syntax error, and the first
/// error of any kind ends the stream for good.
///
/// # Examples
///
/// ```rust
/// use flatjson::{Number, SyntaxEvent, Tokenizer, TokenizerOptions};
///
/// let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
/// tokenizer.feed("{\"a\": 1}");
/// let events: Vec<_> = tokenizer.finish().collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     events,
///     vec![
///         SyntaxEvent::StartObject,
///         SyntaxEvent::Key {
///             name: "a".to_string(),
///         },
///         SyntaxEvent::Number {
///             value: Number::I32(1),
///         },
///         SyntaxEvent::EndObject { members: 1 },
///     ]
/// );
/// ```
pub struct Tokenizer {
    // Raw source buffer, refilled by `feed` and drained by the lexer.
    source: ChunkRing,
    end_of_input: bool,

    line: usize,
    column: usize,

    /// Current parse / lex states
    parse_state: ParseState,
    lex_state: LexState,

    /// Lexer helpers
    buffer: String, // reused for numbers / literals / strings
    unicode_escape_buffer: UnicodeEscapeBuffer,
    expected_literal: LiteralMatcher,
    partial_lex: bool, // true while a token continues past the buffered input

    /// Open containers, innermost last
    frames: Vec<Frame>,
    /// Event produced by the last dispatched token, if any
    pending: Option<SyntaxEvent>,

    allow_nan_and_infinity: bool,
    numbers_as_text: bool,
    max_depth: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerOptions::default())
    }
}

impl Iterator for Tokenizer {
    type Item = Result<SyntaxEvent, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

/// A `Tokenizer` that has been closed to further input.
///
/// Returned by [`Tokenizer::finish`], this tokenizer will process any
/// remaining input and then end. It implements `Iterator` to yield
/// [`SyntaxEvent`] results.
pub struct ClosedTokenizer {
    tokenizer: Tokenizer,
}

impl Iterator for ClosedTokenizer {
    type Item = Result<SyntaxEvent, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokenizer.next_event()
    }
}

impl Tokenizer {
    #[must_use]
    /// Creates a new `Tokenizer` with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::{Tokenizer, TokenizerOptions};
    ///
    /// let tokenizer = Tokenizer::new(TokenizerOptions {
    ///     allow_nan_and_infinity: true,
    ///     ..Default::default()
    /// });
    /// ```
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            source: ChunkRing::new(),
            end_of_input: false,
            partial_lex: false,

            line: 1,
            column: 1,

            lex_state: LexState::Default,
            parse_state: ParseState::Start,

            buffer: String::new(),
            unicode_escape_buffer: UnicodeEscapeBuffer::new(),
            expected_literal: LiteralMatcher::none(),

            frames: Vec::new(),
            pending: None,

            allow_nan_and_infinity: options.allow_nan_and_infinity,
            numbers_as_text: options.numbers_as_text,
            max_depth: options.max_depth,
        }
    }

    /// Feeds a chunk of JSON text into the tokenizer.
    ///
    /// The tokenizer buffers the input and lexes it incrementally, yielding
    /// events when complete tokens are recognized. Chunks may end anywhere,
    /// including inside a string escape or a number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flatjson::{Tokenizer, TokenizerOptions};
    /// let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
    /// tokenizer.feed("{\"temperature\":");
    /// ```
    pub fn feed(&mut self, text: &str) {
        self.source.push(text);
    }

    #[must_use]
    /// Marks the end of input and returns a closed tokenizer to consume
    /// pending events.
    ///
    /// After calling `finish`, no further input can be fed. The returned
    /// [`ClosedTokenizer`] implements `Iterator` yielding [`SyntaxEvent`]s
    /// and then ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::{SyntaxEvent, Tokenizer, TokenizerOptions};
    ///
    /// let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
    /// tokenizer.feed("true");
    /// let mut closed = tokenizer.finish();
    /// assert_eq!(
    ///     closed.next().unwrap().unwrap(),
    ///     SyntaxEvent::Boolean { value: true }
    /// );
    /// ```
    pub fn finish(mut self) -> ClosedTokenizer {
        self.end_of_input = true;
        ClosedTokenizer { tokenizer: self }
    }

    /// Drive the tokenizer until we either
    ///   * produce one `SyntaxEvent`, or
    ///   * reach "need more data / end-of-input", or
    ///   * encounter a syntax error.
    ///
    /// Returns:
    /// * `Some(Ok(event))` - one event ready
    /// * `Some(Err(err))`  - the tokenizer has errored, and no more events
    ///   can be produced
    /// * `None`            - the tokenizer has no events
    fn next_event(&mut self) -> Option<Result<SyntaxEvent, SyntaxError>> {
        match self.next_event_internal() {
            Some(Ok(event)) => Some(Ok(event)),
            None => None,
            Some(Err(err)) => {
                self.parse_state = ParseState::Error;
                self.lex_state = LexState::Error;
                Some(Err(err))
            }
        }
    }

    fn next_event_internal(&mut self) -> Option<Result<SyntaxEvent, SyntaxError>> {
        if self.parse_state == ParseState::Error {
            // Once errored, no more events can be produced
            return None;
        }

        loop {
            // Anything already queued up?
            if let Some(event) = self.pending.take() {
                return Some(Ok(event));
            }

            // Drive the lexer / dispatcher one token forward
            let token = match self.lex() {
                Ok(token) => token,
                Err(err) => return Some(Err(err)),
            };
            let is_eof = token.is_eof();
            if let Err(err) = self.dispatch_parse_state(token) {
                return Some(Err(err));
            }

            // Stop when we reach EoF or a partial token
            if is_eof || self.partial_lex {
                break;
            }
        }

        self.pending.take().map(Ok)
    }

    // ------------------------------------------------------------------------------------------------
    // Lexer
    // ------------------------------------------------------------------------------------------------

    #[inline(always)]
    fn lex(&mut self) -> Result<Token, SyntaxError> {
        if !self.partial_lex {
            self.lex_state = LexState::Default;
        }

        loop {
            let next_char = self.peek_char();
            if let Some(token) = self.lex_state_step(self.lex_state, next_char)? {
                return Ok(token);
            }
        }
    }

    /// `Empty` for buffer depleted, `EndOfInput` once the stream is closed,
    /// else the next character.
    #[inline(always)]
    fn peek_char(&mut self) -> PeekedChar {
        if let Some(ch) = self.source.peek() {
            return Char(ch);
        }

        if self.end_of_input {
            return EndOfInput;
        }

        Empty
    }

    #[inline(always)]
    fn advance_char(&mut self) {
        if let Some(ch) = self.source.next() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    #[inline(always)]
    fn new_token(&mut self, value: Token, partial: bool) -> Token {
        self.partial_lex = partial;
        value
    }

    #[inline(always)]
    fn produce_string(&mut self) -> Token {
        let value = core::mem::take(&mut self.buffer);
        if self.parse_state == ParseState::BeforePropertyName {
            Token::PropertyName { value }
        } else {
            Token::String { value }
        }
    }

    #[inline(always)]
    fn produce_number(&mut self) -> Token {
        if self.numbers_as_text {
            return Token::RawNumber(core::mem::take(&mut self.buffer));
        }

        let number = numbers::classify(&self.buffer);
        self.buffer.clear();
        Token::Number(number)
    }

    #[allow(clippy::too_many_lines)]
    #[inline(always)]
    fn lex_state_step(
        &mut self,
        lex_state: LexState,
        next_char: PeekedChar,
    ) -> Result<Option<Token>, SyntaxError> {
        use LexState::*;
        match lex_state {
            Error => Ok(None),
            Default => match next_char {
                Char(' ' | '\t' | '\n' | '\r') => {
                    // Insignificant whitespace between tokens
                    self.advance_char();
                    Ok(None)
                }
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                EndOfInput => Ok(Some(self.new_token(Token::Eof, false))),

                Char(_) => self.lex_state_step(self.parse_state.into(), next_char),
            },

            // -------------------------- VALUE entry --------------------------
            Value => match next_char {
                Char(c) if matches!(c, '{' | '[') => {
                    self.advance_char();
                    Ok(Some(self.new_token(Token::Punctuator(c as u8), false)))
                }
                Char(c) if matches!(c, 'n' | 't' | 'f') => {
                    self.buffer.clear();
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = ValueLiteral;
                    self.expected_literal = LiteralMatcher::new(c);
                    Ok(None)
                }
                Char(c) if matches!(c, 'N' | 'I') && self.allow_nan_and_infinity => {
                    self.buffer.clear();
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = ValueLiteral;
                    self.expected_literal = LiteralMatcher::new(c);
                    Ok(None)
                }
                Char(c @ '-') => {
                    self.buffer.clear();
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = Sign;
                    Ok(None)
                }
                Char(c @ '0') => {
                    self.buffer.clear();
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = Zero;
                    Ok(None)
                }
                Char(c) if c.is_ascii_digit() => {
                    self.buffer.clear();
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalInteger;
                    Ok(None)
                }
                Char('"') => {
                    self.advance_char(); // consume quote
                    self.buffer.clear();
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                c => Err(self.invalid_char(c)),
            },

            // -------------------------- LITERALS -----------------------------
            ValueLiteral => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c) => match self.expected_literal.step(c) {
                    literal_buffer::LiteralStep::NeedMore => {
                        self.advance_char();
                        self.buffer.push(c);
                        Ok(None)
                    }
                    literal_buffer::LiteralStep::Done(token) => {
                        self.advance_char();
                        self.buffer.push(c);
                        let token = match token {
                            Token::Number(_) if self.numbers_as_text => {
                                Token::RawNumber(core::mem::take(&mut self.buffer))
                            }
                            token => token,
                        };
                        Ok(Some(self.new_token(token, false)))
                    }
                    literal_buffer::LiteralStep::Reject => Err(self.invalid_char(Char(c))),
                },
                c @ EndOfInput => Err(self.invalid_char(c)),
            },

            // -------------------------- NUMBERS -----------------------------
            Sign => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c @ '0') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = Zero;
                    Ok(None)
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalInteger;
                    Ok(None)
                }
                Char(c @ 'I') if self.allow_nan_and_infinity => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = ValueLiteral;
                    self.expected_literal = LiteralMatcher::negative_infinity();
                    Ok(None)
                }
                c => Err(self.invalid_char(c)),
            },

            Zero => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c @ '.') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalPoint;
                    Ok(None)
                }
                Char(c) if matches!(c, 'e' | 'E') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponent;
                    Ok(None)
                }
                _ => {
                    let token = self.produce_number();
                    Ok(Some(self.new_token(token, false)))
                }
            },

            DecimalInteger => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c @ '.') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalPoint;
                    Ok(None)
                }
                Char(c) if matches!(c, 'e' | 'E') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponent;
                    Ok(None)
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);

                    let copied = self
                        .source
                        .take_while_into(&mut self.buffer, |d| d.is_ascii_digit());
                    self.column += copied;

                    Ok(None)
                }
                _ => {
                    let token = self.produce_number();
                    Ok(Some(self.new_token(token, false)))
                }
            },

            DecimalPoint => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalFraction;

                    let copied = self
                        .source
                        .take_while_into(&mut self.buffer, |d| d.is_ascii_digit());
                    self.column += copied;

                    Ok(None)
                }
                c => Err(self.invalid_char(c)),
            },

            DecimalFraction => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c) if matches!(c, 'e' | 'E') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponent;
                    Ok(None)
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);

                    let copied = self
                        .source
                        .take_while_into(&mut self.buffer, |d| d.is_ascii_digit());
                    self.column += copied;

                    Ok(None)
                }
                _ => {
                    let token = self.produce_number();
                    Ok(Some(self.new_token(token, false)))
                }
            },

            DecimalExponent => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c) if matches!(c, '+' | '-') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponentSign;
                    Ok(None)
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponentInteger;

                    let copied = self
                        .source
                        .take_while_into(&mut self.buffer, |d| d.is_ascii_digit());
                    self.column += copied;

                    Ok(None)
                }
                c => Err(self.invalid_char(c)),
            },

            DecimalExponentSign => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponentInteger;

                    let copied = self
                        .source
                        .take_while_into(&mut self.buffer, |d| d.is_ascii_digit());
                    self.column += copied;

                    Ok(None)
                }
                c => Err(self.invalid_char(c)),
            },

            DecimalExponentInteger => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);

                    let copied = self
                        .source
                        .take_while_into(&mut self.buffer, |d| d.is_ascii_digit());
                    self.column += copied;

                    Ok(None)
                }
                _ => {
                    let token = self.produce_number();
                    Ok(Some(self.new_token(token, false)))
                }
            },

            // -------------------------- STRING -----------------------------
            LexState::String => match next_char {
                // escape sequence
                Char('\\') => {
                    self.advance_char();
                    self.lex_state = LexState::StringEscape;
                    Ok(None)
                }
                // closing quote -> complete string
                Char('"') => {
                    self.advance_char();
                    let token = self.produce_string();
                    Ok(Some(self.new_token(token, false)))
                }
                Char(c @ '\0'..='\x1F') => {
                    // RFC 8259 allows 0x20 .. 0x10FFFF unescaped
                    Err(self.invalid_char(Char(c)))
                }
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(_) => {
                    // Fast-path: copy as many consecutive non-escaped,
                    // non-terminating characters as possible in a single pass.
                    let copied = self
                        .source
                        .take_while_into(&mut self.buffer, |ch| {
                            ch != '\\' && ch != '"' && ch >= '\u{20}'
                        });

                    // The copied characters cannot contain a newline, which is
                    // below 0x20, so only the column moves.
                    self.column += copied;

                    Ok(None)
                }
                EndOfInput => Err(self.invalid_char(EndOfInput)),
            },

            StringEscape => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(ch) if matches!(ch, '"' | '\\' | '/') => {
                    self.advance_char();
                    self.buffer.push(ch);
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                Char('b') => {
                    self.advance_char();
                    self.buffer.push('\u{0008}');
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                Char('f') => {
                    self.advance_char();
                    self.buffer.push('\u{000C}');
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                Char('n') => {
                    self.advance_char();
                    self.buffer.push('\n');
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                Char('r') => {
                    self.advance_char();
                    self.buffer.push('\r');
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                Char('t') => {
                    self.advance_char();
                    self.buffer.push('\t');
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                Char('u') => {
                    self.advance_char();
                    self.unicode_escape_buffer.reset();
                    self.lex_state = LexState::StringEscapeUnicode;
                    Ok(None)
                }
                c => Err(self.invalid_char(c)),
            },

            StringEscapeUnicode => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char(c) if c.is_ascii_hexdigit() => {
                    self.advance_char();
                    match self.unicode_escape_buffer.feed(c) {
                        Ok(EscapeStep::Pending) => Ok(None),
                        Ok(EscapeStep::Done(decoded)) => {
                            self.buffer.push(decoded);
                            self.lex_state = LexState::String;
                            Ok(None)
                        }
                        Ok(EscapeStep::NeedLowSurrogate) => {
                            self.lex_state = LexState::StringLowSurrogateEscape;
                            Ok(None)
                        }
                        Err(kind) => Err(self.syntax_error(kind)),
                    }
                }
                EndOfInput => Err(self.invalid_eof()),
                Char(c) => Err(self.syntax_error(SyntaxErrorKind::InvalidUnicodeEscapeChar(c))),
            },

            // A decoded high surrogate demands a second `\uXXXX` escape
            // immediately after it. Anything else leaves the high half
            // unpaired.
            StringLowSurrogateEscape => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char('\\') => {
                    self.advance_char();
                    self.lex_state = LexState::StringLowSurrogateU;
                    Ok(None)
                }
                Char(_) | EndOfInput => Err(self.unpaired_surrogate()),
            },

            StringLowSurrogateU => match next_char {
                Empty => Ok(Some(self.new_token(Token::Eof, true))),
                Char('u') => {
                    self.advance_char();
                    self.lex_state = LexState::StringEscapeUnicode;
                    Ok(None)
                }
                Char(_) | EndOfInput => Err(self.unpaired_surrogate()),
            },

            // ---------------------- PARSE-STATE ENTRY ------------------------
            Start => match next_char {
                Char(c) if matches!(c, '{' | '[') => {
                    self.advance_char();
                    Ok(Some(self.new_token(Token::Punctuator(c as u8), false)))
                }
                _ => {
                    self.lex_state = LexState::Value;
                    Ok(None)
                }
            },

            BeforePropertyName => match next_char {
                // `}` closes an empty object only; after a comma the next
                // member name is required
                Char('}') if matches!(self.frames.last(), Some(Frame::Object { members: 0 })) => {
                    self.advance_char();
                    Ok(Some(self.new_token(Token::Punctuator(b'}'), false)))
                }
                Char('"') => {
                    self.advance_char();
                    self.buffer.clear();
                    self.lex_state = LexState::String;
                    Ok(None)
                }
                c => Err(self.invalid_char(c)),
            },

            AfterPropertyName => match next_char {
                Char(c @ ':') => {
                    self.advance_char();
                    Ok(Some(self.new_token(Token::Punctuator(c as u8), false)))
                }
                c => Err(self.invalid_char(c)),
            },

            BeforePropertyValue => {
                self.lex_state = LexState::Value;
                Ok(None)
            }

            BeforeArrayValue => match next_char {
                // Same shape as above: `]` closes an empty array only
                Char(']') if matches!(self.frames.last(), Some(Frame::Array { elements: 0 })) => {
                    self.advance_char();
                    Ok(Some(self.new_token(Token::Punctuator(b']'), false)))
                }
                _ => {
                    self.lex_state = LexState::Value;
                    Ok(None)
                }
            },

            AfterPropertyValue => match next_char {
                Char(c) if matches!(c, ',' | '}') => {
                    self.advance_char();
                    Ok(Some(self.new_token(Token::Punctuator(c as u8), false)))
                }
                c => Err(self.invalid_char(c)),
            },

            AfterArrayValue => match next_char {
                Char(c) if matches!(c, ',' | ']') => {
                    self.advance_char();
                    Ok(Some(self.new_token(Token::Punctuator(c as u8), false)))
                }
                c => Err(self.invalid_char(c)),
            },

            End => match next_char {
                Char(c) => Err(self.syntax_error(SyntaxErrorKind::TrailingCharacter(c))),
                c => Err(self.invalid_char(c)),
            },
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Parse state dispatcher
    // ------------------------------------------------------------------------------------------------

    #[inline(always)]
    fn dispatch_parse_state(&mut self, token: Token) -> Result<(), SyntaxError> {
        use ParseState::*;

        match self.parse_state {
            Start => match token {
                Token::Eof if self.end_of_input => return Err(self.invalid_eof()),
                Token::Eof => (),
                _ => self.push_value(token)?,
            },

            BeforePropertyName => match token {
                Token::Eof if self.end_of_input => return Err(self.invalid_eof()),
                Token::PropertyName { value } => {
                    self.pending = Some(SyntaxEvent::Key { name: value });
                    self.parse_state = AfterPropertyName;
                }
                Token::Punctuator(_) => self.pop(),
                _ => (),
            },

            AfterPropertyName => match token {
                Token::Eof if self.end_of_input => return Err(self.invalid_eof()),
                Token::Eof => (),
                _ => self.parse_state = BeforePropertyValue,
            },

            BeforePropertyValue => match token {
                Token::Eof if self.end_of_input => return Err(self.invalid_eof()),
                Token::Eof => (),
                _ => self.push_value(token)?,
            },

            BeforeArrayValue => match token {
                Token::Eof if self.end_of_input => return Err(self.invalid_eof()),
                Token::Eof => (),
                Token::Punctuator(b']') => self.pop(),
                _ => self.push_value(token)?,
            },

            AfterPropertyValue => match token {
                Token::Eof if self.end_of_input => return Err(self.invalid_eof()),
                Token::Punctuator(b',') => self.parse_state = BeforePropertyName,
                Token::Punctuator(b'}') => self.pop(),
                _ => (),
            },

            AfterArrayValue => match token {
                Token::Eof if self.end_of_input => return Err(self.invalid_eof()),
                Token::Punctuator(b',') => self.parse_state = BeforeArrayValue,
                Token::Punctuator(b']') => self.pop(),
                _ => (),
            },

            End | Error => {}
        }

        Ok(())
    }

    #[inline(always)]
    fn pop(&mut self) {
        match self.frames.pop() {
            Some(Frame::Array { elements }) => {
                self.pending = Some(SyntaxEvent::EndArray { elements });
            }
            Some(Frame::Object { members }) => {
                self.pending = Some(SyntaxEvent::EndObject { members });
            }
            None => {}
        }

        // The closed container is itself a completed value in its parent
        self.complete_value();
    }

    #[inline(always)]
    fn push_value(&mut self, token: Token) -> Result<(), SyntaxError> {
        match token {
            Token::Punctuator(b'{') => {
                self.push_frame(Frame::Object { members: 0 })?;
                self.pending = Some(SyntaxEvent::StartObject);
                self.parse_state = ParseState::BeforePropertyName;
                return Ok(());
            }
            Token::Punctuator(b'[') => {
                self.push_frame(Frame::Array { elements: 0 })?;
                self.pending = Some(SyntaxEvent::StartArray);
                self.parse_state = ParseState::BeforeArrayValue;
                return Ok(());
            }
            _ => {
                // Scalars handled below
            }
        }

        match token {
            Token::Null => self.pending = Some(SyntaxEvent::Null),
            Token::Boolean(value) => self.pending = Some(SyntaxEvent::Boolean { value }),
            Token::Number(value) => self.pending = Some(SyntaxEvent::Number { value }),
            Token::RawNumber(text) => self.pending = Some(SyntaxEvent::RawNumber { text }),
            Token::String { value } => self.pending = Some(SyntaxEvent::String { value }),
            _ => (),
        }

        self.complete_value();
        Ok(())
    }

    /// Counts a finished value in the enclosing container and restores the
    /// parse state for whatever follows it.
    #[inline(always)]
    fn complete_value(&mut self) {
        match self.frames.last_mut() {
            None => self.parse_state = ParseState::End,
            Some(Frame::Array { elements }) => {
                *elements += 1;
                self.parse_state = ParseState::AfterArrayValue;
            }
            Some(Frame::Object { members }) => {
                *members += 1;
                self.parse_state = ParseState::AfterPropertyValue;
            }
        }
    }

    #[inline(always)]
    fn push_frame(&mut self, frame: Frame) -> Result<(), SyntaxError> {
        if self.frames.len() >= self.max_depth {
            return Err(self.syntax_error(SyntaxErrorKind::TooDeeplyNested(self.max_depth)));
        }
        self.frames.push(frame);
        Ok(())
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    fn invalid_char(&self, c: PeekedChar) -> SyntaxError {
        match c {
            EndOfInput | Empty => self.invalid_eof(),
            Char(c) => self.syntax_error(SyntaxErrorKind::InvalidCharacter(c)),
        }
    }

    fn invalid_eof(&self) -> SyntaxError {
        self.syntax_error(SyntaxErrorKind::UnexpectedEndOfInput)
    }

    fn unpaired_surrogate(&self) -> SyntaxError {
        // These states are only entered while a high half is parked
        let high = self.unicode_escape_buffer.pending_high().unwrap_or_default();
        self.syntax_error(SyntaxErrorKind::UnpairedSurrogate(high))
    }

    fn syntax_error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            kind,
            line: self.line,
            column: self.column,
        }
    }
}
