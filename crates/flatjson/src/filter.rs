//! The flat-object filter between the tokenizer and a [`Handler`].
//!
//! [`FlatFilter`] forwards syntax events to a handler while enforcing the
//! shape this crate exists for: exactly one top-level JSON object whose
//! member values contain no further objects. Arrays, including nested
//! arrays, pass through untouched.
//!
//! # Examples
//!
//! The guard names the most recent key when it rejects a nested object:
//!
//! ```rust
//! use flatjson::{FlatFilter, Handler, SyntaxEvent};
//!
//! struct Sink;
//! impl Handler for Sink {}
//!
//! let mut sink = Sink;
//! let mut filter = FlatFilter::new(&mut sink);
//! filter.apply(SyntaxEvent::StartObject).unwrap();
//! filter
//!     .apply(SyntaxEvent::Key {
//!         name: "a".to_string(),
//!     })
//!     .unwrap();
//! let err = filter.apply(SyntaxEvent::StartObject).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "variable: a, error: nested objects not allowed"
//! );
//! ```

use alloc::string::String;

use crate::{
    error::ParseError,
    event::{Number, SyntaxEvent},
    handler::Handler,
};

/// Where the filter stands relative to the single permitted object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsingState {
    /// No object has been opened yet.
    Idle,
    /// Inside the top-level object.
    Started,
    /// The top-level object has closed.
    End,
}

/// Event filter enforcing the flat-object shape.
///
/// A filter is cheap to construct and is meant to live for exactly one
/// document; [`parse`](crate::parse) builds a fresh one per call. The filter
/// holds the most recent member name so that a rejection can say which
/// variable carried the offending value.
pub struct FlatFilter<'h, H> {
    state: ParsingState,
    last_key: String,
    handler: &'h mut H,
}

impl<'h, H: Handler> FlatFilter<'h, H> {
    /// Creates a filter forwarding to `handler`.
    pub fn new(handler: &'h mut H) -> Self {
        Self {
            state: ParsingState::Idle,
            last_key: String::new(),
            handler,
        }
    }

    /// The filter's position relative to the top-level object.
    #[must_use]
    pub fn state(&self) -> ParsingState {
        self.state
    }

    /// Routes one tokenizer event to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns whatever the operation returns: the nested-object rejection
    /// or an error raised by the handler.
    pub fn apply(&mut self, event: SyntaxEvent) -> Result<(), ParseError> {
        match event {
            SyntaxEvent::Null => self.null(),
            SyntaxEvent::Boolean { value } => self.boolean(value),
            SyntaxEvent::Number { value } => self.number(value),
            SyntaxEvent::RawNumber { text } => self.raw_number(&text),
            SyntaxEvent::String { value } => self.string(&value),
            SyntaxEvent::Key { name } => self.key(&name),
            SyntaxEvent::StartObject => self.start_object(),
            SyntaxEvent::EndObject { .. } => self.end_object(),
            SyntaxEvent::StartArray => self.start_array(),
            SyntaxEvent::EndArray { .. } => self.end_array(),
        }
    }

    /// Forwards a `null`.
    pub fn null(&mut self) -> Result<(), ParseError> {
        self.handler.null()
    }

    /// Forwards a boolean.
    pub fn boolean(&mut self, value: bool) -> Result<(), ParseError> {
        self.handler.boolean(value)
    }

    /// Forwards a classified number, collapsing the four integer widths onto
    /// the handler's two integer methods. `I32` widens to `i64` and `U32` to
    /// `u64`; the sign of the literal decides which method fires.
    pub fn number(&mut self, value: Number) -> Result<(), ParseError> {
        match value {
            Number::I32(value) => self.handler.number_long(i64::from(value)),
            Number::U32(value) => self.handler.number_unsigned_long(u64::from(value)),
            Number::I64(value) => self.handler.number_long(value),
            Number::U64(value) => self.handler.number_unsigned_long(value),
            Number::F64(value) => self.handler.number_double(value),
        }
    }

    /// Accepts unparsed number text and does nothing with it.
    pub fn raw_number(&mut self, _text: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// Forwards a string value.
    pub fn string(&mut self, value: &str) -> Result<(), ParseError> {
        self.handler.string(value)
    }

    /// Opens the top-level object, or rejects a nested one.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError::Schema`] naming the most recent key if an
    /// object is already open or has already closed.
    pub fn start_object(&mut self) -> Result<(), ParseError> {
        if self.state != ParsingState::Idle {
            return Err(ParseError::schema(
                self.last_key.clone(),
                "nested objects not allowed",
            ));
        }
        self.handler.start_object()?;
        self.state = ParsingState::Started;
        Ok(())
    }

    /// Forwards a member name, then records it for later diagnostics.
    pub fn key(&mut self, name: &str) -> Result<(), ParseError> {
        self.handler.key(name)?;
        self.last_key.clear();
        self.last_key.push_str(name);
        Ok(())
    }

    /// Closes the top-level object. The filter stays closed: a further
    /// `start_object` is rejected, not treated as a second document.
    pub fn end_object(&mut self) -> Result<(), ParseError> {
        self.handler.end_object()?;
        self.state = ParsingState::End;
        Ok(())
    }

    /// Forwards an array opening.
    pub fn start_array(&mut self) -> Result<(), ParseError> {
        self.handler.start_array()
    }

    /// Forwards an array closing.
    pub fn end_array(&mut self) -> Result<(), ParseError> {
        self.handler.end_array()
    }
}
