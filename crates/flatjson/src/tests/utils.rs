use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{Handler, ParseError, SyntaxError, SyntaxEvent, Tokenizer, TokenizerOptions};

/// One handler callback, recorded in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Null,
    Boolean(bool),
    Long(i64),
    UnsignedLong(u64),
    Double(f64),
    Str(String),
    StartObject,
    Key(String),
    EndObject,
    StartArray,
    EndArray,
}

/// Handler that appends every callback to `calls`.
///
/// Setting `reject_key` makes [`Handler::key`] fail for that name; the abort
/// tests use it to stop a parse from inside the handler.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub reject_key: Option<String>,
}

impl Handler for Recorder {
    fn null(&mut self) -> Result<(), ParseError> {
        self.calls.push(Call::Null);
        Ok(())
    }

    fn boolean(&mut self, value: bool) -> Result<(), ParseError> {
        self.calls.push(Call::Boolean(value));
        Ok(())
    }

    fn number_long(&mut self, value: i64) -> Result<(), ParseError> {
        self.calls.push(Call::Long(value));
        Ok(())
    }

    fn number_unsigned_long(&mut self, value: u64) -> Result<(), ParseError> {
        self.calls.push(Call::UnsignedLong(value));
        Ok(())
    }

    fn number_double(&mut self, value: f64) -> Result<(), ParseError> {
        self.calls.push(Call::Double(value));
        Ok(())
    }

    fn string(&mut self, text: &str) -> Result<(), ParseError> {
        self.calls.push(Call::Str(text.to_string()));
        Ok(())
    }

    fn start_object(&mut self) -> Result<(), ParseError> {
        self.calls.push(Call::StartObject);
        Ok(())
    }

    fn key(&mut self, name: &str) -> Result<(), ParseError> {
        if self.reject_key.as_deref() == Some(name) {
            return Err(ParseError::schema(name, "rejected by handler"));
        }
        self.calls.push(Call::Key(name.to_string()));
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), ParseError> {
        self.calls.push(Call::EndObject);
        Ok(())
    }

    fn start_array(&mut self) -> Result<(), ParseError> {
        self.calls.push(Call::StartArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), ParseError> {
        self.calls.push(Call::EndArray);
        Ok(())
    }
}

/// Feeds `chunks` into a fresh tokenizer, draining after every chunk the way
/// a streaming caller would, and collects the events.
pub fn collect_events(
    options: TokenizerOptions,
    chunks: &[&str],
) -> Result<Vec<SyntaxEvent>, SyntaxError> {
    let mut tokenizer = Tokenizer::new(options);
    let mut events = Vec::new();
    for chunk in chunks {
        tokenizer.feed(chunk);
        for event in tokenizer.by_ref() {
            events.push(event?);
        }
    }
    for event in tokenizer.finish() {
        events.push(event?);
    }
    Ok(events)
}

/// [`collect_events`] with default options, for inputs that must tokenize.
pub fn events(chunks: &[&str]) -> Vec<SyntaxEvent> {
    collect_events(TokenizerOptions::default(), chunks).expect("input should tokenize")
}
