//! Streaming event reader for flat JSON data objects.
//!
//! A *flat* document is a single top-level JSON object whose member values
//! are scalars or (arbitrarily nested) arrays of scalars; no object appears
//! anywhere below the top level. That shape is what data files for
//! column-oriented loaders look like, and this crate reads it in one pass
//! without building a document tree: [`parse`] tokenizes the input
//! incrementally and forwards each event to a caller-supplied [`Handler`].
//!
//! Numeric literals keep their width and signedness. An integer that fits
//! 64 bits reaches the handler through [`Handler::number_long`] or
//! [`Handler::number_unsigned_long`] depending on its sign; everything else,
//! including the extension literals `NaN`, `Infinity`, and `-Infinity`,
//! arrives as an `f64`.
//!
//! The crate is `no_std` (with `alloc`) and has no required dependencies
//! beyond `thiserror`.
//!
//! # Examples
//!
//! Loading a name/value table:
//!
//! ```rust
//! use flatjson::{Handler, ParseError, parse};
//!
//! #[derive(Default)]
//! struct Table {
//!     names: Vec<String>,
//!     values: Vec<f64>,
//! }
//!
//! impl Handler for Table {
//!     fn key(&mut self, name: &str) -> Result<(), ParseError> {
//!         self.names.push(name.to_string());
//!         Ok(())
//!     }
//!
//!     fn number_long(&mut self, value: i64) -> Result<(), ParseError> {
//!         self.values.push(value as f64);
//!         Ok(())
//!     }
//!
//!     fn number_double(&mut self, value: f64) -> Result<(), ParseError> {
//!         self.values.push(value);
//!         Ok(())
//!     }
//! }
//!
//! let mut table = Table::default();
//! parse(r#"{"theta": 0.25, "steps": 40}"#, &mut table).unwrap();
//! assert_eq!(table.names, ["theta", "steps"]);
//! assert_eq!(table.values, [0.25, 40.0]);
//! ```
//!
//! Rejections carry the offending variable's name:
//!
//! ```rust
//! use flatjson::{Handler, parse};
//!
//! struct Sink;
//! impl Handler for Sink {}
//!
//! let err = parse(r#"{"nu": {"df": 3}}"#, &mut Sink).unwrap_err();
//! assert_eq!(err.to_string(), "variable: nu, error: nested objects not allowed");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod driver;
mod error;
mod event;
mod filter;
mod handler;
mod limits;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use driver::{parse, parse_chunks};
pub use error::{ParseError, SyntaxError, SyntaxErrorKind};
pub use event::{Number, SyntaxEvent};
pub use filter::{FlatFilter, ParsingState};
pub use handler::Handler;
pub use limits::{InvalidArgument, MaxDepth};
pub use tokenizer::{ClosedTokenizer, Tokenizer, TokenizerOptions};
