//! Entry points that pump a whole document through a [`Handler`].

use crate::{
    error::ParseError,
    filter::FlatFilter,
    handler::Handler,
    tokenizer::{Tokenizer, TokenizerOptions},
};

/// Parses one complete flat JSON document, delivering its events to
/// `handler`.
///
/// The document must hold exactly one top-level value and is checked against
/// the flat-object shape: an object opening anywhere but at the top level is
/// rejected. The extension literals `NaN`, `Infinity`, and `-Infinity` are
/// accepted as numbers.
///
/// Parsing stops at the first failure. Events delivered before the failure
/// are not rolled back; a handler that needs all-or-nothing behavior should
/// stage its writes and commit only when `parse` returns `Ok`.
///
/// # Errors
///
/// [`ParseError::Syntax`] if the input is not well-formed JSON,
/// [`ParseError::Schema`] if it is well-formed but violates the flat-object
/// shape, and any error a [`Handler`] method returned.
///
/// # Examples
///
/// ```rust
/// use flatjson::{Handler, ParseError, parse};
///
/// #[derive(Default)]
/// struct Names(Vec<String>);
///
/// impl Handler for Names {
///     fn key(&mut self, name: &str) -> Result<(), ParseError> {
///         self.0.push(name.to_string());
///         Ok(())
///     }
/// }
///
/// let mut names = Names::default();
/// parse(r#"{"alpha": 1, "beta": [2, 3]}"#, &mut names).unwrap();
/// assert_eq!(names.0, ["alpha", "beta"]);
///
/// let err = parse(r#"{"a": {"b": 1}}"#, &mut Names::default()).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "variable: a, error: nested objects not allowed"
/// );
/// ```
pub fn parse<H: Handler>(source: &str, handler: &mut H) -> Result<(), ParseError> {
    parse_chunks(core::iter::once(source), handler)
}

/// Parses one document arriving as a sequence of text chunks.
///
/// Chunks may split the document anywhere, including inside a string escape
/// or a number. Events are delivered as soon as the tokens completing them
/// have arrived, so a handler may observe a prefix of the document before a
/// later chunk turns out to be malformed. The semantics are otherwise those
/// of [`parse`]; a fresh filter guards each call.
///
/// # Errors
///
/// Same as [`parse`].
///
/// # Examples
///
/// ```rust
/// use flatjson::{Handler, ParseError, parse_chunks};
///
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl Handler for Count {
///     fn number_long(&mut self, _value: i64) -> Result<(), ParseError> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let mut count = Count::default();
/// parse_chunks(["{\"xs\": [1, 2", ", 3]}"], &mut count).unwrap();
/// assert_eq!(count.0, 3);
/// ```
pub fn parse_chunks<'a, H, I>(chunks: I, handler: &mut H) -> Result<(), ParseError>
where
    H: Handler,
    I: IntoIterator<Item = &'a str>,
{
    let mut tokenizer = Tokenizer::new(TokenizerOptions {
        allow_nan_and_infinity: true,
        ..TokenizerOptions::default()
    });
    let mut filter = FlatFilter::new(handler);

    for chunk in chunks {
        tokenizer.feed(chunk);
        for event in tokenizer.by_ref() {
            filter.apply(event?)?;
        }
    }

    for event in tokenizer.finish() {
        filter.apply(event?)?;
    }

    Ok(())
}
