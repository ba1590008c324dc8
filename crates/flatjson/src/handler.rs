//! The consumer interface of a parse.

use crate::error::ParseError;

/// Receives the events of one flat JSON document.
///
/// [`parse`](crate::parse) drives an implementation of this trait through the
/// document in order: `start_object`, then for each member a `key` call
/// followed by the member's value (scalars, or `start_array` / element values
/// / `end_array`), and finally `end_object`.
///
/// Every method defaults to doing nothing and returning `Ok(())`, so an
/// implementation only overrides the events it cares about. String and key
/// slices are valid only for the duration of the call; implementations that
/// keep them must copy.
///
/// Returning `Err` from any method aborts the parse immediately: no further
/// events are delivered and the error is returned unchanged from
/// [`parse`](crate::parse). [`ParseError::schema`] builds errors suited to
/// data-level rejections.
///
/// # Examples
///
/// ```
/// use flatjson::{Handler, ParseError, parse};
///
/// #[derive(Default)]
/// struct Doubles(Vec<f64>);
///
/// impl Handler for Doubles {
///     fn number_double(&mut self, value: f64) -> Result<(), ParseError> {
///         self.0.push(value);
///         Ok(())
///     }
/// }
///
/// let mut out = Doubles::default();
/// parse(r#"{"mu": 0.5, "sigma": 1.25}"#, &mut out).unwrap();
/// assert_eq!(out.0, [0.5, 1.25]);
/// ```
pub trait Handler {
    /// A `null` member or element.
    fn null(&mut self) -> Result<(), ParseError> {
        Ok(())
    }

    /// A `true` or `false` member or element.
    fn boolean(&mut self, _value: bool) -> Result<(), ParseError> {
        Ok(())
    }

    /// A signed integer literal (32-bit literals are widened).
    fn number_long(&mut self, _value: i64) -> Result<(), ParseError> {
        Ok(())
    }

    /// An unsigned integer literal too large for `i32` (32-bit literals are
    /// widened).
    fn number_unsigned_long(&mut self, _value: u64) -> Result<(), ParseError> {
        Ok(())
    }

    /// A floating-point literal, including `NaN` and the infinities.
    fn number_double(&mut self, _value: f64) -> Result<(), ParseError> {
        Ok(())
    }

    /// A string member or element. The slice is valid for this call only.
    fn string(&mut self, _text: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// The top-level object opened.
    fn start_object(&mut self) -> Result<(), ParseError> {
        Ok(())
    }

    /// A member name. The slice is valid for this call only.
    fn key(&mut self, _name: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// The top-level object closed.
    fn end_object(&mut self) -> Result<(), ParseError> {
        Ok(())
    }

    /// An array opened.
    fn start_array(&mut self) -> Result<(), ParseError> {
        Ok(())
    }

    /// An array closed.
    fn end_array(&mut self) -> Result<(), ParseError> {
        Ok(())
    }
}
