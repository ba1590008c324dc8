//! Classification of lexed number text into the narrowest numeric type.

use crate::event::Number;

/// Classifies a complete, syntactically valid JSON number.
///
/// Integer text is mapped onto the narrowest type that holds the value,
/// trying signed 32-bit first, then the unsigned widths for non-negative
/// values and `i64` for negative ones. Anything with a fraction or an
/// exponent, and any integer too wide for 64 bits, becomes an `f64`.
/// Magnitudes beyond `f64` range saturate to infinity.
pub(crate) fn classify(text: &str) -> Number {
    let is_decimal = text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));

    if !is_decimal {
        if text.starts_with('-') {
            if let Ok(value) = text.parse::<i64>() {
                return match i32::try_from(value) {
                    Ok(narrow) => Number::I32(narrow),
                    Err(_) => Number::I64(value),
                };
            }
        } else if let Ok(value) = text.parse::<u64>() {
            if let Ok(narrow) = i32::try_from(value) {
                return Number::I32(narrow);
            }
            if let Ok(narrow) = u32::try_from(value) {
                return Number::U32(narrow);
            }
            return Number::U64(value);
        }
    }

    // Safe: the lexer only hands over well-formed number text
    Number::F64(text.parse().unwrap())
}
