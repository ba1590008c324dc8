//! Loads a flat parameter record into typed columns while streaming the
//! document in small, irregular chunks the way a network or file read loop
//! would deliver it.
//!
//! The record is the kind of data file this crate exists for: one JSON
//! object, one scalar (or array of scalars) per parameter:
//!
//! ```text
//! {
//!   "name":        string,
//!   "<parameter>": number | bool | string | [number, ...],
//!   ...
//! }
//! ```
//!
//! Two things happen while the payload arrives:
//!
//! 1. Values are dispatched into per-width columns as soon as their events
//!    fire; nothing waits for the end of the document.
//! 2. The handler rejects non-finite doubles itself, showing how
//!    domain-level validation rides the same error channel as the built-in
//!    flat-object guard.
//!
//! Run with
//!
//! ```bash
//! cargo run -p flatjson --example load_record
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use flatjson::{Handler, ParseError, parse_chunks};

/// Column store keyed by the most recent member name.
///
/// Array elements file under the member that holds the array, so
/// `"offsets": [-3, -1]` lands as two `("offsets", …)` rows.
#[derive(Default)]
struct Columns {
    parameter: String,
    longs: Vec<(String, i64)>,
    doubles: Vec<(String, f64)>,
    flags: Vec<(String, bool)>,
    words: Vec<(String, String)>,
}

impl Columns {
    fn label(&self) -> String {
        self.parameter.clone()
    }
}

impl Handler for Columns {
    fn key(&mut self, name: &str) -> Result<(), ParseError> {
        self.parameter = name.to_string();
        Ok(())
    }

    fn number_long(&mut self, value: i64) -> Result<(), ParseError> {
        self.longs.push((self.label(), value));
        Ok(())
    }

    fn number_unsigned_long(&mut self, value: u64) -> Result<(), ParseError> {
        // Magnitudes beyond i64 are out of range for this loader.
        let value = i64::try_from(value)
            .map_err(|_| ParseError::schema(self.label(), "value exceeds i64"))?;
        self.longs.push((self.label(), value));
        Ok(())
    }

    fn number_double(&mut self, value: f64) -> Result<(), ParseError> {
        if !value.is_finite() {
            return Err(ParseError::schema(self.label(), "non-finite double"));
        }
        self.doubles.push((self.label(), value));
        Ok(())
    }

    fn boolean(&mut self, value: bool) -> Result<(), ParseError> {
        self.flags.push((self.label(), value));
        Ok(())
    }

    fn string(&mut self, text: &str) -> Result<(), ParseError> {
        self.words.push((self.label(), text.to_string()));
        Ok(())
    }
}

fn main() {
    // A toy calibration record streamed in six chunks. The cuts land inside
    // numbers and literals on purpose; the tokenizer resumes across them.
    let simulated_stream: [&str; 6] = [
        r#"{"name": "bw-cal", "channels": 2"#,
        r#"0, "gain": 0.2"#,
        r#"5, "offsets": [-3, -1, 0"#,
        r#", 2], "active": tr"#,
        r#"ue, "comment": "nightly sweep""#,
        r#"}"#,
    ];

    let mut columns = Columns::default();
    if let Err(err) = parse_chunks(simulated_stream, &mut columns) {
        eprintln!("record rejected: {err}");
        return;
    }

    println!("longs:   {:?}", columns.longs);
    println!("doubles: {:?}", columns.doubles);
    println!("flags:   {:?}", columns.flags);
    println!("words:   {:?}", columns.words);

    // A nested object never reaches the handler; the parse aborts with the
    // offending variable's name.
    let mut reject = Columns::default();
    let err = parse_chunks([r#"{"geometry": {"sides": 4}}"#], &mut reject)
        .expect_err("nested objects are not flat");
    println!("rejected as expected: {err}");
}
