use alloc::string::ToString;

use super::utils::collect_events;
use crate::{Number, SyntaxError, SyntaxEvent, Tokenizer, TokenizerOptions};

fn assert_err_contains(err: SyntaxError, expected_sub: &str, line: usize, column: usize) {
    let s = err.to_string();
    assert!(
        s.contains(expected_sub),
        "expected substring {expected_sub:?} in {s:?}"
    );
    assert_eq!(err.line, line);
    assert_eq!(err.column, column);
}

fn tokenize_err(chunks: &[&str]) -> SyntaxError {
    collect_events(TokenizerOptions::default(), chunks).expect_err("input should be rejected")
}

fn tokenize_err_with(options: TokenizerOptions, chunks: &[&str]) -> SyntaxError {
    collect_events(options, chunks).expect_err("input should be rejected")
}

#[test]
fn error_empty_document() {
    assert_err_contains(tokenize_err(&[]), "unexpected end of input", 1, 1);
    assert_err_contains(tokenize_err(&[""]), "unexpected end of input", 1, 1);
}

#[test]
fn error_blank_document() {
    assert_err_contains(tokenize_err(&["  \n "]), "unexpected end of input", 2, 2);
}

#[test]
fn error_bare_word() {
    assert_err_contains(tokenize_err(&["a"]), "invalid character 'a'", 1, 1);
}

#[test]
fn error_comment() {
    assert_err_contains(tokenize_err(&["/"]), "invalid character '/'", 1, 1);
}

#[test]
fn error_unquoted_property_name() {
    assert_err_contains(tokenize_err(&["{a: 1}"]), "invalid character 'a'", 1, 2);
}

#[test]
fn error_missing_colon() {
    assert_err_contains(
        tokenize_err(&[r#"{"a" 1}"#]),
        "invalid character '1'",
        1,
        6,
    );
}

#[test]
fn error_missing_comma_in_object() {
    assert_err_contains(
        tokenize_err(&[r#"{"a": 1 "b": 2}"#]),
        "invalid character '\\\"'",
        1,
        9,
    );
}

#[test]
fn error_missing_comma_in_array() {
    assert_err_contains(tokenize_err(&["[1 2]"]), "invalid character '2'", 1, 4);
}

#[test]
fn error_trailing_characters() {
    assert_err_contains(
        tokenize_err(&["{} x"]),
        "unexpected trailing character 'x'",
        1,
        4,
    );
}

#[test]
fn error_second_document() {
    assert_err_contains(
        tokenize_err(&["{}{}"]),
        "unexpected trailing character '{'",
        1,
        3,
    );
}

#[test]
fn error_trailing_comma_in_object() {
    assert_err_contains(
        tokenize_err(&[r#"{"a": 1,}"#]),
        "invalid character '}'",
        1,
        9,
    );
}

#[test]
fn error_trailing_comma_in_array() {
    assert_err_contains(tokenize_err(&["[1,]"]), "invalid character ']'", 1, 4);
}

#[test]
fn error_comma_before_first_element() {
    assert_err_contains(tokenize_err(&["[,1]"]), "invalid character ','", 1, 2);
}

#[test]
fn error_leading_zero() {
    assert_err_contains(
        tokenize_err(&["01"]),
        "unexpected trailing character '1'",
        1,
        2,
    );
}

#[test]
fn error_plus_sign() {
    assert_err_contains(tokenize_err(&["+1"]), "invalid character '+'", 1, 1);
}

#[test]
fn error_bare_decimal_point() {
    assert_err_contains(tokenize_err(&[".5"]), "invalid character '.'", 1, 1);
}

#[test]
fn error_truncated_exponent() {
    assert_err_contains(tokenize_err(&["1e"]), "unexpected end of input", 1, 3);
}

#[test]
fn error_truncated_object() {
    assert_err_contains(tokenize_err(&["{"]), "unexpected end of input", 1, 2);
}

#[test]
fn error_truncated_after_property_name() {
    assert_err_contains(tokenize_err(&[r#"{"a""#]), "unexpected end of input", 1, 5);
}

#[test]
fn error_truncated_before_property_value() {
    assert_err_contains(tokenize_err(&[r#"{"a":"#]), "unexpected end of input", 1, 6);
}

#[test]
fn error_truncated_array() {
    assert_err_contains(tokenize_err(&["[1,"]), "unexpected end of input", 1, 4);
}

#[test]
fn error_truncated_string() {
    assert_err_contains(tokenize_err(&[r#""abc"#]), "unexpected end of input", 1, 5);
}

#[test]
fn error_truncated_escape() {
    assert_err_contains(tokenize_err(&["\"\\"]), "unexpected end of input", 1, 3);
}

#[test]
fn error_truncated_literal() {
    assert_err_contains(tokenize_err(&["tru"]), "unexpected end of input", 1, 4);
}

#[test]
fn error_misspelled_literal() {
    assert_err_contains(tokenize_err(&["trux"]), "invalid character 'x'", 1, 4);
}

#[test]
fn error_nan_without_option() {
    assert_err_contains(tokenize_err(&["NaN"]), "invalid character 'N'", 1, 1);
}

#[test]
fn error_infinity_without_option() {
    assert_err_contains(tokenize_err(&["[Infinity]"]), "invalid character 'I'", 1, 2);
}

#[test]
fn error_negative_infinity_without_option() {
    assert_err_contains(tokenize_err(&["-Infinity"]), "invalid character 'I'", 1, 2);
}

#[test]
fn error_extension_literals_are_case_sensitive() {
    let options = TokenizerOptions {
        allow_nan_and_infinity: true,
        ..TokenizerOptions::default()
    };
    assert_err_contains(
        tokenize_err_with(options, &["nan"]),
        "invalid character 'a'",
        1,
        2,
    );
    assert_err_contains(
        tokenize_err_with(options, &["Nan"]),
        "invalid character 'n'",
        1,
        3,
    );
}

#[test]
fn error_bad_escape() {
    assert_err_contains(tokenize_err(&[r#""\x""#]), "invalid character 'x'", 1, 3);
}

#[test]
fn error_bad_unicode_escape() {
    assert_err_contains(
        tokenize_err(&[r#""\u12G4""#]),
        "invalid character 'G' in unicode escape",
        1,
        6,
    );
}

#[test]
fn error_truncated_unicode_escape() {
    assert_err_contains(
        tokenize_err(&[r#""\u12"#]),
        "unexpected end of input",
        1,
        6,
    );
}

#[test]
fn error_lone_low_surrogate() {
    assert_err_contains(
        tokenize_err(&[r#""\uDC00""#]),
        "unpaired surrogate \\uDC00 in string",
        1,
        8,
    );
}

#[test]
fn error_unpaired_high_surrogate() {
    assert_err_contains(
        tokenize_err(&[r#""\uD800x""#]),
        "unpaired surrogate \\uD800 in string",
        1,
        8,
    );
}

#[test]
fn error_high_surrogate_then_other_escape() {
    assert_err_contains(
        tokenize_err(&[r#""\uD800\n""#]),
        "unpaired surrogate \\uD800 in string",
        1,
        9,
    );
}

#[test]
fn error_high_surrogate_then_bmp_escape() {
    // The second escape completes before the pairing check fires.
    assert_err_contains(
        tokenize_err(&[r#""\uD800\u0041""#]),
        "unpaired surrogate \\uD800 in string",
        1,
        14,
    );
}

#[test]
fn error_high_surrogate_at_end_of_input() {
    assert_err_contains(
        tokenize_err(&[r#""\uD800"#]),
        "unpaired surrogate \\uD800 in string",
        1,
        8,
    );
}

#[test]
fn error_control_character_in_string() {
    assert_err_contains(
        tokenize_err(&["\"a\nb\""]),
        "invalid character '\\n'",
        1,
        3,
    );
}

#[test]
fn error_nesting_limit() {
    let options = TokenizerOptions {
        max_depth: 2,
        ..TokenizerOptions::default()
    };
    assert_err_contains(
        tokenize_err_with(options, &["[[["]),
        "nesting exceeds 2 levels",
        1,
        4,
    );
    // Objects count against the same limit as arrays.
    assert_err_contains(
        tokenize_err_with(options, &["[[{"]),
        "nesting exceeds 2 levels",
        1,
        4,
    );
}

#[test]
fn error_max_depth_zero_rejects_all_containers() {
    let options = TokenizerOptions {
        max_depth: 0,
        ..TokenizerOptions::default()
    };
    assert_err_contains(
        tokenize_err_with(options, &["{"]),
        "nesting exceeds 0 levels",
        1,
        2,
    );

    // Root scalars carry no nesting and still tokenize.
    assert_eq!(
        collect_events(options, &["1"]).unwrap(),
        [SyntaxEvent::Number {
            value: Number::I32(1),
        }]
    );
}

#[test]
fn error_position_tracks_lines() {
    assert_err_contains(
        tokenize_err(&["{\n  \"a\": }"]),
        "invalid character '}'",
        2,
        8,
    );
}

#[test]
fn error_position_counts_characters_not_bytes() {
    // 'é' is two bytes but one column.
    assert_err_contains(tokenize_err(&["[\"é\", x]"]), "invalid character 'x'", 1, 7);
}

#[test]
fn error_poisons_iterator() {
    let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
    tokenizer.feed(r#"{"a": 1, }"#);

    assert_eq!(
        tokenizer.next().unwrap().unwrap(),
        SyntaxEvent::StartObject
    );
    assert_eq!(
        tokenizer.next().unwrap().unwrap(),
        SyntaxEvent::Key {
            name: "a".to_string(),
        }
    );
    assert_eq!(
        tokenizer.next().unwrap().unwrap(),
        SyntaxEvent::Number {
            value: Number::I32(1),
        }
    );

    let err = tokenizer.next().unwrap().unwrap_err();
    assert_err_contains(err, "invalid character '}'", 1, 10);

    // Errored tokenizers stay exhausted, even if more input arrives.
    assert!(tokenizer.next().is_none());
    tokenizer.feed("1}");
    assert!(tokenizer.next().is_none());
}
