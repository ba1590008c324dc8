#![allow(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

pub const ORIGINAL: &str = r#"
{
    "device": "probe-α7",
    "firmware": "2.4.1",
    "window": "10:30 \"local\"",
    "armed": true,
    "fault": null,
    "samples": 2500,
    "offset": -12,
    "gain": 0.125,
    "limit": 3000000000,
    "drift": -0.005,
    "grid": [
        [1, 2],
        [3, 4]
    ],
    "tags": ["cal\n", "warm-up"],
    "empty": []
}"#;

// This stream carries one flat telemetry record. The chunks intentionally cut
// on the worst seams the tokenizer has to survive: inside a multi-byte
// character, between a backslash and the quote it escapes, inside literals,
// and inside numbers.
#[rustfmt::skip]
pub const STREAM: [&str; 14] = [
    r#"{"device":"probe-"#,                    // cut before a multi-byte character
    r#"α7","firmware":"2.4.1","#,
    r#""window":"10:30 \"#,                    // cut between '\' and the '"' it escapes
    r#""local\"","#,
    r#""armed":tr"#,                           // cut inside a literal
    r#"ue,"fault":null,"samples":25"#,         // cut inside an integer
    r#"00,"offset":-"#,                        // cut after a sign
    r#"12,"gain":0.12"#,                       // cut inside a fraction
    r#"5,"limit":3000000000,"drift":-0.005,"#,
    r#""grid":[[1,2],[3,"#,                    // cut inside a nested array
    r#"4]],"tags":["cal\n","#,
    r#""warm-up"],"#,
    r#""empty":[]"#,
    r#"}"#,
];

#[test]
fn assert_stream_example() {
    let streamed = STREAM.join("");

    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    let original = serde_json::to_string(&value).unwrap();

    assert_eq!(streamed, original);
}
