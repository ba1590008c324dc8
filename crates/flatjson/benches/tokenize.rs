//! Benchmark: `flatjson::Tokenizer`
#![allow(missing_docs)]

use std::{fmt::Write, time::Duration};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use flatjson::{Tokenizer, TokenizerOptions};

/// Produce a deterministic flat document whose textual representation is
/// exactly `target_len` bytes (UTF-8 code units), padding a single string
/// member. Exercises the raw string copy path.
fn make_string_payload(target_len: usize) -> String {
    // {"data":"aaaa…"}
    let overhead = "{\"data\":\"\"}".len();
    assert!(target_len >= overhead, "target_len must be >= {overhead}");

    let content_len = target_len - overhead;
    let mut s = String::with_capacity(target_len);
    s.push_str("{\"data\":\"");
    s.extend(std::iter::repeat_n('a', content_len));
    s.push_str("\"}");
    debug_assert_eq!(s.len(), target_len);
    s
}

/// Produce a flat document of `members` numeric members cycling through the
/// four integer widths and a fraction. Exercises number lexing and
/// classification.
fn make_number_payload(members: usize) -> String {
    let mut s = String::from("{");
    for i in 0..members {
        if i > 0 {
            s.push(',');
        }
        match i % 4 {
            0 => write!(s, "\"k{i}\":{i}").unwrap(),
            1 => write!(s, "\"k{i}\":-{}", i * 7).unwrap(),
            2 => write!(s, "\"k{i}\":{}", 3_000_000_000_u64 + i as u64).unwrap(),
            _ => write!(s, "\"k{i}\":{i}.25").unwrap(),
        }
    }
    s.push('}');
    s
}

/// Run the tokenizer by feeding it `parts` chunks that together form the full
/// `payload`. Returns the number of events produced so that the result can be
/// black-boxed by Criterion.
fn run_tokenizer(payload: &str, parts: usize, numbers_as_text: bool) -> usize {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts); // ceiling division

    let mut tokenizer = Tokenizer::new(TokenizerOptions {
        numbers_as_text,
        ..TokenizerOptions::default()
    });
    let mut produced = 0usize;

    for chunk in payload.as_bytes().chunks(chunk_size) {
        tokenizer.feed(std::str::from_utf8(chunk).expect("chunk is valid UTF-8"));
        for res in tokenizer.by_ref() {
            res.expect("payload is valid");
            produced += 1;
        }
    }

    for res in tokenizer.finish() {
        res.expect("payload is valid");
        produced += 1;
    }

    produced
}

fn bench_tokenizer(c: &mut Criterion) {
    let string_payload = make_string_payload(10_000);
    let number_payload = make_number_payload(500);

    let mut group = c.benchmark_group("tokenizer_string_split");
    for &parts in &[1usize, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(parts),
            &parts,
            |b, &parts| {
                b.iter(|| {
                    let count = run_tokenizer(black_box(&string_payload), parts, false);
                    black_box(count);
                });
            },
        );
    }
    group.finish();

    let mut group = c.benchmark_group("tokenizer_numbers");
    for &parts in &[1usize, 100] {
        for &numbers_as_text in &[false, true] {
            let name = if numbers_as_text { "raw" } else { "classified" };
            group.bench_with_input(
                BenchmarkId::new(parts.to_string(), name),
                &numbers_as_text,
                |b, &mode| {
                    b.iter(|| {
                        let count = run_tokenizer(black_box(&number_payload), parts, mode);
                        black_box(count);
                    });
                },
            );
        }
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(5))
            .measurement_time(Duration::from_secs(10));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_tokenizer }
criterion_main!(benches);
