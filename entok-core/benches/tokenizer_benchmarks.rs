//! Performance benchmarks for the tokenizers
//!
//! Run with: cargo bench --bench tokenizer_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use entok_core::{EnglishTokenizer, SpaceTokenizer, Tokenizer};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "Dr. Smith can't find the U.S. e-mail (jinho@elit.cloud) for 10kg of $1,000.50 items :-) ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    // base sentence is ASCII, so any byte index is a char boundary
    text.truncate(size);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");

    let tokenizer = EnglishTokenizer::new().unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("english", size), &text, |b, text| {
            b.iter(|| {
                let _ = tokenizer.tokenize(black_box(text)).unwrap();
            });
        });
    }

    group.finish();
}

/// English cascade against the whitespace baseline
fn bench_tokenizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizers");

    let text = generate_text(10_240);
    let english = EnglishTokenizer::new().unwrap();
    let space = SpaceTokenizer::new();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_with_input(BenchmarkId::new("english", text.len()), &text, |b, text| {
        b.iter(|| {
            let _ = english.tokenize(black_box(text)).unwrap();
        });
    });
    group.bench_with_input(BenchmarkId::new("space", text.len()), &text, |b, text| {
        b.iter(|| {
            let _ = space.tokenize(black_box(text)).unwrap();
        });
    });

    group.finish();
}

/// Benchmark batch tokenization of many short lines
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    let tokenizer = EnglishTokenizer::new().unwrap();

    for lines in [16, 256, 4096] {
        let batch: Vec<String> = (0..lines).map(|_| generate_text(120)).collect();
        let bytes: usize = batch.iter().map(String::len).sum();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("lines", lines), &batch, |b, batch| {
            b.iter(|| {
                let _ = tokenizer.tokenize_batch(black_box(batch)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_tokenizers, bench_batch);
criterion_main!(benches);
