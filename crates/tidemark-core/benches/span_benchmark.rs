// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tidemark_core::span::Span;

const PAIR_COUNT: usize = 1024;

/// Deterministic pseudo-random stream so runs are comparable.
fn next_value(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

fn span_pairs(count: usize) -> Vec<(Span<u64>, Span<u64>)> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..count)
        .map(|_| {
            let a_start = next_value(&mut state) % 10_000;
            let a_len = next_value(&mut state) % 500;
            let b_start = next_value(&mut state) % 10_000;
            let b_len = next_value(&mut state) % 500;
            (
                Span::new(a_start, a_start + a_len).unwrap(),
                Span::new(b_start, b_start + b_len).unwrap(),
            )
        })
        .collect()
}

fn bench_overlaps(c: &mut Criterion) {
    let pairs = span_pairs(PAIR_COUNT);
    let mut group = c.benchmark_group("span_overlaps");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function(BenchmarkId::from_parameter(pairs.len()), |b| {
        b.iter(|| {
            for (lhs, rhs) in &pairs {
                black_box(lhs.overlaps(rhs));
            }
        })
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let pairs = span_pairs(PAIR_COUNT);
    let mut group = c.benchmark_group("span_remove");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function(BenchmarkId::from_parameter(pairs.len()), |b| {
        b.iter(|| {
            for (lhs, rhs) in &pairs {
                black_box(lhs.remove(rhs));
            }
        })
    });
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let texts: Vec<String> = span_pairs(PAIR_COUNT)
        .into_iter()
        .map(|(lhs, _)| lhs.to_string())
        .collect();
    let mut group = c.benchmark_group("span_parse");
    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function(BenchmarkId::from_parameter(texts.len()), |b| {
        b.iter(|| {
            for text in &texts {
                black_box(text.parse::<Span<u64>>().unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_overlaps, bench_remove, bench_parse);
criterion_main!(benches);
