// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iced_folio::manifest::{self, loader};
use std::hint::black_box;

/// Builds a manifest of `lines` entries mixing every accepted and rejected
/// line shape.
fn synthetic_manifest(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 6 {
            0 => format!("# section {i}"),
            1 => String::new(),
            2 => format!("https://cdn.example.com/{i}.jpg | Frame {i} | kept pipe"),
            3 => format!("[https://cdn.example.com/{i}.jpg]"),
            4 => format!("ftp://cdn.example.com/{i}.jpg | rejected"),
            _ => format!("  https://cdn.example.com/{i}.jpg  |   Frame {i}   \r"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parsing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_parsing");

    for lines in [12, 500, 10_000] {
        let text = synthetic_manifest(lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", lines), &text, |b, text| {
            b.iter(|| black_box(manifest::parse(black_box(text))));
        });
    }

    group.finish();
}

fn decision_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_decision");
    let text = synthetic_manifest(500);

    group.bench_function("live", |b| {
        b.iter(|| black_box(loader::decide(Ok(black_box(text.clone())))));
    });
    group.bench_function("fallback", |b| {
        b.iter(|| loader::settle(black_box(Err(manifest_error()))));
    });

    group.finish();
}

fn manifest_error() -> iced_folio::error::ManifestError {
    iced_folio::error::ManifestError::Empty
}

criterion_group!(benches, parsing_benchmark, decision_benchmark);
criterion_main!(benches);
