//! Benchmarks for the colour pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swatch::parser::{scan, stylesheet_links};
use swatch::types::{PaletteBuilder, RgbPadding};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A large stylesheet built by repeating the fixture sheets.
fn large_sheet() -> String {
    let site = load_fixture("page/css/site.css");
    let theme = load_fixture("page/css/theme.css");
    let mut sheet = String::new();
    for i in 0..500 {
        sheet.push_str(&site);
        sheet.push_str(&format!(".gen-{} {{ color: #{:06x}; }}\n", i, i * 2711));
        sheet.push_str(&theme);
    }
    sheet
}

// -- Scanning benchmarks --

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");

    let small = load_fixture("page/css/site.css");
    let large = large_sheet();

    group.bench_function("scan_small", |b| {
        b.iter(|| scan(black_box(&small)).into_iter().count())
    });

    group.bench_function("scan_large", |b| {
        b.iter(|| scan(black_box(&large)).into_iter().count())
    });

    group.finish();
}

// -- Aggregation benchmarks --

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    let large = large_sheet();

    group.bench_function("record_and_finalize", |b| {
        b.iter(|| {
            let mut builder = PaletteBuilder::new();
            builder.record_text(black_box(&large), RgbPadding::Padded);
            builder.finalize()
        })
    });

    group.finish();
}

// -- Link discovery benchmarks --

fn bench_links(c: &mut Criterion) {
    let html = load_fixture("page/index.html");

    c.bench_function("stylesheet_links", |b| {
        b.iter(|| stylesheet_links(black_box(&html)))
    });
}

criterion_group!(benches, bench_scanning, bench_aggregation, bench_links);
criterion_main!(benches);
