use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use travelreco_core::prelude::*;

fn bench_search(c: &mut Criterion) {
    let catalog = Catalog::bundled().expect("bundled catalog");

    c.bench_function("classify", |b| {
        b.iter(|| Intent::classify(black_box("Beaches")))
    });

    c.bench_function("search_category_beach", |b| {
        b.iter(|| catalog.search(black_box("beach")))
    });

    c.bench_function("search_text_country", |b| {
        b.iter(|| catalog.search(black_box("brazil")))
    });

    c.bench_function("search_empty_keyword", |b| {
        b.iter(|| catalog.search(black_box("")))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
