// crates/dropdowns-core/benches/benchmarks.rs

//! Builder and lookup throughput.
//!
//! Run with: cargo bench -p dropdowns-core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dropdowns_core::prelude::*;
use std::hint::black_box;

fn bench_build(c: &mut Criterion) {
    let d = dropdowns();
    let mut group = c.benchmark_group("build");

    group.bench_function("countries/continent+order", |b| {
        b.iter(|| {
            let list = d
                .countries()
                .builder()
                .in_continent(black_box(["Europe", "Asia"]))
                .exclude(["RU"])
                .order_by_name()
                .build();
            black_box(list.len())
        });
    });

    group.bench_function("time_zones/region+dst+offset", |b| {
        b.iter(|| {
            let list = d
                .time_zones()
                .builder()
                .in_region(["Americas"])
                .with_dst_only()
                .order_by_offset()
                .build();
            black_box(list.len())
        });
    });

    for size in [5usize, 50] {
        let codes: Vec<&str> = d.countries().all().iter().take(size).map(|c| c.alpha2).collect();
        group.bench_with_input(BenchmarkId::new("countries/only", size), &codes, |b, codes| {
            b.iter(|| black_box(d.countries().builder().only(codes).build().len()));
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let d = dropdowns();
    let mut group = c.benchmark_group("lookup");

    group.bench_function("countries/by_alpha2_code", |b| {
        b.iter(|| black_box(d.countries().by_alpha2_code(black_box(" zw "))));
    });
    group.bench_function("countries/search", |b| {
        b.iter(|| black_box(d.countries().search(black_box("island")).len()));
    });
    group.bench_function("registry/lookup", |b| {
        b.iter(|| black_box(d.lookup(DatasetKind::TimeZones, black_box("asia/tokyo"))));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
