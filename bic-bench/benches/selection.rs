//! Best-in-class benchmark suite.
//!
//! Targets:
//!   select_200_items ........... < 20μs
//!   full_pass_200_items ........ < 30μs
//!   menu_pass_200_entries ...... < 40μs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bic_bench::{menu_inventory, record_inventory};
use bic_core::config::MarkerConfig;
use bic_core::{run_pass, select};

/// Benchmark: selection traversal only.
fn bench_select(c: &mut Criterion) {
    let items = record_inventory(200);
    c.bench_function("select_200_items", |b| {
        b.iter(|| black_box(select(black_box(&items))));
    });
}

/// Benchmark: select then mark over owned records.
fn bench_full_pass(c: &mut Criterion) {
    let config = MarkerConfig::default();
    c.bench_function("full_pass_200_items", |b| {
        b.iter_batched(
            || record_inventory(200),
            |mut items| black_box(run_pass(&mut items, &config)),
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: select then mark over host menu entries (includes form bridging).
fn bench_menu_pass(c: &mut Criterion) {
    let config = MarkerConfig::default();
    c.bench_function("menu_pass_200_entries", |b| {
        b.iter_batched(
            || menu_inventory(200),
            |mut items| black_box(run_pass(&mut items, &config)),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_select, bench_full_pass, bench_menu_pass);
criterion_main!(benches);
