// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trellis_partition::cache::PartitionCache;
use trellis_partition::enumerate;

fn bench_unbounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_unbounded");
    for n in [4usize, 5, 6] {
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| black_box(enumerate(black_box(n), None)));
        });
    }
    group.finish();
}

fn bench_capped(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_capped");
    for (n, l) in [(8usize, 1u32), (8, 2), (10, 1), (12, 1)] {
        group.bench_function(format!("n{n}_l{l}"), |b| {
            b.iter(|| black_box(enumerate(black_box(n), Some(l))));
        });
    }
    group.finish();
}

fn bench_cached_lookup(c: &mut Criterion) {
    let cache = PartitionCache::new();
    let _ = cache.partitions(6, None);
    c.bench_function("cached_lookup_n6", |b| {
        b.iter(|| black_box(cache.partitions(6, None)));
    });
}

criterion_group!(benches, bench_unbounded, bench_capped, bench_cached_lookup);
criterion_main!(benches);
