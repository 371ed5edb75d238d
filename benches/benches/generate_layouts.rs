// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use trellis_layout::{LayoutGenerator, Spacing};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_sizes(count: usize, seed: u64) -> Vec<Size> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let w = 200.0 + rng.next_f64() * 800.0;
            let h = 200.0 + rng.next_f64() * 800.0;
            Size::new(w, h)
        })
        .collect()
}

fn bench_generate_unbounded(c: &mut Criterion) {
    let container = Size::new(1280.0, 720.0);
    let generator = LayoutGenerator::new(Spacing::uniform(8.0), None);
    let mut group = c.benchmark_group("generate_unbounded");
    for n in [3usize, 4, 5, 6] {
        let images = gen_sizes(n, 0x5eed + n as u64);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| black_box(generator.generate(&images, container, None).unwrap()));
        });
    }
    group.finish();
}

fn bench_generate_top_k(c: &mut Criterion) {
    let container = Size::new(1280.0, 720.0);
    let generator = LayoutGenerator::new(Spacing::uniform(8.0), Some(1));
    let mut group = c.benchmark_group("generate_top5_l1");
    for n in [8usize, 10, 12] {
        let images = gen_sizes(n, 0x5eed + n as u64);
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| black_box(generator.generate(&images, container, Some(5)).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_unbounded, bench_generate_top_k);
criterion_main!(benches);
