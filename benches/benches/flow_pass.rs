// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

use chipflow_layout::{FlowOptions, compute_positions, remaining_field_width, solve};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn width(&mut self) -> f64 {
        20.0 + (self.next() % 120) as f64
    }
}

fn gen_chip_sizes(n: usize) -> Vec<Size> {
    let mut rng = Rng::new(0xC0FFEE);
    (0..n).map(|_| Size::new(rng.width(), 24.0)).collect()
}

fn bench_flow_pass(c: &mut Criterion) {
    let opts = FlowOptions::default();
    let mut group = c.benchmark_group("flow_pass");
    for &n in &[16_usize, 256, 4096] {
        let sizes = gen_chip_sizes(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("positions/{n}"), |b| {
            b.iter(|| compute_positions(black_box(&sizes), black_box(640.0), &opts));
        });
        group.bench_function(format!("solve/{n}"), |b| {
            b.iter(|| solve(black_box(&sizes), 24.0, black_box(640.0), &opts));
        });
        group.bench_function(format!("field_width/{n}"), |b| {
            b.iter(|| remaining_field_width(black_box(&sizes), black_box(640.0), &opts));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow_pass);
criterion_main!(benches);
