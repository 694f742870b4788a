// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{Edge, PlacementConfig, available_edges, place};

const SCREEN: Size = Size::new(1170.0, 2532.0);

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

fn gen_targets(count: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = 20.0 + rng.next_f64() * 200.0;
        let h = 20.0 + rng.next_f64() * 80.0;
        let x = rng.next_f64() * (SCREEN.width - w);
        let y = rng.next_f64() * (SCREEN.height - h);
        out.push(Rect::from_origin_size((x, y), (w, h)));
    }
    out
}

// Targets hugging the screen corners exercise the clamping paths.
fn gen_corner_targets(count: usize) -> Vec<Rect> {
    let corners = [
        (0.0, 0.0),
        (SCREEN.width - 44.0, 0.0),
        (0.0, SCREEN.height - 44.0),
        (SCREEN.width - 44.0, SCREEN.height - 44.0),
    ];
    (0..count)
        .map(|i| Rect::from_origin_size(corners[i % corners.len()], (44.0, 44.0)))
        .collect()
}

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("place");
    let content = Size::new(320.0, 120.0);
    for (name, targets) in [
        ("random", gen_targets(1024, 0x9E37_79B9_7F4A_7C15)),
        ("corners", gen_corner_targets(1024)),
    ] {
        group.throughput(Throughput::Elements(targets.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for &t in &targets {
                    black_box(place(t, SCREEN, content, 10.0, None));
                }
            });
        });
    }
    group.finish();
}

fn bench_config_and_forced(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_config");
    let targets = gen_targets(1024, 7);
    let content = Size::new(320.0, 120.0);
    let priority = [Edge::Trailing, Edge::Leading, Edge::Bottom, Edge::Top];
    let config = PlacementConfig::default().with_priority(priority);
    group.throughput(Throughput::Elements(targets.len() as u64));
    group.bench_function("custom_priority", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(config.place(t, SCREEN, content, None));
            }
        });
    });
    group.bench_function("forced_leading", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(config.place(t, SCREEN, content, Some(Edge::Leading)));
            }
        });
    });
    group.bench_function("available_edges", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(available_edges(t, SCREEN, content, 10.0));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_place, bench_config_and_forced);
criterion_main!(benches);
