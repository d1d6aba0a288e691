// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_footnote::adapters::surface::SurfacePresentation;
use understory_footnote::coordinator::{Adapter, Coordinator};
use understory_footnote::footnote::Footnote;
use understory_footnote::settings::Settings;

type Notes = Coordinator<u32, SurfacePresentation>;

fn mount(n: u32, allow_multiple: bool) -> Notes {
    let adapter: Adapter<u32, _> = (0..n)
        .map(|id| Footnote::new(id, SurfacePresentation::new(2 * id, 2 * id + 1)))
        .collect();
    Coordinator::new(
        adapter,
        Settings::default().with_allow_multiple(allow_multiple),
    )
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u32(&mut self, below: u32) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x % u64::from(below)) as u32
    }
}

fn bench_single_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_open");
    for &n in &[16_u32, 256, 4096] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("activate_each_settle_n{}", n), |b| {
            b.iter_batched(
                || mount(n, false),
                |mut notes| {
                    for id in 0..n {
                        notes.activate(&id);
                        notes.run_settles();
                    }
                    black_box(notes.is_active(&(n - 1)));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_toggle_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_storm");
    for &n in &[16_u32, 256, 4096] {
        let mut rng = Rng::new(0xF00D_CAFE_1234_5678);
        let presses: Vec<u32> = (0..1024).map(|_| rng.next_u32(n)).collect();
        group.throughput(Throughput::Elements(presses.len() as u64));
        group.bench_function(format!("toggle_random_n{}", n), |b| {
            b.iter_batched(
                || mount(n, true),
                |mut notes| {
                    for (i, id) in presses.iter().enumerate() {
                        notes.toggle(id);
                        // Settle every few presses so some requests hit the guard.
                        if i % 4 == 3 {
                            notes.run_settles();
                        }
                    }
                    black_box(notes.pending_settles());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");
    for &n in &[256_u32, 4096] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("dismiss_all_half_open_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut notes = mount(n, true);
                    for id in (0..n).step_by(2) {
                        notes.activate(&id);
                    }
                    notes.run_settles();
                    notes
                },
                |mut notes| {
                    notes.dismiss_all();
                    black_box(notes.run_settles());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("resize_all_half_open_n{}", n), |b| {
            let mut notes = mount(n, true);
            for id in (0..n).step_by(2) {
                notes.activate(&id);
            }
            notes.run_settles();
            b.iter(|| notes.resize_all());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_open,
    bench_toggle_storm,
    bench_broadcast
);
criterion_main!(benches);
