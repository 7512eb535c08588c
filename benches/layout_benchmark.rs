/*
 * Springy Grid Benchmark
 *
 * Measures the per-event work of the layout engine on the default 10000
 * item grid: resyncing the attachments while scrolling, and propagating a
 * scroll delta to every attached item.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use springy_grid::visibility::viewport_rect;
use springy_grid::{GridLayout, ParamsHandle, SpringLayoutEngine, SpringParams};

// Resync while the viewport walks down the grid in steps of `step` points
fn bench_resync(c: &mut Criterion) {
    let mut group = c.benchmark_group("resync");
    let grid = GridLayout::default();

    for step in [5.0f32, 50.0, 500.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(step), step, |b, &step| {
            let mut engine = SpringLayoutEngine::new(ParamsHandle::new(SpringParams::default()));
            let mut offset = 0.0;

            b.iter(|| {
                offset = (offset + step) % 100_000.0;
                let viewport = viewport_rect(vec2(0.0, offset), vec2(375.0, 667.0));
                black_box(engine.resync_grid(viewport, &grid));
            });
        });
    }

    group.finish();
}

// Apply random scroll deltas to a fully attached viewport
fn bench_scroll_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_delta");
    let grid = GridLayout::default();

    for height in [667.0f32, 1366.0, 4000.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(height), height, |b, &height| {
            let mut engine = SpringLayoutEngine::new(ParamsHandle::new(SpringParams::default()));
            engine.resync_grid(viewport_rect(vec2(0.0, 0.0), vec2(375.0, height)), &grid);
            let mut rng = StdRng::seed_from_u64(99);

            b.iter(|| {
                let delta: f32 = rng.gen_range(-60.0..60.0);
                let touch = vec2(rng.gen_range(1.0..375.0), rng.gen_range(1.0..height));
                engine.on_scroll_delta(black_box(delta), touch);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resync, bench_scroll_delta);
criterion_main!(benches);
