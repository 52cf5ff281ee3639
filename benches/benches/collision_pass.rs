// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::convert::Infallible;
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use marquee_engine::{EngineOptions, Modifiers, PointerButton, SelectionEngine};
use marquee_items::{ItemCache, ItemProvider};

/// A grid of `len` fixed-size boxes laid out 64 per row.
struct Grid {
    boxes: Vec<Rect>,
    selected: Vec<bool>,
}

impl Grid {
    fn new(len: usize) -> Self {
        let boxes = (0..len)
            .map(|i| {
                let x = (i % 64) as f64 * 20.0;
                let y = (i / 64) as f64 * 20.0;
                Rect::new(x, y, x + 16.0, y + 16.0)
            })
            .collect();
        Self {
            boxes,
            selected: vec![false; len],
        }
    }
}

impl ItemProvider for Grid {
    type Handle = usize;
    type Error = Infallible;

    fn items(&self) -> Vec<usize> {
        (0..self.boxes.len()).collect()
    }

    fn measure(&self, handle: &usize) -> Result<Rect, Infallible> {
        Ok(self.boxes[*handle])
    }

    fn is_selected(&self, handle: &usize) -> bool {
        self.selected[*handle]
    }

    fn set_selected(&mut self, handle: &usize, selected: bool) {
        self.selected[*handle] = selected;
    }
}

fn bench_collision_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/collision_pass");

    // One pass visits every cached item, so throughput is per item. The band
    // sweeps roughly half the grid to exercise both branch directions.
    for len in [128usize, 512, 2_048, 8_192] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("move", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut grid = Grid::new(len);
                    let mut engine =
                        SelectionEngine::new(&grid, EngineOptions::default()).unwrap();
                    engine
                        .pointer_down(
                            &grid,
                            Point::new(0.0, 0.0),
                            PointerButton::Primary,
                            Modifiers::empty(),
                        )
                        .unwrap();
                    (engine, grid)
                },
                |(mut engine, mut grid)| {
                    let events = engine.pointer_move(&mut grid, Point::new(640.0, 640.0));
                    black_box(events);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_cache_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("items/rebuild");

    // Models the per-drag cost of `RefreshPolicy::EveryDrag`.
    for len in [128usize, 512, 2_048, 8_192] {
        let grid = Grid::new(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("rebuild", len), &grid, |b, grid| {
            b.iter_batched(
                ItemCache::<usize>::new,
                |mut cache| {
                    cache.rebuild(grid).unwrap();
                    black_box(cache);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_collision_pass, bench_cache_rebuild);
criterion_main!(benches);
