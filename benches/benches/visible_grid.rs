// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};

use hueplane_grid::GridSheet;
use hueplane_view::Viewport;
use hueplane_virtual_grid::{CellMetrics, visible_cells};

fn bench_visible_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_cells");
    for (w, h) in [(800.0, 600.0), (1920.0, 1080.0), (3840.0, 2160.0)] {
        let mut viewport = Viewport::new(Rect::new(0.0, 0.0, w, h));
        viewport.set_scale(0.8);
        viewport.pan_by(Vec2::new(-12_345.0, 6_789.0));
        let metrics = CellMetrics::default();
        let sheet = GridSheet::default();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{w}x{h}")),
            &viewport,
            |b, viewport| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for slot in visible_cells(black_box(viewport), &metrics, &sheet, 210.0) {
                        acc += slot.color.l + slot.world_rect.x0;
                    }
                    acc
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_visible_grid);
criterion_main!(benches);
