// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

use hueplane_gesture::{Engine, PointerButton, PointerId};

/// Scripted two-finger spread/contract cycle through the full engine,
/// including the saturated phase that modulates density.
fn bench_pinch_sequence(c: &mut Criterion) {
    c.bench_function("engine_pinch_cycle", |b| {
        b.iter(|| {
            let mut engine = Engine::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
            engine.set_hue(210.0);

            let mut now = 0_u64;
            engine.on_pointer_down(
                PointerId(1),
                PointerButton::Primary,
                Point::new(540.0, 360.0),
                now,
            );
            engine.on_pointer_down(
                PointerId(2),
                PointerButton::Primary,
                Point::new(740.0, 360.0),
                now,
            );
            for step in 1..=60 {
                now += 8;
                let x = 740.0 + f64::from(step) * 4.0;
                engine.on_pointer_move(PointerId(2), Point::new(x, 360.0), now);
            }
            for step in 1..=120 {
                now += 8;
                let x = 980.0 - f64::from(step) * 4.0;
                engine.on_pointer_move(PointerId(2), Point::new(x, 360.0), now);
            }
            engine.on_pointer_up(PointerId(2), Point::new(500.0, 360.0), now + 8);
            engine.on_pointer_up(PointerId(1), Point::new(540.0, 360.0), now + 16);

            black_box(engine.debug_info())
        });
    });
}

criterion_group!(benches, bench_pinch_sequence);
criterion_main!(benches);
