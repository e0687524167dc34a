// Copyright 2025 the Hueplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hueplane_color::{ColorFormat, Hsl, bounce, format_color};

fn bench_bounce(c: &mut Criterion) {
    c.bench_function("bounce_fold_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for v in -5_000..5_000 {
                acc += bounce(black_box(f64::from(v) * 3.7), black_box(100.0));
            }
            acc
        });
    });

    c.bench_function("hsl_to_rgb_grid", |b| {
        b.iter(|| {
            let mut acc = 0_u32;
            for s in 0..=20 {
                for l in 0..=20 {
                    let rgb = Hsl::new(210.0, f64::from(s) * 5.0, f64::from(l) * 5.0).to_rgb();
                    acc += u32::from(rgb.r) + u32::from(rgb.g) + u32::from(rgb.b);
                }
            }
            black_box(acc)
        });
    });

    c.bench_function("format_color_hsl", |b| {
        let color = Hsl::new(210.0, 33.333, 50.0);
        b.iter(|| format_color(black_box(color), ColorFormat::Hsl));
    });
}

criterion_group!(benches, bench_bounce);
criterion_main!(benches);
