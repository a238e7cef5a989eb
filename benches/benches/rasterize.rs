// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Line;
use thinlens_dda::{rasterize, rasterize_line, sample_count};

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dda/rasterize");

    // Diagonal segments of growing length; the sample count is the major span.
    for span in [16.0_f64, 256.0, 1_000.0, 4_096.0] {
        let points = sample_count(span, span * 0.5);
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::new("collect", span), &span, |b, &span| {
            b.iter(|| {
                let pts: Vec<_> = rasterize(
                    black_box(-span / 2.0),
                    black_box(0.0),
                    black_box(span / 2.0),
                    black_box(span * 0.5),
                )
                .collect();
                black_box(pts);
            });
        });
        group.bench_with_input(BenchmarkId::new("fold", span), &span, |b, &span| {
            let line = Line::new((-span / 2.0, 0.0), (span / 2.0, span * 0.5));
            b.iter(|| {
                let sum = rasterize_line(black_box(line)).fold(0.0, |acc, p| acc + p.y);
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rasterize);
criterion_main!(benches);
