// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the per-update pipeline: lens model, rays, scene, SVG.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use thinlens_optics::{build_rays, compute_image};
use thinlens_scene::SceneParams;
use thinlens_svg::{RayStyle, SvgOptions, render_svg};

/// A slider sweep: the object walks from the lens out past the radius point.
fn sweep() -> Vec<SceneParams> {
    (1..=40)
        .map(|i| SceneParams {
            object_distance: f64::from(i) * 10.0,
            focal_length: 125.0,
            ..SceneParams::default()
        })
        .collect()
}

fn bench_model(c: &mut Criterion) {
    let params = sweep();
    c.bench_function("optics/compute_image+build_rays", |b| {
        b.iter(|| {
            for p in &params {
                if let Ok(image) = compute_image(p.object_distance, p.object_size, p.focal_length)
                {
                    black_box(build_rays(p.object_distance, p.object_size, &image));
                }
            }
        });
    });
}

fn bench_compose(c: &mut Criterion) {
    let params = sweep();
    c.bench_function("scene/compose_sweep", |b| {
        b.iter(|| {
            for p in &params {
                black_box(black_box(p).compose().ok());
            }
        });
    });
}

fn bench_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg/render");
    let scene = SceneParams {
        object_distance: 250.0,
        focal_length: 125.0,
        ..SceneParams::default()
    }
    .compose()
    .expect("benchmark parameters are valid");

    for (name, style) in [
        ("solid", RayStyle::Solid),
        ("sampled", RayStyle::Sampled),
        ("both", RayStyle::Both),
    ] {
        let options = SvgOptions {
            ray_style: style,
            ..SvgOptions::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &options, |b, options| {
            b.iter(|| black_box(render_svg(black_box(&scene), options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_model, bench_compose, bench_svg);
criterion_main!(benches);
