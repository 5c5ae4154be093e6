// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_page_control::{Dot, ManualTickSource, PageControl};

fn control(len: usize) -> PageControl {
    let mut control = PageControl::new();
    control.set_dots(vec![Dot::default(); len]);
    control
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_control/frame");

    // A frame re-resolves styles and re-lays out every dot, so both scale with the dot count.
    for len in [8usize, 64, 512] {
        let mut control = control(len);
        control.set_active_index(len as f32 / 2.0 + 0.5);
        let bounds: Size = control.intrinsic_size();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("resolved_styles", len), &len, |b, _| {
            b.iter(|| black_box(control.resolved_styles()));
        });

        group.bench_with_input(BenchmarkId::new("layout", len), &len, |b, _| {
            b.iter(|| black_box(control.layout(black_box(bounds))));
        });

        group.bench_with_input(BenchmarkId::new("intrinsic_size", len), &len, |b, _| {
            b.iter(|| black_box(control.intrinsic_size()));
        });
    }

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_control/animation");

    group.bench_function("tick", |b| {
        let mut source = ManualTickSource::new();
        let mut control = control(16);
        let mut now = 0.0;
        b.iter(|| {
            if control.animation_token().is_none() {
                let target = if control.active_index() < 1.0 { 15.0 } else { 0.0 };
                control.set_active_index_animated(target, &mut source);
            }
            if let Some(token) = control.animation_token() {
                black_box(control.tick(&mut source, token, now));
            }
            now += 1.0 / 120.0;
        });
    });

    group.bench_function("retarget", |b| {
        let mut source = ManualTickSource::new();
        let mut control = control(16);
        let mut target = 0.0;
        b.iter(|| {
            target = if target == 0.0 { 15.0 } else { 0.0 };
            control.set_active_index_animated(black_box(target), &mut source);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_frame, bench_animation);
criterion_main!(benches);
