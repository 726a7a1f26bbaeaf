// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Point, Rect, Size, Vec2};
use understory_retractable::{BaseLayout, RetractableLayout, RetractableResolver, SnapRequest};

struct Rows {
    len: usize,
}

impl BaseLayout for Rows {
    fn default_content_size(&self) -> Size {
        Size::new(320.0, self.len as f64 * 44.0)
    }

    fn item_frame(&self, index: usize) -> Option<Rect> {
        let y = index as f64 * 44.0;
        (index < self.len).then(|| Rect::new(0.0, y, 320.0, y + 44.0))
    }

    fn viewport_size(&self) -> Size {
        Size::new(320.0, 480.0)
    }
}

/// Proposed offsets sweeping across and past the first item, with
/// alternating release velocities.
fn gestures(count: usize) -> Vec<(Point, Vec2)> {
    (0..count)
        .map(|i| {
            let y = (i % 64) as f64 * 1.5;
            let v = if i % 3 == 0 { -2.0 } else { 2.0 };
            (Point::new(0.0, y), Vec2::new(0.0, v))
        })
        .collect()
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("retractable/resolver");

    for len in [64usize, 1_024, 16_384] {
        let gestures = gestures(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("resolve", len), &gestures, |b, gestures| {
            let frame = Rect::new(0.0, 0.0, 320.0, 44.0);
            let inset = Insets::new(0.0, 4.0, 0.0, 4.0);
            b.iter(|| {
                let mut resolver = RetractableResolver::new();
                for &(proposed, velocity) in gestures {
                    let request = SnapRequest::new(proposed, velocity)
                        .with_first_item_frame(Some(frame))
                        .with_inset(inset);
                    black_box(resolver.resolve(&request, || proposed));
                }
            });
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("retractable/layout");

    for len in [64usize, 1_024, 16_384] {
        let gestures = gestures(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("target_content_offset", len),
            &gestures,
            |b, gestures| {
                b.iter(|| {
                    let mut layout = RetractableLayout::new(Rows { len: 100 });
                    for &(proposed, velocity) in gestures {
                        black_box(layout.target_content_offset(proposed, velocity));
                    }
                });
            },
        );
    }

    group.bench_function("content_size", |b| {
        let layout = RetractableLayout::new(Rows { len: 3 });
        b.iter(|| black_box(layout.content_size()));
    });

    group.finish();
}

criterion_group!(benches, bench_resolver, bench_layout);
criterion_main!(benches);
