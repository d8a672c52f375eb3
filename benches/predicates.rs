// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Criterion benchmarks over polygon sizes that matter in practice:
//! circular polygons with 10 to 1000 vertices, long linestrings, and a
//! worst-case pair with touching bounding boxes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar_relate::{
    contains, disjoint, intersects, overlaps, touches, within, Geometry, LineString, Point,
    Polygon, Ring,
};

/// Polygon approximating a circle with `n` vertices.
fn circular_polygon(center_x: f64, center_y: f64, radius: f64, n: usize) -> Geometry {
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
        points.push(Point::new(
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
        ));
    }
    points.push(points[0]);
    Geometry::from(Polygon::new(Ring(points)))
}

fn line_string(start: (f64, f64), end: (f64, f64), n: usize) -> Geometry {
    let points = (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            Point::new(
                start.0 + t * (end.0 - start.0),
                start.1 + t * (end.1 - start.1),
            )
        })
        .collect();
    Geometry::from(LineString(points))
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_polygon");
    for &n in &[10usize, 100, 1000] {
        let poly = circular_polygon(0.0, 0.0, 10.0, n);
        let inside = Geometry::from(Point::new(1.0, 1.0));
        let outside = Geometry::from(Point::new(50.0, 50.0));

        group.bench_with_input(BenchmarkId::new("within_inside", n), &n, |b, _| {
            b.iter(|| within(&inside, &poly))
        });
        group.bench_with_input(BenchmarkId::new("within_outside", n), &n, |b, _| {
            b.iter(|| within(&outside, &poly))
        });
    }
    group.finish();
}

fn bench_polygon_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_polygon");
    for &n in &[10usize, 100, 1000] {
        let a = circular_polygon(0.0, 0.0, 10.0, n);
        let overlapping = circular_polygon(5.0, 5.0, 10.0, n);
        let nested = circular_polygon(0.0, 0.0, 5.0, n);
        let far = circular_polygon(100.0, 100.0, 10.0, n);

        group.bench_with_input(BenchmarkId::new("intersects_overlapping", n), &n, |b, _| {
            b.iter(|| intersects(&a, &overlapping))
        });
        group.bench_with_input(BenchmarkId::new("overlaps_overlapping", n), &n, |b, _| {
            b.iter(|| overlaps(&a, &overlapping))
        });
        group.bench_with_input(BenchmarkId::new("contains_nested", n), &n, |b, _| {
            b.iter(|| contains(&a, &nested))
        });
        group.bench_with_input(BenchmarkId::new("touches_overlapping", n), &n, |b, _| {
            b.iter(|| touches(&a, &overlapping))
        });
        // Bounding-box rejection path
        group.bench_with_input(BenchmarkId::new("disjoint_far", n), &n, |b, _| {
            b.iter(|| disjoint(&a, &far))
        });
    }
    group.finish();
}

fn bench_line_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_polygon");
    for &n in &[10usize, 100, 1000] {
        let poly = circular_polygon(0.0, 0.0, 10.0, n);
        let crossing = line_string((-20.0, 0.0), (20.0, 0.0), n.max(2));
        let inside = line_string((-5.0, 0.0), (5.0, 0.0), n.max(2));

        group.bench_with_input(BenchmarkId::new("intersects_crossing", n), &n, |b, _| {
            b.iter(|| intersects(&crossing, &poly))
        });
        group.bench_with_input(BenchmarkId::new("within_inside", n), &n, |b, _| {
            b.iter(|| within(&inside, &poly))
        });
    }
    group.finish();
}

fn bench_bbox_rejection(c: &mut Criterion) {
    // Touching bounding boxes defeat the fast-reject and force the full
    // O(n*m) walk.
    let a = circular_polygon(0.0, 0.0, 10.0, 1000);
    let adjacent = circular_polygon(20.0, 0.0, 10.0, 1000);

    c.bench_function("touching_bounds_full_walk", |b| {
        b.iter(|| intersects(&a, &adjacent))
    });
}

criterion_group!(
    benches,
    bench_point_in_polygon,
    bench_polygon_polygon,
    bench_line_polygon,
    bench_bbox_rejection
);
criterion_main!(benches);
