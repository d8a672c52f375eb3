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

use approx::assert_relative_eq;
use planar_relate::geometry::{Bound, LineString, Point, Polygon, Ring};
use planar_relate::kernel::{
    collinear_overlap_midpoint, cross2d, point_in_line_string_interior,
    point_in_polygon_interior, point_on_segment, point_on_segment_interior, points_equal,
    polygon_contains, ring_contains, segments_are_collinear, segments_cross_proper,
    segments_intersect, segments_overlap_interior, sign,
};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square(x0: f64, y0: f64, size: f64) -> Ring {
    Ring(vec![
        pt(x0, y0),
        pt(x0 + size, y0),
        pt(x0 + size, y0 + size),
        pt(x0, y0 + size),
        pt(x0, y0),
    ])
}

#[test]
fn test_sign_tolerance() {
    assert_eq!(sign(0.0), 0);
    assert_eq!(sign(5e-11), 0);
    assert_eq!(sign(-5e-11), 0);
    assert_eq!(sign(2e-10), 1);
    assert_eq!(sign(-2e-10), -1);
}

#[test]
fn test_points_equal_within_epsilon() {
    assert!(points_equal(pt(1.00000000001, 2.0), pt(1.00000000002, 2.0)));
    assert!(!points_equal(pt(1.0, 2.0), pt(1.0001, 2.0)));
}

#[test]
fn test_cross2d_sign_matches_turn_direction() {
    let a = pt(0.0, 0.0);
    let b = pt(4.0, 0.0);
    assert!(cross2d(a, b, pt(2.0, 1.0)) > 0.0);
    assert!(cross2d(a, b, pt(2.0, -1.0)) < 0.0);
    assert_relative_eq!(cross2d(a, b, pt(2.0, 0.0)), 0.0);
}

#[test]
fn test_point_on_segment_variants() {
    let a = pt(0.0, 0.0);
    let b = pt(10.0, 10.0);

    assert!(point_on_segment(pt(5.0, 5.0), a, b));
    assert!(point_on_segment(a, a, b));
    assert!(point_on_segment(b, a, b));
    assert!(!point_on_segment(pt(5.0, 5.1), a, b));
    assert!(!point_on_segment(pt(11.0, 11.0), a, b));

    assert!(point_on_segment_interior(pt(5.0, 5.0), a, b));
    assert!(!point_on_segment_interior(a, a, b));
    assert!(!point_on_segment_interior(b, a, b));
}

#[test]
fn test_segments_intersect_cases() {
    // Proper crossing
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(10.0, 10.0),
        pt(0.0, 10.0),
        pt(10.0, 0.0)
    ));
    // T-junction
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(5.0, 0.0),
        pt(5.0, 5.0)
    ));
    // Shared endpoint
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(5.0, 5.0),
        pt(5.0, 5.0),
        pt(10.0, 0.0)
    ));
    // Disjoint parallels
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(0.0, 1.0),
        pt(10.0, 1.0)
    ));
}

#[test]
fn test_proper_crossing_excludes_contact() {
    // Crossing
    assert!(segments_cross_proper(
        pt(0.0, 5.0),
        pt(10.0, 5.0),
        pt(5.0, 0.0),
        pt(5.0, 10.0)
    ));
    // T-junction is not proper
    assert!(!segments_cross_proper(
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(5.0, 0.0),
        pt(5.0, 5.0)
    ));
    // Collinear overlap is not proper
    assert!(!segments_cross_proper(
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(5.0, 0.0),
        pt(15.0, 0.0)
    ));
}

#[test]
fn test_collinear_overlap_detection() {
    let a = pt(0.0, 0.0);
    let b = pt(10.0, 0.0);

    assert!(segments_are_collinear(a, b, pt(3.0, 0.0), pt(20.0, 0.0)));
    assert!(!segments_are_collinear(a, b, pt(3.0, 1.0), pt(20.0, 1.0)));

    assert!(segments_overlap_interior(a, b, pt(3.0, 0.0), pt(20.0, 0.0)));
    // Endpoint touch only
    assert!(!segments_overlap_interior(a, b, pt(10.0, 0.0), pt(20.0, 0.0)));

    // Vertical pair projects onto y
    assert!(segments_overlap_interior(
        pt(0.0, 0.0),
        pt(0.0, 10.0),
        pt(0.0, 5.0),
        pt(0.0, 15.0)
    ));

    let mid = collinear_overlap_midpoint(a, b, pt(4.0, 0.0), pt(20.0, 0.0));
    assert_relative_eq!(mid.x, 7.0);
    assert_relative_eq!(mid.y, 0.0);
}

#[test]
fn test_ring_contains_convex_and_concave() {
    let r = square(0.0, 0.0, 10.0);
    assert!(ring_contains(&r, pt(5.0, 5.0)));
    assert!(ring_contains(&r, pt(0.1, 9.9)));
    assert!(!ring_contains(&r, pt(-0.1, 5.0)));
    assert!(!ring_contains(&r, pt(10.1, 5.0)));

    // L-shaped ring: the notch is outside
    let l_shape = Ring(vec![
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(10.0, 4.0),
        pt(4.0, 4.0),
        pt(4.0, 10.0),
        pt(0.0, 10.0),
        pt(0.0, 0.0),
    ]);
    assert!(ring_contains(&l_shape, pt(2.0, 8.0)));
    assert!(ring_contains(&l_shape, pt(8.0, 2.0)));
    assert!(!ring_contains(&l_shape, pt(8.0, 8.0)));
}

#[test]
fn test_polygon_contains_respects_holes() {
    let poly = Polygon::with_holes(square(0.0, 0.0, 10.0), [square(4.0, 4.0, 2.0)]);

    assert!(polygon_contains(&poly, pt(1.0, 1.0)));
    assert!(!polygon_contains(&poly, pt(5.0, 5.0)));
    assert!(!polygon_contains(&poly, pt(11.0, 5.0)));

    assert!(point_in_polygon_interior(pt(1.0, 1.0), &poly));
    assert!(!point_in_polygon_interior(pt(5.0, 5.0), &poly));
    assert!(!point_in_polygon_interior(pt(0.0, 5.0), &poly));
    assert!(!point_in_polygon_interior(pt(4.0, 5.0), &poly)); // hole edge
}

#[test]
fn test_line_string_interior_membership() {
    let ls = LineString(vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)]);

    assert!(point_in_line_string_interior(pt(5.0, 0.0), &ls));
    assert!(point_in_line_string_interior(pt(10.0, 0.0), &ls)); // bend vertex
    assert!(point_in_line_string_interior(pt(10.0, 5.0), &ls));
    assert!(!point_in_line_string_interior(pt(0.0, 0.0), &ls)); // start
    assert!(!point_in_line_string_interior(pt(10.0, 10.0), &ls)); // end
    assert!(!point_in_line_string_interior(pt(5.0, 1.0), &ls));
}

#[test]
fn test_bound_membership() {
    let b = Bound::new(pt(0.0, 0.0), pt(10.0, 10.0));

    assert!(b.contains_point(pt(5.0, 5.0)));
    assert!(b.contains_point(pt(0.0, 0.0)));
    assert!(b.contains_point(pt(10.0, 10.0)));
    assert!(!b.contains_point(pt(10.1, 5.0)));

    assert!(b.contains_point_interior(pt(5.0, 5.0)));
    assert!(!b.contains_point_interior(pt(0.0, 5.0)));
    assert!(!b.contains_point_interior(pt(10.0, 10.0)));

    assert!(b.point_on_boundary(pt(0.0, 5.0)));
    assert!(b.point_on_boundary(pt(10.0, 10.0)));
    assert!(!b.point_on_boundary(pt(5.0, 5.0)));
    assert!(!b.point_on_boundary(pt(11.0, 5.0)));
}

#[test]
fn test_bound_overlap_and_union() {
    let a = Bound::new(pt(0.0, 0.0), pt(10.0, 10.0));
    let b = Bound::new(pt(5.0, 5.0), pt(15.0, 15.0));
    let c = Bound::new(pt(20.0, 20.0), pt(30.0, 30.0));

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
    // Edge contact still overlaps (closed test)
    assert!(a.overlaps(&Bound::new(pt(10.0, 0.0), pt(20.0, 10.0))));

    let u = a.union(&c);
    assert_relative_eq!(u.min.x, 0.0);
    assert_relative_eq!(u.max.x, 30.0);
    assert_eq!(a.center(), pt(5.0, 5.0));

    assert!(Bound::EMPTY.is_empty());
    assert_eq!(Bound::EMPTY.union(&a), a);
}

#[test]
fn test_bound_to_polygon_round_trip() {
    let b = Bound::new(pt(1.0, 2.0), pt(3.0, 4.0));
    let poly = b.to_polygon();
    let exterior = poly.exterior().unwrap();

    assert_eq!(exterior.0.len(), 5);
    assert_eq!(exterior.0[0], exterior.0[4]);
    assert_eq!(poly.bound(), b);
}
