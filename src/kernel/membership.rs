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

//! Point-in-area membership.
//!
//! [`ring_contains`] and [`polygon_contains`] are ray-crossing tests with
//! conventional (ambiguous) behavior for points exactly on the boundary.
//! Predicate code never relies on that behavior: the `*_interior` and
//! `*_boundary` wrappers below pin the boundary down explicitly.

use crate::geometry::{LineString, Point, Polygon, Ring};
use crate::kernel::orientation::points_equal;
use crate::kernel::segment::{point_on_segment, point_on_segment_interior};

/// Even-odd ray-crossing containment test for a ring. A horizontal ray
/// from `p` toward +x is tested against every edge, including the wrap
/// edge from the last vertex back to the first (a no-op when the ring is
/// closed, the missing closure otherwise). The half-open rule on each
/// edge's y-span counts a crossing through a vertex exactly once.
///
/// Points on the boundary may report either way; use
/// [`point_in_ring_interior`] or [`point_on_ring_boundary`] when the
/// distinction matters.
pub fn ring_contains(r: &Ring, p: Point) -> bool {
    let n = r.0.len();
    if n < 3 || !r.bound().contains(p) {
        return false;
    }

    let mut inside = false;
    for i in 0..n {
        let a = r.0[i];
        let b = r.0[(i + 1) % n];

        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (b.x - a.x) * (p.y - a.y) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}

/// Inside the exterior ring and outside every hole. Boundary behavior is
/// as ambiguous as [`ring_contains`].
pub fn polygon_contains(poly: &Polygon, p: Point) -> bool {
    let Some(exterior) = poly.exterior() else {
        return false;
    };
    if !ring_contains(exterior, p) {
        return false;
    }
    for hole in poly.holes() {
        if ring_contains(hole, p) {
            return false;
        }
    }
    true
}

/// Does `p` lie on any segment of the ring polyline?
pub fn point_on_ring_boundary(p: Point, r: &Ring) -> bool {
    if r.0.len() < 2 {
        return false;
    }
    r.segments().any(|(a, b)| point_on_segment(p, a, b))
}

/// Does `p` lie on the boundary of any ring of the polygon?
pub fn point_on_polygon_boundary(p: Point, poly: &Polygon) -> bool {
    poly.rings.iter().any(|r| point_on_ring_boundary(p, r))
}

/// Strictly inside the ring: contained and not on the boundary.
pub fn point_in_ring_interior(p: Point, r: &Ring) -> bool {
    !point_on_ring_boundary(p, r) && ring_contains(r, p)
}

/// Strictly inside the polygon: contained and not on any ring boundary.
pub fn point_in_polygon_interior(p: Point, poly: &Polygon) -> bool {
    !point_on_polygon_boundary(p, poly) && polygon_contains(poly, p)
}

/// Does `p` lie anywhere on the linestring (closure, endpoints included)?
pub fn point_intersects_line_string(p: Point, ls: &LineString) -> bool {
    match ls.0.len() {
        0 => false,
        1 => points_equal(p, ls.0[0]),
        _ => ls.segments().any(|(a, b)| point_on_segment(p, a, b)),
    }
}

/// Does `p` lie in the linestring's interior: strictly inside a segment,
/// or at an internal vertex (the two end vertices are boundary)?
pub fn point_in_line_string_interior(p: Point, ls: &LineString) -> bool {
    if ls.0.len() < 2 {
        return false;
    }

    if ls
        .segments()
        .any(|(a, b)| point_on_segment_interior(p, a, b))
    {
        return true;
    }

    ls.0[1..ls.0.len() - 1]
        .iter()
        .any(|&v| points_equal(p, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_ring() -> Ring {
        Ring(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ])
    }

    #[test]
    fn ring_contains_interior_and_exterior() {
        let r = unit_ring();
        assert!(ring_contains(&r, Point::new(5.0, 5.0)));
        assert!(!ring_contains(&r, Point::new(15.0, 5.0)));
        assert!(!ring_contains(&r, Point::new(-1.0, 5.0)));
    }

    #[test]
    fn ring_interior_excludes_boundary() {
        let r = unit_ring();
        assert!(point_in_ring_interior(Point::new(5.0, 5.0), &r));
        assert!(!point_in_ring_interior(Point::new(5.0, 0.0), &r));
        assert!(!point_in_ring_interior(Point::new(0.0, 0.0), &r));
    }

    #[test]
    fn polygon_hole_is_not_interior() {
        let hole = Ring(vec![
            Point::new(4.0, 4.0),
            Point::new(6.0, 4.0),
            Point::new(6.0, 6.0),
            Point::new(4.0, 6.0),
            Point::new(4.0, 4.0),
        ]);
        let poly = Polygon::with_holes(unit_ring(), [hole]);

        assert!(polygon_contains(&poly, Point::new(2.0, 2.0)));
        assert!(!polygon_contains(&poly, Point::new(5.0, 5.0)));
        assert!(point_in_polygon_interior(Point::new(2.0, 2.0), &poly));
        assert!(!point_in_polygon_interior(Point::new(5.0, 5.0), &poly));
        // On the hole boundary: not interior either way
        assert!(!point_in_polygon_interior(Point::new(4.0, 5.0), &poly));
    }

    #[test]
    fn unclosed_ring_is_treated_literally() {
        // Same square, closing vertex omitted
        let r = Ring(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert!(ring_contains(&r, Point::new(5.0, 5.0)));
        assert!(!ring_contains(&r, Point::new(15.0, 5.0)));
    }

    #[test]
    fn line_string_interior_vs_endpoints() {
        let ls = LineString(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ]);
        assert!(point_intersects_line_string(Point::new(0.0, 0.0), &ls));
        assert!(point_intersects_line_string(Point::new(2.5, 0.0), &ls));
        assert!(!point_intersects_line_string(Point::new(2.5, 1.0), &ls));

        assert!(point_in_line_string_interior(Point::new(2.5, 0.0), &ls));
        assert!(point_in_line_string_interior(Point::new(5.0, 0.0), &ls)); // internal vertex
        assert!(!point_in_line_string_interior(Point::new(0.0, 0.0), &ls));
        assert!(!point_in_line_string_interior(Point::new(10.0, 0.0), &ls));
    }
}
