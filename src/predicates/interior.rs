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

//! The interior-intersection kernel.
//!
//! [`interiors_intersect`] decides whether the topological interiors of
//! two geometries share any point. It is the discriminating half of
//! `touches` (which is intersection without interior contact) and the
//! reason boundary-only coincidences never count as overlap.

use crate::geometry::{Bound, Geometry, LineString, Point, Polygon, Ring};
use crate::kernel::{
    collinear_overlap_midpoint, midpoint, point_in_line_string_interior,
    point_in_polygon_interior, point_in_ring_interior, points_equal, segments_are_collinear,
    segments_cross_proper, segments_intersect_interior, segments_overlap_interior, EPS,
};

/// Offset used when probing perpendicular to a collinear boundary
/// overlap. Large enough to clear the epsilon dead zone, small enough to
/// stay inside any region with real area.
const PROBE_OFFSET: f64 = 1e-5;

/// Do the topological interiors of `a` and `b` share at least one point?
/// Symmetric in its arguments.
pub fn interiors_intersect(a: &Geometry, b: &Geometry) -> bool {
    match a {
        Geometry::Point(p) => point_interior_intersects(*p, b),
        Geometry::MultiPoint(mp) => {
            mp.0.iter().any(|&p| point_interior_intersects(p, b))
        }
        Geometry::LineString(ls) => line_string_interior_intersects(ls, b),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_interior_intersects(ls, b)),
        Geometry::Ring(r) => ring_interior_intersects(r, b),
        Geometry::Polygon(poly) => polygon_interior_intersects(poly, b),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|poly| polygon_interior_intersects(poly, b)),
        Geometry::Collection(c) => c.0.iter().any(|g| interiors_intersect(g, b)),
        Geometry::Bound(bound) => bound_interior_intersects(bound, b),
    }
}

/// A point is its own interior.
pub(crate) fn point_interior_intersects(p: Point, b: &Geometry) -> bool {
    match b {
        Geometry::Point(q) => points_equal(p, *q),
        Geometry::MultiPoint(mp) => mp.0.iter().any(|&q| points_equal(p, q)),
        Geometry::LineString(ls) => point_in_line_string_interior(p, ls),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().any(|ls| point_in_line_string_interior(p, ls))
        }
        Geometry::Ring(r) => point_in_ring_interior(p, r),
        Geometry::Polygon(poly) => point_in_polygon_interior(p, poly),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().any(|poly| point_in_polygon_interior(p, poly))
        }
        Geometry::Collection(c) => c.0.iter().any(|g| point_interior_intersects(p, g)),
        Geometry::Bound(bound) => bound.contains_point_interior(p),
    }
}

fn line_string_interior_intersects(ls: &LineString, b: &Geometry) -> bool {
    if ls.0.len() < 2 {
        return false;
    }

    match b {
        Geometry::Point(p) => point_in_line_string_interior(*p, ls),
        Geometry::MultiPoint(mp) => {
            mp.0.iter().any(|&p| point_in_line_string_interior(p, ls))
        }
        Geometry::LineString(other) => line_string_interiors_intersect(ls, other),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|other| line_string_interiors_intersect(ls, other)),
        Geometry::Ring(r) => line_string_interior_intersects_ring_interior(ls, r),
        Geometry::Polygon(poly) => line_string_interior_intersects_polygon_interior(ls, poly),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|poly| line_string_interior_intersects_polygon_interior(ls, poly)),
        Geometry::Collection(c) => {
            c.0.iter().any(|g| line_string_interior_intersects(ls, g))
        }
        Geometry::Bound(bound) => line_string_interior_intersects_bound_interior(ls, bound),
    }
}

/// 1D x 1D: a proper segment crossing, a collinear interior overlap, an
/// internal vertex of either line interior to the other, or a segment
/// midpoint of the first interior to the second (the embedded-collinear
/// witness).
fn line_string_interiors_intersect(ls1: &LineString, ls2: &LineString) -> bool {
    for (a, b) in ls1.segments() {
        for (c, d) in ls2.segments() {
            if segments_intersect_interior(a, b, c, d) {
                return true;
            }
        }
    }

    if ls1.0.len() > 2
        && ls1.0[1..ls1.0.len() - 1]
            .iter()
            .any(|&v| point_in_line_string_interior(v, ls2))
    {
        return true;
    }
    if ls2.0.len() > 2
        && ls2.0[1..ls2.0.len() - 1]
            .iter()
            .any(|&v| point_in_line_string_interior(v, ls1))
    {
        return true;
    }

    ls1.segments()
        .any(|(a, b)| point_in_line_string_interior(midpoint(a, b), ls2))
}

fn line_string_interior_intersects_ring_interior(ls: &LineString, r: &Ring) -> bool {
    if ls.0.len() > 2
        && ls.0[1..ls.0.len() - 1]
            .iter()
            .any(|&v| point_in_ring_interior(v, r))
    {
        return true;
    }
    ls.segments()
        .any(|(a, b)| point_in_ring_interior(midpoint(a, b), r))
}

/// 1D x 2D. An endpoint is a boundary point of the line, but an endpoint
/// strictly inside the area drags the adjacent open segment inside with
/// it, so endpoints are valid witnesses here.
fn line_string_interior_intersects_polygon_interior(ls: &LineString, poly: &Polygon) -> bool {
    if ls.0.len() < 2 {
        return false;
    }

    if point_in_polygon_interior(ls.0[0], poly)
        || point_in_polygon_interior(ls.0[ls.0.len() - 1], poly)
    {
        return true;
    }

    if ls.0[1..ls.0.len() - 1]
        .iter()
        .any(|&v| point_in_polygon_interior(v, poly))
    {
        return true;
    }

    ls.segments()
        .any(|(a, b)| point_in_polygon_interior(midpoint(a, b), poly))
}

fn line_string_interior_intersects_bound_interior(ls: &LineString, b: &Bound) -> bool {
    if ls.0.len() < 2 {
        return false;
    }

    if b.contains_point_interior(ls.0[0]) || b.contains_point_interior(ls.0[ls.0.len() - 1]) {
        return true;
    }

    if ls.0[1..ls.0.len() - 1]
        .iter()
        .any(|&v| b.contains_point_interior(v))
    {
        return true;
    }

    ls.segments()
        .any(|(a, b2)| b.contains_point_interior(midpoint(a, b2)))
}

fn ring_interior_intersects(r: &Ring, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => point_in_ring_interior(*p, r),
        Geometry::MultiPoint(mp) => {
            mp.0.iter().any(|&p| point_in_ring_interior(p, r))
        }
        Geometry::LineString(ls) => line_string_interior_intersects_ring_interior(ls, r),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_interior_intersects_ring_interior(ls, r)),
        Geometry::Ring(other) => polygon_interiors_intersect(
            &Polygon::new(r.clone()),
            &Polygon::new(other.clone()),
        ),
        Geometry::Polygon(poly) => ring_interior_intersects_polygon_interior(r, poly),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|poly| ring_interior_intersects_polygon_interior(r, poly)),
        Geometry::Collection(c) => c.0.iter().any(|g| ring_interior_intersects(r, g)),
        Geometry::Bound(bound) => ring_interior_intersects_bound_interior(r, bound),
    }
}

fn ring_interior_intersects_polygon_interior(r: &Ring, poly: &Polygon) -> bool {
    polygon_interiors_intersect(&Polygon::new(r.clone()), poly)
}

fn ring_interior_intersects_bound_interior(r: &Ring, b: &Bound) -> bool {
    polygon_interiors_intersect(&Polygon::new(r.clone()), &b.to_polygon())
}

fn polygon_interior_intersects(poly: &Polygon, b: &Geometry) -> bool {
    if poly.rings.is_empty() {
        return false;
    }

    match b {
        Geometry::Point(p) => point_in_polygon_interior(*p, poly),
        Geometry::MultiPoint(mp) => {
            mp.0.iter().any(|&p| point_in_polygon_interior(p, poly))
        }
        Geometry::LineString(ls) => {
            line_string_interior_intersects_polygon_interior(ls, poly)
        }
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_interior_intersects_polygon_interior(ls, poly)),
        Geometry::Ring(r) => ring_interior_intersects_polygon_interior(r, poly),
        Geometry::Polygon(other) => polygon_interiors_intersect(poly, other),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|other| polygon_interiors_intersect(poly, other)),
        Geometry::Collection(c) => c.0.iter().any(|g| polygon_interior_intersects(poly, g)),
        Geometry::Bound(bound) => {
            polygon_interior_intersects_bound_interior(poly, bound)
        }
    }
}

/// 2D x 2D. A proper boundary crossing or a vertex strictly inside the
/// other polygon settles it. Collinear boundary overlaps are the hard
/// case: the boundaries merge without crossing, so probe perpendicular to
/// the overlap midpoint on both sides and test each probe against both
/// interiors.
fn polygon_interiors_intersect(p1: &Polygon, p2: &Polygon) -> bool {
    if p1.rings.is_empty() || p2.rings.is_empty() {
        return false;
    }

    for r1 in &p1.rings {
        for r2 in &p2.rings {
            for (a, b) in r1.segments() {
                for (c, d) in r2.segments() {
                    if segments_cross_proper(a, b, c, d) {
                        return true;
                    }
                }
            }
        }
    }

    for ring in &p1.rings {
        if ring
            .0
            .iter()
            .any(|&p| point_in_polygon_interior(p, p2))
        {
            return true;
        }
    }
    for ring in &p2.rings {
        if ring
            .0
            .iter()
            .any(|&p| point_in_polygon_interior(p, p1))
        {
            return true;
        }
    }

    // Collinear edge overlaps
    for r1 in &p1.rings {
        for r2 in &p2.rings {
            for (a, b) in r1.segments() {
                for (c, d) in r2.segments() {
                    if !segments_are_collinear(a, b, c, d)
                        || !segments_overlap_interior(a, b, c, d)
                    {
                        continue;
                    }

                    let mid = collinear_overlap_midpoint(a, b, c, d);

                    let dx = b.x - a.x;
                    let dy = b.y - a.y;
                    let len = (dx * dx + dy * dy).sqrt();
                    if len == 0.0 {
                        continue;
                    }
                    // unit normal to the shared edge
                    let (nx, ny) = (-dy / len, dx / len);

                    let probe1 =
                        Point::new(mid.x + nx * PROBE_OFFSET, mid.y + ny * PROBE_OFFSET);
                    let probe2 =
                        Point::new(mid.x - nx * PROBE_OFFSET, mid.y - ny * PROBE_OFFSET);

                    if point_in_polygon_interior(probe1, p1)
                        && point_in_polygon_interior(probe1, p2)
                    {
                        return true;
                    }
                    if point_in_polygon_interior(probe2, p1)
                        && point_in_polygon_interior(probe2, p2)
                    {
                        return true;
                    }
                }
            }
        }
    }

    false
}

fn polygon_interior_intersects_bound_interior(poly: &Polygon, b: &Bound) -> bool {
    polygon_interiors_intersect(poly, &b.to_polygon())
}

fn bound_interior_intersects(bound: &Bound, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => bound.contains_point_interior(*p),
        Geometry::MultiPoint(mp) => {
            mp.0.iter().any(|&p| bound.contains_point_interior(p))
        }
        Geometry::LineString(ls) => {
            line_string_interior_intersects_bound_interior(ls, bound)
        }
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_interior_intersects_bound_interior(ls, bound)),
        Geometry::Ring(r) => ring_interior_intersects_bound_interior(r, bound),
        Geometry::Polygon(poly) => {
            polygon_interior_intersects_bound_interior(poly, bound)
        }
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|poly| polygon_interior_intersects_bound_interior(poly, bound)),
        Geometry::Collection(c) => c.0.iter().any(|g| bound_interior_intersects(bound, g)),
        Geometry::Bound(other) => bounds_interiors_intersect(bound, other),
    }
}

/// Strict interval overlap on both axes; edge-touching rectangles have
/// disjoint interiors.
fn bounds_interiors_intersect(b1: &Bound, b2: &Bound) -> bool {
    let overlap_x = b1.max.x.min(b2.max.x) - b1.min.x.max(b2.min.x);
    let overlap_y = b1.max.y.min(b2.max.y) - b1.min.y.max(b2.min.y);
    overlap_x > EPS && overlap_y > EPS
}
