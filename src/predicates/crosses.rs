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

use crate::geometry::{
    Bound, Dimension, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Ring,
};
use crate::kernel::{
    midpoint, point_in_line_string_interior, point_in_polygon_interior, point_in_ring_interior,
    point_intersects_line_string, point_on_polygon_boundary, point_on_ring_boundary,
    polygon_contains, ring_contains, segments_are_collinear, segments_cross_proper,
    segments_overlap_interior,
};
use crate::predicates::interior::point_interior_intersects;
use crate::predicates::intersects::intersects_point;

/// Do the geometries share some but not all interior points? Defined only
/// for MultiPoint x 1D/2D, Line x Line and Line x Area; every other
/// dimensional pairing returns false.
///
/// A shared collinear run disqualifies two lines from crossing: the
/// intersection must be a point, not a segment. For a line against an
/// area, only strict-interior and strict-exterior witnesses count;
/// boundary contact is neutral.
pub fn crosses(a: &Geometry, b: &Geometry) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if !a.bound().overlaps(&b.bound()) {
        return false;
    }

    let dim_a = a.dimension();
    let dim_b = b.dimension();

    // Same-dimension pairs cannot cross, except line against line
    if dim_a == dim_b && dim_a != Dimension::One {
        return false;
    }

    match a {
        // A single point intersects entirely or not at all
        Geometry::Point(_) => false,
        Geometry::MultiPoint(mp) => crosses_multi_point(mp, b),
        Geometry::LineString(ls) => crosses_line_string(ls, b),
        Geometry::MultiLineString(mls) => crosses_multi_line_string(mls, b),
        Geometry::Ring(r) => crosses_ring(r, b),
        Geometry::Polygon(poly) => crosses_polygon(poly, b),
        Geometry::MultiPolygon(mp) => crosses_multi_polygon(mp, b),
        Geometry::Collection(c) => c.0.iter().any(|g| crosses(g, b)),
        Geometry::Bound(bound) => crosses_bound(bound, b),
    }
}

fn crosses_multi_point(mp: &MultiPoint, b: &Geometry) -> bool {
    if mp.0.len() < 2 {
        return false;
    }

    match b {
        Geometry::Point(_) | Geometry::MultiPoint(_) => false,
        Geometry::LineString(ls) => multi_point_crosses_line_string(mp, ls),
        Geometry::MultiLineString(mls) => some_in_some_out(
            mp,
            |p| {
                mls.0
                    .iter()
                    .any(|ls| point_in_line_string_interior(p, ls))
            },
            |p| {
                mls.0
                    .iter()
                    .any(|ls| point_intersects_line_string(p, ls))
            },
        ),
        Geometry::Ring(r) => multi_point_crosses_ring(mp, r),
        Geometry::Polygon(poly) => multi_point_crosses_polygon(mp, poly),
        Geometry::MultiPolygon(mpoly) => some_in_some_out(
            mp,
            |p| {
                mpoly
                    .0
                    .iter()
                    .any(|poly| point_in_polygon_interior(p, poly))
            },
            |p| {
                mpoly.0.iter().any(|poly| {
                    polygon_contains(poly, p) || point_on_polygon_boundary(p, poly)
                })
            },
        ),
        Geometry::Collection(c) => some_in_some_out(
            mp,
            |p| c.0.iter().any(|g| point_interior_intersects(p, g)),
            |p| c.0.iter().any(|g| intersects_point(p, g)),
        ),
        Geometry::Bound(bound) => multi_point_crosses_bound(mp, bound),
    }
}

/// Some points witness the interior, some the exterior. A point on the
/// boundary only (in the closure but not the interior) is neutral: it
/// counts for neither side.
fn some_in_some_out(
    mp: &MultiPoint,
    interior: impl Fn(Point) -> bool,
    closure: impl Fn(Point) -> bool,
) -> bool {
    let mut has_inside = false;
    let mut has_outside = false;

    for &p in &mp.0 {
        if interior(p) {
            has_inside = true;
        } else if !closure(p) {
            has_outside = true;
        }
        if has_inside && has_outside {
            return true;
        }
    }
    false
}

fn multi_point_crosses_line_string(mp: &MultiPoint, ls: &LineString) -> bool {
    some_in_some_out(
        mp,
        |p| point_in_line_string_interior(p, ls),
        |p| point_intersects_line_string(p, ls),
    )
}

fn multi_point_crosses_ring(mp: &MultiPoint, r: &Ring) -> bool {
    some_in_some_out(
        mp,
        |p| point_in_ring_interior(p, r),
        |p| ring_contains(r, p) || point_on_ring_boundary(p, r),
    )
}

fn multi_point_crosses_polygon(mp: &MultiPoint, poly: &Polygon) -> bool {
    some_in_some_out(
        mp,
        |p| point_in_polygon_interior(p, poly),
        |p| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly),
    )
}

fn multi_point_crosses_bound(mp: &MultiPoint, b: &Bound) -> bool {
    some_in_some_out(
        mp,
        |p| b.contains_point_interior(p),
        |p| b.contains_point(p),
    )
}

fn crosses_line_string(ls: &LineString, b: &Geometry) -> bool {
    if ls.0.len() < 2 {
        return false;
    }

    match b {
        Geometry::Point(_) => false,
        Geometry::MultiPoint(mp) => {
            mp.0.len() >= 2 && multi_point_crosses_line_string(mp, ls)
        }
        Geometry::LineString(other) => line_string_crosses_line_string(ls, other),
        Geometry::MultiLineString(mls) => {
            // A shared run with any component means overlap, not crossing
            if mls
                .0
                .iter()
                .any(|other| lines_have_segment_overlap(ls, other))
            {
                return false;
            }
            mls.0
                .iter()
                .any(|other| line_string_crosses_line_string(ls, other))
        }
        Geometry::Ring(r) => line_string_crosses_ring(ls, r),
        Geometry::Polygon(poly) => line_string_crosses_polygon_area(ls, poly),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|poly| line_string_crosses_polygon_area(ls, poly)),
        Geometry::Collection(c) => c.0.iter().any(|g| crosses_line_string(ls, g)),
        Geometry::Bound(bound) => line_string_crosses_bound(ls, bound),
    }
}

/// Lines cross when they meet at an isolated proper crossing and share no
/// collinear run.
fn line_string_crosses_line_string(ls1: &LineString, ls2: &LineString) -> bool {
    if lines_have_segment_overlap(ls1, ls2) {
        return false;
    }

    ls1.segments().any(|(a, b)| {
        ls2.segments()
            .any(|(c, d)| segments_cross_proper(a, b, c, d))
    })
}

/// Do any two segments of the lines run collinear with positive shared
/// length?
fn lines_have_segment_overlap(ls1: &LineString, ls2: &LineString) -> bool {
    ls1.segments().any(|(a, b)| {
        ls2.segments().any(|(c, d)| {
            segments_are_collinear(a, b, c, d) && segments_overlap_interior(a, b, c, d)
        })
    })
}

fn line_string_crosses_ring(ls: &LineString, r: &Ring) -> bool {
    let mut has_inside = false;
    let mut has_outside = false;

    let mut classify = |p: Point| {
        if point_on_ring_boundary(p, r) {
            return;
        }
        if ring_contains(r, p) {
            has_inside = true;
        } else {
            has_outside = true;
        }
    };

    for &p in &ls.0 {
        classify(p);
    }
    for (a, b) in ls.segments() {
        classify(midpoint(a, b));
    }

    has_inside && has_outside
}

pub(crate) fn line_string_crosses_polygon_area(ls: &LineString, poly: &Polygon) -> bool {
    if poly.rings.is_empty() {
        return false;
    }

    let mut has_inside = false;
    let mut has_outside = false;

    let mut classify = |p: Point| {
        if point_on_polygon_boundary(p, poly) {
            return;
        }
        if polygon_contains(poly, p) {
            has_inside = true;
        } else {
            has_outside = true;
        }
    };

    for &p in &ls.0 {
        classify(p);
    }
    for (a, b) in ls.segments() {
        classify(midpoint(a, b));
    }

    has_inside && has_outside
}

fn line_string_crosses_bound(ls: &LineString, b: &Bound) -> bool {
    let mut has_inside = false;
    let mut has_outside = false;

    let mut classify = |p: Point| {
        if b.point_on_boundary(p) {
            return;
        }
        if b.contains_point_interior(p) {
            has_inside = true;
        } else if !b.contains_point(p) {
            has_outside = true;
        }
    };

    for &p in &ls.0 {
        classify(p);
    }
    for (a, b2) in ls.segments() {
        classify(midpoint(a, b2));
    }

    has_inside && has_outside
}

fn crosses_multi_line_string(mls: &MultiLineString, b: &Geometry) -> bool {
    match b {
        Geometry::Point(_) => false,
        Geometry::MultiPoint(mp) => {
            mp.0.len() >= 2
                && some_in_some_out(
                    mp,
                    |p| {
                        mls.0
                            .iter()
                            .any(|ls| point_in_line_string_interior(p, ls))
                    },
                    |p| {
                        mls.0
                            .iter()
                            .any(|ls| point_intersects_line_string(p, ls))
                    },
                )
        }
        Geometry::LineString(ls) => {
            if mls
                .0
                .iter()
                .any(|component| lines_have_segment_overlap(component, ls))
            {
                return false;
            }
            mls.0
                .iter()
                .any(|component| line_string_crosses_line_string(component, ls))
        }
        Geometry::MultiLineString(other) => {
            for ls1 in &mls.0 {
                for ls2 in &other.0 {
                    if lines_have_segment_overlap(ls1, ls2) {
                        return false;
                    }
                }
            }
            mls.0.iter().any(|ls1| {
                other
                    .0
                    .iter()
                    .any(|ls2| line_string_crosses_line_string(ls1, ls2))
            })
        }
        Geometry::Ring(r) => mls.0.iter().any(|ls| line_string_crosses_ring(ls, r)),
        Geometry::Polygon(poly) => mls
            .0
            .iter()
            .any(|ls| line_string_crosses_polygon_area(ls, poly)),
        Geometry::MultiPolygon(mp) => mls.0.iter().any(|ls| {
            mp.0.iter()
                .any(|poly| line_string_crosses_polygon_area(ls, poly))
        }),
        Geometry::Collection(c) => c.0.iter().any(|g| crosses_multi_line_string(mls, g)),
        Geometry::Bound(bound) => mls
            .0
            .iter()
            .any(|ls| line_string_crosses_bound(ls, bound)),
    }
}

/// An area can only be crossed by lower-dimensional geometry.
fn crosses_ring(r: &Ring, b: &Geometry) -> bool {
    match b {
        Geometry::MultiPoint(mp) => {
            mp.0.len() >= 2 && multi_point_crosses_ring(mp, r)
        }
        Geometry::LineString(ls) => line_string_crosses_ring(ls, r),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().any(|ls| line_string_crosses_ring(ls, r))
        }
        _ => false,
    }
}

fn crosses_polygon(poly: &Polygon, b: &Geometry) -> bool {
    match b {
        Geometry::MultiPoint(mp) => {
            mp.0.len() >= 2 && multi_point_crosses_polygon(mp, poly)
        }
        Geometry::LineString(ls) => line_string_crosses_polygon_area(ls, poly),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_crosses_polygon_area(ls, poly)),
        _ => false,
    }
}

fn crosses_multi_polygon(mp: &MultiPolygon, b: &Geometry) -> bool {
    match b {
        Geometry::MultiPoint(points) => {
            points.0.len() >= 2
                && some_in_some_out(
                    points,
                    |p| {
                        mp.0.iter()
                            .any(|poly| point_in_polygon_interior(p, poly))
                    },
                    |p| {
                        mp.0.iter().any(|poly| {
                            polygon_contains(poly, p) || point_on_polygon_boundary(p, poly)
                        })
                    },
                )
        }
        Geometry::LineString(ls) => mp
            .0
            .iter()
            .any(|poly| line_string_crosses_polygon_area(ls, poly)),
        Geometry::MultiLineString(mls) => mls.0.iter().any(|ls| {
            mp.0.iter()
                .any(|poly| line_string_crosses_polygon_area(ls, poly))
        }),
        _ => false,
    }
}

fn crosses_bound(bound: &Bound, b: &Geometry) -> bool {
    match b {
        Geometry::MultiPoint(mp) => {
            mp.0.len() >= 2 && multi_point_crosses_bound(mp, bound)
        }
        Geometry::LineString(ls) => line_string_crosses_bound(ls, bound),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_crosses_bound(ls, bound)),
        _ => false,
    }
}
