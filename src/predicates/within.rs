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
    Bound, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Ring,
};
use crate::kernel::{
    midpoint, point_in_line_string_interior, point_in_polygon_interior, point_in_ring_interior,
    point_intersects_line_string, point_on_polygon_boundary, point_on_ring_boundary, points_equal,
    polygon_contains, ring_contains, rings_intersect, segment_covered_by_line_string,
    segments_intersect_interior, EPS,
};

/// Is `a` completely inside `b`? The closure of `a` must stay inside the
/// closure of `b`, and the interiors must meet: a geometry lying entirely
/// on `b`'s boundary is covered but not within.
pub fn within(a: &Geometry, b: &Geometry) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    // a's bound must fit inside b's bound
    let ba = a.bound();
    let bb = b.bound();
    if ba.min.x < bb.min.x - EPS
        || ba.max.x > bb.max.x + EPS
        || ba.min.y < bb.min.y - EPS
        || ba.max.y > bb.max.y + EPS
    {
        return false;
    }

    match a {
        Geometry::Point(p) => within_point(*p, b),
        Geometry::MultiPoint(mp) => within_multi_point(mp, b),
        Geometry::LineString(ls) => within_line_string(ls, b),
        Geometry::MultiLineString(mls) => within_multi_line_string(mls, b),
        Geometry::Ring(r) => within_ring(r, b),
        Geometry::Polygon(poly) => within_polygon(poly, b),
        Geometry::MultiPolygon(mp) => within_multi_polygon(mp, b),
        Geometry::Collection(c) => {
            !c.0.is_empty() && c.0.iter().all(|g| within(g, b))
        }
        Geometry::Bound(bound) => within_polygon(&bound.to_polygon(), b),
    }
}

/// Is `b` completely inside `a`? The mirror of [`within`].
pub fn contains(a: &Geometry, b: &Geometry) -> bool {
    within(b, a)
}

fn within_point(p: Point, b: &Geometry) -> bool {
    match b {
        Geometry::Point(q) => points_equal(p, *q),
        Geometry::MultiPoint(mp) => mp.0.iter().any(|&q| points_equal(p, q)),
        // Interior of a line excludes its two end vertices
        Geometry::LineString(ls) => point_in_line_string_interior(p, ls),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().any(|ls| point_in_line_string_interior(p, ls))
        }
        Geometry::Ring(r) => point_in_ring_interior(p, r),
        Geometry::Polygon(poly) => point_in_polygon_interior(p, poly),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().any(|poly| point_in_polygon_interior(p, poly))
        }
        Geometry::Collection(c) => c.0.iter().any(|g| within_point(p, g)),
        Geometry::Bound(bound) => bound.contains_point_interior(p),
    }
}

fn within_multi_point(mp: &MultiPoint, b: &Geometry) -> bool {
    if mp.0.is_empty() {
        return false;
    }

    match b {
        Geometry::Point(q) => mp.0.iter().all(|&p| points_equal(p, *q)),
        Geometry::MultiPoint(other) => mp
            .0
            .iter()
            .all(|&p| other.0.iter().any(|&q| points_equal(p, q))),
        Geometry::LineString(ls) => {
            // Every point on the line, at least one off the boundary
            let mut has_interior = false;
            for &p in &mp.0 {
                if !point_intersects_line_string(p, ls) {
                    return false;
                }
                if point_in_line_string_interior(p, ls) {
                    has_interior = true;
                }
            }
            has_interior
        }
        Geometry::MultiLineString(mls) => {
            let mut has_interior = false;
            for &p in &mp.0 {
                let mut on_any = false;
                for ls in &mls.0 {
                    if point_intersects_line_string(p, ls) {
                        on_any = true;
                        if point_in_line_string_interior(p, ls) {
                            has_interior = true;
                        }
                        break;
                    }
                }
                if !on_any {
                    return false;
                }
            }
            has_interior
        }
        Geometry::Ring(r) => {
            let mut has_interior = false;
            for &p in &mp.0 {
                if !ring_contains(r, p) && !point_on_ring_boundary(p, r) {
                    return false;
                }
                if point_in_ring_interior(p, r) {
                    has_interior = true;
                }
            }
            has_interior
        }
        Geometry::Polygon(poly) => {
            let mut has_interior = false;
            for &p in &mp.0 {
                if !polygon_contains(poly, p) && !point_on_polygon_boundary(p, poly) {
                    return false;
                }
                if point_in_polygon_interior(p, poly) {
                    has_interior = true;
                }
            }
            has_interior
        }
        Geometry::MultiPolygon(mpoly) => {
            let mut has_interior = false;
            for &p in &mp.0 {
                let mut in_any = false;
                for poly in &mpoly.0 {
                    if polygon_contains(poly, p) || point_on_polygon_boundary(p, poly) {
                        in_any = true;
                        if point_in_polygon_interior(p, poly) {
                            has_interior = true;
                        }
                        break;
                    }
                }
                if !in_any {
                    return false;
                }
            }
            has_interior
        }
        Geometry::Collection(c) => mp
            .0
            .iter()
            .all(|&p| c.0.iter().any(|g| within_point(p, g))),
        Geometry::Bound(bound) => {
            let mut has_interior = false;
            for &p in &mp.0 {
                if !bound.contains_point(p) {
                    return false;
                }
                if bound.contains_point_interior(p) {
                    has_interior = true;
                }
            }
            has_interior
        }
    }
}

fn within_line_string(ls: &LineString, b: &Geometry) -> bool {
    if ls.0.len() < 2 {
        return false;
    }

    match b {
        // A line cannot fit inside a 0D geometry
        Geometry::Point(_) | Geometry::MultiPoint(_) => false,
        Geometry::LineString(other) => line_string_within_line_string(ls, other),
        Geometry::MultiLineString(mls) => line_string_within_multi_line_string(ls, mls),
        Geometry::Ring(r) => line_string_within_ring(ls, r),
        Geometry::Polygon(poly) => line_string_within_polygon(ls, poly),
        Geometry::MultiPolygon(mp) => {
            // Inside a single component, or spanning several touching ones
            if mp.0.iter().any(|poly| line_string_within_polygon(ls, poly)) {
                return true;
            }
            line_string_within_multi_polygon(ls, mp)
        }
        Geometry::Collection(c) => c.0.iter().any(|g| within_line_string(ls, g)),
        Geometry::Bound(bound) => line_string_within_bound(ls, bound),
    }
}

fn line_string_within_line_string(ls1: &LineString, ls2: &LineString) -> bool {
    if ls2.0.len() < 2 {
        return false;
    }

    // Every vertex of ls1 on ls2, every segment covered
    if !ls1
        .0
        .iter()
        .all(|&p| point_intersects_line_string(p, ls2))
    {
        return false;
    }
    if !ls1
        .segments()
        .all(|(a, b)| segment_covered_by_line_string(a, b, ls2))
    {
        return false;
    }

    // Some part must reach ls2's interior
    ls1.segments()
        .any(|(a, b)| point_in_line_string_interior(midpoint(a, b), ls2))
}

fn line_string_within_multi_line_string(ls: &LineString, mls: &MultiLineString) -> bool {
    if mls
        .0
        .iter()
        .any(|other| line_string_within_line_string(ls, other))
    {
        return true;
    }

    // Spanning several components: every vertex and midpoint on some part
    if !ls.0.iter().all(|&p| {
        mls.0
            .iter()
            .any(|other| point_intersects_line_string(p, other))
    }) {
        return false;
    }

    ls.segments().all(|(a, b)| {
        let mid = midpoint(a, b);
        mls.0
            .iter()
            .any(|other| point_intersects_line_string(mid, other))
    })
}

fn line_string_within_ring(ls: &LineString, r: &Ring) -> bool {
    if !ls
        .0
        .iter()
        .all(|&p| ring_contains(r, p) || point_on_ring_boundary(p, r))
    {
        return false;
    }

    let mut has_interior = false;
    for (a, b) in ls.segments() {
        let mid = midpoint(a, b);
        if !ring_contains(r, mid) && !point_on_ring_boundary(mid, r) {
            return false;
        }
        if point_in_ring_interior(mid, r) {
            has_interior = true;
        }
    }
    has_interior
}

fn line_string_within_polygon(ls: &LineString, poly: &Polygon) -> bool {
    if poly.rings.is_empty() {
        return false;
    }

    if !ls
        .0
        .iter()
        .all(|&p| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly))
    {
        return false;
    }

    let mut has_interior = false;
    for (a, b) in ls.segments() {
        let mid = midpoint(a, b);
        if !polygon_contains(poly, mid) && !point_on_polygon_boundary(mid, poly) {
            return false;
        }
        if point_in_polygon_interior(mid, poly) {
            has_interior = true;
        }
    }
    has_interior
}

/// A linestring may be within a multipolygon while spanning several
/// components that touch. Midpoint witnesses are not enough to rule out
/// the gaps where components meet, so each segment is sampled densely,
/// plus extra probes around every polygon-vertex y-level it crosses.
fn line_string_within_multi_polygon(ls: &LineString, mp: &MultiPolygon) -> bool {
    if mp.0.is_empty() || ls.0.len() < 2 {
        return false;
    }

    let in_any_poly = |p: Point| {
        mp.0.iter()
            .any(|poly| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly))
    };

    if !ls.0.iter().all(|&p| in_any_poly(p)) {
        return false;
    }

    const NUM_SAMPLES: usize = 50;
    for (start, end) in ls.segments() {
        for s in 1..NUM_SAMPLES {
            let t = s as f64 / NUM_SAMPLES as f64;
            let sample = Point::new(start.x + t * (end.x - start.x), start.y + t * (end.y - start.y));
            if !in_any_poly(sample) {
                return false;
            }
        }

        // Junction gaps show up where the segment crosses a polygon
        // vertex's y-level; probe just before and after each crossing.
        let dy = end.y - start.y;
        if dy.abs() > EPS {
            for poly in &mp.0 {
                for ring in &poly.rings {
                    for vertex in &ring.0 {
                        let t = (vertex.y - start.y) / dy;
                        if t <= EPS || t >= 1.0 - EPS {
                            continue;
                        }
                        for offset in [-1e-4, 0.0, 1e-4] {
                            let t_adj = t + offset;
                            if t_adj > 0.0 && t_adj < 1.0 {
                                let sample = Point::new(
                                    start.x + t_adj * (end.x - start.x),
                                    start.y + t_adj * (end.y - start.y),
                                );
                                if !in_any_poly(sample) {
                                    return false;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    // At least one vertex or midpoint strictly inside some component
    if ls.0.iter().any(|&p| {
        mp.0.iter()
            .any(|poly| point_in_polygon_interior(p, poly))
    }) {
        return true;
    }
    ls.segments().any(|(a, b)| {
        let mid = midpoint(a, b);
        mp.0.iter()
            .any(|poly| point_in_polygon_interior(mid, poly))
    })
}

fn line_string_within_bound(ls: &LineString, b: &Bound) -> bool {
    if !ls.0.iter().all(|&p| b.contains_point(p)) {
        return false;
    }

    if ls.0.iter().any(|&p| b.contains_point_interior(p)) {
        return true;
    }
    ls.segments()
        .any(|(p, q)| b.contains_point_interior(midpoint(p, q)))
}

fn within_multi_line_string(mls: &MultiLineString, b: &Geometry) -> bool {
    !mls.0.is_empty() && mls.0.iter().all(|ls| within_line_string(ls, b))
}

fn within_ring(r: &Ring, b: &Geometry) -> bool {
    if r.0.len() < 4 {
        return false;
    }

    match b {
        // 2D cannot sit inside lower-dimensional geometry
        Geometry::Point(_)
        | Geometry::MultiPoint(_)
        | Geometry::LineString(_)
        | Geometry::MultiLineString(_) => false,
        Geometry::Ring(other) => ring_within_ring(r, other),
        Geometry::Polygon(poly) => ring_within_polygon(r, poly),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().any(|poly| ring_within_polygon(r, poly))
        }
        Geometry::Collection(c) => c.0.iter().any(|g| within_ring(r, g)),
        Geometry::Bound(bound) => ring_within_bound(r, bound),
    }
}

fn ring_within_ring(r1: &Ring, r2: &Ring) -> bool {
    // Equal rings enclose the same region; orientation does not matter
    if r1.0.iter().all(|&p| point_on_ring_boundary(p, r2))
        && r2.0.iter().all(|&p| point_on_ring_boundary(p, r1))
    {
        return true;
    }

    if !r1
        .0
        .iter()
        .all(|&p| ring_contains(r2, p) || point_on_ring_boundary(p, r2))
    {
        return false;
    }

    // No boundary crossing may put part of r1 outside
    for (a, b) in r1.segments() {
        for (c, d) in r2.segments() {
            if segments_intersect_interior(a, b, c, d) {
                return false;
            }
        }
    }

    if r1.0.iter().any(|&p| point_in_ring_interior(p, r2)) {
        return true;
    }
    point_in_ring_interior(r1.centroid(), r2)
}

fn ring_within_polygon(r: &Ring, poly: &Polygon) -> bool {
    if poly.rings.is_empty() {
        return false;
    }

    if !r
        .0
        .iter()
        .all(|&p| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly))
    {
        return false;
    }

    for (a, b) in r.segments() {
        for poly_ring in &poly.rings {
            for (c, d) in poly_ring.segments() {
                if segments_intersect_interior(a, b, c, d) {
                    return false;
                }
            }
        }
    }

    point_in_polygon_interior(r.centroid(), poly)
}

fn ring_within_bound(r: &Ring, b: &Bound) -> bool {
    if !r.0.iter().all(|&p| b.contains_point(p)) {
        return false;
    }
    b.contains_point_interior(r.centroid())
}

fn within_polygon(poly: &Polygon, b: &Geometry) -> bool {
    let Some(exterior) = poly.exterior() else {
        return false;
    };
    if exterior.0.len() < 4 {
        return false;
    }

    match b {
        Geometry::Point(_)
        | Geometry::MultiPoint(_)
        | Geometry::LineString(_)
        | Geometry::MultiLineString(_) => false,
        // Holes of a lie inside its exterior, so only the exterior matters
        Geometry::Ring(r) => ring_within_ring(exterior, r),
        Geometry::Polygon(other) => polygon_within_polygon(poly, other),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|other| polygon_within_polygon(poly, other)),
        Geometry::Collection(c) => c.0.iter().any(|g| within_polygon(poly, g)),
        Geometry::Bound(bound) => polygon_within_bound(poly, bound),
    }
}

fn polygon_within_polygon(poly1: &Polygon, poly2: &Polygon) -> bool {
    let (Some(ext1), Some(_)) = (poly1.exterior(), poly2.exterior()) else {
        return false;
    };

    // Equal regions are within each other regardless of orientation
    if polygons_topologically_equal(poly1, poly2) {
        return true;
    }

    if !ext1
        .0
        .iter()
        .all(|&p| polygon_contains(poly2, p) || point_on_polygon_boundary(p, poly2))
    {
        return false;
    }

    // poly1 must stay clear of poly2's holes
    for hole in poly2.holes() {
        let centroid = ext1.centroid();
        if ring_contains(hole, centroid) && !point_on_ring_boundary(centroid, hole) {
            return false;
        }
        for &p in &ext1.0 {
            if ring_contains(hole, p) && !point_on_ring_boundary(p, hole) {
                return false;
            }
        }
        for (a, b) in ext1.segments() {
            let mid = midpoint(a, b);
            if ring_contains(hole, mid) && !point_on_ring_boundary(mid, hole) {
                return false;
            }
        }
        // poly1 swallowing the hole entirely also breaks containment
        if rings_intersect(ext1, hole) && ring_contains(ext1, hole.centroid()) {
            return false;
        }
    }

    // No boundary of poly1 may properly cross a boundary of poly2
    for r1 in &poly1.rings {
        for (a, b) in r1.segments() {
            for r2 in &poly2.rings {
                for (c, d) in r2.segments() {
                    if segments_intersect_interior(a, b, c, d) {
                        return false;
                    }
                }
            }
        }
    }

    // Interior witness: centroid, then vertices, then midpoints
    if point_in_polygon_interior(ext1.centroid(), poly2) {
        return true;
    }
    if ext1
        .0
        .iter()
        .any(|&p| point_in_polygon_interior(p, poly2))
    {
        return true;
    }
    ext1.segments()
        .any(|(a, b)| point_in_polygon_interior(midpoint(a, b), poly2))
}

/// Same covered area, detected from the boundaries alone: every exterior
/// vertex of each polygon lies on the other's exterior, and the hole
/// counts match.
fn polygons_topologically_equal(poly1: &Polygon, poly2: &Polygon) -> bool {
    let (Some(ext1), Some(ext2)) = (poly1.exterior(), poly2.exterior()) else {
        return false;
    };

    if !ext1.0.iter().all(|&p| point_on_ring_boundary(p, ext2)) {
        return false;
    }
    if !ext2.0.iter().all(|&p| point_on_ring_boundary(p, ext1)) {
        return false;
    }

    poly1.rings.len() == poly2.rings.len()
}

fn polygon_within_bound(poly: &Polygon, b: &Bound) -> bool {
    let Some(exterior) = poly.exterior() else {
        return false;
    };

    for ring in &poly.rings {
        if !ring.0.iter().all(|&p| b.contains_point(p)) {
            return false;
        }
    }
    b.contains_point_interior(exterior.centroid())
}

fn within_multi_polygon(mp: &MultiPolygon, b: &Geometry) -> bool {
    !mp.0.is_empty() && mp.0.iter().all(|poly| within_polygon(poly, b))
}
