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
    midpoint, point_intersects_line_string, point_on_polygon_boundary, point_on_ring_boundary,
    points_equal, polygon_contains, ring_contains, EPS,
};

/// Does every point of `b` lie in the closure of `a`? Unlike
/// [`contains`](super::contains), coverage that touches only `a`'s
/// boundary qualifies: no interior witness is required.
pub fn covers(a: &Geometry, b: &Geometry) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    // b's bound must fit inside a's bound
    let ba = a.bound();
    let bb = b.bound();
    if bb.min.x < ba.min.x - EPS
        || bb.max.x > ba.max.x + EPS
        || bb.min.y < ba.min.y - EPS
        || bb.max.y > ba.max.y + EPS
    {
        return false;
    }

    match a {
        Geometry::Point(p) => covers_point(*p, b),
        Geometry::MultiPoint(mp) => covers_multi_point(mp, b),
        Geometry::LineString(ls) => covers_line_string(ls, b),
        Geometry::MultiLineString(mls) => covers_multi_line_string(mls, b),
        Geometry::Ring(r) => covers_ring(r, b),
        Geometry::Polygon(poly) => covers_polygon(poly, b),
        Geometry::MultiPolygon(mp) => covers_multi_polygon(mp, b),
        Geometry::Collection(c) => covers_collection(c, b),
        Geometry::Bound(bound) => covers_bound(bound, b),
    }
}

/// Does every point of `a` lie in the closure of `b`? The mirror of
/// [`covers`].
pub fn covered_by(a: &Geometry, b: &Geometry) -> bool {
    covers(b, a)
}

fn covers_point(p: Point, b: &Geometry) -> bool {
    match b {
        Geometry::Point(q) => points_equal(p, *q),
        Geometry::MultiPoint(mp) => mp.0.iter().all(|&q| points_equal(p, q)),
        // A point cannot cover anything with extent
        _ => false,
    }
}

fn covers_multi_point(mp: &MultiPoint, b: &Geometry) -> bool {
    match b {
        Geometry::Point(q) => mp.0.iter().any(|&p| points_equal(p, *q)),
        Geometry::MultiPoint(other) => other
            .0
            .iter()
            .all(|&q| mp.0.iter().any(|&p| points_equal(p, q))),
        _ => false,
    }
}

fn covers_line_string(ls: &LineString, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => point_intersects_line_string(*p, ls),
        Geometry::MultiPoint(mp) => mp
            .0
            .iter()
            .all(|&p| point_intersects_line_string(p, ls)),
        Geometry::LineString(other) => line_string_covers_line_string(ls, other),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .all(|other| line_string_covers_line_string(ls, other)),
        // A line cannot cover an area
        _ => false,
    }
}

/// Every vertex and segment midpoint of `ls2` lies on `ls1`.
pub(crate) fn line_string_covers_line_string(ls1: &LineString, ls2: &LineString) -> bool {
    if !ls2
        .0
        .iter()
        .all(|&p| point_intersects_line_string(p, ls1))
    {
        return false;
    }
    ls2.segments()
        .all(|(a, b)| point_intersects_line_string(midpoint(a, b), ls1))
}

fn covers_multi_line_string(mls: &MultiLineString, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => mls
            .0
            .iter()
            .any(|ls| point_intersects_line_string(*p, ls)),
        Geometry::MultiPoint(mp) => mp.0.iter().all(|&p| {
            mls.0
                .iter()
                .any(|ls| point_intersects_line_string(p, ls))
        }),
        Geometry::LineString(ls) => multi_line_string_covers_line_string(mls, ls),
        Geometry::MultiLineString(other) => other
            .0
            .iter()
            .all(|ls| multi_line_string_covers_line_string(mls, ls)),
        _ => false,
    }
}

/// Every vertex and midpoint of `ls` lies on some component of `mls`.
pub(crate) fn multi_line_string_covers_line_string(
    mls: &MultiLineString,
    ls: &LineString,
) -> bool {
    let on_any = |p: Point| {
        mls.0
            .iter()
            .any(|component| point_intersects_line_string(p, component))
    };

    if !ls.0.iter().all(|&p| on_any(p)) {
        return false;
    }
    ls.segments().all(|(a, b)| on_any(midpoint(a, b)))
}

fn covers_ring(r: &Ring, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => ring_contains(r, *p) || point_on_ring_boundary(*p, r),
        Geometry::MultiPoint(mp) => mp
            .0
            .iter()
            .all(|&p| ring_contains(r, p) || point_on_ring_boundary(p, r)),
        Geometry::LineString(ls) => ring_covers_line_string(r, ls),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().all(|ls| ring_covers_line_string(r, ls))
        }
        Geometry::Ring(other) => ring_covers_ring(r, other),
        Geometry::Polygon(poly) => ring_covers_polygon(r, poly),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().all(|poly| ring_covers_polygon(r, poly))
        }
        Geometry::Collection(c) => c.0.iter().all(|g| covers_ring(r, g)),
        Geometry::Bound(bound) => ring_covers_bound(r, bound),
    }
}

fn ring_covers_line_string(r: &Ring, ls: &LineString) -> bool {
    let in_closure = |p: Point| ring_contains(r, p) || point_on_ring_boundary(p, r);

    if !ls.0.iter().all(|&p| in_closure(p)) {
        return false;
    }
    ls.segments().all(|(a, b)| in_closure(midpoint(a, b)))
}

/// Every vertex and edge midpoint of `r2` lies in the closure of `r1`.
pub(crate) fn ring_covers_ring(r1: &Ring, r2: &Ring) -> bool {
    let in_closure = |p: Point| ring_contains(r1, p) || point_on_ring_boundary(p, r1);

    if !r2.0.iter().all(|&p| in_closure(p)) {
        return false;
    }
    r2.segments().all(|(a, b)| in_closure(midpoint(a, b)))
}

fn ring_covers_polygon(r: &Ring, poly: &Polygon) -> bool {
    let Some(exterior) = poly.exterior() else {
        return true;
    };
    exterior
        .0
        .iter()
        .all(|&p| ring_contains(r, p) || point_on_ring_boundary(p, r))
}

fn ring_covers_bound(r: &Ring, b: &Bound) -> bool {
    let corners = [
        Point::new(b.min.x, b.min.y),
        Point::new(b.max.x, b.min.y),
        Point::new(b.max.x, b.max.y),
        Point::new(b.min.x, b.max.y),
    ];
    corners
        .iter()
        .all(|&c| ring_contains(r, c) || point_on_ring_boundary(c, r))
}

fn covers_polygon(poly: &Polygon, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => {
            polygon_contains(poly, *p) || point_on_polygon_boundary(*p, poly)
        }
        Geometry::MultiPoint(mp) => mp
            .0
            .iter()
            .all(|&p| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly)),
        Geometry::LineString(ls) => polygon_covers_line_string(poly, ls),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .all(|ls| polygon_covers_line_string(poly, ls)),
        Geometry::Ring(r) => polygon_covers_ring(poly, r),
        Geometry::Polygon(other) => polygon_covers_polygon(poly, other),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().all(|other| polygon_covers_polygon(poly, other))
        }
        Geometry::Collection(c) => c.0.iter().all(|g| covers_polygon(poly, g)),
        Geometry::Bound(bound) => polygon_covers_bound(poly, bound),
    }
}

fn polygon_covers_line_string(poly: &Polygon, ls: &LineString) -> bool {
    let in_closure =
        |p: Point| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly);

    if !ls.0.iter().all(|&p| in_closure(p)) {
        return false;
    }
    ls.segments().all(|(a, b)| in_closure(midpoint(a, b)))
}

pub(crate) fn polygon_covers_ring(poly: &Polygon, r: &Ring) -> bool {
    let in_closure =
        |p: Point| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly);

    if !r.0.iter().all(|&p| in_closure(p)) {
        return false;
    }
    r.segments().all(|(a, b)| in_closure(midpoint(a, b)))
}

/// Every exterior vertex and edge midpoint of `poly2` lies in the closure
/// of `poly1`.
pub(crate) fn polygon_covers_polygon(poly1: &Polygon, poly2: &Polygon) -> bool {
    let Some(ext2) = poly2.exterior() else {
        return true;
    };

    let in_closure =
        |p: Point| polygon_contains(poly1, p) || point_on_polygon_boundary(p, poly1);

    if !ext2.0.iter().all(|&p| in_closure(p)) {
        return false;
    }
    ext2.segments().all(|(a, b)| in_closure(midpoint(a, b)))
}

fn polygon_covers_bound(poly: &Polygon, b: &Bound) -> bool {
    let in_closure =
        |p: Point| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly);

    let corners = [
        Point::new(b.min.x, b.min.y),
        Point::new(b.max.x, b.min.y),
        Point::new(b.max.x, b.max.y),
        Point::new(b.min.x, b.max.y),
    ];
    if !corners.iter().all(|&c| in_closure(c)) {
        return false;
    }

    let edges = [
        Point::new((b.min.x + b.max.x) / 2.0, b.min.y),
        Point::new(b.max.x, (b.min.y + b.max.y) / 2.0),
        Point::new((b.min.x + b.max.x) / 2.0, b.max.y),
        Point::new(b.min.x, (b.min.y + b.max.y) / 2.0),
    ];
    edges.iter().all(|&e| in_closure(e))
}

fn covers_multi_polygon(mp: &MultiPolygon, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => mp
            .0
            .iter()
            .any(|poly| polygon_contains(poly, *p) || point_on_polygon_boundary(*p, poly)),
        Geometry::MultiPoint(points) => points.0.iter().all(|&p| {
            mp.0.iter()
                .any(|poly| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly))
        }),
        Geometry::LineString(ls) => multi_polygon_covers_line_string(mp, ls),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .all(|ls| multi_polygon_covers_line_string(mp, ls)),
        Geometry::Ring(r) => multi_polygon_covers_ring(mp, r),
        Geometry::Polygon(poly) => multi_polygon_covers_polygon(mp, poly),
        Geometry::MultiPolygon(other) => other
            .0
            .iter()
            .all(|poly| multi_polygon_covers_polygon(mp, poly)),
        Geometry::Collection(c) => c.0.iter().all(|g| covers_multi_polygon(mp, g)),
        Geometry::Bound(bound) => {
            multi_polygon_covers_polygon(mp, &bound.to_polygon())
        }
    }
}

fn multi_polygon_covers_line_string(mp: &MultiPolygon, ls: &LineString) -> bool {
    let covered = |p: Point| {
        mp.0.iter()
            .any(|poly| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly))
    };

    if !ls.0.iter().all(|&p| covered(p)) {
        return false;
    }
    ls.segments().all(|(a, b)| covered(midpoint(a, b)))
}

fn multi_polygon_covers_ring(mp: &MultiPolygon, r: &Ring) -> bool {
    let covered = |p: Point| {
        mp.0.iter()
            .any(|poly| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly))
    };

    if !r.0.iter().all(|&p| covered(p)) {
        return false;
    }
    r.segments().all(|(a, b)| covered(midpoint(a, b)))
}

fn multi_polygon_covers_polygon(mp: &MultiPolygon, poly: &Polygon) -> bool {
    let Some(exterior) = poly.exterior() else {
        return true;
    };

    // A single component may cover it outright
    if mp.0.iter().any(|p| polygon_covers_polygon(p, poly)) {
        return true;
    }

    // Otherwise point-by-point coverage across components
    let covered = |p: Point| {
        mp.0.iter()
            .any(|component| {
                polygon_contains(component, p) || point_on_polygon_boundary(p, component)
            })
    };

    if !exterior.0.iter().all(|&p| covered(p)) {
        return false;
    }
    exterior.segments().all(|(a, b)| covered(midpoint(a, b)))
}

fn covers_collection(c: &crate::geometry::Collection, b: &Geometry) -> bool {
    match b {
        Geometry::Point(_) => c.0.iter().any(|g| covers(g, b)),
        Geometry::MultiPoint(mp) => mp.0.iter().all(|&p| {
            let point = Geometry::Point(p);
            c.0.iter().any(|g| covers(g, &point))
        }),
        // Complex geometries must be covered by a single member
        _ => c.0.iter().any(|g| covers(g, b)),
    }
}

fn covers_bound(bound: &Bound, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => bound.contains_point(*p),
        Geometry::MultiPoint(mp) => mp.0.iter().all(|&p| bound.contains_point(p)),
        Geometry::LineString(ls) => ls.0.iter().all(|&p| bound.contains_point(p)),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .all(|ls| ls.0.iter().all(|&p| bound.contains_point(p))),
        Geometry::Ring(r) => r.0.iter().all(|&p| bound.contains_point(p)),
        Geometry::Polygon(poly) => poly
            .rings
            .iter()
            .all(|r| r.0.iter().all(|&p| bound.contains_point(p))),
        Geometry::MultiPolygon(mp) => mp.0.iter().all(|poly| {
            poly.rings
                .iter()
                .all(|r| r.0.iter().all(|&p| bound.contains_point(p)))
        }),
        Geometry::Collection(c) => c.0.iter().all(|g| covers_bound(bound, g)),
        Geometry::Bound(other) => {
            bound.min.x <= other.min.x + EPS
                && bound.min.y <= other.min.y + EPS
                && bound.max.x >= other.max.x - EPS
                && bound.max.y >= other.max.y - EPS
        }
    }
}
