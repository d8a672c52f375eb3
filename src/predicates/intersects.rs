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

use crate::geometry::{Geometry, LineString, Point, Polygon, Ring};
use crate::kernel::{
    line_string_intersects_ring, line_strings_intersect, point_intersects_line_string,
    point_on_polygon_boundary, point_on_ring_boundary, points_equal, polygon_contains,
    ring_boundaries_intersect, ring_contains, rings_intersect,
};

/// Do the two geometries share at least one point (closure against
/// closure)?
pub fn intersects(a: &Geometry, b: &Geometry) -> bool {
    if !a.bound().overlaps(&b.bound()) {
        return false;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }

    match a {
        Geometry::Point(p) => intersects_point(*p, b),
        Geometry::MultiPoint(mp) => mp.0.iter().any(|&p| intersects_point(p, b)),
        Geometry::LineString(ls) => intersects_line_string(ls, b),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().any(|ls| intersects_line_string(ls, b))
        }
        Geometry::Ring(r) => intersects_ring(r, b),
        Geometry::Polygon(poly) => intersects_polygon(poly, b),
        Geometry::MultiPolygon(mp) => mp.0.iter().any(|poly| intersects_polygon(poly, b)),
        Geometry::Collection(c) => c.0.iter().any(|g| intersects(g, b)),
        Geometry::Bound(bound) => intersects_polygon(&bound.to_polygon(), b),
    }
}

/// No point in common: the complement of [`intersects`].
pub fn disjoint(a: &Geometry, b: &Geometry) -> bool {
    !intersects(a, b)
}

pub(crate) fn intersects_point(p: Point, b: &Geometry) -> bool {
    match b {
        Geometry::Point(q) => points_equal(p, *q),
        Geometry::MultiPoint(mp) => mp.0.iter().any(|&q| points_equal(p, q)),
        Geometry::LineString(ls) => point_intersects_line_string(p, ls),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().any(|ls| point_intersects_line_string(p, ls))
        }
        Geometry::Ring(r) => ring_contains(r, p) || point_on_ring_boundary(p, r),
        Geometry::Polygon(poly) => {
            polygon_contains(poly, p) || point_on_polygon_boundary(p, poly)
        }
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|poly| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly)),
        Geometry::Collection(c) => c.0.iter().any(|g| intersects_point(p, g)),
        Geometry::Bound(bound) => bound.contains_point(p),
    }
}

fn intersects_line_string(ls: &LineString, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => point_intersects_line_string(*p, ls),
        Geometry::MultiPoint(mp) => {
            mp.0.iter().any(|&p| point_intersects_line_string(p, ls))
        }
        Geometry::LineString(other) => line_strings_intersect(ls, other),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().any(|other| line_strings_intersect(ls, other))
        }
        Geometry::Ring(r) => line_string_intersects_ring_or_interior(ls, r),
        Geometry::Polygon(poly) => line_string_intersects_polygon(ls, poly),
        Geometry::MultiPolygon(mp) => mp
            .0
            .iter()
            .any(|poly| line_string_intersects_polygon(ls, poly)),
        Geometry::Collection(c) => c.0.iter().any(|g| intersects_line_string(ls, g)),
        Geometry::Bound(bound) => line_string_intersects_polygon(ls, &bound.to_polygon()),
    }
}

/// Boundary contact, or any linestring vertex inside the ring's area.
fn line_string_intersects_ring_or_interior(ls: &LineString, r: &Ring) -> bool {
    if line_string_intersects_ring(ls, r) {
        return true;
    }
    ls.0.iter().any(|&p| ring_contains(r, p))
}

fn line_string_intersects_polygon(ls: &LineString, poly: &Polygon) -> bool {
    if poly.rings.is_empty() {
        return false;
    }

    if poly
        .rings
        .iter()
        .any(|ring| line_string_intersects_ring(ls, ring))
    {
        return true;
    }

    ls.0.iter().any(|&p| polygon_contains(poly, p))
}

fn intersects_ring(r: &Ring, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => ring_contains(r, *p) || point_on_ring_boundary(*p, r),
        Geometry::MultiPoint(mp) => mp
            .0
            .iter()
            .any(|&p| ring_contains(r, p) || point_on_ring_boundary(p, r)),
        Geometry::LineString(ls) => line_string_intersects_ring_or_interior(ls, r),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_intersects_ring_or_interior(ls, r)),
        Geometry::Ring(other) => rings_intersect(r, other),
        Geometry::Polygon(poly) => ring_intersects_polygon(r, poly),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().any(|poly| ring_intersects_polygon(r, poly))
        }
        Geometry::Collection(c) => c.0.iter().any(|g| intersects_ring(r, g)),
        Geometry::Bound(bound) => ring_intersects_polygon(r, &bound.to_polygon()),
    }
}

pub(crate) fn ring_intersects_polygon(r: &Ring, poly: &Polygon) -> bool {
    let Some(exterior) = poly.exterior() else {
        return false;
    };

    if poly
        .rings
        .iter()
        .any(|poly_ring| ring_boundaries_intersect(r, poly_ring))
    {
        return true;
    }

    if let Some(&p) = r.0.first() {
        if polygon_contains(poly, p) {
            return true;
        }
    }
    if let Some(&p) = exterior.0.first() {
        if ring_contains(r, p) {
            return true;
        }
    }

    false
}

fn intersects_polygon(poly: &Polygon, b: &Geometry) -> bool {
    match b {
        Geometry::Point(p) => {
            polygon_contains(poly, *p) || point_on_polygon_boundary(*p, poly)
        }
        Geometry::MultiPoint(mp) => mp
            .0
            .iter()
            .any(|&p| polygon_contains(poly, p) || point_on_polygon_boundary(p, poly)),
        Geometry::LineString(ls) => line_string_intersects_polygon(ls, poly),
        Geometry::MultiLineString(mls) => mls
            .0
            .iter()
            .any(|ls| line_string_intersects_polygon(ls, poly)),
        Geometry::Ring(r) => ring_intersects_polygon(r, poly),
        Geometry::Polygon(other) => polygons_intersect(poly, other),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().any(|other| polygons_intersect(poly, other))
        }
        Geometry::Collection(c) => c.0.iter().any(|g| intersects_polygon(poly, g)),
        Geometry::Bound(bound) => polygons_intersect(poly, &bound.to_polygon()),
    }
}

/// Boundary contact, or full containment of one polygon in the other
/// (witnessed by the first exterior vertex).
pub(crate) fn polygons_intersect(p1: &Polygon, p2: &Polygon) -> bool {
    let (Some(ext1), Some(ext2)) = (p1.exterior(), p2.exterior()) else {
        return false;
    };

    for r1 in &p1.rings {
        for r2 in &p2.rings {
            if ring_boundaries_intersect(r1, r2) {
                return true;
            }
        }
    }

    if let Some(&p) = ext1.0.first() {
        if polygon_contains(p2, p) {
            return true;
        }
    }
    if let Some(&p) = ext2.0.first() {
        if polygon_contains(p1, p) {
            return true;
        }
    }

    false
}
