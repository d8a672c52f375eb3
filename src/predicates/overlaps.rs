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
    Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Ring,
};
use crate::kernel::{
    point_in_polygon_interior, point_in_ring_interior, points_equal, rings_intersect,
    segments_are_collinear, segments_overlap_interior,
};
use crate::predicates::covers::{
    line_string_covers_line_string, multi_line_string_covers_line_string, polygon_covers_polygon,
    polygon_covers_ring, ring_covers_ring,
};
use crate::predicates::intersects::{polygons_intersect, ring_intersects_polygon};

/// Do two same-dimensional geometries share part of their interiors while
/// neither covers the other? Mixed dimensions never overlap.
pub fn overlaps(a: &Geometry, b: &Geometry) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if !a.bound().overlaps(&b.bound()) {
        return false;
    }

    if a.dimension() != b.dimension() {
        return false;
    }

    match a {
        // A single point has nothing to hold back: no "some but not all"
        Geometry::Point(_) => false,
        Geometry::MultiPoint(mp) => overlaps_multi_point(mp, b),
        Geometry::LineString(ls) => overlaps_line_string(ls, b),
        Geometry::MultiLineString(mls) => overlaps_multi_line_string(mls, b),
        Geometry::Ring(r) => overlaps_ring(r, b),
        Geometry::Polygon(poly) => overlaps_polygon(poly, b),
        Geometry::MultiPolygon(mp) => overlaps_multi_polygon(mp, b),
        Geometry::Collection(c) => c.0.iter().any(|g| overlaps(g, b)),
        Geometry::Bound(bound) => overlaps_polygon(&bound.to_polygon(), b),
    }
}

fn overlaps_multi_point(mp: &MultiPoint, b: &Geometry) -> bool {
    match b {
        Geometry::MultiPoint(other) => multi_points_overlap(mp, other),
        _ => false,
    }
}

/// Three witnesses: a shared point, a point only in `mp1`, a point only
/// in `mp2`.
fn multi_points_overlap(mp1: &MultiPoint, mp2: &MultiPoint) -> bool {
    let mut has_shared = false;
    let mut has_unique_1 = false;

    for &p in &mp1.0 {
        if mp2.0.iter().any(|&q| points_equal(p, q)) {
            has_shared = true;
        } else {
            has_unique_1 = true;
        }
    }

    let has_unique_2 = mp2
        .0
        .iter()
        .any(|&q| !mp1.0.iter().any(|&p| points_equal(p, q)));

    has_shared && has_unique_1 && has_unique_2
}

fn overlaps_line_string(ls: &LineString, b: &Geometry) -> bool {
    match b {
        Geometry::LineString(other) => line_strings_overlap(ls, other),
        Geometry::MultiLineString(mls) => line_string_overlaps_multi_line_string(ls, mls),
        _ => false,
    }
}

/// Lines overlap when they share a collinear run and neither covers the
/// other.
fn line_strings_overlap(ls1: &LineString, ls2: &LineString) -> bool {
    if ls1.0.len() < 2 || ls2.0.len() < 2 {
        return false;
    }

    let has_shared_segment = ls1.segments().any(|(a, b)| {
        ls2.segments().any(|(c, d)| {
            segments_are_collinear(a, b, c, d) && segments_overlap_interior(a, b, c, d)
        })
    });
    if !has_shared_segment {
        return false;
    }

    !line_string_covers_line_string(ls1, ls2) && !line_string_covers_line_string(ls2, ls1)
}

fn line_string_overlaps_multi_line_string(ls: &LineString, mls: &MultiLineString) -> bool {
    if !mls.0.iter().any(|other| line_strings_overlap(ls, other)) {
        return false;
    }

    if multi_line_string_covers_line_string(mls, ls) {
        return false;
    }

    // ls covering every component means full coverage the other way
    let covers_all = mls
        .0
        .iter()
        .all(|other| line_string_covers_line_string(ls, other));
    !covers_all
}

fn overlaps_multi_line_string(mls: &MultiLineString, b: &Geometry) -> bool {
    match b {
        Geometry::LineString(ls) => line_string_overlaps_multi_line_string(ls, mls),
        Geometry::MultiLineString(other) => multi_line_strings_overlap(mls, other),
        _ => false,
    }
}

fn multi_line_strings_overlap(mls1: &MultiLineString, mls2: &MultiLineString) -> bool {
    let has_overlap = mls1.0.iter().any(|ls1| {
        mls2.0
            .iter()
            .any(|ls2| line_strings_overlap(ls1, ls2))
    });
    if !has_overlap {
        return false;
    }

    let covered_1 = mls1
        .0
        .iter()
        .all(|ls| multi_line_string_covers_line_string(mls2, ls));
    let covered_2 = mls2
        .0
        .iter()
        .all(|ls| multi_line_string_covers_line_string(mls1, ls));

    !covered_1 && !covered_2
}

fn overlaps_ring(r: &Ring, b: &Geometry) -> bool {
    match b {
        Geometry::Ring(other) => rings_overlap(r, other),
        Geometry::Polygon(poly) => ring_overlaps_polygon(r, poly),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().any(|poly| ring_overlaps_polygon(r, poly))
        }
        Geometry::Bound(bound) => ring_overlaps_polygon(r, &bound.to_polygon()),
        _ => false,
    }
}

/// Areas overlap when each has interior inside the other and neither
/// covers the other.
fn rings_overlap(r1: &Ring, r2: &Ring) -> bool {
    if !rings_intersect(r1, r2) {
        return false;
    }

    let r1_in_r2 = point_in_ring_interior(r1.centroid(), r2)
        || r1.0.iter().any(|&p| point_in_ring_interior(p, r2));
    let r2_in_r1 = point_in_ring_interior(r2.centroid(), r1)
        || r2.0.iter().any(|&p| point_in_ring_interior(p, r1));

    if !r1_in_r2 || !r2_in_r1 {
        return false;
    }

    !ring_covers_ring(r1, r2) && !ring_covers_ring(r2, r1)
}

fn ring_overlaps_polygon(r: &Ring, poly: &Polygon) -> bool {
    let Some(exterior) = poly.exterior() else {
        return false;
    };

    if !ring_intersects_polygon(r, poly) {
        return false;
    }

    let r_in_poly = point_in_polygon_interior(r.centroid(), poly)
        || r.0.iter().any(|&p| point_in_polygon_interior(p, poly));
    let poly_in_r = point_in_ring_interior(exterior.centroid(), r)
        || exterior.0.iter().any(|&p| point_in_ring_interior(p, r));

    if !r_in_poly || !poly_in_r {
        return false;
    }

    !ring_covers_ring(r, exterior) && !polygon_covers_ring(poly, r)
}

fn overlaps_polygon(poly: &Polygon, b: &Geometry) -> bool {
    match b {
        Geometry::Ring(r) => ring_overlaps_polygon(r, poly),
        Geometry::Polygon(other) => polygons_overlap(poly, other),
        Geometry::MultiPolygon(mp) => {
            mp.0.iter().any(|other| polygons_overlap(poly, other))
        }
        Geometry::Bound(bound) => polygons_overlap(poly, &bound.to_polygon()),
        _ => false,
    }
}

fn polygons_overlap(p1: &Polygon, p2: &Polygon) -> bool {
    let (Some(ext1), Some(ext2)) = (p1.exterior(), p2.exterior()) else {
        return false;
    };

    if !polygons_intersect(p1, p2) {
        return false;
    }

    // Each polygon needs interior presence in the other; centroid first,
    // then exterior vertices
    let p1_in_p2 = point_in_polygon_interior(ext1.centroid(), p2)
        || ext1.0.iter().any(|&p| point_in_polygon_interior(p, p2));
    let p2_in_p1 = point_in_polygon_interior(ext2.centroid(), p1)
        || ext2.0.iter().any(|&p| point_in_polygon_interior(p, p1));

    if !p1_in_p2 || !p2_in_p1 {
        return false;
    }

    !polygon_covers_polygon(p1, p2) && !polygon_covers_polygon(p2, p1)
}

fn overlaps_multi_polygon(mp: &MultiPolygon, b: &Geometry) -> bool {
    match b {
        Geometry::Ring(r) => mp.0.iter().any(|poly| ring_overlaps_polygon(r, poly)),
        Geometry::Polygon(poly) => {
            mp.0.iter().any(|other| polygons_overlap(poly, other))
        }
        Geometry::MultiPolygon(other) => mp.0.iter().any(|p1| {
            other.0.iter().any(|p2| polygons_overlap(p1, p2))
        }),
        Geometry::Bound(bound) => {
            let rect = bound.to_polygon();
            mp.0.iter().any(|other| polygons_overlap(&rect, other))
        }
        _ => false,
    }
}
