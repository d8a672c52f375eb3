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

use crate::geometry::Point;
use crate::kernel::orientation::{cross2d, points_equal, sign, EPS};

/// Midpoint of the segment `(a, b)`.
#[inline(always)]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Does `p` lie on the closed segment `(a, b)`?
///
/// Collinearity to tolerance, then containment in the segment's bounding
/// box with epsilon slack.
pub fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    if cross2d(a, b, p).abs() > EPS {
        return false;
    }

    let (min_x, max_x) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (min_y, max_y) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };

    p.x >= min_x - EPS && p.x <= max_x + EPS && p.y >= min_y - EPS && p.y <= max_y + EPS
}

/// Does `p` lie on segment `(a, b)` strictly between the endpoints?
pub fn point_on_segment_interior(p: Point, a: Point, b: Point) -> bool {
    if points_equal(p, a) || points_equal(p, b) {
        return false;
    }
    point_on_segment(p, a, b)
}

/// Closed intersection test: true for proper crossings, T-junctions,
/// shared endpoints and collinear contact.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = sign(cross2d(p3, p4, p1));
    let d2 = sign(cross2d(p3, p4, p2));
    let d3 = sign(cross2d(p1, p2, p3));
    let d4 = sign(cross2d(p1, p2, p4));

    if ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0)) {
        return true;
    }

    // Endpoint and collinear contact
    (d1 == 0 && point_on_segment(p1, p3, p4))
        || (d2 == 0 && point_on_segment(p2, p3, p4))
        || (d3 == 0 && point_on_segment(p3, p1, p2))
        || (d4 == 0 && point_on_segment(p4, p1, p2))
}

/// Do the segment interiors intersect? True for a proper crossing, or for
/// collinear segments whose overlap has positive length. Contact at
/// endpoints alone does not count.
pub fn segments_intersect_interior(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = sign(cross2d(p3, p4, p1));
    let d2 = sign(cross2d(p3, p4, p2));
    let d3 = sign(cross2d(p1, p2, p3));
    let d4 = sign(cross2d(p1, p2, p4));

    if ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0)) {
        return true;
    }

    if d1 == 0 && d2 == 0 && d3 == 0 && d4 == 0 {
        return segments_overlap_interior(p1, p2, p3, p4);
    }

    false
}

/// Strict straddle test: the segments cross at a single point interior to
/// both. Endpoint contact and collinear overlap are excluded.
pub fn segments_cross_proper(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = sign(cross2d(p3, p4, p1));
    let d2 = sign(cross2d(p3, p4, p2));
    let d3 = sign(cross2d(p1, p2, p3));
    let d4 = sign(cross2d(p1, p2, p4));

    ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0))
}

/// Do both segments lie on the same infinite line, to tolerance?
pub fn segments_are_collinear(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    sign(cross2d(p3, p4, p1)) == 0
        && sign(cross2d(p3, p4, p2)) == 0
        && sign(cross2d(p1, p2, p3)) == 0
        && sign(cross2d(p1, p2, p4)) == 0
}

/// For collinear segments: does the shared portion have positive length?
/// Touching at a single endpoint yields zero overlap and returns false.
pub fn segments_overlap_interior(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    // Project onto the axis with greater extent of (p1, p2)
    let (mut t1, mut t2, mut t3, mut t4) = if (p2.x - p1.x).abs() > (p2.y - p1.y).abs() {
        (p1.x, p2.x, p3.x, p4.x)
    } else {
        (p1.y, p2.y, p3.y, p4.y)
    };

    if t1 > t2 {
        std::mem::swap(&mut t1, &mut t2);
    }
    if t3 > t4 {
        std::mem::swap(&mut t3, &mut t4);
    }

    let overlap_start = t1.max(t3);
    let overlap_end = t2.min(t4);

    overlap_end - overlap_start > EPS
}

/// Midpoint of the 1D overlap of two collinear segments, mapped back onto
/// the carrier line of `(p1, p2)`. Callers must have established collinear
/// overlap first.
pub fn collinear_overlap_midpoint(p1: Point, p2: Point, p3: Point, p4: Point) -> Point {
    let horizontal = (p2.x - p1.x).abs() > (p2.y - p1.y).abs();
    let val = |p: Point| if horizontal { p.x } else { p.y };

    let (mut v1, mut v2) = (val(p1), val(p2));
    let (mut v3, mut v4) = (val(p3), val(p4));
    if v1 > v2 {
        std::mem::swap(&mut v1, &mut v2);
    }
    if v3 > v4 {
        std::mem::swap(&mut v3, &mut v4);
    }

    let mid_val = (v1.max(v3) + v2.min(v4)) / 2.0;

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = if horizontal {
        if dx == 0.0 {
            return p1;
        }
        (mid_val - p1.x) / dx
    } else {
        if dy == 0.0 {
            return p1;
        }
        (mid_val - p1.y) / dy
    };

    Point::new(p1.x + t * dx, p1.y + t * dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proper_crossing() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(10.0, 10.0);
        let p3 = Point::new(0.0, 10.0);
        let p4 = Point::new(10.0, 0.0);
        assert!(segments_intersect(p1, p2, p3, p4));
        assert!(segments_cross_proper(p1, p2, p3, p4));
        assert!(segments_intersect_interior(p1, p2, p3, p4));
    }

    #[test]
    fn shared_endpoint_is_not_proper() {
        let shared = Point::new(5.0, 5.0);
        let p1 = Point::new(0.0, 0.0);
        let p4 = Point::new(10.0, 0.0);
        assert!(segments_intersect(p1, shared, shared, p4));
        assert!(!segments_cross_proper(p1, shared, shared, p4));
    }

    #[test]
    fn collinear_overlap() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(10.0, 0.0);
        let p3 = Point::new(5.0, 0.0);
        let p4 = Point::new(15.0, 0.0);
        assert!(segments_are_collinear(p1, p2, p3, p4));
        assert!(segments_overlap_interior(p1, p2, p3, p4));

        let m = collinear_overlap_midpoint(p1, p2, p3, p4);
        assert_eq!(m, Point::new(7.5, 0.0));
    }

    #[test]
    fn collinear_endpoint_touch_has_no_interior_overlap() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(5.0, 0.0);
        let p3 = Point::new(5.0, 0.0);
        let p4 = Point::new(10.0, 0.0);
        assert!(segments_are_collinear(p1, p2, p3, p4));
        assert!(!segments_overlap_interior(p1, p2, p3, p4));
        assert!(!segments_intersect_interior(p1, p2, p3, p4));
    }

    #[test]
    fn point_on_segment_endpoints_and_interior() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 2.0);
        let mid = Point::new(1.0, 1.0);
        assert!(point_on_segment(a, a, b));
        assert!(point_on_segment(mid, a, b));
        assert!(!point_on_segment(Point::new(3.0, 3.0), a, b));
        assert!(point_on_segment_interior(mid, a, b));
        assert!(!point_on_segment_interior(a, a, b));
        assert!(!point_on_segment_interior(b, a, b));
    }
}
