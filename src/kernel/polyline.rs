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

//! Chain-vs-chain tests: every pairing of segments from two polylines.
//! All of these are O(n * m); the predicate layer bounds them with a
//! bounding-box rejection first.

use crate::geometry::{LineString, Point, Ring};
use crate::kernel::membership::{point_intersects_line_string, ring_contains};
use crate::kernel::segment::{midpoint, point_on_segment, segments_intersect};

/// Any closed intersection between segments of the two linestrings.
pub fn line_strings_intersect(ls1: &LineString, ls2: &LineString) -> bool {
    ls1.segments()
        .any(|(a, b)| ls2.segments().any(|(c, d)| segments_intersect(a, b, c, d)))
}

/// Any closed intersection between the linestring and the ring polyline.
pub fn line_string_intersects_ring(ls: &LineString, r: &Ring) -> bool {
    ls.segments()
        .any(|(a, b)| r.segments().any(|(c, d)| segments_intersect(a, b, c, d)))
}

/// Any closed intersection between the two ring polylines.
pub fn ring_boundaries_intersect(r1: &Ring, r2: &Ring) -> bool {
    r1.segments()
        .any(|(a, b)| r2.segments().any(|(c, d)| segments_intersect(a, b, c, d)))
}

/// Do two rings share any point, boundary or interior? Checks edge
/// contact, then full containment of one ring in the other.
pub fn rings_intersect(r1: &Ring, r2: &Ring) -> bool {
    if ring_boundaries_intersect(r1, r2) {
        return true;
    }
    if let Some(&p) = r1.0.first() {
        if ring_contains(r2, p) {
            return true;
        }
    }
    if let Some(&p) = r2.0.first() {
        if ring_contains(r1, p) {
            return true;
        }
    }
    false
}

/// Does the closed segment `(c1, c2)` contain the whole segment
/// `(s1, s2)`?
pub fn segment_covers_segment(c1: Point, c2: Point, s1: Point, s2: Point) -> bool {
    point_on_segment(s1, c1, c2) && point_on_segment(s2, c1, c2)
}

/// Does segment `(a, b)` lie entirely on the linestring? A single
/// carrier segment suffices; otherwise the segment may span several
/// chain segments, witnessed by both endpoints plus the midpoint.
pub fn segment_covered_by_line_string(a: Point, b: Point, ls: &LineString) -> bool {
    if ls
        .segments()
        .any(|(c, d)| segment_covers_segment(c, d, a, b))
    {
        return true;
    }

    if !point_intersects_line_string(a, ls) || !point_intersects_line_string(b, ls) {
        return false;
    }
    point_intersects_line_string(midpoint(a, b), ls)
}
