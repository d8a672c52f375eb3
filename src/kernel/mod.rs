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

pub mod membership;
pub mod orientation;
pub mod polyline;
pub mod segment;

pub use membership::{
    point_in_line_string_interior, point_in_polygon_interior, point_in_ring_interior,
    point_intersects_line_string, point_on_polygon_boundary, point_on_ring_boundary,
    polygon_contains, ring_contains,
};
pub use orientation::{cross2d, points_equal, sign, EPS};
pub use polyline::{
    line_string_intersects_ring, line_strings_intersect, ring_boundaries_intersect,
    rings_intersect, segment_covered_by_line_string, segment_covers_segment,
};
pub use segment::{
    collinear_overlap_midpoint, midpoint, point_on_segment, point_on_segment_interior,
    segments_are_collinear, segments_cross_proper, segments_intersect,
    segments_intersect_interior, segments_overlap_interior,
};
