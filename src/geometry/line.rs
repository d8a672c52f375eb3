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

use crate::geometry::{Bound, Point};

/// A polyline: consecutive vertices joined by straight segments. Needs at
/// least two points to carry any length; shorter linestrings behave as
/// empty in every predicate.
///
/// The two end vertices form the boundary; open segments plus interior
/// vertices form the interior.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Point>);

impl LineString {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn bound(&self) -> Bound {
        Bound::from_points(self.0.iter().copied())
    }
}

impl From<Vec<Point>> for LineString {
    fn from(points: Vec<Point>) -> Self {
        LineString(points)
    }
}

/// A sequence of linestrings. The boundary is approximated by the union
/// of the component boundaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bound(&self) -> Bound {
        self.0
            .iter()
            .fold(Bound::EMPTY, |b, ls| b.union(&ls.bound()))
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(lines: Vec<LineString>) -> Self {
        MultiLineString(lines)
    }
}
