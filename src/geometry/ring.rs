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

/// A closed polyline enclosing a 2D region. By convention the first and
/// last vertices coincide; the engine does not enforce closure and treats
/// the vertex sequence literally. Fewer than four vertices encloses
/// nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring(pub Vec<Point>);

impl Ring {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive vertex pairs, without wrapping back to the start.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn bound(&self) -> Bound {
        Bound::from_points(self.0.iter().copied())
    }

    /// Vertex mean. For the convex-ish rings this engine samples it is a
    /// cheap interior witness; callers always verify membership.
    pub fn centroid(&self) -> Point {
        if self.0.is_empty() {
            return Point::default();
        }
        let (mut sx, mut sy) = (0.0, 0.0);
        for p in &self.0 {
            sx += p.x;
            sy += p.y;
        }
        let n = self.0.len() as f64;
        Point::new(sx / n, sy / n)
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Ring(points)
    }
}
