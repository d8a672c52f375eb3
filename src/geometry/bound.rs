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

use crate::geometry::{Point, Polygon, Ring};
use crate::kernel::EPS;

/// An axis-aligned bounding rectangle. For predicate purposes it behaves
/// like the rectangular polygon returned by [`Bound::to_polygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: Point,
    pub max: Point,
}

impl Bound {
    /// The empty bound. Inverted on both axes so it fails every overlap
    /// and containment test.
    pub const EMPTY: Bound = Bound {
        min: Point {
            x: f64::INFINITY,
            y: f64::INFINITY,
        },
        max: Point {
            x: f64::NEG_INFINITY,
            y: f64::NEG_INFINITY,
        },
    };

    pub fn new(min: Point, max: Point) -> Self {
        Bound { min, max }
    }

    /// Smallest bound enclosing every point of the iterator; `EMPTY` for
    /// an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut b = Bound::EMPTY;
        for p in points {
            b.extend(p);
        }
        b
    }

    pub fn extend(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(&self, other: &Bound) -> Bound {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Bound {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn center(&self) -> Point {
        Point::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }

    /// Exact closed-rectangle test, no tolerance. The membership kernel
    /// uses this as a pre-filter; predicate code wants the tolerant
    /// variants below.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Closed-rectangle test with epsilon slack on all four sides.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x - EPS
            && p.x <= self.max.x + EPS
            && p.y >= self.min.y - EPS
            && p.y <= self.max.y + EPS
    }

    /// Strict interior test: inside by more than epsilon on every side.
    pub fn contains_point_interior(&self, p: Point) -> bool {
        p.x > self.min.x + EPS
            && p.x < self.max.x - EPS
            && p.y > self.min.y + EPS
            && p.y < self.max.y - EPS
    }

    /// Is `p` within epsilon of one of the four sides while inside the
    /// closed rectangle?
    pub fn point_on_boundary(&self, p: Point) -> bool {
        if !self.contains_point(p) {
            return false;
        }
        (p.x - self.min.x).abs() < EPS
            || (p.x - self.max.x).abs() < EPS
            || (p.y - self.min.y).abs() < EPS
            || (p.y - self.max.y).abs() < EPS
    }

    /// Do the two rectangles overlap, with epsilon slack?
    pub fn overlaps(&self, other: &Bound) -> bool {
        self.min.x <= other.max.x + EPS
            && self.max.x >= other.min.x - EPS
            && self.min.y <= other.max.y + EPS
            && self.max.y >= other.min.y - EPS
    }

    /// The equivalent rectangular polygon, wound counter-clockwise and
    /// closed.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(Ring(vec![
            Point::new(self.min.x, self.min.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.min.x, self.max.y),
            Point::new(self.min.x, self.min.y),
        ]))
    }
}
