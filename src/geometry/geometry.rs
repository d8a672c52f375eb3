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
    Bound, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Ring,
};

/// The closed sum over every supported geometry variant. All predicates
/// dispatch exhaustively on this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Ring(Ring),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    Collection(Collection),
    Bound(Bound),
}

/// A heterogeneous sequence of geometries. Predicates dispatch
/// member-wise; the boundary is approximated by the union of member
/// boundaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection(pub Vec<Geometry>);

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bound(&self) -> Bound {
        self.0
            .iter()
            .fold(Bound::EMPTY, |b, g| b.union(&g.bound()))
    }
}

/// Topological dimension of a geometry. `Empty` only arises for an empty
/// collection; the other variants have a fixed dimension regardless of
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dimension {
    Empty,
    Zero,
    One,
    Two,
}

impl Geometry {
    /// Axis-aligned bounding rectangle; [`Bound::EMPTY`] for empty
    /// geometries.
    pub fn bound(&self) -> Bound {
        match self {
            Geometry::Point(p) => p.bound(),
            Geometry::MultiPoint(mp) => mp.bound(),
            Geometry::LineString(ls) => ls.bound(),
            Geometry::MultiLineString(mls) => mls.bound(),
            Geometry::Ring(r) => r.bound(),
            Geometry::Polygon(poly) => poly.bound(),
            Geometry::MultiPolygon(mp) => mp.bound(),
            Geometry::Collection(c) => c.bound(),
            Geometry::Bound(b) => *b,
        }
    }

    /// An empty geometry fails every predicate except `disjoint`.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::MultiPoint(mp) => mp.is_empty(),
            Geometry::LineString(ls) => ls.is_empty(),
            Geometry::MultiLineString(mls) => mls.is_empty(),
            Geometry::Ring(r) => r.is_empty(),
            Geometry::Polygon(poly) => poly.is_empty(),
            Geometry::MultiPolygon(mp) => mp.is_empty(),
            Geometry::Collection(c) => c.is_empty(),
            Geometry::Bound(b) => b.is_empty(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => Dimension::Zero,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => Dimension::One,
            Geometry::Ring(_)
            | Geometry::Polygon(_)
            | Geometry::MultiPolygon(_)
            | Geometry::Bound(_) => Dimension::Two,
            Geometry::Collection(c) => c
                .0
                .iter()
                .map(Geometry::dimension)
                .max()
                .unwrap_or(Dimension::Empty),
        }
    }
}

impl From<Point> for Geometry {
    fn from(g: Point) -> Self {
        Geometry::Point(g)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(g: MultiPoint) -> Self {
        Geometry::MultiPoint(g)
    }
}

impl From<LineString> for Geometry {
    fn from(g: LineString) -> Self {
        Geometry::LineString(g)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(g: MultiLineString) -> Self {
        Geometry::MultiLineString(g)
    }
}

impl From<Ring> for Geometry {
    fn from(g: Ring) -> Self {
        Geometry::Ring(g)
    }
}

impl From<Polygon> for Geometry {
    fn from(g: Polygon) -> Self {
        Geometry::Polygon(g)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(g: MultiPolygon) -> Self {
        Geometry::MultiPolygon(g)
    }
}

impl From<Collection> for Geometry {
    fn from(g: Collection) -> Self {
        Geometry::Collection(g)
    }
}

impl From<Bound> for Geometry {
    fn from(g: Bound) -> Self {
        Geometry::Bound(g)
    }
}
