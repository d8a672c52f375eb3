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

use smallvec::SmallVec;

use crate::geometry::{Bound, Ring};

/// An area bounded by one exterior ring and zero or more hole rings.
/// Interior = inside the exterior and outside every hole; boundary = the
/// union of all ring polylines. Ring orientation is not required.
///
/// Rings are stored inline for the hole-free common case, so a polygon
/// synthesized on the fly (e.g. from a [`Bound`]) costs a single ring
/// allocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub rings: SmallVec<[Ring; 1]>,
}

impl Polygon {
    pub fn new(exterior: Ring) -> Self {
        let mut rings = SmallVec::new();
        rings.push(exterior);
        Polygon { rings }
    }

    pub fn with_holes(exterior: Ring, holes: impl IntoIterator<Item = Ring>) -> Self {
        let mut rings = SmallVec::new();
        rings.push(exterior);
        rings.extend(holes);
        Polygon { rings }
    }

    pub fn exterior(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[Ring] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }

    pub fn is_empty(&self) -> bool {
        match self.rings.first() {
            Some(exterior) => exterior.is_empty(),
            None => true,
        }
    }

    pub fn bound(&self) -> Bound {
        match self.exterior() {
            Some(exterior) => exterior.bound(),
            None => Bound::EMPTY,
        }
    }
}

/// A set of polygons whose interiors should not overlap (not validated).
/// Interior and boundary are the unions of the component interiors and
/// boundaries; components may touch at points or share edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bound(&self) -> Bound {
        self.0
            .iter()
            .fold(Bound::EMPTY, |b, poly| b.union(&poly.bound()))
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        MultiPolygon(polygons)
    }
}
