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

//! Planar topological predicates over Simple Features geometries.
//!
//! This crate implements the nine OGC / DE-9IM named predicates
//! ([`within`], [`contains`], [`covers`], [`covered_by`], [`intersects`],
//! [`disjoint`], [`crosses`], [`overlaps`], [`touches`]) for every ordered
//! pair of the supported geometry variants: `Point`, `MultiPoint`,
//! `LineString`, `MultiLineString`, `Ring`, `Polygon`, `MultiPolygon`,
//! `Bound` and `Collection`.
//!
//! All arithmetic is planar Cartesian `f64` with a single absolute
//! tolerance ([`kernel::EPS`]). Every predicate is a total function: it
//! returns a boolean for any pair of finite-coordinate geometries,
//! including empty and degenerate ones.
//!
//! ```
//! use planar_relate::{contains, within, Geometry, Point, Polygon, Ring};
//!
//! let square = Geometry::from(Polygon::new(Ring(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(0.0, 0.0),
//! ])));
//! let p = Geometry::from(Point::new(5.0, 5.0));
//!
//! assert!(within(&p, &square));
//! assert!(contains(&square, &p));
//! ```

pub mod geometry;
pub mod kernel;
pub mod predicates;

pub use geometry::{
    Bound, Collection, Dimension, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Ring,
};
pub use predicates::{
    contains, covered_by, covers, crosses, disjoint, interiors_intersect, intersects, overlaps,
    predicate_by_name, touches, within, PredicateFn,
};
