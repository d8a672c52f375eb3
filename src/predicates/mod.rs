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

//! The nine topological predicates.
//!
//! Each predicate is a two-level dispatch: first on the variant of `a`,
//! then on the variant of `b`, bottoming out in the kernel primitives.
//! Four predicates are algebraic reductions of the others:
//!
//! - `contains(a, b) = within(b, a)`
//! - `covered_by(a, b) = covers(b, a)`
//! - `disjoint(a, b) = !intersects(a, b)`
//! - `touches(a, b) = intersects(a, b) && !interiors_intersect(a, b)`

mod covers;
mod crosses;
mod interior;
mod intersects;
mod overlaps;
mod touches;
mod within;

pub use covers::{covered_by, covers};
pub use crosses::crosses;
pub use interior::interiors_intersect;
pub use intersects::{disjoint, intersects};
pub use overlaps::overlaps;
pub use touches::touches;
pub use within::{contains, within};

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::geometry::Geometry;

/// The common shape of every predicate entry point.
pub type PredicateFn = fn(&Geometry, &Geometry) -> bool;

static BY_NAME: Lazy<AHashMap<&'static str, PredicateFn>> = Lazy::new(|| {
    let mut m: AHashMap<&'static str, PredicateFn> = AHashMap::with_capacity(9);
    m.insert("within", within);
    m.insert("contains", contains);
    m.insert("covers", covers);
    m.insert("coveredby", covered_by);
    m.insert("intersects", intersects);
    m.insert("disjoint", disjoint);
    m.insert("crosses", crosses);
    m.insert("overlaps", overlaps);
    m.insert("touches", touches);
    m
});

/// Case-insensitive predicate lookup, as used by fixture harnesses:
/// `"Intersects"`, `"coveredBy"` and `"COVERS"` all resolve. Returns
/// `None` for unsupported operation names.
pub fn predicate_by_name(name: &str) -> Option<PredicateFn> {
    BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
}
