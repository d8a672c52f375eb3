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

/// The single absolute tolerance used by every comparison in the engine.
/// Swapping in exact orientation predicates would not change any caller.
pub const EPS: f64 = 1e-10;

/// Sign of `x` with an epsilon dead zone around zero.
#[inline(always)]
pub fn sign(x: f64) -> i32 {
    if x < -EPS {
        -1
    } else if x > EPS {
        1
    } else {
        0
    }
}

/// Cross product of the vectors `p2 - p1` and `p3 - p1`.
///
/// Returns:
/// - >0 if p3 is left of p1 -> p2 (counter-clockwise)
/// - <0 if p3 is right of p1 -> p2 (clockwise)
/// - ~0 if collinear
#[inline(always)]
pub fn cross2d(p1: Point, p2: Point, p3: Point) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

/// Componentwise equality to tolerance.
#[inline(always)]
pub fn points_equal(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_dead_zone() {
        assert_eq!(sign(1e-12), 0);
        assert_eq!(sign(-1e-12), 0);
        assert_eq!(sign(1e-9), 1);
        assert_eq!(sign(-1e-9), -1);
    }

    #[test]
    fn cross2d_orientation() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert!(cross2d(a, b, c) > 0.0); // counter-clockwise
        assert!(cross2d(a, c, b) < 0.0); // clockwise
        assert_eq!(cross2d(a, b, Point::new(2.0, 0.0)), 0.0);
    }

}
