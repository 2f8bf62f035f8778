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

use crate::{geometry::point::Point2, numeric::scalar::Scalar};

/// Shoelace area of a closed 2D loop, positive when counter-clockwise.
pub fn signed_area<T: Scalar>(poly: &[Point2<T>]) -> T {
    let n = poly.len();
    if n < 3 {
        return T::zero();
    }
    let mut sum = T::zero();
    for i in 0..n {
        let a = &poly[i];
        let b = &poly[(i + 1) % n];
        sum = sum + (a[0] * b[1] - b[0] * a[1]);
    }
    sum * T::from_num_den(1, 2)
}

/// Even-odd crossing test against the XY coordinates of a closed loop.
///
/// Points exactly on an edge may land on either side.
pub fn point_in_polygon<T: Scalar>(poly: &[Point2<T>], p: &Point2<T>) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&poly[i], &poly[j]);
        if (pi[1] > p[1]) != (pj[1] > p[1]) {
            let x_cross = (pj[0] - pi[0]) * (p[1] - pi[1]) / (pj[1] - pi[1]) + pi[0];
            if p[0] < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
