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

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// An axis‐aligned bounding box in N dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar, const N: usize> {
    pub min: Point<T, N>,
    pub max: Point<T, N>,
}

pub type Aabb3<T> = Aabb<T, 3>;

impl<T: Scalar, const N: usize> Aabb<T, N> {
    pub fn new(min: Point<T, N>, max: Point<T, N>) -> Self {
        Aabb { min, max }
    }

    /// Closed containment: points on a face count as inside.
    pub fn contains(&self, p: &Point<T, N>) -> bool {
        (0..N).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_closed() {
        let bb = Aabb::<f64, 3>::new(
            Point::from_vals([-1.0, 0.0, 0.0]),
            Point::from_vals([1.0, 1.0, 1.0]),
        );
        assert!(bb.contains(&Point::from_vals([1.0, 0.5, 0.0])));
        assert!(!bb.contains(&Point::from_vals([1.0, 0.5, -0.01])));
    }
}
