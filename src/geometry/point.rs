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

use std::{
    array,
    ops::{Add, Index, IndexMut, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// A position in `N`-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: array::from_fn(|_| T::zero()),
        }
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Point<T, N> {
        Point { coords }
    }

    /// Builds a point from `f64` literals, converting into `T`.
    pub fn from_vals(vals: [f64; N]) -> Point<T, N> {
        Point {
            coords: vals.map(T::from_f64),
        }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    pub fn as_vector(&self) -> Vector<T, N> {
        Vector::new(self.coords)
    }

    pub fn distance_to(&self, other: &Self) -> T {
        (other - self).norm_squared().sqrt()
    }
}

impl<T: Scalar> Point<T, 3> {
    /// Drops the third coordinate.
    pub fn xy(&self) -> Point<T, 2> {
        Point::new([self.coords[0], self.coords[1]])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        Vector::new(array::from_fn(|i| self.coords[i] - rhs.coords[i]))
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        <&Point<T, N> as Sub<&Point<T, N>>>::sub(&self, &rhs)
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Vector<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Vector<T, N>) -> Self::Output {
        Point {
            coords: array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        &self + &rhs
    }
}
