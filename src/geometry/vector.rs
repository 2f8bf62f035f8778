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
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

use crate::numeric::scalar::Scalar;

/// A displacement in `N`-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    type Cross;

    fn dot(&self, other: &Self) -> T;
    fn cross(&self, other: &Self) -> Self::Cross;
    fn norm(&self) -> T;
    fn normalized(&self) -> Self;
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Vector::zero()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Vector { coords }
    }

    pub fn from_vals(vals: [f64; N]) -> Self {
        Vector {
            coords: vals.map(T::from_f64),
        }
    }

    pub fn zero() -> Self {
        Vector {
            coords: array::from_fn(|_| T::zero()),
        }
    }

    pub fn scale(&self, s: T) -> Self {
        Vector {
            coords: self.coords.map(|c| c * s),
        }
    }

    pub fn norm_squared(&self) -> T {
        self.coords.iter().fold(T::zero(), |acc, &c| acc + c * c)
    }

    /// Unsigned angle to `other` in degrees, in `[0, 180]`.
    ///
    /// Zero-length inputs give `0`.
    pub fn angle_deg(&self, other: &Self) -> T {
        let denom = (self.norm_squared() * other.norm_squared()).sqrt();
        if denom <= T::tolerance() * T::tolerance() {
            return T::zero();
        }
        let cos = self.dot_n(other) / denom;
        cos.max(-T::one()).min(T::one()).acos().to_degrees()
    }

    fn dot_n(&self, other: &Self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.coords[i] * other.coords[i])
    }
}

impl<T: Scalar> VectorOps<T, 2> for Vector<T, 2> {
    /// z component of the 3D cross product.
    type Cross = T;

    fn dot(&self, other: &Self) -> T {
        self.dot_n(other)
    }

    fn cross(&self, other: &Self) -> T {
        self[0] * other[1] - self[1] * other[0]
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        Vector::new([self[0] / n, self[1] / n])
    }
}

impl<T: Scalar> VectorOps<T, 3> for Vector<T, 3> {
    type Cross = Vector<T, 3>;

    fn dot(&self, other: &Self) -> T {
        self.dot_n(other)
    }

    fn cross(&self, other: &Self) -> Vector<T, 3> {
        Vector::new([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        Vector::new([self[0] / n, self[1] / n, self[2] / n])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: &'b Vector<T, N>) -> Self::Output {
        Vector::new(array::from_fn(|i| self.coords[i] + rhs.coords[i]))
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        &self + &rhs
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Vector<T, N>) -> Self::Output {
        Vector::new(array::from_fn(|i| self.coords[i] - rhs.coords[i]))
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        Vector::new(self.coords.map(|c| -c))
    }
}
