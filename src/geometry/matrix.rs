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
    ops::{Index, IndexMut, Mul},
};

use crate::{
    geometry::{
        point::Point,
        vector::{Vector, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Generic row-major matrix R x C
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize>(pub [[T; C]; R]);

pub type Matrix4<T> = Matrix<T, 4, 4>;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    #[inline]
    pub fn identity() -> Self {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| if i == j { T::one() } else { T::zero() })
        }))
    }
}

// ---------- Affine transforms ----------
impl<T: Scalar> Matrix<T, 4, 4> {
    pub fn translation(offset: &Vector<T, 3>) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            m[i][3] = offset[i];
        }
        m
    }

    /// Uniform scale about the origin.
    pub fn uniform_scale(s: T) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            m[i][i] = s;
        }
        m
    }

    /// Local-to-world transform whose columns are the given axes, placed at `origin`.
    pub fn from_axes(
        origin: &Point<T, 3>,
        x_axis: &Vector<T, 3>,
        y_axis: &Vector<T, 3>,
        z_axis: &Vector<T, 3>,
    ) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            m[i][0] = x_axis[i];
            m[i][1] = y_axis[i];
            m[i][2] = z_axis[i];
            m[i][3] = origin[i];
        }
        m
    }

    /// Inverse of a rigid transform (orthonormal rotation plus translation).
    ///
    /// Only valid when the upper 3x3 block is orthonormal.
    pub fn rigid_inverse(&self) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = self[j][i];
            }
        }
        for i in 0..3 {
            let mut t = T::zero();
            for j in 0..3 {
                t = t - m[i][j] * self[j][3];
            }
            m[i][3] = t;
        }
        m
    }

    /// Rotation whose local `+z` looks along `forward` with local `+y` as close to `up`
    /// as the constraint allows.
    ///
    /// `forward` must be non-zero and not parallel to `up`.
    pub fn look_rotation(forward: &Vector<T, 3>, up: &Vector<T, 3>) -> Self {
        let z = forward.normalized();
        let y = (up - &z.scale(up.dot(&z))).normalized();
        let x = y.cross(&z);
        Self::from_axes(&Point::default(), &x, &y, &z)
    }

    /// Applies the full affine transform (`w = 1`).
    pub fn transform_point(&self, p: &Point<T, 3>) -> Point<T, 3> {
        Point::new(array::from_fn(|i| {
            self[i][0] * p[0] + self[i][1] * p[1] + self[i][2] * p[2] + self[i][3]
        }))
    }
}

impl<T: Scalar> Default for Matrix<T, 4, 4> {
    fn default() -> Self {
        Self::identity()
    }
}

// ---------- Indexing ----------
impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}
impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ---------- Product ----------
impl<'a, 'b, T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&'b Matrix<T, K, C>>
    for &'a Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: &'b Matrix<T, K, C>) -> Self::Output {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| (0..K).fold(T::zero(), |acc, k| acc + self[i][k] * rhs[k][j]))
        }))
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rigid_inverse_undoes_transform() {
        let rot = Matrix4::<f64>::look_rotation(
            &Vector::from_vals([0.0, 1.0, 1.0]),
            &Vector::from_vals([1.0, 0.0, 0.0]),
        );
        let m = &Matrix4::translation(&Vector::from_vals([3.0, -2.0, 5.0])) * &rot;
        let p = Point::from_vals([0.25, 4.0, -1.5]);
        let back = m.rigid_inverse().transform_point(&m.transform_point(&p));
        for i in 0..3 {
            assert!((back[i] - p[i]).abs() < 1e-9);
        }
    }
}
