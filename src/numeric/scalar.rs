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

use num_traits::Float;

use std::fmt::Debug;

/// Floating-point coordinate type used by every geometric routine in the crate.
///
/// Arithmetic comes from [`num_traits::Float`]; the extra items pin down the
/// degeneracy tolerance and a lossless-enough way to lift `f64` literals into
/// the scalar.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Lengths at or below this count as zero.
    fn tolerance() -> Self;

    fn from_f64(value: f64) -> Self;

    fn to_f64_lossy(self) -> f64;

    fn from_num_den(num: i32, den: i32) -> Self {
        Self::from_f64(num as f64 / den as f64)
    }
}

impl Scalar for f64 {
    fn tolerance() -> Self {
        1e-10
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    fn tolerance() -> Self {
        1e-6
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}
