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

use crate::{
    geometry::{matrix::Matrix4, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Which normal a freshly created vertex stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalPolicy {
    /// Store the caller's normal; derive one from the input winding only when
    /// the caller gives none.
    #[default]
    Supplied,
    /// Always store the normal derived from the input winding, ignoring the
    /// caller's normal for storage. The caller's normal still drives projection.
    FaceWinding,
}

impl NormalPolicy {
    /// Picks the normal to store. `face` is only evaluated when needed.
    pub fn resolve<T: Scalar>(
        self,
        supplied: Option<&Vector3<T>>,
        face: impl FnOnce() -> Vector3<T>,
    ) -> Vector3<T> {
        match (self, supplied) {
            (NormalPolicy::Supplied, Some(n)) => *n,
            _ => face(),
        }
    }
}

/// Settings read at vertex-creation time.
///
/// Passed explicitly into every call that appends vertices, so vertex
/// creation depends on nothing but its arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildConfig<T: Scalar> {
    /// Maps a vertex position to its texture coordinate; the result's `x`
    /// and `y` become `u` and `v`.
    pub uv_transform: Matrix4<T>,
    pub normal_policy: NormalPolicy,
}

impl<T: Scalar> Default for BuildConfig<T> {
    fn default() -> Self {
        BuildConfig {
            uv_transform: Matrix4::identity(),
            normal_policy: NormalPolicy::default(),
        }
    }
}

impl<T: Scalar> BuildConfig<T> {
    pub fn with_uv_transform(mut self, uv_transform: Matrix4<T>) -> Self {
        self.uv_transform = uv_transform;
        self
    }

    /// Shorthand for a uniform scale as the UV transform.
    pub fn with_uv_scale(self, scale: T) -> Self {
        self.with_uv_transform(Matrix4::uniform_scale(scale))
    }

    pub fn with_normal_policy(mut self, normal_policy: NormalPolicy) -> Self {
        self.normal_policy = normal_policy;
        self
    }
}
