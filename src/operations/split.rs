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

use tracing::debug;

use crate::{
    geometry::{
        point::Point3,
        projector::{PlaneFrame, polygon_normal},
        vector::Vector3,
    },
    mesh::{
        config::BuildConfig,
        triangle::{Triangle, TriangleSet},
        vertex::VertexStore,
    },
    numeric::scalar::Scalar,
};

/// Inserts `point` into the triangle of `set` that contains it, splitting
/// that triangle into three that share the new vertex.
///
/// The search compares XY coordinates in a frame centered on `point` with
/// identity orientation. The split keeps the original winding: `(a, b, c)`
/// becomes `(a, b, p)`, `(b, c, p)`, `(c, a, p)`, appended at the end of the
/// set. Returns the new vertex index, or `None` (and changes nothing) when
/// no triangle contains the point.
pub fn split_at<T: Scalar>(
    vertices: &mut VertexStore<T>,
    set: &mut TriangleSet,
    point: &Point3<T>,
    normal: &Vector3<T>,
    config: &BuildConfig<T>,
) -> Option<usize> {
    let frame = PlaneFrame::centered_at(point);
    let Some(offset) = set.locate_point(vertices, point, frame.transform()) else {
        debug!(?point, "split point lies outside every triangle");
        return None;
    };

    let Triangle(a, b, c) = set.remove(offset);
    let stored_normal = config.normal_policy.resolve(Some(normal), || {
        polygon_normal(&[a, b, c].map(|v| *vertices.position(v)))
    });
    let p = vertices.push(*point, stored_normal, config);
    set.extend([Triangle(a, b, p), Triangle(b, c, p), Triangle(c, a, p)]);
    Some(p)
}
