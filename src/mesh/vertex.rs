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

use std::ops::Range;

use crate::{
    geometry::{
        point::{Point2, Point3},
        vector::Vector3,
    },
    mesh::config::BuildConfig,
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex<T: Scalar> {
    pub position: Point3<T>,
    /// Stored as given; never normalized here.
    pub normal: Vector3<T>,
    pub uv: Point2<T>,
}

impl<T: Scalar> Vertex<T> {
    /// UV comes from the config's transform applied to `position`.
    pub fn new(position: Point3<T>, normal: Vector3<T>, config: &BuildConfig<T>) -> Self {
        Vertex {
            position,
            normal,
            uv: config.uv_transform.transform_point(&position).xy(),
        }
    }
}

/// Append-only vertex pool shared by every submesh.
///
/// A vertex index stays valid until the whole store is cleared.
#[derive(Clone, Debug, Default)]
pub struct VertexStore<T: Scalar> {
    vertices: Vec<Vertex<T>>,
}

impl<T: Scalar> VertexStore<T> {
    pub fn new() -> Self {
        VertexStore {
            vertices: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Vertex<T>> {
        self.vertices.get(index)
    }

    /// Position of vertex `index`.
    ///
    /// Panics on an out-of-range index, like slice indexing.
    pub fn position(&self, index: usize) -> &Point3<T> {
        &self.vertices[index].position
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    pub fn push(&mut self, position: Point3<T>, normal: Vector3<T>, config: &BuildConfig<T>) -> usize {
        self.vertices.push(Vertex::new(position, normal, config));
        self.vertices.len() - 1
    }

    /// Appends `points` sharing one normal and returns their index range.
    pub fn extend(
        &mut self,
        points: &[Point3<T>],
        normal: &Vector3<T>,
        config: &BuildConfig<T>,
    ) -> Range<usize> {
        let start = self.vertices.len();
        self.vertices.extend(points.iter().map(|p| Vertex::new(*p, *normal, config)));
        start..self.vertices.len()
    }

    pub(crate) fn clear(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::matrix::Matrix4;

    #[test]
    fn uv_follows_config_transform() {
        let config = BuildConfig::<f64>::default().with_uv_transform(Matrix4::uniform_scale(2.0));
        let mut store = VertexStore::new();
        let i = store.push(
            Point3::from_vals([1.0, 0.5, 7.0]),
            Vector3::from_vals([0.0, 0.0, 1.0]),
            &config,
        );
        assert_eq!(i, 0);
        assert_eq!(store.get(0).map(|v| v.uv), Some(Point2::from_vals([2.0, 1.0])));
    }

    #[test]
    fn extend_reports_new_range() {
        let config = BuildConfig::<f64>::default();
        let mut store = VertexStore::new();
        let pts = [Point3::from_vals([0.0, 0.0, 0.0]); 3];
        let n = Vector3::from_vals([0.0, 0.0, 1.0]);
        assert_eq!(store.extend(&pts, &n, &config), 0..3);
        assert_eq!(store.extend(&pts[..2], &n, &config), 3..5);
        assert_eq!(store.len(), 5);
    }
}
