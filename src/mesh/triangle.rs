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
    geometry::{matrix::Matrix4, point::Point3, projector::PlaneFrame},
    kernel::predicates::point_in_polygon,
    mesh::vertex::VertexStore,
    numeric::scalar::Scalar,
};

/// Three vertex indices; their order is the winding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.0 == v || self.1 == v || self.2 == v
    }

    #[inline]
    pub fn flipped(&self) -> Triangle {
        Triangle(self.2, self.1, self.0)
    }

    #[inline]
    pub fn offset_by(&self, base: usize) -> Triangle {
        Triangle(self.0 + base, self.1 + base, self.2 + base)
    }

    pub fn positions<'v, T: Scalar>(&self, vertices: &'v VertexStore<T>) -> [&'v Point3<T>; 3] {
        self.vertices().map(|v| vertices.position(v))
    }
}

/// The neighbour found across a directed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OppositeVertex {
    /// Vertex of the neighbour that is not on the shared edge.
    pub vertex: usize,
    /// Offset of the neighbour in its set.
    pub triangle: usize,
    /// Slot (0..3) of the edge's end vertex `b` inside the neighbour.
    pub b_slot: usize,
}

impl OppositeVertex {
    /// Slot of the opposite vertex inside the neighbour.
    pub fn apex_slot(&self) -> usize {
        (self.b_slot + 2) % 3
    }
}

/// An ordered list of triangles over a shared [`VertexStore`] (a "submesh").
///
/// Triangles are addressed by offset. Any removal or insertion may shift
/// offsets, so an offset returned by a query is only good until the next
/// mutation of the same set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangleSet {
    triangles: Vec<Triangle>,
}

impl TriangleSet {
    pub fn new() -> Self {
        TriangleSet {
            triangles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<Triangle> {
        self.triangles.get(offset).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn as_slice(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn push(&mut self, t: Triangle) {
        self.triangles.push(t);
    }

    /// Removes and returns the triangle at `offset`, keeping the order of the rest.
    ///
    /// Panics if `offset` is out of range.
    pub fn remove(&mut self, offset: usize) -> Triangle {
        self.triangles.remove(offset)
    }

    /// Moves every triangle of `other` to the end of this set.
    pub fn append(&mut self, other: &mut TriangleSet) {
        self.triangles.append(&mut other.triangles);
    }

    /// Removes the triangles `take` selects and returns them in their original order.
    pub fn extract_if(&mut self, mut take: impl FnMut(&Triangle) -> bool) -> Vec<Triangle> {
        let mut taken = Vec::new();
        self.triangles.retain(|t| {
            if take(t) {
                taken.push(*t);
                false
            } else {
                true
            }
        });
        taken
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// Flattened `[a0, b0, c0, a1, b1, c1, ...]` index list.
    pub fn flat_indices(&self) -> Vec<usize> {
        self.triangles.iter().flat_map(|t| t.vertices()).collect()
    }

    /// Sorted, deduplicated vertex indices used by this set.
    pub fn vertex_indices(&self) -> Vec<usize> {
        let mut out = self.flat_indices();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// First triangle that uses every vertex of `required` and none of `excluded`.
    pub fn find_containing(&self, required: &[usize], excluded: &[usize]) -> Option<usize> {
        self.triangles.iter().position(|t| {
            required.iter().all(|&v| t.contains(v)) && !excluded.iter().any(|&v| t.contains(v))
        })
    }

    /// Finds the neighbour across the directed edge `a → b`.
    ///
    /// With consistent winding the neighbour holds the edge as `b → a`, so
    /// that is what is matched, in any rotation. `None` means `a → b` is a
    /// boundary edge of this set.
    pub fn find_opposite(&self, a: usize, b: usize) -> Option<OppositeVertex> {
        self.triangles.iter().enumerate().find_map(|(offset, t)| {
            let vs = t.vertices();
            (0..3).find_map(|slot| {
                if vs[slot] == b && vs[(slot + 1) % 3] == a {
                    Some(OppositeVertex {
                        vertex: vs[(slot + 2) % 3],
                        triangle: offset,
                        b_slot: slot,
                    })
                } else {
                    None
                }
            })
        })
    }

    /// First triangle whose projection through `transform` contains the
    /// projection of `point`.
    ///
    /// Only local `x` and `y` are compared, so the transform should map the
    /// plane of interest onto the local XY plane.
    pub fn locate_point<T: Scalar>(
        &self,
        vertices: &VertexStore<T>,
        point: &Point3<T>,
        transform: &Matrix4<T>,
    ) -> Option<usize> {
        let frame = PlaneFrame::from_transform(*transform);
        let target = frame.project(point);
        self.triangles.iter().position(|t| {
            let flat = t.positions(vertices).map(|p| frame.project(p));
            point_in_polygon(&flat, &target)
        })
    }
}

impl<'a> IntoIterator for &'a TriangleSet {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

impl FromIterator<Triangle> for TriangleSet {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        TriangleSet {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triangle> for TriangleSet {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}
