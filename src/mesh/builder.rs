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

use std::io::Write;

use tracing::debug;

use crate::{
    error::{MeshBuildError, Result},
    geometry::{
        aabb::Aabb3,
        matrix::Matrix4,
        point::Point3,
        projector::polygon_normal,
        vector::Vector3,
    },
    io::obj::write_obj,
    mesh::{
        config::BuildConfig,
        triangle::{OppositeVertex, Triangle, TriangleSet},
        vertex::VertexStore,
    },
    numeric::scalar::Scalar,
    operations::{
        split::split_at,
        triangulation::{FlipReport, optimize, triangulate_polygon},
    },
};

/// Flat arrays handed to a renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData<T: Scalar> {
    pub positions: Vec<[T; 3]>,
    pub normals: Vec<[T; 3]>,
    pub uvs: Vec<[T; 2]>,
    /// One flat `3 * n` index list per submesh.
    pub submeshes: Vec<Vec<usize>>,
}

/// Incremental mesh authoring over one shared vertex pool and any number of
/// triangle sets ("submeshes").
///
/// Editing operations act on the active submesh, which is created on first
/// use. Vertices are append-only until [`MeshBuilder::clear`].
///
/// Every mutating method takes `&mut self`; a builder shared between threads
/// must be wrapped in a lock by the caller.
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder<T: Scalar> {
    config: BuildConfig<T>,
    vertices: VertexStore<T>,
    submeshes: Vec<TriangleSet>,
    active: usize,
}

impl<T: Scalar> MeshBuilder<T> {
    pub fn new() -> Self {
        Self::with_config(BuildConfig::default())
    }

    pub fn with_config(config: BuildConfig<T>) -> Self {
        MeshBuilder {
            config,
            vertices: VertexStore::new(),
            submeshes: Vec::new(),
            active: 0,
        }
    }

    pub fn config(&self) -> &BuildConfig<T> {
        &self.config
    }

    /// Affects vertices created from now on only.
    pub fn set_config(&mut self, config: BuildConfig<T>) {
        self.config = config;
    }

    /// Drops all vertices and submeshes and resets the active submesh to 0.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.submeshes.clear();
        self.active = 0;
    }

    pub fn vertices(&self) -> &VertexStore<T> {
        &self.vertices
    }

    // ---------- Submeshes ----------

    /// Appends an empty submesh and returns its index. The active submesh is unchanged.
    pub fn new_submesh(&mut self) -> usize {
        self.submeshes.push(TriangleSet::new());
        self.submeshes.len() - 1
    }

    pub fn set_active_submesh(&mut self, index: usize) {
        self.active = index;
    }

    pub fn active_submesh(&self) -> usize {
        self.active
    }

    pub fn submesh(&self, index: usize) -> Option<&TriangleSet> {
        self.submeshes.get(index)
    }

    pub fn submeshes(&self) -> &[TriangleSet] {
        &self.submeshes
    }

    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Submesh `slot`, creating empty ones up to it.
    fn submesh_mut(&mut self, slot: usize) -> &mut TriangleSet {
        if self.submeshes.len() <= slot {
            self.submeshes.resize_with(slot + 1, TriangleSet::new);
        }
        &mut self.submeshes[slot]
    }

    /// Vertex store and active submesh, borrowed together.
    fn active_parts(&mut self) -> (&mut VertexStore<T>, &mut TriangleSet, &BuildConfig<T>) {
        let active = self.active;
        if self.submeshes.len() <= active {
            self.submeshes.resize_with(active + 1, TriangleSet::new);
        }
        (&mut self.vertices, &mut self.submeshes[active], &self.config)
    }

    // ---------- Insertion ----------

    /// Ear-clips a closed loop into the active submesh.
    ///
    /// `points` should wind counter-clockwise about `normal`; `flip_winding`
    /// reverses every emitted triangle. Returns the number of triangles added.
    pub fn add_polygon(
        &mut self,
        points: &[Point3<T>],
        normal: &Vector3<T>,
        flip_winding: bool,
    ) -> Result<usize> {
        let (vertices, set, config) = self.active_parts();
        triangulate_polygon(vertices, set, points, normal, flip_winding, config)
    }

    /// Adds a triangle with its own three vertices.
    pub fn add_tri(&mut self, p1: Point3<T>, p2: Point3<T>, p3: Point3<T>) {
        let normal = polygon_normal(&[p1, p2, p3]);
        let (vertices, set, config) = self.active_parts();
        let base = vertices.extend(&[p1, p2, p3], &normal, config).start;
        set.push(Triangle(0, 1, 2).offset_by(base));
    }

    /// Adds a quad as the fan `(0, 1, 2)`, `(0, 2, 3)` with four new vertices.
    ///
    /// Without a `normal` the stored normal comes from the quad's winding.
    pub fn add_quad(&mut self, corners: [Point3<T>; 4], normal: Option<&Vector3<T>>) {
        let normal = self
            .config
            .normal_policy
            .resolve(normal, || polygon_normal(&corners));
        self.add_quad_with_normals(corners, [normal; 4]);
    }

    /// Like [`MeshBuilder::add_quad`], storing one normal per corner as given.
    pub fn add_quad_with_normals(&mut self, corners: [Point3<T>; 4], normals: [Vector3<T>; 4]) {
        let (vertices, set, config) = self.active_parts();
        let base = vertices.len();
        for (p, n) in corners.into_iter().zip(normals) {
            vertices.push(p, n, config);
        }
        set.push(Triangle(0, 1, 2).offset_by(base));
        set.push(Triangle(0, 2, 3).offset_by(base));
    }

    // ---------- Queries on the active submesh ----------

    pub fn find_triangle(&self, required: &[usize], excluded: &[usize]) -> Option<usize> {
        self.submesh(self.active)?.find_containing(required, excluded)
    }

    pub fn find_opposite(&self, a: usize, b: usize) -> Option<OppositeVertex> {
        self.submesh(self.active)?.find_opposite(a, b)
    }

    pub fn locate_point(&self, point: &Point3<T>, transform: &Matrix4<T>) -> Option<usize> {
        self.submesh(self.active)?
            .locate_point(&self.vertices, point, transform)
    }

    // ---------- Editing ----------

    /// Splits the active-submesh triangle under `point`; `None` if there is none.
    ///
    /// A missing active submesh holds no triangles, so nothing changes.
    pub fn split_at(&mut self, point: &Point3<T>, normal: &Vector3<T>) -> Option<usize> {
        let set = self.submeshes.get_mut(self.active)?;
        split_at(&mut self.vertices, set, point, normal, &self.config)
    }

    /// Runs edge flipping on the active submesh.
    ///
    /// A missing active submesh is left missing and reports an empty, converged run.
    pub fn optimize(&mut self) -> FlipReport {
        match self.submeshes.get_mut(self.active) {
            Some(set) => optimize(set, &self.vertices),
            None => FlipReport {
                passes: 0,
                flips: 0,
                converged: true,
            },
        }
    }

    /// Moves triangles into submesh `to`.
    ///
    /// Sources are the submeshes listed in `from`, or every other submesh when
    /// `from` is `None`. A triangle moves when all three of its vertices lie
    /// inside one box of `bounds`; an empty `bounds` moves everything. Moved
    /// triangles keep their relative order. Returns how many moved.
    pub fn move_triangles(
        &mut self,
        to: usize,
        bounds: &[Aabb3<T>],
        from: Option<&[usize]>,
    ) -> usize {
        self.submesh_mut(to);
        let vertices = &self.vertices;
        let mut moved = Vec::new();
        for (index, set) in self.submeshes.iter_mut().enumerate() {
            if index == to || from.is_some_and(|list| !list.contains(&index)) {
                continue;
            }
            moved.extend(set.extract_if(|t| {
                bounds.is_empty()
                    || bounds.iter().any(|bb| {
                        t.vertices()
                            .iter()
                            .all(|&v| bb.contains(vertices.position(v)))
                    })
            }));
        }
        let count = moved.len();
        self.submeshes[to].extend(moved);
        debug!(to, count, "moved triangles between submeshes");
        count
    }

    // ---------- Output ----------

    /// Checks that no submesh references a missing vertex.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (submesh, set) in self.submeshes.iter().enumerate() {
            for (triangle, t) in set.iter().enumerate() {
                if let Some(&vertex) = t.vertices().iter().find(|&&v| v >= vertex_count) {
                    return Err(MeshBuildError::DanglingIndex {
                        submesh,
                        triangle,
                        vertex,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn to_mesh_data(&self) -> MeshData<T> {
        MeshData {
            positions: self.vertices.iter().map(|v| v.position.coords).collect(),
            normals: self.vertices.iter().map(|v| v.normal.coords).collect(),
            uvs: self.vertices.iter().map(|v| v.uv.coords).collect(),
            submeshes: self.submeshes.iter().map(TriangleSet::flat_indices).collect(),
        }
    }

    /// Validates, then writes the mesh as Wavefront OBJ.
    pub fn write_obj<W: Write>(&self, out: W) -> Result<()> {
        self.validate()?;
        write_obj(&self.to_mesh_data(), out)?;
        Ok(())
    }
}
