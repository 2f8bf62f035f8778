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

use polymesh::geometry::{Point3, Vector3, VectorOps};
use polymesh::mesh::VertexStore;
use polymesh::operations::triangulation::{optimize, triangulate_polygon, try_flip};
use polymesh::{BuildConfig, Triangle, TriangleSet};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn store(points: &[[f64; 3]]) -> VertexStore<f64> {
    let config = BuildConfig::default();
    let up = Vector3::from_vals([0.0, 0.0, 1.0]);
    let mut vertices = VertexStore::new();
    for p in points {
        vertices.push(Point3::from_vals(*p), up, &config);
    }
    vertices
}

fn is_ccw(vertices: &VertexStore<f64>, t: &Triangle) -> bool {
    let [a, b, c] = t.positions(vertices);
    (b - a).cross(&(c - a))[2] > 0.0
}

fn star(rng: &mut StdRng) -> (VertexStore<f64>, TriangleSet) {
    let n: usize = rng.random_range(4..=20);
    let step = std::f64::consts::TAU / n as f64;
    let points: Vec<Point3<f64>> = (0..n)
        .map(|k| {
            let angle = (k as f64 + rng.random_range(-0.25..0.25)) * step;
            let radius = rng.random_range(0.5..1.5);
            Point3::from_vals([angle.cos() * radius, angle.sin() * radius, 0.0])
        })
        .collect();
    let mut vertices = VertexStore::new();
    let mut set = TriangleSet::new();
    triangulate_polygon(
        &mut vertices,
        &mut set,
        &points,
        &Vector3::from_vals([0.0, 0.0, 1.0]),
        false,
        &BuildConfig::default(),
    )
    .unwrap();
    (vertices, set)
}

#[test]
fn test_thin_quad_flips_once() {
    // long horizontal diagonal 0-1, short vertical diagonal 2-3
    let vertices = store(&[
        [0.0, 0.0, 0.0],
        [4.0, 0.0, 0.0],
        [2.0, 0.5, 0.0],
        [2.0, -0.5, 0.0],
    ]);
    let mut set: TriangleSet = [Triangle(0, 1, 2), Triangle(1, 0, 3)].into_iter().collect();

    let report = optimize(&mut set, &vertices);
    assert_eq!(report.flips, 1);
    assert_eq!(report.passes, 2);
    assert!(report.converged);
    assert_eq!(set.as_slice(), &[Triangle(0, 3, 2), Triangle(1, 2, 3)]);
    assert!(set.iter().all(|t| is_ccw(&vertices, t)));
}

#[test]
fn test_well_shaped_quad_is_left_alone() {
    let vertices = store(&[
        [2.0, -0.5, 0.0],
        [2.0, 0.5, 0.0],
        [0.0, 0.0, 0.0],
        [4.0, 0.0, 0.0],
    ]);
    let original = [Triangle(0, 1, 2), Triangle(1, 0, 3)];
    let mut set: TriangleSet = original.into_iter().collect();

    let report = optimize(&mut set, &vertices);
    assert_eq!(report.flips, 0);
    assert!(report.converged);
    assert_eq!(set.as_slice(), &original);
}

#[test]
fn test_try_flip_rejects_non_improving_pair() {
    let vertices = store(&[
        [2.0, -0.5, 0.0],
        [2.0, 0.5, 0.0],
        [0.0, 0.0, 0.0],
        [4.0, 0.0, 0.0],
    ]);
    let mut set: TriangleSet = [Triangle(0, 1, 2), Triangle(1, 0, 3)].into_iter().collect();
    assert!(!try_flip(&mut set, &vertices, 0, 1, 0, 1, 2, 3));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_single_triangle_has_only_boundary_edges() {
    let vertices = store(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    let mut set: TriangleSet = [Triangle(0, 1, 2)].into_iter().collect();
    let report = optimize(&mut set, &vertices);
    assert_eq!(report.flips, 0);
    assert_eq!(report.passes, 1);
    assert_eq!(set.as_slice(), &[Triangle(0, 1, 2)]);
}

#[test]
fn test_optimize_preserves_mesh_and_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let (vertices, mut set) = star(&mut rng);
        let count = set.len();
        let used = set.vertex_indices();

        let first = optimize(&mut set, &vertices);
        assert!(first.converged);
        assert_eq!(set.len(), count);
        assert_eq!(set.vertex_indices(), used);
        assert!(set.iter().all(|t| is_ccw(&vertices, t)));

        let settled = set.clone();
        let second = optimize(&mut set, &vertices);
        assert_eq!(second.flips, 0);
        assert_eq!(set, settled);
    }
}
