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

use polymesh::geometry::{Point2, Point3, Vector3, VectorOps};
use polymesh::kernel::{orient2d, point_in_polygon, signed_area};
use polymesh::operations::triangulation::{
    EarClipping, Triangulate2D, clip_ears, find_ear, triangulate_polygon,
};
use polymesh::{BuildConfig, MeshBuildError, Triangle, TriangleSet, mesh::VertexStore};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn loop3(pts: &[[f64; 3]]) -> Vec<Point3<f64>> {
    pts.iter().map(|p| Point3::from_vals(*p)).collect()
}

fn l_shape() -> Vec<Point3<f64>> {
    loop3(&[
        [0.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 2.0, 0.0],
        [0.0, 2.0, 0.0],
    ])
}

/// Twice the area of `t` measured along `normal`.
fn facing(vertices: &VertexStore<f64>, t: &Triangle, normal: &Vector3<f64>) -> f64 {
    let [a, b, c] = t.positions(vertices);
    (b - a).cross(&(c - a)).dot(normal)
}

fn triangulate(
    points: &[Point3<f64>],
    normal: &Vector3<f64>,
    flip: bool,
) -> (VertexStore<f64>, TriangleSet) {
    let mut vertices = VertexStore::new();
    let mut set = TriangleSet::new();
    let count = triangulate_polygon(
        &mut vertices,
        &mut set,
        points,
        normal,
        flip,
        &BuildConfig::default(),
    )
    .unwrap();
    assert_eq!(count, points.len() - 2);
    (vertices, set)
}

#[test]
fn test_square_gives_two_ccw_triangles() {
    let square = loop3(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    let normal = Vector3::from_vals([0.0, 0.0, 1.0]);
    let (vertices, set) = triangulate(&square, &normal, false);

    assert_eq!(set.len(), 2);
    assert_eq!(vertices.len(), 4);
    assert_eq!(set.vertex_indices(), vec![0, 1, 2, 3]);
    for t in &set {
        assert!(facing(&vertices, t, &normal) > 0.0);
    }
}

#[test]
fn test_flip_winding_reverses_every_triangle() {
    let square = loop3(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    let normal = Vector3::from_vals([0.0, 0.0, 1.0]);
    let (_, plain) = triangulate(&square, &normal, false);
    let (vertices, flipped) = triangulate(&square, &normal, true);

    for (p, f) in plain.iter().zip(&flipped) {
        assert_eq!(p.flipped(), *f);
        assert!(facing(&vertices, f, &normal) < 0.0);
    }
}

#[test]
fn test_l_shape_never_clips_the_notch() {
    let normal = Vector3::from_vals([0.0, 0.0, 1.0]);
    let flat: Vec<Point2<f64>> = l_shape().iter().map(|p| p.xy()).collect();

    // vertex 3 is the reflex corner
    assert_ne!(find_ear(&flat), 3);

    let (vertices, set) = triangulate(&l_shape(), &normal, false);
    assert_eq!(set.len(), 4);

    let notch = Point2::from_vals([1.5, 1.5]);
    let mut total = 0.0;
    for t in &set {
        let corners = t.positions(&vertices).map(|p| p.xy());
        assert!(!point_in_polygon(&corners, &notch));
        assert!(facing(&vertices, t, &normal) > 0.0);
        total += signed_area(&corners);
    }
    assert!((total - 3.0).abs() < 1e-12);
}

#[test]
fn test_tilted_polygon_uses_its_own_plane() {
    // unit square in the x = 2 plane, ccw about +x
    let square = loop3(&[
        [2.0, 0.0, 0.0],
        [2.0, 1.0, 0.0],
        [2.0, 1.0, 1.0],
        [2.0, 0.0, 1.0],
    ]);
    let normal = Vector3::from_vals([1.0, 0.0, 0.0]);
    let (vertices, set) = triangulate(&square, &normal, false);

    assert_eq!(set.len(), 2);
    for t in &set {
        assert!(facing(&vertices, t, &normal) > 0.0);
    }
}

#[test]
fn test_random_star_polygons() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let normal = Vector3::from_vals([0.0, 0.0, 1.0]);

    for _ in 0..200 {
        let n: usize = rng.random_range(3..=24);
        let step = std::f64::consts::TAU / n as f64;
        let points: Vec<Point3<f64>> = (0..n)
            .map(|k| {
                let angle = (k as f64 + rng.random_range(-0.25..0.25)) * step;
                let radius = rng.random_range(0.5..1.5);
                Point3::from_vals([angle.cos() * radius, angle.sin() * radius, 0.0])
            })
            .collect();
        let flat: Vec<Point2<f64>> = points.iter().map(|p| p.xy()).collect();
        let area = signed_area(&flat);

        let (vertices, set) = triangulate(&points, &normal, false);
        assert_eq!(set.len(), n - 2);
        assert_eq!(set.vertex_indices(), (0..n).collect::<Vec<_>>());

        let mut total = 0.0;
        for t in &set {
            assert!(facing(&vertices, t, &normal) > 0.0);
            total += facing(&vertices, t, &normal) / 2.0;
        }
        assert!((total - area).abs() < 1e-9, "triangles overlap or leave gaps");
    }
}

#[test]
fn test_collinear_input_falls_back_to_first_vertex() {
    // every vertex is a straight angle, so no ear passes and vertex 0 is
    // clipped each round
    let line = loop3(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [3.0, 0.0, 0.0],
        [4.0, 0.0, 0.0],
    ]);
    let flat: Vec<Point2<f64>> = line.iter().map(|p| p.xy()).collect();
    assert_eq!(find_ear(&flat), 0);

    let (vertices, set) = triangulate(&line, &Vector3::from_vals([0.0, 0.0, 1.0]), false);
    assert_eq!(set.len(), 3);
    assert_eq!(set.as_slice()[0], Triangle(4, 0, 1));
    assert!(set.flat_indices().iter().all(|&v| v < vertices.len()));
}

#[test]
fn test_too_few_points_is_an_error() {
    let mut vertices = VertexStore::<f64>::new();
    let mut set = TriangleSet::new();
    let err = triangulate_polygon(
        &mut vertices,
        &mut set,
        &loop3(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]),
        &Vector3::from_vals([0.0, 0.0, 1.0]),
        false,
        &BuildConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, MeshBuildError::TooFewPoints { len: 2 }));
    assert!(vertices.is_empty());
    assert!(set.is_empty());
}

#[test]
fn test_triangulate_2d_trait() {
    let hexagon: Vec<Point2<f64>> = (0..6)
        .map(|k| {
            let a = k as f64 * std::f64::consts::FRAC_PI_3;
            Point2::from_vals([a.cos(), a.sin()])
        })
        .collect();
    let result = EarClipping::default().triangulate(&hexagon);
    assert_eq!(result.points.len(), 6);
    assert_eq!(result.triangles, clip_ears(&hexagon, false));
    for t in &result.triangles {
        assert!(orient2d(&hexagon[t.0], &hexagon[t.1], &hexagon[t.2]) > 0.0);
    }
}
