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

use std::cmp::Ordering;

use tracing::warn;

use crate::{
    error::{MeshBuildError, Result},
    geometry::{
        point::{Point2, Point3},
        projector::{PlaneFrame, polygon_normal},
        vector::Vector3,
    },
    kernel::{orientation::orient2d, predicates::point_in_polygon, predicates::signed_area},
    mesh::{
        config::BuildConfig,
        triangle::{Triangle, TriangleSet},
        vertex::VertexStore,
    },
    numeric::scalar::Scalar,
    operations::triangulation::{Triangulate2D, Triangulation},
};

/// Ears at or below this angle (degrees) are treated as degenerate.
pub const EAR_MIN_ANGLE_DEG: f64 = 1.0;
/// Ears at or above this angle (degrees) are treated as straight.
pub const EAR_MAX_ANGLE_DEG: f64 = 179.0;
/// Smallest angle (degrees) an ear may leave at either neighbour.
pub const RESULT_MIN_ANGLE_DEG: f64 = 5.0;

#[derive(Clone, Copy, Debug)]
struct EarCandidate<T: Scalar> {
    index: usize,
    /// Length of the chord `prev -> next` the ear would leave behind.
    diagonal: T,
    /// Unsigned angle at the vertex, degrees.
    angle: T,
}

/// Picks the next vertex to clip from a closed 2D loop.
///
/// Candidates are tried shortest chord first. A candidate is rejected when
/// its angle is nearly 0° or 180°, when it winds against the loop (a reflex
/// vertex), when another loop vertex falls inside the ear, or when clipping
/// it would leave an angle under 5° at a neighbour.
///
/// Never fails: if nothing passes, a warning is logged and `0` is returned.
pub fn find_ear<T: Scalar>(hole: &[Point2<T>]) -> usize {
    let n = hole.len();
    if n <= 3 {
        return 0;
    }

    let mut candidates: Vec<EarCandidate<T>> = (0..n)
        .map(|i| {
            let prev = &hole[(n + i - 1) % n];
            let next = &hole[(i + 1) % n];
            EarCandidate {
                index: i,
                diagonal: prev.distance_to(next),
                angle: (prev - &hole[i]).angle_deg(&(next - &hole[i])),
            }
        })
        .collect();
    candidates.sort_by(|x, y| x.diagonal.partial_cmp(&y.diagonal).unwrap_or(Ordering::Equal));

    let winding = signed_area(hole);
    let min_angle = T::from_f64(EAR_MIN_ANGLE_DEG);
    let max_angle = T::from_f64(EAR_MAX_ANGLE_DEG);

    for candidate in &candidates {
        if candidate.angle >= max_angle || candidate.angle <= min_angle {
            continue;
        }
        if is_valid_ear(hole, candidate.index, winding) {
            return candidate.index;
        }
    }

    warn!(vertices = n, "no valid ear found, clipping vertex 0");
    0
}

fn is_valid_ear<T: Scalar>(hole: &[Point2<T>], i: usize, winding: T) -> bool {
    let n = hole.len();
    let ip = (i + 1) % n;
    let im = (n + i - 1) % n;

    // winding check
    let mut ear_area = orient2d(&hole[im], &hole[i], &hole[ip]);
    if winding < T::zero() {
        ear_area = -ear_area;
    }
    if ear_area < T::zero() {
        return false;
    }

    // self-intersect check
    let ear = [hole[im], hole[i], hole[ip]];
    let swallows_vertex = (0..n)
        .filter(|&j| j != i && j != im && j != ip)
        .any(|j| point_in_polygon(&ear, &hole[j]));
    if swallows_vertex {
        return false;
    }

    // resulting hole check
    let ipp = (ip + 1) % n;
    let imm = (n + im - 1) % n;
    let result_min = T::from_f64(RESULT_MIN_ANGLE_DEG);
    let at_next = (&hole[ip] - &hole[im]).angle_deg(&(&hole[ip] - &hole[ipp]));
    let at_prev = (&hole[im] - &hole[ip]).angle_deg(&(&hole[im] - &hole[imm]));
    at_next >= result_min && at_prev >= result_min
}

fn ear_triangle(prev: usize, ear: usize, next: usize, flip_winding: bool) -> Triangle {
    if flip_winding {
        Triangle(next, ear, prev)
    } else {
        Triangle(prev, ear, next)
    }
}

/// Clips a closed 2D loop into `n - 2` triangles indexing into `hole`.
///
/// Without `flip_winding` every triangle winds the same way as the loop.
pub fn clip_ears<T: Scalar>(hole: &[Point2<T>], flip_winding: bool) -> Vec<Triangle> {
    let mut remaining = hole.to_vec();
    let mut indices: Vec<usize> = (0..hole.len()).collect();
    let mut triangles = Vec::with_capacity(hole.len().saturating_sub(2));

    while remaining.len() > 2 {
        let n = remaining.len();
        let i = find_ear(&remaining);
        triangles.push(ear_triangle(
            indices[(n + i - 1) % n],
            indices[i],
            indices[(i + 1) % n],
            flip_winding,
        ));
        remaining.remove(i);
        indices.remove(i);
    }
    triangles
}

/// Ear clipping over an already flattened loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct EarClipping {
    pub flip_winding: bool,
}

impl<T: Scalar> Triangulate2D<T> for EarClipping {
    fn triangulate(&self, points: &[Point2<T>]) -> Triangulation<T> {
        Triangulation {
            points: points.to_vec(),
            triangles: clip_ears(points, self.flip_winding),
        }
    }
}

/// Adds `points` as new vertices and appends their ear-clipped triangles to `set`.
///
/// The loop is flattened in a frame anchored at its first point, facing
/// `normal`, with its first edge as the up direction; the 3D positions are
/// stored untouched. Returns the number of triangles appended (`n - 2`).
pub fn triangulate_polygon<T: Scalar>(
    vertices: &mut VertexStore<T>,
    set: &mut TriangleSet,
    points: &[Point3<T>],
    normal: &Vector3<T>,
    flip_winding: bool,
    config: &BuildConfig<T>,
) -> Result<usize> {
    if points.len() < 3 {
        return Err(MeshBuildError::TooFewPoints { len: points.len() });
    }

    let frame = PlaneFrame::from_polygon(&points[0], normal, &(&points[1] - &points[0]));
    let hole = frame.project_all(points);

    let stored_normal = config.normal_policy.resolve(Some(normal), || {
        let n = polygon_normal(points);
        if flip_winding { -n } else { n }
    });
    let base = vertices.extend(points, &stored_normal, config).start;

    let triangles = clip_ears(&hole, flip_winding);
    let count = triangles.len();
    set.extend(triangles.into_iter().map(|t| t.offset_by(base)));
    Ok(count)
}
