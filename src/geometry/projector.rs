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
    geometry::{
        matrix::Matrix4,
        point::{Point2, Point3},
        vector::{Vector, Vector3},
    },
    numeric::scalar::Scalar,
};

/// World-to-local frame used to flatten 3D points for 2D tests.
///
/// All points projected through one frame share one coordinate system, so
/// winding and containment tests between them are meaningful.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneFrame<T: Scalar> {
    to_local: Matrix4<T>,
}

impl<T: Scalar> PlaneFrame<T> {
    /// Frame anchored at `origin`, looking along `normal`, with local `+y`
    /// following `first_edge`.
    ///
    /// The local basis is right-handed (`x = y × z`), so a loop that winds
    /// counter-clockwise about `normal` also winds counter-clockwise in the
    /// projected plane. A zero `normal`, or one parallel to `first_edge`,
    /// yields a meaningless frame.
    pub fn from_polygon(origin: &Point3<T>, normal: &Vector3<T>, first_edge: &Vector3<T>) -> Self {
        let rotation = Matrix4::look_rotation(normal, first_edge);
        let to_world = &Matrix4::translation(&origin.as_vector()) * &rotation;
        PlaneFrame {
            to_local: to_world.rigid_inverse(),
        }
    }

    /// Identity orientation, centered on `point`.
    pub fn centered_at(point: &Point3<T>) -> Self {
        PlaneFrame {
            to_local: Matrix4::translation(&-point.as_vector()),
        }
    }

    /// Wraps an arbitrary world-to-local transform.
    pub fn from_transform(to_local: Matrix4<T>) -> Self {
        PlaneFrame { to_local }
    }

    pub fn transform(&self) -> &Matrix4<T> {
        &self.to_local
    }

    /// Local 3D coordinates; `z` is the height above the frame's plane.
    pub fn to_local(&self, p: &Point3<T>) -> Point3<T> {
        self.to_local.transform_point(p)
    }

    pub fn project(&self, p: &Point3<T>) -> Point2<T> {
        self.to_local(p).xy()
    }

    pub fn project_all(&self, points: &[Point3<T>]) -> Vec<Point2<T>> {
        points.iter().map(|p| self.project(p)).collect()
    }
}

/// Area-weighted normal of a closed loop (Newell's method).
///
/// Its length is twice the loop's area and it points the way the loop winds
/// counter-clockwise, which also holds for concave loops. Not normalized.
pub fn polygon_normal<T: Scalar>(points: &[Point3<T>]) -> Vector3<T> {
    let n = points.len();
    let mut normal = Vector::zero();
    for i in 0..n {
        let (p, q) = (&points[i], &points[(i + 1) % n]);
        normal[0] = normal[0] + (p[1] - q[1]) * (p[2] + q[2]);
        normal[1] = normal[1] + (p[2] - q[2]) * (p[0] + q[0]);
        normal[2] = normal[2] + (p[0] - q[0]) * (p[1] + q[1]);
    }
    normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::predicates::signed_area;

    #[test]
    fn polygon_frame_keeps_origin_and_winding() {
        let pts = [
            Point3::<f64>::from_vals([2.0, 0.0, 5.0]),
            Point3::from_vals([2.0, 1.0, 5.0]),
            Point3::from_vals([2.0, 1.0, 6.0]),
        ];
        // ccw around +x
        let normal = Vector::from_vals([1.0, 0.0, 0.0]);
        let frame = PlaneFrame::from_polygon(&pts[0], &normal, &(&pts[1] - &pts[0]));
        let flat = frame.project_all(&pts);
        assert!(flat[0][0].abs() < 1e-12 && flat[0][1].abs() < 1e-12);
        assert!((flat[1][1] - 1.0).abs() < 1e-12);
        assert!(signed_area(&flat) > 0.0);
        assert!(frame.to_local(&pts[2])[2].abs() < 1e-12);
    }

    #[test]
    fn newell_normal_of_concave_loop() {
        // L shape, ccw about +z, first corner convex but third reflex
        let pts = [
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 2.0, 0.0],
            [0.0, 2.0, 0.0],
        ]
        .map(Point3::<f64>::from_vals);
        assert_eq!(polygon_normal(&pts), Vector::from_vals([0.0, 0.0, 6.0]));
    }

    #[test]
    fn centered_frame_is_a_translation() {
        let frame = PlaneFrame::centered_at(&Point3::<f64>::from_vals([1.0, 2.0, 3.0]));
        let p = frame.project(&Point3::from_vals([1.5, 1.0, 9.0]));
        assert_eq!(p, Point2::from_vals([0.5, -1.0]));
    }
}
