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

use tracing::{debug, trace, warn};

use crate::{
    geometry::{point::Point3, vector::VectorOps},
    mesh::{
        triangle::{Triangle, TriangleSet},
        vertex::VertexStore,
    },
    numeric::scalar::Scalar,
};

/// Upper bound on full scans before [`optimize`] gives up.
pub const MAX_FLIP_PASSES: usize = 10_000;

/// Outcome of one [`optimize`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipReport {
    /// Scans started, including the final clean one.
    pub passes: usize,
    pub flips: usize,
    /// False when the pass cap stopped the run.
    pub converged: bool,
}

/// Flips shared diagonals until no first edge of any triangle can be improved.
///
/// Each scan walks the set in order; for triangle `(a, b, c)` it looks up the
/// neighbour across `a → b` and calls [`try_flip`]. A flip rewrites offsets,
/// so the scan restarts from the top. Triangle count and the set of used
/// vertices never change. Stops after [`MAX_FLIP_PASSES`] scans with a
/// warning if flips keep happening.
pub fn optimize<T: Scalar>(set: &mut TriangleSet, vertices: &VertexStore<T>) -> FlipReport {
    optimize_capped(set, vertices, MAX_FLIP_PASSES)
}

pub(crate) fn optimize_capped<T: Scalar>(
    set: &mut TriangleSet,
    vertices: &VertexStore<T>,
    max_passes: usize,
) -> FlipReport {
    let mut report = FlipReport::default();
    loop {
        report.passes += 1;
        if !flip_first_improvable(set, vertices) {
            report.converged = true;
            break;
        }
        report.flips += 1;
        if report.passes >= max_passes {
            warn!(
                passes = report.passes,
                flips = report.flips,
                "edge flipping did not converge, keeping current triangulation"
            );
            break;
        }
    }
    debug!(passes = report.passes, flips = report.flips, "edge flipping done");
    report
}

fn flip_first_improvable<T: Scalar>(set: &mut TriangleSet, vertices: &VertexStore<T>) -> bool {
    for offset in 0..set.len() {
        let Triangle(a, b, c) = set.as_slice()[offset];
        let Some(opposite) = set.find_opposite(a, b) else {
            continue;
        };
        if opposite.triangle == offset {
            continue;
        }
        if try_flip(set, vertices, offset, opposite.triangle, a, b, c, opposite.vertex) {
            return true;
        }
    }
    false
}

/// Replaces diagonal `a-b` of triangles `abc` (at offset `abc`) and `bad`
/// (at offset `dba`) with `c-d` when that lowers the largest angle facing
/// the diagonal.
///
/// Compares `max(∠acb, ∠adb)` with `max(∠dac, ∠dbc)`. On a flip both old
/// triangles are removed and `(a, d, c)`, `(b, c, d)` appended. Quads that
/// are not convex are left alone, since their other diagonal falls outside.
#[allow(clippy::too_many_arguments)]
pub fn try_flip<T: Scalar>(
    set: &mut TriangleSet,
    vertices: &VertexStore<T>,
    abc: usize,
    dba: usize,
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) -> bool {
    let [pa, pb, pc, pd] = [a, b, c, d].map(|v| vertices.position(v));

    let cur_angle = (pa - pc).angle_deg(&(pb - pc)).max((pb - pd).angle_deg(&(pa - pd)));
    let new_angle = (pd - pa).angle_deg(&(pc - pa)).max((pd - pb).angle_deg(&(pc - pb)));
    if cur_angle <= new_angle {
        return false;
    }
    if !is_convex_quad(pa, pb, pc, pd) {
        return false;
    }

    // remove the later offset first so the earlier one stays put
    let (first, second) = if abc > dba { (abc, dba) } else { (dba, abc) };
    set.remove(first);
    set.remove(second);
    set.push(Triangle(a, d, c));
    set.push(Triangle(b, c, d));
    trace!(a, b, c, d, "flipped diagonal");
    true
}

/// True when both flipped triangles face the same way as the pair they replace.
fn is_convex_quad<T: Scalar>(pa: &Point3<T>, pb: &Point3<T>, pc: &Point3<T>, pd: &Point3<T>) -> bool {
    let face = |p: &Point3<T>, q: &Point3<T>, r: &Point3<T>| (q - p).cross(&(r - p));
    let reference = face(pa, pb, pc) + face(pb, pa, pd);
    face(pa, pd, pc).dot(&reference) > T::zero() && face(pb, pc, pd).dot(&reference) > T::zero()
}
