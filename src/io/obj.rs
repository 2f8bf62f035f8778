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

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{mesh::builder::MeshData, numeric::scalar::Scalar};

/// Writes `mesh` as Wavefront OBJ: positions, texture coordinates and
/// normals, then one group per submesh.
///
/// Every vertex carries its own UV and normal, so faces use `i/i/i`.
/// Empty submeshes still get a group line so group numbering stays stable.
pub fn write_obj<T: Scalar, W: Write>(mesh: &MeshData<T>, out: W) -> io::Result<()> {
    let mut out = BufWriter::new(out);

    // 1) write vertices
    for p in &mesh.positions {
        writeln!(
            out,
            "v {:?} {:?} {:?}",
            p[0].to_f64_lossy(),
            p[1].to_f64_lossy(),
            p[2].to_f64_lossy()
        )?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {:?} {:?}", uv[0].to_f64_lossy(), uv[1].to_f64_lossy())?;
    }
    for n in &mesh.normals {
        writeln!(
            out,
            "vn {:?} {:?} {:?}",
            n[0].to_f64_lossy(),
            n[1].to_f64_lossy(),
            n[2].to_f64_lossy()
        )?;
    }

    // 2) write faces (1-based indices)
    for (g, indices) in mesh.submeshes.iter().enumerate() {
        writeln!(out, "g submesh_{g}")?;
        for tri in indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
    }

    out.flush()
}

pub fn save_obj<T: Scalar, P: AsRef<Path>>(mesh: &MeshData<T>, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    write_obj(mesh, file)
}
