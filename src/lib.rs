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

//! Incremental polygon-to-triangle mesh building.
//!
//! Polygons are ear-clipped into triangle sets ("submeshes") that share one
//! append-only vertex pool. The resulting triangulation can then be improved
//! by diagonal flipping and edited by splitting triangles at inserted points.
//!
//! Degenerate input never aborts a build: when no clean ear exists or edge
//! flipping does not settle, a `tracing` warning is emitted and the best
//! available result is kept.
//!
//! Nothing here is synchronized. Concurrent edits of one mesh from several
//! threads are not supported: safe code cannot express them because editing
//! goes through `&mut`, and callers sharing a mesh must serialize access
//! themselves. Triangle offsets returned by queries are only valid until the
//! next edit of the same submesh.

pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;

pub use error::{MeshBuildError, Result};
pub use mesh::{BuildConfig, MeshBuilder, MeshData, NormalPolicy, Triangle, TriangleSet};
