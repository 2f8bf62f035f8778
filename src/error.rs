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

use std::io;

use thiserror::Error;

/// Failures surfaced by mesh building.
///
/// Degenerate geometry is never one of them: ears that fail validation and
/// optimizer passes that do not converge are logged and the build goes on.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeshBuildError {
    /// A polygon needs at least three corners.
    #[error("polygon has {len} points, at least 3 are required")]
    TooFewPoints { len: usize },

    /// A triangle references a vertex that does not exist.
    #[error("submesh {submesh} triangle {triangle} references vertex {vertex}, but only {vertex_count} vertices exist")]
    DanglingIndex {
        submesh: usize,
        triangle: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MeshBuildError>;
