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

use polymesh::geometry::Point3;
use polymesh::io::{save_obj, write_obj};
use polymesh::MeshBuilder;

fn two_quads() -> MeshBuilder<f64> {
    let mut builder = MeshBuilder::new();
    for slot in 0..2 {
        let x = slot as f64 * 2.0;
        builder.set_active_submesh(slot);
        builder.add_quad(
            [
                Point3::from_vals([x, 0.0, 0.0]),
                Point3::from_vals([x + 1.0, 0.0, 0.0]),
                Point3::from_vals([x + 1.0, 1.0, 0.0]),
                Point3::from_vals([x, 1.0, 0.0]),
            ],
            None,
        );
    }
    builder
}

fn count(text: &str, tag: &str) -> usize {
    text.lines()
        .filter(|l| l.split_whitespace().next() == Some(tag))
        .count()
}

#[test]
fn test_obj_has_one_line_per_element() {
    let mut out = Vec::new();
    two_quads().write_obj(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(count(&text, "v"), 8);
    assert_eq!(count(&text, "vt"), 8);
    assert_eq!(count(&text, "vn"), 8);
    assert_eq!(count(&text, "g"), 2);
    assert_eq!(count(&text, "f"), 4);
    assert!(text.starts_with("v 0.0 0.0 0.0\n"));
}

#[test]
fn test_obj_faces_are_one_based_per_group() {
    let mut out = Vec::new();
    write_obj(&two_quads().to_mesh_data(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let faces: Vec<&str> = text.lines().skip_while(|l| !l.starts_with('g')).collect();
    assert_eq!(
        faces,
        [
            "g submesh_0",
            "f 1/1/1 2/2/2 3/3/3",
            "f 1/1/1 3/3/3 4/4/4",
            "g submesh_1",
            "f 5/5/5 6/6/6 7/7/7",
            "f 5/5/5 7/7/7 8/8/8",
        ]
    );
}

#[test]
fn test_save_obj_round_trips_through_a_file() {
    let path = std::env::temp_dir().join("polymesh_two_quads.obj");
    let data = two_quads().to_mesh_data();
    save_obj(&data, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(count(&text, "f"), 4);
}
