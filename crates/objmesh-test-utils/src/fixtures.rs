// ObjMesh - Wavefront Model Loading
// Copyright (C) 2025 ObjMesh Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.


//! Sample documents and generated meshes.

use image::{Rgba, RgbaImage};
use std::fmt::Write;

/// Test fixture management utilities.
pub struct TestFixtures;

impl TestFixtures {
    /// A single counter-clockwise triangle in the XY plane.
    pub const TRIANGLE_OBJ: &'static str = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

    /// A unit quad with one texcoord per corner.
    pub const QUAD_OBJ: &'static str = "\
o Quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
f 1/1 2/2 3/3 4/4
";

    /// Cube with a seam on every edge, split into an opaque body and a
    /// transparent lid.
    pub const CUBE_OBJ: &'static str = "\
# textured cube
mtllib cube.mtl

o Body
v -1 -1  1
v  1 -1  1
v  1  1  1
v -1  1  1
v -1 -1 -1
v  1 -1 -1
v  1  1 -1
v -1  1 -1
vt 0.25 0.25
vt 0.75 0.25
vt 0.75 0.75
vt 0.25 0.75
vn 0 0 1
usemtl Crate
f 1/1/1 2/2/1 3/3/1 4/4/1
f 6/1/1 5/2/1 8/3/1 7/4/1
f 5/1/1 1/2/1 4/3/1 8/4/1
f 2/1/1 6/2/1 7/3/1 3/4/1
f 5/1/1 6/2/1 2/3/1 1/4/1

o Lid
v -1  1  1
v  1  1  1
v  1  1 -1
v -1  1 -1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
usemtl Glass
f 9/5 10/6 11/7 12/8
";

    /// Materials for [`Self::CUBE_OBJ`]; the texture path is written the
    /// way a Windows exporter would.
    pub const CUBE_MTL: &'static str = "\
# cube materials
newmtl Crate
Ka 0.2 0.2 0.2
Kd 0.8 0.6 0.4
Ks 0.1 0.1 0.1
Ns 10
illum 2
map_Kd C:\\Users\\artist\\textures\\crate.png

newmtl Glass
Kd 0.6 0.8 1.0
d 0.4
illum 4
";

    /// A library with a single red material.
    pub const RED_MTL: &'static str = "newmtl Red\nKd 1 0 0\n";

    /// Checkerboard RGBA image.
    pub fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([32, 32, 32, 255])
            }
        })
    }

    /// A flat `size` x `size` grid of quads in the XZ plane with per-cell
    /// UVs, so every interior vertex sits on a seam.
    pub fn grid_obj(size: usize) -> String {
        let mut doc = String::from("o Grid\n");
        for z in 0..=size {
            for x in 0..=size {
                let _ = writeln!(doc, "v {} 0 {}", x, z);
            }
        }
        doc.push_str("vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n");
        let row = size + 1;
        for z in 0..size {
            for x in 0..size {
                let a = z * row + x + 1;
                let b = a + 1;
                let c = a + row + 1;
                let d = a + row;
                let _ = writeln!(doc, "f {a}/1 {d}/4 {c}/3 {b}/2");
            }
        }
        doc
    }
}
