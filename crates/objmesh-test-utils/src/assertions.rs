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


//! Custom assertions for mesh data.

use nalgebra_glm as glm;

/// Default tolerance for float comparisons.
pub const EPSILON: f32 = 1e-5;

/// Assert two vectors are equal within [`EPSILON`].
#[track_caller]
pub fn assert_vec3_near(actual: &glm::Vec3, expected: &glm::Vec3) {
    assert!(
        (actual - expected).norm() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// Assert every normal is unit length or exactly zero.
#[track_caller]
pub fn assert_normals_unit_or_zero(normals: &[glm::Vec3]) {
    for (i, n) in normals.iter().enumerate() {
        let len = n.norm();
        assert!(
            len == 0.0 || (len - 1.0).abs() < EPSILON,
            "normal {} has length {}",
            i,
            len
        );
    }
}

/// Assert an index buffer is a valid triangle list over `vertex_count`
/// vertices.
#[track_caller]
pub fn assert_triangle_list(indices: &[u32], vertex_count: usize) {
    assert_eq!(
        indices.len() % 3,
        0,
        "index count {} is not a multiple of 3",
        indices.len()
    );
    if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        panic!("index {} out of bounds for {} vertices", bad, vertex_count);
    }
}

/// Assert that position and UV streams have one entry per vertex and that
/// no (position, UV) pair appears twice.
#[track_caller]
pub fn assert_unique_render_vertices(positions: &[glm::Vec3], uvs: &[glm::Vec2]) {
    assert_eq!(positions.len(), uvs.len(), "UV stream is not parallel to positions");
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            assert!(
                !(positions[i] == positions[j] && uvs[i] == uvs[j]),
                "render vertices {} and {} are identical",
                i,
                j
            );
        }
    }
}
