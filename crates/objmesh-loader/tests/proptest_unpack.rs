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


//! Property-based tests for unpacking and normals
//!
//! Random documents are generated from a small vertex pool so that faces
//! revisit positions with different texcoords:
//! - Index buffers are valid triangle lists
//! - Render vertices are unique (position, UV) pairs
//! - Seam copies are bounded by the distinct UVs each position is used with
//! - Normals are unit length or zero
//! - Loading is deterministic

use objmesh_loader::glm;
use objmesh_loader::{compute_normals, LoadOptions, ModelLoader, UvClaimPolicy};
use objmesh_test_utils::{
    assert_normals_unit_or_zero, assert_triangle_list, assert_unique_render_vertices,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::path::Path;

const POSITIONS: usize = 6;
const TEXCOORDS: usize = 4;

/// One face: corner count 3 or 4, each corner a (position, texcoord) pair
fn arb_face() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..POSITIONS, 0..TEXCOORDS), 3..=4)
}

fn arb_faces() -> impl Strategy<Value = Vec<Vec<(usize, usize)>>> {
    prop::collection::vec(arb_face(), 1..24)
}

/// Document with a fixed vertex pool; texcoords avoid (0,0)
fn document(faces: &[Vec<(usize, usize)>]) -> String {
    let mut doc = String::new();
    for i in 0..POSITIONS {
        let _ = writeln!(doc, "v {} {} {}", i, (i * 7) % 5, (i * 3) % 4);
    }
    for i in 0..TEXCOORDS {
        let _ = writeln!(doc, "vt {} {}", 0.1 + i as f32 * 0.2, 0.9 - i as f32 * 0.2);
    }
    for face in faces {
        doc.push('f');
        for (p, t) in face {
            let _ = write!(doc, " {}/{}", p + 1, t + 1);
        }
        doc.push('\n');
    }
    doc
}

fn load(doc: &str, policy: UvClaimPolicy) -> objmesh_loader::Model {
    ModelLoader::new(LoadOptions::default().with_uv_claim(policy))
        .load_str(doc, Path::new("generated.obj"))
        .unwrap()
}

#[test]
fn proptest_index_buffer_is_triangle_list() {
    proptest!(|(faces in arb_faces())| {
        let model = load(&document(&faces), UvClaimPolicy::Explicit);
        let mesh = &model.meshes[0];

        let expected: usize = faces.iter().map(|f| if f.len() == 4 { 6 } else { 3 }).sum();
        prop_assert_eq!(mesh.indices.len(), expected);
        assert_triangle_list(&mesh.indices, mesh.vertex_count());
    });
}

#[test]
fn proptest_render_vertices_unique() {
    proptest!(|(faces in arb_faces())| {
        let model = load(&document(&faces), UvClaimPolicy::Explicit);
        let mesh = &model.meshes[0];
        assert_unique_render_vertices(&mesh.positions, mesh.uvs.as_ref().unwrap());
    });
}

#[test]
fn proptest_one_copy_per_extra_uv() {
    proptest!(|(faces in arb_faces())| {
        let model = load(&document(&faces), UvClaimPolicy::Explicit);
        let mesh = &model.meshes[0];

        let mut uvs_per_position: HashMap<usize, HashSet<usize>> = HashMap::new();
        for (p, t) in faces.iter().flatten() {
            uvs_per_position.entry(*p).or_default().insert(*t);
        }
        let extra: usize = uvs_per_position.values().map(|s| s.len() - 1).sum();
        prop_assert_eq!(mesh.vertex_count(), POSITIONS + extra);
    });
}

#[test]
fn proptest_sentinel_matches_explicit_without_zero_uvs() {
    proptest!(|(faces in arb_faces())| {
        let doc = document(&faces);
        prop_assert_eq!(
            load(&doc, UvClaimPolicy::ZeroSentinel),
            load(&doc, UvClaimPolicy::Explicit)
        );
    });
}

#[test]
fn proptest_load_is_deterministic() {
    proptest!(|(faces in arb_faces())| {
        let doc = document(&faces);
        prop_assert_eq!(load(&doc, UvClaimPolicy::ZeroSentinel), load(&doc, UvClaimPolicy::ZeroSentinel));
    });
}

fn arb_point() -> impl Strategy<Value = glm::Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y, z)| glm::vec3(x, y, z))
}

#[test]
fn proptest_normals_unit_or_zero() {
    proptest!(|(
        positions in prop::collection::vec(arb_point(), 3..16),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 3..48)
    )| {
        let whole = picks.len() / 3 * 3;
        let indices: Vec<u32> = picks[..whole]
            .iter()
            .map(|i| i.index(positions.len()) as u32)
            .collect();
        let normals = compute_normals(&positions, &indices);

        prop_assert_eq!(normals.len(), positions.len());
        assert_normals_unit_or_zero(&normals);
    });
}
