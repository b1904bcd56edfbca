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

//! Face unpacking and vertex deduplication
//!
//! OBJ faces index positions and texture coordinates independently, but a
//! GPU index buffer addresses a single vertex stream. Each position carries
//! one UV slot; the first UV a position is used with claims the slot, and
//! every further distinct UV for that position gets its own copy of the
//! position (a seam vertex). Copies are keyed on the exact UV so a given
//! (position, UV) pair is only ever materialised once.

use crate::error::{IndexKind, MeshError, Result};
use crate::record::{parse_floats, SourceLine};
use crate::segment::{IndexOffsets, ObjectGroup};
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// Name given to objects that have no `o`/`g` line
pub const UNNAMED_OBJECT: &str = "unnamed";

/// How a position's UV slot is known to be unclaimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvClaimPolicy {
    /// A slot holding UV (0,0) counts as unclaimed. A corner that really
    /// uses (0,0) can therefore be overwritten by a later UV for the same
    /// position instead of producing a seam copy. Matches the output of
    /// older loaders that content may have been tuned against.
    #[default]
    ZeroSentinel,
    /// Claims are tracked with a separate flag; (0,0) is an ordinary UV.
    Explicit,
}

/// One object's geometry after unpacking, before normals are computed
#[derive(Debug, Clone, PartialEq)]
pub struct UnpackedObject {
    /// Text after the last `o`/`g` keyword in the group
    pub name: String,
    /// Render-vertex positions, including seam copies
    pub positions: Vec<glm::Vec3>,
    /// UVs parallel to `positions`; `None` when no face used texcoords
    pub uvs: Option<Vec<glm::Vec2>>,
    /// Triangle list into `positions`
    pub indices: Vec<u32>,
    /// Every `usemtl` name in the group, in order
    pub material_refs: Vec<String>,
}

/// Growable vertex arena. Indices handed out are never invalidated.
#[derive(Debug)]
struct VertexArena {
    policy: UvClaimPolicy,
    positions: Vec<glm::Vec3>,
    uvs: Vec<glm::Vec2>,
    claimed: Vec<bool>,
    seams: HashMap<(u32, [u32; 2]), u32>,
    textured: bool,
}

impl VertexArena {
    fn new(positions: Vec<glm::Vec3>, policy: UvClaimPolicy) -> Self {
        let count = positions.len();
        VertexArena {
            policy,
            positions,
            uvs: vec![glm::Vec2::zeros(); count],
            claimed: vec![false; count],
            seams: HashMap::new(),
            textured: false,
        }
    }

    fn is_unclaimed(&self, position: usize) -> bool {
        match self.policy {
            UvClaimPolicy::ZeroSentinel => self.uvs[position] == glm::Vec2::zeros(),
            UvClaimPolicy::Explicit => !self.claimed[position],
        }
    }

    /// Render-vertex index for a corner using `position` and optional `uv`
    fn resolve(&mut self, position: usize, uv: Option<glm::Vec2>) -> u32 {
        let Some(uv) = uv else {
            return position as u32;
        };
        self.textured = true;

        if self.is_unclaimed(position) {
            self.uvs[position] = uv;
            self.claimed[position] = true;
            return position as u32;
        }

        if self.uvs[position] == uv {
            return position as u32;
        }

        let key = (position as u32, uv_key(&uv));
        if let Some(&copy) = self.seams.get(&key) {
            return copy;
        }

        let copy = self.positions.len() as u32;
        self.positions.push(self.positions[position]);
        self.uvs.push(uv);
        self.claimed.push(true);
        self.seams.insert(key, copy);
        trace!(position, copy, "Seam vertex created");
        copy
    }

    fn seam_count(&self) -> usize {
        self.seams.len()
    }
}

/// Bit pattern of a UV with negative zero folded into zero
fn uv_key(uv: &glm::Vec2) -> [u32; 2] {
    [(uv.x + 0.0).to_bits(), (uv.y + 0.0).to_bits()]
}

/// A parsed face corner, still in file index space
#[derive(Debug, Clone, Copy)]
struct Corner {
    position: i64,
    texcoord: Option<i64>,
}

fn parse_corner(token: &str, line: &SourceLine<'_>, file: &Path) -> Result<Corner> {
    let mut parts = token.split('/');
    let bad = || MeshError::format(file, line.number, format!("malformed face corner '{}'", token));

    let position = parts
        .next()
        .and_then(|p| p.parse::<i64>().ok())
        .ok_or_else(bad)?;

    let texcoord = match parts.next() {
        None | Some("") => None,
        Some(t) => Some(t.parse::<i64>().map_err(|_| bad())?),
    };

    // The normal index is ignored, but it must still be the last component
    let _normal = parts.next();
    if parts.next().is_some() {
        return Err(bad());
    }

    Ok(Corner { position, texcoord })
}

/// Map a global 1-based index to a local 0-based one
fn localize(
    index: i64,
    offset: usize,
    available: usize,
    kind: IndexKind,
    line: &SourceLine<'_>,
    file: &Path,
) -> Result<usize> {
    let local = index
        .checked_sub(1)
        .and_then(|i| i.checked_sub(offset as i64))
        .filter(|&i| i >= 0 && (i as u64) < available as u64);
    match local {
        Some(local) => Ok(local as usize),
        None => Err(MeshError::OutOfRange {
            file: file.to_path_buf(),
            line: line.number,
            kind,
            index,
            available,
        }),
    }
}

/// Unpacks one object group into deduplicated vertex and index arrays
#[derive(Debug, Clone, Copy)]
pub struct FaceUnpacker<'p> {
    file: &'p Path,
    policy: UvClaimPolicy,
}

impl<'p> FaceUnpacker<'p> {
    /// Unpacker reporting errors against `file`
    pub fn new(file: &'p Path, policy: UvClaimPolicy) -> Self {
        FaceUnpacker { file, policy }
    }

    /// Unpack and triangulate every face of `group`
    pub fn unpack(&self, group: &ObjectGroup<'_>) -> Result<UnpackedObject> {
        let mut positions = Vec::new();
        let mut texcoords = Vec::new();

        // Vertex records always come first in a group
        let split = group
            .lines
            .iter()
            .position(|l| !matches!(l.keyword(), "v" | "vt"))
            .unwrap_or(group.lines.len());
        let (vertex_lines, other_lines) = group.lines.split_at(split);

        for line in vertex_lines {
            if line.keyword() == "v" {
                positions.push(glm::Vec3::from(parse_floats::<3>(line, self.file)?));
            } else {
                texcoords.push(glm::Vec2::from(parse_floats::<2>(line, self.file)?));
            }
        }

        let raw_positions = positions.len();
        let mut arena = VertexArena::new(positions, self.policy);
        let mut indices = Vec::new();
        let mut name = None;
        let mut material_refs = Vec::new();

        for line in other_lines {
            match line.keyword() {
                "o" | "g" => {
                    let rest = line.rest();
                    if !rest.is_empty() {
                        name = Some(rest.to_string());
                    }
                }
                "usemtl" => {
                    let rest = line.rest();
                    if !rest.is_empty() {
                        material_refs.push(rest.to_string());
                    }
                }
                "f" => self.unpack_face(
                    line,
                    group.offsets,
                    raw_positions,
                    &texcoords,
                    &mut arena,
                    &mut indices,
                )?,
                _ => {}
            }
        }

        let name = name.unwrap_or_else(|| UNNAMED_OBJECT.to_string());
        debug!(
            object = %name,
            positions = arena.positions.len(),
            seams = arena.seam_count(),
            triangles = indices.len() / 3,
            "Unpacked object"
        );

        let uvs = arena.textured.then_some(arena.uvs);
        Ok(UnpackedObject {
            name,
            positions: arena.positions,
            uvs,
            indices,
            material_refs,
        })
    }

    fn unpack_face(
        &self,
        line: &SourceLine<'_>,
        offsets: IndexOffsets,
        raw_positions: usize,
        texcoords: &[glm::Vec2],
        arena: &mut VertexArena,
        indices: &mut Vec<u32>,
    ) -> Result<()> {
        let corners = line
            .args()
            .map(|token| parse_corner(token, line, self.file))
            .collect::<Result<Vec<_>>>()?;

        if corners.len() < 3 || corners.len() > 4 {
            return Err(MeshError::format(
                self.file,
                line.number,
                format!(
                    "face with {} corners; only triangles and quads are supported",
                    corners.len()
                ),
            ));
        }

        let textured = corners[0].texcoord.is_some();
        if corners.iter().any(|c| c.texcoord.is_some() != textured) {
            return Err(MeshError::format(
                self.file,
                line.number,
                "face mixes corners with and without texture coordinates",
            ));
        }

        let mut render = [0u32; 4];
        for (slot, corner) in render.iter_mut().zip(&corners) {
            let position = localize(
                corner.position,
                offsets.positions,
                raw_positions,
                IndexKind::Position,
                line,
                self.file,
            )?;
            let uv = match corner.texcoord {
                Some(t) => Some(
                    texcoords[localize(
                        t,
                        offsets.texcoords,
                        texcoords.len(),
                        IndexKind::TexCoord,
                        line,
                        self.file,
                    )?],
                ),
                None => None,
            };
            *slot = arena.resolve(position, uv);
        }

        indices.extend_from_slice(&[render[0], render[1], render[2]]);
        if corners.len() == 4 {
            // Fan from the first corner: (0,1,2) + (0,2,3)
            indices.extend_from_slice(&[render[0], render[2], render[3]]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::source_lines;
    use crate::segment::segment;

    fn unpack_with(doc: &str, policy: UvClaimPolicy) -> Result<Vec<UnpackedObject>> {
        let unpacker = FaceUnpacker::new(Path::new("test.obj"), policy);
        segment(source_lines(doc))
            .iter()
            .map(|g| unpacker.unpack(g))
            .collect()
    }

    fn unpack(doc: &str) -> Result<UnpackedObject> {
        let mut objects = unpack_with(doc, UvClaimPolicy::ZeroSentinel)?;
        Ok(objects.remove(objects.len() - 1))
    }

    const QUAD: &str = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n";

    #[test]
    fn test_triangle_indices() {
        let obj = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(obj.indices, vec![0, 1, 2]);
        assert_eq!(obj.positions.len(), 3);
        assert!(obj.uvs.is_none());
        assert_eq!(obj.name, UNNAMED_OBJECT);
    }

    #[test]
    fn test_quad_fans_from_first_corner() {
        let obj = unpack(&format!("{QUAD}f 1 2 3 4\n")).unwrap();
        assert_eq!(obj.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_polygon_and_degenerate_faces_rejected() {
        let err = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 1\nv 2 2 2\nf 1 2 3 4 5\n").unwrap_err();
        assert!(matches!(err, MeshError::Format { line: 6, .. }));
        assert!(unpack("v 0 0 0\nv 1 0 0\nf 1 2\n").is_err());
    }

    #[test]
    fn test_normal_index_ignored() {
        let doc = format!("{QUAD}vt 0.5 0.5\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\nf 1//1 3//1 4//1\n");
        let obj = unpack(&doc).unwrap();
        assert_eq!(obj.indices.len(), 6);
        assert!(obj.uvs.is_some());
    }

    #[test]
    fn test_shared_uv_does_not_duplicate() {
        let doc = format!("{QUAD}vt 0.1 0.1\nvt 0.9 0.1\nvt 0.9 0.9\nvt 0.1 0.9\nf 1/1 2/2 3/3 4/4\n");
        let obj = unpack(&doc).unwrap();
        assert_eq!(obj.positions.len(), 4);
        let uvs = obj.uvs.unwrap();
        assert_eq!(uvs[2], glm::vec2(0.9, 0.9));
    }

    #[test]
    fn test_seam_creates_one_copy_per_extra_uv() {
        let doc = format!(
            "{QUAD}vt 0.1 0.1\nvt 0.9 0.1\nvt 0.9 0.9\nvt 0.5 0.5\n\
             f 1/1 2/2 3/3\nf 1/4 3/3 4/3\nf 4/3 1/4 2/2\n"
        );
        let obj = unpack(&doc).unwrap();
        // position 1 seen with vt1 and vt4 -> one copy; position 4 first seen
        // with vt3 claims its own slot
        assert_eq!(obj.positions.len(), 5);
        assert_eq!(obj.positions[4], obj.positions[0]);
        let uvs = obj.uvs.unwrap();
        assert_eq!(uvs[4], glm::vec2(0.5, 0.5));
        assert_eq!(obj.indices, vec![0, 1, 2, 4, 2, 3, 3, 4, 1]);
    }

    #[test]
    fn test_zero_uv_sentinel_masks_seam() {
        let doc = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 1\nf 1/1 2/2 3/2\nf 1/2 2/2 3/2\n";
        let sentinel = unpack_with(doc, UvClaimPolicy::ZeroSentinel).unwrap().remove(0);
        assert_eq!(sentinel.positions.len(), 3);
        assert_eq!(sentinel.uvs.unwrap()[0], glm::vec2(1.0, 1.0));

        let explicit = unpack_with(doc, UvClaimPolicy::Explicit).unwrap().remove(0);
        assert_eq!(explicit.positions.len(), 4);
        let uvs = explicit.uvs.unwrap();
        assert_eq!(uvs[0], glm::vec2(0.0, 0.0));
        assert_eq!(uvs[3], glm::vec2(1.0, 1.0));
    }

    #[test]
    fn test_out_of_range_position() {
        let err = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").unwrap_err();
        match err {
            MeshError::OutOfRange {
                kind,
                index,
                available,
                line,
                ..
            } => {
                assert_eq!(kind, IndexKind::Position);
                assert_eq!(index, 4);
                assert_eq!(available, 3);
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_texcoord_and_zero_index() {
        let err = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/2 3/1\n").unwrap_err();
        assert!(matches!(
            err,
            MeshError::OutOfRange {
                kind: IndexKind::TexCoord,
                ..
            }
        ));
        assert!(unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").is_err());
        assert!(unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -1 -2 -3\n").is_err());
    }

    #[test]
    fn test_extreme_indices_are_out_of_range() {
        let err = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -9223372036854775808 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            MeshError::OutOfRange {
                kind: IndexKind::Position,
                index: i64::MIN,
                ..
            }
        ));
        let err = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9223372036854775807\n").unwrap_err();
        assert!(matches!(err, MeshError::OutOfRange { .. }));
    }

    #[test]
    fn test_second_object_uses_offsets() {
        let doc = "o A\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.2 0.2\nf 1/1 2/1 3/1\n\
                   o B\nv 5 5 5\nv 6 5 5\nv 5 6 5\nvt 0.7 0.7\nf 4/2 5/2 6/2\n";
        let objects = unpack_with(doc, UvClaimPolicy::ZeroSentinel).unwrap();
        assert_eq!(objects.len(), 2);
        let b = &objects[1];
        assert_eq!(b.name, "B");
        assert_eq!(b.indices, vec![0, 1, 2]);
        assert_eq!(b.positions[0], glm::vec3(5.0, 5.0, 5.0));
        assert_eq!(b.uvs.as_ref().unwrap()[0], glm::vec2(0.7, 0.7));
    }

    #[test]
    fn test_mixed_corner_forms_rejected() {
        let err = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("mixes"));
    }

    #[test]
    fn test_malformed_corner() {
        assert!(unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/a 2 3\n").is_err());
        assert!(unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1/1 2 3\n").is_err());
    }

    #[test]
    fn test_usemtl_names_collected_in_order() {
        let obj = unpack("v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl Red\nf 1 2 3\nusemtl Blue Steel\n").unwrap();
        assert_eq!(obj.material_refs, vec!["Red", "Blue Steel"]);
    }

    #[test]
    fn test_bad_vertex_number() {
        let err = unpack("v 0 zero 0\nf 1 1 1\n").unwrap_err();
        assert!(matches!(err, MeshError::Format { line: 1, .. }));
    }
}
