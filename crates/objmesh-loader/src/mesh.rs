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

//! GPU-ready meshes and the model that owns them

use crate::material::{Material, MaterialLibrary, MaterialSummary};
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: [f32; 3],
    /// Maximum corner
    pub max: [f32; 3],
}

impl BoundingBox {
    /// Empty (inverted) box; the first `expand` snaps it to a point
    pub fn new() -> Self {
        BoundingBox {
            min: [f32::MAX; 3],
            max: [f32::MIN; 3],
        }
    }

    /// Grow the box to include `point`
    pub fn expand(&mut self, point: &glm::Vec3) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }

    /// `true` until a point has been added
    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    /// Edge lengths along x, y and z
    pub fn extent(&self) -> glm::Vec3 {
        if self.is_empty() {
            return glm::Vec3::zeros();
        }
        glm::vec3(
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        )
    }

    /// Midpoint of the box
    pub fn center(&self) -> glm::Vec3 {
        if self.is_empty() {
            return glm::Vec3::zeros();
        }
        glm::vec3(
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        )
    }

    /// Volume of the box, zero when empty
    pub fn volume(&self) -> f32 {
        let e = self.extent();
        e.x * e.y * e.z
    }

    /// Check if this bounding box overlaps with another
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (0..3).all(|axis| self.max[axis] >= other.min[axis] && self.min[axis] <= other.max[axis])
    }

    /// Smallest box containing both
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        for axis in 0..3 {
            out.min[axis] = out.min[axis].min(other.min[axis]);
            out.max[axis] = out.max[axis].max(other.max[axis]);
        }
        out
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

/// One drawable unit: indexed triangles with a single material
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Object or group name from the OBJ file
    pub name: String,
    /// Vertex positions, seam copies included
    pub positions: Vec<glm::Vec3>,
    /// Texture coordinates parallel to `positions`, when the object has any
    pub uvs: Option<Vec<glm::Vec2>>,
    /// Unit normals parallel to `positions`; zero for isolated vertices
    pub normals: Vec<glm::Vec3>,
    /// Triangle list, three entries per triangle
    pub indices: Vec<u32>,
    /// Material the mesh is drawn with
    pub material: Material,
}

impl Mesh {
    /// Number of render vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether a UV stream should be bound
    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }

    /// Bounds of every vertex position
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        for p in &self.positions {
            bbox.expand(p);
        }
        bbox
    }

    /// Serializable overview of the mesh
    pub fn summary(&self) -> MeshSummary {
        let bbox = self.bounding_box();
        MeshSummary {
            name: self.name.clone(),
            material: self.material.name.clone(),
            vertices: self.vertex_count(),
            triangles: self.triangle_count(),
            has_uvs: self.has_uvs(),
            transparent: self.material.is_transparent(),
            textured: self.material.is_textured(),
            bounding_box: (!bbox.is_empty()).then_some(bbox),
        }
    }
}

/// Everything loaded from one OBJ document
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Document the model came from
    pub source: PathBuf,
    /// Meshes in file order
    pub meshes: Vec<Mesh>,
    /// Every material parsed from the document's libraries
    pub materials: MaterialLibrary,
}

impl Model {
    /// Number of meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// `true` if the document produced no drawable geometry
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Meshes in file order
    pub fn iter(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter()
    }

    /// Look up a mesh by name; the first match wins
    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.name == name)
    }

    /// Opaque meshes first, then transparent ones, each in file order
    pub fn draw_order(&self) -> impl Iterator<Item = &Mesh> {
        let opaque = self.meshes.iter().filter(|m| !m.material.is_transparent());
        let transparent = self.meshes.iter().filter(|m| m.material.is_transparent());
        opaque.chain(transparent)
    }

    /// Bounds of the whole model
    pub fn bounding_box(&self) -> BoundingBox {
        self.meshes
            .iter()
            .map(Mesh::bounding_box)
            .fold(BoundingBox::new(), |acc, b| acc.union(&b))
    }

    /// Serializable overview of the model
    pub fn summary(&self) -> ModelSummary {
        let meshes: Vec<MeshSummary> = self.meshes.iter().map(Mesh::summary).collect();
        let bbox = self.bounding_box();
        ModelSummary {
            source: self.source.clone(),
            mesh_count: meshes.len(),
            vertex_count: meshes.iter().map(|m| m.vertices).sum(),
            triangle_count: meshes.iter().map(|m| m.triangles).sum(),
            material_count: self.materials.len(),
            bounding_box: (!bbox.is_empty()).then_some(bbox),
            meshes,
            materials: self.materials.iter().map(MaterialSummary::from).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a Mesh;
    type IntoIter = std::slice::Iter<'a, Mesh>;

    fn into_iter(self) -> Self::IntoIter {
        self.meshes.iter()
    }
}

/// Per-mesh statistics for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSummary {
    /// Mesh name
    pub name: String,
    /// Bound material name
    pub material: String,
    /// Render vertex count
    pub vertices: usize,
    /// Triangle count
    pub triangles: usize,
    /// Mesh carries texture coordinates
    pub has_uvs: bool,
    /// Drawn in the transparent pass
    pub transparent: bool,
    /// Material has a decoded diffuse map
    pub textured: bool,
    /// Bounds of the mesh, absent for meshes without vertices
    pub bounding_box: Option<BoundingBox>,
}

/// Model-level statistics for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Source document
    pub source: PathBuf,
    /// Number of meshes
    pub mesh_count: usize,
    /// Total render vertices
    pub vertex_count: usize,
    /// Total triangles
    pub triangle_count: usize,
    /// Materials parsed from all libraries
    pub material_count: usize,
    /// Bounds of all meshes
    pub bounding_box: Option<BoundingBox>,
    /// Per-mesh breakdown in file order
    pub meshes: Vec<MeshSummary>,
    /// Every parsed material in declaration order
    pub materials: Vec<MaterialSummary>,
}
