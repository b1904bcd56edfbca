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

//! Wavefront OBJ/MTL loading into GPU-ready indexed meshes
//!
//! A document is split into objects, each object's faces are triangulated
//! and unpacked into a single indexed vertex stream (duplicating positions
//! along UV seams), smooth normals are computed, and the material named by
//! the object's `usemtl` lines is attached.
//!
//! # Example
//!
//! ```no_run
//! use objmesh_loader::{LoadOptions, ModelLoader};
//! use std::path::Path;
//!
//! # fn main() -> objmesh_loader::Result<()> {
//! let loader = ModelLoader::new(LoadOptions::default());
//! let model = loader.load(Path::new("assets/crate.obj"))?;
//!
//! for mesh in model.draw_order() {
//!     println!(
//!         "{}: {} triangles with '{}'",
//!         mesh.name,
//!         mesh.triangle_count(),
//!         mesh.material.name
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`segment`]: splits a document into per-object line groups
//! - [`unpack`]: triangulation and (position, UV) deduplication
//! - [`normals`]: area-weighted vertex normals
//! - [`material`]: MTL parsing and the material library
//! - [`path`]: resolving file references written by other tools
//! - [`texture`]: diffuse texture decoding

pub mod error;
pub mod loader;
pub mod material;
pub mod mesh;
pub mod normals;
pub mod path;
pub mod record;
pub mod segment;
pub mod texture;
pub mod unpack;

pub use error::{IndexKind, MeshError, Result};
pub use loader::{LoadOptions, ModelLoader};
pub use material::{
    IlluminationMode, Material, MaterialBindings, MaterialLibrary, MaterialParser, MaterialSummary,
    ProgramHandle, DEFAULT_MATERIAL_NAME,
};
pub use mesh::{BoundingBox, Mesh, MeshSummary, Model, ModelSummary};
pub use normals::compute_normals;
pub use path::resolve_reference;
pub use segment::{segment, IndexOffsets, ObjectGroup, Segmenter};
pub use texture::{ImageTextureLoader, Texture, TextureLoader};
pub use unpack::{FaceUnpacker, UnpackedObject, UvClaimPolicy, UNNAMED_OBJECT};

// Re-exported so callers can name vector types without a direct dependency
pub use nalgebra_glm as glm;
