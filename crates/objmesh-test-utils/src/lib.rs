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


//! # ObjMesh Test Utilities
//!
//! Shared helpers for ObjMesh tests:
//! - CLI command helpers for running the `objmesh` binary
//! - Temporary scene directories holding OBJ, MTL and texture files
//! - Sample documents and generated meshes
//! - Assertions for vectors, normals and index buffers

pub mod assertions;
pub mod cli;
pub mod fixtures;
pub mod scene;

// Re-export commonly used items at crate root
pub use assertions::*;
pub use cli::{objmesh, ObjmeshCommand};
pub use fixtures::TestFixtures;
pub use scene::TestScene;
