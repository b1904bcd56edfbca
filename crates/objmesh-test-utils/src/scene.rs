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


//! Temporary scene directories for integration tests.

use crate::fixtures::TestFixtures;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding model, material and texture files.
///
/// # Example
/// ```ignore
/// use objmesh_test_utils::TestScene;
///
/// let scene = TestScene::new();
/// let obj = scene.write_text("tri.obj", TestFixtures::TRIANGLE_OBJ);
/// ```
pub struct TestScene {
    temp_dir: TempDir,
}

impl TestScene {
    /// Create a new empty scene directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Scene with the textured cube, its material library and texture.
    pub fn textured_cube() -> Self {
        let scene = Self::new();
        scene.write_text("cube.obj", TestFixtures::CUBE_OBJ);
        scene.write_text("cube.mtl", TestFixtures::CUBE_MTL);
        scene.write_png("crate.png", 4, 4);
        scene
    }

    /// Get the path to the scene directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file inside the scene.
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write raw bytes, creating parent directories.
    pub fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.file(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write a text file.
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(name, content.as_bytes())
    }

    /// Write a checkerboard PNG of the given size.
    pub fn write_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.file(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        TestFixtures::checkerboard(width, height)
            .save(&path)
            .expect("Failed to write PNG");
        path
    }
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}
