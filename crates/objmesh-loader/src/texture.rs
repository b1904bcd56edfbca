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

//! Diffuse texture loading
//!
//! The loader only hands resolved paths to a [`TextureLoader`]; what a
//! texture *is* beyond CPU-side pixels is up to the renderer.

use crate::error::{MeshError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decoded RGBA8 texture owned by a material
#[derive(Clone, PartialEq, Eq)]
pub struct Texture {
    /// File the pixels were decoded from
    pub path: PathBuf,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("path", &self.path)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Service turning a resolved file path into a texture
pub trait TextureLoader {
    /// Load the texture at `path`. Only called for paths that exist.
    fn load(&self, path: &Path) -> Result<Texture>;
}

/// Texture loader backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTextureLoader;

impl ImageTextureLoader {
    /// Create a new image-backed texture loader
    pub fn new() -> Self {
        ImageTextureLoader
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load(&self, path: &Path) -> Result<Texture> {
        let decoded = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(source) => MeshError::io(path, source),
            other => MeshError::Texture {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })?;

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        debug!(path = %path.display(), width, height, "Decoded diffuse texture");

        Ok(Texture {
            path: path.to_path_buf(),
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}
