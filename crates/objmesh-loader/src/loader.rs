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

//! Top-level OBJ loading
//!
//! The document is streamed line by line through the [`Segmenter`]. Each
//! group it closes is unpacked, given normals and a material, and stored
//! straight away; `mtllib` lines load their libraries at the point they
//! appear, so a library only applies to objects that end after it.

use crate::error::Result;
use crate::material::{Material, MaterialLibrary, MaterialParser, ProgramHandle};
use crate::mesh::{Mesh, Model};
use crate::normals::compute_normals;
use crate::path::resolve_reference;
use crate::record::{read_document, source_lines, SourceLine};
use crate::segment::{ObjectGroup, Segmenter};
use crate::texture::{ImageTextureLoader, TextureLoader};
use crate::unpack::{FaceUnpacker, UvClaimPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Knobs for a [`ModelLoader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// How unclaimed UV slots are detected during deduplication
    pub uv_claim: UvClaimPolicy,
    /// Decode `map_Kd` textures that exist on disk
    pub load_textures: bool,
    /// Program handle stored on every material, default included
    pub program: ProgramHandle,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            uv_claim: UvClaimPolicy::default(),
            load_textures: true,
            program: ProgramHandle::default(),
        }
    }
}

impl LoadOptions {
    /// Set the UV claim policy
    pub fn with_uv_claim(mut self, policy: UvClaimPolicy) -> Self {
        self.uv_claim = policy;
        self
    }

    /// Enable or disable texture decoding
    pub fn with_load_textures(mut self, load: bool) -> Self {
        self.load_textures = load;
        self
    }

    /// Set the program handle given to materials
    pub fn with_program(mut self, program: ProgramHandle) -> Self {
        self.program = program;
        self
    }
}

/// Loads OBJ documents into [`Model`]s
#[derive(Debug, Clone, Default)]
pub struct ModelLoader<T = ImageTextureLoader> {
    options: LoadOptions,
    textures: T,
}

impl ModelLoader<ImageTextureLoader> {
    /// Loader decoding textures with the `image` crate
    pub fn new(options: LoadOptions) -> Self {
        ModelLoader {
            options,
            textures: ImageTextureLoader::new(),
        }
    }
}

impl<T: TextureLoader> ModelLoader<T> {
    /// Loader handing texture paths to a custom service
    pub fn with_texture_loader(options: LoadOptions, textures: T) -> Self {
        ModelLoader { options, textures }
    }

    /// Options this loader was built with
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load an OBJ file and every material library it references
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> Result<Model> {
        let text = read_document(path)?;
        self.load_document(&text, path)
    }

    /// Load OBJ text held in memory. `virtual_path` names the document in
    /// errors, and `mtllib` references are resolved next to it on disk.
    #[instrument(skip(self, text), fields(path = %virtual_path.display(), bytes = text.len()))]
    pub fn load_str(&self, text: &str, virtual_path: &Path) -> Result<Model> {
        self.load_document(text, virtual_path)
    }

    fn load_document(&self, text: &str, path: &Path) -> Result<Model> {
        let start = Instant::now();
        let mut build = DocumentBuild {
            source: path,
            unpacker: FaceUnpacker::new(path, self.options.uv_claim),
            default_material: Material::default_for(self.options.program),
            materials: MaterialLibrary::new(),
            libraries: HashSet::new(),
            meshes: Vec::new(),
        };

        let mut segmenter = Segmenter::new();
        for line in source_lines(text) {
            if let Some(group) = segmenter.push(line) {
                build.add_group(&group)?;
            }
            if line.keyword() == "mtllib" {
                self.load_libraries(&line, &mut build)?;
            }
        }
        if let Some(group) = segmenter.finish() {
            build.add_group(&group)?;
        }

        let model = Model {
            source: path.to_path_buf(),
            meshes: build.meshes,
            materials: build.materials,
        };

        info!(
            meshes = model.meshes.len(),
            materials = model.materials.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded model"
        );
        Ok(model)
    }

    fn load_libraries(&self, line: &SourceLine<'_>, build: &mut DocumentBuild<'_>) -> Result<()> {
        for reference in line.args() {
            let resolved = resolve_reference(reference, build.source);
            if !build.libraries.insert(resolved.clone()) {
                debug!(library = %resolved.display(), "Material library already loaded");
                continue;
            }

            let mut parser = MaterialParser::new(self.options.program);
            if self.options.load_textures {
                parser = parser.with_textures(&self.textures);
            }
            let library = parser.parse_file(&resolved)?;
            build.materials.extend(library);
        }
        Ok(())
    }
}

/// Per-document state threaded through one load
struct DocumentBuild<'a> {
    source: &'a Path,
    unpacker: FaceUnpacker<'a>,
    default_material: Material,
    materials: MaterialLibrary,
    libraries: HashSet<PathBuf>,
    meshes: Vec<Mesh>,
}

impl DocumentBuild<'_> {
    fn add_group(&mut self, group: &ObjectGroup<'_>) -> Result<()> {
        let unpacked = self.unpacker.unpack(group)?;
        if unpacked.indices.is_empty() {
            debug!(object = %unpacked.name, "Discarding object without faces");
            return Ok(());
        }

        let material = self.select_material(&unpacked.name, &unpacked.material_refs);
        let normals = compute_normals(&unpacked.positions, &unpacked.indices);

        self.meshes.push(Mesh {
            name: unpacked.name,
            positions: unpacked.positions,
            uvs: unpacked.uvs,
            normals,
            indices: unpacked.indices,
            material,
        });
        Ok(())
    }

    /// Last `usemtl` naming a known material wins; unknown names are skipped
    fn select_material(&self, object: &str, refs: &[String]) -> Material {
        let mut selected = None;
        for name in refs {
            match self.materials.get(name) {
                Some(material) => selected = Some(material),
                None => debug!(object, material = %name, "Unknown material ignored"),
            }
        }
        selected.unwrap_or(&self.default_material).clone()
    }
}
