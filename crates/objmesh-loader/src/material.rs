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

//! Material library (`.mtl`) parsing
//!
//! A library is a sequence of blocks, each opened by `newmtl <name>`:
//!
//! ```text
//! newmtl Red
//! Ka 0.1 0 0
//! Kd 1 0 0
//! Ks 0.5 0.5 0.5
//! Ns 32
//! d 1.0
//! illum 2
//! map_Kd textures/red.png
//! ```
//!
//! Only the directives above are understood; everything else is skipped.

use crate::error::{MeshError, Result};
use crate::path::resolve_reference;
use crate::record::{parse_floats, parse_int, read_document, source_lines, SourceLine};
use crate::texture::{Texture, TextureLoader};
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Name given to the material used by objects without a resolvable `usemtl`
pub const DEFAULT_MATERIAL_NAME: &str = "default";

/// Opaque handle to the shader program a renderer draws a material with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProgramHandle(pub u32);

/// MTL illumination model (`illum 0` .. `illum 10`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IlluminationMode {
    /// 0: colour on, ambient off
    #[default]
    ColorOnAmbientOff,
    /// 1: colour on, ambient on
    ColorOnAmbientOn,
    /// 2: highlight on
    HighlightOn,
    /// 3: reflection on, ray trace on
    ReflectionOnRaytraceOn,
    /// 4: glass transparency, ray traced reflection
    TransparencyGlassReflectionRaytraceOn,
    /// 5: Fresnel reflection, ray trace on
    ReflectionFresnelRaytraceOn,
    /// 6: refraction, Fresnel off, ray trace on
    RefractionFresnelOffRaytraceOn,
    /// 7: refraction, Fresnel on, ray trace on
    RefractionFresnelOnRaytraceOn,
    /// 8: reflection on, ray trace off
    ReflectionOnRaytraceOff,
    /// 9: glass transparency, ray trace off
    TransparencyGlassRaytraceOff,
    /// 10: casts shadows onto invisible surfaces
    CastsShadowsOntoInvisibleSurfaces,
}

impl IlluminationMode {
    /// Numeric `illum` value
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for IlluminationMode {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        use IlluminationMode::*;
        Ok(match value {
            0 => ColorOnAmbientOff,
            1 => ColorOnAmbientOn,
            2 => HighlightOn,
            3 => ReflectionOnRaytraceOn,
            4 => TransparencyGlassReflectionRaytraceOn,
            5 => ReflectionFresnelRaytraceOn,
            6 => RefractionFresnelOffRaytraceOn,
            7 => RefractionFresnelOnRaytraceOn,
            8 => ReflectionOnRaytraceOff,
            9 => TransparencyGlassRaytraceOff,
            10 => CastsShadowsOntoInvisibleSurfaces,
            other => return Err(other),
        })
    }
}

/// Shading properties of one named material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Library key
    pub name: String,
    /// `Ka`
    pub ambient: glm::Vec3,
    /// `Kd`
    pub diffuse: glm::Vec3,
    /// `Ks`
    pub specular: glm::Vec3,
    /// `Ns`
    pub specular_exponent: f32,
    /// `d`; 1.0 is fully opaque
    pub transparency: f32,
    /// `illum`
    pub illumination: IlluminationMode,
    /// Resolved `map_Kd` reference, recorded even when the file is missing
    pub diffuse_map_path: Option<PathBuf>,
    /// Decoded `map_Kd`, present only when the file existed and was loaded
    pub diffuse_map: Option<Texture>,
    /// Program the renderer binds for this material
    pub program: ProgramHandle,
}

/// Uniform values a renderer sets before drawing with a material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialBindings {
    /// `diffuse` colour
    pub diffuse: [f32; 3],
    /// `transparency`
    pub transparency: f32,
    /// Whether the diffuse map is bound
    pub use_texture: bool,
    /// Texture unit the diffuse map is bound to
    pub texture_unit: u32,
    /// Program to use
    pub program: ProgramHandle,
}

impl Material {
    /// Empty material as it looks right after `newmtl <name>`
    fn named(name: impl Into<String>, program: ProgramHandle) -> Self {
        Material {
            name: name.into(),
            ambient: glm::Vec3::zeros(),
            diffuse: glm::Vec3::zeros(),
            specular: glm::Vec3::zeros(),
            specular_exponent: 0.0,
            transparency: 1.0,
            illumination: IlluminationMode::default(),
            diffuse_map_path: None,
            diffuse_map: None,
            program,
        }
    }

    /// Opaque white, untextured material
    pub fn default_for(program: ProgramHandle) -> Self {
        Material {
            ambient: glm::vec3(1.0, 1.0, 1.0),
            diffuse: glm::vec3(1.0, 1.0, 1.0),
            ..Material::named(DEFAULT_MATERIAL_NAME, program)
        }
    }

    /// `true` when the material needs blending
    pub fn is_transparent(&self) -> bool {
        self.transparency != 1.0
    }

    /// `true` when a diffuse texture was loaded
    pub fn is_textured(&self) -> bool {
        self.diffuse_map.is_some()
    }

    /// Serializable overview of the material
    pub fn summary(&self) -> MaterialSummary {
        MaterialSummary::from(self)
    }

    /// Values for the renderer's shader uniforms
    pub fn bindings(&self) -> MaterialBindings {
        MaterialBindings {
            diffuse: [self.diffuse.x, self.diffuse.y, self.diffuse.z],
            transparency: self.transparency,
            use_texture: self.diffuse_map.is_some(),
            texture_unit: 0,
            program: self.program,
        }
    }
}

/// Serializable view of a material for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSummary {
    /// Library key
    pub name: String,
    /// `Ka`
    pub ambient: [f32; 3],
    /// `Kd`
    pub diffuse: [f32; 3],
    /// `Ks`
    pub specular: [f32; 3],
    /// `Ns`
    pub specular_exponent: f32,
    /// `d`
    pub transparency: f32,
    /// `illum` as a number
    pub illumination: u8,
    /// Resolved `map_Kd` path, if any
    pub diffuse_map: Option<PathBuf>,
    /// Whether the diffuse map was decoded
    pub texture_loaded: bool,
}

impl From<&Material> for MaterialSummary {
    fn from(material: &Material) -> Self {
        let rgb = |v: &glm::Vec3| [v.x, v.y, v.z];
        MaterialSummary {
            name: material.name.clone(),
            ambient: rgb(&material.ambient),
            diffuse: rgb(&material.diffuse),
            specular: rgb(&material.specular),
            specular_exponent: material.specular_exponent,
            transparency: material.transparency,
            illumination: material.illumination.as_u8(),
            diffuse_map: material.diffuse_map_path.clone(),
            texture_loaded: material.diffuse_map.is_some(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::default_for(ProgramHandle::default())
    }
}

/// Name-keyed collection of materials, kept in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
    by_name: HashMap<String, usize>,
}

impl MaterialLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material. The first definition of a name wins; returns `false`
    /// if `material` was discarded as a duplicate.
    pub fn insert(&mut self, material: Material) -> bool {
        if self.by_name.contains_key(&material.name) {
            return false;
        }
        self.by_name
            .insert(material.name.clone(), self.materials.len());
        self.materials.push(material);
        true
    }

    /// Look up a material by name
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.by_name.get(name).map(|&idx| &self.materials[idx])
    }

    /// Look up a material, falling back to `default` when it is unknown
    pub fn resolve<'a>(&'a self, name: &str, default: &'a Material) -> &'a Material {
        self.get(name).unwrap_or(default)
    }

    /// Merge another library into this one, keeping existing names
    pub fn extend(&mut self, other: MaterialLibrary) {
        for material in other.materials {
            let name = material.name.clone();
            if !self.insert(material) {
                debug!(material = %name, "Duplicate material across libraries ignored");
            }
        }
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// `true` if the library holds no materials
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Materials in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}

/// Reads `.mtl` files into a [`MaterialLibrary`]
pub struct MaterialParser<'a> {
    program: ProgramHandle,
    textures: Option<&'a dyn TextureLoader>,
}

impl<'a> MaterialParser<'a> {
    /// Parser that records texture paths but never decodes them
    pub fn new(program: ProgramHandle) -> Self {
        MaterialParser {
            program,
            textures: None,
        }
    }

    /// Decode existing diffuse maps with `loader`
    pub fn with_textures(mut self, loader: &'a dyn TextureLoader) -> Self {
        self.textures = Some(loader);
        self
    }

    /// Read and parse a material library file
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn parse_file(&self, path: &Path) -> Result<MaterialLibrary> {
        let content = read_document(path)?;
        let library = self.parse_str(&content, path)?;
        info!(materials = library.len(), "Loaded material library");
        Ok(library)
    }

    /// Parse material library text. `path` is used for error messages and
    /// to resolve `map_Kd` references.
    pub fn parse_str(&self, content: &str, path: &Path) -> Result<MaterialLibrary> {
        let mut library = MaterialLibrary::new();
        let mut block: Vec<SourceLine<'_>> = Vec::new();

        for line in source_lines(content) {
            if line.is_comment() {
                continue;
            }

            if line.keyword() == "newmtl" && !block.is_empty() {
                self.finish_block(&block, path, &mut library)?;
                block.clear();
            }

            block.push(line);
        }

        // A library with a single material never sees a second `newmtl`
        if !block.is_empty() {
            self.finish_block(&block, path, &mut library)?;
        }

        Ok(library)
    }

    fn finish_block(
        &self,
        block: &[SourceLine<'_>],
        path: &Path,
        library: &mut MaterialLibrary,
    ) -> Result<()> {
        let material = self.parse_block(block, path)?;
        let name = material.name.clone();
        if !library.insert(material) {
            debug!(material = %name, "Duplicate material definition ignored");
        }
        Ok(())
    }

    fn parse_block(&self, block: &[SourceLine<'_>], path: &Path) -> Result<Material> {
        let header = block[0];
        if header.keyword() != "newmtl" {
            return Err(MeshError::format(
                path,
                header.number,
                format!("'{}' appears before any newmtl", header.keyword()),
            ));
        }
        let name = header.rest();
        if name.is_empty() {
            return Err(MeshError::format(path, header.number, "newmtl without a name"));
        }

        let mut material = Material::named(name, self.program);

        for line in &block[1..] {
            match line.keyword() {
                "Ka" => material.ambient = glm::Vec3::from(parse_floats::<3>(line, path)?),
                "Kd" => material.diffuse = glm::Vec3::from(parse_floats::<3>(line, path)?),
                "Ks" => material.specular = glm::Vec3::from(parse_floats::<3>(line, path)?),
                "Ns" => material.specular_exponent = parse_floats::<1>(line, path)?[0],
                "d" => material.transparency = parse_floats::<1>(line, path)?[0],
                "illum" => {
                    let value = parse_int(line, path)?;
                    material.illumination = IlluminationMode::try_from(value).map_err(|v| {
                        MeshError::format(
                            path,
                            line.number,
                            format!("illumination mode {} is outside 0..=10", v),
                        )
                    })?;
                }
                "map_Kd" => self.apply_diffuse_map(&mut material, line, path)?,
                _ => {}
            }
        }

        Ok(material)
    }

    fn apply_diffuse_map(
        &self,
        material: &mut Material,
        line: &SourceLine<'_>,
        path: &Path,
    ) -> Result<()> {
        let reference = line.rest();
        if reference.is_empty() {
            return Err(MeshError::format(path, line.number, "map_Kd without a file"));
        }

        let resolved = resolve_reference(reference, path);
        if resolved.is_file() {
            if let Some(loader) = self.textures {
                material.diffuse_map = Some(loader.load(&resolved)?);
            }
        } else {
            warn!(
                material = %material.name,
                texture = %resolved.display(),
                "Diffuse map not found, material will be untextured"
            );
        }
        material.diffuse_map_path = Some(resolved);
        Ok(())
    }
}
