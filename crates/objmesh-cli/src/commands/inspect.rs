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


use crate::output;
use crate::progress::ProgressTracker;
use anyhow::{Context, Result};
use clap::Parser;
use objmesh_config::Config;
use objmesh_loader::{BoundingBox, Model, ModelLoader, UvClaimPolicy};
use std::path::PathBuf;
use tracing::debug;

/// Load OBJ models and report their meshes
///
/// With `--quiet` nothing is printed on success, which turns the command
/// into a validity check driven by the exit status.
#[derive(Parser, Debug)]
pub struct InspectCmd {
    /// OBJ files to load
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Print a JSON array of model summaries
    #[arg(long)]
    pub json: bool,

    /// Skip decoding diffuse textures
    #[arg(long)]
    pub no_textures: bool,

    /// Treat every UV slot as unclaimed until a corner writes it
    #[arg(long)]
    pub explicit_uv: bool,
}

impl InspectCmd {
    pub fn execute(&self, config: &Config, quiet: bool) -> Result<()> {
        let mut options = config.load_options();
        if self.no_textures {
            options = options.with_load_textures(false);
        }
        if self.explicit_uv {
            options = options.with_uv_claim(UvClaimPolicy::Explicit);
        }
        debug!(?options, files = self.files.len(), "Inspecting models");

        let loader = ModelLoader::new(options);
        let tracker = ProgressTracker::new(quiet || self.files.len() < 2);
        let bar = tracker.file_bar("Loading models", self.files.len() as u64);

        let mut models = Vec::with_capacity(self.files.len());
        for file in &self.files {
            bar.set_message(file.display().to_string());
            let model = loader
                .load(file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            models.push(model);
            bar.inc(1);
        }
        bar.finish_and_clear();

        if quiet {
            return Ok(());
        }

        if self.json {
            let summaries: Vec<_> = models.iter().map(Model::summary).collect();
            let json = serde_json::to_string_pretty(&summaries)
                .context("Failed to serialize model summaries")?;
            println!("{}", json);
            return Ok(());
        }

        for model in &models {
            report(model);
            println!();
        }
        output::success(&format!(
            "Loaded {} model{}",
            models.len(),
            if models.len() == 1 { "" } else { "s" }
        ));
        Ok(())
    }
}

fn report(model: &Model) {
    let summary = model.summary();
    output::header(&model.source.display().to_string());
    output::detail("Meshes", &summary.mesh_count.to_string());
    output::detail("Materials", &summary.material_count.to_string());
    output::detail("Vertices", &summary.vertex_count.to_string());
    output::detail("Triangles", &summary.triangle_count.to_string());

    if model.is_empty() {
        output::warning("No drawable geometry");
        return;
    }
    output::detail("Bounds", &bounds(&model.bounding_box()));

    for mesh in model {
        let material = &mesh.material;
        output::item(&mesh.name);
        output::subdetail("Vertices", &mesh.vertex_count().to_string());
        output::subdetail("Triangles", &mesh.triangle_count().to_string());
        output::subdetail("UVs", if mesh.has_uvs() { "yes" } else { "no" });
        output::subdetail("Material", &material.name);
        let diffuse = material.diffuse;
        output::subdetail("Diffuse", &output::rgb([diffuse.x, diffuse.y, diffuse.z]));
        let texture = match (&material.diffuse_map_path, &material.diffuse_map) {
            (Some(path), Some(tex)) => {
                format!("{} ({}x{})", path.display(), tex.width, tex.height)
            }
            (Some(path), None) => format!("{} (not loaded)", path.display()),
            (None, _) => "none".to_string(),
        };
        output::subdetail("Texture", &texture);
        if material.is_transparent() {
            output::subdetail("Transparency", &format!("{:.2}", material.transparency));
        }
        output::subdetail("Bounds", &bounds(&mesh.bounding_box()));
    }

    let order: Vec<&str> = model.draw_order().map(|m| m.name.as_str()).collect();
    output::detail("Draw order", &order.join(", "));
}

fn bounds(bbox: &BoundingBox) -> String {
    if bbox.is_empty() {
        return "empty".to_string();
    }
    format!(
        "({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
        bbox.min[0], bbox.min[1], bbox.min[2], bbox.max[0], bbox.max[1], bbox.max[2]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_formatting() {
        let mut bbox = BoundingBox::new();
        assert_eq!(bounds(&bbox), "empty");
        bbox.expand(&objmesh_loader::glm::vec3(-1.0, 0.0, 2.5));
        bbox.expand(&objmesh_loader::glm::vec3(1.0, 1.0, 2.5));
        assert_eq!(
            bounds(&bbox),
            "(-1.000, 0.000, 2.500) .. (1.000, 1.000, 2.500)"
        );
    }
}
