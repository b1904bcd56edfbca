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
use anyhow::{Context, Result};
use clap::Parser;
use objmesh_config::Config;
use objmesh_loader::{ImageTextureLoader, MaterialParser, MaterialSummary, ProgramHandle};
use std::path::PathBuf;

/// Parse a material library on its own and list its materials
#[derive(Parser, Debug)]
pub struct MaterialsCmd {
    /// MTL file to parse
    #[arg(value_name = "MTL")]
    pub file: PathBuf,

    /// Print a JSON array of material summaries
    #[arg(long)]
    pub json: bool,

    /// Skip decoding diffuse textures
    #[arg(long)]
    pub no_textures: bool,
}

impl MaterialsCmd {
    pub fn execute(&self, config: &Config, quiet: bool) -> Result<()> {
        let textures = ImageTextureLoader::new();
        let mut parser = MaterialParser::new(ProgramHandle::default());
        if config.loader.load_textures && !self.no_textures {
            parser = parser.with_textures(&textures);
        }

        let library = parser
            .parse_file(&self.file)
            .with_context(|| format!("Failed to parse {}", self.file.display()))?;

        if quiet {
            return Ok(());
        }

        let summaries: Vec<MaterialSummary> = library.iter().map(MaterialSummary::from).collect();
        if self.json {
            let json = serde_json::to_string_pretty(&summaries)
                .context("Failed to serialize material summaries")?;
            println!("{}", json);
            return Ok(());
        }

        output::header(&self.file.display().to_string());
        if summaries.is_empty() {
            output::warning("No materials defined");
            return Ok(());
        }
        for m in &summaries {
            output::item(&m.name);
            output::subdetail("Ambient", &output::rgb(m.ambient));
            output::subdetail("Diffuse", &output::rgb(m.diffuse));
            output::subdetail("Specular", &output::rgb(m.specular));
            output::subdetail("Shininess", &format!("{:.1}", m.specular_exponent));
            output::subdetail("Transparency", &format!("{:.2}", m.transparency));
            output::subdetail("Illumination", &m.illumination.to_string());
            if let Some(path) = &m.diffuse_map {
                let state = if m.texture_loaded { "loaded" } else { "not loaded" };
                output::subdetail("Texture", &format!("{} ({})", path.display(), state));
            }
        }
        output::success(&format!("Parsed {} materials", summaries.len()));
        Ok(())
    }
}
