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


use anyhow::{Context, Result};
use clap::Parser;
use objmesh_config::Config;

/// Print the effective configuration as TOML
///
/// Reflects the `--config` file, if any, with `OBJMESH_*` environment
/// overrides applied.
#[derive(Parser, Debug)]
pub struct ConfigCmd {}

impl ConfigCmd {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let rendered = config.to_toml().context("Failed to render configuration")?;
        print!("{}", rendered);
        Ok(())
    }
}
