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


//! Configuration schema

use objmesh_loader::{LoadOptions, UvClaimPolicy};
use serde::{Deserialize, Serialize};

/// Log levels accepted by `observability.log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Formats accepted by `observability.log_format`
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model loading behaviour
    pub loader: LoaderSettings,
    /// Logging
    pub observability: ObservabilitySettings,
}

impl Config {
    /// Options to build a `ModelLoader` with
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .with_uv_claim(self.loader.uv_claim)
            .with_load_textures(self.loader.load_textures)
    }

    /// Render as TOML, e.g. for `--print-config` style output
    pub fn to_toml(&self) -> crate::ConfigResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::ConfigError::SerializationError(e.to_string()))
    }
}

/// `[loader]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// How unclaimed UV slots are detected
    pub uv_claim: UvClaimPolicy,
    /// Decode diffuse textures that exist on disk
    pub load_textures: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        LoaderSettings {
            uv_claim: UvClaimPolicy::default(),
            load_textures: true,
        }
    }
}

/// `[observability]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilitySettings {
    /// Minimum level written to the log
    pub log_level: String,
    /// Log line layout
    pub log_format: String,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        ObservabilitySettings {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}
