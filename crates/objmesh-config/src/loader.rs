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


//! Reading configuration files and applying environment overrides

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use crate::validation::Validator;
use objmesh_loader::UvClaimPolicy;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::InvalidPath(path.to_path_buf())),
        }
    }

    /// Get format name as string
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
        }
    }
}

/// Environment variable overriding `loader.uv_claim`
pub const ENV_UV_CLAIM: &str = "OBJMESH_UV_CLAIM";
/// Environment variable overriding `loader.load_textures`
pub const ENV_LOAD_TEXTURES: &str = "OBJMESH_LOAD_TEXTURES";
/// Environment variable overriding `observability.log_level`
pub const ENV_LOG_LEVEL: &str = "OBJMESH_LOG_LEVEL";
/// Environment variable overriding `observability.log_format`
pub const ENV_LOG_FORMAT: &str = "OBJMESH_LOG_FORMAT";

/// Configuration loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    validate: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        ConfigLoader { validate: true }
    }

    /// Create a loader without validation
    pub fn without_validation() -> Self {
        ConfigLoader { validate: false }
    }

    /// Load configuration from a file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Config> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;

        info!(
            "Loaded {} configuration file: {}",
            format.name(),
            path.display()
        );

        self.load_from_string(&content, format)
    }

    /// Load configuration from a string
    pub fn load_from_string(&self, content: &str, format: ConfigFormat) -> ConfigResult<Config> {
        let config: Config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };

        debug!("Configuration loaded from {}", format.name());

        if self.validate {
            config.validate()?;
        }

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_overrides<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Config> {
        let mut config = self.load_file(path)?;
        self.apply_env_overrides(&mut config)?;
        Ok(config)
    }

    /// Load `path` when given, otherwise start from defaults; environment
    /// overrides apply either way.
    pub fn resolve(&self, path: Option<&Path>) -> ConfigResult<Config> {
        match path {
            Some(path) => self.load_with_overrides(path),
            None => {
                let mut config = Config::default();
                self.apply_env_overrides(&mut config)?;
                Ok(config)
            }
        }
    }

    /// Apply `OBJMESH_*` environment variable overrides
    pub fn apply_env_overrides(&self, config: &mut Config) -> ConfigResult<()> {
        self.apply_overrides_from(config, |name| std::env::var(name).ok())
    }

    /// Apply overrides looked up through `lookup` instead of the process
    /// environment
    pub fn apply_overrides_from<F>(&self, config: &mut Config, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Loader settings
        if let Some(value) = lookup(ENV_UV_CLAIM) {
            config.loader.uv_claim = parse_uv_claim(&value)?;
        }
        if let Some(value) = lookup(ENV_LOAD_TEXTURES) {
            config.loader.load_textures = parse_bool(ENV_LOAD_TEXTURES, &value)?;
        }

        // Observability settings
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.observability.log_level = value;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            config.observability.log_format = value;
        }

        if self.validate {
            config.validate()?;
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_uv_claim(value: &str) -> ConfigResult<UvClaimPolicy> {
    match value.to_lowercase().replace('-', "_").as_str() {
        "zero_sentinel" => Ok(UvClaimPolicy::ZeroSentinel),
        "explicit" => Ok(UvClaimPolicy::Explicit),
        _ => Err(ConfigError::env_var_parsing_error(
            ENV_UV_CLAIM,
            value,
            "expected 'zero_sentinel' or 'explicit'",
        )),
    }
}

/// Parse boolean from string (accepts: true, false, yes, no, 1, 0, on, off)
fn parse_bool(variable: &str, value: &str) -> ConfigResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::env_var_parsing_error(
            variable,
            value,
            "expected 'true', 'false', 'yes', 'no', '1', '0', 'on', or 'off'",
        )),
    }
}
