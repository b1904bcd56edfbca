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


//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("IO error reading configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML syntax or schema error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// JSON syntax or schema error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonParseError(#[from] serde_json::error::Error),

    /// Writing a configuration back out failed
    #[error("Failed to serialize configuration: {0}")]
    SerializationError(String),

    /// Extension is not one of toml, yaml, yml, json
    #[error("Unsupported configuration format: {0}. Supported formats: toml, yaml, json")]
    UnsupportedFormat(String),

    /// Configuration file does not exist
    #[error("Configuration file not found at path: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Path has no extension to infer a format from
    #[error("Invalid configuration path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// An `OBJMESH_*` variable held an unusable value
    #[error("Environment variable parsing error: {variable_name}={value}. {reason}")]
    EnvVarParsingError {
        /// Variable name
        variable_name: String,
        /// Offending value
        value: String,
        /// What was expected
        reason: String,
    },

    /// A field holds a value outside its allowed set
    #[error("Invalid configuration value for field '{field}': {reason}")]
    InvalidValue {
        /// Dotted field path
        field: String,
        /// What was expected
        reason: String,
    },
}

impl ConfigError {
    /// Error for an environment variable that failed to parse
    pub fn env_var_parsing_error(
        variable_name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::EnvVarParsingError {
            variable_name: variable_name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Error for a field with an invalid value
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
