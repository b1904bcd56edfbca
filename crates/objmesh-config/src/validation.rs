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


//! Configuration validation

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{Config, LoaderSettings, ObservabilitySettings, LOG_FORMATS, LOG_LEVELS};

/// Validation for configuration sections
pub trait Validator {
    /// Check every field, returning the first problem found
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for Config {
    fn validate(&self) -> ConfigResult<()> {
        self.loader.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

impl Validator for LoaderSettings {
    fn validate(&self) -> ConfigResult<()> {
        // Both policies and both texture settings are meaningful
        Ok(())
    }
}

impl Validator for ObservabilitySettings {
    fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_level",
                format!("must be one of: {}", LOG_LEVELS.join(", ")),
            ));
        }

        if !LOG_FORMATS.contains(&self.log_format.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_format",
                format!("must be one of: {}", LOG_FORMATS.join(", ")),
            ));
        }

        Ok(())
    }
}
