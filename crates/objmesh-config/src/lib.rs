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


//! Configuration management for ObjMesh
//!
//! Settings can be written as TOML, YAML or JSON and every field has a
//! default, so an empty file is a valid configuration. `OBJMESH_*`
//! environment variables override file values.
//!
//! ```toml
//! [loader]
//! uv_claim = "zero_sentinel"   # or "explicit"
//! load_textures = true
//!
//! [observability]
//! log_level = "info"
//! log_format = "pretty"        # pretty | compact | json
//! ```
//!
//! # Example
//!
//! ```no_run
//! use objmesh_config::ConfigLoader;
//! use objmesh_loader::ModelLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new().load_with_overrides("objmesh.toml")?;
//! let loader = ModelLoader::new(config.load_options());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

// Re-export commonly used items
pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ConfigFormat, ConfigLoader, ENV_LOAD_TEXTURES, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_UV_CLAIM,
};
pub use schema::*;
pub use validation::Validator;
