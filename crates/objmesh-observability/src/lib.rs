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


//! Structured logging for ObjMesh
//!
//! Thin setup layer over `tracing-subscriber`: pick a [`LogFormat`], a
//! filter and an output, and install the global subscriber once at
//! startup. Library crates only emit through `tracing` macros.
//!
//! ```ignore
//! use objmesh_observability::{init_tracing_with_config, LogConfig, LogFormat};
//!
//! init_tracing_with_config(LogConfig::new().with_format(LogFormat::Json).with_level("info"))?;
//! tracing::info!("Application started");
//! ```

pub mod config;
pub mod initialization;

pub use config::{LogConfig, LogError, LogFormat, LogOutput};
pub use initialization::{init_tracing, init_tracing_with_config};

/// Tracing re-exports for convenience
pub use tracing::{debug, error, info, trace, warn, Level};
