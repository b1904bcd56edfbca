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


//! Integration tests for configuration files on disk

use objmesh_config::{Config, ConfigError, ConfigLoader};
use objmesh_loader::UvClaimPolicy;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("objmesh.toml");
    fs::write(&path, "[loader]\nuv_claim = \"explicit\"\n").unwrap();

    let config = ConfigLoader::new().load_file(&path).unwrap();
    assert_eq!(config.loader.uv_claim, UvClaimPolicy::Explicit);
    assert!(config.loader.load_textures);
}

#[test]
fn test_load_yml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("objmesh.yml");
    fs::write(&path, "observability:\n  log_level: trace\n").unwrap();

    let config = ConfigLoader::new().load_file(&path).unwrap();
    assert_eq!(config.observability.log_level, "trace");
}

#[test]
fn test_empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("objmesh.toml");
    fs::write(&path, "").unwrap();

    let config = ConfigLoader::new().load_file(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::new()
        .load_file(dir.path().join("absent.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("objmesh.ini");
    fs::write(&path, "[loader]\n").unwrap();

    let err = ConfigLoader::new().load_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "ini"));
}

#[test]
fn test_syntax_error_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("objmesh.json");
    fs::write(&path, "{ not json").unwrap();

    let err = ConfigLoader::new().load_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::JsonParseError(_)));
}

#[test]
fn test_resolve_prefers_given_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("objmesh.json");
    fs::write(&path, r#"{"observability": {"log_format": "json"}}"#).unwrap();

    let config = ConfigLoader::new().resolve(Some(path.as_path())).unwrap();
    assert_eq!(config.observability.log_format, "json");
}

#[test]
fn test_options_feed_model_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("objmesh.toml");
    fs::write(&path, "[loader]\nload_textures = false\n").unwrap();

    let config = ConfigLoader::new().load_file(&path).unwrap();
    let loader = objmesh_loader::ModelLoader::new(config.load_options());
    assert!(!loader.options().load_textures);
}
