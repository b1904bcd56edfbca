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


//! End-to-end tests for configuration files and `objmesh config`

use objmesh_test_utils::{assert_objmesh_failure, assert_objmesh_success, TestScene};
use predicates::prelude::*;

#[test]
fn test_config_file_disables_textures() {
    let scene = TestScene::textured_cube();
    scene.write_text("objmesh.toml", "[loader]\nload_textures = false\n");

    assert_objmesh_success!(scene, "--config", "objmesh.toml", "inspect", "cube.obj")
        .stdout(predicate::str::contains("(not loaded)"));
}

#[test]
fn test_config_command_prints_effective_settings() {
    let scene = TestScene::new();
    scene.write_text("objmesh.yaml", "loader:\n  uv_claim: explicit\n");

    assert_objmesh_success!(scene, "config", "--config", "objmesh.yaml")
        .stdout(predicate::str::contains("uv_claim = \"explicit\""))
        .stdout(predicate::str::contains("[observability]"));
}

#[test]
fn test_invalid_config_fails() {
    let scene = TestScene::new();
    scene.write_text("objmesh.toml", "[observability]\nlog_level = \"chatty\"\n");

    assert_objmesh_failure!(scene, "--config", "objmesh.toml", "config")
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_environment_overrides_config_file() {
    let scene = TestScene::new();
    scene.write_text("objmesh.toml", "[loader]\nuv_claim = \"explicit\"\n");

    objmesh_test_utils::ObjmeshCommand::new()
        .in_dir(scene.path())
        .args(&["--config", "objmesh.toml", "config"])
        .into_inner()
        .env("OBJMESH_UV_CLAIM", "zero_sentinel")
        .assert()
        .success()
        .stdout(predicate::str::contains("uv_claim = \"zero_sentinel\""));
}
