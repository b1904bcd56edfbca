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


//! CLI command helpers for testing the `objmesh` binary.

use assert_cmd::Command;
use std::path::Path;

/// Creates a new `objmesh` Command for testing.
///
/// # Example
/// ```ignore
/// use objmesh_test_utils::objmesh;
///
/// objmesh()
///     .arg("inspect")
///     .arg(scene.path().join("cube.obj"))
///     .assert()
///     .success();
/// ```
#[allow(deprecated)] // cargo_bin is deprecated but still works for our use case
pub fn objmesh() -> Command {
    Command::cargo_bin("objmesh").expect("objmesh binary not found")
}

/// Fluent wrapper for common `objmesh` invocations.
pub struct ObjmeshCommand {
    cmd: Command,
}

impl ObjmeshCommand {
    /// Create a new command with colour off and no inherited log level.
    pub fn new() -> Self {
        let mut cmd = objmesh();
        cmd.env("NO_COLOR", "1").env_remove("OBJMESH_LOG_LEVEL");
        Self { cmd }
    }

    /// Set the working directory for the command.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Add an argument to the command.
    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Add multiple arguments to the command.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Execute the command and assert success.
    pub fn run_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Execute the command and assert failure.
    pub fn run_failure(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().failure()
    }

    /// Get the underlying Command for custom assertions.
    pub fn into_inner(self) -> Command {
        self.cmd
    }

    /// Run `objmesh inspect` on files inside `dir`.
    pub fn inspect(dir: &Path, files: &[&str]) -> assert_cmd::assert::Assert {
        let mut cmd = Self::new().in_dir(dir).arg("inspect");
        for file in files {
            cmd = cmd.arg(file);
        }
        cmd.into_inner().assert()
    }
}

impl Default for ObjmeshCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert that an `objmesh` command succeeds inside a scene.
#[macro_export]
macro_rules! assert_objmesh_success {
    ($scene:expr, $($arg:expr),+ $(,)?) => {
        $crate::ObjmeshCommand::new()
            .in_dir($scene.path())
            $(.arg($arg))+
            .run_success()
    };
}

/// Assert that an `objmesh` command fails inside a scene.
#[macro_export]
macro_rules! assert_objmesh_failure {
    ($scene:expr, $($arg:expr),+ $(,)?) => {
        $crate::ObjmeshCommand::new()
            .in_dir($scene.path())
            $(.arg($arg))+
            .run_failure()
    };
}
