// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const ROWS_TEMPLATE: &str = "<h1>{TITLE}</h1>
<ul>
<!-- BDP: row --><li>{NAME}</li>
<!-- EDP: row --></ul>
";

/// Throwaway project directory holding templates, manifests and config
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project, creating parent directories
    pub fn file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).unwrap()
    }

    /// `panel` running in the project, isolated from user configuration
    #[allow(deprecated)]
    pub fn panel(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("panel").unwrap();
        cmd.current_dir(self.path())
            .env_remove("PANEL_CONFIG")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env("HOME", self.path());
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().failure().code(1))
    }
}

pub struct RunAssert(Assert);

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Self(self.0.stderr(predicate::str::contains(needle)))
    }
}
