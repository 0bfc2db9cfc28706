// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration specs
//!
//! Verify how `panel` finds its configuration file.

use crate::prelude::*;

const MANIFEST: &str = r#"
[define]
hello = "hello.tpl"

[[parse]]
assign = { NAME = "panel" }
target = "OUT"
template = "hello"
"#;

fn project() -> Project {
    let temp = Project::empty();
    temp.file("themes/default/hello.tpl", "Hello {NAME}");
    temp.file("page.toml", MANIFEST);
    temp
}

#[test]
fn config_flag_sets_template_root() {
    let temp = project();
    temp.file("conf/panel.toml", "root_dir = \"../themes/default\"\n");

    temp.panel()
        .args(&["--config", "conf/panel.toml", "render", "page.toml"])
        .passes()
        .stdout_eq("Hello panel");
}

#[test]
fn config_from_environment() {
    let temp = project();
    temp.file("panel.toml", "root_dir = \"themes/default\"\n");

    temp.panel()
        .env("PANEL_CONFIG", temp.path().join("panel.toml"))
        .args(&["render", "page.toml"])
        .passes()
        .stdout_eq("Hello panel");
}

#[test]
fn config_from_default_location() {
    let temp = project();
    temp.file(".xdg/panel/panel.toml", "root_dir = \"../../themes/default\"\n");
    // macOS ignores XDG_CONFIG_HOME
    temp.file(
        "Library/Application Support/panel/panel.toml",
        "root_dir = \"../../../themes/default\"\n",
    );

    temp.panel()
        .args(&["render", "page.toml"])
        .passes()
        .stdout_eq("Hello panel");
}

#[test]
fn root_flag_wins_over_config() {
    let temp = project();
    temp.file("themes/other/hello.tpl", "Hi {NAME}");
    temp.file("panel.toml", "root_dir = \"themes/default\"\n");

    temp.panel()
        .args(&["--config", "panel.toml", "--root", "themes/other", "render", "page.toml"])
        .passes()
        .stdout_eq("Hi panel");
}

#[test]
fn missing_config_file_fails() {
    let temp = project();

    temp.panel()
        .args(&["--config", "absent.toml", "render", "page.toml"])
        .fails()
        .stderr_has("absent.toml");
}

#[test]
fn unknown_config_key_fails() {
    let temp = project();
    temp.file("panel.toml", "root_dir = \".\"\nroot = \"x\"\n");

    temp.panel()
        .args(&["--config", "panel.toml", "render", "page.toml"])
        .fails()
        .stderr_has("unknown field");
}
