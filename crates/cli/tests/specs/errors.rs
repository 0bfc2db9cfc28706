// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error specs
//!
//! Failures exit with code 1 and an `error:` line on stderr.

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.panel()
        .args(&["--help"])
        .passes()
        .stdout_has("render")
        .stdout_has("blocks");
}

#[test]
fn missing_manifest_fails() {
    let temp = Project::empty();

    temp.panel()
        .args(&["render", "absent.toml"])
        .fails()
        .stderr_has("error: failed to read manifest")
        .stderr_has("absent.toml");
}

#[test]
fn undefined_template_fails() {
    let temp = Project::empty();
    temp.file("page.toml", "[[parse]]\ntarget = \"OUT\"\ntemplate = \"ghost\"\n");

    temp.panel()
        .args(&["render", "page.toml"])
        .fails()
        .stderr_has("error: undefined template: ghost");
}

#[test]
fn unknown_output_namespace_fails() {
    let temp = Project::empty();
    temp.file("page.toml", "output = \"NOWHERE\"\n");

    temp.panel()
        .args(&["render", "page.toml"])
        .fails()
        .stderr_has("namespace 'NOWHERE'");
}

#[test]
fn include_escaping_root_fails() {
    let temp = Project::empty();
    temp.file("secret.tpl", "secret");
    temp.file("theme/page.tpl", "<!-- INCLUDE \"../secret.tpl\" -->");
    temp.file(
        "page.toml",
        "[define]\npage = \"page.tpl\"\n\n[[parse]]\ntarget = \"OUT\"\ntemplate = \"page\"\n",
    );

    temp.panel()
        .args(&["--root", "theme", "render", "page.toml"])
        .fails()
        .stderr_has("escapes the template root");
}

#[test]
fn self_referencing_value_fails() {
    let temp = Project::empty();
    temp.file(
        "page.toml",
        "[define_inline]\nt = \"{LOOP}\"\n\n[assign]\nLOOP = \"x{LOOP}\"\n\n[[parse]]\ntarget = \"OUT\"\ntemplate = \"t\"\n",
    );

    temp.panel()
        .args(&["render", "page.toml"])
        .fails()
        .stderr_has("substitution limit");
}
