// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render specs
//!
//! Verify `panel render` turns manifests into pages.

use crate::prelude::*;

const ROWS_MANIFEST: &str = r#"
[define_dynamic]
page = "rows.tpl"
row = "page"

[assign]
TITLE = "Domains"

[[parse]]
assign = { NAME = "example.com" }
target = "ROW"
template = ".row"

[[parse]]
assign = { NAME = "example.org" }
target = "ROW"
template = ".row"

[[parse]]
target = "PAGE"
template = "page"
"#;

#[test]
fn render_prints_last_parse_result() {
    let temp = Project::empty();
    temp.file("rows.tpl", ROWS_TEMPLATE);
    temp.file("page.toml", ROWS_MANIFEST);

    temp.panel()
        .args(&["render", "page.toml"])
        .passes()
        .stdout_eq("<h1>Domains</h1>\n<ul>\n<li>example.com</li>\n<li>example.org</li>\n</ul>\n");
}

#[test]
fn render_prints_selected_namespace() {
    let temp = Project::empty();
    temp.file("rows.tpl", ROWS_TEMPLATE);
    temp.file("page.toml", ROWS_MANIFEST);

    temp.panel()
        .args(&["render", "page.toml", "--namespace", "ROW"])
        .passes()
        .stdout_eq("<li>example.com</li>\n<li>example.org</li>\n");
}

#[test]
fn render_uses_manifest_output_namespace() {
    let temp = Project::empty();
    temp.file("rows.tpl", ROWS_TEMPLATE);
    temp.file("page.toml", &format!("output = \"TITLE\"\n{ROWS_MANIFEST}"));

    temp.panel()
        .args(&["render", "page.toml"])
        .passes()
        .stdout_eq("Domains");
}

#[test]
fn render_writes_output_file() {
    let temp = Project::empty();
    temp.file("rows.tpl", ROWS_TEMPLATE);
    temp.file("page.toml", ROWS_MANIFEST);

    temp.panel()
        .args(&["render", "page.toml", "--output", "out.html"])
        .passes()
        .stdout_eq("");

    assert!(temp.read("out.html").contains("<li>example.org</li>"));
}

#[test]
fn render_expands_includes_under_root() {
    let temp = Project::empty();
    temp.file(
        "theme/shared/layout.tpl",
        "<body><!-- INCLUDE \"partials/nav.tpl\" -->{CONTENT}</body>",
    );
    temp.file("theme/shared/partials/nav.tpl", "<nav>{USER}</nav>");
    temp.file(
        "layout.toml",
        r#"
[define]
layout = "shared/layout.tpl"

[assign]
USER = "admin"
CONTENT = "<p>hi</p>"

[[parse]]
target = "LAYOUT"
template = "layout"
"#,
    );

    temp.panel()
        .args(&["--root", "theme", "render", "layout.toml"])
        .passes()
        .stdout_eq("<body><nav>admin</nav><p>hi</p></body>");
}

#[test]
fn unassigned_block_renders_its_body() {
    let temp = Project::empty();
    temp.file("rows.tpl", ROWS_TEMPLATE);
    temp.file(
        "page.toml",
        r#"
[define_dynamic]
page = "rows.tpl"
row = "page"

[assign]
TITLE = "T"
NAME = "only"

[[parse]]
target = "PAGE"
template = "page"
"#,
    );

    temp.panel()
        .args(&["render", "page.toml"])
        .passes()
        .stdout_has("<li>only</li>");
}

#[test]
fn debug_logging_traces_events_on_stderr() {
    let temp = Project::empty();
    temp.file("rows.tpl", ROWS_TEMPLATE);
    temp.file("page.toml", ROWS_MANIFEST);

    temp.panel()
        .env("RUST_LOG", "debug")
        .args(&["render", "page.toml"])
        .passes()
        .stderr_has("onRenderStart")
        .stderr_has("onParseTemplate")
        .stderr_has("onRenderEnd")
        .stdout_has("<li>example.com</li>");
}
