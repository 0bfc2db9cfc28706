// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use panel_events::EventAggregator;
use panel_template::TemplateConfig;
use std::fs;
use tempfile::tempdir;

const DOMAINS: &str = r#"
output = "PAGE"

[define_dynamic]
page = "domains.tpl"
domain_item = "page"

[assign]
TITLE = "Domains"

[[parse]]
assign = { DOMAIN = "example.com" }
target = "DOMAIN_ITEM"
template = ".domain_item"

[[parse]]
assign = { DOMAIN = "example.org" }
target = "DOMAIN_ITEM"
template = ".domain_item"

[[parse]]
target = "PAGE"
template = "page"
"#;

#[test]
fn parses_all_sections() {
    let manifest = Manifest::from_toml_str(DOMAINS).unwrap();

    assert_eq!(manifest.output.as_deref(), Some("PAGE"));
    assert!(manifest.define.is_empty());
    assert_eq!(manifest.define_dynamic.len(), 2);
    assert_eq!(manifest.assign.get("TITLE").map(String::as_str), Some("Domains"));
    assert_eq!(manifest.parse.len(), 3);
    assert_eq!(manifest.parse[0].template, ".domain_item");
    assert!(manifest.parse[2].assign.is_empty());
}

#[test]
fn empty_manifest_is_valid() {
    let manifest = Manifest::from_toml_str("").unwrap();

    assert!(manifest.output.is_none());
    assert!(manifest.parse.is_empty());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(Manifest::from_toml_str("outptu = \"PAGE\"").is_err());
    assert!(Manifest::from_toml_str("[[parse]]\ntarget = \"A\"\ntemplate = \"a\"\nappend = true").is_err());
}

#[test]
fn parse_step_requires_target_and_template() {
    assert!(Manifest::from_toml_str("[[parse]]\ntemplate = \"a\"").is_err());
    assert!(Manifest::from_toml_str("[[parse]]\ntarget = \"A\"").is_err());
}

#[test]
fn apply_renders_steps_in_order() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("domains.tpl"),
        "<h1>{TITLE}</h1><!-- BDP: domain_item --><li>{DOMAIN}</li><!-- EDP: domain_item -->",
    )
    .unwrap();
    let mut engine =
        TemplateEngine::new(TemplateConfig::new(dir.path()), EventAggregator::new()).unwrap();

    Manifest::from_toml_str(DOMAINS).unwrap().apply(&mut engine).unwrap();

    assert_eq!(
        engine.namespace("PAGE"),
        Some("<h1>Domains</h1><li>example.com</li><li>example.org</li>")
    );
}

#[test]
fn apply_uses_inline_definitions() {
    let dir = tempdir().unwrap();
    let manifest = Manifest::from_toml_str(
        r#"
[define_inline]
greeting = "Hello {NAME}"

[[parse]]
assign = { NAME = "admin" }
target = "OUT"
template = "greeting"
"#,
    )
    .unwrap();
    let mut engine =
        TemplateEngine::new(TemplateConfig::new(dir.path()), EventAggregator::new()).unwrap();

    manifest.apply(&mut engine).unwrap();

    assert_eq!(engine.last_parse_result(), "Hello admin");
}

#[test]
fn apply_stops_at_first_failing_step() {
    let dir = tempdir().unwrap();
    let manifest = Manifest::from_toml_str(
        r#"
[define_inline]
ok = "ok"

[[parse]]
target = "A"
template = "missing"

[[parse]]
target = "B"
template = "ok"
"#,
    )
    .unwrap();
    let mut engine =
        TemplateEngine::new(TemplateConfig::new(dir.path()), EventAggregator::new()).unwrap();

    let err = manifest.apply(&mut engine).unwrap_err();

    assert!(matches!(err, TemplateError::UndefinedTemplate(name) if name == "missing"));
    assert!(!engine.is_namespace("B"));
}

#[test]
fn load_reports_the_manifest_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.toml");
    fs::write(&path, "output = [").unwrap();

    let err = Manifest::load(&path).unwrap_err();

    assert!(err.to_string().contains("page.toml"));
}
