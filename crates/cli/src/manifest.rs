// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page manifests
//!
//! A manifest describes one page render in TOML: the templates to declare,
//! the namespaces to assign and the ordered parse steps.
//!
//! ```toml
//! output = "LAYOUT"
//!
//! [define_dynamic]
//! layout = "shared/layouts/ui.tpl"
//! page = "client/domains.tpl"
//! domain_item = "page"
//!
//! [assign]
//! TR_PAGE_TITLE = "Domains"
//!
//! [[parse]]
//! assign = { DOMAIN_NAME = "example.com" }
//! target = "DOMAIN_ITEM"
//! template = ".domain_item"
//! ```

use anyhow::{Context, Result};
use panel_template::{TemplateEngine, TemplateError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Namespace to print; the last parse result when absent
    #[serde(default)]
    pub output: Option<String>,
    /// Static templates: name to file
    #[serde(default)]
    pub define: BTreeMap<String, String>,
    /// Static inline templates: name to content
    #[serde(default)]
    pub define_inline: BTreeMap<String, String>,
    /// Dynamic templates: name to file, or block name to parent template
    #[serde(default)]
    pub define_dynamic: BTreeMap<String, String>,
    #[serde(default)]
    pub assign: BTreeMap<String, String>,
    #[serde(default)]
    pub parse: Vec<ParseStep>,
}

/// One `parse` call, preceded by its own assignments
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseStep {
    #[serde(default)]
    pub assign: BTreeMap<String, String>,
    pub target: String,
    /// Template name, `.`-prefixed to append
    pub template: String,
}

impl Manifest {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid manifest {}", path.display()))
    }

    /// Declare, assign and parse into `engine`, stopping at the first error
    pub fn apply(&self, engine: &mut TemplateEngine) -> Result<(), TemplateError> {
        engine.define_many(&self.define);
        for (name, content) in &self.define_inline {
            engine.define_no_file(name, content);
        }
        engine.define_dynamic_many(&self.define_dynamic);
        engine.assign_many(&self.assign);

        for step in &self.parse {
            engine.assign_many(&step.assign);
            engine.parse(&step.target, &step.template)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
