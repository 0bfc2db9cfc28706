// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template engine configuration

use crate::error::TemplateError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_file_extensions() -> Vec<String> {
    vec![".tpl".to_string(), ".phtml".to_string()]
}

fn default_max_include_depth() -> usize {
    16
}

fn default_max_substitutions() -> usize {
    100_000
}

/// Settings for a `TemplateEngine`, usually read from TOML:
///
/// ```toml
/// root_dir = "themes/default"
/// file_extensions = [".tpl", ".phtml"]
/// max_include_depth = 16
/// max_substitutions = 100000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Directory every template path is relative to
    pub root_dir: PathBuf,
    /// A dynamic definition ending in one of these names a file; anything
    /// else names the parent template of a block
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,
    #[serde(default = "default_max_include_depth")]
    pub max_include_depth: usize,
    /// Replacements allowed in one substitution pass
    #[serde(default = "default_max_substitutions")]
    pub max_substitutions: usize,
}

impl TemplateConfig {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            file_extensions: default_file_extensions(),
            max_include_depth: default_max_include_depth(),
            max_substitutions: default_max_substitutions(),
        }
    }

    /// Parse configuration from TOML text (not validated)
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        Ok(toml::from_str(content)?)
    }

    /// Load and validate a configuration file.
    ///
    /// A relative `root_dir` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        if config.root_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.root_dir = parent.join(&config.root_dir);
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that the root directory exists
    pub fn validate(&self) -> Result<(), TemplateError> {
        if !self.root_dir.is_dir() {
            return Err(TemplateError::InvalidRoot(self.root_dir.clone()));
        }
        Ok(())
    }

    /// Whether a definition value names a template file
    pub fn is_template_file(&self, value: &str) -> bool {
        self.file_extensions.iter().any(|ext| value.ends_with(ext.as_str()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
