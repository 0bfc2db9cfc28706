// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template file loading with `<!-- INCLUDE "path" -->` expansion

use crate::config::TemplateConfig;
use crate::error::TemplateError;
use panel_events::{names, EventAggregator};
use regex::Regex;
use serde_json::{json, Value};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static INCLUDE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!-- INCLUDE "([^"]+)" -->"#).expect("constant regex pattern is valid")
});

/// Reads template files from the template root.
///
/// Included paths are relative to the directory of the including file.
/// Every load is announced through the aggregator; listeners of the
/// "after" events may rewrite `templateContent`.
#[derive(Clone)]
pub struct Loader {
    root: PathBuf,
    max_include_depth: usize,
    events: EventAggregator,
}

impl Loader {
    pub fn new(config: &TemplateConfig, events: EventAggregator) -> Self {
        Self {
            root: config.root_dir.clone(),
            max_include_depth: config.max_include_depth,
            events,
        }
    }

    /// Load a template file relative to the root, includes expanded
    pub fn load(&self, path: &str) -> Result<String, TemplateError> {
        let relative = normalize(Path::new(""), path)?;
        self.events.dispatch(
            names::ON_BEFORE_ASSEMBLE_TEMPLATE_FILES,
            json!({ "templatePath": self.display_path(&relative) }),
        )?;

        let mut chain = Vec::new();
        self.load_file(&relative, &mut chain)
    }

    fn display_path(&self, relative: &Path) -> String {
        self.root.join(relative).display().to_string()
    }

    fn load_file(&self, relative: &Path, chain: &mut Vec<PathBuf>) -> Result<String, TemplateError> {
        let full = self.root.join(relative);
        if chain.iter().any(|p| p == relative) {
            return Err(TemplateError::IncludeCycle(full));
        }
        if chain.len() > self.max_include_depth {
            return Err(TemplateError::IncludeDepth {
                path: full,
                limit: self.max_include_depth,
            });
        }
        if !full.is_file() {
            return Err(TemplateError::FileNotFound(full));
        }

        let template_path = full.display().to_string();
        self.events.dispatch(
            names::ON_BEFORE_LOAD_TEMPLATE_FILE,
            json!({ "templatePath": &template_path }),
        )?;

        let content = std::fs::read_to_string(&full).map_err(|source| TemplateError::Io {
            path: full.clone(),
            source,
        })?;
        debug!(path = %full.display(), len = content.len(), "loaded template file");
        let content = self.announce(names::ON_AFTER_LOAD_TEMPLATE_FILE, &template_path, content)?;

        chain.push(relative.to_path_buf());
        let assembled = self.expand_includes(relative, &content, chain);
        chain.pop();

        self.announce(names::ON_AFTER_ASSEMBLE_TEMPLATE_FILES, &template_path, assembled?)
    }

    fn expand_includes(
        &self,
        relative: &Path,
        content: &str,
        chain: &mut Vec<PathBuf>,
    ) -> Result<String, TemplateError> {
        let base = relative.parent().unwrap_or(Path::new(""));
        let mut out = String::with_capacity(content.len());
        let mut last = 0;

        for caps in INCLUDE_PATTERN.captures_iter(content) {
            let (Some(whole), Some(target)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let included = normalize(base, target.as_str())?;
            debug!(from = %relative.display(), include = %included.display(), "expanding include");
            out.push_str(&content[last..whole.start()]);
            out.push_str(&self.load_file(&included, chain)?);
            last = whole.end();
        }
        out.push_str(&content[last..]);

        Ok(out)
    }

    /// Dispatch a content event and take back the (possibly rewritten) content
    fn announce(&self, event: &str, path: &str, content: String) -> Result<String, TemplateError> {
        if !self.events.has_listeners(event) {
            return Ok(content);
        }
        let event = self.events.dispatch(
            event,
            json!({ "templatePath": path, "templateContent": &content }),
        )?;
        Ok(match event.param("templateContent") {
            Some(Value::String(rewritten)) => rewritten.clone(),
            _ => content,
        })
    }
}

/// Join `path` onto `base` lexically, refusing to climb above the root
fn normalize(base: &Path, path: &str) -> Result<PathBuf, TemplateError> {
    let mut out = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(TemplateError::PathEscapesRoot(path.to_string()));
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
