// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template engine: declarations, namespaces and parsing
//!
//! A page declares its templates, assigns values to namespaces and parses
//! templates into namespaces:
//!
//! ```ignore
//! let mut tpl = TemplateEngine::new(config, events)?;
//! tpl.define_dynamic_many([
//!     ("page", "client/domains.tpl"),
//!     ("domain_item", "page"),
//! ]);
//! for domain in domains {
//!     tpl.assign("DOMAIN_NAME", domain);
//!     tpl.parse("DOMAIN_ITEM", ".domain_item")?;
//! }
//! tpl.parse("LAYOUT_CONTENT", "page")?;
//! tpl.prnt(&mut std::io::stdout(), None)?;
//! ```

use crate::config::TemplateConfig;
use crate::error::TemplateError;
use crate::loader::Loader;
use crate::markers::divide;
use crate::substitute::substitute;
use panel_events::{names, EventAggregator};
use serde_json::json;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum StaticSource {
    File(String),
    Inline,
}

#[derive(Debug, Clone)]
struct StaticTemplate {
    source: StaticSource,
    /// Loaded (or inline) text, filled on first use
    content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DynamicSource {
    File(String),
    Inline,
    /// A block of another dynamic template
    Block { parent: String },
}

#[derive(Debug, Clone)]
struct DynamicTemplate {
    source: DynamicSource,
    /// Blocks already cut out of this template
    divided: bool,
}

/// Request-scoped template engine.
///
/// Holds the template declarations, the namespace table and the dynamic
/// block data of one page render. Files are read on first use and kept for
/// the lifetime of the engine.
pub struct TemplateEngine {
    config: TemplateConfig,
    events: EventAggregator,
    loader: Loader,
    statics: HashMap<String, StaticTemplate>,
    dynamics: HashMap<String, DynamicTemplate>,
    /// Raw and divided dynamic template text, plus every divided block
    /// under its name and its upper-cased name
    dynamic_data: HashMap<String, String>,
    namespaces: HashMap<String, String>,
    last_parsed: String,
}

impl TemplateEngine {
    pub fn new(config: TemplateConfig, events: EventAggregator) -> Result<Self, TemplateError> {
        config.validate()?;
        let loader = Loader::new(&config, events.clone());
        Ok(Self {
            config,
            events,
            loader,
            statics: HashMap::new(),
            dynamics: HashMap::new(),
            dynamic_data: HashMap::new(),
            namespaces: HashMap::new(),
            last_parsed: String::new(),
        })
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    pub fn events(&self) -> &EventAggregator {
        &self.events
    }

    pub fn root_dir(&self) -> &std::path::Path {
        &self.config.root_dir
    }

    /// Point the engine at another template root
    pub fn set_root_dir(&mut self, root: impl Into<PathBuf>) -> Result<(), TemplateError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TemplateError::InvalidRoot(root));
        }
        self.config.root_dir = root;
        self.loader = Loader::new(&self.config, self.events.clone());
        Ok(())
    }

    // -- namespaces --

    /// Store `value` under `namespace`, replacing any previous value
    pub fn assign(&mut self, namespace: impl Into<String>, value: impl Into<String>) {
        self.namespaces.insert(namespace.into(), value.into());
    }

    pub fn assign_many<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (namespace, value) in values {
            self.assign(namespace, value);
        }
    }

    /// Remove a namespace
    pub fn unsign(&mut self, namespace: &str) {
        self.namespaces.remove(namespace);
    }

    pub fn unsign_many<'n>(&mut self, namespaces: impl IntoIterator<Item = &'n str>) {
        for namespace in namespaces {
            self.unsign(namespace);
        }
    }

    pub fn namespace(&self, namespace: &str) -> Option<&str> {
        self.namespaces.get(namespace).map(String::as_str)
    }

    pub fn is_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    // -- declarations --

    /// Declare a static template read from `path` (relative to the root)
    pub fn define(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.statics.insert(
            name.into(),
            StaticTemplate {
                source: StaticSource::File(path.into()),
                content: None,
            },
        );
    }

    pub fn define_many<K, V>(&mut self, templates: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, path) in templates {
            self.define(name, path);
        }
    }

    /// Declare a static template from inline text
    pub fn define_no_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.statics.insert(
            name.into(),
            StaticTemplate {
                source: StaticSource::Inline,
                content: Some(content.into()),
            },
        );
    }

    /// Declare a dynamic template.
    ///
    /// `value` is a file path when it ends with one of the configured
    /// template extensions; otherwise it names the dynamic template that
    /// contains `name` as a block.
    pub fn define_dynamic(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let source = if self.config.is_template_file(&value) {
            DynamicSource::File(value)
        } else {
            DynamicSource::Block { parent: value }
        };
        let name = name.into();
        self.dynamic_data.remove(&name);
        self.dynamics.insert(
            name,
            DynamicTemplate {
                source,
                divided: false,
            },
        );
    }

    pub fn define_dynamic_many<K, V>(&mut self, templates: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in templates {
            self.define_dynamic(name, value);
        }
    }

    /// Declare a dynamic template from inline text
    pub fn define_no_file_dynamic(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        self.dynamic_data.insert(name.clone(), content.into());
        self.dynamics.insert(
            name,
            DynamicTemplate {
                source: DynamicSource::Inline,
                divided: false,
            },
        );
    }

    pub fn is_static_template(&self, name: &str) -> bool {
        self.statics.contains_key(name)
    }

    pub fn is_dynamic_template(&self, name: &str) -> bool {
        self.dynamics.contains_key(name)
    }

    // -- parsing --

    /// Render template `name` into namespace `target`.
    ///
    /// A leading `.` on `name` appends to `target` instead of replacing it.
    /// A name that is not a template but an assigned namespace is copied.
    pub fn parse(&mut self, target: &str, name: &str) -> Result<(), TemplateError> {
        self.events.dispatch(
            names::ON_PARSE_TEMPLATE,
            json!({ "pname": target, "tname": name }),
        )?;

        let (append, name) = match name.strip_prefix('.') {
            Some(name) => (true, name),
            None => (false, name),
        };

        let rendered = if self.statics.contains_key(name) {
            self.render_static(name)?
        } else if self.dynamics.contains_key(name) {
            self.render_dynamic(name)?
        } else if let Some(value) = self.namespaces.get(name) {
            let value = value.clone();
            self.write(target, value, append);
            return Ok(());
        } else {
            return Err(TemplateError::UndefinedTemplate(name.to_string()));
        };

        debug!(
            namespace = target,
            template = name,
            append,
            len = rendered.len(),
            "parsed template"
        );
        self.write(target, rendered, append);
        self.last_parsed = self.namespaces.get(target).cloned().unwrap_or_default();
        Ok(())
    }

    fn write(&mut self, target: &str, value: String, append: bool) {
        if append {
            self.namespaces
                .entry(target.to_string())
                .or_default()
                .push_str(&value);
        } else {
            self.namespaces.insert(target.to_string(), value);
        }
    }

    fn render_static(&mut self, name: &str) -> Result<String, TemplateError> {
        let Some(template) = self.statics.get_mut(name) else {
            return Err(TemplateError::UndefinedTemplate(name.to_string()));
        };
        if template.content.is_none() {
            if let StaticSource::File(path) = &template.source {
                template.content = Some(self.loader.load(path)?);
            }
        }

        let content = self
            .statics
            .get(name)
            .and_then(|t| t.content.as_deref())
            .unwrap_or_default();
        self.substitute(content)
    }

    fn render_dynamic(&mut self, name: &str) -> Result<String, TemplateError> {
        let origin = self.find_origin(name)?;
        self.ensure_divided(&origin)?;

        let Some(data) = self.dynamic_data.get(name) else {
            return Err(TemplateError::UndefinedBlock {
                block: name.to_string(),
                origin,
            });
        };
        self.substitute(data)
    }

    /// Walk block parents up to the file or inline template holding `name`
    fn find_origin(&self, name: &str) -> Result<String, TemplateError> {
        let mut current = name;
        let mut seen: Vec<&str> = Vec::new();
        loop {
            let Some(template) = self.dynamics.get(current) else {
                return Err(TemplateError::UndefinedTemplate(current.to_string()));
            };
            match &template.source {
                DynamicSource::Block { parent } => {
                    if seen.contains(&current) {
                        return Err(TemplateError::UndefinedTemplate(name.to_string()));
                    }
                    seen.push(current);
                    current = parent.as_str();
                }
                DynamicSource::File(_) | DynamicSource::Inline => return Ok(current.to_string()),
            }
        }
    }

    /// Load `origin` if needed and cut its blocks out, once
    fn ensure_divided(&mut self, origin: &str) -> Result<(), TemplateError> {
        let Some(template) = self.dynamics.get(origin) else {
            return Err(TemplateError::UndefinedTemplate(origin.to_string()));
        };
        if template.divided {
            return Ok(());
        }

        let raw = match &template.source {
            DynamicSource::File(path) => self.loader.load(path)?,
            DynamicSource::Inline => self.dynamic_data.get(origin).cloned().unwrap_or_default(),
            DynamicSource::Block { .. } => {
                return Err(TemplateError::UndefinedTemplate(origin.to_string()))
            }
        };

        let divided = divide(&raw);
        debug!(template = origin, blocks = divided.blocks.len(), "divided dynamic template");
        for block in divided.blocks {
            self.dynamic_data
                .insert(block.name.to_uppercase(), block.body.clone());
            self.dynamic_data.insert(block.name, block.body);
        }
        self.dynamic_data.insert(origin.to_string(), divided.outline);
        if let Some(template) = self.dynamics.get_mut(origin) {
            template.divided = true;
        }
        Ok(())
    }

    fn substitute(&self, data: &str) -> Result<String, TemplateError> {
        substitute(
            data,
            |name| {
                self.namespaces
                    .get(name)
                    .or_else(|| self.dynamic_data.get(name))
                    .map(String::as_str)
            },
            self.config.max_substitutions,
        )
    }

    // -- output --

    pub fn last_parse_result(&self) -> &str {
        &self.last_parsed
    }

    /// Replace the last parse result, and `namespace` too if it exists
    pub fn replace_last_parse_result(&mut self, content: impl Into<String>, namespace: Option<&str>) {
        let content = content.into();
        if let Some(value) = namespace.and_then(|ns| self.namespaces.get_mut(ns)) {
            value.clone_from(&content);
        }
        self.last_parsed = content;
    }

    /// Content `prnt` would emit: the namespace (empty when unknown), or the
    /// last parse result when no namespace is given
    pub fn output(&self, namespace: Option<&str>) -> &str {
        match namespace {
            Some(namespace) => self.namespace(namespace).unwrap_or_default(),
            None => &self.last_parsed,
        }
    }

    /// Write `output(namespace)` to `out`
    pub fn prnt<W: Write>(&self, out: &mut W, namespace: Option<&str>) -> std::io::Result<()> {
        out.write_all(self.output(namespace).as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
