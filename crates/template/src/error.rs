// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template resolution and rendering errors

use panel_events::EventError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a render
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("undefined template: {0}")]
    UndefinedTemplate(String),

    #[error("dynamic block '{block}' not found in template '{origin}'")]
    UndefinedBlock { block: String, origin: String },

    #[error("couldn't find the {} template file", .0.display())]
    FileNotFound(PathBuf),

    #[error("template path escapes the template root: {0}")]
    PathEscapesRoot(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template include cycle at {}", .0.display())]
    IncludeCycle(PathBuf),

    #[error("template includes nested deeper than {limit} at {}", path.display())]
    IncludeDepth { path: PathBuf, limit: usize },

    #[error("substitution limit of {0} exceeded (self-referencing value?)")]
    SubstitutionLimit(usize),

    #[error(transparent)]
    Event(#[from] EventError),
}
