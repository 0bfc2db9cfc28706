// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file discovery

use anyhow::{Context, Result};
use panel_template::TemplateConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "PANEL_CONFIG";

/// Build the template configuration for this invocation.
///
/// The file comes from `--config`, then `$PANEL_CONFIG`, then
/// `<config dir>/panel/panel.toml` when it exists. Without a file the
/// current directory is the template root. `--root` overrides `root_dir`.
pub fn resolve(flag: Option<PathBuf>, root: Option<PathBuf>) -> Result<TemplateConfig> {
    let env = std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let default = dirs::config_dir().map(|dir| dir.join("panel").join("panel.toml"));

    build(config_path(flag, env, default).as_deref(), root)
}

/// Explicit locations win; the default location only counts when present
fn config_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.or(env).or_else(|| default.filter(|path| path.is_file()))
}

fn build(path: Option<&Path>, root: Option<PathBuf>) -> Result<TemplateConfig> {
    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            TemplateConfig::load(path)
                .with_context(|| format!("invalid configuration {}", path.display()))?
        }
        None => TemplateConfig::new(PathBuf::from(".")),
    };

    if let Some(root) = root {
        config.root_dir = root;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
