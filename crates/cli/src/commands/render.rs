// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `panel render <manifest>` - Render a page manifest

use crate::manifest::Manifest;
use anyhow::{bail, Context, Result};
use clap::Args;
use panel_events::{listener_fn, names, EventAggregator, Listener, DEFAULT_PRIORITY};
use panel_template::{TemplateConfig, TemplateEngine};
use serde_json::{json, Value};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, Level};

#[derive(Args)]
pub struct RenderArgs {
    /// Page manifest (TOML)
    pub manifest: PathBuf,

    /// Write the page to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Namespace to print, overriding the manifest's `output`
    #[arg(short, long)]
    pub namespace: Option<String>,
}

pub fn handle(args: RenderArgs, config: TemplateConfig) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let manifest_path = args.manifest.display().to_string();

    let events = EventAggregator::new();
    if tracing::enabled!(Level::DEBUG) {
        trace_events(&events);
    }
    let mut engine = TemplateEngine::new(config, events.clone())?;

    events.dispatch(names::ON_RENDER_START, json!({ "manifest": &manifest_path }))?;
    manifest.apply(&mut engine)?;

    let namespace = args.namespace.as_deref().or(manifest.output.as_deref());
    if let Some(namespace) = namespace {
        if !engine.is_namespace(namespace) {
            bail!("namespace '{namespace}' was never assigned or parsed");
        }
    }

    let content = engine.output(namespace).to_string();
    let event = events.dispatch(
        names::ON_RENDER_END,
        json!({ "manifest": &manifest_path, "output": namespace, "content": &content }),
    )?;
    if let Some(Value::String(rewritten)) = event.param("content") {
        if *rewritten != content {
            engine.replace_last_parse_result(rewritten.as_str(), namespace);
        }
    }

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            engine.prnt(&mut file, namespace)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            engine.prnt(&mut stdout, namespace)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Log every lifecycle event the render goes through
fn trace_events(events: &EventAggregator) {
    let listener: Arc<dyn Listener> = Arc::new(listener_fn(|event| {
        let params: Vec<&str> = event.params().keys().map(String::as_str).collect();
        debug!(event = event.name(), ?params, "dispatched");
        Ok(())
    }));
    events.register_listener_for(
        &[
            names::ON_RENDER_START,
            names::ON_PARSE_TEMPLATE,
            names::ON_BEFORE_ASSEMBLE_TEMPLATE_FILES,
            names::ON_BEFORE_LOAD_TEMPLATE_FILE,
            names::ON_AFTER_LOAD_TEMPLATE_FILE,
            names::ON_AFTER_ASSEMBLE_TEMPLATE_FILES,
            names::ON_RENDER_END,
        ],
        listener,
        DEFAULT_PRIORITY,
    );
}
