// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `panel blocks <template>` - Show the dynamic block tree of a template

use crate::output::{write_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use panel_events::EventAggregator;
use panel_template::{divide, Divided, Loader, TemplateConfig};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct BlocksArgs {
    /// Template file, relative to the template root
    pub template: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// A block and its nesting depth (top-level blocks are depth 0)
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub name: String,
    pub depth: usize,
}

impl fmt::Display for BlockNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.name, indent = self.depth * 2)
    }
}

pub fn handle(args: BlocksArgs, config: TemplateConfig) -> Result<()> {
    let loader = Loader::new(&config, EventAggregator::new());
    let content = loader.load(&args.template)?;
    let tree = block_tree(&divide(&content));

    let mut stdout = std::io::stdout().lock();
    write_list(&mut stdout, &tree, args.format)
}

/// Flatten the block hierarchy depth-first, in document order
pub fn block_tree(divided: &Divided) -> Vec<BlockNode> {
    let mut nodes = Vec::new();
    let mut path = Vec::new();
    collect(&divided.outline, divided, &mut path, &mut nodes);
    nodes
}

fn collect<'d>(
    text: &str,
    divided: &'d Divided,
    path: &mut Vec<&'d str>,
    nodes: &mut Vec<BlockNode>,
) {
    let mut children: Vec<_> = divided
        .blocks
        .iter()
        .filter(|block| !path.contains(&block.name.as_str()))
        .filter_map(|block| text.find(&block.placeholder()).map(|pos| (pos, block)))
        .collect();
    children.sort_by_key(|(pos, _)| *pos);
    children.dedup_by(|a, b| a.1.name == b.1.name);

    for (_, block) in children {
        nodes.push(BlockNode {
            name: block.name.clone(),
            depth: path.len(),
        });
        path.push(&block.name);
        collect(&block.body, divided, path, nodes);
        path.pop();
    }
}

#[cfg(test)]
#[path = "blocks_tests.rs"]
mod tests;
