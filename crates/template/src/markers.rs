// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic block division
//!
//! A block is delimited by `<!-- BDP: name -->` and `<!-- EDP: name -->`.
//! Division cuts every block out of its parent and leaves a `{NAME}`
//! placeholder (upper-cased name) in its place. Blocks nest: an inner block
//! is cut first, so the outer block's body holds the inner placeholder.

use tracing::{debug, warn};

const TAG_START: &str = "<!-- ";
const TAG_END: &str = " -->";
const BEGIN_PREFIX: &str = "BDP: ";
const END_PREFIX: &str = "EDP: ";

/// A block cut out of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Name as written in the markers
    pub name: String,
    /// Text between the markers, inner blocks already replaced
    pub body: String,
}

impl Block {
    /// Placeholder left in the parent, e.g. `{DOMAIN_LIST}`
    pub fn placeholder(&self) -> String {
        placeholder(&self.name)
    }
}

/// Result of dividing a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Divided {
    /// Template text with every top-level block replaced by its placeholder
    pub outline: String,
    /// Blocks in the order they were closed (inner before outer)
    pub blocks: Vec<Block>,
}

impl Divided {
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Begin,
    End,
}

#[derive(Debug)]
struct Tag {
    kind: TagKind,
    name: String,
    /// Offset of `<`
    start: usize,
    /// Offset just past `>`
    end: usize,
}

fn placeholder(name: &str) -> String {
    format!("{{{}}}", name.to_uppercase())
}

/// Block names: `[a-z0-9][a-z0-9_]*`
fn is_block_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn parse_marker(inner: &str) -> Option<(TagKind, &str)> {
    let (kind, name) = if let Some(name) = inner.strip_prefix(BEGIN_PREFIX) {
        (TagKind::Begin, name)
    } else if let Some(name) = inner.strip_prefix(END_PREFIX) {
        (TagKind::End, name)
    } else {
        return None;
    };
    is_block_name(name).then_some((kind, name))
}

/// Find the next block marker at or after `from`, skipping other comments
fn find_next_tag(data: &str, from: usize) -> Option<Tag> {
    let mut pos = from;
    loop {
        let start = pos + data.get(pos..)?.find(TAG_START)?;
        let close = start + 1 + data[start + 1..].find(TAG_END)?;
        let inner_start = start + TAG_START.len();
        if close >= inner_start {
            if let Some((kind, name)) = parse_marker(&data[inner_start..close]) {
                return Some(Tag {
                    kind,
                    name: name.to_string(),
                    start,
                    end: close + TAG_END.len(),
                });
            }
        }
        // A comment without its own " -->" borrowed a later one; a marker may
        // still start inside it
        pos = start + 1;
    }
}

/// Divide `data` into its outline and named blocks.
///
/// Malformed markers are left in place: an end marker that does not close
/// the innermost open block is skipped, and blocks never closed stay in the
/// text as written.
pub fn divide(data: &str) -> Divided {
    let mut data = data.to_string();
    let mut open: Vec<Tag> = Vec::new();
    let mut blocks = Vec::new();
    let mut from = 0;

    while let Some(tag) = find_next_tag(&data, from) {
        match tag.kind {
            TagKind::Begin => {
                from = tag.end;
                open.push(tag);
            }
            TagKind::End => {
                if !open.last().is_some_and(|b| b.name == tag.name) {
                    warn!(block = %tag.name, offset = tag.start, "unmatched block end marker");
                    from = tag.end;
                    continue;
                }
                let Some(begin) = open.pop() else {
                    continue;
                };
                let body = data[begin.end..tag.start].to_string();
                let marker = placeholder(&tag.name);
                data.replace_range(begin.start..tag.end, &marker);
                from = begin.start + marker.len();
                debug!(block = %tag.name, len = body.len(), "divided block");
                blocks.push(Block {
                    name: tag.name,
                    body,
                });
            }
        }
    }

    for unclosed in &open {
        warn!(block = %unclosed.name, offset = unclosed.start, "unclosed block begin marker");
    }

    Divided {
        outline: data,
        blocks,
    }
}

#[cfg(test)]
#[path = "markers_tests.rs"]
mod tests;
