// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `{NAME}` placeholder substitution

use crate::error::TemplateError;
use tracing::trace;

/// Placeholder names: `[A-Z0-9][A-Z0-9_]*`
pub fn is_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn next_brace(data: &str, from: usize) -> Option<(char, usize)> {
    let offset = data.get(from..)?.find(['{', '}'])?;
    let pos = from + offset;
    Some((char::from(data.as_bytes()[pos]), pos))
}

/// Replace `{NAME}` placeholders using `lookup`.
///
/// Braces are paired with a stack, so a placeholder is always matched with
/// its innermost `{`. Unknown names and non-placeholder braces stay as
/// written, and each unmatched `}` is paired only once. After a
/// replacement, scanning resumes at the start of the inserted value, so
/// placeholders inside a value are substituted too.
/// More than `limit` replacements fail with `SubstitutionLimit`.
pub fn substitute<'a, F>(data: &str, lookup: F, limit: usize) -> Result<String, TemplateError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    if !data.contains('{') {
        return Ok(data.to_string());
    }

    let mut data = data.to_string();
    let mut open: Vec<usize> = Vec::new();
    let mut from = 0;
    let mut replacements = 0usize;

    while let Some((brace, pos)) = next_brace(&data, from) {
        if brace == '{' {
            open.push(pos);
            from = pos + 1;
            continue;
        }

        let Some(begin) = open.pop() else {
            from = pos + 1;
            continue;
        };

        let name = &data[begin + 1..pos];
        let value = if is_var_name(name) { lookup(name) } else { None };
        match value {
            Some(value) => {
                replacements += 1;
                if replacements > limit {
                    return Err(TemplateError::SubstitutionLimit(limit));
                }
                trace!(name, len = value.len(), "substituted placeholder");
                data.replace_range(begin..=pos, value);
                from = begin;
            }
            // A re-paired "}" would enclose a brace, never a valid name
            None => from = pos + 1,
        }
    }

    Ok(data)
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
