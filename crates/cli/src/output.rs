// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write a list of items, one per line or as a JSON array
pub fn write_list<T, W>(out: &mut W, items: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Display,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{item}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
