// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! panel-template: block template engine for control panel pages
//!
//! Templates are plain files under a root directory using three constructs:
//!
//! - Placeholders: `{UPPER_SNAKE_NAME}`, replaced from assigned namespaces
//! - Dynamic blocks: `<!-- BDP: name -->...<!-- EDP: name -->`, cut out into
//!   named fragments that callers render repeatedly (table rows)
//! - Includes: `<!-- INCLUDE "path" -->`, relative to the including file

mod config;
mod engine;
mod error;
mod loader;
mod markers;
mod substitute;

pub use config::TemplateConfig;
pub use engine::TemplateEngine;
pub use error::TemplateError;
pub use loader::Loader;
pub use markers::{divide, Block, Divided};
pub use substitute::{is_var_name, substitute};
