// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event dispatch errors

use crate::listener::ListenerError;
use thiserror::Error;

/// Errors raised by event construction and dispatch
#[derive(Debug, Error)]
pub enum EventError {
    /// Parameters were not a JSON object (or null)
    #[error("event parameters must be an object, got {0}")]
    InvalidParams(String),

    /// A listener failed; dispatch was aborted at that listener
    #[error("listener for event '{event}' failed: {source}")]
    Listener {
        event: String,
        #[source]
        source: ListenerError,
    },

    /// A parameter could not be converted to or from its typed form
    #[error("invalid value for parameter '{name}': {source}")]
    Param {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
