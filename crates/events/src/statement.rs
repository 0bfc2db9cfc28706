// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view over database statement events

use crate::event::Event;
use serde_json::Value;

/// Parameter holding the SQL text
pub const QUERY_STRING_PARAM: &str = "queryString";
/// Parameter holding the bound statement parameters
pub const STATEMENT_PARAMS_PARAM: &str = "params";

/// View over an event dispatched around an SQL statement
#[derive(Debug, Clone, Copy)]
pub struct StatementEvent<'a> {
    event: &'a Event,
}

impl<'a> StatementEvent<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self { event }
    }

    pub fn name(&self) -> &'a str {
        self.event.name()
    }

    pub fn query_string(&self) -> Option<&'a str> {
        self.event.param(QUERY_STRING_PARAM).and_then(Value::as_str)
    }

    /// Bound parameters; empty when none were given
    pub fn statement_params(&self) -> &'a [Value] {
        match self.event.param(STATEMENT_PARAMS_PARAM) {
            Some(Value::Array(values)) => values,
            _ => &[],
        }
    }
}

impl<'a> From<&'a Event> for StatementEvent<'a> {
    fn from(event: &'a Event) -> Self {
        Self::new(event)
    }
}

#[cfg(test)]
#[path = "statement_tests.rs"]
mod tests;
