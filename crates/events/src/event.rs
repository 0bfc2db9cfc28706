// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatched event: name, parameter bag and propagation flag

use crate::error::EventError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Parameter bag carried by an event
pub type Params = Map<String, Value>;

/// An event travelling through the listeners of one dispatch.
///
/// Listeners receive `&mut Event`; writing into the parameter bag is how a
/// listener hands a result back to whoever dispatched the event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    name: String,
    params: Params,
    propagation_stopped: bool,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Params::new(),
            propagation_stopped: false,
        }
    }

    /// Create an event with parameters.
    ///
    /// `params` must be a JSON object or null.
    pub fn with_params(name: impl Into<String>, params: Value) -> Result<Self, EventError> {
        let mut event = Self::new(name);
        event.set_params(params)?;
        Ok(event)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Replace all parameters
    pub fn set_params(&mut self, params: Value) -> Result<&mut Self, EventError> {
        self.params = match params {
            Value::Object(map) => map,
            Value::Null => Params::new(),
            other => return Err(EventError::InvalidParams(value_kind(&other).to_string())),
        };
        Ok(self)
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Get a parameter, or `default` when it is missing or null
    pub fn param_or(&self, name: &str, default: Value) -> Value {
        match self.params.get(name) {
            Some(Value::Null) | None => default,
            Some(value) => value.clone(),
        }
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Decode a parameter into `T`. Missing or null parameters yield `None`.
    pub fn param_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, EventError> {
        match self.params.get(name) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| EventError::Param {
                    name: name.to_string(),
                    source,
                }),
        }
    }

    /// Encode `value` and store it as a parameter
    pub fn set_param_as<T: Serialize>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<&mut Self, EventError> {
        let name = name.into();
        let encoded = serde_json::to_value(value).map_err(|source| EventError::Param {
            name: name.clone(),
            source,
        })?;
        self.params.insert(name, encoded);
        Ok(self)
    }

    /// Stop (or resume) propagation to the remaining listeners
    pub fn stop_propagation(&mut self, flag: bool) {
        self.propagation_stopped = flag;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
