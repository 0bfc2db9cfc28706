// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authentication outcome exchanged through event parameters
//!
//! Authentication listeners report back by storing an `AuthResult` under
//! [`AUTH_RESULT_PARAM`]; the dispatcher reads it from the returned event.

use crate::error::EventError;
use crate::event::Event;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameter name holding the authentication result
pub const AUTH_RESULT_PARAM: &str = "authResult";

/// Authentication result code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AuthCode {
    Success,
    /// General failure
    Failure,
    IdentityNotFound,
    IdentityAmbiguous,
    CredentialInvalid,
    CredentialEmpty,
    Uncategorized,
}

impl AuthCode {
    pub fn as_i32(self) -> i32 {
        match self {
            AuthCode::Success => 1,
            AuthCode::Failure => 0,
            AuthCode::IdentityNotFound => -1,
            AuthCode::IdentityAmbiguous => -2,
            AuthCode::CredentialInvalid => -3,
            AuthCode::CredentialEmpty => -4,
            AuthCode::Uncategorized => -5,
        }
    }
}

impl From<AuthCode> for i32 {
    fn from(code: AuthCode) -> Self {
        code.as_i32()
    }
}

impl TryFrom<i32> for AuthCode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => AuthCode::Success,
            0 => AuthCode::Failure,
            -1 => AuthCode::IdentityNotFound,
            -2 => AuthCode::IdentityAmbiguous,
            -3 => AuthCode::CredentialInvalid,
            -4 => AuthCode::CredentialEmpty,
            -5 => AuthCode::Uncategorized,
            other => return Err(format!("unknown authentication code {other}")),
        })
    }
}

/// Outcome of an authentication attempt
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub code: AuthCode,
    /// Identity used in the attempt (the account row on success)
    #[serde(default)]
    pub identity: Option<Value>,
    /// Reasons the attempt failed; empty on success
    #[serde(default)]
    pub messages: Vec<String>,
}

impl AuthResult {
    pub fn new(code: AuthCode, identity: Option<Value>, messages: Vec<String>) -> Self {
        Self {
            code,
            identity,
            messages,
        }
    }

    pub fn success(identity: Value) -> Self {
        Self::new(AuthCode::Success, Some(identity), Vec::new())
    }

    pub fn failure(code: AuthCode, message: impl Into<String>) -> Self {
        Self::new(code, None, vec![message.into()])
    }

    pub fn is_valid(&self) -> bool {
        self.code.as_i32() > 0
    }
}

impl Event {
    /// Store the authentication result in the parameter bag
    pub fn set_auth_result(&mut self, result: &AuthResult) -> Result<&mut Self, EventError> {
        self.set_param_as(AUTH_RESULT_PARAM, result)
    }

    /// Authentication result set by a listener, if any
    pub fn auth_result(&self) -> Result<Option<AuthResult>, EventError> {
        self.param_as(AUTH_RESULT_PARAM)
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
