// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! panel-events: named event dispatch for the control panel
//!
//! This crate provides:
//! - `EventAggregator` - Request-scoped registry dispatching named events to
//!   priority-ordered listeners
//! - `Event` - Event name, parameter bag and propagation-stop flag
//! - `PriorityQueue` - Listener ordering keyed by (priority, registration)
//! - Typed payloads shared by convention (`AuthResult`, `StatementEvent`)

mod aggregator;
mod auth;
mod error;
mod event;
mod listener;
pub mod names;
mod queue;
mod statement;

pub use aggregator::EventAggregator;
pub use auth::{AuthCode, AuthResult, AUTH_RESULT_PARAM};
pub use error::EventError;
pub use event::{Event, Params};
pub use listener::{listener_fn, Listener, ListenerError, ListenerId};
pub use queue::{PriorityQueue, QueueEntry, DEFAULT_PRIORITY};
pub use statement::StatementEvent;
