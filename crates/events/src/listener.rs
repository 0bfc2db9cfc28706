// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener trait and registration handles

use crate::event::Event;
use std::fmt;

/// Error returned by a failing listener
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Something that reacts to a dispatched event.
///
/// Closures of the form `Fn(&mut Event) -> Result<(), ListenerError>` are
/// listeners.
pub trait Listener: Send + Sync {
    fn handle(&self, event: &mut Event) -> Result<(), ListenerError>;
}

impl<F> Listener for F
where
    F: Fn(&mut Event) -> Result<(), ListenerError> + Send + Sync,
{
    fn handle(&self, event: &mut Event) -> Result<(), ListenerError> {
        self(event)
    }
}

/// Wrap a closure as a listener.
///
/// Gives the closure its listener signature, so parameter and error types
/// need no annotations at the call site.
pub fn listener_fn<F>(f: F) -> F
where
    F: Fn(&mut Event) -> Result<(), ListenerError> + Send + Sync,
{
    f
}

/// Handle returned on registration, used to remove the listener again.
///
/// Ids are issued in registration order, which is also the tie-breaker
/// between listeners of equal priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}
