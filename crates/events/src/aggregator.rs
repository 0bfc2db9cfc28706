// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event aggregator: routes named events to their listeners

use crate::error::EventError;
use crate::event::Event;
use crate::listener::{Listener, ListenerId};
use crate::queue::{PriorityQueue, QueueEntry, DEFAULT_PRIORITY};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// Registry of listeners keyed by event name.
///
/// One aggregator lives for one request. Clones share the same registry, so
/// the handle can be passed to every collaborator that dispatches or listens.
pub struct EventAggregator {
    queues: Arc<RwLock<HashMap<String, PriorityQueue>>>,
    next_id: Arc<AtomicU64>,
}

impl EventAggregator {
    pub fn new() -> Self {
        Self {
            queues: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a listener with the default priority
    pub fn register_listener(
        &self,
        event: &str,
        listener: impl Listener + 'static,
    ) -> ListenerId {
        self.register_listener_with_priority(event, listener, DEFAULT_PRIORITY)
    }

    /// Register a listener; higher priorities run first
    pub fn register_listener_with_priority(
        &self,
        event: &str,
        listener: impl Listener + 'static,
        priority: i32,
    ) -> ListenerId {
        self.insert(event, Arc::new(listener), priority, false)
    }

    /// Register one listener on several events.
    ///
    /// Returns one id per event, in the order given.
    pub fn register_listener_for(
        &self,
        events: &[&str],
        listener: Arc<dyn Listener>,
        priority: i32,
    ) -> Vec<ListenerId> {
        events
            .iter()
            .map(|event| self.insert(event, Arc::clone(&listener), priority, false))
            .collect()
    }

    /// Register a listener that is removed after it first runs
    pub fn register_once(
        &self,
        event: &str,
        listener: impl Listener + 'static,
        priority: i32,
    ) -> ListenerId {
        self.insert(event, Arc::new(listener), priority, true)
    }

    fn insert(
        &self,
        event: &str,
        listener: Arc<dyn Listener>,
        priority: i32,
        once: bool,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut queues = self.queues.write().unwrap_or_else(|e| e.into_inner());
        queues.entry(event.to_string()).or_default().insert(QueueEntry {
            id,
            priority,
            listener,
            once,
        });
        debug!(event, %id, priority, once, "registered listener");
        id
    }

    /// Remove a listener by its registration id.
    ///
    /// Returns false if the listener is not registered for `event`.
    pub fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        let mut queues = self.queues.write().unwrap_or_else(|e| e.into_inner());
        let Some(queue) = queues.get_mut(event) else {
            return false;
        };
        let removed = queue.remove(id);
        if queue.is_empty() {
            queues.remove(event);
        }
        removed
    }

    /// Dispatch `event` with the given parameters (a JSON object or null).
    ///
    /// Returns the event after all listeners ran, so the caller can read
    /// parameters the listeners set.
    pub fn dispatch(&self, event: &str, params: Value) -> Result<Event, EventError> {
        self.dispatch_event(Event::with_params(event, params)?)
    }

    /// Dispatch an already built event.
    ///
    /// Listeners run over a snapshot of the queue: listeners registered or
    /// removed during the dispatch take effect on the next one. The first
    /// listener error aborts the dispatch and is returned to the caller.
    pub fn dispatch_event(&self, mut event: Event) -> Result<Event, EventError> {
        let entries = {
            let queues = self.queues.read().unwrap_or_else(|e| e.into_inner());
            match queues.get(event.name()) {
                Some(queue) => queue.snapshot(),
                None => {
                    trace!(event = event.name(), "no listeners");
                    return Ok(event);
                }
            }
        };

        // Listeners may rename the event; the queue stays the dispatched one
        let name = event.name().to_string();
        trace!(event = %name, listeners = entries.len(), "dispatching");
        for entry in entries {
            if entry.once {
                // Claim before running so a nested dispatch cannot run it twice
                if !self.remove_listener(&name, entry.id) {
                    continue;
                }
            }
            entry
                .listener
                .handle(&mut event)
                .map_err(|source| EventError::Listener {
                    event: name.clone(),
                    source,
                })?;

            if event.is_propagation_stopped() {
                debug!(event = %name, listener = %entry.id, "propagation stopped");
                break;
            }
        }

        Ok(event)
    }

    /// Whether at least one listener is registered for `event`
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.queues
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(event)
            .map_or(0, PriorityQueue::len)
    }

    /// Names of all events with listeners, sorted
    pub fn events(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .queues
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Remove every listener of `event`
    pub fn clear_listeners(&self, event: &str) {
        self.unregister_event(event);
    }

    /// Forget `event` entirely. Returns false if it had no listeners.
    pub fn unregister_event(&self, event: &str) -> bool {
        self.queues
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(event)
            .is_some()
    }
}

impl Default for EventAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventAggregator {
    fn clone(&self) -> Self {
        Self {
            queues: Arc::clone(&self.queues),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
