// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Priority-ordered listener queue

use crate::listener::{Listener, ListenerId};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Priority given to listeners registered without one
pub const DEFAULT_PRIORITY: i32 = 1;

/// A registered listener
#[derive(Clone)]
pub struct QueueEntry {
    pub id: ListenerId,
    pub priority: i32,
    pub listener: Arc<dyn Listener>,
    /// Removed after its first invocation
    pub once: bool,
}

impl fmt::Debug for QueueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueEntry")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}

/// Listeners of one event, highest priority first.
///
/// Keyed by `(Reverse(priority), id)`: ids grow with registration order, so
/// equal priorities keep their registration order.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue {
    entries: BTreeMap<(Reverse<i32>, ListenerId), QueueEntry>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: QueueEntry) {
        self.entries.insert((Reverse(entry.priority), entry.id), entry);
    }

    /// Remove the listener registered under `id`.
    ///
    /// Returns false when no such listener is queued.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let key = self.entries.keys().find(|(_, entry_id)| *entry_id == id).copied();
        match key {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any listener is queued with exactly this priority
    pub fn has_priority(&self, priority: i32) -> bool {
        self.entries.values().any(|e| e.priority == priority)
    }

    /// Entries in dispatch order
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.values()
    }

    /// Copy of the entries in dispatch order, detached from the queue
    pub fn snapshot(&self) -> Vec<QueueEntry> {
        self.entries.values().cloned().collect()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
