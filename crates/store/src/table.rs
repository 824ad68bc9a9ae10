// SPDX-License-Identifier: MIT

//! A single primitive kind's keyed snapshot table (§3 "Raw store").

use crate::error::StoreError;
use fv_core::WatchEventType;
use indexmap::IndexMap;

/// Ordered keyed table holding the last-seen snapshot of each object of one
/// primitive kind, indexed by name (§3 invariant 2).
///
/// Backed by `IndexMap` rather than `HashMap` so snapshots handed to new
/// subscribers (§4.4) have a deterministic, insertion-order-preserving
/// iteration order instead of depending on hash bucket layout.
#[derive(Debug, Clone, Default)]
pub struct Table<T> {
    entries: IndexMap<String, T>,
    kind_label: &'static str,
}

impl<T> Table<T> {
    pub fn new(kind_label: &'static str) -> Self {
        Self {
            entries: IndexMap::new(),
            kind_label,
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply a watch event to the table, returning whether the event was
    /// actually applied (§4.2 step 3: handlers stop early when `apply`
    /// reports no change).
    ///
    /// `Added`/`Modified` always apply (an identical `Modified` still
    /// replaces the entry and reports `true` — see §8's idempotence
    /// property, which expects one emission per event regardless of
    /// whether the payload actually differs). `Deleted` reports `false`
    /// when there was no entry to remove, since there is nothing for a
    /// handler to re-emit in that case.
    pub fn apply(
        &mut self,
        event: WatchEventType,
        name: &str,
        object: T,
    ) -> Result<bool, StoreError> {
        match event {
            WatchEventType::Added => {
                if self.entries.contains_key(name) {
                    return Err(StoreError::DuplicateAdded {
                        kind: self.kind_label.to_string(),
                        name: name.to_string(),
                    });
                }
                self.entries.insert(name.to_string(), object);
                Ok(true)
            }
            WatchEventType::Modified => {
                self.entries.insert(name.to_string(), object);
                Ok(true)
            }
            WatchEventType::Deleted => Ok(self.entries.shift_remove(name).is_some()),
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
