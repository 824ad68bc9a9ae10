// SPDX-License-Identifier: MIT

//! Error types for the raw store.

use thiserror::Error;

/// Errors raised by [`crate::table::Table::apply`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A duplicate `Added` event was received for a name already present in
    /// the table. Resolves §9 open question 1 / §7's "Duplicate Added" row
    /// as fail-fast: the event is rejected rather than silently overwriting.
    #[error("duplicate Added event for {kind} {name:?}: an entry already exists")]
    DuplicateAdded { kind: String, name: String },
}
