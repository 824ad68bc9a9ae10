// SPDX-License-Identifier: MIT

//! Error types for the engine (§7, §11).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("store error: {0}")]
    Store(#[from] fv_store::StoreError),
    #[error("fan-out subscriber overflowed its buffer")]
    SubscriberOverflow,
}
