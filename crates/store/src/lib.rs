// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv-store: the raw store — keyed snapshot tables, the associated-services
//! index, and the enrichment cache (§3).

pub mod associated_services;
pub mod enrichment;
pub mod error;
pub mod raw_store;
pub mod table;

pub use associated_services::AssociatedServicesIndex;
pub use enrichment::EnrichmentCache;
pub use error::StoreError;
pub use raw_store::RawStore;
pub use table::Table;
