// SPDX-License-Identifier: MIT

//! End-to-end reconciliation scenarios (§8): the fully-wired engine driven
//! through a `FakeWatchClient`, asserting on the resulting `Monitor` streams.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/project_http_endpoint_join.rs"]
mod project_http_endpoint_join;
#[path = "specs/container_enrichment.rs"]
mod container_enrichment;
#[path = "specs/service_re_emission.rs"]
mod service_re_emission;
#[path = "specs/late_service_producer.rs"]
mod late_service_producer;
#[path = "specs/deletion_cleans_index.rs"]
mod deletion_cleans_index;
#[path = "specs/runtime_id_reused_across_restart.rs"]
mod runtime_id_reused_across_restart;
