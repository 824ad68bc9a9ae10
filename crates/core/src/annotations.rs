// SPDX-License-Identifier: MIT

//! Parsing of the annotation values the reconciler consumes (§6).

use crate::primitive::{Annotations, ANNOTATION_SERVICE_PRODUCER};
use serde::Deserialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("annotation not present")]
    Missing,
    #[error("invalid ServiceProducer JSON: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Deserialize)]
struct ServiceProducerEntry {
    service_name: String,
}

/// Parse the `ServiceProducer` annotation (a JSON array of `{service_name}`)
/// into the list of declared service names.
pub fn parse_service_producer(annotations: &Annotations) -> Result<Vec<String>, AnnotationError> {
    let raw = annotations
        .get(ANNOTATION_SERVICE_PRODUCER)
        .ok_or(AnnotationError::Missing)?;
    let entries: Vec<ServiceProducerEntry> =
        serde_json::from_str(raw).map_err(|e| AnnotationError::InvalidJson(e.to_string()))?;
    Ok(entries.into_iter().map(|e| e.service_name).collect())
}

#[cfg(test)]
#[path = "annotations_tests.rs"]
mod tests;
