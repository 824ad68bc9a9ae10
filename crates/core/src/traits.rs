// SPDX-License-Identifier: MIT

//! Trait interfaces for the engine's external collaborators (§6).
//!
//! These are the narrow synchronous seams the pure conversion functions in
//! [`crate::convert`] need; concrete (and fake, for tests) implementations
//! live in the `fv-adapters` crate, which depends on this one.

use crate::primitive::Service;

/// Resolves whether a service uses an HTTP-family protocol, and with which
/// URI scheme. External inspection predicate (§3, §6).
pub trait ProtocolPredicate: Send + Sync {
    /// Returns `Some(scheme)` (e.g. `"http"`, `"https"`) if the service uses HTTP.
    fn uses_http(&self, service: &Service) -> Option<String>;
}

/// A launch profile resolved for a compilable project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub launch_url: Option<String>,
}

/// A project resolved from its path by the application model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub launch_profile: Option<LaunchProfile>,
}

impl ProjectInfo {
    pub fn effective_launch_profile(&self) -> Option<&LaunchProfile> {
        self.launch_profile.as_ref()
    }
}

/// Resolves a `project_path` annotation value to project metadata (§4.2,
/// "Endpoint construction"). External collaborator; out of scope to implement.
pub trait ApplicationModel: Send + Sync {
    fn try_get_project_with_path(&self, path: &str) -> Option<ProjectInfo>;
}
