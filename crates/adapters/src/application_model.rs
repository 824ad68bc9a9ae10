// SPDX-License-Identifier: MIT

//! Fake [`fv_core::ApplicationModel`] for tests (§4.2, §6).
//!
//! The production application model is an external collaborator (out of
//! scope, §1): it would shell out to a language-specific project resolver.
//! Only the fake is implemented here.

use fv_core::{ApplicationModel, LaunchProfile, ProjectInfo};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Scriptable [`ApplicationModel`]: maps a `project_path` to a resolved
/// [`ProjectInfo`], or to nothing if the path was never registered.
#[derive(Clone, Default)]
pub struct FakeApplicationModel {
    projects: Arc<Mutex<HashMap<String, ProjectInfo>>>,
}

impl FakeApplicationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, path: impl Into<String>, info: ProjectInfo) {
        self.projects.lock().insert(path.into(), info);
    }

    pub fn register_with_launch_url(&self, path: impl Into<String>, launch_url: impl Into<String>) {
        self.register(
            path,
            ProjectInfo {
                launch_profile: Some(LaunchProfile {
                    launch_url: Some(launch_url.into()),
                }),
            },
        );
    }
}

impl ApplicationModel for FakeApplicationModel {
    fn try_get_project_with_path(&self, path: &str) -> Option<ProjectInfo> {
        self.projects.lock().get(path).cloned()
    }
}

#[cfg(test)]
#[path = "application_model_tests.rs"]
mod tests;
