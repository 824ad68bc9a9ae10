// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn unregistered_path_resolves_to_none() {
    let model = FakeApplicationModel::new();
    assert!(model.try_get_project_with_path("/src/Foo").is_none());
}

#[test]
fn registered_path_resolves_to_its_launch_url() {
    let model = FakeApplicationModel::new();
    model.register_with_launch_url("/src/Foo", "https://localhost:5001");

    let info = model
        .try_get_project_with_path("/src/Foo")
        .expect("registered project should resolve");
    assert_eq!(
        info.effective_launch_profile()
            .and_then(|p| p.launch_url.as_deref()),
        Some("https://localhost:5001")
    );
}
