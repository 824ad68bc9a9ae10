// SPDX-License-Identifier: MIT

use super::*;
use fv_core::WatchEventType as E;

#[test]
fn added_then_modified_both_apply_even_when_identical() {
    let mut table: Table<u32> = Table::new("Container");
    assert_eq!(table.apply(E::Added, "a", 1).unwrap(), true);
    assert_eq!(table.apply(E::Modified, "a", 1).unwrap(), true);
    assert_eq!(table.get("a"), Some(&1));
}

#[test]
fn duplicate_added_is_fail_fast() {
    let mut table: Table<u32> = Table::new("Container");
    table.apply(E::Added, "a", 1).unwrap();
    let err = table.apply(E::Added, "a", 2).unwrap_err();
    assert_eq!(
        err,
        StoreError::DuplicateAdded {
            kind: "Container".to_string(),
            name: "a".to_string(),
        }
    );
    // the original value must be unaffected by the rejected duplicate
    assert_eq!(table.get("a"), Some(&1));
}

#[test]
fn modified_replaces_value() {
    let mut table: Table<u32> = Table::new("Container");
    table.apply(E::Added, "a", 1).unwrap();
    table.apply(E::Modified, "a", 2).unwrap();
    assert_eq!(table.get("a"), Some(&2));
}

#[test]
fn delete_present_reports_true_and_removes() {
    let mut table: Table<u32> = Table::new("Container");
    table.apply(E::Added, "a", 1).unwrap();
    assert_eq!(table.apply(E::Deleted, "a", 0).unwrap(), true);
    assert_eq!(table.get("a"), None);
}

#[test]
fn delete_absent_reports_false() {
    let mut table: Table<u32> = Table::new("Container");
    assert_eq!(table.apply(E::Deleted, "missing", 0).unwrap(), false);
}

#[test]
fn values_preserve_insertion_order() {
    let mut table: Table<u32> = Table::new("Container");
    table.apply(E::Added, "c", 3).unwrap();
    table.apply(E::Added, "a", 1).unwrap();
    table.apply(E::Added, "b", 2).unwrap();
    let values: Vec<_> = table.values().copied().collect();
    assert_eq!(values, vec![3, 1, 2]);
}
