#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::storage::MemoryStorage;

#[test]
fn no_stored_value_falls_back_to_light_outside_browser() {
    assert!(!read_preference(&MemoryStorage::new()));
}

#[test]
fn stored_value_wins() {
    let storage = MemoryStorage::with_items([(STORAGE_KEY, "true")]);
    assert_eq!(stored_preference(&storage), Some(true));
    assert!(read_preference(&storage));
}

#[test]
fn garbage_is_ignored() {
    let storage = MemoryStorage::with_items([(STORAGE_KEY, "dark")]);
    assert_eq!(stored_preference(&storage), None);
}

#[test]
fn toggle_flips_and_persists() {
    let storage = MemoryStorage::new();
    assert!(toggle(&storage, false));
    assert_eq!(stored_preference(&storage), Some(true));
    assert!(!toggle(&storage, true));
    assert_eq!(stored_preference(&storage), Some(false));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
