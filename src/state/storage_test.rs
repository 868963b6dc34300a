use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").as_deref(), Some("v"));
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_storage_clones_share_items() {
    let a = MemoryStorage::with_items([("x", "1")]);
    let b = a.clone();
    b.set("y", "2").unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(a.get("y").as_deref(), Some("2"));
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::with_items([("x", "1")]);
    storage.remove("nope");
    assert_eq!(storage.len(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_and_read_only_outside_the_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("user_info"), None);
    assert_eq!(storage.set("user_info", "{}"), Err(StorageError::Unavailable));
    storage.remove("user_info");
}
