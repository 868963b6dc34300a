use super::*;
use crate::state::storage::{MemoryStorage, StorageError};

// =============================================================
// Helpers
// =============================================================

fn alice() -> UserIdentity {
    let mut identity = UserIdentity::new(7, "Alice Bekele", "alice@aastu.edu.et", Role::Student);
    identity.department = Some("Software Engineering".to_owned());
    identity.student_id = Some("ETS0123/14".to_owned());
    identity
}

/// Storage whose writes always fail.
struct FullStorage(MemoryStorage);

impl SessionStorage for FullStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("quota exceeded".to_owned()))
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_loading_and_anonymous() {
    let session = Session::default();
    assert!(session.loading);
    assert!(session.identity.is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn has_role_requires_identity() {
    assert!(!Session::resolved(None).has_role(&Role::ALL));
    let session = Session::resolved(Some(alice()));
    assert!(session.has_role(&[Role::Teacher, Role::Student]));
    assert!(!session.has_role(&[Role::Admin]));
    assert!(!session.has_role(&[]));
}

#[test]
fn has_permission_follows_role_table() {
    let session = Session::resolved(Some(alice()));
    assert!(session.has_permission(Permission::DocumentView));
    assert!(!session.has_permission(Permission::DocumentDelete));
    assert!(!Session::resolved(None).has_permission(Permission::DocumentView));
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn open_with_empty_storage_is_logged_out_and_resolved() {
    let store = SessionStore::open(MemoryStorage::new());
    assert_eq!(store.session(), Session::resolved(None));
}

#[test]
fn open_restores_persisted_identity() {
    let storage = MemoryStorage::with_items([(
        IDENTITY_KEY,
        r#"{"id":7,"name":"Alice Bekele","email":"alice@aastu.edu.et","role":"student","department":"Software Engineering","student_id":"ETS0123/14"}"#,
    )]);
    let store = SessionStore::open(storage);
    assert_eq!(store.session(), Session::resolved(Some(alice())));
}

#[test]
fn open_accepts_department_object_and_string_ids() {
    let storage = MemoryStorage::with_items([(
        IDENTITY_KEY,
        r#"{"id":"12","name":"Dawit","email":"d@aastu.edu.et","role":"department_head","department":{"id":3,"name":"Electrical Engineering"},"department_id":3}"#,
    )]);
    let identity = SessionStore::open(storage).session().identity.unwrap();
    assert_eq!(identity.id, 12);
    assert_eq!(identity.role, Role::DepartmentHead);
    assert_eq!(identity.department.as_deref(), Some("Electrical Engineering"));
    assert_eq!(identity.department_id, Some(3));
}

#[test]
fn open_accepts_legacy_role_aliases() {
    let storage = MemoryStorage::with_items([(
        IDENTITY_KEY,
        r#"{"id":1,"name":"Dean","email":"dean@aastu.edu.et","role":"college_dean"}"#,
    )]);
    let session = SessionStore::open(storage).session();
    assert_eq!(session.role(), Some(Role::Dean));
}

#[test]
fn malformed_payloads_hydrate_to_logged_out() {
    let payloads = [
        "",
        "not json",
        "{",
        "null",
        "42",
        "[]",
        r#"{"name":"No Id","email":"x@y","role":"student"}"#,
        r#"{"id":1,"name":"Bad Role","email":"x@y","role":"janitor"}"#,
        r#"{"id":-1,"name":"Negative","email":"x@y","role":"student"}"#,
        r#"{"id":"abc","name":"Bad Id","email":"x@y","role":"student"}"#,
        r#"{"id":1,"name":"Bad Dept","email":"x@y","role":"student","department":42}"#,
    ];
    for payload in payloads {
        let storage = MemoryStorage::with_items([(IDENTITY_KEY, payload)]);
        let store = SessionStore::open(storage.clone());
        assert_eq!(store.session(), Session::resolved(None), "payload: {payload:?}");
        assert_eq!(storage.get(IDENTITY_KEY), None, "corrupt entry kept: {payload:?}");
    }
}

#[test]
fn malformed_identity_leaves_token_untouched() {
    let storage = MemoryStorage::with_items([(IDENTITY_KEY, "garbage"), (TOKEN_KEY, "tok")]);
    let store = SessionStore::open(storage);
    assert_eq!(store.token().as_deref(), Some("tok"));
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_sets_identity_and_persists_it() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login(alice(), Some("secret-token"));

    assert_eq!(store.session(), Session::resolved(Some(alice())));
    assert_eq!(store.token().as_deref(), Some("secret-token"));

    let reopened = SessionStore::open(storage);
    assert_eq!(reopened.session().identity, Some(alice()));
}

#[test]
fn login_without_token_keeps_existing_token() {
    let storage = MemoryStorage::with_items([(TOKEN_KEY, "old")]);
    let mut store = SessionStore::open(storage);
    store.login(alice(), None);
    assert_eq!(store.token().as_deref(), Some("old"));
}

#[test]
fn login_clears_loading_flag() {
    let mut store = SessionStore::open(MemoryStorage::new());
    store.begin_reauth();
    assert!(store.session().loading);
    store.login(alice(), None);
    assert!(!store.session().loading);
}

#[test]
fn login_survives_storage_write_failure() {
    let mut store = SessionStore::open(FullStorage(MemoryStorage::new()));
    store.login(alice(), Some("tok"));
    assert_eq!(store.session().identity, Some(alice()));
    assert_eq!(store.token(), None);
}

#[test]
fn logout_clears_identity_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login(alice(), Some("tok"));
    store.logout();

    assert_eq!(store.session(), Session::resolved(None));
    assert!(storage.is_empty());
    assert_eq!(store.token(), None);
}

#[test]
fn empty_token_reads_as_absent() {
    let store = SessionStore::open(MemoryStorage::with_items([(TOKEN_KEY, "")]));
    assert_eq!(store.token(), None);
}

// =============================================================
// update_identity / re-auth
// =============================================================

#[test]
fn update_identity_patches_and_persists() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login(alice(), None);

    assert!(store.update_identity(|i| i.name = "Alice B.".to_owned()));
    assert_eq!(store.identity().map(|i| i.name.as_str()), Some("Alice B."));
    let reopened = SessionStore::open(storage);
    assert_eq!(reopened.identity().map(|i| i.name.as_str()), Some("Alice B."));
}

#[test]
fn update_identity_when_logged_out_is_noop() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    assert!(!store.update_identity(|i| i.name = "Nobody".to_owned()));
    assert!(storage.is_empty());
}

#[test]
fn finish_reauth_with_identity_resolves_session() {
    let mut store = SessionStore::open(MemoryStorage::new());
    store.begin_reauth();
    store.finish_reauth(Some(alice()));
    assert_eq!(store.session(), Session::resolved(Some(alice())));
}

#[test]
fn finish_reauth_without_identity_logs_out() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login(alice(), Some("tok"));
    store.begin_reauth();
    store.finish_reauth(None);
    assert_eq!(store.session(), Session::resolved(None));
    assert!(storage.is_empty());
}

#[test]
fn persisted_record_omits_absent_optional_fields() {
    let raw = serde_json::to_value(UserIdentity::new(1, "T", "t@x", Role::Teacher)).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({ "id": 1, "name": "T", "email": "t@x", "role": "teacher" })
    );
}
