use super::*;
use crate::state::role::Role;
use crate::state::session::{IDENTITY_KEY, TOKEN_KEY};
use crate::state::storage::MemoryStorage;

fn student() -> UserIdentity {
    UserIdentity::new(7, "Abebe Kebede", "abebe@aastu.edu.et", Role::Student)
}

// =============================================================
// validation_action
// =============================================================

#[test]
fn successful_check_refreshes_identity() {
    let mut fresh = student();
    fresh.department = Some("Software Engineering".to_owned());
    assert_eq!(
        validation_action(&Ok(fresh.clone())),
        ValidationAction::Refresh(fresh)
    );
}

#[test]
fn auth_failures_expire_the_session() {
    for err in [
        ApiError::Unauthenticated,
        ApiError::Status { status: 401, message: "Unauthenticated.".to_owned() },
        ApiError::Status { status: 403, message: String::new() },
    ] {
        assert_eq!(validation_action(&Err(err)), ValidationAction::Expire);
    }
}

#[test]
fn transient_failures_keep_the_session() {
    for err in [
        ApiError::Network("offline".to_owned()),
        ApiError::Status { status: 500, message: String::new() },
        ApiError::Decode("bad json".to_owned()),
        ApiError::Unavailable,
    ] {
        assert_eq!(validation_action(&Err(err)), ValidationAction::Keep);
    }
}

#[test]
fn resolve_applies_action_to_current_identity() {
    let current = Some(student());
    let mut fresh = student();
    fresh.name = "Abebe K.".to_owned();

    assert_eq!(
        ValidationAction::Refresh(fresh.clone()).resolve(current.clone()),
        Some(fresh)
    );
    assert_eq!(ValidationAction::Expire.resolve(current.clone()), None);
    assert_eq!(ValidationAction::Keep.resolve(current.clone()), current);
}

// =============================================================
// open_for_startup
// =============================================================

fn persisted_student() -> String {
    serde_json::to_string(&student()).unwrap()
}

#[test]
fn startup_with_token_opens_inside_reauth_cycle() {
    let raw = persisted_student();
    let store = open_for_startup(MemoryStorage::with_items([(IDENTITY_KEY, raw.as_str()), (TOKEN_KEY, "7|tok")]));

    // First snapshot already waits for the server check.
    let session = store.session();
    assert!(session.loading);
    assert_eq!(session.identity, Some(student()));
}

#[test]
fn startup_session_resolves_only_when_check_finishes() {
    let raw = persisted_student();
    let mut store = open_for_startup(MemoryStorage::with_items([(IDENTITY_KEY, raw.as_str()), (TOKEN_KEY, "7|tok")]));
    assert!(store.session().loading);

    let action = validation_action(&Ok(student()));
    store.finish_reauth(action.resolve(store.identity().cloned()));
    assert_eq!(store.session(), Session::resolved(Some(student())));
}

#[test]
fn startup_without_token_signs_out() {
    let raw = persisted_student();
    let storage = MemoryStorage::with_items([(IDENTITY_KEY, raw.as_str())]);
    let store = open_for_startup(storage.clone());

    assert_eq!(store.session(), Session::resolved(None));
    assert_eq!(storage.get(IDENTITY_KEY), None);
}

#[test]
fn startup_with_empty_token_signs_out() {
    let raw = persisted_student();
    let store = open_for_startup(MemoryStorage::with_items([(IDENTITY_KEY, raw.as_str()), (TOKEN_KEY, "")]));
    assert_eq!(store.session(), Session::resolved(None));
}

#[test]
fn startup_with_empty_storage_is_resolved_anonymous() {
    let store = open_for_startup(MemoryStorage::new());
    assert_eq!(store.session(), Session::resolved(None));
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_starts_loading_until_hydrated() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        assert!(auth.session().get_untracked().loading);
        auth.hydrate();
        let session = auth.session().get_untracked();
        assert!(!session.loading);
        assert!(session.identity.is_none());
    });
}

#[test]
fn login_and_logout_publish_to_the_signal() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        auth.login(student(), Some("token"));
        assert_eq!(auth.session().get_untracked().role(), Some(Role::Student));

        auth.logout();
        let session = auth.session().get_untracked();
        assert!(!session.loading);
        assert!(session.identity.is_none());
    });
}

#[test]
fn update_identity_requires_a_session() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        assert!(!auth.update_identity(|i| i.name = "x".to_owned()));

        auth.login(student(), None);
        assert!(auth.update_identity(|i| i.name = "Abebe K.".to_owned()));
        assert_eq!(
            auth.session().get_untracked().identity.map(|i| i.name),
            Some("Abebe K.".to_owned())
        );
    });
}

#[test]
fn reauth_cycle_marks_loading_then_resolves() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        auth.login(student(), None);
        auth.begin_reauth();
        assert!(auth.session().get_untracked().loading);

        auth.finish_reauth(None);
        let session = auth.session().get_untracked();
        assert!(!session.loading);
        assert!(session.identity.is_none());
    });
}

#[test]
fn expire_signs_out() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        auth.login(student(), None);
        auth.expire();
        assert!(!auth.session().get_untracked().is_authenticated());
    });
}
