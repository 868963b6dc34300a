//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is created once in `App` and injected through Leptos
//! context. Route guards and user-aware components read its session signal;
//! only the methods here write it, always through the `SessionStore` so the
//! persisted copy stays in step.
//!
//! The store is opened from an `Effect`, which never runs during SSR, so
//! server output always renders the loading state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::state::session::{Session, SessionStore, UserIdentity};
use crate::state::storage::{BrowserStorage, SessionStorage};

/// Reactive handle on the session, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    store: StoredValue<Option<SessionStore<BrowserStorage>>>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            store: StoredValue::new(None),
        }
    }

    /// Session signal for reactive reads.
    pub fn session(self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Open the store if that has not happened yet.
    pub fn hydrate(self) {
        self.with_store(|_| ());
    }

    pub fn login(self, identity: UserIdentity, token: Option<&str>) {
        log::info!("signed in as {} ({})", identity.email, identity.role);
        self.with_store(|store| store.login(identity, token));
    }

    pub fn logout(self) {
        self.with_store(SessionStore::logout);
    }

    /// Drop a session the server no longer accepts.
    pub fn expire(self) {
        log::info!("session expired; signing out");
        self.logout();
    }

    pub fn update_identity(self, patch: impl FnOnce(&mut UserIdentity)) -> bool {
        self.with_store(|store| store.update_identity(patch))
            .unwrap_or(false)
    }

    pub fn token(self) -> Option<String> {
        self.with_store(|store| store.token()).flatten()
    }

    pub fn begin_reauth(self) {
        self.with_store(SessionStore::begin_reauth);
    }

    pub fn finish_reauth(self, identity: Option<UserIdentity>) {
        self.with_store(|store| store.finish_reauth(identity));
    }

    /// Run `f` against the store, then publish the resulting session.
    ///
    /// Returns `None` only if the owning reactive scope is gone.
    fn with_store<R>(self, f: impl FnOnce(&mut SessionStore<BrowserStorage>) -> R) -> Option<R> {
        let (out, snapshot) = self.store.try_update_value(|slot| {
            let store = slot.get_or_insert_with(|| open_for_startup(BrowserStorage));
            let out = f(store);
            (out, store.session())
        })?;
        if self.session.get_untracked() != snapshot {
            self.session.set(snapshot);
        }
        Some(out)
    }
}

/// Open the store as the app sees it on first load.
///
/// An identity without a bearer token cannot be validated and is dropped.
/// One with a token starts inside a re-auth cycle, so the first published
/// snapshot is already loading and guarded pages wait for the server check.
pub fn open_for_startup<S: SessionStorage>(storage: S) -> SessionStore<S> {
    let mut store = SessionStore::open(storage);
    if store.identity().is_some() {
        if store.token().is_some() {
            store.begin_reauth();
        } else {
            log::warn!("persisted identity has no auth token; signing out");
            store.logout();
        }
    }
    store
}

/// Create the auth context, provide it, and start hydration and monitoring.
pub fn provide_auth_context(config: ClientConfig) -> AuthContext {
    let auth = AuthContext::new();
    provide_context(auth);

    let started = StoredValue::new(false);
    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        auth.hydrate();
        install_session_monitor(auth, &config);
    });
    auth
}

// =============================================================
// Session monitor
// =============================================================

/// What to do with the session after asking the server who we are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationAction {
    /// Server confirmed the user; adopt its copy of the identity.
    Refresh(UserIdentity),
    /// Server rejected the token.
    Expire,
    /// Server unreachable or misbehaving; trust the local session.
    Keep,
}

impl ValidationAction {
    /// Identity to hold after applying this action to `current`.
    pub fn resolve(self, current: Option<UserIdentity>) -> Option<UserIdentity> {
        match self {
            ValidationAction::Refresh(identity) => Some(identity),
            ValidationAction::Expire => None,
            ValidationAction::Keep => current,
        }
    }
}

pub fn validation_action(result: &Result<UserIdentity, ApiError>) -> ValidationAction {
    match result {
        Ok(identity) => ValidationAction::Refresh(identity.clone()),
        Err(e) if e.is_auth_failure() => ValidationAction::Expire,
        Err(_) => ValidationAction::Keep,
    }
}

/// Validate the session now, then every `session_check_interval`.
///
/// The first check closes the re-auth cycle opened by `open_for_startup`.
#[cfg(feature = "hydrate")]
fn install_session_monitor(auth: AuthContext, config: &ClientConfig) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    let interval = config.session_check_interval;
    let config = config.clone();
    leptos::task::spawn_local(async move {
        let mut first = true;
        loop {
            if !alive_task.load(Ordering::Relaxed) {
                break;
            }
            let current = auth.session.get_untracked().identity;
            if let (Some(current), Some(token)) = (current, auth.token()) {
                let result = config.api(Some(token)).current_user().await;
                if let Err(e) = &result {
                    log::warn!("session check failed: {e}");
                }
                match validation_action(&result) {
                    ValidationAction::Expire => auth.expire(),
                    action if first => auth.finish_reauth(action.resolve(Some(current))),
                    ValidationAction::Refresh(identity) => {
                        auth.update_identity(|i| *i = identity);
                    }
                    ValidationAction::Keep => {}
                }
            }
            first = false;
            gloo_timers::future::sleep(interval).await;
        }
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}

#[cfg(not(feature = "hydrate"))]
fn install_session_monitor(_auth: AuthContext, _config: &ClientConfig) {}
