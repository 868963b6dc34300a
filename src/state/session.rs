//! Current identity, the session record, and the store that persists it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only writer of the persisted session. The Leptos
//! layer (`state::auth`) mirrors its state into a signal; route guards read
//! that signal and never touch storage themselves.
//!
//! ERROR HANDLING
//! ==============
//! Hydration never fails: missing or malformed data means "logged out".
//! Write failures are logged and the in-memory session still changes, so a
//! full storage quota degrades to a session that does not survive reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::role::{Permission, Role};
use super::storage::SessionStorage;

/// Storage key holding the serialized `UserIdentity`.
pub const IDENTITY_KEY: &str = "user_info";
/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// The authenticated user's profile and role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Department display name. Accepts either a string or `{ "name": .. }`.
    #[serde(
        default,
        deserialize_with = "department_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

impl UserIdentity {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            department: None,
            department_id: None,
            college: None,
            student_id: None,
        }
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid user id: {text:?}"))),
    }
}

fn department_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDepartment {
        Name(String),
        Record { name: String },
    }

    Ok(Option::<RawDepartment>::deserialize(deserializer)?.map(|raw| match raw {
        RawDepartment::Name(name) | RawDepartment::Record { name } => name,
    }))
}

/// Snapshot of the authentication state.
///
/// `loading` is true before the store has hydrated and during an explicit
/// re-auth cycle; `identity` is `None` iff nobody is logged in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<UserIdentity>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }
}

impl Session {
    /// A resolved session for `identity`.
    pub fn resolved(identity: Option<UserIdentity>) -> Self {
        Self {
            identity,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    /// True if logged in with any of `roles`.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.role().is_some_and(|role| roles.contains(&role))
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role().is_some_and(|role| role.has_permission(permission))
    }
}

/// Owner of the session state and its persisted copy.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Open the store and hydrate the identity from `storage`.
    pub fn open(storage: S) -> Self {
        let identity = load_identity(&storage);
        log::debug!(
            "session hydrated: {}",
            identity
                .as_ref()
                .map_or_else(|| "anonymous".to_owned(), |i| format!("{} ({})", i.email, i.role))
        );
        Self {
            storage,
            session: Session::resolved(identity),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.session.clone()
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        self.session.identity.as_ref()
    }

    /// Persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Set the logged-in identity and persist it along with `token`.
    pub fn login(&mut self, identity: UserIdentity, token: Option<&str>) {
        self.persist_identity(&identity);
        if let Some(token) = token {
            if let Err(e) = self.storage.set(TOKEN_KEY, token) {
                log::warn!("failed to persist auth token: {e}");
            }
        }
        self.session = Session::resolved(Some(identity));
    }

    /// Clear the identity and everything persisted for it.
    pub fn logout(&mut self) {
        self.storage.remove(IDENTITY_KEY);
        self.storage.remove(TOKEN_KEY);
        self.session = Session::resolved(None);
    }

    /// Patch the current identity and persist the result.
    ///
    /// Returns `false` (and changes nothing) when nobody is logged in.
    pub fn update_identity(&mut self, patch: impl FnOnce(&mut UserIdentity)) -> bool {
        let Some(mut identity) = self.session.identity.clone() else {
            return false;
        };
        patch(&mut identity);
        self.persist_identity(&identity);
        self.session.identity = Some(identity);
        true
    }

    /// Mark the session as loading while it is re-established.
    pub fn begin_reauth(&mut self) {
        self.session.loading = true;
    }

    /// End a re-auth cycle with the identity it produced.
    pub fn finish_reauth(&mut self, identity: Option<UserIdentity>) {
        match identity {
            Some(identity) => {
                self.persist_identity(&identity);
                self.session = Session::resolved(Some(identity));
            }
            None => self.logout(),
        }
    }

    fn persist_identity(&self, identity: &UserIdentity) {
        let raw = match serde_json::to_string(identity) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize identity: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(IDENTITY_KEY, &raw) {
            log::warn!("failed to persist identity: {e}");
        }
    }
}

/// Read the persisted identity, discarding it if it does not parse.
fn load_identity(storage: &impl SessionStorage) -> Option<UserIdentity> {
    let raw = storage.get(IDENTITY_KEY)?;
    match serde_json::from_str::<UserIdentity>(&raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            log::warn!("discarding malformed persisted session: {e}");
            storage.remove(IDENTITY_KEY);
            None
        }
    }
}
