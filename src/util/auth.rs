//! Route-guard decisions and redirect wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected section applies the same rules: wait while the session is
//! loading, send anonymous visitors to the login page, and send signed-in
//! users without access to their own landing page. The decision is a pure
//! function so it can be tested without a reactive runtime.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::role::Role;
use crate::state::session::Session;

/// Where a guarded page stands for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still hydrating; show a placeholder.
    Loading,
    /// Nobody is logged in.
    Unauthenticated { redirect_to: String },
    /// Logged in, but the role may not see this page.
    Unauthorized { redirect_to: &'static str },
    Authorized,
}

impl GuardOutcome {
    /// Path to navigate to, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardOutcome::Unauthenticated { redirect_to } => Some(redirect_to),
            GuardOutcome::Unauthorized { redirect_to } => Some(redirect_to),
            GuardOutcome::Loading | GuardOutcome::Authorized => None,
        }
    }
}

/// Decide the guard outcome. An empty `allowed` admits any signed-in role.
pub fn evaluate(session: &Session, allowed: &[Role], redirect_to: &str) -> GuardOutcome {
    if session.loading {
        return GuardOutcome::Loading;
    }
    let Some(identity) = &session.identity else {
        return GuardOutcome::Unauthenticated {
            redirect_to: redirect_to.to_owned(),
        };
    };
    if allowed.is_empty() || allowed.contains(&identity.role) {
        GuardOutcome::Authorized
    } else {
        GuardOutcome::Unauthorized {
            redirect_to: identity.role.landing_path(),
        }
    }
}

/// Issues each redirect once until the outcome stops asking for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    issued: Option<String>,
}

impl RedirectLatch {
    /// Target to navigate to now, or `None` if nothing new needs to happen.
    pub fn next(&mut self, outcome: &GuardOutcome) -> Option<String> {
        match outcome.redirect_target() {
            Some(target) if self.issued.as_deref() == Some(target) => None,
            Some(target) => {
                self.issued = Some(target.to_owned());
                Some(target.to_owned())
            }
            None => {
                self.issued = None;
                None
            }
        }
    }
}

/// Navigate whenever `outcome` asks for a redirect, at most once per target.
pub fn install_guard_redirect<F>(outcome: Memo<GuardOutcome>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let latch = StoredValue::new(RedirectLatch::default());
    Effect::new(move || {
        let outcome = outcome.get();
        let Some(target) = latch.try_update_value(|l| l.next(&outcome)).flatten() else {
            return;
        };
        log::debug!("route guard redirect to {target} ({outcome:?})");
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });
}
