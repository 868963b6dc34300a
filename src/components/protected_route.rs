//! Role-aware route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every page that needs a signed-in user. The decision itself lives in
//! `util::auth::evaluate`; this component memoizes it against the session
//! signal, renders accordingly, and performs at most one redirect per
//! target through `install_guard_redirect`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::state::role::{LOGIN_PATH, Role};
use crate::util::auth::{GuardOutcome, evaluate, install_guard_redirect};

/// Render `children` only for a signed-in user whose role is allowed.
///
/// An empty `allowed_roles` admits any signed-in user. Anonymous visitors
/// are sent to `redirect_to` (default `/login`); other roles are sent to
/// their own landing page.
#[component]
pub fn ProtectedRoute(
    #[prop(optional, into)] allowed_roles: Vec<Role>,
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let session = auth.session();
    let redirect_to = redirect_to.unwrap_or_else(|| LOGIN_PATH.to_owned());
    let outcome = Memo::new(move |_| evaluate(&session.get(), &allowed_roles, &redirect_to));

    install_guard_redirect(outcome, use_navigate());

    move || match outcome.get() {
        GuardOutcome::Loading => view! { <LoadingIndicator /> }.into_any(),
        GuardOutcome::Authorized => children().into_any(),
        GuardOutcome::Unauthenticated { .. } | GuardOutcome::Unauthorized { .. } => ().into_any(),
    }
}

/// Placeholder shown while the session or page data is loading.
#[component]
pub fn LoadingIndicator(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="loading-indicator__spinner" aria-hidden="true"></span>
            <span class="loading-indicator__text">{message}</span>
        </div>
    }
}
