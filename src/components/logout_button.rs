//! Sign-out action shared by headers and menus.

#[cfg(test)]
#[path = "logout_button_test.rs"]
mod logout_button_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthContext;
use crate::state::role::LOGIN_PATH;

/// Navigation after sign-out. Replaces the current entry so it lands on the
/// same history slot the route guard would redirect into.
pub fn after_logout() -> (&'static str, NavigateOptions) {
    (
        LOGIN_PATH,
        NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        },
    )
}

/// Clears the local session, tells the server (best effort) and goes to
/// the login page.
#[component]
pub fn LogoutButton(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let token = auth.token();
        auth.logout();

        #[cfg(feature = "hydrate")]
        {
            let api = config.api(token);
            leptos::task::spawn_local(async move {
                if let Err(e) = api.logout().await {
                    log::warn!("server logout failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, token);

        let (path, options) = after_logout();
        navigate(path, options);
    };

    view! {
        <button
            type="button"
            class=format!("btn btn--ghost logout-button {}", class.unwrap_or_default())
            on:click=on_logout
        >
            "Log out"
        </button>
    }
}
