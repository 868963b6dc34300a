//! Email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the identity and token go into the session store and the user
//! lands on their role's page. Visitors who are already signed in skip the
//! form the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::config::ClientConfig;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthContext;

/// Trimmed credentials, or the message to show.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();
    let session = auth.session();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let registered = move || query.read().get("registered").is_some_and(|v| v == "true");

    let navigate_home = navigate.clone();
    Effect::new(move || {
        let current = session.get();
        if current.loading {
            return;
        }
        if let Some(role) = current.role() {
            navigate_home(role.landing_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        let api = config.api(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.login(&request).await {
                Ok(response) => auth.login(response.identity, Some(&response.token)),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    info.set(e.user_message());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, request);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"AASTU Document Archive"</p>
                <Show when=registered>
                    <p class="auth-card__notice" role="status">
                        "Account created. You can sign in now."
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <Input
                        label="Email"
                        id="login-email"
                        kind="email"
                        autocomplete="email"
                        placeholder="you@aastu.edu.et"
                        value=email
                        required=true
                    />
                    <Input
                        label="Password"
                        id="login-password"
                        kind="password"
                        autocomplete="current-password"
                        value=password
                        required=true
                        toggle_password=true
                    />
                    <Button kind="submit" variant=ButtonVariant::Primary loading=Signal::derive(move || busy.get())>
                        "Sign in"
                    </Button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__error" role="alert">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
