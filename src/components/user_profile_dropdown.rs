//! Header menu with the signed-in user's details.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::state::auth::AuthContext;
use crate::util::format::initials;

#[component]
pub fn UserProfileDropdown() -> impl IntoView {
    let session = expect_context::<AuthContext>().session();
    let open = RwSignal::new(false);

    let identity = move || session.get().identity;
    let field = move |f: fn(&crate::state::session::UserIdentity) -> String| {
        identity().map(|i| f(&i)).unwrap_or_default()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    };

    view! {
        <Show when=move || identity().is_some()>
            <div class="profile-dropdown" on:keydown=on_keydown>
                <button
                    type="button"
                    class="profile-dropdown__trigger"
                    aria-haspopup="menu"
                    aria-expanded=move || if open.get() { "true" } else { "false" }
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <span class="avatar" aria-hidden="true">{move || field(|i| initials(&i.name))}</span>
                    <span class="profile-dropdown__name">{move || field(|i| i.name.clone())}</span>
                </button>
                <Show when=move || open.get()>
                    <div class="profile-dropdown__menu" role="menu">
                        <div class="profile-dropdown__summary">
                            <p class="profile-dropdown__title">{move || field(|i| i.name.clone())}</p>
                            <p class="profile-dropdown__email">{move || field(|i| i.email.clone())}</p>
                            <p class="profile-dropdown__role">{move || field(|i| i.role.label().to_owned())}</p>
                            {move || {
                                identity()
                                    .and_then(|i| i.department)
                                    .map(|d| view! { <p class="profile-dropdown__department">{d}</p> })
                            }}
                        </div>
                        <a class="profile-dropdown__item" role="menuitem" href="/profile">
                            "My profile"
                        </a>
                        <LogoutButton class="profile-dropdown__item" />
                    </div>
                </Show>
            </div>
        </Show>
    }
}
