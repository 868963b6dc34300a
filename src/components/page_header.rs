//! Top bar for signed-in pages: title, optional back link, theme toggle and
//! the profile menu.

use leptos::prelude::*;

use crate::components::user_profile_dropdown::UserProfileDropdown;
use crate::state::storage::BrowserStorage;
use crate::util::dark_mode;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional, into)] back_href: MaybeProp<String>,
) -> impl IntoView {
    let dark = RwSignal::new(false);
    Effect::new(move || {
        let enabled = dark_mode::read_preference(&BrowserStorage);
        dark_mode::apply(enabled);
        dark.set(enabled);
    });

    view! {
        <header class="page-header">
            {move || back_href.get().map(|href| view! {
                <a class="page-header__back" href=href aria-label="Go back">"←"</a>
            })}
            <div class="page-header__titles">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            <span class="page-header__spacer"></span>
            <button
                type="button"
                class="btn btn--ghost page-header__theme"
                title="Toggle dark mode"
                on:click=move |_| dark.set(dark_mode::toggle(&BrowserStorage, dark.get_untracked()))
            >
                {move || if dark.get() { "☀" } else { "☾" }}
            </button>
            <UserProfileDropdown />
        </header>
    }
}
