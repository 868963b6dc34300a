//! Role navigation for the signed-in layout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthContext;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<AuthContext>().session();
    let location = use_location();

    let items = move || {
        let role = session.get().role()?;
        let current = location.pathname.get();
        Some(
            role.nav_items()
                .iter()
                .map(|&(label, href)| {
                    let active = current == href;
                    view! {
                        <a
                            class="sidebar__link"
                            class:sidebar__link--active=active
                            aria-current=active.then_some("page")
                            href=href
                        >
                            {label}
                        </a>
                    }
                })
                .collect_view(),
        )
    };

    view! {
        <nav class="sidebar" aria-label="Main">
            <p class="sidebar__section">
                {move || session.get().role().map(|r| r.label())}
            </p>
            {items}
        </nav>
    }
}
