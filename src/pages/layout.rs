//! Chrome shared by every signed-in page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::page_header::PageHeader;
use crate::components::sidebar::Sidebar;
use crate::net::error::ApiError;
use crate::state::auth::AuthContext;

#[component]
pub fn SignedInLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional, into)] back_href: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-layout__main">
                <PageHeader title=title subtitle=subtitle back_href=back_href />
                <main class="app-layout__content">{children()}</main>
                <Footer />
            </div>
        </div>
    }
}

/// Log a failed page load and return the text to show in its place.
///
/// Auth failures also end the session, which sends the guard to `/login`.
pub fn load_error(auth: AuthContext, what: &str, error: &ApiError) -> String {
    log::warn!("loading {what} failed: {error}");
    if error.is_auth_failure() {
        auth.expire();
    }
    error.user_message()
}
