//! Profile page for any signed-in role.
//!
//! The display name can be edited locally; the change is kept in the
//! persisted session until the next server check refreshes it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::pages::layout::SignedInLayout;
use crate::state::auth::AuthContext;
use crate::state::role::{Permission, Role};
use crate::state::session::UserIdentity;
use crate::util::format::initials;

/// `(label, value)` rows describing the identity; absent fields are skipped.
pub fn profile_rows(identity: &UserIdentity) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Name", identity.name.clone()),
        ("Email", identity.email.clone()),
        ("Role", identity.role.label().to_owned()),
    ];
    let optional = [
        ("Department", identity.department.clone()),
        ("College", identity.college.clone()),
        ("Student ID", identity.student_id.clone()),
    ];
    rows.extend(
        optional
            .into_iter()
            .filter_map(|(label, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (label, v))),
    );
    rows
}

/// Backend permission names granted to `role`, for the access list.
pub fn access_list(role: Role) -> Vec<&'static str> {
    role.permissions().iter().copied().map(Permission::as_str).collect()
}

pub fn validate_display_name(name: &str) -> Result<String, &'static str> {
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err("Name cannot be empty.");
    }
    Ok(name)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let session = auth.session();

    let draft = RwSignal::new(String::new());
    let editing = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let name_error = RwSignal::new(None::<String>);

    let start_edit = move |_| {
        draft.set(session.get_untracked().identity.map(|i| i.name).unwrap_or_default());
        name_error.set(None);
        editing.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_display_name(&draft.get()) {
            Ok(name) => {
                if auth.update_identity(|i| i.name = name) {
                    notice.set(Some("Profile updated.".to_owned()));
                }
                editing.set(false);
            }
            Err(message) => name_error.set(Some(message.to_owned())),
        }
    };

    view! {
        <SignedInLayout title="My profile">
            {move || {
                session.get().identity.map(|identity| {
                    let rows = profile_rows(&identity);
                    let access = access_list(identity.role);
                    view! {
                        <section class="profile">
                            <span class="avatar avatar--large" aria-hidden="true">{initials(&identity.name)}</span>
                            <dl class="profile__facts">
                                {rows.into_iter().map(|(label, value)| view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                }).collect_view()}
                            </dl>
                            <h2 class="profile__heading">"Access"</h2>
                            <ul class="profile__access">
                                {access.into_iter().map(|name| view! { <li class="chip">{name}</li> }).collect_view()}
                            </ul>
                        </section>
                    }
                })
            }}
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <button type="button" class="btn btn--ghost" on:click=start_edit>"Edit name"</button>
                }
            >
                <form class="profile__form" on:submit=on_save>
                    <Input label="Display name" id="profile-name" value=draft error=Signal::derive(move || name_error.get()) required=true />
                    <Button kind="submit" variant=ButtonVariant::Primary>"Save"</Button>
                    <button type="button" class="btn btn--ghost" on:click=move |_| editing.set(false)>"Cancel"</button>
                </form>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="profile__notice" role="status">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </SignedInLayout>
    }
}
