//! Role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page serves every role: it fetches `/{section}/stats` for the signed-in
//! role and, for students, the recently added documents. Each section loads
//! and fails independently.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::components::protected_route::LoadingIndicator;
use crate::config::ClientConfig;
use crate::net::types::{DocumentSummary, RoleStats};
use crate::pages::layout::SignedInLayout;
use crate::state::auth::AuthContext;
use crate::state::role::Role;

/// Page subtitle for each role's dashboard.
pub fn dashboard_subtitle(role: Role) -> &'static str {
    match role {
        Role::Student => "Find theses, projects and papers from across the university",
        Role::Teacher => "Review and manage documents from your courses",
        Role::DepartmentHead => "Approve submissions and track your department",
        Role::Dean => "Oversee academic output across all departments",
        Role::Admin => "Manage users, departments and system health",
    }
}

/// `Welcome back, Hana` from a full name; generic when the name is blank.
pub fn greeting(name: &str) -> String {
    name.split_whitespace()
        .next()
        .map_or_else(|| "Welcome back".to_owned(), |first| format!("Welcome back, {first}"))
}

#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();
    let session = auth.session();

    let stats = RwSignal::new(None::<Result<RoleStats, String>>);
    let recent = RwSignal::new(None::<Result<Vec<DocumentSummary>, String>>);

    #[cfg(feature = "hydrate")]
    {
        use crate::pages::layout::load_error;

        let api = config.api(auth.token());
        leptos::task::spawn_local(async move {
            let result = api.role_stats(role).await;
            stats.set(Some(result.map_err(|e| load_error(auth, "dashboard stats", &e))));
            if role == Role::Student {
                let result = api.recent_documents().await;
                recent.set(Some(result.map_err(|e| load_error(auth, "recent documents", &e))));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &config;

    let name = move || session.get().identity.map(|i| i.name).unwrap_or_default();

    view! {
        <SignedInLayout title=format!("{} Dashboard", role.label()) subtitle=dashboard_subtitle(role)>
            <section class="dashboard">
                <h2 class="dashboard__greeting">{move || greeting(&name())}</h2>
                {move || match stats.get() {
                    None => view! { <LoadingIndicator message="Loading statistics..." /> }.into_any(),
                    Some(Err(message)) => view! { <p class="dashboard__error" role="alert">{message}</p> }.into_any(),
                    Some(Ok(stats)) if stats.items.is_empty() => view! {
                        <p class="dashboard__empty">"No statistics yet."</p>
                    }.into_any(),
                    Some(Ok(stats)) => view! {
                        <dl class="dashboard__stats">
                            {stats.items.into_iter().map(|(label, value)| view! {
                                <div class="stat-card">
                                    <dt class="stat-card__label">{label}</dt>
                                    <dd class="stat-card__value">{value}</dd>
                                </div>
                            }).collect_view()}
                        </dl>
                    }.into_any(),
                }}
                <Show when=move || role == Role::Student>
                    <h2 class="dashboard__heading">"Recently added"</h2>
                    {move || match recent.get() {
                        None => view! { <LoadingIndicator message="Loading documents..." /> }.into_any(),
                        Some(Err(message)) => view! { <p class="dashboard__error" role="alert">{message}</p> }.into_any(),
                        Some(Ok(docs)) if docs.is_empty() => view! {
                            <p class="dashboard__empty">"Nothing new yet."</p>
                        }.into_any(),
                        Some(Ok(docs)) => docs
                            .into_iter()
                            .map(|document| view! { <DocumentCard document=document /> })
                            .collect_view()
                            .into_any(),
                    }}
                    <a class="btn btn--primary" href="/student/browse">"Browse all documents"</a>
                </Show>
            </section>
        </SignedInLayout>
    }
}
