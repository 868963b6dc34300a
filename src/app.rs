//! Root component and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the shared contexts (`ClientConfig`, `AuthContext`) and
//! wraps every signed-in route in `ProtectedRoute` with the roles allowed to
//! see it.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::input::provide_field_ids;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::browse::BrowsePage;
use crate::pages::dashboard::RoleDashboard;
use crate::pages::document_detail::DocumentDetailPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::pages::suggestions::SuggestionsPage;
use crate::state::auth::provide_auth_context;
use crate::state::role::Role;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_field_ids();

    let config = ClientConfig::from_build_env();
    provide_context(config.clone());
    provide_auth_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/archive-client.css" />
        <Title text="AASTU Document Archive" />
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route
                    path=path!("/profile")
                    view=|| view! { <ProtectedRoute><ProfilePage /></ProtectedRoute> }
                />
                <Route
                    path=path!("/documents/:id")
                    view=|| view! { <ProtectedRoute><DocumentDetailPage /></ProtectedRoute> }
                />
                <Route path=path!("/student/dashboard") view=|| dashboard_for(Role::Student) />
                <Route
                    path=path!("/student/browse")
                    view=|| view! {
                        <ProtectedRoute allowed_roles=vec![Role::Student]><BrowsePage /></ProtectedRoute>
                    }
                />
                <Route
                    path=path!("/student/suggestions")
                    view=|| view! {
                        <ProtectedRoute allowed_roles=vec![Role::Student]><SuggestionsPage /></ProtectedRoute>
                    }
                />
                <Route path=path!("/teacher/dashboard") view=|| dashboard_for(Role::Teacher) />
                <Route path=path!("/department/dashboard") view=|| dashboard_for(Role::DepartmentHead) />
                <Route path=path!("/dean/dashboard") view=|| dashboard_for(Role::Dean) />
                <Route path=path!("/admin/dashboard") view=|| dashboard_for(Role::Admin) />
            </Routes>
        </Router>
    }
}

/// A role's dashboard, visible only to that role.
fn dashboard_for(role: Role) -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=vec![role]>
            <RoleDashboard role=role />
        </ProtectedRoute>
    }
}
