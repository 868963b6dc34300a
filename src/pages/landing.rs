//! Public landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::state::auth::AuthContext;

const FEATURES: [(&str, &str); 3] = [
    (
        "Advanced search",
        "Search by department, year, author and document type with rich filters.",
    ),
    (
        "Verified uploads",
        "Teacher uploads are reviewed by department heads before release.",
    ),
    (
        "Structured archive",
        "Organized by college, department, year and document type.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<AuthContext>().session();
    let home = move || session.get().role().map(|r| r.landing_path());

    view! {
        <div class="landing">
            <header class="landing__header">
                <div class="landing__brand">
                    <span class="landing__title">"AASTU Archive"</span>
                    <span class="landing__subtitle">"Official institutional archive"</span>
                </div>
                <nav class="landing__nav" aria-label="Primary navigation">
                    {move || match home() {
                        Some(path) => view! { <a class="btn btn--primary" href=path>"Go to dashboard"</a> }.into_any(),
                        None => view! {
                            <a class="btn btn--ghost" href="/login">"Log in"</a>
                            <a class="btn btn--primary" href="/signup">"Create account"</a>
                        }
                        .into_any(),
                    }}
                </nav>
            </header>
            <main class="landing__hero">
                <h1>"Every thesis, project and paper in one place"</h1>
                <p>"Browse and download the academic work of Addis Ababa Science and Technology University."</p>
                <ul class="landing__features">
                    {FEATURES
                        .into_iter()
                        .map(|(title, desc)| view! {
                            <li class="feature-card">
                                <h2>{title}</h2>
                                <p>{desc}</p>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </main>
            <Footer />
        </div>
    }
}
