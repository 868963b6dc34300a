use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist or has moved."</p>
            <a class="btn btn--primary" href="/">"Back to home"</a>
        </div>
    }
}
