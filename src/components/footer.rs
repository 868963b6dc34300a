use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"AASTU Document Archive"</p>
            <nav class="site-footer__links" aria-label="Footer">
                <a href="/">"Home"</a>
                <a href="/login">"Sign in"</a>
                <a href="/signup">"Create account"</a>
            </nav>
        </footer>
    }
}
