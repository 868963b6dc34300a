//! Documents recommended for the signed-in student.

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod suggestions_test;

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::components::protected_route::LoadingIndicator;
use crate::config::ClientConfig;
use crate::net::types::Suggestion;
use crate::pages::layout::SignedInLayout;
use crate::state::auth::AuthContext;

/// Explanation line for a suggestion card.
pub fn suggestion_note(suggestion: &Suggestion) -> Option<String> {
    let reason = suggestion.reason.as_deref().map(str::trim).filter(|r| !r.is_empty());
    match (reason, suggestion.relevance) {
        (Some(reason), Some(relevance)) => Some(format!("{reason} ({relevance}% match)")),
        (Some(reason), None) => Some(reason.to_owned()),
        (None, Some(relevance)) => Some(format!("{relevance}% match")),
        (None, None) => None,
    }
}

/// Most relevant first; unscored suggestions keep their order at the end.
pub fn rank(mut suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    suggestions.sort_by_key(|s| std::cmp::Reverse(s.relevance));
    suggestions
}

#[component]
pub fn SuggestionsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();
    let suggestions = RwSignal::new(None::<Result<Vec<Suggestion>, String>>);

    #[cfg(feature = "hydrate")]
    {
        use crate::pages::layout::load_error;

        let api = config.api(auth.token());
        leptos::task::spawn_local(async move {
            let result = api.suggestions().await.map(rank);
            suggestions.set(Some(result.map_err(|e| load_error(auth, "suggestions", &e))));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, &config);

    view! {
        <SignedInLayout title="Suggested for you" subtitle="Based on your department and recent activity">
            {move || match suggestions.get() {
                None => view! { <LoadingIndicator message="Finding suggestions..." /> }.into_any(),
                Some(Err(message)) => view! { <p class="suggestions__error" role="alert">{message}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="suggestions__empty">"No suggestions yet. Browse a few documents first."</p>
                }.into_any(),
                Some(Ok(list)) => list
                    .into_iter()
                    .map(|s| {
                        let note = suggestion_note(&s);
                        view! { <DocumentCard document=s.document note=note /> }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </SignedInLayout>
    }
}
