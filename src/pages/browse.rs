//! Student document search with filters and sorting.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::components::input::Input;
use crate::components::protected_route::LoadingIndicator;
use crate::config::ClientConfig;
use crate::net::types::{Department, DocumentQuery, DocumentSort, DocumentSummary};
use crate::pages::layout::SignedInLayout;
use crate::state::auth::AuthContext;
use crate::util::request_seq::RequestSeq;

/// Select value meaning "no filter".
pub const ANY: &str = "all";

/// `(value, label)` pairs for the document type filter.
pub const DOCUMENT_TYPES: [(&str, &str); 5] = [
    ("thesis", "Thesis"),
    ("project-report", "Project Report"),
    ("research-paper", "Research Paper"),
    ("lab-report", "Lab Report"),
    ("assignment", "Assignment"),
];

fn selected(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty() && value != ANY).then_some(value)
}

/// Query from the raw filter controls; `all` and blanks mean unfiltered.
pub fn build_query(search: &str, document_type: &str, department: &str, year: &str, sort: &str) -> DocumentQuery {
    DocumentQuery {
        search: search.trim().to_owned(),
        document_type: selected(document_type).map(str::to_owned),
        department_id: selected(department).and_then(|d| d.parse().ok()),
        year: selected(year).map(str::to_owned),
        sort: DocumentSort::from_param(sort),
    }
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();

    let search = RwSignal::new(String::new());
    let document_type = RwSignal::new(ANY.to_owned());
    let department = RwSignal::new(ANY.to_owned());
    let year = RwSignal::new(String::new());
    let sort = RwSignal::new(DocumentSort::default().as_str().to_owned());
    let departments = RwSignal::new(Vec::<Department>::new());
    let results = RwSignal::new(None::<Result<Vec<DocumentSummary>, String>>);
    let search_seq = StoredValue::new(RequestSeq::default());

    let search_config = config.clone();
    let run_search = move || {
        let query = build_query(
            &search.get_untracked(),
            &document_type.get_untracked(),
            &department.get_untracked(),
            &year.get_untracked(),
            &sort.get_untracked(),
        );
        let ticket = search_seq.try_update_value(RequestSeq::begin).unwrap_or_default();
        results.set(None);
        let api = search_config.api(auth.token());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::pages::layout::load_error;

            let result = api.search_documents(&query).await;
            if search_seq.try_with_value(|seq| seq.is_current(ticket)) != Some(true) {
                log::debug!("dropping stale search response #{ticket}");
                return;
            }
            results.set(Some(result.map_err(|e| load_error(auth, "search results", &e))));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, query, ticket);
    };

    #[cfg(feature = "hydrate")]
    {
        let api = config.api(None);
        leptos::task::spawn_local(async move {
            match api.departments().await {
                Ok(list) => departments.set(list),
                Err(e) => log::warn!("could not load departments: {e}"),
            }
        });
    }

    let initial_search = run_search.clone();
    Effect::new(move || initial_search());

    let on_submit = {
        let run_search = run_search.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            run_search();
        }
    };
    let on_filter_change = move || run_search();

    view! {
        <SignedInLayout title="Browse documents" subtitle="Search the archive">
            <form class="search-form" role="search" on:submit=on_submit>
                <Input label="Search" id="browse-search" kind="search" placeholder="Title, author or keyword" value=search />
                <Input label="Year" id="browse-year" placeholder="e.g. 2023" value=year />
                <label class="field">
                    <span class="field__label">"Type"</span>
                    <select class="input" on:change={
                        let on_filter_change = on_filter_change.clone();
                        move |ev| {
                            document_type.set(event_target_value(&ev));
                            on_filter_change();
                        }
                    }>
                        <option value=ANY>"All types"</option>
                        {DOCUMENT_TYPES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Department"</span>
                    <select class="input" on:change={
                        let on_filter_change = on_filter_change.clone();
                        move |ev| {
                            department.set(event_target_value(&ev));
                            on_filter_change();
                        }
                    }>
                        <option value=ANY>"All departments"</option>
                        {move || {
                            departments
                                .get()
                                .into_iter()
                                .map(|d| view! { <option value=d.id.to_string()>{d.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Sort by"</span>
                    <select class="input" on:change=move |ev| {
                        sort.set(event_target_value(&ev));
                        on_filter_change();
                    }>
                        {DocumentSort::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" class="btn btn--primary">"Search"</button>
            </form>
            <section class="search-results" aria-live="polite">
                {move || match results.get() {
                    None => view! { <LoadingIndicator message="Searching..." /> }.into_any(),
                    Some(Err(message)) => view! { <p class="search-results__error" role="alert">{message}</p> }.into_any(),
                    Some(Ok(docs)) if docs.is_empty() => view! {
                        <p class="search-results__empty">"No documents match these filters."</p>
                    }.into_any(),
                    Some(Ok(docs)) => view! {
                        <p class="search-results__count">{format!("{} documents", docs.len())}</p>
                        {docs.into_iter().map(|document| view! { <DocumentCard document=document /> }).collect_view()}
                    }.into_any(),
                }}
            </section>
        </SignedInLayout>
    }
}
