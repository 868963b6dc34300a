//! Card for a document in search results, recent lists and suggestions.
//!
//! DESIGN
//! ======
//! Preview and download go through the API client with the current token;
//! each card tracks its own busy/error state so one failing file does not
//! affect the rest of the list.

#[cfg(test)]
#[path = "document_card_test.rs"]
mod document_card_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::DocumentSummary;
use crate::state::auth::AuthContext;
use crate::util::format::{format_file_size, truncate};

const TITLE_LIMIT: usize = 80;
const DESCRIPTION_LIMIT: usize = 160;

/// Size label: raw byte counts are formatted, anything else shown as sent.
pub fn display_size(raw: &str) -> String {
    raw.trim()
        .parse::<u64>()
        .map_or_else(|_| raw.trim().to_owned(), format_file_size)
}

pub fn year_label(year: &serde_json::Value) -> Option<String> {
    match year {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        _ => None,
    }
}

/// Short facts shown under the title, in display order.
pub fn meta_items(doc: &DocumentSummary) -> Vec<String> {
    let mut items = Vec::new();
    if let Some(kind) = doc.document_type.as_deref().filter(|k| !k.is_empty()) {
        items.push(kind.to_owned());
    }
    if let Some(department) = doc.department.as_deref().filter(|d| !d.is_empty()) {
        items.push(department.to_owned());
    }
    if let Some(year) = doc.year.as_ref().and_then(year_label) {
        items.push(year);
    }
    if let Some(size) = doc.file_size.as_deref().filter(|s| !s.trim().is_empty()) {
        items.push(display_size(size));
    }
    items
}

#[component]
pub fn DocumentCard(
    document: DocumentSummary,
    /// Extra line under the description, e.g. why it was suggested.
    #[prop(optional, into)]
    note: MaybeProp<String>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let id = document.id;
    let meta = meta_items(&document);
    let href = format!("/documents/{id}");

    let run_file_action = move |download: bool| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let api = config.api(auth.token());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if download {
                api.download_document(id).await
            } else {
                api.preview_document(id).await
            };
            if let Err(e) = result {
                log::warn!("document {id} file action failed: {e}");
                if e.is_auth_failure() {
                    auth.expire();
                }
                error.set(Some(e.user_message()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, download);
            busy.set(false);
        }
    };
    let run_preview = run_file_action.clone();

    view! {
        <article class="document-card">
            <h3 class="document-card__title">
                <a href=href>{truncate(&document.title, TITLE_LIMIT)}</a>
            </h3>
            {document.author.map(|a| view! { <p class="document-card__author">{a}</p> })}
            <p class="document-card__meta">
                {meta.into_iter().map(|m| view! { <span class="document-card__chip">{m}</span> }).collect_view()}
            </p>
            {(!document.description.is_empty()).then(|| view! {
                <p class="document-card__description">{truncate(&document.description, DESCRIPTION_LIMIT)}</p>
            })}
            {move || note.get().map(|n| view! { <p class="document-card__note">{n}</p> })}
            <p class="document-card__stats">
                {format!("{} views · {} downloads", document.views, document.downloads)}
            </p>
            <div class="document-card__actions">
                <button
                    type="button"
                    class="btn btn--ghost btn--sm"
                    disabled=move || busy.get()
                    on:click=move |_| run_preview(false)
                >
                    "Preview"
                </button>
                <button
                    type="button"
                    class="btn btn--primary btn--sm"
                    disabled=move || busy.get()
                    aria-busy=move || busy.get().then_some("true")
                    on:click=move |_| run_file_action(true)
                >
                    "Download"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="document-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}
