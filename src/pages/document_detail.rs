//! Single document view at `/documents/:id`.

#[cfg(test)]
#[path = "document_detail_test.rs"]
mod document_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::button::{Button, ButtonVariant};
use crate::components::document_card::{display_size, year_label};
use crate::components::protected_route::LoadingIndicator;
use crate::config::ClientConfig;
use crate::net::types::DocumentDetail;
use crate::pages::layout::SignedInLayout;
use crate::state::auth::AuthContext;
use crate::state::role::{Permission, Role};
use crate::state::session::Session;
use crate::util::request_seq::RequestSeq;

pub fn parse_document_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|id| *id > 0)
}

/// `(label, value)` rows for the details table, skipping unknown fields.
/// Approval status is shown only to viewers who can approve.
pub fn detail_rows(detail: &DocumentDetail, viewer: &Session) -> Vec<(&'static str, String)> {
    let can_approve = viewer.has_permission(Permission::DocumentApprove);
    let doc = &detail.summary;
    let text = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);
    [
        ("Author", text(&doc.author)),
        ("Department", text(&doc.department)),
        ("Type", text(&doc.document_type)),
        ("Year", doc.year.as_ref().and_then(year_label)),
        ("Format", text(&doc.file_format)),
        ("Size", text(&doc.file_size).map(|s| display_size(&s))),
        ("Uploaded by", text(&detail.uploaded_by)),
        ("Uploaded", text(&detail.uploaded_at).or_else(|| text(&doc.date))),
        ("Status", text(&detail.approval_status).filter(|_| can_approve)),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

#[component]
pub fn DocumentDetailPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let session = auth.session();

    let detail = RwSignal::new(None::<Result<DocumentDetail, String>>);
    let busy = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);
    let load_seq = StoredValue::new(RequestSeq::default());

    let document_id = Memo::new(move |_| params.read().get("id").as_deref().and_then(parse_document_id));

    let load_config = config.clone();
    Effect::new(move || {
        let ticket = load_seq.try_update_value(RequestSeq::begin).unwrap_or_default();
        let Some(id) = document_id.get() else {
            detail.set(Some(Err("This document link is not valid.".to_owned())));
            return;
        };
        detail.set(None);
        let api = load_config.api(auth.token());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::pages::layout::load_error;

            let result = api.document(id).await;
            if load_seq.try_with_value(|seq| seq.is_current(ticket)) != Some(true) {
                log::debug!("dropping stale document response #{ticket}");
                return;
            }
            detail.set(Some(result.map_err(|e| load_error(auth, "document", &e))));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, id, ticket);
    });

    let file_action = move |download: bool| {
        let Some(id) = document_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        action_error.set(None);
        let api = config.api(auth.token());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if download {
                api.download_document(id).await
            } else {
                api.preview_document(id).await
            };
            if let Err(e) = result {
                action_error.set(Some(crate::pages::layout::load_error(auth, "document file", &e)));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, id, download);
            busy.set(false);
        }
    };
    let preview = file_action.clone();

    let back_href = Signal::derive(move || {
        session.get().role().map(|role| match role {
            Role::Student => "/student/browse".to_owned(),
            other => other.landing_path().to_owned(),
        })
    });

    view! {
        <SignedInLayout title="Document" back_href=back_href>
            {move || match detail.get() {
                None => view! { <LoadingIndicator message="Loading document..." /> }.into_any(),
                Some(Err(message)) => view! { <p class="document-detail__error" role="alert">{message}</p> }.into_any(),
                Some(Ok(d)) => {
                    let rows = detail_rows(&d, &session.get());
                    let keywords = d.summary.keywords.clone();
                    view! {
                        <article class="document-detail">
                            <h2 class="document-detail__title">{d.summary.title.clone()}</h2>
                            <p class="document-detail__description">{d.summary.description.clone()}</p>
                            <dl class="document-detail__facts">
                                {rows.into_iter().map(|(label, value)| view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                }).collect_view()}
                            </dl>
                            <ul class="document-detail__keywords">
                                {keywords.into_iter().map(|k| view! { <li class="chip">{k}</li> }).collect_view()}
                            </ul>
                            <p class="document-detail__stats">
                                {format!("{} views · {} downloads", d.summary.views, d.summary.downloads)}
                            </p>
                        </article>
                    }
                    .into_any()
                }
            }}
            <div class="document-detail__actions">
                <Button variant=ButtonVariant::Ghost disabled=Signal::derive(move || busy.get()) on_click=Callback::new(move |_| preview(false))>
                    "Preview"
                </Button>
                <Button variant=ButtonVariant::Primary loading=Signal::derive(move || busy.get()) on_click=Callback::new(move |_| file_action(true))>
                    "Download"
                </Button>
            </div>
            <Show when=move || action_error.get().is_some()>
                <p class="document-detail__error" role="alert">{move || action_error.get().unwrap_or_default()}</p>
            </Show>
        </SignedInLayout>
    }
}
