//! Accessible labelled text field.
//!
//! DESIGN
//! ======
//! The label is bound with `for`, hint and error text get stable ids derived
//! from the field id, and `aria-describedby` lists whichever of them is
//! present. The id/class computations are plain functions so they can be
//! tested without a DOM.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(1);

/// Per-render numbering for generated field ids.
///
/// Provided once by `App`. The server render and hydration build the same
/// tree in the same order, so both hand out the same ids.
#[derive(Clone, Copy)]
pub struct FieldIds(StoredValue<usize>);

pub fn provide_field_ids() {
    provide_context(FieldIds(StoredValue::new(0)));
}

/// Fresh `input-{n}` id for fields that were not given one.
///
/// Falls back to a process-wide counter outside an app tree.
pub fn next_field_id() -> String {
    let scoped = use_context::<FieldIds>().and_then(|FieldIds(counter)| {
        counter.try_update_value(|n| {
            *n += 1;
            *n
        })
    });
    let n = scoped.unwrap_or_else(|| NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed));
    format!("input-{n}")
}

pub fn hint_id(field_id: &str) -> String {
    format!("{field_id}-hint")
}

pub fn error_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Value for `aria-describedby`, or `None` when there is nothing to point at.
pub fn described_by(field_id: &str, has_hint: bool, has_error: bool) -> Option<String> {
    let ids: Vec<String> = [
        has_hint.then(|| hint_id(field_id)),
        has_error.then(|| error_id(field_id)),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!ids.is_empty()).then(|| ids.join(" "))
}

pub fn input_classes(has_error: bool, has_prefix: bool, has_suffix: bool) -> String {
    let mut classes = vec!["input"];
    if has_error {
        classes.push("input--error");
    }
    if has_prefix {
        classes.push("input--with-prefix");
    }
    if has_suffix {
        classes.push("input--with-suffix");
    }
    classes.join(" ")
}

/// `type` attribute, accounting for the password visibility toggle.
pub fn effective_type(kind: &str, show_password: bool) -> &str {
    if kind == "password" && show_password {
        "text"
    } else {
        kind
    }
}

#[component]
pub fn Input(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Render a `<textarea>` instead of an `<input>`.
    #[prop(optional)]
    multiline: bool,
    #[prop(default = 4)] rows: u32,
    /// Offer a show/hide button for password fields.
    #[prop(optional)]
    toggle_password: bool,
    #[prop(optional, into)] prefix: Option<String>,
    #[prop(optional, into)] suffix: Option<String>,
) -> impl IntoView {
    let field_id = id.unwrap_or_else(next_field_id);
    let has_hint = hint.is_some();
    let has_prefix = prefix.is_some();
    let has_suffix = suffix.is_some();
    let show_password = RwSignal::new(false);

    let has_error = move || error.get().is_some_and(|e| !e.is_empty());
    let describedby = {
        let field_id = field_id.clone();
        move || described_by(&field_id, has_hint, has_error())
    };
    let classes = move || input_classes(has_error(), has_prefix, has_suffix);
    let is_disabled = move || disabled.get().unwrap_or(false);

    let control = if multiline {
        view! {
            <textarea
                id=field_id.clone()
                name=name
                class=classes
                rows=rows
                placeholder=placeholder
                required=required
                disabled=is_disabled
                aria-invalid=move || has_error().then_some("true")
                aria-describedby=describedby
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field_id.clone()
                name=name
                class=classes
                type=move || effective_type(kind, show_password.get()).to_owned()
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                disabled=is_disabled
                aria-invalid=move || has_error().then_some("true")
                aria-describedby=describedby
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    let error_element_id = error_id(&field_id);
    view! {
        <div class="field">
            <label class="field__label" for=field_id.clone()>
                {label}
                {required.then(|| view! { <span class="field__required" aria-hidden="true">" *"</span> })}
            </label>
            <div class="field__control">
                {prefix.map(|p| view! { <span class="field__prefix" aria-hidden="true">{p}</span> })}
                {control}
                {suffix.map(|s| view! { <span class="field__suffix" aria-hidden="true">{s}</span> })}
                {(toggle_password && kind == "password").then(|| view! {
                    <button
                        type="button"
                        class="field__toggle"
                        aria-pressed=move || if show_password.get() { "true" } else { "false" }
                        aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                })}
            </div>
            {hint.map(|h| view! { <p class="field__hint" id=hint_id(&field_id)>{h}</p> })}
            <Show when=has_error>
                <p class="field__error" id=error_element_id.clone() role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
