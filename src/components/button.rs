//! Button with variants, sizes and a loading state; renders as a link when
//! given an `href`.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Ghost,
    Danger,
    Success,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Primary => "primary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Success => "success",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, loading: bool, extra: Option<&str>) -> String {
    let mut class = format!("btn btn--{} btn--{}", variant.as_str(), size.as_str());
    if loading {
        class.push_str(" btn--loading");
    }
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || disabled.get().unwrap_or(false) || is_loading();
    let classes = move || button_classes(variant, size, is_loading(), class.as_deref());

    let spinner = move || {
        is_loading().then(|| view! { <span class="btn__spinner" aria-hidden="true"></span> })
    };

    if let Some(href) = href {
        return view! {
            <a
                class=classes
                role="button"
                href=move || (!is_disabled()).then(|| href.clone())
                tabindex=move || is_disabled().then_some("-1")
                aria-disabled=move || is_disabled().then_some("true")
                aria-busy=move || is_loading().then_some("true")
                aria-label=aria_label
            >
                {spinner}
                {children()}
            </a>
        }
        .into_any();
    }

    view! {
        <button
            class=classes
            type=kind
            disabled=is_disabled
            aria-busy=move || is_loading().then_some("true")
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {spinner}
            {children()}
        </button>
    }
    .into_any()
}
