//! Theme preference: stored choice first, then the system setting.
//!
//! The preference lives in durable storage next to the session keys and is
//! applied as a `data-theme` attribute on `<html>`. Outside the browser the
//! DOM side is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::storage::SessionStorage;

pub const STORAGE_KEY: &str = "archive_dark_mode";

/// Stored preference, if one was ever saved and is readable.
pub fn stored_preference(storage: &impl SessionStorage) -> Option<bool> {
    match storage.get(STORAGE_KEY)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Whether dark mode should be on at startup.
pub fn read_preference(storage: &impl SessionStorage) -> bool {
    stored_preference(storage).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it and remember it. Returns the new value.
pub fn toggle(storage: &impl SessionStorage, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = storage.set(STORAGE_KEY, if next { "true" } else { "false" }) {
        log::debug!("theme preference not saved: {e}");
    }
    next
}
