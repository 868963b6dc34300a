//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls while reading shared
//! session state from Leptos context providers.

pub mod button;
pub mod document_card;
pub mod footer;
pub mod input;
pub mod logout_button;
pub mod page_header;
pub mod protected_route;
pub mod sidebar;
pub mod user_profile_dropdown;
