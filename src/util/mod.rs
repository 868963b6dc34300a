//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the logic parts can be tested natively.

pub mod auth;
pub mod dark_mode;
pub mod download;
pub mod format;
pub mod request_seq;
