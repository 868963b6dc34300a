//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `role` and `session` are plain data and logic, `storage` is the
//! persistence seam, and `auth` wires them into Leptos signals and context.

pub mod auth;
pub mod role;
pub mod session;
pub mod storage;
