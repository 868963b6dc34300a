//! Networking modules for the archive REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `types` defines the wire schema and its
//! decoding quirks, and `error` is the failure type both share.

pub mod api;
pub mod error;
pub mod types;
