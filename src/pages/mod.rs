//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates rendering details
//! to `components`. Access control is applied around pages in `app`, not
//! inside them.

pub mod browse;
pub mod dashboard;
pub mod document_detail;
pub mod landing;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;
pub mod suggestions;
