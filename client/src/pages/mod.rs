//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are mounted by the router in `app.rs` inside the shared layout, so
//! they render only their own content between the header and the footer.

pub mod content;
pub mod home;
pub mod not_found;
pub mod projects;
