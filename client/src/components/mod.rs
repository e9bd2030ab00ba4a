//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `header` is the only stateful component; everything else maps props to
//! markup and exposes its class lists as plain functions or constants.

pub mod banner;
pub mod card;
pub mod card_home;
pub mod container;
pub mod footer;
pub mod header;
pub mod icons;
pub mod pattern;
pub mod prose;
pub mod section_heading;

/// Render a view to an HTML string inside a fresh reactive owner.
#[cfg(test)]
pub(crate) fn render_html<V: leptos::prelude::IntoView + 'static>(view: impl FnOnce() -> V) -> String {
    use leptos::prelude::*;

    let owner = Owner::new();
    owner.with(|| view().to_html())
}
