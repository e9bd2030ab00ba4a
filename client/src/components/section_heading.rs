//! Pill-style section heading.
//!
//! Extra attributes given at the call site (`attr:id`, `attr:data-*`) are
//! spread onto the `<h2>`.

use leptos::prelude::*;

use crate::util::class_names::with_extra;

#[cfg(test)]
#[path = "section_heading_test.rs"]
mod section_heading_test;

pub(crate) const SECTION_HEADING_CLASS: &str = "inline-flex items-center rounded-md px-3 py-1 \
    font-mono text-lg font-semibold ring-1 ring-inset \
    text-[#00843D] ring-[#00843D]/30 dark:text-yellow-400 dark:ring-yellow-400/30";

pub fn section_heading_class(extra: &str) -> String {
    with_extra(SECTION_HEADING_CLASS, extra)
}

#[component]
pub fn SectionHeading(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h2 class=section_heading_class(&class)>{children()}</h2> }
}
