//! Typography wrapper for long-form content.

use leptos::prelude::*;

use crate::util::class_names::with_extra;

#[cfg(test)]
#[path = "prose_test.rs"]
mod prose_test;

pub(crate) const PROSE_CLASS: &str = "prose dark:prose-invert \
    prose-headings:mt-0 prose-headings:font-extrabold prose-headings:font-mono \
    prose-a:text-[#00843D] dark:prose-a:text-yellow-400 \
    prose-code:rounded-md prose-code:p-2 prose-code:bg-slate-300 dark:prose-code:bg-zinc-800";

/// Class list for a [`Prose`] block.
pub fn prose_class(extra: &str) -> String {
    with_extra(PROSE_CLASS, extra)
}

#[component]
pub fn Prose(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=prose_class(&class)>{children()}</div> }
}
