//! Compact linked card used on the landing page.

use leptos::prelude::*;

#[cfg(test)]
#[path = "card_home_test.rs"]
mod card_home_test;

const CARD_HOME_CLASS: &str = "block max-w-sm rounded-lg border border-gray-200 bg-white p-6 shadow hover:bg-gray-100 dark:border-gray-700 dark:bg-gray-800 dark:hover:bg-gray-700";

/// Link target when the caller does not supply one.
pub const PLACEHOLDER_HREF: &str = "#";

fn href_or_placeholder(href: Option<String>) -> String {
    href.filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_HREF.to_owned())
}

#[component]
pub fn CardHome(
    #[prop(into)] heading: String,
    #[prop(into)] content: String,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    view! {
        <a href=href_or_placeholder(href) class=CARD_HOME_CLASS>
            <h5 class="mb-2 font-mono text-2xl font-bold tracking-tight text-gray-900 dark:text-white">
                {heading}
            </h5>
            <p class="font-mono font-normal text-gray-700 dark:text-gray-400">{content}</p>
        </a>
    }
}
