//! Decorative dot-grid pattern drawn behind banners.

use leptos::prelude::*;

const COLUMNS: u16 = 10;
const ROWS: u16 = 4;
const SPACING: u16 = 16;

#[component]
pub fn Pattern(#[prop(optional, into)] class: String) -> impl IntoView {
    let dots = (0..ROWS)
        .flat_map(|row| (0..COLUMNS).map(move |col| (col, row)))
        .map(|(col, row)| {
            let cx = (col * SPACING + SPACING / 2).to_string();
            let cy = (row * SPACING + SPACING / 2).to_string();
            view! { <circle cx=cx cy=cy r="2"></circle> }
        })
        .collect::<Vec<_>>();
    let width = (COLUMNS * SPACING).to_string();
    let height = (ROWS * SPACING).to_string();
    view! {
        <svg
            aria-hidden="true"
            width=width
            height=height
            fill="white"
            class=class
        >
            <g class="opacity-40 dark:fill-black">{dots}</g>
        </svg>
    }
}
