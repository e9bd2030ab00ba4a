//! Landing page.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::card_home::CardHome;
use crate::components::container::Container;

/// Highlights shown as cards under the hero.
const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("Open Source", "Every project we mentor is developed in the open and licensed for anyone to use.", "/projects"),
    ("Mentorship", "Contributors work with experienced mentors through programs like Google Summer of Code.", "/apply"),
    ("Ideas", "Browse the ideas list to find a project that matches your interests.", "/ideas"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Container class="mt-9">
            <div class="max-w-2xl">
                <h1 class="font-mono text-4xl font-bold tracking-tight text-zinc-800 sm:text-5xl dark:text-zinc-100">
                    "Australian Open Source Software Innovation and Education"
                </h1>
                <p class="mt-6 font-mono text-base text-zinc-600 dark:text-zinc-400">
                    "AOSSIE is a not-for-profit organization dedicated to project-based innovation-focused and research-intensive education."
                </p>
            </div>
        </Container>
        <Container class="mt-16 md:mt-20">
            <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                {HIGHLIGHTS
                    .iter()
                    .map(|(heading, content, href)| {
                        view! { <CardHome heading=*heading content=*content href=*href/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Container>
        <div class="mt-24">
            <Banner/>
        </div>
    }
}
