//! Fallback page for unknown routes.

use leptos::prelude::*;

use crate::components::container::Container;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Container class="flex h-full items-center pt-16 sm:pt-32">
            <div class="flex flex-col items-center">
                <p class="font-mono text-base font-semibold text-zinc-400 dark:text-zinc-500">"404"</p>
                <h1 class="mt-4 font-mono text-4xl font-bold tracking-tight text-zinc-800 sm:text-5xl dark:text-zinc-100">
                    "Page not found"
                </h1>
                <a href="/" class="mt-4 font-mono text-base text-[#00843D] dark:text-yellow-400">
                    "Go back home"
                </a>
            </div>
        </Container>
    }
}
