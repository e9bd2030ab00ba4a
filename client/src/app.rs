//! Root application component with routing and the shared page layout.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::content::{AboutPage, ApplyPage, IdeasPage};
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::projects::ProjectsPage;
use crate::state::nav::ActiveMatch;

/// Active-link matching used by the site header.
pub const SITE_ACTIVE_MATCH: ActiveMatch = ActiveMatch::Exact;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="h-full antialiased">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="flex h-full flex-col bg-zinc-50 dark:bg-black">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/aossie-site.css"/>
        <Title text="AOSSIE"/>
        <Meta name="description" content="Australian Open Source Software Innovation and Education"/>
        <Link rel="icon" href="/images/aossie-logo.svg"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("ideas") view=IdeasPage/>
                    <Route path=StaticSegment("apply") view=ApplyPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

/// Header, page content, footer.
#[component]
fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex justify-center sm:px-8">
            <div class="flex w-full max-w-7xl lg:px-8">
                <div class="w-full bg-white ring-1 ring-zinc-100 dark:bg-zinc-900 dark:ring-zinc-300/20"></div>
            </div>
        </div>
        <div class="relative flex w-full flex-col">
            <Header active_match=SITE_ACTIVE_MATCH/>
            <main class="flex-auto">{children()}</main>
            <Footer/>
        </div>
    }
}
