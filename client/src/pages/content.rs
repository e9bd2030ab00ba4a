//! Text pages (about, ideas, apply) sharing one layout.

use leptos::prelude::*;

use crate::components::container::Container;
use crate::components::prose::Prose;
use crate::components::section_heading::SectionHeading;

/// Heading, eyebrow and body for a simple text page.
#[component]
fn ContentPage(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Container class="mt-16 sm:mt-32">
            <header class="max-w-2xl">
                <SectionHeading>{eyebrow}</SectionHeading>
                <h1 class="mt-6 font-mono text-4xl font-bold tracking-tight text-zinc-800 sm:text-5xl dark:text-zinc-100">
                    {title}
                </h1>
            </header>
            <Prose class="mt-10">{children()}</Prose>
        </Container>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <ContentPage eyebrow="About" title="We build open source together">
            <p>
                "AOSSIE started in 2016 as a group of researchers and students who wanted real-world software to be part of their education."
            </p>
            <p>
                "Today we mentor contributors from around the world on projects spanning decentralized systems, education tools, and developer infrastructure."
            </p>
        </ContentPage>
    }
}

#[component]
pub fn IdeasPage() -> impl IntoView {
    view! {
        <ContentPage eyebrow="Ideas" title="Project ideas for contributors">
            <p>
                "Each idea lists the expected outcome, required skills, and potential mentors. Reach out on Discord before you start writing a proposal."
            </p>
            <p>"Ideas are refreshed before every Google Summer of Code season."</p>
        </ContentPage>
    }
}

#[component]
pub fn ApplyPage() -> impl IntoView {
    view! {
        <ContentPage eyebrow="Apply" title="Apply to GSoC with AOSSIE">
            <h2>"Before you apply"</h2>
            <p>"Join the community, pick a project, and make a first contribution to it."</p>
            <h2>"Writing your proposal"</h2>
            <p>"Describe the problem, your plan, and a weekly timeline. Share a draft with mentors early."</p>
        </ContentPage>
    }
}
