//! Project listing page.

use leptos::prelude::*;

use crate::components::card::{Card, CardCta, CardDescription, CardTag, CardTitle};
use crate::components::container::Container;
use crate::components::section_heading::SectionHeading;

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub repo: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "PictoPy",
        description: "An advanced desktop gallery application that combines photo organization with tag-based search.",
        repo: "https://github.com/AOSSIE-Org/PictoPy",
    },
    Project {
        name: "Agora Blockchain",
        description: "Voting algorithms implemented as smart contracts for transparent elections.",
        repo: "https://github.com/AOSSIE-Org/Agora-Blockchain",
    },
    Project {
        name: "EduAid",
        description: "A tool that generates quizzes and questions from study material.",
        repo: "https://github.com/AOSSIE-Org/EduAid",
    },
    Project {
        name: "Resonate",
        description: "An open-source social voice platform for audio rooms and stories.",
        repo: "https://github.com/AOSSIE-Org/Resonate",
    },
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Container class="mt-16 sm:mt-32">
            <header class="max-w-2xl">
                <SectionHeading>"Projects"</SectionHeading>
                <h1 class="mt-6 font-mono text-4xl font-bold tracking-tight text-zinc-800 sm:text-5xl dark:text-zinc-100">
                    "Things we are building"
                </h1>
            </header>
            <ul role="list" class="mt-16 grid grid-cols-1 gap-x-12 gap-y-16 sm:grid-cols-2 lg:grid-cols-3">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <Card tag=CardTag::Li>
                                <CardTitle href=project.repo>{project.name}</CardTitle>
                                <CardDescription>{project.description}</CardDescription>
                                <CardCta href=project.repo>"View repository"</CardCta>
                            </Card>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </Container>
    }
}
