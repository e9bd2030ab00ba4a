//! Page-width containers.
//!
//! `Container` is `ContainerOuter` wrapping `ContainerInner`; the parts are
//! exported separately for sections that need a full-bleed outer wrapper.
//! `ContainerPattern` is the single-level variant used behind decorative
//! patterns, sized by [`ContainerSize`].

use leptos::prelude::*;

use crate::util::class_names::with_extra;

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;

pub(crate) const OUTER_CLASS: &str = "sm:px-8";
pub(crate) const INNER_CLASS: &str = "relative px-4 sm:px-8 lg:px-12";

/// Max width of a [`ContainerPattern`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ContainerSize {
    pub fn max_width_class(self) -> &'static str {
        match self {
            Self::Sm => "max-w-2xl",
            Self::Md => "max-w-4xl",
            Self::Lg => "max-w-6xl",
        }
    }
}

/// Class list for a [`ContainerPattern`] of `size`.
pub fn pattern_class(size: ContainerSize, extra: &str) -> String {
    with_extra(&format!("mx-auto px-4 sm:px-6 md:px-4 lg:px-8 {}", size.max_width_class()), extra)
}

#[component]
pub fn ContainerOuter(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=with_extra(OUTER_CLASS, &class)>
            <div class="mx-auto w-full max-w-7xl lg:px-8">{children()}</div>
        </div>
    }
}

#[component]
pub fn ContainerInner(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=with_extra(INNER_CLASS, &class)>
            <div class="mx-auto max-w-2xl lg:max-w-5xl">{children()}</div>
        </div>
    }
}

/// Standard page container.
#[component]
pub fn Container(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <ContainerOuter class=class>
            <ContainerInner>{children()}</ContainerInner>
        </ContainerOuter>
    }
}

#[component]
pub fn ContainerPattern(
    #[prop(optional)] size: ContainerSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=pattern_class(size, &class)>{children()}</div> }
}
