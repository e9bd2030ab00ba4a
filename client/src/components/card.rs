//! Card building blocks for content listings.
//!
//! DESIGN
//! ======
//! A card is composed from parts (`CardTitle`, `CardDescription`, `CardCta`,
//! `CardEyebrow`, `CardLink`) inside a `Card` wrapper. Wrappers that can
//! render as different elements take a small tag enum instead of a string so
//! only valid elements are expressible.

use leptos::prelude::*;

use crate::components::icons::ChevronRightIcon;
use crate::util::class_names::{join_when, with_extra};

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

pub(crate) const CARD_CLASS: &str = "group relative flex flex-col items-start";
pub(crate) const TITLE_CLASS: &str = "text-base font-semibold tracking-tight text-zinc-800 dark:text-zinc-100";
pub(crate) const DESCRIPTION_CLASS: &str = "relative z-10 mt-2 text-sm text-zinc-600 dark:text-zinc-400";
pub(crate) const CTA_CLASS: &str =
    "relative z-10 mt-4 flex items-center text-sm font-medium text-[#00843D] dark:text-yellow-400";
pub(crate) const EYEBROW_CLASS: &str =
    "relative z-10 order-first mb-3 flex items-center text-sm text-zinc-400 dark:text-zinc-500";

/// Element a [`Card`] renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardTag {
    #[default]
    Div,
    Section,
    Article,
    Li,
}

/// Heading level of a [`CardTitle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
}

/// Element a [`CardEyebrow`] renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EyebrowTag {
    #[default]
    P,
    Span,
    Time,
}

/// Class list for an eyebrow. Decorated eyebrows leave room for the rule.
pub fn eyebrow_class(decorate: bool, extra: &str) -> String {
    join_when([(EYEBROW_CLASS, true), ("pl-3.5", decorate), (extra, true)])
}

#[component]
pub fn Card(
    #[prop(optional)] tag: CardTag,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = with_extra(CARD_CLASS, &class);
    match tag {
        CardTag::Div => view! { <div class=class>{children()}</div> }.into_any(),
        CardTag::Section => view! { <section class=class>{children()}</section> }.into_any(),
        CardTag::Article => view! { <article class=class>{children()}</article> }.into_any(),
        CardTag::Li => view! { <li class=class>{children()}</li> }.into_any(),
    }
}

/// Stretches a link over the whole card with a hover backdrop.
#[component]
pub fn CardLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <div class="absolute -inset-x-4 -inset-y-6 z-0 scale-95 bg-zinc-50 opacity-0 transition group-hover:scale-100 group-hover:opacity-100 sm:-inset-x-6 sm:rounded-2xl dark:bg-zinc-800/50"></div>
        <a href=href>
            <span class="absolute -inset-x-4 -inset-y-6 z-20 sm:-inset-x-6 sm:rounded-2xl"></span>
            <span class="relative z-10">{children()}</span>
        </a>
    }
}

#[component]
pub fn CardTitle(
    #[prop(optional)] level: HeadingLevel,
    #[prop(optional, into)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    let inner = match href {
        Some(href) => view! { <CardLink href=href>{children()}</CardLink> }.into_any(),
        None => children(),
    };
    match level {
        HeadingLevel::H1 => view! { <h1 class=TITLE_CLASS>{inner}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2 class=TITLE_CLASS>{inner}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 class=TITLE_CLASS>{inner}</h3> }.into_any(),
    }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class=DESCRIPTION_CLASS>{children()}</p> }
}

/// Call-to-action link with a trailing chevron.
#[component]
pub fn CardCta(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a href=href class=CTA_CLASS>
            {children()}
            <ChevronRightIcon class="ml-1 h-4 w-4 stroke-current"/>
        </a>
    }
}

#[component]
pub fn CardEyebrow(
    #[prop(optional)] tag: EyebrowTag,
    #[prop(optional)] decorate: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] datetime: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = eyebrow_class(decorate, &class);
    let decoration = decorate.then(|| {
        view! {
            <span class="absolute inset-y-0 left-0 flex items-center" aria-hidden="true">
                <span class="h-4 w-0.5 rounded-full bg-zinc-200 dark:bg-zinc-500"></span>
            </span>
        }
    });
    match tag {
        EyebrowTag::P => view! { <p class=class>{decoration}{children()}</p> }.into_any(),
        EyebrowTag::Span => view! { <span class=class>{decoration}{children()}</span> }.into_any(),
        EyebrowTag::Time => {
            view! { <time class=class datetime=datetime>{decoration}{children()}</time> }.into_any()
        }
    }
}
