//! Site footer: navigation, copyright and community links.

use leptos::prelude::*;

use crate::components::container::{ContainerInner, ContainerOuter};
use crate::components::icons::{DiscordIcon, GitHubIcon, GitLabIcon, MailIcon, XIcon};
use crate::state::nav::{NAV_ENTRIES, NavigationEntry};

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

pub const COPYRIGHT: &str = "\u{a9} 2016-2025 AOSSIE. All rights reserved.";

pub(crate) const NAV_CLASS: &str =
    "flex gap-5 font-mono text-lg font-semibold text-zinc-800 dark:text-zinc-200";
const SOCIAL_LINK_CLASS: &str =
    "text-zinc-500 transition hover:text-[#00843D] dark:text-zinc-400 dark:hover:text-yellow-400";

/// Icon drawn for a [`SocialLink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Mail,
    GitLab,
    GitHub,
    Discord,
    X,
}

/// External community link shown in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { href: "mailto:aossie.oss@gmail.com", label: "Contact by Mail", icon: SocialIcon::Mail },
    SocialLink { href: "https://gitlab.com/aossie", label: "Follow on GitLab", icon: SocialIcon::GitLab },
    SocialLink { href: "https://github.com/AOSSIE-Org", label: "Follow on GitHub", icon: SocialIcon::GitHub },
    SocialLink { href: "https://discord.gg/hjUhu33uAn", label: "Join on Discord", icon: SocialIcon::Discord },
    SocialLink { href: "https://twitter.com/aossie_org", label: "Follow on X (Twitter)", icon: SocialIcon::X },
];

impl SocialLink {
    /// Mail links open in the mail client; everything else in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

fn social_icon(icon: SocialIcon) -> AnyView {
    let class = "h-6 w-6";
    match icon {
        SocialIcon::Mail => view! { <MailIcon class=class/> }.into_any(),
        SocialIcon::GitLab => view! { <GitLabIcon class=class/> }.into_any(),
        SocialIcon::GitHub => view! { <GitHubIcon class=class/> }.into_any(),
        SocialIcon::Discord => view! { <DiscordIcon class=class/> }.into_any(),
        SocialIcon::X => view! { <XIcon class=class/> }.into_any(),
    }
}

#[component]
fn FooterNavLink(entry: NavigationEntry) -> impl IntoView {
    view! {
        <a href=entry.path class="transition hover:text-[#00843D] dark:hover:text-yellow-400">
            {entry.label}
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-32">
            <ContainerOuter>
                <div class="border-t border-zinc-100 pt-10 pb-16 dark:border-zinc-700/40">
                    <ContainerInner>
                        <div class="flex flex-col items-center justify-between gap-6 sm:flex-row">
                            <div class=NAV_CLASS>
                                {NAV_ENTRIES
                                    .iter()
                                    .map(|entry| view! { <FooterNavLink entry=*entry/> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <p class="font-mono text-base text-zinc-400 dark:text-zinc-500">{COPYRIGHT}</p>
                            <div class="flex gap-6">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        let new_tab = link.opens_new_tab();
                                        view! {
                                            <a
                                                href=link.href
                                                aria-label=link.label
                                                class=SOCIAL_LINK_CLASS
                                                target=new_tab.then_some("_blank")
                                                rel=new_tab.then_some("noopener noreferrer")
                                            >
                                                {social_icon(link.icon)}
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    </ContainerInner>
                </div>
            </ContainerOuter>
        </footer>
    }
}
