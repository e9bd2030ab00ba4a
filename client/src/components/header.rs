//! Site header: home logo, desktop and mobile navigation, dark-mode toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router's current path is the only input for active-link state. Both
//! navigation surfaces render every entry from the same per-entry flags, so
//! they can never disagree about which link is active.
//!
//! DESIGN
//! ======
//! The mobile panel is driven by the `Disclosure` state machine and the
//! display mode by `DisplayModeController`; this module only wires UI events
//! into those models. The controller resolves the initial mode in an effect,
//! which only runs after hydration in the browser.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::container::Container;
use crate::components::icons::{ChevronDownIcon, CloseIcon, MoonIcon, SunIcon};
use crate::state::disclosure::{Disclosure, DisclosureEvent};
use crate::state::nav::{ActiveMatch, NAV_ENTRIES, NavigationEntry, active_flags, shows_home_logo};
use crate::util::dark_mode::{BrowserDisplayMode, browser_controller};

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

pub const LOGO_SRC: &str = "/images/aossie-logo.svg";
pub const MENU_LABEL: &str = "Menu";
pub const TOGGLE_LABEL: &str = "Toggle dark mode";

/// Class list for a desktop navigation link.
pub fn nav_item_class(active: bool) -> &'static str {
    if active {
        "relative block px-3 py-2 transition text-[#00843D] dark:text-yellow-400"
    } else {
        "relative block px-3 py-2 transition hover:text-[#00843D] dark:hover:text-yellow-400"
    }
}

/// Class list for a mobile navigation link.
pub fn mobile_nav_item_class(active: bool) -> &'static str {
    if active {
        "block py-2 font-semibold text-[#00843D] dark:text-yellow-400"
    } else {
        "block py-2"
    }
}

/// `aria-current` value for a navigation link.
pub fn aria_current(active: bool) -> Option<&'static str> {
    active.then_some("page")
}

/// Value for boolean ARIA attributes (`aria-expanded`, `aria-pressed`).
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn flag_at(flags: Memo<Vec<bool>>, index: usize) -> Signal<bool> {
    Signal::derive(move || flags.with(|f| f.get(index).copied().unwrap_or(false)))
}

#[component]
pub fn Header(#[prop(optional)] active_match: ActiveMatch) -> impl IntoView {
    let pathname = use_location().pathname;
    let flags = Memo::new(move |_| active_flags(NAV_ENTRIES, &pathname.get(), active_match));
    let show_logo = move || shows_home_logo(&pathname.get());

    let disclosure = RwSignal::new(Disclosure::default());
    // Close the mobile panel whenever the route changes.
    Effect::new(move |prev: Option<String>| {
        let path = pathname.get();
        if prev.is_some_and(|p| p != path) {
            disclosure.update(|d| *d = d.on(DisclosureEvent::RouteChanged));
        }
        path
    });

    let display = RwSignal::new(browser_controller());
    Effect::new(move || {
        display.update(|c| {
            c.resolve_initial();
        });
    });

    view! {
        <header class="pointer-events-none relative z-50 flex flex-none flex-col">
            <div class="top-0 z-10 h-16 pt-6">
                <Container class="w-full">
                    <div class="relative flex gap-4">
                        <div class="flex flex-1">
                            <Show when=show_logo>
                                <HomeLogo/>
                            </Show>
                        </div>
                        <div class="flex flex-1 justify-end md:justify-center">
                            <MobileNavigation
                                disclosure=disclosure
                                flags=flags
                                class="pointer-events-auto md:hidden"
                            />
                            <DesktopNavigation flags=flags class="pointer-events-auto hidden md:block"/>
                        </div>
                        <div class="flex justify-end md:flex-1">
                            <div class="pointer-events-auto">
                                <ModeToggle display=display/>
                            </div>
                        </div>
                    </div>
                </Container>
            </div>
        </header>
    }
}

#[component]
fn HomeLogo() -> impl IntoView {
    view! {
        <a
            href="/"
            aria-label="Home"
            class="pointer-events-auto h-10 w-10 rounded-full bg-white/90 p-0.5 shadow-lg ring-1 shadow-zinc-800/5 ring-zinc-900/5 backdrop-blur dark:bg-zinc-800/90 dark:ring-white/10"
        >
            <img src=LOGO_SRC alt="" class="h-9 w-9 rounded-full bg-zinc-100 object-cover dark:bg-zinc-800"/>
        </a>
    }
}

#[component]
fn NavItem(entry: NavigationEntry, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <li>
            <a
                href=entry.path
                class=move || nav_item_class(active.get())
                aria-current=move || aria_current(active.get())
            >
                {entry.label}
                <Show when=move || active.get()>
                    <span class="absolute inset-x-1 -bottom-px h-px bg-gradient-to-r from-[#00843D]/0 via-[#00843D]/40 to-[#00843D]/0 dark:from-yellow-400/0 dark:via-yellow-400/40 dark:to-yellow-400/0"></span>
                </Show>
            </a>
        </li>
    }
}

/// Horizontal navigation shown from the `md` breakpoint up.
#[component]
fn DesktopNavigation(flags: Memo<Vec<bool>>, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <nav class=class>
            <ul class="flex rounded-full bg-white/90 px-3 font-mono text-sm font-medium text-zinc-800 shadow-lg ring-1 shadow-zinc-800/5 ring-zinc-900/5 backdrop-blur dark:bg-zinc-800/90 dark:text-zinc-200 dark:ring-white/10">
                {NAV_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| view! { <NavItem entry=*entry active=flag_at(flags, i)/> })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

#[component]
fn MobileNavItem(
    entry: NavigationEntry,
    #[prop(into)] active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <li>
            <a
                href=entry.path
                class=move || mobile_nav_item_class(active.get())
                aria-current=move || aria_current(active.get())
                on:click=move |_| on_select.run(())
            >
                {entry.label}
            </a>
        </li>
    }
}

/// "Menu" button plus the slide-down panel shown below the `md` breakpoint.
#[component]
fn MobileNavigation(
    disclosure: RwSignal<Disclosure>,
    flags: Memo<Vec<bool>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let send = move |event: DisclosureEvent| disclosure.update(|d| *d = d.on(event));
    let on_select = Callback::new(move |()| send(DisclosureEvent::EntrySelected));

    // Move focus into the panel when it opens so Escape reaches the dialog.
    let close_ref = NodeRef::<leptos::html::Button>::new();
    Effect::new(move || {
        if let Some(button) = close_ref.get() {
            if let Err(e) = button.focus() {
                leptos::logging::warn!("failed to focus navigation panel: {e:?}");
            }
        }
    });

    view! {
        <div class=class>
            <button
                type="button"
                class="group flex items-center rounded-full bg-white/90 px-4 py-2 font-mono text-sm font-medium text-zinc-800 shadow-lg ring-1 shadow-zinc-800/5 ring-zinc-900/5 backdrop-blur dark:bg-zinc-800/90 dark:text-zinc-200 dark:ring-white/10 dark:hover:ring-white/20"
                aria-expanded=move || aria_bool(disclosure.get().is_open())
                on:click=move |_| send(DisclosureEvent::MenuButton)
            >
                {MENU_LABEL}
                <ChevronDownIcon class="ml-3 h-auto w-2 stroke-zinc-500 group-hover:stroke-zinc-700 dark:group-hover:stroke-zinc-400"/>
            </button>
            <Show when=move || disclosure.get().is_open()>
                <div
                    class="fixed inset-0 z-50 bg-zinc-800/40 backdrop-blur-sm dark:bg-black/80"
                    on:click=move |_| send(DisclosureEvent::OutsideDismiss)
                ></div>
                <div
                    role="dialog"
                    aria-label="Navigation"
                    class="fixed inset-x-4 top-8 z-50 origin-top rounded-3xl bg-white p-8 ring-1 ring-zinc-900/5 dark:bg-zinc-900 dark:ring-zinc-800"
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            send(DisclosureEvent::OutsideDismiss);
                        }
                    }
                >
                    <div class="flex flex-row-reverse items-center justify-between">
                        <button
                            type="button"
                            aria-label="Close menu"
                            node_ref=close_ref
                            class="-m-1 p-1"
                            on:click=move |_| send(DisclosureEvent::CloseButton)
                        >
                            <CloseIcon class="h-6 w-6 text-zinc-500 dark:text-zinc-400"/>
                        </button>
                        <h2 class="font-mono text-sm font-medium text-zinc-600 dark:text-zinc-400">"Navigation"</h2>
                    </div>
                    <nav class="mt-6">
                        <ul class="-my-2 divide-y divide-zinc-100 font-mono text-base text-zinc-800 dark:divide-zinc-100/5 dark:text-zinc-300">
                            {NAV_ENTRIES
                                .iter()
                                .enumerate()
                                .map(|(i, entry)| {
                                    view! {
                                        <MobileNavItem entry=*entry active=flag_at(flags, i) on_select=on_select/>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </nav>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ModeToggle(display: RwSignal<BrowserDisplayMode>) -> impl IntoView {
    let is_dark = move || display.with(|c| c.mode().is_dark());
    view! {
        <button
            type="button"
            aria-label=TOGGLE_LABEL
            aria-pressed=move || aria_bool(is_dark())
            class="group rounded-full bg-white/90 px-3 py-2 shadow-lg ring-1 shadow-zinc-800/5 ring-zinc-900/5 backdrop-blur transition dark:bg-zinc-800/90 dark:ring-white/10 dark:hover:ring-white/20"
            on:click=move |_| {
                display.update(|c| {
                    c.toggle();
                });
            }
        >
            <SunIcon class="h-6 w-6 fill-zinc-100 stroke-zinc-500 transition group-hover:fill-zinc-200 group-hover:stroke-zinc-700 dark:hidden [@media(prefers-color-scheme:dark)]:fill-[#00843D]/10 [@media(prefers-color-scheme:dark)]:stroke-[#00843D]"/>
            <MoonIcon class="hidden h-6 w-6 fill-zinc-700 stroke-zinc-500 transition dark:block [@media(prefers-color-scheme:dark)]:group-hover:stroke-zinc-400 [@media_not_(prefers-color-scheme:dark)]:fill-yellow-400/10 [@media_not_(prefers-color-scheme:dark)]:stroke-yellow-400"/>
        </button>
    }
}
