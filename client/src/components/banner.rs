//! Call-to-action banner pointing visitors at the application guide.

use leptos::prelude::*;

use crate::components::container::{ContainerPattern, ContainerSize};
use crate::components::pattern::Pattern;

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

pub const BANNER_LABEL: &str = "Apply Banner";
pub const BANNER_HEADING: &str = "Launch into AOSSIE's open-source world through GSoC!";
pub const BANNER_DESCRIPTION: &str = "Learn how to apply for an opportunity to work on open-source projects and gain real-world experience through Google Summer of Code.";
pub const BANNER_CTA_LABEL: &str = "Apply to GSoC with AOSSIE";
pub const BANNER_CTA_HREF: &str = "/apply";

pub(crate) const SECTION_CLASS: &str = "scroll-mt-14 bg-[#00843D] dark:bg-yellow-400 sm:scroll-mt-32";
const CTA_CLASS: &str = "group relative inline-flex items-center overflow-hidden rounded-lg bg-white px-8 py-3 \
    font-mono font-semibold text-[#00843D] shadow-sm ring-1 ring-black/10 transition \
    hover:bg-[#006b31] hover:text-white \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-white focus-visible:ring-offset-2 focus-visible:ring-offset-[#00843D] \
    dark:bg-black dark:text-yellow-400 dark:ring-white/15 dark:hover:bg-white dark:hover:text-black \
    dark:focus-visible:ring-black dark:focus-visible:ring-offset-yellow-400";

#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <section aria-label=BANNER_LABEL class=SECTION_CLASS>
            <div class="overflow-hidden lg:relative">
                <ContainerPattern
                    size=ContainerSize::Md
                    class="relative grid grid-cols-1 items-end gap-y-12 pt-24 pb-8 sm:py-10 lg:static lg:grid-cols-2"
                >
                    <Pattern class="absolute -top-28 left-0 w-full sm:-top-10 sm:left-3/4 sm:ml-8 sm:w-auto md:left-2/3 lg:right-2 lg:left-auto lg:ml-0 xl:right-auto xl:left-2/3"/>
                    <Pattern class="invisible absolute -top-32 left-0 mt-2 w-full sm:visible sm:top-36 sm:left-3/4 sm:ml-8 sm:w-auto md:left-2/3 lg:right-2 lg:left-auto lg:ml-0 xl:right-auto xl:left-2/3"/>
                    <div>
                        <h2 class="font-mono text-5xl font-black tracking-tighter text-white dark:text-black sm:w-3/4 sm:text-5xl md:w-2/3 lg:w-auto">
                            {BANNER_HEADING}
                        </h2>
                        <p class="mt-4 font-mono text-lg font-medium tracking-tighter text-white dark:text-black">
                            {BANNER_DESCRIPTION}
                        </p>
                        <div class="mt-5">
                            <a href=BANNER_CTA_HREF class=CTA_CLASS>
                                {BANNER_CTA_LABEL}
                            </a>
                        </div>
                    </div>
                </ContainerPattern>
            </div>
        </section>
    }
}
