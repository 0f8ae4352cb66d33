use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::{
    dom,
    navbar::{HomeLink, SectionLink},
};

/// Year stamped into the footer, taken from the build time.
fn copyright_year(build_time: &str) -> i32 {
    DateTime::parse_from_rfc3339(build_time)
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Contact() -> impl IntoView {
    let year = copyright_year(env!("BUILD_TIME"));

    view! {
        <section
            id="contact"
            class="relative h-full min-h-0 bg-black px-6 md:px-16 pt-28 md:pt-36 pb-12 md:pb-16"
        >
            <div class="absolute top-0 left-0 w-full h-28 md:h-32 bg-black pointer-events-none"></div>
            <div class="w-full max-w-[1600px] mx-auto grid grid-cols-12 gap-8">
                <div class="col-span-12 md:col-span-7 lg:col-span-6 flex flex-col justify-center">
                    <h2 class="text-[10vw] md:text-[6vw] lg:text-[4.8vw] font-black leading-[0.95] tracking-tight">
                        "WE WOULD LOVE" <br /> "TO HEAR FROM YOU."
                    </h2>
                    <p class="mt-6 text-sm md:text-base text-white/60 max-w-xl">
                        "Feel free to reach out if you want to collaborate with us, or simply have a chat."
                    </p>
                    <a
                        href="mailto:contact@nexus.design"
                        class="group mt-8 inline-flex items-center gap-3 text-xl md:text-2xl font-medium tracking-tight"
                    >
                        "contact@nexus.design"
                        <span class="inline-flex items-center justify-center w-8 h-8 rounded-full border border-white/20 group-hover:border-sky-300 group-hover:text-sky-300 transition-colors">
                            "→"
                        </span>
                    </a>
                    <div class="mt-16 text-[10px] font-mono text-white/40">
                        {format!("© NEXUS STUDIO {year} · All rights reserved")}
                    </div>
                </div>
                <div class="col-span-12 md:col-span-5 lg:col-span-4 grid grid-cols-1 md:grid-cols-2 gap-10">
                    <div>
                        <div class="text-[10px] font-mono tracking-[0.25em] text-white/50 uppercase mb-3">
                            "Our address"
                        </div>
                        <div class="space-y-2 text-sm text-white/80">
                            <div>"Unit D104"</div>
                            <div>"116 Commercial Street"</div>
                            <div>"London, E1 6NF"</div>
                            <div>"United Kingdom"</div>
                        </div>
                    </div>
                    <div>
                        <div class="text-[10px] font-mono tracking-[0.25em] text-white/50 uppercase mb-3">
                            "Follow us"
                        </div>
                        <div class="text-sm text-white/80 flex gap-3 mb-4">
                            <span>"Fb"</span>
                            <span>"Tw"</span>
                            <span>"Ig"</span>
                            <span>"Li"</span>
                        </div>
                    </div>
                </div>
                <div class="col-span-12 lg:col-span-2">
                    <div class="text-[10px] font-mono tracking-[0.25em] text-white/50 uppercase mb-3">
                        "Home"
                    </div>
                    <div class="flex flex-col space-y-2 text-sm">
                        <HomeLink link_class="block text-white/80 hover:text-white">
                            "Home"
                        </HomeLink>
                        <SectionLink id="work" link_class="block text-white/80 hover:text-white">
                            "Work"
                        </SectionLink>
                        <SectionLink id="profile" link_class="block text-white/80 hover:text-white">
                            "Profile"
                        </SectionLink>
                        <SectionLink id="about" link_class="block text-white/80 hover:text-white">
                            "About"
                        </SectionLink>
                        <a href="#/projects" class="block text-white/80 hover:text-white">
                            "All Projects"
                        </a>
                    </div>
                </div>
            </div>
            <button
                on:click=move |_| dom::scroll_to(0.0, true)
                class="fixed bottom-10 right-10 z-40 text-[10px] font-mono px-4 py-2 rounded-full border border-white/20 text-white/70 hover:text-black hover:bg-white transition-colors"
                aria-label="Back to top"
            >
                "TOP ↑"
            </button>
            <div class="absolute bottom-0 left-0 w-full h-24 bg-gradient-to-t from-black to-transparent pointer-events-none"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2024-03-09T12:00:00+00:00"), 2024);
        assert_eq!(copyright_year("not a date"), Utc::now().year());
    }
}
