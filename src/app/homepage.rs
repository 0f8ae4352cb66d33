use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::{contact::Contact, dom, navbar::Navbar, profile::Profile, work::Work};
use crate::motion::{CurtainReveal, ProgressTracker, ScrollOffsets};

#[component]
pub fn HomePage() -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();
    let tracker = StoredValue::new(ProgressTracker::new(ScrollOffsets::TRAILING_EDGE));
    let (progress, set_progress) = signal(0.0);

    // The curtain opens while the bottom of the content scrolls out of view.
    dom::use_scroll_measure(move || {
        let geometry = content_ref.get_untracked().map(|el| dom::geometry(&el));
        let next = tracker
            .try_update_value(|t| t.sample(dom::scroll_y(), geometry, dom::viewport_height()))
            .unwrap_or_default();
        if next != progress.get_untracked() {
            set_progress.set(next);
        }
    });

    let curtain = CurtainReveal::default();
    let curtain_style = move || format!("clip-path: {}", curtain.clip_path(progress.get()));

    view! {
        <Title text="Digital Alchemy" />
        <Navbar />
        <div node_ref=content_ref class="relative z-20 mb-[85vh] md:mb-[80vh] lg:mb-[75vh]">
            <Hero />
            <Profile />
            <Work />
            <Philosophy />
        </div>
        <div style=curtain_style class="fixed bottom-0 left-0 w-full h-screen z-10 bg-black">
            <div class="absolute bottom-0 left-0 w-full h-[85vh] md:h-[80vh] lg:h-[75vh] flex flex-col">
                <Contact />
            </div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex flex-col justify-center px-6 pt-24 md:pt-28 pb-10">
            <div class="relative z-10 w-full max-w-5xl mx-auto flex flex-col items-start gap-6 md:gap-8 animate-fade-up">
                <p class="text-[11px] md:text-xs font-mono tracking-[0.25em] uppercase text-white/70">
                    "Digital Design Portfolio"
                </p>
                <h1 class="leading-[0.9] select-none drop-shadow-[0_10px_40px_rgba(0,0,0,0.55)]">
                    <span class="block text-[13vw] md:text-[9vw] lg:text-[7.4vw] font-extrabold tracking-tighter text-[#F3F6FF]">
                        "DIGITAL"
                    </span>
                    <span class="block text-[13vw] md:text-[9vw] lg:text-[7.4vw] font-extrabold tracking-tighter text-transparent bg-clip-text bg-gradient-to-r from-[#F3F6FF] via-white to-[#FFE5CF]">
                        "ALCHEMY"
                    </span>
                </h1>
                <p class="max-w-xl text-sm md:text-base text-white/70">
                    "Crafting interfaces, identities, and immersive visuals that feel as fluid as the world behind them."
                </p>
            </div>
        </section>
    }
}

#[component]
fn Philosophy() -> impl IntoView {
    view! {
        <section
            id="about"
            class="min-h-[90vh] py-32 px-6 flex items-center justify-center relative border-y border-white/5 overflow-hidden"
        >
            <div class="max-w-5xl text-center relative z-10">
                <p class="text-3xl md:text-6xl font-serif italic text-gray-200 leading-tight">
                    "\"Design is not just what it looks like and feels like. Design is how it "
                    <span class="text-sky-300 not-italic font-bold font-sans tracking-tighter drop-shadow-[0_0_18px_rgba(56,189,248,0.55)]">
                        "works"
                    </span> ".\""
                </p>
                <div class="mt-12 flex flex-col items-center gap-4">
                    <div class="h-24 w-[1px] bg-gradient-to-b from-transparent via-sky-400/70 to-transparent"></div>
                    <span class="text-xs font-mono text-sky-300 tracking-widest uppercase">
                        "Philosophy"
                    </span>
                </div>
            </div>
        </section>
    }
}
