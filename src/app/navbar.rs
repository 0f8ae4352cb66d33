use leptos::{ev::MouseEvent, prelude::*};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::{
    motion::{NavConfig, NavPresence, NavUpdate, SectionVisibility, HOME_LABEL},
    route::Route,
};

const NAV_LINKS: [(&str, &str); 4] = [
    ("Profile", "profile"),
    ("Work", "work"),
    ("About", "about"),
    ("Contact", "contact"),
];

/// Anchor to a section of the home page that scrolls smoothly instead of
/// jumping. Leaves the location hash alone so the view router isn't involved.
#[component]
pub fn SectionLink(
    id: &'static str,
    #[prop(optional)] link_class: &'static str,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=format!("#{id}")
            class=link_class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                if let Some(on_follow) = on_follow {
                    on_follow.run(());
                }
                dom::scroll_to_anchor(id);
            }
        >
            {children()}
        </a>
    }
}

/// Link to the home view. Already on it, the hash change alone would not
/// move the page, so it scrolls back to the top instead.
#[component]
pub fn HomeLink(#[prop(optional)] link_class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=Route::Home.href()
            class=link_class
            on:click=move |ev: MouseEvent| {
                if Route::Home.is_current(&dom::current_hash()) {
                    ev.prevent_default();
                    dom::scroll_to(0.0, true);
                }
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = NavConfig::default();
    let presence = StoredValue::new(NavPresence::new(
        config,
        NAV_LINKS.iter().map(|(_, id)| *id).collect(),
    ));
    let (is_at_top, set_is_at_top) = signal(true);
    let (is_compact, set_is_compact) = signal(false);
    let (active_section, set_active_section) = signal(HOME_LABEL.to_string());
    let (is_hovered, set_is_hovered) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let apply = move |update: NavUpdate| {
        if let Some(at_top) = update.is_at_top {
            set_is_at_top.set(at_top);
        }
        if let Some(below_hero) = update.is_below_hero {
            set_is_compact.set(below_hero);
        }
        if let Some(label) = update.active_section {
            set_active_section.set(label);
        }
    };

    dom::use_scroll_measure(move || {
        let update = presence
            .try_update_value(|p| p.on_scroll(dom::scroll_y(), dom::viewport_height()))
            .unwrap_or_default();
        apply(update);
    });

    // Active section comes from an observer watching a thin band across the
    // middle of the viewport.
    Effect::new(move |_| {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| SectionVisibility {
                    id: entry.target().id(),
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect::<Vec<_>>();
            let update = presence
                .try_update_value(|p| p.on_intersections(&batch))
                .unwrap_or_default();
            apply(update);
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.root_margin());
        init.set_threshold(
            &NavConfig::thresholds()
                .into_iter()
                .map(JsValue::from_f64)
                .collect::<js_sys::Array>(),
        );
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("section observer unavailable: {e:?}");
                    return;
                }
            };
        presence.with_value(|p| {
            for id in p.sections() {
                match document().get_element_by_id(id) {
                    Some(el) => observer.observe(&el),
                    None => log::debug!("section {id} not mounted"),
                }
            }
        });

        let handle = StoredValue::new_local((observer, callback));
        on_cleanup(move || handle.with_value(|(observer, _)| observer.disconnect()));
    });

    let show_full = move || !is_compact.get() || is_hovered.get();
    let surface = move || {
        if is_at_top.get() {
            "bg-transparent border border-transparent shadow-none"
        } else {
            "bg-black/70 border border-white/10 shadow-[0_10px_30px_rgba(0,0,0,0.35)]"
        }
    };
    let close_menu = Callback::new(move |_| set_menu_open.set(false));

    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 flex justify-center items-start pt-6 pointer-events-none">
            <div
                class="pointer-events-auto relative w-[min(90vw,1280px)] h-14"
                on:mouseenter=move |_| set_is_hovered.set(true)
                on:mouseleave=move |_| set_is_hovered.set(false)
            >
                // Both bars stay mounted and crossfade.
                <div class=move || {
                    format!(
                        "absolute inset-0 rounded-3xl px-6 md:px-8 py-3 overflow-hidden transition-[opacity,transform,background-color,border-color] duration-150 ease-out transform-gpu {} {}",
                        surface(),
                        if show_full() {
                            "opacity-100 translate-y-0"
                        } else {
                            "opacity-0 -translate-y-2 pointer-events-none"
                        },
                    )
                }>
                    <div class="flex items-center justify-between gap-8 h-10">
                        <HomeLink link_class="flex items-center gap-2 group shrink-0">
                            <span class="w-8 h-8 flex items-center justify-center text-white group-hover:text-sky-300 group-hover:rotate-180 transition-all duration-500">
                                "⬡"
                            </span>
                            <span class="font-mono font-bold text-xl tracking-tighter whitespace-nowrap mix-blend-difference">
                                "NEXUS"
                            </span>
                        </HomeLink>
                        <div class="hidden md:flex items-center gap-2">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(name, id)| {
                                    view! {
                                        <SectionLink
                                            id
                                            link_class="relative px-5 py-2 text-sm font-bold tracking-wide text-white/80 hover:text-white transition-colors rounded-full hover:bg-white/5 uppercase"
                                        >
                                            {name}
                                        </SectionLink>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex items-center gap-4 shrink-0">
                            <a
                                href="#/projects"
                                class=move || {
                                    format!(
                                        "hidden md:flex items-center gap-2 px-6 py-2 font-bold rounded-full text-sm whitespace-nowrap transition-colors hover:bg-orange-400 hover:text-black hover:border-orange-300 {}",
                                        if is_at_top.get() {
                                            "bg-white/10 border border-white/20 text-white"
                                        } else {
                                            "bg-white text-black"
                                        },
                                    )
                                }
                            >
                                "All Projects →"
                            </a>
                            <button
                                class="md:hidden text-white p-1 font-mono"
                                aria-label="Toggle menu"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {move || if menu_open.get() { "✕" } else { "☰" }}
                            </button>
                        </div>
                    </div>
                </div>
                <div class=move || {
                    format!(
                        "absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-[260px] rounded-full px-5 py-2 overflow-hidden bg-black/80 border border-white/15 shadow-[0_10px_30px_rgba(0,0,0,0.35)] transition-[opacity,transform] duration-150 ease-out transform-gpu {}",
                        if show_full() {
                            "opacity-0 -translate-y-[calc(50%+8px)] pointer-events-none"
                        } else {
                            "opacity-100"
                        },
                    )
                }>
                    <div class="flex items-center justify-between gap-3 h-10">
                        <span class="w-5 h-5 text-white">"⬡"</span>
                        <div class="flex items-center gap-2 min-w-0">
                            <span class="w-1.5 h-1.5 rounded-full bg-sky-300 animate-pulse"></span>
                            <span class="text-sm font-mono tracking-widest uppercase text-white whitespace-nowrap truncate">
                                {active_section}
                            </span>
                        </div>
                        <span class="w-5" />
                    </div>
                </div>
            </div>
        </nav>
        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-30 bg-black flex flex-col items-center justify-center space-y-8 md:hidden animate-fade-up">
                {NAV_LINKS
                    .into_iter()
                    .map(|(name, id)| {
                        view! {
                            <SectionLink
                                id
                                on_follow=close_menu
                                link_class="text-4xl font-bold tracking-tight hover:text-sky-300 transition-colors"
                            >
                                {name}
                            </SectionLink>
                        }
                    })
                    .collect_view()}
                <a
                    href="#/projects"
                    on:click=move |_| set_menu_open.set(false)
                    class="text-xl font-mono tracking-widest uppercase text-white/60 hover:text-white"
                >
                    "All Projects"
                </a>
            </div>
        </Show>
    }
}
