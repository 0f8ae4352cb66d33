use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_raf_fn, use_timeout_fn, use_window, UseRafFnCallbackArgs,
    UseTimeoutFnReturn,
};

use super::dom;
use crate::{
    motion::{
        section::{segment_parallax, DIRECTION_CLEAR_DELAY},
        Direction, DirectionLatch, ProgressTracker, ScrollOffsets,
        SectionTracker, Spring, SpringConfig,
    },
    projects::{Project, CATALOG},
    route::Route,
};

/// Vertical drift of the cover image across one project's segment, in px.
const PARALLAX_RANGE: (f64, f64) = (-18.0, 18.0);

/// Featured projects pinned to the viewport while the section scrolls past,
/// one project per viewport height of travel.
#[component]
pub fn Work() -> impl IntoView {
    let projects = StoredValue::new(CATALOG.featured());
    let count = projects.with_value(|p| p.len()).max(1);

    let section_ref = NodeRef::<html::Section>::new();
    let frame_ref = NodeRef::<html::Div>::new();
    let tracker = StoredValue::new(ProgressTracker::new(ScrollOffsets::PINNED));
    let spring = StoredValue::new(Spring::new(SpringConfig::PROGRESS, 0.0));
    let sections = StoredValue::new(SectionTracker::new(count));
    let latch = StoredValue::new(DirectionLatch::default());
    let cursor = StoredValue::new((
        Spring::new(SpringConfig::POINTER, 0.0),
        Spring::new(SpringConfig::POINTER, 0.0),
    ));

    let (smoothed, set_smoothed) = signal(0.0);
    let (active, set_active) = signal(0usize);
    let (direction, set_direction) = signal(Direction::None);
    let (cursor_pos, set_cursor_pos) = signal((0.0, 0.0));
    let (is_image_hovered, set_is_image_hovered) = signal(false);

    let UseTimeoutFnReturn {
        start: start_clear, ..
    } = use_timeout_fn(
        move |token: u64| {
            if latch.try_update_value(|l| l.clear(token)).unwrap_or(false) {
                set_direction.set(Direction::None);
            }
        },
        DIRECTION_CLEAR_DELAY.as_millis() as f64,
    );
    let announce = move |dir: Direction| {
        if let Some(token) = latch.try_update_value(|l| l.set(dir)) {
            set_direction.set(dir);
            start_clear(token);
        }
    };

    dom::use_scroll_measure(move || {
        let geometry = section_ref.get_untracked().map(|el| dom::geometry(&el));
        tracker.update_value(|t| {
            t.sample(dom::scroll_y(), geometry, dom::viewport_height());
        });
    });

    // Any user scroll input after a rail jump hands control back to the
    // scroll position.
    let release = move || sections.update_value(|s| s.release());
    let _ = use_event_listener(use_window(), ev::wheel, move |_| release());
    let _ = use_event_listener(use_window(), ev::touchstart, move |_| release());
    let _ = use_event_listener(use_window(), ev::keydown, move |_| release());
    let _ = use_event_listener(use_window(), ev::pointerdown, move |_| release());

    {
        let announce = announce.clone();
        let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
            let dt = args.delta / 1000.0;
            let raw = tracker.with_value(|t| t.last());
            let Some(value) = spring.try_update_value(|s| {
                s.set_target(raw);
                s.step(dt);
                s.value()
            }) else {
                return;
            };
            if value != smoothed.get_untracked() {
                set_smoothed.set(value);
            }
            if let Some(dir) = sections.try_update_value(|s| s.update(value)).flatten() {
                set_active.set(sections.with_value(|s| s.index()));
                announce(dir);
            }

            let pos = cursor.try_update_value(|(x, y)| {
                x.step(dt);
                y.step(dt);
                (x.value(), y.value())
            });
            if let Some(pos) = pos.filter(|pos| *pos != cursor_pos.get_untracked()) {
                set_cursor_pos.set(pos);
            }
        });
    }

    let jump = move |idx: usize| {
        if let Some(dir) = sections.try_update_value(|s| s.jump_to(idx)).flatten() {
            set_active.set(sections.with_value(|s| s.index()));
            announce(dir);
        }
        let Some(el) = section_ref.get_untracked() else {
            return;
        };
        let geometry = dom::geometry(&el);
        let progress = sections.with_value(|s| s.progress_for(idx));
        let y = tracker.with_value(|t| t.offset_for(progress, &geometry, dom::viewport_height()));
        dom::scroll_to(y, true);
    };

    let track_cursor = move |ev: ev::MouseEvent| {
        let Some(frame) = frame_ref.get_untracked() else {
            return;
        };
        let rect = frame.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        cursor.update_value(|(cx, cy)| {
            cx.set_target(x);
            cy.set_target(y);
        });
    };

    let current = move || projects.with_value(|p| p.get(active.get()).cloned());
    let parallax = move || segment_parallax(smoothed.get(), active.get(), count, PARALLAX_RANGE);
    let entering = move || match direction.get() {
        Direction::Down => "animate-enter-down",
        Direction::Up => "animate-enter-up",
        Direction::None => "",
    };

    view! {
        <section
            node_ref=section_ref
            id="work"
            class="relative z-30"
            style=format!("height: {}vh", count * 100)
        >
            <div class="sticky top-0 h-screen w-full overflow-hidden flex flex-col">
                <div class="absolute inset-0 opacity-60 bg-[linear-gradient(rgba(255,255,255,0.02)_1px,transparent_1px),linear-gradient(90deg,rgba(255,255,255,0.02)_1px,transparent_1px)] bg-[size:80px_80px] pointer-events-none"></div>
                <div class="w-full h-full max-w-[1920px] mx-auto grid grid-cols-12 relative z-10">
                    <div class="hidden xl:flex col-span-1 border-r border-white/5 flex-col items-center py-12 relative">
                        <div class="flex-1 flex flex-col justify-center gap-2">
                            {(0..count)
                                .map(|idx| {
                                    let jump = jump.clone();
                                    let is_active = move || active.get() == idx;
                                    view! {
                                        <button
                                            on:click=move |_| jump(idx)
                                            class="relative group w-12 h-12 flex items-center justify-center"
                                            aria-label=format!("Show project {}", idx + 1)
                                        >
                                            <div class=move || {
                                                format!(
                                                    "absolute left-0 top-1/2 -translate-y-1/2 w-[2px] h-full transition-all duration-500 bg-sky-300 {}",
                                                    if is_active() {
                                                        "opacity-100 scale-y-100"
                                                    } else {
                                                        "opacity-0 scale-y-0"
                                                    },
                                                )
                                            }></div>
                                            <span class=move || {
                                                format!(
                                                    "font-mono text-xs transition-all duration-500 {}",
                                                    if is_active() {
                                                        "text-white font-bold scale-125"
                                                    } else {
                                                        "text-white/20 group-hover:text-white/50"
                                                    },
                                                )
                                            }>{format!("{:02}", idx + 1)}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="col-span-12 lg:col-span-5 px-8 md:px-16 lg:px-20 xl:px-24 flex flex-col justify-center h-full relative z-20">
                        <div class="absolute top-12 left-8 md:left-16 lg:left-20 xl:left-24 opacity-60">
                            <span class="font-mono text-[10px] tracking-[0.2em] uppercase text-white/70">
                                "Selected Works 2023—24"
                            </span>
                        </div>
                        {move || {
                            current()
                                .map(|project| {
                                    view! {
                                        <div class=move || format!("flex flex-col {}", entering())>
                                            <ProjectSummary project />
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div class="col-span-12 lg:col-span-6 h-[40vh] md:h-[44vh] lg:h-full relative overflow-hidden">
                        <div class="absolute inset-0 flex items-center justify-center px-6 md:px-10 lg:px-12 xl:px-16">
                            <div class="w-full max-w-[720px] xl:max-w-[820px]">
                                <div
                                    node_ref=frame_ref
                                    class="relative w-full overflow-hidden border border-white/5 rounded-2xl bg-black/30 backdrop-blur-[6px]"
                                    on:mouseenter=move |_| set_is_image_hovered.set(true)
                                    on:mouseleave=move |_| set_is_image_hovered.set(false)
                                    on:mousemove=track_cursor
                                >
                                    <div class="relative w-full pt-[70%]">
                                        {move || {
                                            current()
                                                .map(|project| {
                                                    view! {
                                                        <a href=Route::Project(project.id.clone()).href() class="absolute inset-0">
                                                            <img
                                                                src=project.thumbnail.clone()
                                                                alt=project.title.clone()
                                                                class="absolute inset-0 w-full h-full object-cover opacity-80 will-change-transform animate-fade-in"
                                                                style=move || {
                                                                    format!(
                                                                        "transform: translateY({:.2}px) scale(1.1); transform-origin: 50% 50%",
                                                                        parallax(),
                                                                    )
                                                                }
                                                            />
                                                        </a>
                                                    }
                                                })
                                        }}
                                        <Show when=move || direction.get() != Direction::None>
                                            <div class="absolute inset-0 pointer-events-none z-30 bg-gradient-to-b from-white/10 via-transparent to-white/5 opacity-[0.12]"></div>
                                        </Show>
                                        <div class="pointer-events-none absolute inset-0 z-20">
                                            <div
                                                class=move || {
                                                    format!(
                                                        "absolute -translate-x-1/2 -translate-y-1/2 flex items-center justify-center rounded-full text-[10px] tracking-[0.18em] uppercase leading-none text-center transition-[width,height,background-color,opacity] duration-300 {}",
                                                        if is_image_hovered.get() {
                                                            "w-20 h-20 bg-white/90 text-black opacity-100"
                                                        } else {
                                                            "w-8 h-8 bg-slate-900/35 text-white/70 opacity-0"
                                                        },
                                                    )
                                                }
                                                style=move || {
                                                    let (x, y) = cursor_pos.get();
                                                    format!("left: {x:.1}px; top: {y:.1}px")
                                                }
                                            >
                                                "view project"
                                            </div>
                                        </div>
                                    </div>
                                </div>
                                <div class="mt-5 flex items-baseline justify-between gap-6 text-[10px] md:text-[11px] tracking-[0.16em] text-white/55 uppercase">
                                    {move || {
                                        current()
                                            .map(|project| {
                                                view! {
                                                    <div>
                                                        <span class="text-white/70">
                                                            {project.client.clone().unwrap_or(project.title.clone())}
                                                        </span>
                                                        <span class="text-white/35">" · "</span>
                                                        <span class="text-white/45">{project.category.clone()}</span>
                                                    </div>
                                                }
                                            })
                                    }}
                                    <div class="text-white/35">
                                        {move || format!("{:02} / {:02}", active.get() + 1, count)}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <a
                    href=Route::Projects.href()
                    class="absolute bottom-10 left-1/2 -translate-x-1/2 inline-flex items-center gap-2 group border border-white/15 px-6 py-3 rounded-full backdrop-blur-sm bg-black/40 hover:bg-white/10 transition-colors text-[11px] font-mono tracking-[0.2em] uppercase text-white/70 hover:text-white z-40"
                >
                    "Discover all projects ↗"
                </a>
                <div class="absolute bottom-32 left-1/2 -translate-x-1/2 flex gap-2 lg:hidden z-40">
                    {(0..count)
                        .map(|idx| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "h-1 rounded-full transition-all duration-300 {}",
                                        if active.get() == idx { "w-8 bg-white" } else { "w-2 bg-white/20" },
                                    )
                                }></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectSummary(project: Project) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-6">
            <span class="px-2 py-0.5 border border-white/15 bg-white/5 text-white/80 text-[10px] tracking-[0.16em] uppercase rounded-sm">
                {project.code_label()}
            </span>
            <span class="h-[1px] w-12 bg-white/10"></span>
            <span class="text-white/60 text-xs tracking-[0.14em] uppercase">
                {project.category.clone()}
            </span>
        </div>
        <h2 class="text-6xl md:text-7xl xl:text-8xl font-extrabold text-white leading-[0.9] tracking-[-0.04em] mb-8 max-w-[18ch]">
            {project.title.clone()}
            <span class="text-white/70">"."</span>
        </h2>
        <div class="border-t border-white/10 pt-6 mt-4 max-w-[54ch]">
            <div class="grid grid-cols-2 gap-6">
                <div>
                    <p class="text-[10px] text-gray-500 uppercase tracking-[0.16em] mb-2">"Client"</p>
                    <p class="text-lg text-white font-medium">
                        {project.client.clone().unwrap_or_else(|| "—".to_string())}
                    </p>
                </div>
                <div>
                    <p class="text-[10px] text-gray-500 uppercase tracking-[0.2em] mb-2 font-mono">"Role"</p>
                    <p class="text-lg text-white font-medium">
                        {project.role.clone().unwrap_or_else(|| "—".to_string())}
                    </p>
                </div>
                <div class="col-span-2 mt-4">
                    <p class="text-[10px] text-gray-500 uppercase tracking-[0.16em] mb-2">"Brief"</p>
                    <p class="text-white/55 leading-relaxed text-base md:text-lg">
                        {project.description.clone()}
                    </p>
                </div>
            </div>
        </div>
        <div class="mt-8 flex flex-wrap items-center gap-4">
            <a
                href=Route::Project(project.id.clone()).href()
                class="inline-flex items-center gap-3 group border border-white/15 px-6 py-3 rounded-full backdrop-blur-sm hover:bg-white/5 hover:translate-x-1.5 transition-all"
            >
                <span class="font-mono text-[11px] tracking-[0.2em] uppercase text-white/70 group-hover:text-white transition-colors">
                    "View Case Study ↗"
                </span>
            </a>
        </div>
    }
}
