use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::navbar::SectionLink;
use crate::{
    projects::{Media, Project, ALL_CATEGORIES, CATALOG},
    route::Route,
};

const DETAIL_SECTIONS: [(&str, &str); 3] = [
    ("Overview", "overview"),
    ("Details", "details"),
    ("Gallery", "gallery"),
];

#[component]
pub fn AllProjects() -> impl IntoView {
    let categories = CATALOG.categories();
    let (active_category, set_active_category) = signal(ALL_CATEGORIES.to_string());
    let filtered = move || CATALOG.filter(&active_category.get());

    view! {
        <Title text="All Projects" />
        <div class="relative z-20 min-h-screen">
            <header class="relative min-h-[52vh] md:min-h-[60vh] flex">
                <div class="absolute top-8 left-6 md:left-10 lg:left-12 right-6 md:right-10 lg:right-12 flex items-center justify-between">
                    <a
                        href=Route::Home.href()
                        class="inline-flex items-baseline gap-3 text-[10px] md:text-[11px] tracking-[0.28em] uppercase text-white/70 hover:text-white transition-colors"
                    >
                        <span class="text-white/85">"nexus"</span>
                        <span class="text-white/45">"tokyo"</span>
                    </a>
                </div>
                <div class="w-full max-w-[1400px] mx-auto px-6 md:px-10 lg:px-12 pt-24 md:pt-28 pb-14 md:pb-16 flex items-end">
                    <div class="w-full grid grid-cols-12 gap-x-10 gap-y-10 items-end">
                        <h1 class="col-span-12 lg:col-span-8 text-white leading-[0.92] tracking-tight animate-fade-up">
                            <span class="block font-light text-[clamp(44px,7.2vw,116px)]">"We choose a"</span>
                            <span class="block font-light text-[clamp(44px,7.2vw,116px)]">"different →"</span>
                            <span class="block font-light text-[clamp(44px,7.2vw,116px)]">"starting point"</span>
                        </h1>
                        <p class="col-span-12 lg:col-span-4 lg:justify-self-end max-w-sm text-white/65 text-[12px] md:text-sm leading-relaxed">
                            "Every project is a chance to try something new. Look at something with a fresh perspective. Do something for the first time."
                        </p>
                    </div>
                </div>
            </header>
            <section class="relative bg-[#F7F6F2] text-black">
                <div class="max-w-[1400px] mx-auto px-6 md:px-10 lg:px-12 py-16 md:py-20">
                    <div class="grid grid-cols-12 gap-x-10 gap-y-12">
                        <aside class="col-span-12 md:col-span-3 lg:col-span-2">
                            <nav class="md:sticky md:top-24 space-y-2">
                                {categories
                                    .into_iter()
                                    .map(|category| {
                                        let label = category.clone();
                                        let is_active = {
                                            let category = category.clone();
                                            move || active_category.get() == category
                                        };
                                        view! {
                                            <button
                                                type="button"
                                                on:click=move |_| set_active_category.set(category.clone())
                                                class=move || {
                                                    format!(
                                                        "group relative w-full text-left pl-5 text-[10px] tracking-[0.28em] uppercase transition-colors {}",
                                                        if is_active() {
                                                            "text-black"
                                                        } else {
                                                            "text-black/45 hover:text-black/70"
                                                        },
                                                    )
                                                }
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        </aside>
                        <div class="col-span-12 md:col-span-9 lg:col-span-10">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-16">
                                <For
                                    each=filtered
                                    key=|project| project.id.clone()
                                    children=|project| view! { <ProjectCard project /> }
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let alt = match &project.client {
        Some(client) => format!("{client} · {}", project.title),
        None => project.title.clone(),
    };
    view! {
        <a
            href=Route::Project(project.id.clone()).href()
            class="group block hover:-translate-y-1 transition-transform duration-300"
        >
            <div class="relative overflow-hidden bg-white">
                <div class="relative pt-[125%]">
                    <img
                        src=project.thumbnail.clone()
                        alt=alt
                        class="absolute inset-0 w-full h-full object-cover"
                        loading="lazy"
                    />
                </div>
            </div>
            <div class="mt-4 h-px w-full bg-black/15" />
            <div class="mt-4 flex items-start justify-between gap-6">
                <div>
                    <div class="text-[10px] tracking-[0.24em] uppercase text-black/45">
                        {project.category.clone()}
                    </div>
                    <div class="mt-2 text-xl md:text-2xl font-light tracking-tight">
                        {project.title.clone()}
                    </div>
                </div>
                <div class="text-[10px] tracking-[0.24em] uppercase text-black/45 group-hover:text-black/80 transition-colors">
                    {project.year.clone()} " ↗"
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn ProjectDetail(id: String) -> impl IntoView {
    match CATALOG.get(&id) {
        Ok(project) => Either::Left(view! { <ProjectPage project=project.clone() /> }),
        Err(e) => {
            log::info!("{e}");
            Either::Right(view! { <ProjectNotFound /> })
        }
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    view! {
        <Title text="Project not found" />
        <div class="relative z-20 min-h-screen bg-black text-white flex items-center justify-center px-6">
            <div class="max-w-xl text-center">
                <div class="text-[11px] tracking-[0.28em] uppercase text-white/55 mb-4">"Project"</div>
                <h1 class="text-3xl md:text-4xl font-light tracking-tight">"Project not found"</h1>
                <p class="mt-4 text-white/60 text-sm md:text-base">
                    "Please pick one again from the project list."
                </p>
                <a
                    href=Route::Projects.href()
                    class="mt-8 inline-flex items-center gap-2 border border-white/15 px-6 py-3 rounded-full text-[11px] tracking-[0.2em] uppercase text-white/70 hover:text-white hover:border-white/30 transition-colors"
                >
                    "← Back to all projects"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ProjectPage(project: Project) -> impl IntoView {
    let gallery = project.gallery();
    let title = project.title.clone();
    let details = [
        ("Client", project.client.clone().unwrap_or_else(|| "—".to_string())),
        ("Role", project.role.clone().unwrap_or_else(|| "—".to_string())),
        ("Year", project.year.clone()),
        ("Category", project.category.clone()),
        ("Group", project.group.as_str().to_string()),
    ];

    view! {
        <Title text=project.title.clone() />
        <div class="relative z-20 min-h-screen">
            <header class="relative min-h-[46vh] md:min-h-[54vh] flex">
                <div class="absolute top-8 left-6 md:left-10 lg:left-12 right-6 md:right-10 lg:right-12 flex items-center justify-between">
                    <a
                        href=Route::Projects.href()
                        class="inline-flex items-center gap-3 text-[10px] md:text-[11px] tracking-[0.28em] uppercase text-white/70 hover:text-white transition-colors"
                    >
                        "← " <span class="text-white/85">"all projects"</span>
                    </a>
                    <div class="text-[10px] md:text-[11px] tracking-[0.28em] uppercase text-white/45">
                        {project.group.as_str()}
                    </div>
                </div>
                <div class="w-full max-w-[1400px] mx-auto px-6 md:px-10 lg:px-12 pt-24 md:pt-28 pb-14 md:pb-16 flex items-end">
                    <div class="w-full grid grid-cols-12 gap-x-10 gap-y-10 items-end">
                        <h1 class="col-span-12 lg:col-span-8 text-white leading-[0.92] tracking-tight animate-fade-up">
                            <span class="block font-light text-[clamp(44px,6.8vw,110px)]">
                                {project.title.clone()}
                            </span>
                        </h1>
                        <div class="col-span-12 lg:col-span-4 lg:justify-self-end max-w-sm text-white/65 text-[12px] md:text-sm leading-relaxed space-y-4">
                            <div class="text-[10px] tracking-[0.28em] uppercase text-white/45">
                                {project.category.clone()}
                            </div>
                            <div>{project.description.clone()}</div>
                        </div>
                    </div>
                </div>
            </header>
            <section class="relative bg-[#F7F6F2] text-black">
                <div class="max-w-[1400px] mx-auto px-6 md:px-10 lg:px-12 py-16 md:py-20">
                    <div class="grid grid-cols-12 gap-x-10 gap-y-12">
                        <aside class="col-span-12 md:col-span-3 lg:col-span-2">
                            <nav class="md:sticky md:top-24 space-y-2">
                                {DETAIL_SECTIONS
                                    .into_iter()
                                    .map(|(label, id)| {
                                        view! {
                                            <SectionLink
                                                id
                                                link_class="block relative w-full text-left pl-5 text-[10px] tracking-[0.28em] uppercase text-black/45 hover:text-black/80 transition-colors"
                                            >
                                                {label}
                                            </SectionLink>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        </aside>
                        <div class="col-span-12 md:col-span-9 lg:col-span-10 space-y-20">
                            <section id="overview" class="scroll-mt-24">
                                <div class="relative overflow-hidden bg-white">
                                    <div class="relative pt-[56.25%]">
                                        <img
                                            src=project.thumbnail.clone()
                                            alt=project.title.clone()
                                            class="absolute inset-0 w-full h-full object-cover"
                                            loading="lazy"
                                        />
                                    </div>
                                </div>
                                <div class="mt-8 grid grid-cols-1 lg:grid-cols-2 gap-10">
                                    <div>
                                        <div class="text-[10px] tracking-[0.28em] uppercase text-black/45">
                                            "Overview"
                                        </div>
                                        <h2 class="mt-4 text-3xl md:text-4xl font-light tracking-tight text-black">
                                            {project.title.clone()}
                                        </h2>
                                    </div>
                                    <div class="text-black/65 text-sm md:text-base leading-relaxed">
                                        {project.description.clone()}
                                    </div>
                                </div>
                            </section>
                            <section id="details" class="scroll-mt-24">
                                <div class="text-[10px] tracking-[0.28em] uppercase text-black/45">
                                    "Details"
                                </div>
                                <div class="mt-6 grid grid-cols-1 md:grid-cols-3 gap-8">
                                    {details
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <div class="border-t border-black/10 pt-4">
                                                    <div class="text-[10px] tracking-[0.24em] uppercase text-black/45">
                                                        {label}
                                                    </div>
                                                    <div class="mt-3 text-base md:text-lg tracking-tight">
                                                        {value}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                            <section id="gallery" class="scroll-mt-24">
                                <div class="text-[10px] tracking-[0.28em] uppercase text-black/45">
                                    "Gallery"
                                </div>
                                <div class="mt-6 grid grid-cols-1 md:grid-cols-2 gap-8">
                                    {gallery
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, media)| {
                                            let label = media
                                                .name
                                                .clone()
                                                .unwrap_or_else(|| format!("{title} {}", index + 1));
                                            view! { <GalleryItem media label /> }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn GalleryItem(media: Media, label: String) -> impl IntoView {
    let frame = if media.is_video() {
        Either::Left(view! {
            <video
                class="absolute inset-0 w-full h-full object-cover"
                controls=true
                poster=media.poster.clone()
            >
                <source src=media.src.clone() />
            </video>
        })
    } else {
        Either::Right(view! {
            <img
                src=media.src.clone()
                alt=label.clone()
                class="absolute inset-0 w-full h-full object-cover"
                loading="lazy"
            />
        })
    };
    view! {
        <div class="bg-white">
            <div class="relative w-full pt-[62%]">{frame}</div>
            <div class="px-4 py-3 text-[11px] tracking-[0.16em] uppercase text-black/50">
                {label}
            </div>
        </div>
    }
}
