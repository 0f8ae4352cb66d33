use leptos::prelude::*;

struct Experience {
    role: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const EXPERIENCES: [Experience; 3] = [
    Experience {
        role: "Senior Product Designer",
        company: "GLOBAL TECH INC.",
        period: "2022 — PRESENT",
        description: "Architecting the design system 'Atlas' used by 500+ engineers. Spearheaded the UI overhaul for the flagship AI analytics platform.",
        tags: &["Design Systems", "React", "Strategy"],
    },
    Experience {
        role: "Lead UI Engineer",
        company: "FUTURE LABS",
        period: "2019 — 2022",
        description: "Hybrid role bridging design and dev. Created award-winning WebGL storytelling experiences for major automotive brands.",
        tags: &["WebGL", "GLSL", "Creative Dev"],
    },
    Experience {
        role: "Visual Developer",
        company: "STUDIO NEON",
        period: "2017 — 2019",
        description: "Executed high-fidelity motion prototypes and interactive installations for fashion week runways globally.",
        tags: &["Motion", "Three.js", "Prototyping"],
    },
];

const TECH_STACK: [&str; 9] = [
    "React / Next.js",
    "TypeScript",
    "Tailwind CSS",
    "WebGL / Three.js",
    "Figma Expert",
    "Node.js",
    "Python",
    "AI Prompting",
    "Blender",
];

#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <section id="profile" class="relative py-24 xl:py-32 px-6 md:px-12 w-full">
            <div class="absolute top-0 left-6 right-6 h-[1px] bg-white/10 hidden md:block"></div>
            <div class="max-w-[1600px] w-full mx-auto relative z-10">
                <Identity />
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-x-12 lg:gap-x-24 gap-y-16 items-start">
                    <Timeline />
                    <Skills />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Identity() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-12 gap-x-12 gap-y-16 mb-20 lg:mb-32">
            <div class="lg:col-span-8 relative">
                <div class="flex items-center gap-3 mb-6 font-mono text-xs tracking-[0.2em] text-emerald-300">
                    <div class="w-2 h-2 bg-emerald-300 rounded-full shadow-[0_0_8px_rgba(52,211,153,0.8)] animate-pulse"></div>
                    "PROFILE"
                </div>
                <h2 class="text-[13vw] lg:text-[11vw] font-extrabold leading-[0.8] tracking-tighter text-white select-none">
                    <span class="block drop-shadow-2xl">"MA"</span>
                    <span
                        class="block text-transparent opacity-70"
                        style="-webkit-text-stroke: 1px rgba(255,255,255,0.8)"
                    >
                        "BIN"
                    </span>
                </h2>
            </div>
            <div class="lg:col-span-4 flex flex-col justify-end pb-4">
                <div class="border-t border-white/20 pt-6">
                    <h3 class="text-2xl font-light text-white leading-tight mb-6">
                        <span class="text-emerald-300 font-bold">"Digital Alchemist"</span>
                        " merging technical precision with aesthetic rebellion."
                    </h3>
                    <div class="flex flex-col gap-2 font-mono text-xs text-gray-400 tracking-wider">
                        <div class="flex justify-between border-b border-white/10 pb-2">
                            <span>"ROLE"</span>
                            <span class="text-white">"FULL STACK CREATIVE"</span>
                        </div>
                        <div class="flex justify-between border-b border-white/10 pb-2">
                            <span>"BASE"</span>
                            <span class="text-white">"TOKYO, JP"</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <div class="lg:col-span-7 relative">
            <div class="flex items-center gap-2 mb-12 text-white/40">
                <span class="font-mono text-xs tracking-[0.18em] uppercase">"Experience"</span>
                <div class="flex-1 h-[1px] bg-white/10"></div>
            </div>
            <div class="space-y-8">
                {EXPERIENCES
                    .iter()
                    .map(|exp| {
                        view! {
                            <div class="group relative rounded-2xl border border-white/10 bg-black/60 backdrop-blur-sm p-6">
                                <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 mb-4">
                                    <h4 class="text-2xl font-semibold text-white group-hover:text-sky-300 transition-colors duration-300 tracking-tight">
                                        {exp.company}
                                    </h4>
                                    <div class="self-start md:self-auto px-3 py-1 bg-white/5 rounded-full border border-white/10 text-[10px] text-gray-400 whitespace-nowrap">
                                        {exp.period}
                                    </div>
                                </div>
                                <h5 class="text-lg text-sky-300 mb-3">{exp.role}</h5>
                                <p class="text-gray-400 text-sm leading-relaxed mb-5 group-hover:text-gray-200 transition-colors max-w-2xl">
                                    {exp.description}
                                </p>
                                <div class="flex flex-wrap gap-2 pt-5 border-t border-white/5">
                                    {exp
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! {
                                                <div class="text-[10px] text-gray-500 uppercase group-hover:text-sky-300/80 transition-colors px-2 py-1">
                                                    {*tag}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <div class="lg:col-span-5 relative">
            <div class="sticky top-32">
                <div class="flex items-center gap-2 mb-12 text-white/40">
                    <span class="font-mono text-xs tracking-[0.18em] uppercase">"Tools & Skills"</span>
                    <div class="flex-1 h-[1px] bg-white/10"></div>
                </div>
                <div class="grid grid-cols-2 gap-px bg-white/10 border border-white/10 rounded-2xl overflow-hidden">
                    {TECH_STACK
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <div class="bg-black/80 hover:bg-slate-900/95 backdrop-blur-sm p-4 group flex flex-col justify-between min-h-[100px]">
                                    <span class="text-[9px] font-mono text-gray-600 group-hover:text-emerald-300 transition-colors">
                                        {format!("{:02}", i + 1)}
                                    </span>
                                    <div class="text-sm text-gray-300 group-hover:text-white transition-colors font-bold mt-4">
                                        {*tech}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-12 rounded-2xl border border-white/10 bg-black/40 backdrop-blur-sm p-6">
                    <div class="text-xs tracking-[0.14em] uppercase text-sky-300 mb-3">
                        "Active research"
                    </div>
                    <div class="text-lg font-semibold text-white mb-2">"WebGPU & AI Agents"</div>
                    <p class="text-xs text-gray-400 leading-relaxed">
                        "Exploring neural interface patterns" <br /> "Optimizing render pipelines"
                    </p>
                </div>
            </div>
        </div>
    }
}
