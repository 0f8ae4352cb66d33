mod background;
mod chat;
mod contact;
mod cursor;
mod dom;
mod homepage;
mod navbar;
mod profile;
mod projects;
mod work;

use leptos::{either::*, ev, prelude::*};
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use leptos_use::{use_event_listener, use_window};

use crate::route::Route as View;
use background::FluidBackground;
use chat::ChatAssistant;
use cursor::CustomCursor;
use homepage::HomePage;
use projects::{AllProjects, ProjectDetail};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/nexus-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("NEXUS - {title}") />
        <Router>
            <main class="relative text-white min-h-screen selection:bg-sky-400/40 selection:text-white">
                <FluidBackground />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HashView />
                </Routes>
                <ChatAssistant />
                <CustomCursor />
            </main>
        </Router>
    }
}

/// Views are switched on the location hash, so the server only ever
/// renders the home view.
#[component]
fn HashView() -> impl IntoView {
    let current = use_hash_route();
    move || match current.get() {
        View::Home => EitherOf3::A(view! { <HomePage /> }),
        View::Projects => EitherOf3::B(view! { <AllProjects /> }),
        View::Project(id) => EitherOf3::C(view! { <ProjectDetail id /> }),
    }
}

fn use_hash_route() -> ReadSignal<View> {
    let (current, set_current) = signal(View::Home);
    let sync = move || {
        let next = View::from_hash(&dom::current_hash());
        if next != current.get_untracked() {
            log::debug!("view changed to {}", next.href());
            set_current.set(next);
            dom::scroll_to(0.0, false);
        }
    };
    let _ = use_event_listener(use_window(), ev::hashchange, move |_| sync());
    Effect::new(move |_| sync());
    current
}
