use leptos::{ev::KeyboardEvent, html, prelude::*, task::spawn_local};

use super::dom;
use crate::chat::{ChatMessage, ChatSession, Role, FAILURE_REPLY};

/// Relays one chat turn to the hosted model. Failures come back as an
/// in-character reply rather than an error.
#[server]
pub async fn send_chat(history: Vec<ChatMessage>, message: String) -> Result<String, ServerFnError> {
    use crate::{
        chat::{generate_reply, ChatError},
        config::CHAT_CONFIG,
    };

    match generate_reply(&CHAT_CONFIG, &history, &message).await {
        Ok(reply) => Ok(reply),
        Err(e @ ChatError::MissingCredential) => {
            tracing::warn!("chat unavailable: {e}");
            Ok(e.fallback_reply().to_string())
        }
        Err(e) => {
            tracing::error!("chat request failed: {e}");
            Ok(e.fallback_reply().to_string())
        }
    }
}

#[component]
pub fn ChatAssistant() -> impl IntoView {
    let session = RwSignal::new(ChatSession::default());
    let (is_open, set_is_open) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();
    let end_ref = NodeRef::<html::Div>::new();

    let send = move || {
        let input = draft.get_untracked();
        if input.trim().is_empty() {
            return;
        }
        let Some(request) = session.try_update(|s| s.begin(&input)).flatten() else {
            return;
        };
        set_draft.set(String::new());
        if let Some(el) = input_ref.get_untracked() {
            el.set_value("");
        }
        spawn_local(async move {
            let reply = match send_chat(request.history, request.message).await {
                Ok(reply) => reply,
                Err(e) => {
                    log::error!("chat call failed: {e}");
                    FAILURE_REPLY.to_string()
                }
            };
            session.update(|s| s.finish(reply));
        });
    };

    let keydown_handler = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send();
        }
    };

    // Keep the newest message in view.
    Effect::new(move |_| {
        session.track();
        if !is_open.get() {
            return;
        }
        if let Some(el) = end_ref.get() {
            dom::scroll_into_view(&el);
        }
    });

    view! {
        <button
            class="fixed bottom-6 right-4 md:bottom-8 md:right-6 z-50 group flex items-center justify-center w-10 h-10 md:w-11 md:h-11 rounded-full border bg-white/95 text-black border-black/10 hover:border-black/20 hover:-translate-y-0.5 hover:scale-105 active:scale-95 hover:shadow-[0_14px_28px_rgba(0,0,0,0.25)] transition-all duration-200"
            aria-label="Open assistant"
            on:click=move |_| set_is_open.set(true)
        >
            <span class="text-black/80 group-hover:text-black">"✦"</span>
        </button>
        <Show when=move || is_open.get()>
            <div class="fixed bottom-24 right-6 md:right-8 w-[90vw] md:w-[400px] h-[550px] bg-black/80 backdrop-blur-xl border border-white/10 rounded-2xl shadow-2xl z-50 flex flex-col overflow-hidden ring-1 ring-white/10 animate-fade-up">
                <div class="p-4 border-b border-white/10 flex justify-between items-center bg-white/5 backdrop-blur-md">
                    <div class="flex items-center gap-3">
                        <div class="px-1.5 bg-sky-500/20 rounded-md border border-sky-400/60 text-sky-300 font-mono text-xs">
                            ">_"
                        </div>
                        <div>
                            <span class="font-mono font-bold text-sm tracking-wider block leading-none">
                                "NEXUS AI"
                            </span>
                            <span class="text-[10px] text-emerald-300 uppercase tracking-wider">
                                "Online"
                            </span>
                        </div>
                    </div>
                    <button
                        class="text-gray-400 hover:text-white hover:bg-white/10 px-2 py-1 rounded-full transition-all"
                        aria-label="Close assistant"
                        on:click=move |_| set_is_open.set(false)
                    >
                        "✕"
                    </button>
                </div>
                <div class="flex-1 overflow-y-auto p-4 space-y-6 font-mono text-sm">
                    {move || {
                        session
                            .with(|s| s.messages().to_vec())
                            .into_iter()
                            .map(|msg| view! { <Bubble msg /> })
                            .collect_view()
                    }}
                    <Show when=move || session.with(|s| s.is_waiting())>
                        <div class="flex justify-start">
                            <div class="bg-zinc-900 border border-white/10 p-4 rounded-xl rounded-bl-none">
                                <span class="text-xs text-sky-300 animate-pulse">
                                    "Computing response..."
                                </span>
                            </div>
                        </div>
                    </Show>
                    <div node_ref=end_ref />
                </div>
                <div class="p-4 border-t border-white/10 bg-black/60 backdrop-blur-lg">
                    <div class="flex items-center gap-2 bg-zinc-900/50 border border-white/10 rounded-full px-4 py-2 focus-within:border-sky-300/60 focus-within:bg-zinc-900 transition-all">
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Enter command..."
                            class="flex-1 bg-transparent border-none outline-none text-white placeholder-gray-600 font-mono text-sm"
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=keydown_handler
                        />
                        <button
                            class="px-2 py-1 text-sky-300 hover:bg-sky-300/20 rounded-full transition-all disabled:opacity-30 disabled:hover:bg-transparent"
                            aria-label="Send"
                            disabled=move || {
                                session.with(|s| s.is_waiting()) || draft.with(|d| d.trim().is_empty())
                            }
                            on:click=move |_| send()
                        >
                            "➤"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Bubble(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.role == Role::User;
    let (row, bubble) = if is_user {
        (
            "flex justify-end",
            "max-w-[85%] p-4 rounded-xl relative bg-sky-300/10 border border-sky-300/25 text-white rounded-br-none ml-8",
        )
    } else {
        (
            "flex justify-start",
            "max-w-[85%] p-4 rounded-xl relative bg-zinc-900 border border-white/10 text-gray-300 rounded-bl-none mr-8",
        )
    };
    view! {
        <div class=row>
            <div class=bubble>
                {(!is_user)
                    .then(|| {
                        view! {
                            <span class="absolute -top-3 left-0 text-[10px] text-gray-500 uppercase tracking-wider bg-black/80 px-1 border border-white/5 rounded">
                                "Nexus"
                            </span>
                        }
                    })}
                {msg.text}
            </div>
        </div>
    }
}
