use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::motion::{Spring, SpringConfig};

/// Parked off screen until the first mouse move.
const HIDDEN: f64 = -100.0;
/// Half the ring's width, so the ring centres on the pointer.
const RING_OFFSET: f64 = 16.0;
/// Puts the dot in the middle of the ring.
const DOT_OFFSET: f64 = 12.0;

fn over_control(ev: &ev::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a, button").ok().flatten())
        .is_some()
}

/// Ring that trails the pointer on a spring, with a dot pinned to it.
/// The ring grows over links and buttons. Hidden on small screens.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let ring = StoredValue::new((
        Spring::new(SpringConfig::CURSOR, HIDDEN),
        Spring::new(SpringConfig::CURSOR, HIDDEN),
    ));
    let (ring_pos, set_ring_pos) = signal((HIDDEN, HIDDEN));
    let (dot_pos, set_dot_pos) = signal((HIDDEN, HIDDEN));
    let (is_hovering, set_is_hovering) = signal(false);

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let x = ev.client_x() as f64 - RING_OFFSET;
        let y = ev.client_y() as f64 - RING_OFFSET;
        set_dot_pos.set((x, y));
        ring.update_value(|(rx, ry)| {
            rx.set_target(x);
            ry.set_target(y);
        });
    });

    let _ = use_event_listener(use_window(), ev::mouseover, move |ev| {
        let hovering = over_control(&ev);
        if hovering != is_hovering.get_untracked() {
            set_is_hovering.set(hovering);
        }
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let dt = args.delta / 1000.0;
        let pos = ring.try_update_value(|(x, y)| {
            x.step(dt);
            y.step(dt);
            (x.value(), y.value())
        });
        if let Some(pos) = pos.filter(|pos| *pos != ring_pos.get_untracked()) {
            set_ring_pos.set(pos);
        }
    });

    let ring_style = move || {
        let (x, y) = ring_pos.get();
        let (scale, fill) = if is_hovering.get() {
            (1.5, "rgba(56, 189, 248, 0.14)")
        } else {
            (1.0, "transparent")
        };
        format!("translate: {x}px {y}px; scale: {scale}; background-color: {fill};")
    };
    let dot_style = move || {
        let (x, y) = dot_pos.get();
        format!("translate: {}px {}px;", x + DOT_OFFSET, y + DOT_OFFSET)
    };

    view! {
        <div
            class="fixed top-0 left-0 w-8 h-8 rounded-full border border-sky-300/80 pointer-events-none z-[100] hidden md:block mix-blend-difference transition-[scale,background-color] duration-200"
            style=ring_style
        />
        <div
            class="fixed top-0 left-0 w-2 h-2 bg-white rounded-full pointer-events-none z-[100] hidden md:block mix-blend-difference"
            style=dot_style
        />
    }
}
