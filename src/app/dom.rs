use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::motion::{FrameGate, Geometry};

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

pub fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default()
}

pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Position of `el` in document coordinates.
pub fn geometry(el: &web_sys::Element) -> Geometry {
    let rect = el.get_bounding_client_rect();
    Geometry {
        top: rect.top() + scroll_y(),
        height: rect.height(),
    }
}

pub fn scroll_to(top: f64, smooth: bool) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_into_view(el: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth scroll to an in-page section. The contact panel is fixed behind
/// the content and only shows at the very end of the document.
pub fn scroll_to_anchor(id: &str) {
    if id == "contact" {
        scroll_to(document_height() - viewport_height(), true);
    } else if let Some(el) = document().get_element_by_id(id) {
        scroll_to(geometry(&el).top, true);
    } else {
        log::warn!("no section with id {id}");
    }
}

/// Runs `measure` once on mount and then at most once per animation frame
/// while the window scrolls or resizes.
pub fn use_scroll_measure<F>(measure: F)
where
    F: Fn() + Copy + 'static,
{
    let gate = StoredValue::new(FrameGate::<AnimationFrameRequestHandle>::default());
    let run = move || {
        gate.update_value(|g| g.fire());
        measure();
    };
    let schedule = move || {
        let scheduled =
            gate.try_update_value(|g| g.request(|| request_animation_frame_with_handle(run)));
        if let Some(Err(e)) = scheduled {
            log::warn!("couldn't schedule scroll measurement: {e:?}");
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| schedule());
    let _ = use_event_listener(use_window(), ev::resize, move |_| schedule());
    Effect::new(move |_| measure());

    on_cleanup(move || {
        if let Some(Some(handle)) = gate.try_update_value(|g| g.cancel()) {
            handle.cancel();
        }
    });
}
