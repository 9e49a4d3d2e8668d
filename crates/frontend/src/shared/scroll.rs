//! Smooth scrolling and the call-to-action press effect.

use contracts::landing::scroll::anchor_scroll_top;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

const HEADER_SELECTOR: &str = ".header";

/// Smoothly bring section `id` into view
pub fn scroll_to_section(id: &str) {
    let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("section #{} not found", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll so that element `id` sits `gap` pixels below the sticky header.
/// Returns `false` when the target does not exist.
pub fn scroll_to_anchor(id: &str, gap: f64) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let header_height = document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(target.offset_top() as f64, header_height, gap));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Briefly shrink a button to acknowledge the click
pub fn press_effect(element: &HtmlElement, duration_ms: u32) {
    let _ = element.style().set_property("transform", "scale(0.95)");
    let element = element.clone();
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        let _ = element.style().remove_property("transform");
    });
}
