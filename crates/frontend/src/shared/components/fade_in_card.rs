//! FadeInCard: a Thaw [`Card`] that fades in the first time it scrolls
//! into view.
//!
//! ```ignore
//! <FadeInCard class="solution-card">
//!     <h3>"Cardápio QR"</h3>
//! </FadeInCard>
//! ```

use crate::layout::global_context::use_app_context;
use contracts::landing::scroll::{RevealOptions, FADE_IN_CLASS};
use leptos::html::Div;
use leptos::prelude::*;
use thaw::Card;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observe `target` once; `on_visible` runs when it first intersects
fn observe_once(
    target: &web_sys::Element,
    options: &RevealOptions,
    on_visible: impl Fn() + 'static,
) -> Result<(IntersectionObserver, RevealCallback), JsValue> {
    let callback: RevealCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    ));

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);
    Ok((observer, callback))
}

/// Card that receives the `fade-in` class once visible.
///
/// # Props
/// - `class`: extra classes on the wrapper (`solution-card`, `testimonial-card`, ...)
/// - `children`: card content
#[component]
pub fn FadeInCard(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let node = NodeRef::<Div>::new();
    let visible = RwSignal::new(false);
    let observer = StoredValue::new_local(None::<(IntersectionObserver, RevealCallback)>);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if observer.with_value(|o| o.is_some()) {
            return;
        }
        let options = ctx.config.with_value(|c| RevealOptions::from(&c.scroll));
        match observe_once(&el, &options, move || visible.set(true)) {
            Ok(pair) => observer.set_value(Some(pair)),
            Err(e) => {
                // No observer support: show the card right away
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        let _ = observer.try_update_value(|o| {
            if let Some((obs, _)) = o.take() {
                obs.disconnect();
            }
        });
    });

    let wrapper_class = move || {
        if visible.get() {
            format!("reveal {} {}", class, FADE_IN_CLASS)
        } else {
            format!("reveal {}", class)
        }
    };

    view! {
        <div node_ref=node class=wrapper_class>
            <Card>
                {children()}
            </Card>
        </div>
    }
}
