use crate::layout::global_context::use_app_context;
use crate::shared::scroll::{press_effect, scroll_to_section};
use contracts::landing::scroll::CONTACT_SECTION_ID;
use leptos::html::Button;
use leptos::prelude::*;

/// Call-to-action: scrolls to the contact section with a short press effect
#[component]
pub fn CtaButton(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let node = NodeRef::<Button>::new();

    let on_click = move |_| {
        scroll_to_section(CONTACT_SECTION_ID);
        ctx.close_menu();
        if let Some(button) = node.get() {
            let press_ms = ctx.config.with_value(|c| c.forms.press_effect_ms);
            press_effect(&button, press_ms);
        }
    };

    view! {
        <button
            node_ref=node
            id=id
            type="button"
            class=move || format!("button button--primary cta-button {}", class.get().unwrap_or_default())
            on:click=on_click
        >
            {label}
        </button>
    }
}
