use crate::layout::global_context::use_app_context;
use crate::shared::scroll::scroll_to_anchor;
use contracts::landing::scroll::anchor_target;
use leptos::prelude::*;

/// In-page link that scrolls below the sticky header and closes the
/// mobile menu. `"#"` and external links keep the browser default.
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let target = anchor_target(&href).map(str::to_string);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(id) = target.as_deref() else {
            return;
        };
        if scroll_to_anchor(id, ctx.gap_px()) {
            ev.prevent_default();
            ctx.close_menu();
        }
    };

    view! {
        <a href=href class=move || class.get().unwrap_or_default() on:click=on_click>
            {label}
        </a>
    }
}
