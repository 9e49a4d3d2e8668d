use crate::layout::global_context::use_app_context;
use crate::shared::components::{AnchorLink, CtaButton};
use contracts::landing::nav_menu::MenuEvent;
use leptos::html::{Button, Nav};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// (href, label) of the main navigation
const NAV_LINKS: &[(&str, &str)] = &[
    ("#solucoes", "Soluções"),
    ("#demo", "Demonstração"),
    ("#vantagens", "Vantagens"),
    ("#depoimentos", "Depoimentos"),
    ("#contato", "Contato"),
];

fn event_node(ev: &leptos::ev::Event) -> Option<web_sys::Node> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let toggle_ref = NodeRef::<Button>::new();
    let nav_ref = NodeRef::<Nav>::new();

    let is_open = move || ctx.menu.with(|m| m.is_open());

    // Outside clicks and Escape close the menu
    let click_handle = window_event_listener(leptos::ev::click, move |ev| {
        if !ctx.menu.with_untracked(|m| m.is_open()) {
            return;
        }
        let target = event_node(&ev);
        let inside = |el: Option<web_sys::Node>| match (el, target.as_ref()) {
            (Some(el), Some(t)) => el.contains(Some(t)),
            _ => false,
        };
        ctx.menu_event(MenuEvent::DocumentClick {
            inside_menu: inside(nav_ref.get_untracked().map(Into::into)),
            inside_toggle: inside(toggle_ref.get_untracked().map(Into::into)),
        });
    });
    let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        ctx.menu_event(MenuEvent::KeyDown(ev.key()));
    });
    on_cleanup(move || {
        click_handle.remove();
        key_handle.remove();
    });

    // Any link inside the menu closes it, including ones the browser handles
    let on_nav_click = move |ev: leptos::ev::MouseEvent| {
        let followed_link = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
            .is_some();
        if followed_link {
            ctx.menu_event(MenuEvent::LinkFollowed);
        }
    };

    view! {
        <header class="header">
            <div class="header__content">
                <a href="#" class="header__logo">"Cardápio Digital"</a>
                <nav
                    id="nav-menu"
                    node_ref=nav_ref
                    class="nav-menu"
                    class:active=is_open
                    aria-hidden=move || ctx.menu.with(|m| m.aria_hidden())
                    on:click=on_nav_click
                >
                    <ul class="nav-menu__list">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <li><AnchorLink href=*href label=*label class="nav-menu__link" /></li>
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="header__actions">
                    <CtaButton id="header-cta" label="Solicitar demonstração" />
                    <button
                        id="menu-toggle"
                        node_ref=toggle_ref
                        type="button"
                        class="menu-toggle"
                        class:active=is_open
                        aria-label="Abrir menu"
                        aria-controls="nav-menu"
                        aria-expanded=move || ctx.menu.with(|m| m.aria_expanded())
                        on:click=move |_| ctx.menu_event(MenuEvent::Toggle)
                    >
                        <span class="menu-toggle__bar"></span>
                        <span class="menu-toggle__bar"></span>
                        <span class="menu-toggle__bar"></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
