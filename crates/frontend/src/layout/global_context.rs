use contracts::landing::nav_menu::{MenuEvent, MenuState};
use contracts::shared::config::LandingConfig;
use leptos::prelude::*;
use web_sys::window;

/// Page-wide state shared through context: configuration and the mobile menu.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<LandingConfig>,
    pub menu: RwSignal<MenuState>,
}

impl AppGlobalContext {
    pub fn new(config: LandingConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            menu: RwSignal::new(MenuState::default()),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.with(|m| m.is_open())
    }

    /// Feed an event to the menu and keep the body scroll lock in sync
    pub fn menu_event(&self, event: MenuEvent) {
        let changed = self.menu.try_update(|m| m.apply(&event)).unwrap_or(false);
        if !changed {
            return;
        }
        let overflow = self.menu.with_untracked(|m| m.body_overflow());
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", overflow);
        }
        leptos::logging::log!("menu {:?} -> open={}", event, self.menu.get_untracked().is_open());
    }

    pub fn close_menu(&self) {
        self.menu_event(MenuEvent::LinkFollowed);
    }

    pub fn gap_px(&self) -> f64 {
        self.config.with_value(|c| c.scroll.header_gap_px)
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
