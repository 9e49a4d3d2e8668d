//! Demo tab switcher: one active tab, one visible screen.
//!
//! Tabs are `.demo-tab` elements carrying a `data-tab` key; the screen of a
//! key is the element with id `"{key}-screen"`. Visibility is expressed with
//! the `active` class on both tabs and screens.

use crate::shared::config::DemoConfig;
use crate::shared::scheduler::{Scheduler, TaskId};
use crate::shared::surface::PageSurface;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const TAB_SELECTOR: &str = ".demo-tab";
pub const SCREEN_SELECTOR: &str = ".demo-screen";
pub const TAB_KEY_ATTR: &str = "data-tab";
pub const ACTIVE_CLASS: &str = "active";

pub fn screen_id(key: &str) -> String {
    format!("{}-screen", key)
}

/// Timing of the entrance animation replayed on every selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceAnimation {
    pub stagger_ms: u32,
    pub offset_px: u32,
    pub duration_ms: u32,
}

impl From<&DemoConfig> for EntranceAnimation {
    fn from(config: &DemoConfig) -> Self {
        Self {
            stagger_ms: config.stagger_ms,
            offset_px: config.entrance_offset_px,
            duration_ms: config.entrance_duration_ms,
        }
    }
}

struct Inner<S: PageSurface, T: Scheduler> {
    surface: S,
    scheduler: T,
    animation: EntranceAnimation,
    tabs: Vec<(String, S::Element)>,
    screens: Vec<S::Element>,
    pending: RefCell<Vec<TaskId>>,
}

pub struct TabSwitcher<S: PageSurface, T: Scheduler> {
    inner: Rc<Inner<S, T>>,
}

impl<S: PageSurface, T: Scheduler> Clone for TabSwitcher<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: PageSurface, T: Scheduler> TabSwitcher<S, T> {
    /// Collect the tabs and screens currently present on the page
    pub fn register(surface: S, scheduler: T, animation: EntranceAnimation) -> Self {
        let tabs: Vec<(String, S::Element)> = surface
            .query_all(TAB_SELECTOR)
            .into_iter()
            .filter_map(|tab| match surface.attr(&tab, TAB_KEY_ATTR) {
                Some(key) if !key.is_empty() => Some((key, tab)),
                _ => {
                    log::debug!("demo tab without {} ignored", TAB_KEY_ATTR);
                    None
                }
            })
            .collect();
        let screens = surface.query_all(SCREEN_SELECTOR);
        log::debug!(
            "tab switcher registered {} tabs, {} screens",
            tabs.len(),
            screens.len()
        );

        Self {
            inner: Rc::new(Inner {
                surface,
                scheduler,
                animation,
                tabs,
                screens,
                pending: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.tabs.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.tabs.is_empty()
    }

    /// Route clicks on every registered tab to [`Self::select_tab`]
    pub fn bind(&self) {
        for (key, tab) in &self.inner.tabs {
            let weak: Weak<Inner<S, T>> = Rc::downgrade(&self.inner);
            let key = key.clone();
            self.inner.surface.on(
                tab,
                "click",
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        TabSwitcher { inner }.select_tab(&key);
                    }
                }),
            );
        }
    }

    /// Select the single pre-marked tab, or the first one.
    /// Returns the selected key; `None` when nothing is registered.
    pub fn init(&self) -> Option<String> {
        let inner = &self.inner;
        let marked: Vec<&String> = inner
            .tabs
            .iter()
            .filter(|(_, tab)| inner.surface.has_class(tab, ACTIVE_CLASS))
            .map(|(key, _)| key)
            .collect();

        let key = match marked.as_slice() {
            [only] => (*only).clone(),
            _ => inner.tabs.first()?.0.clone(),
        };
        self.select_tab(&key);
        Some(key)
    }

    /// Make `key` the only active tab and reveal its screen.
    /// Returns whether a screen was revealed.
    pub fn select_tab(&self, key: &str) -> bool {
        let inner = &self.inner;
        let surface = &inner.surface;

        for (_, tab) in &inner.tabs {
            surface.remove_class(tab, ACTIVE_CLASS);
        }
        for screen in &inner.screens {
            surface.remove_class(screen, ACTIVE_CLASS);
        }

        if let Some((_, tab)) = inner.tabs.iter().find(|(k, _)| k == key) {
            surface.add_class(tab, ACTIVE_CLASS);
        }

        let id = screen_id(key);
        let Some(screen) = inner
            .screens
            .iter()
            .find(|screen| surface.attr(screen, "id").as_deref() == Some(id.as_str()))
        else {
            log::warn!("demo screen #{} not registered", id);
            return false;
        };
        surface.add_class(screen, ACTIVE_CLASS);
        self.animate_entrance(screen);
        true
    }

    /// Key of the tab currently carrying the active class
    pub fn active_key(&self) -> Option<String> {
        self.inner
            .tabs
            .iter()
            .find(|(_, tab)| self.inner.surface.has_class(tab, ACTIVE_CLASS))
            .map(|(key, _)| key.clone())
    }

    /// Cancel animation steps that have not run yet
    pub fn cancel_pending(&self) {
        let ids: Vec<TaskId> = self.inner.pending.borrow_mut().drain(..).collect();
        for id in ids {
            self.inner.scheduler.cancel(id);
        }
    }

    pub fn pending_steps(&self) -> usize {
        let scheduler = &self.inner.scheduler;
        self.inner
            .pending
            .borrow()
            .iter()
            .filter(|id| scheduler.is_pending(**id))
            .count()
    }

    fn animate_entrance(&self, screen: &S::Element) {
        let inner = &self.inner;
        let animation = inner.animation;
        let offset = format!("translateY({}px)", animation.offset_px);
        let transition = format!(
            "opacity {ms}ms ease, transform {ms}ms ease",
            ms = animation.duration_ms
        );

        let mut pending = inner.pending.borrow_mut();
        pending.retain(|id| inner.scheduler.is_pending(*id));

        for (index, child) in inner.surface.children(screen).into_iter().enumerate() {
            inner.surface.set_style(&child, "transition", "none");
            inner.surface.set_style(&child, "opacity", "0");
            inner.surface.set_style(&child, "transform", &offset);

            let surface = inner.surface.clone();
            let transition = transition.clone();
            let delay = animation.stagger_ms.saturating_mul(index as u32);
            let id = inner.scheduler.once(
                delay,
                Box::new(move || {
                    surface.set_style(&child, "transition", &transition);
                    surface.set_style(&child, "opacity", "1");
                    surface.set_style(&child, "transform", "translateY(0)");
                }),
            );
            pending.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{ManualScheduler, MockSurface, NodeRef};

    const ANIMATION: EntranceAnimation = EntranceAnimation {
        stagger_ms: 100,
        offset_px: 20,
        duration_ms: 500,
    };

    struct Page {
        surface: MockSurface,
        clock: ManualScheduler,
        tabs: Vec<NodeRef>,
        screens: Vec<NodeRef>,
    }

    fn page(keys: &[&str], pre_active: &[&str]) -> Page {
        let surface = MockSurface::new();
        let root = surface.root();
        let nav = surface.append(root, "nav");
        let mut tabs = Vec::new();
        let mut screens = Vec::new();
        for key in keys {
            let descriptor = if pre_active.contains(key) {
                "button.demo-tab.active"
            } else {
                "button.demo-tab"
            };
            let tab = surface.append(nav, descriptor);
            surface.set_attr(&tab, TAB_KEY_ATTR, key);
            tabs.push(tab);

            let screen = surface.append(root, &format!("section#{}.demo-screen", screen_id(key)));
            surface.append(screen, "h3");
            surface.append(screen, ".card");
            surface.append(screen, ".card");
            screens.push(screen);
        }
        Page {
            surface,
            clock: ManualScheduler::new(),
            tabs,
            screens,
        }
    }

    impl Page {
        fn switcher(&self) -> TabSwitcher<MockSurface, ManualScheduler> {
            TabSwitcher::register(self.surface.clone(), self.clock.clone(), ANIMATION)
        }

        fn active_tabs(&self) -> Vec<usize> {
            (0..self.tabs.len())
                .filter(|i| self.surface.has_class(&self.tabs[*i], ACTIVE_CLASS))
                .collect()
        }

        fn visible_screens(&self) -> Vec<usize> {
            (0..self.screens.len())
                .filter(|i| self.surface.has_class(&self.screens[*i], ACTIVE_CLASS))
                .collect()
        }
    }

    #[test]
    fn test_init_selects_first_tab() {
        let page = page(&["a", "b", "c"], &[]);
        let switcher = page.switcher();

        assert_eq!(switcher.init().as_deref(), Some("a"));
        assert_eq!(page.active_tabs(), vec![0]);
        assert_eq!(page.visible_screens(), vec![0]);

        assert!(switcher.select_tab("b"));
        assert_eq!(page.active_tabs(), vec![1]);
        assert_eq!(page.visible_screens(), vec![1]);
    }

    #[test]
    fn test_init_honours_single_pre_marked_tab() {
        let page = page(&["a", "b", "c"], &["c"]);
        assert_eq!(page.switcher().init().as_deref(), Some("c"));
        assert_eq!(page.visible_screens(), vec![2]);
    }

    #[test]
    fn test_init_with_several_pre_marked_falls_back_to_first() {
        let page = page(&["a", "b", "c"], &["b", "c"]);
        assert_eq!(page.switcher().init().as_deref(), Some("a"));
        assert_eq!(page.active_tabs(), vec![0]);
    }

    #[test]
    fn test_empty_page_is_inert() {
        let page = page(&[], &[]);
        let switcher = page.switcher();
        assert!(switcher.is_empty());
        assert_eq!(switcher.init(), None);
    }

    #[test]
    fn test_every_key_leaves_exactly_one_active() {
        let page = page(&["dashboard", "kitchen", "campaigns"], &[]);
        let switcher = page.switcher();
        for (i, key) in switcher.keys().iter().enumerate() {
            switcher.select_tab(key);
            assert_eq!(page.active_tabs(), vec![i]);
            assert_eq!(page.visible_screens(), vec![i]);
            assert_eq!(switcher.active_key().as_deref(), Some(key.as_str()));
        }
    }

    #[test]
    fn test_unknown_key_hides_everything() {
        let page = page(&["a", "b"], &[]);
        let switcher = page.switcher();
        switcher.init();

        assert!(!switcher.select_tab("missing"));
        assert!(page.active_tabs().is_empty());
        assert!(page.visible_screens().is_empty());
    }

    #[test]
    fn test_unregistered_screen_is_never_revealed() {
        let page = page(&["a", "b"], &[]);
        let stray = page.surface.append(page.surface.root(), "section#stray-screen");
        let switcher = page.switcher();
        switcher.init();

        assert!(!switcher.select_tab("stray"));
        assert!(!page.surface.has_class(&stray, ACTIVE_CLASS));
        assert!(page.visible_screens().is_empty());

        switcher.select_tab("b");
        assert_eq!(page.visible_screens(), vec![1]);
        assert!(!page.surface.has_class(&stray, ACTIVE_CLASS));
    }

    #[test]
    fn test_select_is_idempotent_and_replays_animation() {
        let page = page(&["a", "b"], &[]);
        let switcher = page.switcher();
        switcher.select_tab("b");
        page.clock.advance(1_000);

        let card = page.surface.children(&page.screens[1])[1];
        assert_eq!(page.surface.style(&card, "opacity").as_deref(), Some("1"));

        switcher.select_tab("b");
        assert_eq!(page.active_tabs(), vec![1]);
        assert_eq!(page.visible_screens(), vec![1]);
        assert_eq!(page.surface.style(&card, "opacity").as_deref(), Some("0"));
        assert_eq!(switcher.pending_steps(), 3);
    }

    #[test]
    fn test_entrance_is_staggered() {
        let page = page(&["a"], &[]);
        let switcher = page.switcher();
        switcher.select_tab("a");
        let children = page.surface.children(&page.screens[0]);

        for child in &children {
            assert_eq!(page.surface.style(child, "transform").as_deref(), Some("translateY(20px)"));
        }
        page.clock.advance(0);
        assert_eq!(page.surface.style(&children[0], "opacity").as_deref(), Some("1"));
        assert_eq!(page.surface.style(&children[1], "opacity").as_deref(), Some("0"));
        page.clock.advance(100);
        assert_eq!(page.surface.style(&children[1], "opacity").as_deref(), Some("1"));
        assert_eq!(page.surface.style(&children[2], "opacity").as_deref(), Some("0"));
        page.clock.advance(100);
        assert_eq!(page.surface.style(&children[2], "transform").as_deref(), Some("translateY(0)"));
    }

    #[test]
    fn test_click_routes_to_select() {
        let page = page(&["a", "b", "c"], &[]);
        let switcher = page.switcher();
        switcher.bind();
        switcher.init();

        page.surface.click(&page.tabs[2]);
        assert_eq!(page.active_tabs(), vec![2]);
        assert_eq!(page.visible_screens(), vec![2]);
    }

    #[test]
    fn test_cancel_pending_stops_animation() {
        let page = page(&["a"], &[]);
        let switcher = page.switcher();
        switcher.select_tab("a");
        switcher.cancel_pending();
        page.clock.advance(1_000);

        let last = *page.surface.children(&page.screens[0]).last().unwrap();
        assert_eq!(page.surface.style(&last, "opacity").as_deref(), Some("0"));
        assert_eq!(page.clock.pending_count(), 0);
    }
}
