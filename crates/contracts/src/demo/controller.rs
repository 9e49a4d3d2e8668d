use super::kitchen::KitchenBoard;
use super::mock_updater::{MetricPolicy, MockDataUpdater};
use super::tab_switcher::{EntranceAnimation, TabSwitcher};
use crate::shared::config::LandingConfig;
use crate::shared::scheduler::{Scheduler, TaskId};
use crate::shared::surface::PageSurface;
use rand::Rng;
use std::cell::Cell;

/// Owns every moving part of the product demo and the timers they use.
///
/// `start` wires the page; `teardown` cancels the tick, pending animation
/// steps and detaches handlers, so nothing outlives the demo section.
pub struct DemoController<S: PageSurface, T: Scheduler> {
    surface: S,
    scheduler: T,
    tick_interval_ms: u32,
    switcher: TabSwitcher<S, T>,
    updater: MockDataUpdater<S>,
    kitchen: KitchenBoard<S>,
    tick_task: Cell<Option<TaskId>>,
}

impl<S: PageSurface, T: Scheduler> DemoController<S, T> {
    pub fn new(surface: S, scheduler: T, config: &LandingConfig) -> Self {
        let switcher = TabSwitcher::register(
            surface.clone(),
            scheduler.clone(),
            EntranceAnimation::from(&config.demo),
        );
        let updater = MockDataUpdater::new(surface.clone(), MetricPolicy::from(&config.metrics));
        let kitchen = KitchenBoard::new(surface.clone(), updater.clone());
        Self {
            surface,
            scheduler,
            tick_interval_ms: config.demo.tick_interval_ms,
            switcher,
            updater,
            kitchen,
            tick_task: Cell::new(None),
        }
    }

    pub fn switcher(&self) -> &TabSwitcher<S, T> {
        &self.switcher
    }

    pub fn is_running(&self) -> bool {
        self.tick_task.get().is_some()
    }

    /// Bind handlers, select the initial tab and start the mock tick.
    /// Calling it again while running is a no-op.
    pub fn start<R: Rng + 'static>(&self, mut rng: R) -> Option<String> {
        if self.is_running() {
            return self.switcher.active_key();
        }
        self.switcher.bind();
        let controls = self.kitchen.bind();
        let selected = self.switcher.init();

        let updater = self.updater.clone();
        let id = self.scheduler.every(
            self.tick_interval_ms,
            Box::new(move || {
                updater.tick(&mut rng);
            }),
        );
        self.tick_task.set(Some(id));
        log::info!(
            "demo started: screen {:?}, {} kitchen controls, tick every {}ms",
            selected,
            controls,
            self.tick_interval_ms
        );
        selected
    }

    pub fn teardown(&self) {
        if let Some(id) = self.tick_task.take() {
            self.scheduler.cancel(id);
        }
        self.switcher.cancel_pending();
        self.surface.off_all();
        log::debug!("demo torn down");
    }
}
