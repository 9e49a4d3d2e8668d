//! [`Scheduler`] backed by `gloo-timers` callbacks.
//!
//! Dropping a gloo timer clears it, so finished and cancelled timers are
//! kept in the table until no callback of theirs is on the stack, then
//! dropped on the next scheduling, cancel or callback exit.

use contracts::shared::scheduler::{Scheduler, TaskId};
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

#[allow(dead_code)]
enum Timer {
    Once(Timeout),
    Every(Interval),
}

#[derive(Default)]
struct Timers {
    next_id: u64,
    active: HashMap<TaskId, Timer>,
    finished: HashSet<TaskId>,
    running: Option<TaskId>,
}

impl Timers {
    fn next_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    fn prune(&mut self) {
        let running = self.running;
        let done: Vec<TaskId> = self
            .finished
            .iter()
            .copied()
            .filter(|id| Some(*id) != running)
            .collect();
        for id in done {
            self.finished.remove(&id);
            self.active.remove(&id);
        }
    }

    /// Mark `id` as running if it is still live
    fn enter(&mut self, id: TaskId) -> bool {
        if self.finished.contains(&id) || !self.active.contains_key(&id) {
            return false;
        }
        self.running = Some(id);
        true
    }

    fn exit(&mut self, id: TaskId, done: bool) {
        if done {
            self.finished.insert(id);
        }
        self.prune();
        self.running = None;
    }
}

#[derive(Clone, Default)]
pub struct BrowserScheduler {
    timers: Rc<RefCell<Timers>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&self) -> (TaskId, Weak<RefCell<Timers>>) {
        let mut timers = self.timers.borrow_mut();
        timers.prune();
        (timers.next_id(), Rc::downgrade(&self.timers))
    }
}

impl Scheduler for BrowserScheduler {
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        let (id, weak) = self.begin();
        let timeout = Timeout::new(delay_ms, move || {
            let Some(timers) = weak.upgrade() else {
                return;
            };
            if !timers.borrow_mut().enter(id) {
                return;
            }
            task();
            timers.borrow_mut().exit(id, true);
        });
        self.timers
            .borrow_mut()
            .active
            .insert(id, Timer::Once(timeout));
        id
    }

    fn every(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TaskId {
        let (id, weak) = self.begin();
        let interval = Interval::new(period_ms, move || {
            let Some(timers) = weak.upgrade() else {
                return;
            };
            if !timers.borrow_mut().enter(id) {
                return;
            }
            task();
            timers.borrow_mut().exit(id, false);
        });
        self.timers
            .borrow_mut()
            .active
            .insert(id, Timer::Every(interval));
        id
    }

    fn cancel(&self, id: TaskId) {
        let mut timers = self.timers.borrow_mut();
        if timers.active.contains_key(&id) {
            timers.finished.insert(id);
            timers.prune();
        }
    }

    fn is_pending(&self, id: TaskId) -> bool {
        let timers = self.timers.borrow();
        timers.active.contains_key(&id) && !timers.finished.contains(&id)
    }
}
