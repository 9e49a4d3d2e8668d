//! Timer capability used by the demo components.
//!
//! Every task gets a [`TaskId`] so the owner can cancel it on teardown.
//! Cancelling a finished or unknown task is a no-op.

/// Handle of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

pub trait Scheduler: Clone + 'static {
    /// Run `task` once after `delay_ms`
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId;

    /// Run `task` every `period_ms` until cancelled
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskId;

    fn cancel(&self, id: TaskId);

    /// Whether `id` is still waiting to fire (repeating tasks stay pending)
    fn is_pending(&self, id: TaskId) -> bool;
}
