use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

/// A pending timer. Dropping the task clears the timer, so a task owned by a
/// component can never fire after that component is gone.
pub enum ScheduledTask {
    Once(Timeout),
    Repeating(Interval),
}

impl ScheduledTask {
    pub fn once<F>(delay_ms: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        ScheduledTask::Once(Timeout::new(delay_ms, callback))
    }

    pub fn every<F>(interval_ms: u32, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        ScheduledTask::Repeating(Interval::new(interval_ms, callback))
    }

    /// Clears the timer and frees its callback.
    pub fn cancel(self) {
        match self {
            ScheduledTask::Once(timeout) => drop(timeout),
            ScheduledTask::Repeating(interval) => drop(interval),
        }
    }
}

/// Shared holder for at most one task. Scheduling replaces (and clears) the
/// previous task; `cancel` is safe to call any number of times.
///
/// Never cancel or replace a task from inside its own callback: the timer
/// closure would be freed while it is running.
#[derive(Clone, Default)]
pub struct TaskSlot(Rc<RefCell<Option<ScheduledTask>>>);

impl TaskSlot {
    pub fn schedule(&self, task: ScheduledTask) {
        if let Some(previous) = self.0.borrow_mut().replace(task) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(task) = self.0.borrow_mut().take() {
            task.cancel();
        }
    }
}
