//! Scheduler port — one-shot delayed tasks.

use std::time::Duration;

/// Runs a task once after a delay on the current (UI) thread.
pub trait Scheduler {
    /// Keeps the task armed. Dropping it cancels the task if it has not run.
    type Handle;

    /// Arm `task` to run after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

impl<T: Scheduler> Scheduler for std::rc::Rc<T> {
    type Handle = T::Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        (**self).schedule(delay, task)
    }
}
