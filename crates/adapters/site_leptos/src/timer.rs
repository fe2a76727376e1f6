//! Browser scheduler backed by `setTimeout` through `gloo-timers`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use servicios_app::ports::Scheduler;

/// Schedules tasks with `setTimeout`. The [`Timeout`] handle clears the
/// timer when dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}
