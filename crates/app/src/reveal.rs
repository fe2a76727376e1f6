//! Reveal controller — drives a [`RevealTracker`] from viewport events.
//!
//! [`attach`] subscribes an element to a [`ViewportObserver`], arms a
//! [`Scheduler`] task on the first qualifying intersection, and reports
//! [`Visibility::Revealed`] to a sink exactly once. The returned
//! [`RevealGuard`] owns every resource; dropping it on unmount disposes the
//! tracker, cancels the pending task, and releases the subscription.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use servicios_domain::visibility::{IntersectionEntry, RevealTracker, Threshold, Visibility};

use crate::ports::{Scheduler, ViewportObserver};

/// When and how eagerly an element reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPlan {
    pub delay: Duration,
    pub threshold: Threshold,
}

impl RevealPlan {
    /// Reveal as soon as any part of the element is on screen.
    #[must_use]
    pub fn immediate(threshold: Threshold) -> Self {
        Self {
            delay: Duration::ZERO,
            threshold,
        }
    }
}

type Sink = Rc<dyn Fn(Visibility)>;

/// Owns the observation and pending timer of one revealed element.
#[must_use = "dropping the guard tears the reveal down"]
pub struct RevealGuard<H, S> {
    tracker: Rc<RefCell<RevealTracker>>,
    pending: Rc<RefCell<Option<H>>>,
    subscription: Option<S>,
}

impl<H, S> RevealGuard<H, S> {
    /// Current latch value.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.tracker.borrow().visibility()
    }

    /// Whether the environment is delivering intersection entries.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }
}

impl<H, S> Drop for RevealGuard<H, S> {
    fn drop(&mut self) {
        self.tracker.borrow_mut().dispose();
        drop(self.pending.borrow_mut().take());
        drop(self.subscription.take());
    }
}

/// Observe `target` and call `sink` with [`Visibility::Revealed`] once it
/// has been on screen for `plan.delay`.
///
/// If the observer cannot run, the element is revealed immediately so
/// content never stays hidden.
pub fn attach<O, S>(
    observer: &O,
    target: &O::Target,
    scheduler: S,
    plan: RevealPlan,
    sink: impl Fn(Visibility) + 'static,
) -> RevealGuard<S::Handle, O::Subscription>
where
    O: ViewportObserver,
    S: Scheduler + 'static,
    S::Handle: 'static,
{
    let tracker = Rc::new(RefCell::new(RevealTracker::new(plan.delay, plan.threshold)));
    let pending: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));
    let sink: Sink = Rc::new(sink);

    let on_entry = {
        let tracker = Rc::clone(&tracker);
        let pending = Rc::clone(&pending);
        let sink = Rc::clone(&sink);
        move |entry: IntersectionEntry| {
            let Some(delay) = tracker.borrow_mut().observe(entry) else {
                return;
            };
            if delay.is_zero() {
                fire(&tracker, &sink);
                return;
            }
            tracing::debug!(delay = ?delay, "reveal scheduled");
            let task = {
                let tracker = Rc::clone(&tracker);
                let sink = Rc::clone(&sink);
                Box::new(move || fire(&tracker, &sink))
            };
            *pending.borrow_mut() = Some(scheduler.schedule(delay, task));
        }
    };

    let subscription = match observer.observe(target, plan.threshold, Box::new(on_entry)) {
        Ok(subscription) => Some(subscription),
        Err(err) => {
            tracing::warn!(error = %err, "falling back to always-visible");
            let flipped = tracker.borrow_mut().force();
            if flipped {
                sink(Visibility::Revealed);
            }
            None
        }
    };

    RevealGuard {
        tracker,
        pending,
        subscription,
    }
}

fn fire(tracker: &RefCell<RevealTracker>, sink: &Sink) {
    let flipped = tracker.borrow_mut().fire();
    if flipped {
        sink(Visibility::Revealed);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::ports::ObserveError;

    struct Pending {
        delay: Duration,
        cancelled: Rc<Cell<bool>>,
        task: Option<Box<dyn FnOnce()>>,
    }

    /// Scheduler whose tasks only run when the test advances it.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Rc<RefCell<Vec<Pending>>>,
        /// Handles do not cancel on drop, like a timer nobody cleared.
        leaky: bool,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
        leaky: bool,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if !self.leaky {
                self.cancelled.set(true);
            }
        }
    }

    impl ManualScheduler {
        fn leaky() -> Self {
            Self {
                leaky: true,
                ..Self::default()
            }
        }

        fn delays(&self) -> Vec<Duration> {
            self.queue.borrow().iter().map(|p| p.delay).collect()
        }

        /// Run every task that has not been cancelled.
        fn run_all(&self) {
            let tasks: Vec<_> = self
                .queue
                .borrow_mut()
                .iter_mut()
                .filter(|p| !p.cancelled.get())
                .filter_map(|p| p.task.take())
                .collect();
            for task in tasks {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Pending {
                delay,
                cancelled: Rc::clone(&cancelled),
                task: Some(task),
            });
            ManualHandle {
                cancelled,
                leaky: self.leaky,
            }
        }
    }

    /// Observer that lets the test emit intersection entries by hand.
    #[derive(Default)]
    struct ScriptedObserver {
        callback: RefCell<Option<Box<dyn FnMut(IntersectionEntry)>>>,
        active: Rc<Cell<bool>>,
        unsupported: bool,
    }

    struct ScriptedSubscription {
        active: Rc<Cell<bool>>,
    }

    impl Drop for ScriptedSubscription {
        fn drop(&mut self) {
            self.active.set(false);
        }
    }

    impl ScriptedObserver {
        fn unsupported() -> Self {
            Self {
                unsupported: true,
                ..Self::default()
            }
        }

        fn emit(&self, entry: IntersectionEntry) {
            if !self.active.get() {
                return;
            }
            if let Some(cb) = self.callback.borrow_mut().as_mut() {
                cb(entry);
            }
        }
    }

    impl ViewportObserver for ScriptedObserver {
        type Target = ();
        type Subscription = ScriptedSubscription;

        fn observe(
            &self,
            _target: &(),
            _threshold: Threshold,
            on_entry: Box<dyn FnMut(IntersectionEntry)>,
        ) -> Result<ScriptedSubscription, ObserveError> {
            if self.unsupported {
                return Err(ObserveError::Unsupported);
            }
            *self.callback.borrow_mut() = Some(on_entry);
            self.active.set(true);
            Ok(ScriptedSubscription {
                active: Rc::clone(&self.active),
            })
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<Visibility>>>, impl Fn(Visibility) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |v| seen.borrow_mut().push(v)
        };
        (seen, sink)
    }

    fn card_plan(index: u32) -> RevealPlan {
        RevealPlan {
            delay: Duration::from_millis(100) * index,
            threshold: Threshold::CARD,
        }
    }

    #[test]
    fn should_stay_hidden_after_mount() {
        let observer = ScriptedObserver::default();
        let scheduler = ManualScheduler::default();
        let (seen, sink) = recorder();

        let guard = attach(&observer, &(), scheduler, card_plan(2), sink);

        assert!(guard.is_observing());
        assert_eq!(guard.visibility(), Visibility::Hidden);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn should_reveal_only_after_intersection_and_delay() {
        let observer = ScriptedObserver::default();
        let scheduler = ManualScheduler::default();
        let (seen, sink) = recorder();
        let guard = attach(&observer, &(), scheduler.clone(), card_plan(3), sink);

        observer.emit(IntersectionEntry::visible(0.5));
        assert_eq!(scheduler.delays(), [Duration::from_millis(300)]);
        assert_eq!(guard.visibility(), Visibility::Hidden);

        scheduler.run_all();
        assert_eq!(guard.visibility(), Visibility::Revealed);
        assert_eq!(*seen.borrow(), [Visibility::Revealed]);
    }

    #[test]
    fn should_not_schedule_below_threshold() {
        let observer = ScriptedObserver::default();
        let scheduler = ManualScheduler::default();
        let (_seen, sink) = recorder();
        let _guard = attach(&observer, &(), scheduler.clone(), card_plan(1), sink);

        observer.emit(IntersectionEntry::visible(0.05));
        observer.emit(IntersectionEntry::hidden());

        assert!(scheduler.delays().is_empty());
    }

    #[test]
    fn should_schedule_once_for_repeated_intersections() {
        let observer = ScriptedObserver::default();
        let scheduler = ManualScheduler::default();
        let (seen, sink) = recorder();
        let guard = attach(&observer, &(), scheduler.clone(), card_plan(1), sink);

        observer.emit(IntersectionEntry::visible(0.2));
        observer.emit(IntersectionEntry::hidden());
        observer.emit(IntersectionEntry::visible(0.8));
        scheduler.run_all();
        observer.emit(IntersectionEntry::hidden());

        assert_eq!(scheduler.delays().len(), 1);
        assert_eq!(*seen.borrow(), [Visibility::Revealed]);
        assert_eq!(guard.visibility(), Visibility::Revealed);
    }

    #[test]
    fn should_reveal_first_card_without_timer() {
        let observer = ScriptedObserver::default();
        let scheduler = ManualScheduler::default();
        let (seen, sink) = recorder();
        let guard = attach(&observer, &(), scheduler.clone(), card_plan(0), sink);

        observer.emit(IntersectionEntry::visible(0.1));

        assert!(scheduler.delays().is_empty());
        assert_eq!(guard.visibility(), Visibility::Revealed);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn should_cancel_pending_reveal_on_drop() {
        let observer = ScriptedObserver::default();
        let scheduler = ManualScheduler::default();
        let (seen, sink) = recorder();
        let guard = attach(&observer, &(), scheduler.clone(), card_plan(4), sink);

        observer.emit(IntersectionEntry::visible(0.5));
        drop(guard);
        scheduler.run_all();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn should_ignore_timer_that_outlives_guard() {
        let observer = ScriptedObserver::default();
        let scheduler = ManualScheduler::leaky();
        let (seen, sink) = recorder();
        let guard = attach(&observer, &(), scheduler.clone(), card_plan(4), sink);

        observer.emit(IntersectionEntry::visible(0.5));
        drop(guard);
        scheduler.run_all();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn should_release_subscription_on_drop() {
        let observer = ScriptedObserver::default();
        let (_seen, sink) = recorder();
        let guard = attach(&observer, &(), ManualScheduler::default(), card_plan(1), sink);
        assert!(observer.active.get());

        drop(guard);

        assert!(!observer.active.get());
    }

    #[test]
    fn should_reveal_immediately_when_unsupported() {
        let observer = ScriptedObserver::unsupported();
        let scheduler = ManualScheduler::default();
        let (seen, sink) = recorder();

        let guard = attach(&observer, &(), scheduler.clone(), card_plan(5), sink);

        assert!(!guard.is_observing());
        assert_eq!(guard.visibility(), Visibility::Revealed);
        assert_eq!(*seen.borrow(), [Visibility::Revealed]);
        assert!(scheduler.delays().is_empty());
    }

    #[test]
    fn should_latch_header_on_first_overlap() {
        let observer = ScriptedObserver::default();
        let (seen, sink) = recorder();
        let guard = attach(
            &observer,
            &(),
            ManualScheduler::default(),
            RevealPlan::immediate(Threshold::ANY),
            sink,
        );

        observer.emit(IntersectionEntry::hidden());
        assert_eq!(guard.visibility(), Visibility::Hidden);

        observer.emit(IntersectionEntry::visible(0.01));
        observer.emit(IntersectionEntry::hidden());
        observer.emit(IntersectionEntry::visible(0.5));

        assert_eq!(guard.visibility(), Visibility::Revealed);
        assert_eq!(*seen.borrow(), [Visibility::Revealed]);
    }
}
