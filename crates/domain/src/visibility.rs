//! Visibility — the one-shot "revealed on scroll" latch and its inputs.
//!
//! A card starts [`Visibility::Hidden`]. The first intersection that meets
//! its [`Threshold`] schedules a reveal after the card's stagger delay; once
//! [`Visibility::Revealed`] it never goes back. A disposed tracker ignores
//! everything, so a late timer cannot write to an unmounted card.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Entrance state of a revealed element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

impl Visibility {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, Visibility::Revealed)
    }
}

/// Fraction of an element's area that must be on screen, in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Any overlap counts.
    pub const ANY: Threshold = Threshold(0.0);
    /// Cards reveal once a tenth of them is visible.
    pub const CARD: Threshold = Threshold(0.1);

    /// # Errors
    ///
    /// Returns [`ValidationError::ThresholdOutOfRange`] for values outside
    /// `0.0..=1.0` (including NaN).
    pub fn new(ratio: f64) -> Result<Self, ValidationError> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(ValidationError::ThresholdOutOfRange(ratio))
        }
    }

    #[must_use]
    pub fn ratio(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::CARD
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

/// Snapshot delivered by a viewport observer for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Visible fraction of the element's bounding box.
    pub ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    #[must_use]
    pub fn meets(&self, threshold: Threshold) -> bool {
        self.is_intersecting && self.ratio >= threshold.ratio()
    }
}

/// Delay before the card at `index` reveals: `index * step`, saturating.
#[must_use]
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    step.saturating_mul(index)
}

/// Lifecycle of a single reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Mounted, waiting for the first qualifying intersection.
    Waiting,
    /// Reveal timer armed.
    Scheduled,
    Revealed,
    /// Torn down. Terminal.
    Disposed,
}

/// Pure state machine behind one revealed element.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    phase: RevealPhase,
    delay: Duration,
    threshold: Threshold,
}

impl RevealTracker {
    #[must_use]
    pub fn new(delay: Duration, threshold: Threshold) -> Self {
        Self {
            phase: RevealPhase::Waiting,
            delay,
            threshold,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Feed an intersection entry.
    ///
    /// Returns the delay to arm a timer with, only for the first entry that
    /// meets the threshold while waiting. Every other call returns `None`.
    pub fn observe(&mut self, entry: IntersectionEntry) -> Option<Duration> {
        if self.phase == RevealPhase::Waiting && entry.meets(self.threshold) {
            self.phase = RevealPhase::Scheduled;
            Some(self.delay)
        } else {
            None
        }
    }

    /// The armed timer elapsed. Returns `true` when this flips the latch.
    pub fn fire(&mut self) -> bool {
        if self.phase == RevealPhase::Scheduled {
            self.phase = RevealPhase::Revealed;
            true
        } else {
            false
        }
    }

    /// Reveal without waiting for an observer, e.g. when the environment
    /// cannot observe intersections. Returns `true` when this flips the latch.
    pub fn force(&mut self) -> bool {
        match self.phase {
            RevealPhase::Waiting | RevealPhase::Scheduled => {
                self.phase = RevealPhase::Revealed;
                true
            }
            RevealPhase::Revealed | RevealPhase::Disposed => false,
        }
    }

    pub fn dispose(&mut self) {
        self.phase = RevealPhase::Disposed;
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        if self.phase == RevealPhase::Revealed {
            Visibility::Revealed
        } else {
            Visibility::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(delay_ms: u64) -> RevealTracker {
        RevealTracker::new(Duration::from_millis(delay_ms), Threshold::CARD)
    }

    #[test]
    fn should_start_hidden_and_waiting() {
        let t = tracker(200);
        assert_eq!(t.phase(), RevealPhase::Waiting);
        assert_eq!(t.visibility(), Visibility::Hidden);
    }

    #[test]
    fn should_schedule_on_first_qualifying_entry_only() {
        let mut t = tracker(300);
        assert_eq!(
            t.observe(IntersectionEntry::visible(0.5)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(t.observe(IntersectionEntry::visible(1.0)), None);
        assert_eq!(t.phase(), RevealPhase::Scheduled);
        assert_eq!(t.visibility(), Visibility::Hidden);
    }

    #[test]
    fn should_ignore_entries_below_threshold() {
        let mut t = tracker(0);
        assert_eq!(t.observe(IntersectionEntry::visible(0.05)), None);
        assert_eq!(t.observe(IntersectionEntry::hidden()), None);
        assert_eq!(t.phase(), RevealPhase::Waiting);
    }

    #[test]
    fn should_reveal_when_timer_fires() {
        let mut t = tracker(100);
        t.observe(IntersectionEntry::visible(0.2));
        assert!(t.fire());
        assert_eq!(t.visibility(), Visibility::Revealed);
    }

    #[test]
    fn should_never_revert_after_reveal() {
        let mut t = tracker(100);
        t.observe(IntersectionEntry::visible(0.2));
        t.fire();
        assert_eq!(t.observe(IntersectionEntry::hidden()), None);
        assert_eq!(t.observe(IntersectionEntry::visible(0.9)), None);
        assert!(!t.fire());
        assert_eq!(t.visibility(), Visibility::Revealed);
    }

    #[test]
    fn should_not_fire_without_schedule() {
        let mut t = tracker(100);
        assert!(!t.fire());
        assert_eq!(t.visibility(), Visibility::Hidden);
    }

    #[test]
    fn should_ignore_timer_after_dispose() {
        let mut t = tracker(100);
        t.observe(IntersectionEntry::visible(0.2));
        t.dispose();
        assert!(!t.fire());
        assert!(!t.force());
        assert_eq!(t.visibility(), Visibility::Hidden);
    }

    #[test]
    fn should_force_reveal_once() {
        let mut t = tracker(100);
        assert!(t.force());
        assert!(!t.force());
        assert_eq!(t.visibility(), Visibility::Revealed);
    }

    #[test]
    fn should_accept_any_overlap_with_zero_threshold() {
        assert!(IntersectionEntry::visible(0.0).meets(Threshold::ANY));
        assert!(!IntersectionEntry::hidden().meets(Threshold::ANY));
    }

    #[test]
    fn should_stagger_by_index() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_delay(6, step), Duration::from_millis(600));
    }

    #[test]
    fn should_keep_stagger_monotonic() {
        let step = Duration::from_millis(100);
        for i in 0..7 {
            for j in i..7 {
                assert!(stagger_delay(i, step) <= stagger_delay(j, step));
            }
        }
    }

    #[test]
    fn should_reject_threshold_out_of_range() {
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(1.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::new(1.0).unwrap().ratio(), 1.0);
    }
}
