//! Viewport port — intersection observation of a single element.

use servicios_domain::visibility::{IntersectionEntry, Threshold};

/// Why an element could not be observed.
#[derive(Debug, thiserror::Error)]
pub enum ObserveError {
    /// The environment has no intersection API.
    #[error("intersection observation is not supported")]
    Unsupported,
    /// The observer could not be created or attached.
    #[error("failed to observe element: {0}")]
    Failed(String),
}

/// Reports when an element enters or leaves the viewport.
pub trait ViewportObserver {
    /// The element type being observed.
    type Target: ?Sized;
    /// Keeps the observation alive. Dropping it stops delivery.
    type Subscription;

    /// Start delivering entries for `target` whenever its visible fraction
    /// crosses `threshold`. Implementations deliver the initial state too.
    ///
    /// # Errors
    ///
    /// Returns [`ObserveError`] when the environment cannot observe.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: Threshold,
        on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<Self::Subscription, ObserveError>;
}
