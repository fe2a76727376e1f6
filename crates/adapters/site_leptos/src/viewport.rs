//! Browser viewport observer backed by `IntersectionObserver`.
//!
//! Implements the [`ViewportObserver`] port for DOM elements. The returned
//! [`ObserverGuard`] disconnects the observer when dropped.

use servicios_app::ports::{ObserveError, ViewportObserver};
use servicios_domain::visibility::{IntersectionEntry, Threshold};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Guard that disconnects the `IntersectionObserver` on drop.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes DOM elements through the browser's intersection API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

/// Whether the current window exposes `IntersectionObserver`.
fn is_supported() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

impl ViewportObserver for BrowserViewport {
    type Target = Element;
    type Subscription = ObserverGuard;

    fn observe(
        &self,
        target: &Element,
        threshold: Threshold,
        mut on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<ObserverGuard, ObserveError> {
        if !is_supported() {
            return Err(ObserveError::Unsupported);
        }

        let on_entries = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                on_entry(IntersectionEntry {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.ratio()));

        let observer =
            IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)
                .map_err(|err| ObserveError::Failed(format!("{err:?}")))?;
        observer.observe(target);

        Ok(ObserverGuard {
            observer,
            _on_entries: on_entries,
        })
    }
}
