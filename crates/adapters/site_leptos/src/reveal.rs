//! `use_reveal` — binds a node to the reveal controller for its lifetime.

use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use servicios_app::reveal::{RevealGuard, RevealPlan, attach};
use servicios_domain::visibility::Visibility;

use crate::timer::BrowserScheduler;
use crate::viewport::{BrowserViewport, ObserverGuard};

type BrowserReveal = RevealGuard<Timeout, ObserverGuard>;

/// Track whether the element behind `node_ref` has been revealed.
///
/// Observation starts once the node is mounted. The returned signal starts
/// `false` and flips to `true` at most once. On unmount the observer is
/// disconnected and a pending reveal timer is cleared.
pub fn use_reveal(node_ref: NodeRef<Div>, plan: RevealPlan) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let slot = StoredValue::new_local(None::<BrowserReveal>);

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if slot.with_value(Option::is_some) {
            return;
        }
        let target: &web_sys::Element = el.as_ref();
        let reveal = attach(
            &BrowserViewport,
            target,
            BrowserScheduler,
            plan,
            move |v: Visibility| set_visible.set(v.is_revealed()),
        );
        slot.set_value(Some(reveal));
    });

    on_cleanup(move || {
        drop(slot.try_update_value(Option::take));
    });

    visible
}
