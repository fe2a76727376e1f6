//! A single service card with scroll reveal and hover highlight.

use leptos::html::Div;
use leptos::prelude::*;
use servicios_app::services::showcase::CardPlan;

use super::IconGlyph;
use crate::reveal::use_reveal;
use crate::style;

/// Card for one catalogue entry.
///
/// Hidden until it scrolls into view, then fades in after the stagger delay
/// carried by its plan.
#[component]
pub fn ServiceCard(
    /// Entry, grid position and entrance timing.
    card: CardPlan,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let visible = use_reveal(node_ref, card.plan);
    let (hovered, set_hovered) = signal(false);
    let entry = card.entry;

    view! {
        <div
            node_ref=node_ref
            data-index=card.index.to_string()
            class=move || style::card(visible.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="flex flex-col items-center text-center">
                <div class=move || style::badge(hovered.get())>
                    <IconGlyph icon=entry.icon/>
                </div>
                <span class="text-xs font-bold text-gray-400 tracking-wider mb-2">
                    {entry.badge()}
                </span>
                <h3 class="text-xl font-bold text-gray-900 mb-3">{entry.title}</h3>
                <p class="text-gray-600 text-sm leading-relaxed">{entry.description}</p>
            </div>
        </div>
    }
}
