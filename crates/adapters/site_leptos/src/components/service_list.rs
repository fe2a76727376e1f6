//! The "servicios" section: header, card grid and closing note.

use leptos::html::Div;
use leptos::prelude::*;
use servicios_app::reveal::RevealPlan;
use servicios_app::services::showcase::Showcase;
use servicios_domain::config::SiteConfig;
use servicios_domain::section::SERVICES_SECTION;
use servicios_domain::service::catalogue;

use super::ServiceCard;
use crate::reveal::use_reveal;
use crate::style;

/// Services section anchored at `#servicios`.
///
/// The header and every card reveal independently through the same
/// intersection-based mechanism; cards are staggered by grid position.
#[component]
pub fn ServiceList() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let showcase = match Showcase::new(catalogue(), &config.reveal) {
        Ok(showcase) => Some(showcase),
        Err(err) => {
            leptos::logging::warn!("service catalogue rejected: {err}");
            None
        }
    };
    let header_plan = showcase.as_ref().map_or_else(
        || RevealPlan::immediate(config.reveal.header_threshold),
        Showcase::header_plan,
    );
    let cards = showcase.map(|s| s.cards().to_vec()).unwrap_or_default();

    let header_ref = NodeRef::<Div>::new();
    let header_visible = use_reveal(header_ref, header_plan);

    view! {
        <section
            id=SERVICES_SECTION.anchor
            class="py-20 bg-gradient-to-b from-gray-50 to-white text-gray-800"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div node_ref=header_ref class=move || style::header(header_visible.get())>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 text-gray-900">
                        {SERVICES_SECTION.title}
                    </h2>
                    <div class="max-w-3xl mx-auto space-y-4">
                        {SERVICES_SECTION
                            .paragraphs
                            .iter()
                            .map(|text| {
                                view! {
                                    <p class="text-lg text-gray-700 leading-relaxed">{*text}</p>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 justify-items-center">
                    {cards
                        .into_iter()
                        .map(|card| view! { <ServiceCard card=card/> })
                        .collect_view()}
                </div>

                <div class="text-center mt-12">
                    <p class="text-gray-600 italic">{SERVICES_SECTION.closing_note}</p>
                </div>
            </div>
        </section>
    }
}
