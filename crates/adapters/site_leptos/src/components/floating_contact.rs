//! Floating WhatsApp button pinned to the bottom-right corner.

use leptos::prelude::*;
use servicios_domain::config::SiteConfig;
use servicios_domain::contact::{ARIA_LABEL, WHATSAPP_SEND_URL};
use servicios_domain::icon::{VIEW_BOX, WHATSAPP_GLYPH};

/// Anchor that opens a chat with the business in a new tab.
#[component]
pub fn FloatingContactLink() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let href = config.contact.href().unwrap_or_else(|err| {
        leptos::logging::warn!("contact link unavailable: {err}");
        WHATSAPP_SEND_URL.to_string()
    });

    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=ARIA_LABEL
            class="fixed bottom-4 right-4 z-50 bg-green-500 hover:bg-green-600 text-white \
                   rounded-full p-4 shadow-lg animate-bounce transition duration-300 ease-in-out"
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                fill="white"
                viewBox=VIEW_BOX
            >
                <path d=WHATSAPP_GLYPH></path>
            </svg>
        </a>
    }
}
