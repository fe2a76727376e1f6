use leptos::prelude::*;

mod components;
pub mod config;
mod reveal;
mod style;
pub mod timer;
pub mod viewport;

use components::{FloatingContactLink, ServiceList};

/// Root application component.
///
/// Provides the embedded [`SiteConfig`](servicios_domain::config::SiteConfig)
/// as context, then renders the services section and the floating contact
/// link side by side.
#[component]
pub fn App() -> impl IntoView {
    provide_context(config::load());

    view! {
        <main>
            <ServiceList/>
        </main>
        <FloatingContactLink/>
    }
}
