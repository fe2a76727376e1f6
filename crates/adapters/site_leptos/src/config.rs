//! Front-end configuration embedded from `site.toml` at compile time.

use servicios_domain::config::SiteConfig;

const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the embedded configuration, falling back to defaults when the
/// document is malformed or fails validation.
pub fn load() -> SiteConfig {
    parse(SITE_TOML).unwrap_or_else(|err| {
        leptos::logging::warn!("invalid site.toml, using defaults: {err}");
        SiteConfig::default()
    })
}

fn parse(source: &str) -> Result<SiteConfig, toml::de::Error> {
    toml::from_str(source)
}
