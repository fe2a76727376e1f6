//! Site configuration — tunables for the contact link and reveal animation.
//!
//! Every field has a default so an empty document is valid. Parsing the
//! document (TOML in the front-end) is left to adapters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::contact::ContactLink;
use crate::visibility::Threshold;

/// Top-level front-end configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Floating contact link target.
    pub contact: ContactLink,
    /// Entrance animation tuning.
    pub reveal: RevealSettings,
}

/// Entrance animation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Milliseconds added per card position before it reveals.
    pub stagger_step_ms: u64,
    /// Visible fraction that triggers a card.
    pub card_threshold: Threshold,
    /// Visible fraction that triggers the section header.
    pub header_threshold: Threshold,
}

impl RevealSettings {
    #[must_use]
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            stagger_step_ms: 100,
            card_threshold: Threshold::CARD,
            header_threshold: Threshold::ANY,
        }
    }
}
