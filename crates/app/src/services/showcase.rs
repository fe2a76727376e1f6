//! Showcase — assigns a reveal plan to every card of the services grid.

use servicios_domain::config::RevealSettings;
use servicios_domain::error::SiteError;
use servicios_domain::service::ServiceEntry;
use servicios_domain::visibility::stagger_delay;

use crate::reveal::RevealPlan;

/// One card of the grid with its position and entrance timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlan {
    pub index: usize,
    pub entry: ServiceEntry,
    pub plan: RevealPlan,
}

/// The services grid: header timing plus one plan per card.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    header: RevealPlan,
    cards: Vec<CardPlan>,
}

impl Showcase {
    /// Plan the grid for `entries`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] if any entry breaks its invariants.
    pub fn new(entries: &[ServiceEntry], settings: &RevealSettings) -> Result<Self, SiteError> {
        let step = settings.stagger_step();
        let cards = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| -> Result<CardPlan, SiteError> {
                entry.validate()?;
                Ok(CardPlan {
                    index,
                    entry: *entry,
                    plan: RevealPlan {
                        delay: stagger_delay(index, step),
                        threshold: settings.card_threshold,
                    },
                })
            })
            .collect::<Result<Vec<_>, SiteError>>()?;

        tracing::debug!(cards = cards.len(), "showcase planned");

        Ok(Self {
            header: RevealPlan::immediate(settings.header_threshold),
            cards,
        })
    }

    #[must_use]
    pub fn header_plan(&self) -> RevealPlan {
        self.header
    }

    #[must_use]
    pub fn cards(&self) -> &[CardPlan] {
        &self.cards
    }
}
