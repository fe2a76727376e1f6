//! Service entry — one marketing item shown as a card in the services grid.
//!
//! The catalogue is fixed at build time. There is no runtime creation,
//! mutation, or deletion of entries.

use serde::Serialize;

use crate::error::{SiteError, ValidationError};
use crate::icon::Icon;

/// A static service offered by the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    /// Display label such as `"01"`, rendered as `#01`.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

impl ServiceEntry {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when `id`, `title` or `description`
    /// is empty.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyField("id").into());
        }
        if self.title.is_empty() {
            return Err(ValidationError::EmptyField("title").into());
        }
        if self.description.is_empty() {
            return Err(ValidationError::EmptyField("description").into());
        }
        Ok(())
    }

    /// Label shown above the title.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("#{}", self.id)
    }
}

/// The services offered, in display order.
pub const CATALOGUE: [ServiceEntry; 7] = [
    ServiceEntry {
        id: "01",
        title: "Asesoramiento Inmobiliario",
        description: "Asesoramiento profesional personalizado para compra, venta y alquiler de propiedades.",
        icon: Icon::Home,
    },
    ServiceEntry {
        id: "02",
        title: "Negocios Inmobiliarios",
        description: "Compra, venta y alquiler de inmuebles adaptados a tus necesidades.",
        icon: Icon::Briefcase,
    },
    ServiceEntry {
        id: "03",
        title: "Seguros Generales",
        description: "La mejor oferta, variedad de planes y paquetes de seguros para cubrir todas sus necesidades.",
        icon: Icon::Insurance,
    },
    ServiceEntry {
        id: "04",
        title: "Tasaciones de Inmuebles",
        description: "Valoraciones precisas y profesionales para toda operación inmobiliaria.",
        icon: Icon::Clipboard,
    },
    ServiceEntry {
        id: "05",
        title: "Consignaciones Ganaderas",
        description: "Gestión y venta de ganado con asesoría especializada.",
        icon: Icon::Cow,
    },
    ServiceEntry {
        id: "06",
        title: "Publicaciones en \"El Territorio\"",
        description: "Difunde tus propiedades en el principal medio regional de Misiones.",
        icon: Icon::Newspaper,
    },
    ServiceEntry {
        id: "07",
        title: "Asesoramiento Profesional",
        description: "Asesoramiento profesional especializado para ventas e inmuebles.",
        icon: Icon::Handshake,
    },
];

/// Borrow the full catalogue.
#[must_use]
pub fn catalogue() -> &'static [ServiceEntry] {
    &CATALOGUE
}
