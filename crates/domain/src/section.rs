//! Copy for the services section that wraps the card grid.

/// Static text and anchor of the services section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    /// Element id used for in-page navigation (`#servicios`).
    pub anchor: &'static str,
    pub title: &'static str,
    pub paragraphs: [&'static str; 2],
    /// Italic note rendered below the grid.
    pub closing_note: &'static str,
}

pub const SERVICES_SECTION: SectionCopy = SectionCopy {
    anchor: "servicios",
    title: "NUESTROS SERVICIOS",
    paragraphs: [
        "Disponemos de la mejor oferta, variedad de planes y paquetes de seguros para cubrir todas sus necesidades.",
        "Nuestra empresa se encuentra comprometida para poder brindarle la mejor atención, y una calidad profesional en cada uno de nuestros rubros.",
    ],
    closing_note: "Los diferentes servicios que brindamos están diseñados para ofrecerte la mejor experiencia profesional.",
};
