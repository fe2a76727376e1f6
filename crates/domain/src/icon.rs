//! Icon — the closed set of glyphs shown on service cards.
//!
//! Each variant resolves to static vector shapes drawn on a 24x24 view box
//! with a 2px `currentColor` stroke. Adapters render them with a `match` on
//! [`Shape`]; there is no runtime registry.

use serde::{Deserialize, Serialize};

/// Side length of the square view box every icon is drawn on.
pub const VIEW_BOX: &str = "0 0 24 24";

/// Stroke width shared by every outline icon.
pub const STROKE_WIDTH: u8 = 2;

/// Glyph shown in a service card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Home,
    Insurance,
    Briefcase,
    Clipboard,
    Cow,
    Newspaper,
    Handshake,
}

/// A single primitive of an outline icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// SVG path data with round caps and joins.
    Path { d: &'static str },
    /// Rounded rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
    },
    Circle { cx: f32, cy: f32, r: f32 },
}

const HOME: &[Shape] = &[Shape::Path {
    d: "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
}];

const INSURANCE: &[Shape] = &[Shape::Path {
    d: "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
}];

const BRIEFCASE: &[Shape] = &[
    Shape::Rect {
        x: 2.0,
        y: 7.0,
        width: 20.0,
        height: 14.0,
        rx: 2.0,
    },
    Shape::Path {
        d: "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
    },
];

const CLIPBOARD: &[Shape] = &[Shape::Path {
    d: "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2",
}];

const COW: &[Shape] = &[
    Shape::Circle {
        cx: 12.0,
        cy: 12.0,
        r: 3.0,
    },
    Shape::Path {
        d: "M12 1v6m0 6v6m9-9h-6m-6 0H3",
    },
];

const NEWSPAPER: &[Shape] = &[Shape::Path {
    d: "M19 20H5a2 2 0 01-2-2V6a2 2 0 012-2h10a2 2 0 012 2v1m2 13a2 2 0 01-2-2V7m2 13a2 2 0 002-2V9a2 2 0 00-2-2h-2m-4-3H9M7 16h6M7 8h6v4H7V8z",
}];

const HANDSHAKE: &[Shape] = &[Shape::Path {
    d: "M14 10h4.764a2 2 0 011.789 2.894l-3.5 7A2 2 0 0115.263 21h-4.017c-.163 0-.326-.02-.485-.06L7 20m7-10V5a2 2 0 00-2-2h-.095c-.5 0-.905.405-.905.905 0 .714-.211 1.412-.608 2.006L7 11v9m7-10h-2M7 20H5a2 2 0 01-2-2v-6a2 2 0 012-2h2.5",
}];

impl Icon {
    /// Every variant, in declaration order.
    pub const ALL: [Icon; 7] = [
        Icon::Home,
        Icon::Insurance,
        Icon::Briefcase,
        Icon::Clipboard,
        Icon::Cow,
        Icon::Newspaper,
        Icon::Handshake,
    ];

    /// Stable lowercase key, matching the serde representation.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Insurance => "insurance",
            Icon::Briefcase => "briefcase",
            Icon::Clipboard => "clipboard",
            Icon::Cow => "cow",
            Icon::Newspaper => "newspaper",
            Icon::Handshake => "handshake",
        }
    }

    /// Vector primitives that make up this glyph, in paint order.
    #[must_use]
    pub fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Home => HOME,
            Icon::Insurance => INSURANCE,
            Icon::Briefcase => BRIEFCASE,
            Icon::Clipboard => CLIPBOARD,
            Icon::Cow => COW,
            Icon::Newspaper => NEWSPAPER,
            Icon::Handshake => HANDSHAKE,
        }
    }
}

/// Filled WhatsApp logo used by the floating contact link.
pub const WHATSAPP_GLYPH: &str = "M.057 24l1.687-6.163c-1.041-1.804-1.588-3.849-1.587-5.946.003-6.556 5.338-11.891 11.893-11.891 3.181.001 6.167 1.24 8.413 3.488 2.245 2.248 3.481 5.236 3.48 8.414-.003 6.557-5.338 11.892-11.893 11.892-1.99-.001-3.951-.5-5.688-1.448l-6.305 1.654zm6.597-3.807c1.676.995 3.276 1.591 5.392 1.592 5.448 0 9.886-4.434 9.889-9.885.002-5.462-4.415-9.89-9.881-9.893-5.452 0-9.887 4.434-9.889 9.884-.001 2.225.651 3.891 1.746 5.634l-.999 3.648 3.742-.98zm11.387-5.464c-.074-.124-.272-.198-.57-.347-.297-.149-1.758-.868-2.031-.967-.272-.099-.47-.149-.668.15-.197.297-.767.967-.941 1.164-.173.198-.347.223-.644.074-.297-.149-1.255-.462-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.151-.172.2-.296.3-.495.099-.198.05-.372-.025-.521-.075-.148-.668-1.611-.916-2.206-.242-.579-.487-.5-.668-.51-.173-.008-.372-.01-.571-.01s-.52.074-.792.372c-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.095 3.2 5.076 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.872.118.571-.085 1.758-.719 2.006-1.413.248-.695.248-1.29.173-1.413z";
