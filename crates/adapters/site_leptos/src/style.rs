//! Tailwind class composition for animated elements.

/// Classes for an element that fades and slides in once revealed.
///
/// `hidden_offset` is the translate utility applied while hidden.
pub fn entrance(base: &str, visible: bool, hidden_offset: &str) -> String {
    if visible {
        format!("{base} opacity-100 translate-y-0")
    } else {
        format!("{base} opacity-0 {hidden_offset}")
    }
}

const CARD_BASE: &str = "w-full max-w-xs bg-white rounded-2xl p-6 shadow-md hover:shadow-2xl \
     transition-all duration-500 transform hover:-translate-y-2 border border-gray-100";

const HEADER_BASE: &str = "text-center mb-12 transition-all duration-700";

const BADGE_BASE: &str = "p-4 rounded-2xl mb-4 transition-all duration-300";

pub fn card(visible: bool) -> String {
    entrance(CARD_BASE, visible, "translate-y-8")
}

pub fn header(visible: bool) -> String {
    entrance(HEADER_BASE, visible, "translate-y-5")
}

/// Icon badge, highlighted while the pointer is over the card.
pub fn badge(hovered: bool) -> String {
    if hovered {
        format!("{BADGE_BASE} bg-blue-600 text-white scale-110")
    } else {
        format!("{BADGE_BASE} bg-blue-50 text-blue-600")
    }
}
