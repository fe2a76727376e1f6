mod floating_contact;
mod icon;
mod service_card;
mod service_list;

pub use floating_contact::FloatingContactLink;
pub use icon::IconGlyph;
pub use service_card::ServiceCard;
pub use service_list::ServiceList;
