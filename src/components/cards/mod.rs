//! Card components for the journey, projects, and certifications
//! sections.

mod card_image;
mod certification_card;
mod journey_card;
mod project_row;
mod timeline_item;

pub use card_image::{card_image_source, CardImage};
pub use certification_card::CertificationCard;
pub use journey_card::JourneyCard;
pub use project_row::ProjectRow;
pub use timeline_item::TimelineItem;
