pub mod anchor_link;
pub mod cta_button;
pub mod fade_in_card;
pub mod section_header;
pub mod stat_card;
pub mod ui;

pub use anchor_link::AnchorLink;
pub use cta_button::CtaButton;
pub use fade_in_card::FadeInCard;
pub use section_header::SectionHeader;
pub use stat_card::StatCard;
