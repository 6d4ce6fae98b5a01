pub mod card;
pub mod featured;

pub use card::TourCard;
pub use featured::{render_cards, FeaturedTours, RowContent};
