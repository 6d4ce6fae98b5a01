pub mod details;
pub mod row;

pub use details::{ExperienceDetailsPage, TourDetailsPage};
pub use row::ExperiencesRow;
