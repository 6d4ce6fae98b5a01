pub mod adaptive_image;
pub mod carousel;
pub mod query_view;
pub mod section_nav;
pub mod star_rating;

pub use adaptive_image::{AdaptiveImage, FocalPoint};
pub use carousel::Carousel;
pub use query_view::QueryView;
pub use section_nav::SectionNav;
pub use star_rating::{RatingBadge, StarRow};
