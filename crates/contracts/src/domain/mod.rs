pub mod c001_tour_package;
pub mod c002_experience;
pub mod c003_blog_post;
pub mod common;
