//! Conversions from raw CMS records to render-ready values.
//!
//! Every function here is total: partial or missing CMS data resolves to a
//! default, never to an error. Per-resource view models in `crate::domain`
//! are assembled from these pieces.

pub mod image;
pub mod price;
pub mod rating;
pub mod tags;

pub use image::{
    resolve_gallery, resolve_hero_image, resolve_hero_image_url, resolve_image, resolve_image_alt,
    resolve_image_url, GalleryImage,
};
pub use price::{format_duration, format_price, resolve_duration_label, resolve_price_label};
pub use rating::{
    average_rating, clamp_star_breakdown, summarize_rating, RatingSummary, StarBreakdown,
};
pub use tags::resolve_display_tags;
