use super::{CardBlock, ImageAsset, Review};

/// Access to the listing data of a CMS record across both schema variants.
///
/// Implementors only expose where data lives; the order in which those places
/// are consulted belongs to the client-side adapters.
pub trait CardSource {
    /// Human title, used as the fallback alt text.
    fn display_title(&self) -> Option<&str>;

    /// Nested card block of the current schema.
    fn card(&self) -> Option<&CardBlock>;

    /// Legacy top-level `cardImage`.
    fn legacy_card_image(&self) -> Option<&ImageAsset>;

    /// Legacy top-level `heroImage`.
    fn legacy_hero_image(&self) -> Option<&ImageAsset>;

    /// Legacy top-level `galleryImages`.
    fn legacy_gallery(&self) -> &[ImageAsset] {
        &[]
    }

    /// Legacy top-level `tags`.
    fn legacy_tags(&self) -> &[String];

    fn legacy_price(&self) -> Option<f64> {
        None
    }

    fn legacy_currency(&self) -> Option<&str> {
        None
    }

    fn legacy_duration(&self) -> Option<&str> {
        None
    }

    fn reviews(&self) -> &[Review] {
        &[]
    }
}
