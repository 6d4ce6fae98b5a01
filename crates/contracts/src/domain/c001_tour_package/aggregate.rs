use serde::{Deserialize, Serialize};

use crate::domain::common::de::null_as_default;
use crate::domain::common::{CardBlock, CardSource, CmsId, ImageAsset, Review};

// ============================================================================
// Raw CMS record
// ============================================================================

/// Tour package as returned by `/api/tour-packages`.
///
/// Carries both the nested `card` block and the legacy flat listing fields;
/// either, both or neither may be filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TourPackage {
    pub id: Option<CmsId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    /// Older records store the title as `name`.
    pub name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub destination: Option<String>,

    pub card: Option<CardBlock>,

    // Legacy flat fields
    pub card_image: Option<ImageAsset>,
    pub hero_image: Option<ImageAsset>,
    #[serde(deserialize_with = "null_as_default")]
    pub gallery_images: Vec<ImageAsset>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub duration: Option<String>,
    pub duration_days: Option<u32>,

    #[serde(deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
    pub featured: Option<bool>,
}

impl CardSource for TourPackage {
    fn display_title(&self) -> Option<&str> {
        [self.title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    fn card(&self) -> Option<&CardBlock> {
        self.card.as_ref()
    }

    fn legacy_card_image(&self) -> Option<&ImageAsset> {
        self.card_image.as_ref()
    }

    fn legacy_hero_image(&self) -> Option<&ImageAsset> {
        self.hero_image.as_ref()
    }

    fn legacy_gallery(&self) -> &[ImageAsset] {
        &self.gallery_images
    }

    fn legacy_tags(&self) -> &[String] {
        &self.tags
    }

    fn legacy_price(&self) -> Option<f64> {
        self.price
    }

    fn legacy_currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn legacy_duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_record() {
        let json = r#"{
            "id": 12,
            "name": "Kalahari Fly-In",
            "cardImage": {"small": "s.jpg"},
            "tags": null,
            "reviews": [{"rating": 5}],
            "price": 18400
        }"#;
        let tour: TourPackage = serde_json::from_str(json).unwrap();
        assert_eq!(tour.display_title(), Some("Kalahari Fly-In"));
        assert!(tour.card.is_none());
        assert!(tour.tags.is_empty());
        assert_eq!(tour.reviews.len(), 1);
        assert_eq!(tour.legacy_price(), Some(18400.0));
    }

    #[test]
    fn test_deserialize_card_record() {
        let json = r#"{
            "id": "abc",
            "title": "Patagonia Ice Fields",
            "card": {"image": {"medium": "m.jpg"}, "tags": ["Trekking"], "price": 9900, "currency": "USD"}
        }"#;
        let tour: TourPackage = serde_json::from_str(json).unwrap();
        let card = tour.card().unwrap();
        assert_eq!(card.tags, vec!["Trekking".to_string()]);
        assert_eq!(card.currency.as_deref(), Some("USD"));
    }
}
