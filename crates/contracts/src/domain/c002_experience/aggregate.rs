use serde::{Deserialize, Serialize};

use crate::domain::common::de::null_as_default;
use crate::domain::common::{CardBlock, CardSource, CmsId, ImageAsset, Review};

/// One day of an experience itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Curated experience, served by `/api/experiences` and
/// `/api/experiences/{slug}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: Option<CmsId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Long-form rich text body (already sanitised HTML from the CMS).
    pub body: Option<String>,
    pub destination: Option<String>,

    pub card: Option<CardBlock>,

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
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(deserialize_with = "null_as_default")]
    pub inclusions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub exclusions: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
    pub featured: Option<bool>,
}

impl CardSource for Experience {
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
