use serde::{Deserialize, Serialize};

use super::CmsId;

/// Pre-generated resolution variant of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTier {
    Small,
    Medium,
    Large,
    Base,
}

impl ImageTier {
    /// Order in which tiers are tried when picking a display URL for a card.
    pub const PROBE_ORDER: [ImageTier; 4] = [
        ImageTier::Medium,
        ImageTier::Small,
        ImageTier::Large,
        ImageTier::Base,
    ];
}

/// Editor-picked point of interest, both axes 0–1 from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FocalPointDto {
    pub x: f64,
    pub y: f64,
}

/// Image descriptor as delivered by the CMS media library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageAsset {
    pub id: Option<CmsId>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    /// Original upload (the "base" tier).
    pub url: Option<String>,
    pub focal_point: Option<FocalPointDto>,
}

impl ImageAsset {
    /// URL stored for `tier`, `None` when missing or blank.
    pub fn tier(&self, tier: ImageTier) -> Option<&str> {
        let value = match tier {
            ImageTier::Small => self.small.as_deref(),
            ImageTier::Medium => self.medium.as_deref(),
            ImageTier::Large => self.large.as_deref(),
            ImageTier::Base => self.url.as_deref(),
        };
        value.map(str::trim).filter(|s| !s.is_empty())
    }

    /// First non-blank URL in `ImageTier::PROBE_ORDER`.
    pub fn best_url(&self) -> Option<&str> {
        ImageTier::PROBE_ORDER.iter().find_map(|t| self.tier(*t))
    }

    /// Alt text, `None` when blank.
    pub fn alt_text(&self) -> Option<&str> {
        self.alt.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tier_is_absent() {
        let image = ImageAsset {
            medium: Some("".into()),
            small: Some("   ".into()),
            large: Some("https://cdn.example/large.jpg".into()),
            ..Default::default()
        };
        assert_eq!(image.tier(ImageTier::Medium), None);
        assert_eq!(image.best_url(), Some("https://cdn.example/large.jpg"));
    }

    #[test]
    fn test_deserialize_partial() {
        let image: ImageAsset =
            serde_json::from_str(r#"{"id": 7, "medium": "m.jpg", "alt": "Dunes", "focalPoint": {"x": 0.2, "y": 0.7}}"#)
                .unwrap();
        assert_eq!(image.id.as_ref().map(|i| i.as_str()), Some("7"));
        assert_eq!(image.best_url(), Some("m.jpg"));
        assert_eq!(image.alt_text(), Some("Dunes"));
        assert!(image.url.is_none());
        assert_eq!(image.focal_point, Some(FocalPointDto { x: 0.2, y: 0.7 }));
    }
}
