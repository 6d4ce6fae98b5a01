//! Image URL resolution across the card and legacy schema paths.

use contracts::domain::common::{CardSource, ImageAsset, ImageTier};

/// Tier order for full-width hero banners: sharpest first.
const HERO_TIER_ORDER: [ImageTier; 4] = [
    ImageTier::Large,
    ImageTier::Base,
    ImageTier::Medium,
    ImageTier::Small,
];

/// Image sources in card priority: nested card image, legacy `cardImage`,
/// legacy `heroImage`.
fn card_sources<R: CardSource + ?Sized>(resource: &R) -> [Option<&ImageAsset>; 3] {
    [
        resource.card().and_then(|c| c.image.as_ref()),
        resource.legacy_card_image(),
        resource.legacy_hero_image(),
    ]
}

/// First image, in card priority, that has at least one usable tier,
/// together with the URL chosen from it.
pub fn resolve_image<R: CardSource + ?Sized>(resource: &R) -> Option<(&ImageAsset, &str)> {
    card_sources(resource)
        .into_iter()
        .flatten()
        .find_map(|image| image.best_url().map(|url| (image, url)))
}

/// Display URL for a listing card.
///
/// Probes the nested card image, then the legacy card image, then the legacy
/// hero image, each in medium → small → large → base order. Blank URLs count
/// as missing. Returns `fallback` when nothing usable exists.
pub fn resolve_image_url<R: CardSource + ?Sized>(resource: &R, fallback: &str) -> String {
    resolve_image(resource)
        .map(|(_, url)| url.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Alt text of the chosen image, defaulting to the resource title.
pub fn resolve_image_alt<R: CardSource + ?Sized>(resource: &R) -> String {
    resolve_image(resource)
        .and_then(|(image, _)| image.alt_text())
        .or_else(|| resource.display_title())
        .unwrap_or_default()
        .to_string()
}

/// Banner image for a detail page: hero image first, largest tier first.
pub fn resolve_hero_image<R: CardSource + ?Sized>(resource: &R) -> Option<(&ImageAsset, &str)> {
    let sources = [
        resource.legacy_hero_image(),
        resource.card().and_then(|c| c.image.as_ref()),
        resource.legacy_card_image(),
    ];
    sources.into_iter().flatten().find_map(|image| {
        HERO_TIER_ORDER
            .iter()
            .find_map(|t| image.tier(*t))
            .map(|url| (image, url))
    })
}

pub fn resolve_hero_image_url<R: CardSource + ?Sized>(resource: &R, fallback: &str) -> String {
    resolve_hero_image(resource)
        .map(|(_, url)| url.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Gallery entry ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub key: String,
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// Legacy gallery images that resolve to a URL; the rest are skipped.
pub fn resolve_gallery<R: CardSource + ?Sized>(resource: &R) -> Vec<GalleryImage> {
    let title = resource.display_title().unwrap_or_default();
    resource
        .legacy_gallery()
        .iter()
        .enumerate()
        .filter_map(|(index, image)| {
            let url = image.best_url()?;
            Some(GalleryImage {
                key: image
                    .id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| format!("gallery-{}", index)),
                url: url.to_string(),
                alt: image.alt_text().unwrap_or(title).to_string(),
                caption: image
                    .caption
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::c001_tour_package::aggregate::TourPackage;
    use contracts::domain::common::CardBlock;

    const FALLBACK: &str = "/static/images/placeholder-landscape.jpg";

    fn image(medium: Option<&str>, small: Option<&str>, url: Option<&str>) -> ImageAsset {
        ImageAsset {
            medium: medium.map(String::from),
            small: small.map(String::from),
            url: url.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_medium_beats_legacy() {
        let tour = TourPackage {
            card: Some(CardBlock {
                image: Some(image(Some("A"), None, None)),
                ..Default::default()
            }),
            card_image: Some(image(Some("B"), None, None)),
            hero_image: Some(image(Some("C"), None, None)),
            ..Default::default()
        };
        assert_eq!(resolve_image_url(&tour, FALLBACK), "A");
        assert_eq!(resolve_image_url(&tour, FALLBACK), "A");
    }

    #[test]
    fn test_tier_order_within_image() {
        let tour = TourPackage {
            card_image: Some(ImageAsset {
                small: Some("small.jpg".into()),
                large: Some("large.jpg".into()),
                url: Some("base.jpg".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(resolve_image_url(&tour, FALLBACK), "small.jpg");
    }

    #[test]
    fn test_blank_card_image_falls_through_to_hero() {
        let tour = TourPackage {
            card: Some(CardBlock {
                image: Some(image(Some(""), Some(""), Some(""))),
                ..Default::default()
            }),
            card_image: Some(ImageAsset::default()),
            hero_image: Some(image(None, None, Some("hero.jpg"))),
            ..Default::default()
        };
        assert_eq!(resolve_image_url(&tour, FALLBACK), "hero.jpg");
    }

    #[test]
    fn test_no_image_anywhere_yields_fallback() {
        let bare = TourPackage::default();
        assert_eq!(resolve_image_url(&bare, FALLBACK), FALLBACK);

        let empty_card = TourPackage {
            card: Some(CardBlock::default()),
            ..Default::default()
        };
        let url = resolve_image_url(&empty_card, FALLBACK);
        assert_eq!(url, FALLBACK);
        assert!(!url.is_empty());
    }

    #[test]
    fn test_alt_defaults_to_title() {
        let mut tour = TourPackage {
            title: Some("Serengeti Migration".into()),
            card_image: Some(image(Some("m.jpg"), None, None)),
            ..Default::default()
        };
        assert_eq!(resolve_image_alt(&tour), "Serengeti Migration");

        tour.card_image.as_mut().unwrap().alt = Some("Wildebeest crossing".into());
        assert_eq!(resolve_image_alt(&tour), "Wildebeest crossing");

        assert_eq!(resolve_image_alt(&TourPackage::default()), "");
    }

    #[test]
    fn test_hero_prefers_large_hero() {
        let tour = TourPackage {
            card: Some(CardBlock {
                image: Some(image(Some("card-m.jpg"), None, None)),
                ..Default::default()
            }),
            hero_image: Some(ImageAsset {
                medium: Some("hero-m.jpg".into()),
                large: Some("hero-l.jpg".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(resolve_hero_image_url(&tour, FALLBACK), "hero-l.jpg");
        assert_eq!(resolve_hero_image_url(&TourPackage::default(), FALLBACK), FALLBACK);
    }

    #[test]
    fn test_gallery_skips_unusable_images() {
        let tour = TourPackage {
            title: Some("Atacama".into()),
            gallery_images: vec![
                image(None, Some("g1.jpg"), None),
                ImageAsset::default(),
                ImageAsset {
                    caption: Some("  ".into()),
                    alt: Some("Salt flats".into()),
                    url: Some("g3.jpg".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let gallery = resolve_gallery(&tour);
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[0].alt, "Atacama");
        assert_eq!(gallery[0].key, "gallery-0");
        assert_eq!(gallery[1].url, "g3.jpg");
        assert_eq!(gallery[1].alt, "Salt flats");
        assert_eq!(gallery[1].caption, None);
    }
}
