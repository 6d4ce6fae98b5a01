use contracts::domain::c002_experience::aggregate::{Experience, ItineraryDay};
use contracts::domain::common::Review;

use crate::domain::c001_tour_package::view_model::{non_blank, CardIdentity, TourCardView};
use crate::shared::adapters::{resolve_gallery, resolve_hero_image, GalleryImage};
use crate::shared::components::FocalPoint;
use crate::shared::config::SiteConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDayView {
    pub label: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub author: String,
    pub comment: String,
    /// 0–50 scale for the star row.
    pub score: i32,
}

/// Everything the experience detail page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceView {
    pub card: TourCardView,
    pub hero_image_url: String,
    pub hero_focal: Option<FocalPoint>,
    pub gallery: Vec<GalleryImage>,
    /// Rich-text body, falls back to the plain description.
    pub body: String,
    pub highlights: Vec<String>,
    pub itinerary: Vec<ItineraryDayView>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub reviews: Vec<ReviewView>,
}

impl ExperienceView {
    pub fn card_from_raw(experience: &Experience, config: &SiteConfig) -> TourCardView {
        TourCardView::from_source(
            experience,
            CardIdentity {
                id: experience.id.as_ref(),
                slug: experience.slug.as_deref(),
                summary: experience.summary.as_deref(),
                description: experience.description.as_deref(),
                destination: experience.destination.as_deref(),
                duration_days: experience.duration_days,
                featured: experience.featured,
                route: "/experiences",
            },
            config,
        )
    }

    pub fn from_raw(experience: &Experience, config: &SiteConfig) -> Self {
        let hero = resolve_hero_image(experience);
        Self {
            card: Self::card_from_raw(experience, config),
            hero_image_url: hero
                .map(|(_, url)| url.to_string())
                .unwrap_or_else(|| config.fallback_image_url.clone()),
            hero_focal: hero
                .and_then(|(image, _)| image.focal_point)
                .map(FocalPoint::from),
            gallery: resolve_gallery(experience),
            body: non_blank(experience.body.as_deref())
                .or_else(|| non_blank(experience.description.as_deref()))
                .unwrap_or_default()
                .to_string(),
            highlights: clean_list(&experience.highlights),
            itinerary: itinerary_days(&experience.itinerary),
            inclusions: clean_list(&experience.inclusions),
            exclusions: clean_list(&experience.exclusions),
            reviews: review_views(&experience.reviews),
        }
    }
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Days in CMS order; unnumbered days are labelled by position.
fn itinerary_days(days: &[ItineraryDay]) -> Vec<ItineraryDayView> {
    days.iter()
        .enumerate()
        .map(|(index, day)| ItineraryDayView {
            label: format!("Day {}", day.day.unwrap_or(index as u32 + 1)),
            title: non_blank(day.title.as_deref()).unwrap_or_default().to_string(),
            description: non_blank(day.description.as_deref())
                .unwrap_or_default()
                .to_string(),
            location: non_blank(day.location.as_deref()).map(str::to_string),
        })
        .collect()
}

/// Reviews with a rating or a comment; anonymous ones are credited to "Guest".
fn review_views(reviews: &[Review]) -> Vec<ReviewView> {
    reviews
        .iter()
        .filter(|r| r.rating.is_some() || non_blank(r.comment.as_deref()).is_some())
        .map(|r| ReviewView {
            author: non_blank(r.author.as_deref()).unwrap_or("Guest").to_string(),
            comment: non_blank(r.comment.as_deref()).unwrap_or_default().to_string(),
            score: r
                .rating
                .filter(|v| v.is_finite())
                .map_or(0, |v| (v * 10.0).round() as i32),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ImageAsset;

    fn experience() -> Experience {
        serde_json::from_str(
            r#"{
                "id": 8,
                "slug": "okavango-by-mokoro",
                "title": "Okavango by Mokoro",
                "description": "Glide through the delta.",
                "heroImage": {"large": "hero-l.jpg", "medium": "hero-m.jpg"},
                "galleryImages": [{"url": "g1.jpg", "caption": "Sunrise"}],
                "highlights": ["Mokoro safari", " "],
                "itinerary": [
                    {"title": "Arrival in Maun", "location": "Maun"},
                    {"day": 3, "title": "Into the delta"}
                ],
                "inclusions": ["Private guide"],
                "reviews": [
                    {"rating": 4.5, "comment": "Unforgettable", "author": "M. Ortiz"},
                    {"comment": "  "},
                    {"comment": "Wonderful hosts"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_detail_view() {
        let view = ExperienceView::from_raw(&experience(), &SiteConfig::default());
        assert_eq!(view.card.href.as_deref(), Some("/experiences/okavango-by-mokoro"));
        assert_eq!(view.card.image_url, "hero-m.jpg");
        assert_eq!(view.hero_image_url, "hero-l.jpg");
        assert_eq!(view.body, "Glide through the delta.");
        assert_eq!(view.highlights, vec!["Mokoro safari".to_string()]);
        assert_eq!(view.gallery.len(), 1);
        assert_eq!(view.gallery[0].caption.as_deref(), Some("Sunrise"));
        assert!(view.exclusions.is_empty());
    }

    #[test]
    fn test_itinerary_labels() {
        let view = ExperienceView::from_raw(&experience(), &SiteConfig::default());
        assert_eq!(view.itinerary[0].label, "Day 1");
        assert_eq!(view.itinerary[0].location.as_deref(), Some("Maun"));
        assert_eq!(view.itinerary[1].label, "Day 3");
        assert_eq!(view.itinerary[1].description, "");
    }

    #[test]
    fn test_reviews() {
        let view = ExperienceView::from_raw(&experience(), &SiteConfig::default());
        assert_eq!(view.reviews.len(), 2);
        assert_eq!(view.reviews[0].score, 45);
        assert_eq!(view.reviews[1].author, "Guest");
        assert_eq!(view.reviews[1].score, 0);

        let rating = view.card.rating.unwrap();
        assert_eq!(rating.review_count, 1);
        assert_eq!(rating.display(), "4.5");
    }

    #[test]
    fn test_hero_falls_back_to_card_image() {
        let experience = Experience {
            card_image: Some(ImageAsset {
                small: Some("card-s.jpg".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let view = ExperienceView::from_raw(&experience, &SiteConfig::default());
        assert_eq!(view.hero_image_url, "card-s.jpg");
    }
}
