use contracts::domain::c001_tour_package::aggregate::TourPackage;
use contracts::domain::common::{CardSource, CmsId};

use crate::shared::adapters::{
    resolve_display_tags, resolve_duration_label, resolve_image, resolve_image_alt,
    resolve_image_url, resolve_price_label, summarize_rating, RatingSummary,
};
use crate::shared::components::FocalPoint;
use crate::shared::config::SiteConfig;

/// Listing card for a tour package or experience.
#[derive(Debug, Clone, PartialEq)]
pub struct TourCardView {
    pub key: String,
    pub title: String,
    pub summary: String,
    pub destination: Option<String>,
    pub image_url: String,
    pub image_alt: String,
    pub image_focal: Option<FocalPoint>,
    pub price_label: String,
    pub duration_label: String,
    pub rating: Option<RatingSummary>,
    pub tags: Vec<String>,
    pub featured: bool,
    /// Detail page link; `None` for records without a slug.
    pub href: Option<String>,
}

/// Record fields that are not part of [`CardSource`].
pub struct CardIdentity<'a> {
    pub id: Option<&'a CmsId>,
    pub slug: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub description: Option<&'a str>,
    pub destination: Option<&'a str>,
    pub duration_days: Option<u32>,
    pub featured: Option<bool>,
    /// Route prefix of the detail page, e.g. `/tours`.
    pub route: &'static str,
}

impl TourCardView {
    pub fn from_raw(tour: &TourPackage, config: &SiteConfig) -> Self {
        Self::from_source(
            tour,
            CardIdentity {
                id: tour.id.as_ref(),
                slug: tour.slug.as_deref(),
                summary: tour.summary.as_deref(),
                description: tour.description.as_deref(),
                destination: tour.destination.as_deref(),
                duration_days: tour.duration_days,
                featured: tour.featured,
                route: "/tours",
            },
            config,
        )
    }

    pub fn from_source<R: CardSource + ?Sized>(
        resource: &R,
        identity: CardIdentity<'_>,
        config: &SiteConfig,
    ) -> Self {
        let slug = non_blank(identity.slug);
        let title = resource.display_title().unwrap_or_default().to_string();
        Self {
            key: identity
                .id
                .map(|id| id.to_string())
                .or_else(|| slug.map(str::to_string))
                .unwrap_or_else(|| title.clone()),
            summary: non_blank(identity.summary)
                .or_else(|| non_blank(identity.description))
                .unwrap_or_default()
                .to_string(),
            destination: non_blank(identity.destination).map(str::to_string),
            image_url: resolve_image_url(resource, &config.fallback_image_url),
            image_alt: resolve_image_alt(resource),
            image_focal: resolve_image(resource)
                .and_then(|(image, _)| image.focal_point)
                .map(FocalPoint::from),
            price_label: resolve_price_label(resource),
            duration_label: resolve_duration_label(resource, identity.duration_days),
            rating: summarize_rating(resource.reviews(), config.placeholder_rating),
            tags: resolve_display_tags(resource, config.max_card_tags),
            featured: identity.featured.unwrap_or(false),
            href: slug.map(|s| format!("{}/{}", identity.route, s)),
            title,
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
