use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::domain::c001_tour_package::view_model::TourCardView;
use crate::shared::adapters::price::PRICE_ON_REQUEST;
use crate::shared::components::{AdaptiveImage, RatingBadge};
use crate::shared::config::use_site_config;

/// Listing card used in carousels and grids.
#[component]
pub fn TourCard(card: TourCardView) -> impl IntoView {
    let config = use_site_config();
    let TourCardView {
        title,
        summary,
        destination,
        image_url,
        image_alt,
        image_focal,
        price_label,
        duration_label,
        rating,
        tags,
        featured,
        href,
        ..
    } = card;

    let price_from = (price_label != PRICE_ON_REQUEST).then_some("From ");

    let body = view! {
        <div class="tour-card__media">
            <AdaptiveImage
                src=image_url
                alt=image_alt
                focal_point=image_focal.unwrap_or_default()
                fallback_src=config.fallback_image_url.clone()
                class="tour-card__image"
            />
            {featured.then(|| view! {
                <span class="tour-card__ribbon">
                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>"Featured"</Badge>
                </span>
            })}
        </div>
        <div class="tour-card__body">
            {destination.map(|d| view! { <p class="tour-card__destination">{d}</p> })}
            <h3 class="tour-card__title">{title}</h3>
            {(!summary.is_empty()).then(|| view! { <p class="tour-card__summary">{summary}</p> })}
            <div class="tour-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{tag}</Badge>
                    })
                    .collect_view()}
            </div>
            <div class="tour-card__meta">
                {rating.map(|r| view! { <RatingBadge rating=r /> })}
                {(!duration_label.is_empty())
                    .then(|| view! { <span class="tour-card__duration">{duration_label}</span> })}
            </div>
            <p class="tour-card__price">
                {price_from.map(|from| view! { <span class="tour-card__price-from">{from}</span> })}
                {price_label}
            </p>
        </div>
    };

    match href {
        Some(href) => view! { <a class="tour-card" href=href>{body}</a> }.into_any(),
        None => view! { <article class="tour-card">{body}</article> }.into_any(),
    }
}
