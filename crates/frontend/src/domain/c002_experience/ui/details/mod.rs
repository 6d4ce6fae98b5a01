//! Experience / tour package detail page.
//!
//! Both routes share one layout: hero banner, sticky section navigation
//! driven by the scroll-spy, then the sections that have content.

mod sections;

use contracts::domain::c002_experience::aggregate::Experience;
use contracts::shared::ResourceKey;
use leptos::html::Section;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::domain::c002_experience::view_model::ExperienceView;
use crate::shared::components::{AdaptiveImage, QueryView, RatingBadge, SectionNav};
use crate::shared::config::use_site_config;
use crate::shared::content::use_content;
use crate::shared::scroll::{use_scroll_spy, TieBreak};
pub use sections::{present_sections, section_content, DetailSection};

#[component]
pub fn ExperienceDetailsPage() -> impl IntoView {
    view! { <DetailsPage key_for=ResourceKey::experience_by_slug /> }
}

/// Tour packages carry the same detail fields as experiences.
#[component]
pub fn TourDetailsPage() -> impl IntoView {
    view! { <DetailsPage key_for=ResourceKey::tour_package_by_slug /> }
}

#[component]
fn DetailsPage(key_for: fn(&str) -> ResourceKey) -> impl IntoView {
    let params = use_params_map();
    let config = StoredValue::new(use_site_config());

    // Keyed by slug: navigating between detail pages swaps the key, and a
    // response for the previous slug never reaches this view.
    let experience = use_content::<Experience>(move || {
        params.with(|p| p.get("slug").filter(|s| !s.is_empty()).map(|s| key_for(&s)))
    });
    let detail = Memo::new(move |_| {
        experience
            .get()
            .map(|e| config.with_value(|config| ExperienceView::from_raw(&e, config)))
    });

    view! {
        <div class="detail-page">
            <QueryView
                state=detail
                render={|view: ExperienceView| view! { <DetailBody view=view /> }}
            />
        </div>
    }
}

#[component]
fn DetailBody(view: ExperienceView) -> impl IntoView {
    let config = use_site_config();
    let registered: Vec<(DetailSection, NodeRef<Section>)> = present_sections(&view)
        .into_iter()
        .map(|s| (s, NodeRef::new()))
        .collect();

    let spy = use_scroll_spy(
        registered
            .iter()
            .map(|(s, node)| (s.id().to_string(), *node))
            .collect(),
        TieBreak::default(),
    );
    let nav_items = registered
        .iter()
        .map(|(s, _)| (s.id().to_string(), s.label().to_string()))
        .collect::<Vec<_>>();

    let card = view.card.clone();
    let hero_focal = view.hero_focal.unwrap_or_default();
    let hero_url = view.hero_image_url.clone();

    let rendered_sections = registered
        .into_iter()
        .map(|(section, node)| {
            view! {
                <section id=section.id() class="detail-section" node_ref=node>
                    <h2 class="detail-section__title">{section.label()}</h2>
                    {section_content(section, &view)}
                </section>
            }
        })
        .collect_view();

    view! {
        <header class="detail-hero">
            <AdaptiveImage
                src=hero_url
                alt=card.image_alt
                focal_point=hero_focal
                fallback_src=config.fallback_image_url.clone()
                class="detail-hero__image"
            />
            <div class="detail-hero__overlay">
                {card.destination.map(|d| view! { <p class="detail-hero__destination">{d}</p> })}
                <h1 class="detail-hero__title">{card.title}</h1>
                <div class="detail-hero__meta">
                    {card.rating.map(|r| view! { <RatingBadge rating=r /> })}
                    {(!card.duration_label.is_empty())
                        .then(|| view! { <span>{card.duration_label}</span> })}
                    <span class="detail-hero__price">{card.price_label}</span>
                </div>
            </div>
        </header>
        <SectionNav spy=spy items=nav_items />
        <div class="detail-sections">{rendered_sections}</div>
    }
}
