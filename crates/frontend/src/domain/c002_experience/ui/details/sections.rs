use leptos::prelude::*;

use crate::domain::c002_experience::view_model::{ExperienceView, ItineraryDayView, ReviewView};
use crate::shared::adapters::GalleryImage;
use crate::shared::components::{AdaptiveImage, StarRow};

/// In-page sections of the detail page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSection {
    Overview,
    Itinerary,
    Inclusions,
    Gallery,
    Reviews,
}

impl DetailSection {
    pub const ALL: [DetailSection; 5] = [
        DetailSection::Overview,
        DetailSection::Itinerary,
        DetailSection::Inclusions,
        DetailSection::Gallery,
        DetailSection::Reviews,
    ];

    /// DOM id of the section element; also the scroll-spy key.
    pub fn id(&self) -> &'static str {
        match self {
            DetailSection::Overview => "overview",
            DetailSection::Itinerary => "itinerary",
            DetailSection::Inclusions => "inclusions",
            DetailSection::Gallery => "gallery",
            DetailSection::Reviews => "reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailSection::Overview => "Overview",
            DetailSection::Itinerary => "Itinerary",
            DetailSection::Inclusions => "What's Included",
            DetailSection::Gallery => "Gallery",
            DetailSection::Reviews => "Reviews",
        }
    }

    fn has_content(&self, view: &ExperienceView) -> bool {
        match self {
            DetailSection::Overview => !view.body.is_empty() || !view.highlights.is_empty(),
            DetailSection::Itinerary => !view.itinerary.is_empty(),
            DetailSection::Inclusions => {
                !view.inclusions.is_empty() || !view.exclusions.is_empty()
            }
            DetailSection::Gallery => !view.gallery.is_empty(),
            DetailSection::Reviews => !view.reviews.is_empty(),
        }
    }
}

/// Sections that have something to show. Overview is always kept so the
/// navigation never ends up empty.
pub fn present_sections(view: &ExperienceView) -> Vec<DetailSection> {
    DetailSection::ALL
        .into_iter()
        .filter(|s| *s == DetailSection::Overview || s.has_content(view))
        .collect()
}

/// Body of one section.
pub fn section_content(section: DetailSection, view: &ExperienceView) -> AnyView {
    match section {
        DetailSection::Overview => {
            view! { <Overview body=view.body.clone() highlights=view.highlights.clone() /> }
                .into_any()
        }
        DetailSection::Itinerary => {
            view! { <Itinerary days=view.itinerary.clone() /> }.into_any()
        }
        DetailSection::Inclusions => view! {
            <Inclusions included=view.inclusions.clone() excluded=view.exclusions.clone() />
        }
        .into_any(),
        DetailSection::Gallery => view! { <Gallery images=view.gallery.clone() /> }.into_any(),
        DetailSection::Reviews => view! { <Reviews reviews=view.reviews.clone() /> }.into_any(),
    }
}

#[component]
fn Overview(body: String, highlights: Vec<String>) -> impl IntoView {
    view! {
        // Body is CMS rich text, sanitised at the source.
        <div class="detail-overview__body" inner_html=body></div>
        {(!highlights.is_empty()).then(|| view! {
            <ul class="detail-overview__highlights">
                {highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
        })}
    }
}

#[component]
fn Itinerary(days: Vec<ItineraryDayView>) -> impl IntoView {
    view! {
        <ol class="detail-itinerary">
            {days
                .into_iter()
                .map(|day| view! {
                    <li class="detail-itinerary__day">
                        <span class="detail-itinerary__label">{day.label}</span>
                        <h3 class="detail-itinerary__title">{day.title}</h3>
                        {day.location.map(|l| view! { <p class="detail-itinerary__location">{l}</p> })}
                        {(!day.description.is_empty())
                            .then(|| view! { <p class="detail-itinerary__text">{day.description}</p> })}
                    </li>
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn Inclusions(included: Vec<String>, excluded: Vec<String>) -> impl IntoView {
    let list = |title: &'static str, class: &'static str, items: Vec<String>| {
        (!items.is_empty()).then(|| view! {
            <div class=class>
                <h3>{title}</h3>
                <ul>{items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}</ul>
            </div>
        })
    };
    view! {
        <div class="detail-inclusions">
            {list("Included", "detail-inclusions__in", included)}
            {list("Not included", "detail-inclusions__out", excluded)}
        </div>
    }
}

#[component]
fn Gallery(images: Vec<GalleryImage>) -> impl IntoView {
    view! {
        <div class="detail-gallery">
            {images
                .into_iter()
                .map(|image| view! {
                    <figure class="detail-gallery__item">
                        <AdaptiveImage src=image.url alt=image.alt class="detail-gallery__image" />
                        {image.caption.map(|c| view! { <figcaption>{c}</figcaption> })}
                    </figure>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Reviews(reviews: Vec<ReviewView>) -> impl IntoView {
    view! {
        <div class="detail-reviews">
            {reviews
                .into_iter()
                .map(|review| view! {
                    <blockquote class="detail-reviews__item">
                        {(review.score > 0).then(|| view! { <StarRow score=review.score /> })}
                        {(!review.comment.is_empty()).then(|| view! { <p>{review.comment}</p> })}
                        <cite>{review.author}</cite>
                    </blockquote>
                })
                .collect_view()}
        </div>
    }
}
