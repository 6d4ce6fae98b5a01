use contracts::domain::c001_tour_package::aggregate::TourPackage;
use contracts::domain::common::Collection;
use contracts::shared::ResourceKey;
use leptos::prelude::*;

use super::card::TourCard;
use crate::domain::c001_tour_package::view_model::TourCardView;
use crate::shared::components::{Carousel, QueryView};
use crate::shared::config::use_site_config;
use crate::shared::content::use_content;

/// Shown in the featured row when the CMS has no featured tours.
pub const EMPTY_FEATURED_MESSAGE: &str = "New journeys are being prepared. Check back soon.";

/// What a carousel row displays once its content has loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    Cards(Vec<TourCardView>),
    Empty(&'static str),
}

impl RowContent {
    pub fn new(cards: Vec<TourCardView>, empty_message: &'static str) -> Self {
        if cards.is_empty() {
            RowContent::Empty(empty_message)
        } else {
            RowContent::Cards(cards)
        }
    }
}

/// Cards of a carousel row, or `empty_message` when there are none.
pub fn render_cards(cards: Vec<TourCardView>, empty_message: &'static str) -> AnyView {
    match RowContent::new(cards, empty_message) {
        RowContent::Empty(message) => {
            view! { <p class="carousel__empty">{message}</p> }.into_any()
        }
        RowContent::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <TourCard card=card /> })
            .collect_view()
            .into_any(),
    }
}

/// Home page row of featured tour packages.
#[component]
pub fn FeaturedTours() -> impl IntoView {
    let config = StoredValue::new(use_site_config());
    let tours = use_content::<Collection<TourPackage>>(|| Some(ResourceKey::featured_tours()));

    let cards = Memo::new(move |_| {
        tours.get().map(|list| {
            config.with_value(|config| {
                list.iter()
                    .map(|tour| TourCardView::from_raw(tour, config))
                    .collect::<Vec<_>>()
            })
        })
    });
    let item_count = Signal::derive(move || cards.with(|c| c.ready().map_or(0, Vec::len)));

    view! {
        <Carousel
            title="Featured Journeys"
            subtitle="Private itineraries our travel designers return to again and again"
            item_count=item_count
        >
            <QueryView
                state=cards
                render={|cards: Vec<TourCardView>| {
                    render_cards(cards, EMPTY_FEATURED_MESSAGE)
                }}
            />
        </Carousel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::SiteConfig;

    #[test]
    fn test_row_content() {
        assert_eq!(
            RowContent::new(Vec::new(), EMPTY_FEATURED_MESSAGE),
            RowContent::Empty(EMPTY_FEATURED_MESSAGE)
        );

        let list: Collection<TourPackage> =
            serde_json::from_str(r#"{"data": [{"title": "Namib Dunes", "featured": true}]}"#)
                .unwrap();
        let cards: Vec<_> = list
            .iter()
            .map(|tour| TourCardView::from_raw(tour, &SiteConfig::default()))
            .collect();
        match RowContent::new(cards, EMPTY_FEATURED_MESSAGE) {
            RowContent::Cards(cards) => {
                assert_eq!(cards.len(), 1);
                assert!(cards[0].featured);
            }
            RowContent::Empty(_) => panic!("featured tour was dropped"),
        }
    }
}
