use contracts::domain::c002_experience::aggregate::Experience;
use contracts::domain::common::Collection;
use contracts::shared::ResourceKey;
use leptos::prelude::*;

use crate::domain::c001_tour_package::ui::render_cards;
use crate::domain::c001_tour_package::view_model::TourCardView;
use crate::domain::c002_experience::view_model::ExperienceView;
use crate::shared::components::{Carousel, QueryView};
use crate::shared::config::{use_site_config, SiteConfig};
use crate::shared::content::use_content;

/// Shown when the CMS returns no experiences.
pub const EMPTY_EXPERIENCES_MESSAGE: &str =
    "Our signature experiences are being refreshed. Check back soon.";

fn experience_cards(list: &Collection<Experience>, config: &SiteConfig) -> Vec<TourCardView> {
    list.iter()
        .map(|e| ExperienceView::card_from_raw(e, config))
        .collect()
}

/// Carousel of curated experiences.
#[component]
pub fn ExperiencesRow() -> impl IntoView {
    let config = StoredValue::new(use_site_config());
    let experiences = use_content::<Collection<Experience>>(|| Some(ResourceKey::experiences()));

    let cards = Memo::new(move |_| {
        experiences
            .get()
            .map(|list| config.with_value(|config| experience_cards(&list, config)))
    });
    let item_count = Signal::derive(move || cards.with(|c| c.ready().map_or(0, Vec::len)));

    view! {
        <Carousel title="Signature Experiences" item_count=item_count>
            <QueryView
                state=cards
                render={|cards: Vec<TourCardView>| {
                    render_cards(cards, EMPTY_EXPERIENCES_MESSAGE)
                }}
            />
        </Carousel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::c001_tour_package::ui::RowContent;

    #[test]
    fn test_empty_collection_shows_message() {
        let config = SiteConfig::default();
        for payload in [r#"[]"#, r#"{"data": []}"#] {
            let list: Collection<Experience> = serde_json::from_str(payload).unwrap();
            let cards = experience_cards(&list, &config);
            assert_eq!(
                RowContent::new(cards, EMPTY_EXPERIENCES_MESSAGE),
                RowContent::Empty(EMPTY_EXPERIENCES_MESSAGE)
            );
        }
    }

    #[test]
    fn test_experiences_become_cards() {
        let list: Collection<Experience> =
            serde_json::from_str(r#"[{"slug": "kyoto-tea", "title": "Kyoto Tea Ceremony"}]"#)
                .unwrap();
        let cards = experience_cards(&list, &SiteConfig::default());
        assert_eq!(cards[0].href.as_deref(), Some("/experiences/kyoto-tea"));
        assert!(matches!(
            RowContent::new(cards, EMPTY_EXPERIENCES_MESSAGE),
            RowContent::Cards(c) if c.len() == 1
        ));
    }
}
