use leptos::prelude::*;

use crate::shared::adapters::{clamp_star_breakdown, RatingSummary};
use crate::shared::theme::use_theme;

/// Five-star row for a score on the 0–50 scale (rating×10).
#[component]
pub fn StarRow(score: i32) -> impl IntoView {
    let stars = clamp_star_breakdown(score);
    let color = use_theme().palette.star;

    let full = (0..stars.full).map(|_| view! { <span class="star star--full">"★"</span> });
    let half = stars
        .half
        .then(|| view! { <span class="star star--half">"★"</span> });
    let empty = (0..stars.empty).map(|_| view! { <span class="star star--empty">"☆"</span> });

    view! {
        <span class="star-row" style=format!("color: {};", color) aria-hidden="true">
            {full.collect_view()}
            {half}
            {empty.collect_view()}
        </span>
    }
}

/// Stars, numeric rating and review count.
#[component]
pub fn RatingBadge(rating: RatingSummary) -> impl IntoView {
    let score = (rating.value * 10.0).round() as i32;
    let count_label = if rating.is_placeholder {
        "New".to_string()
    } else if rating.review_count == 1 {
        "1 review".to_string()
    } else {
        format!("{} reviews", rating.review_count)
    };

    view! {
        <span class="rating-badge" title=format!("{} out of 5", rating.display())>
            <StarRow score=score />
            <span class="rating-badge__value">{rating.display()}</span>
            <span class="rating-badge__count">{count_label}</span>
        </span>
    }
}
