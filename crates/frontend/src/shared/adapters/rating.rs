//! Rating aggregation and star rendering helpers.

use contracts::domain::common::Review;

/// Upper bound of the star scale.
pub const MAX_STARS: u8 = 5;

/// Mean of all numeric review ratings, unrounded.
///
/// `None` when there is nothing to average (no reviews, or no review with a
/// numeric rating). Ratings outside 0–5 are clamped first.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    let ratings: Vec<f64> = reviews
        .iter()
        .filter_map(|r| r.rating)
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, f64::from(MAX_STARS)))
        .collect();
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

/// Rating as shown on cards and detail pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// 0–5.
    pub value: f64,
    pub review_count: usize,
    /// `value` is the configured stand-in for an unreviewed record.
    pub is_placeholder: bool,
}

impl RatingSummary {
    /// One decimal place, e.g. "4.7".
    pub fn display(&self) -> String {
        format!("{:.1}", self.value)
    }

    /// Star breakdown on the 0–50 scale.
    pub fn stars(&self) -> StarBreakdown {
        clamp_star_breakdown((self.value * 10.0).round() as i32)
    }
}

/// Build the rating shown for `reviews`.
///
/// Without reviews the result is `placeholder` marked as such, or `None` when
/// no placeholder is configured.
pub fn summarize_rating(reviews: &[Review], placeholder: Option<f64>) -> Option<RatingSummary> {
    match average_rating(reviews) {
        Some(value) => Some(RatingSummary {
            value,
            review_count: reviews.iter().filter(|r| r.rating.is_some()).count(),
            is_placeholder: false,
        }),
        None => placeholder.map(|value| RatingSummary {
            value: value.clamp(0.0, f64::from(MAX_STARS)),
            review_count: 0,
            is_placeholder: true,
        }),
    }
}

/// Full, half and empty stars for a five-star row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

/// Decompose a rating expressed as rating×10 (50 = five stars).
///
/// The score is clamped to 0–50. A half star is drawn when the remainder is
/// at least 5 and the row is not already full.
pub fn clamp_star_breakdown(score: i32) -> StarBreakdown {
    let clamped = score.clamp(0, i32::from(MAX_STARS) * 10);
    let full = (clamped / 10) as u8;
    let half = clamped % 10 >= 5 && full < MAX_STARS;
    let empty = MAX_STARS - full - u8::from(half);
    StarBreakdown { full, half, empty }
}
