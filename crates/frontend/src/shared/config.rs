//! Site-wide settings.
//!
//! Built once in [`crate::app::App`], handed to the component tree through
//! context and never mutated afterwards.

use leptos::prelude::*;

use crate::shared::api_utils::api_base;
use crate::shared::theme::SiteTheme;

/// Shown when a record has no usable image in any known schema path.
pub const FALLBACK_IMAGE_URL: &str = "/static/images/placeholder-landscape.jpg";

/// Cached content is reused for this long before it is fetched again.
pub const DEFAULT_STALE_TIME_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Tags shown on a listing card.
pub const DEFAULT_MAX_CARD_TAGS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Content API origin without trailing slash; empty means same origin.
    pub api_base: String,
    pub stale_time_ms: f64,
    pub fallback_image_url: String,
    pub max_card_tags: usize,
    /// Rating displayed for records without reviews, `None` to show no rating.
    pub placeholder_rating: Option<f64>,
    pub theme: SiteTheme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            stale_time_ms: DEFAULT_STALE_TIME_MS,
            fallback_image_url: FALLBACK_IMAGE_URL.to_string(),
            max_card_tags: DEFAULT_MAX_CARD_TAGS,
            placeholder_rating: Some(5.0),
            theme: SiteTheme::default(),
        }
    }
}

impl SiteConfig {
    /// Configuration for the running page.
    pub fn from_env() -> Self {
        let config = Self {
            api_base: api_base(),
            ..Self::default()
        };
        log::debug!("site config: api_base='{}'", config.api_base);
        config
    }
}

/// Hook to read the site configuration.
pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}
