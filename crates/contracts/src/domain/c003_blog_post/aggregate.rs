use serde::{Deserialize, Serialize};

use crate::domain::common::de::null_as_default;
use crate::domain::common::{CardBlock, CardSource, CmsId, ImageAsset};

/// Journal article from `/api/blog-posts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Option<CmsId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    /// RFC 3339 timestamp, kept as text so a malformed date does not reject the post.
    pub published_at: Option<String>,

    pub card: Option<CardBlock>,
    pub card_image: Option<ImageAsset>,
    pub hero_image: Option<ImageAsset>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl CardSource for BlogPost {
    fn display_title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn card(&self) -> Option<&CardBlock> {
        self.card.as_ref()
    }

    fn legacy_card_image(&self) -> Option<&ImageAsset> {
        self.card_image.as_ref()
    }

    fn legacy_hero_image(&self) -> Option<&ImageAsset> {
        self.hero_image.as_ref()
    }

    fn legacy_tags(&self) -> &[String] {
        &self.tags
    }
}
