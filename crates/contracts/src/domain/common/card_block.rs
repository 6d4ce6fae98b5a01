use serde::{Deserialize, Serialize};

use super::ImageAsset;

/// Nested "card" component of the current CMS schema.
///
/// Resources migrated to the new content model carry their listing data here;
/// older ones still use flat top-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardBlock {
    pub image: Option<ImageAsset>,
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub tags: Vec<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub duration: Option<String>,
}
