use serde::{Deserialize, Serialize};

/// Guest review attached to a tour or experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    /// Star rating on a 0–5 scale.
    pub rating: Option<f64>,
    pub author: Option<String>,
    pub comment: Option<String>,
    pub travel_date: Option<String>,
}
