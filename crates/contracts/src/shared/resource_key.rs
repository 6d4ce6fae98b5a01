use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical identity of a content request.
///
/// Two requests with equal keys are the same request: they share one
/// in-flight fetch and one cached result on the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    /// Collection path, e.g. `/api/experiences`.
    pub path: String,
    /// Record identifier (slug) appended as a path segment.
    pub id: Option<String>,
    /// Fixed query string without the leading `?`.
    pub query: Option<String>,
}

impl ResourceKey {
    pub fn collection(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: None,
            query: None,
        }
    }

    pub fn record(path: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: Some(id.into()),
            query: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn featured_tours() -> Self {
        Self::collection("/api/tour-packages").with_query("featured=true")
    }

    pub fn tour_packages() -> Self {
        Self::collection("/api/tour-packages")
    }

    pub fn tour_package_by_slug(slug: &str) -> Self {
        Self::record("/api/tour-packages", slug)
    }

    pub fn experiences() -> Self {
        Self::collection("/api/experiences")
    }

    pub fn experience_by_slug(slug: &str) -> Self {
        Self::record("/api/experiences", slug)
    }

    pub fn blog_posts() -> Self {
        Self::collection("/api/blog-posts")
    }

    pub fn blog_post_by_slug(slug: &str) -> Self {
        Self::record("/api/blog-posts", slug)
    }

    /// Request path including the encoded id segment and query string.
    pub fn to_path(&self) -> String {
        let mut path = self.path.trim_end_matches('/').to_string();
        if let Some(id) = &self.id {
            path.push('/');
            path.push_str(&urlencoding::encode(id));
        }
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            path.push('?');
            path.push_str(query);
        }
        path
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
