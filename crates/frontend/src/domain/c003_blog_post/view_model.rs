use contracts::domain::c003_blog_post::aggregate::BlogPost;
use contracts::domain::common::CardSource;

use crate::domain::c001_tour_package::view_model::non_blank;
use crate::shared::adapters::{
    resolve_display_tags, resolve_hero_image_url, resolve_image_alt, resolve_image_url,
};
use crate::shared::config::SiteConfig;
use crate::shared::date_utils::format_long_date;

/// Journal post as shown in lists and on its own page.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostView {
    pub key: String,
    pub title: String,
    pub summary: String,
    pub image_url: String,
    pub hero_image_url: String,
    pub image_alt: String,
    pub author: Option<String>,
    /// "March 15, 2024"; `None` when the date is missing or unreadable.
    pub published_label: Option<String>,
    pub tags: Vec<String>,
    pub body: String,
    pub href: Option<String>,
}

impl BlogPostView {
    pub fn from_raw(post: &BlogPost, config: &SiteConfig) -> Self {
        let slug = non_blank(post.slug.as_deref());
        let title = post.display_title().unwrap_or("Untitled").to_string();
        Self {
            key: post
                .id
                .as_ref()
                .map(|id| id.to_string())
                .or_else(|| slug.map(str::to_string))
                .unwrap_or_else(|| title.clone()),
            summary: non_blank(post.summary.as_deref())
                .unwrap_or_default()
                .to_string(),
            image_url: resolve_image_url(post, &config.fallback_image_url),
            hero_image_url: resolve_hero_image_url(post, &config.fallback_image_url),
            image_alt: resolve_image_alt(post),
            author: non_blank(post.author.as_deref()).map(str::to_string),
            published_label: post.published_at.as_deref().and_then(format_long_date),
            tags: resolve_display_tags(post, config.max_card_tags),
            body: non_blank(post.body.as_deref()).unwrap_or_default().to_string(),
            href: slug.map(|s| format!("/journal/{}", s)),
            title,
        }
    }

    /// "By Jane Doe · March 15, 2024", or whichever half exists.
    pub fn byline(&self) -> Option<String> {
        match (&self.author, &self.published_label) {
            (Some(author), Some(date)) => Some(format!("By {} · {}", author, date)),
            (Some(author), None) => Some(format!("By {}", author)),
            (None, Some(date)) => Some(date.clone()),
            (None, None) => None,
        }
    }
}

/// Newest first; posts without a readable date go last in CMS order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| published_key(b).cmp(&published_key(a)));
}

fn published_key(post: &BlogPost) -> Option<chrono::NaiveDate> {
    let value = post.published_at.as_deref()?.trim();
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(json: &str) -> BlogPost {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_post_view() {
        let view = BlogPostView::from_raw(
            &post(
                r#"{
                    "id": 4,
                    "slug": "packing-for-the-okavango",
                    "title": "Packing for the Okavango",
                    "author": " Amara Diallo ",
                    "publishedAt": "2024-03-15T08:00:00Z",
                    "cardImage": {"medium": "pack-m.jpg"},
                    "tags": ["Guides", "guides", "Botswana", "Gear"]
                }"#,
            ),
            &SiteConfig::default(),
        );
        assert_eq!(view.key, "4");
        assert_eq!(view.href.as_deref(), Some("/journal/packing-for-the-okavango"));
        assert_eq!(view.image_url, "pack-m.jpg");
        assert_eq!(view.image_alt, "Packing for the Okavango");
        assert_eq!(view.published_label.as_deref(), Some("March 15, 2024"));
        assert_eq!(view.tags, vec!["Guides".to_string(), "Botswana".to_string()]);
        assert_eq!(
            view.byline().as_deref(),
            Some("By Amara Diallo · March 15, 2024")
        );
    }

    #[test]
    fn test_bad_date_is_dropped() {
        let view = BlogPostView::from_raw(
            &post(r#"{"title": "Notes", "publishedAt": "soon"}"#),
            &SiteConfig::default(),
        );
        assert_eq!(view.published_label, None);
        assert_eq!(view.byline(), None);
        assert_eq!(view.href, None);
        assert_eq!(view.image_url, SiteConfig::default().fallback_image_url);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post(r#"{"title": "a", "publishedAt": "2023-01-02"}"#),
            post(r#"{"title": "b"}"#),
            post(r#"{"title": "c", "publishedAt": "2024-06-01T10:00:00Z"}"#),
        ];
        sort_newest_first(&mut posts);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }
}
