use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::domain::c003_blog_post::view_model::BlogPostView;
use crate::shared::components::AdaptiveImage;
use crate::shared::config::use_site_config;

#[component]
pub fn JournalCard(post: BlogPostView) -> impl IntoView {
    let config = use_site_config();
    let byline = post.byline();
    let body = view! {
        <AdaptiveImage
            src=post.image_url
            alt=post.image_alt
            fallback_src=config.fallback_image_url.clone()
            class="journal-card__image"
        />
        <div class="journal-card__body">
            <div class="journal-card__tags">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! {
                        <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>{tag}</Badge>
                    })
                    .collect_view()}
            </div>
            <h3 class="journal-card__title">{post.title}</h3>
            {byline.map(|b| view! { <p class="journal-card__byline">{b}</p> })}
            {(!post.summary.is_empty())
                .then(|| view! { <p class="journal-card__summary">{post.summary}</p> })}
        </div>
    };

    match post.href {
        Some(href) => view! { <a class="journal-card" href=href>{body}</a> }.into_any(),
        None => view! { <article class="journal-card">{body}</article> }.into_any(),
    }
}
