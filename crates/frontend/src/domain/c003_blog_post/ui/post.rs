use contracts::domain::c003_blog_post::aggregate::BlogPost;
use contracts::shared::ResourceKey;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::domain::c003_blog_post::view_model::BlogPostView;
use crate::shared::components::{AdaptiveImage, QueryView};
use crate::shared::config::use_site_config;
use crate::shared::content::use_content;

#[component]
pub fn JournalPostPage() -> impl IntoView {
    let params = use_params_map();
    let config = StoredValue::new(use_site_config());
    let post = use_content::<BlogPost>(move || {
        params.with(|p| {
            p.get("slug")
                .filter(|s| !s.is_empty())
                .map(|s| ResourceKey::blog_post_by_slug(&s))
        })
    });
    let view_model = Memo::new(move |_| {
        post.get()
            .map(|p| config.with_value(|config| BlogPostView::from_raw(&p, config)))
    });

    view! {
        <article class="journal-post">
            <QueryView state=view_model render=render_post />
        </article>
    }
}

fn render_post(post: BlogPostView) -> impl IntoView {
    let fallback = use_site_config().fallback_image_url;
    let byline = post.byline();
    view! {
        <header class="journal-post__hero">
            <AdaptiveImage
                src=post.hero_image_url
                alt=post.image_alt
                fallback_src=fallback
                class="journal-post__image"
            />
            <h1 class="journal-post__title">{post.title}</h1>
            {byline.map(|b| view! { <p class="journal-post__byline">{b}</p> })}
            <div class="journal-post__tags">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! {
                        <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>{tag}</Badge>
                    })
                    .collect_view()}
            </div>
        </header>
        {(!post.summary.is_empty()).then(|| view! { <p class="journal-post__lead">{post.summary}</p> })}
        <div class="journal-post__body" inner_html=post.body></div>
    }
}
