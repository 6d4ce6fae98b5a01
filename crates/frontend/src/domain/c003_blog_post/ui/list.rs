use contracts::domain::c003_blog_post::aggregate::BlogPost;
use contracts::domain::common::Collection;
use contracts::shared::ResourceKey;
use leptos::prelude::*;

use super::card::JournalCard;
use crate::domain::c003_blog_post::view_model::{sort_newest_first, BlogPostView};
use crate::shared::components::QueryView;
use crate::shared::config::use_site_config;
use crate::shared::content::{use_content, QueryState};

/// Number of posts in the home page teaser.
const LATEST_COUNT: usize = 3;

/// All posts, newest first, optionally cut to `limit`.
fn use_journal(limit: Option<usize>) -> Memo<QueryState<Vec<BlogPostView>>> {
    let config = StoredValue::new(use_site_config());
    let posts = use_content::<Collection<BlogPost>>(|| Some(ResourceKey::blog_posts()));
    Memo::new(move |_| {
        posts.get().map(|list| {
            let mut data = list.data;
            sort_newest_first(&mut data);
            config.with_value(|config| {
                data.iter()
                    .take(limit.unwrap_or(usize::MAX))
                    .map(|p| BlogPostView::from_raw(p, config))
                    .collect()
            })
        })
    })
}

fn render_grid(posts: Vec<BlogPostView>) -> AnyView {
    if posts.is_empty() {
        return view! { <p class="journal__empty">"No stories yet."</p> }.into_any();
    }
    view! {
        <div class="journal__grid">
            {posts.into_iter().map(|post| view! { <JournalCard post=post /> }).collect_view()}
        </div>
    }
    .into_any()
}

/// Home page teaser with the most recent posts.
#[component]
pub fn LatestJournal() -> impl IntoView {
    let posts = use_journal(Some(LATEST_COUNT));
    view! {
        <section class="journal journal--latest">
            <div class="journal__header">
                <h2>"From the Journal"</h2>
                <a class="journal__more" href="/journal">"All stories"</a>
            </div>
            <QueryView state=posts render=render_grid />
        </section>
    }
}

#[component]
pub fn JournalPage() -> impl IntoView {
    let posts = use_journal(None);
    view! {
        <section class="journal">
            <h1 class="journal__title">"The Journal"</h1>
            <p class="journal__lead">"Field notes, guides and stories from our travel designers."</p>
            <QueryView state=posts render=render_grid />
        </section>
    }
}
