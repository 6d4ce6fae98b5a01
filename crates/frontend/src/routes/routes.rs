use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::c002_experience::ui::{ExperienceDetailsPage, TourDetailsPage};
use crate::domain::c003_blog_post::ui::{JournalPage, JournalPostPage};
use crate::layout::SiteShell;
use crate::pages::{HomePage, NotFoundPage};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <SiteShell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/tours/:slug") view=TourDetailsPage />
                    <Route path=path!("/experiences/:slug") view=ExperienceDetailsPage />
                    <Route path=path!("/journal") view=JournalPage />
                    <Route path=path!("/journal/:slug") view=JournalPostPage />
                </Routes>
            </SiteShell>
        </Router>
    }
}
