use leptos::prelude::*;

use crate::domain::c001_tour_package::ui::FeaturedTours;
use crate::domain::c002_experience::ui::ExperiencesRow;
use crate::domain::c003_blog_post::ui::LatestJournal;
use crate::shared::components::{AdaptiveImage, FocalPoint};

const HERO_IMAGE_URL: &str = "/static/images/hero-savanna.jpg";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <AdaptiveImage
                src=HERO_IMAGE_URL.to_string()
                alt="Elephants crossing the savanna at dusk"
                focal_point=FocalPoint::new(0.5, 0.65)
                class="home-hero__image"
            />
            <div class="home-hero__copy">
                <h1>"Journeys Beyond the Ordinary"</h1>
                <p>"Private safaris and bespoke expeditions, crafted by people who have walked every trail."</p>
                <a class="home-hero__cta" href="#journeys">"Explore Journeys"</a>
            </div>
        </section>
        <div id="journeys">
            <FeaturedTours />
        </div>
        <div id="experiences">
            <ExperiencesRow />
        </div>
        <LatestJournal />
    }
}
