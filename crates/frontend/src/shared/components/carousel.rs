//! Carousel: titled horizontal row of cards with prev/next paging.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonShape};

use crate::shared::scroll::use_carousel;

/// Delay before the second measurement after the item count changes.
const LAYOUT_SETTLE_MS: u32 = 120;

#[component]
pub fn Carousel(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Number of rendered items; the edges are re-measured when it changes.
    #[prop(into)]
    item_count: Signal<usize>,
    children: Children,
) -> impl IntoView {
    let carousel = use_carousel();

    // Items usually arrive after the first measurement, and images inside
    // them may still change the track width for a moment.
    Effect::new(move |_| {
        item_count.track();
        carousel.check_scrollable();
        spawn_local(async move {
            TimeoutFuture::new(LAYOUT_SETTLE_MS).await;
            carousel.check_scrollable();
        });
    });

    view! {
        <section class="carousel">
            <div class="carousel__header">
                <div>
                    <h2 class="carousel__title">{title}</h2>
                    {subtitle.map(|s| view! { <p class="carousel__subtitle">{s}</p> })}
                </div>
                <div class="carousel__controls">
                    <span
                        class="carousel__control"
                        class:carousel__control--inactive=move || !carousel.can_scroll_left()
                    >
                        <Button
                            appearance=ButtonAppearance::Secondary
                            shape=ButtonShape::Circular
                            disabled=Signal::derive(move || !carousel.can_scroll_left())
                            on_click=move |_| carousel.scroll_left()
                        >
                            "‹"
                        </Button>
                    </span>
                    <span
                        class="carousel__control"
                        class:carousel__control--inactive=move || !carousel.can_scroll_right()
                    >
                        <Button
                            appearance=ButtonAppearance::Secondary
                            shape=ButtonShape::Circular
                            disabled=Signal::derive(move || !carousel.can_scroll_right())
                            on_click=move |_| carousel.scroll_right()
                        >
                            "›"
                        </Button>
                    </span>
                </div>
            </div>
            <div class="carousel__track" node_ref=carousel.container>
                {children()}
            </div>
        </section>
    }
}
