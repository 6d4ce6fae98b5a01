use leptos::prelude::*;

use crate::shared::scroll::ScrollSpyController;

/// Sticky in-page navigation; the item of the section in view is highlighted.
#[component]
pub fn SectionNav(
    spy: ScrollSpyController,
    /// `(section id, label)` in page order.
    items: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <nav class="section-nav" aria-label="On this page">
            {items
                .into_iter()
                .map(|(id, label)| {
                    let id_for_class = id.clone();
                    let id_for_aria = id.clone();
                    view! {
                        <button
                            type="button"
                            class="section-nav__item"
                            class:section-nav__item--active=move || spy.is_active(&id_for_class)
                            aria-current=move || spy.is_active(&id_for_aria).then_some("location")
                            on:click=move |_| spy.scroll_to_section(&id)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
