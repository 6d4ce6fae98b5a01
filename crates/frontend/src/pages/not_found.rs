use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for has moved or no longer exists."</p>
            <a href="/">"Back to home"</a>
        </section>
    }
}
