use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div>
                    <p class="site-footer__brand">"Savanna & Sable"</p>
                    <p>"Private journeys across Africa, designed one guest at a time."</p>
                </div>
                <nav class="site-footer__links" aria-label="Footer">
                    <a href="/journal">"Journal"</a>
                    <a href="mailto:concierge@savannasable.travel">"Contact"</a>
                </nav>
            </div>
            <p class="site-footer__legal">{format!("© {} Savanna & Sable", year)}</p>
        </footer>
    }
}
