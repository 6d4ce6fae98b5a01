use crate::routes::routes::AppRoutes;
use crate::shared::config::SiteConfig;
use crate::shared::content::provide_content_client;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_env();

    // One content client for the whole app so every view shares its cache.
    provide_content_client(&config);
    let theme = config.theme;
    provide_context(config);

    view! {
        <ThemeProvider theme=theme>
            <AppRoutes />
        </ThemeProvider>
    }
}
