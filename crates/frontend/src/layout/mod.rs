pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page frame shared by every route.
///
/// ```text
/// +--------------------------+
/// |   SiteHeader (sticky)    |
/// +--------------------------+
/// |   routed page            |
/// +--------------------------+
/// |   SiteFooter             |
/// +--------------------------+
/// ```
#[component]
pub fn SiteShell(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <header::SiteHeader />
            <main class="site__main">{children()}</main>
            <footer::SiteFooter />
        </div>
    }
}
