use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub href: &'static str,
    pub title: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { href: "/#journeys", title: "Journeys" },
    NavLink { href: "/#experiences", title: "Experiences" },
    NavLink { href: "/journal", title: "Journal" },
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Savanna & Sable"</a>
            <button
                type="button"
                class="site-header__toggle"
                aria-label="Menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|link| view! {
                        <a
                            class="site-header__link"
                            href=link.href
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {link.title}
                        </a>
                    })
                    .collect_view()}
                <a class="site-header__cta" href="mailto:concierge@savannasable.travel">
                    "Plan a Journey"
                </a>
            </nav>
        </header>
    }
}
