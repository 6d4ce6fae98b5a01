//! Theme for the application.
//!
//! The palette is a plain value built at start-up as part of
//! [`SiteConfig`](crate::shared::config::SiteConfig) and exposed to
//! components through context. It is written to the document root as CSS
//! custom properties once; nothing changes it afterwards.

use leptos::prelude::*;
use web_sys::window;

/// Brand palette.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub primary: &'static str,
    pub accent: &'static str,
    pub ink: &'static str,
    pub surface: &'static str,
    pub muted: &'static str,
    pub star: &'static str,
}

impl Palette {
    pub const SAVANNA: Palette = Palette {
        primary: "#1f3b2d",
        accent: "#b8925a",
        ink: "#1a1a1a",
        surface: "#faf7f2",
        muted: "#8a8378",
        star: "#c9a227",
    };
}

/// Read-only site theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SiteTheme {
    pub palette: Palette,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self {
            palette: Palette::SAVANNA,
            heading_font: "'Cormorant Garamond', Georgia, serif",
            body_font: "'Inter', system-ui, sans-serif",
        }
    }
}

impl SiteTheme {
    /// Declarations for the root element's `style` attribute.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        format!(
            "--color-primary: {}; --color-accent: {}; --color-ink: {}; --color-surface: {}; \
             --color-muted: {}; --color-star: {}; --font-heading: {}; --font-body: {};",
            p.primary, p.accent, p.ink, p.surface, p.muted, p.star, self.heading_font, self.body_font
        )
    }
}

/// Write the theme variables onto `<html>`.
fn apply_theme_variables(theme: &SiteTheme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(el) => el,
        None => return,
    };
    let _ = root.set_attribute("style", &theme.css_variables());
}

/// Provides the theme to children components.
#[component]
pub fn ThemeProvider(theme: SiteTheme, children: Children) -> impl IntoView {
    apply_theme_variables(&theme);
    provide_context(theme);

    children()
}

/// Hook to use the theme.
pub fn use_theme() -> SiteTheme {
    use_context::<SiteTheme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables() {
        let css = SiteTheme::default().css_variables();
        assert!(css.starts_with("--color-primary: #1f3b2d;"));
        assert!(css.contains("--color-star: #c9a227;"));
        assert!(css.trim_end().ends_with(';'));
    }
}
