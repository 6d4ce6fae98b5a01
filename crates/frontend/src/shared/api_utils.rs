//! API utilities for talking to the content API
//!
//! Provides helper functions for constructing request URLs.

use contracts::shared::ResourceKey;

/// Base URL baked in at build time (`CMS_API_BASE=https://cms.example.com trunk build`).
const BUILD_API_BASE: Option<&str> = option_env!("CMS_API_BASE");

/// Get the base URL for content requests
///
/// Uses the build-time `CMS_API_BASE` when set, otherwise the origin the
/// site itself was served from.
///
/// # Returns
/// - API base URL like "https://cms.example.com" (no trailing slash)
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    if let Some(base) = BUILD_API_BASE.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full request URL for a resource key
///
/// # Example
/// ```rust,ignore
/// let url = resource_url("https://cms.example.com", &ResourceKey::experiences());
/// assert_eq!(url, "https://cms.example.com/api/experiences");
/// ```
pub fn resource_url(base: &str, key: &ResourceKey) -> String {
    format!("{}{}", base.trim_end_matches('/'), key.to_path())
}
