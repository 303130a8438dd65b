//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// The backend serves the built site itself, so API calls go to the page's
/// own origin ("https://example.com"). Empty string if window is not available.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/contact");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
