//! URL helpers for the HTTP transport.

use crate::shared::config::BACKEND_URL;
use contracts::shared::api::BackendAction;

/// Base URL of the deployed script
///
/// Uses the compile-time `FMS_BACKEND_URL` when present, otherwise the
/// page origin plus `/exec`.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}?action=getAllData", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(url) = BACKEND_URL.filter(|u| !u.trim().is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let origin = window.location().origin().unwrap_or_default();
    format!("{}/exec", origin)
}

/// URL of a read action: `<base>?action=<name>`
pub fn action_url(action: BackendAction) -> String {
    format!(
        "{}?action={}",
        api_base(),
        urlencoding::encode(action.name())
    )
}
