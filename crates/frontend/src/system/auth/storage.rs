use crate::shared::config::SESSION_STORAGE_KEY;
use contracts::shared::api::ApiError;
use contracts::system::auth::UserSession;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the logged-in user to localStorage
pub fn save_session(session: &UserSession) -> Result<(), ApiError> {
    let storage =
        get_local_storage().ok_or_else(|| ApiError::Storage("localStorage unavailable".into()))?;
    let json = serde_json::to_string(session).map_err(|e| ApiError::Storage(e.to_string()))?;
    storage
        .set_item(SESSION_STORAGE_KEY, &json)
        .map_err(|e| ApiError::Storage(format!("{:?}", e)))
}

/// Saved user, if any. An unreadable entry is discarded.
pub fn load_session() -> Option<UserSession> {
    let raw = get_local_storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("discarding stored session: {}", e);
            clear_session();
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
