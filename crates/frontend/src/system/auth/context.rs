use contracts::shared::api::ApiError;
use contracts::system::auth::{authenticate, UserSession};
use leptos::prelude::*;

use super::{api, storage};

/// Current user, provided by `App` to the whole tree
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<UserSession>>,
}

impl SessionContext {
    /// Restores the user saved by a previous visit
    pub fn restore() -> Self {
        let saved = storage::load_session();
        if let Some(user) = &saved {
            log::info!("restored session for {}", user.id);
        }
        Self {
            user: RwSignal::new(saved),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn sign_in(&self, session: UserSession) {
        if let Err(e) = storage::save_session(&session) {
            // the session still works for this visit
            log::error!("failed to persist session: {}", e);
        }
        self.user.set(Some(session));
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.user.set(None);
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

/// Error shown on the login form
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFailure {
    Rejected(String),
    Unreachable,
}

impl LoginFailure {
    pub fn message(&self) -> String {
        match self {
            LoginFailure::Rejected(msg) => msg.clone(),
            LoginFailure::Unreachable => {
                "Unable to connect to the server. Please try again.".to_string()
            }
        }
    }
}

/// Fetches the login table and matches the credentials locally
pub async fn do_login(id: String, password: String) -> Result<UserSession, LoginFailure> {
    let records = api::fetch_login_table().await.map_err(|e: ApiError| {
        log::error!("login data fetch failed: {}", e);
        LoginFailure::Unreachable
    })?;
    authenticate(&records, &id, &password).map_err(|e| LoginFailure::Rejected(e.to_string()))
}
