use crate::domain::common::lenient;
use crate::enums::ViewId;
use crate::shared::api::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use thiserror::Error;

/// Per-view access flags as stored in the login sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub dashboard: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub step1: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub step2: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub step3: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub step4: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub kitting: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub table: bool,
}

impl Permissions {
    pub fn grants(&self, view: ViewId) -> bool {
        match view {
            ViewId::Dashboard => self.dashboard,
            ViewId::Step1 => self.step1,
            ViewId::Step2 => self.step2,
            ViewId::Step3 => self.step3,
            ViewId::Step4 => self.step4,
            ViewId::Kitting => self.kitting,
            ViewId::Table => self.table,
        }
    }
}

/// Row of the `getLoginData` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub password: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Logged-in user, persisted in local storage between visits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub capabilities: BTreeSet<ViewId>,
}

impl UserSession {
    pub fn from_record(record: &LoginRecord) -> Self {
        let capabilities = ViewId::all()
            .into_iter()
            .filter(|view| record.permissions.grants(*view))
            .collect();
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            capabilities,
        }
    }

    pub fn has_capability(&self, view: ViewId) -> bool {
        self.capabilities.contains(&view)
    }

    /// First letter of the name for the sidebar avatar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter both User ID and Password")]
    MissingCredentials,
    #[error("Invalid credentials. Please check your ID and password.")]
    InvalidCredentials,
}

/// Decodes the login table. Anything but an array is rejected.
pub fn parse_login_table(value: &Value) -> Result<Vec<LoginRecord>, ApiError> {
    match value {
        Value::Array(rows) => Ok(rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect()),
        _ => Err(ApiError::Malformed("login data is not a list".to_string())),
    }
}

/// Matches credentials against the login table.
///
/// The ID comparison ignores case, the password must match exactly.
pub fn authenticate(records: &[LoginRecord], id: &str, password: &str) -> Result<UserSession, AuthError> {
    if id.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    let id = id.trim().to_lowercase();
    records
        .iter()
        .find(|record| record.id.to_lowercase() == id && record.password == password)
        .map(UserSession::from_record)
        .ok_or(AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> Vec<LoginRecord> {
        parse_login_table(&json!([
            {
                "id": "Admin",
                "password": "s3cret",
                "name": "Asha",
                "permissions": {"dashboard": true, "step1": "yes", "step2": "TRUE", "step3": 1,
                                "step4": "1", "kitting": true, "table": true}
            },
            {
                "id": 42,
                "password": 1234,
                "name": "Ravi",
                "permissions": {"step1": true, "step2": false, "kitting": "no"}
            },
            "garbage"
        ]))
        .unwrap()
    }

    #[test]
    fn test_login_table_requires_array() {
        assert!(matches!(parse_login_table(&json!({"id": "x"})), Err(ApiError::Malformed(_))));
        assert_eq!(table().len(), 2);
    }

    #[test]
    fn test_flags_become_capabilities() {
        let admin = UserSession::from_record(&table()[0]);
        assert_eq!(admin.capabilities.len(), ViewId::all().len());

        let clerk = UserSession::from_record(&table()[1]);
        assert_eq!(clerk.capabilities.into_iter().collect::<Vec<_>>(), vec![ViewId::Step1]);
    }

    #[test]
    fn test_authenticate_ignores_id_case() {
        let session = authenticate(&table(), "ADMIN", "s3cret").unwrap();
        assert_eq!(session.name, "Asha");
        assert_eq!(session.id, "Admin");

        let numeric = authenticate(&table(), "42", "1234").unwrap();
        assert!(numeric.has_capability(ViewId::Step1));
        assert!(!numeric.has_capability(ViewId::Dashboard));
    }

    #[test]
    fn test_authenticate_password_is_exact() {
        assert_eq!(authenticate(&table(), "admin", "S3CRET"), Err(AuthError::InvalidCredentials));
        assert_eq!(authenticate(&table(), "nobody", "s3cret"), Err(AuthError::InvalidCredentials));
        assert_eq!(authenticate(&table(), "", "x"), Err(AuthError::MissingCredentials));
    }

    #[test]
    fn test_session_round_trips_through_storage_json() {
        let session = authenticate(&table(), "42", "1234").unwrap();
        let stored = serde_json::to_string(&session).unwrap();
        assert!(stored.contains("\"step1\""));
        let restored: UserSession = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.initial(), "R");
    }
}
