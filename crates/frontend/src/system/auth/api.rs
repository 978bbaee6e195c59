use crate::shared::backend;
use contracts::shared::api::{ApiError, BackendAction};
use contracts::system::auth::{parse_login_table, LoginRecord};

/// Fetch the login table (`getLoginData`)
pub async fn fetch_login_table() -> Result<Vec<LoginRecord>, ApiError> {
    let value = backend::read(BackendAction::GetLoginData).await?;
    parse_login_table(&value)
}
