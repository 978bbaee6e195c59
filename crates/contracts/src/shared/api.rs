//! Contract with the spreadsheet script backend.
//!
//! The backend is reached either through the embedded script bridge or over
//! HTTP. Both transports use the same action names and payload shapes, so
//! request envelopes and the parsing of replies live here, independent of
//! the transport.

use crate::domain::a001_material_return::MaterialReturn;
use crate::domain::a002_transporter_payment::TransporterPayment;
use crate::domain::common::lenient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by backend calls
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Connectivity problem, bridge failure handler or JS exception
    #[error("Connection error: {0}")]
    Transport(String),
    #[error("HTTP error {0}")]
    Http(u16),
    /// The backend answered and reported a failure
    #[error("{0}")]
    Backend(String),
    #[error("Invalid server response: {0}")]
    Malformed(String),
    #[error("{0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

/// Backend functions, named as the script exposes them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendAction {
    GetAllData,
    GetLoginData,
    GetOrderData,
    AddInitialEntry,
    UpdateWorkflowStep,
    AddKittingEntry,
    UpdateKittingPayment,
    UploadToDrive,
}

impl BackendAction {
    pub fn name(&self) -> &'static str {
        match self {
            BackendAction::GetAllData => "getAllData",
            BackendAction::GetLoginData => "getLoginData",
            BackendAction::GetOrderData => "getOrderData",
            BackendAction::AddInitialEntry => "addInitialEntry",
            BackendAction::UpdateWorkflowStep => "updateWorkflowStep",
            BackendAction::AddKittingEntry => "addKittingEntry",
            BackendAction::UpdateKittingPayment => "updateKittingPayment",
            BackendAction::UploadToDrive => "uploadToDrive",
        }
    }

    /// Reads go over `GET ?action=`, everything else is a `POST`
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            BackendAction::GetAllData | BackendAction::GetLoginData | BackendAction::GetOrderData
        )
    }
}

/// Body of an HTTP write: `{action, rowId?, stepNumber?, data?}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest<T> {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ActionRequest<T> {
    pub fn new(action: BackendAction, data: T) -> Self {
        Self {
            action: action.name(),
            row_id: None,
            step_number: None,
            data: Some(data),
        }
    }

    pub fn with_row(mut self, row_id: i64) -> Self {
        self.row_id = Some(row_id);
        self
    }

    pub fn with_step(mut self, step_number: u8) -> Self {
        self.step_number = Some(step_number);
        self
    }
}

/// Body of an HTTP upload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub action: &'static str,
    /// `data:<mime>;base64,<payload>` URL
    pub base64_data: String,
    pub file_name: String,
}

impl UploadRequest {
    pub fn new(base64_data: String, file_name: String) -> Self {
        Self {
            action: BackendAction::UploadToDrive.name(),
            base64_data,
            file_name,
        }
    }
}

/// Everything the tables and dashboard display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllData {
    pub returns: Vec<MaterialReturn>,
    pub payments: Vec<TransporterPayment>,
}

impl AllData {
    /// Permissive decoding of the `getAllData` reply.
    ///
    /// A missing or malformed reply yields empty collections; rows that fail
    /// to decode are skipped rather than failing the whole fetch.
    pub fn from_value(value: &Value) -> Self {
        Self {
            returns: decode_rows(value.get("fms")),
            payments: decode_rows(value.get("kitting")),
        }
    }
}

fn decode_rows<T: DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    match value {
        Some(Value::Array(rows)) => rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Delivery order as listed by `getOrderData`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub do_number: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub party_names: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLookup {
    pub orders: Vec<OrderInfo>,
    pub transporters: Vec<String>,
}

impl OrderLookup {
    /// Accepts `{orders, transporters}` as well as a bare order array.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self {
                orders: decode_rows(Some(value)),
                transporters: Vec::new(),
            },
            _ => Self {
                orders: decode_rows(value.get("orders")),
                transporters: value
                    .get("transporters")
                    .and_then(Value::as_array)
                    .map(|names| {
                        names
                            .iter()
                            .map(lenient::value_to_text)
                            .filter(|name| !name.trim().is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }
}

/// How a write ended when the backend reply could be inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The backend acknowledged the write
    Confirmed,
    /// Delivered with a 2xx status, but the reply carried no acknowledgement
    Unconfirmed,
}

/// Interprets the reply of an HTTP write.
pub fn interpret_write(status: u16, body: &str) -> Result<WriteOutcome, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http(status));
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => confirm_write(&value),
        Err(_) => Ok(WriteOutcome::Unconfirmed),
    }
}

/// Interprets a decoded write reply, as returned by the script bridge.
pub fn confirm_write(value: &Value) -> Result<WriteOutcome, ApiError> {
    backend_failure(value)?;
    Ok(WriteOutcome::Confirmed)
}

/// Extracts the stored file URL from an upload reply.
///
/// The bridge returns the URL itself; HTTP wraps it as
/// `{success, data, error}`.
pub fn upload_url_from_value(value: &Value) -> Result<String, ApiError> {
    backend_failure(value)?;
    let url = match value {
        Value::String(url) => url.clone(),
        Value::Object(_) => value
            .get("data")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    };
    if url.trim().is_empty() {
        Err(ApiError::Malformed("upload reply carries no file URL".to_string()))
    } else {
        Ok(url)
    }
}

fn backend_failure(value: &Value) -> Result<(), ApiError> {
    let success = value.get("success").and_then(Value::as_bool);
    let error = value
        .get("error")
        .map(lenient::value_to_text)
        .filter(|e| !e.trim().is_empty());
    match (success, error) {
        (Some(false), error) => Err(ApiError::Backend(
            error.unwrap_or_else(|| "The backend rejected the request".to_string()),
        )),
        (None, Some(error)) => Err(ApiError::Backend(error)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_data_decodes_both_sheets() {
        let value = json!({
            "fms": [{"rowId": 2, "returnNo": "RET-1001"}],
            "kitting": [{"rowId": 3, "paymentNumber": "PAY-2024-1001"}]
        });
        let data = AllData::from_value(&value);
        assert_eq!(data.returns.len(), 1);
        assert_eq!(data.returns[0].return_no, "RET-1001");
        assert_eq!(data.payments[0].payment_number, "PAY-2024-1001");
    }

    #[test]
    fn test_all_data_is_permissive() {
        assert_eq!(AllData::from_value(&Value::Null), AllData::default());
        assert_eq!(AllData::from_value(&json!("oops")), AllData::default());
        let partial = AllData::from_value(&json!({"fms": "not a list"}));
        assert!(partial.returns.is_empty());
        assert!(partial.payments.is_empty());
    }

    #[test]
    fn test_all_data_skips_undecodable_rows() {
        let value = json!({"fms": [{"returnNo": "RET-1"}, 42, "x"], "kitting": []});
        assert_eq!(AllData::from_value(&value).returns.len(), 1);
    }

    #[test]
    fn test_order_lookup_shapes() {
        let full = OrderLookup::from_value(&json!({
            "orders": [{"doNumber": 5001, "partyNames": "A", "productName": "B"}],
            "transporters": ["Fast Movers", "", null, "Blue Dart"]
        }));
        assert_eq!(full.orders[0].do_number, "5001");
        assert_eq!(full.transporters, vec!["Fast Movers", "Blue Dart"]);

        let bare = OrderLookup::from_value(&json!([{"doNumber": "DO-1"}]));
        assert_eq!(bare.orders.len(), 1);
        assert!(bare.transporters.is_empty());

        assert_eq!(OrderLookup::from_value(&Value::Null), OrderLookup::default());
    }

    #[test]
    fn test_action_request_envelope() {
        let body = ActionRequest::new(BackendAction::UpdateWorkflowStep, json!({"billNo": "B1"}))
            .with_row(12)
            .with_step(3);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"action": "updateWorkflowStep", "rowId": 12, "stepNumber": 3, "data": {"billNo": "B1"}})
        );

        let plain = serde_json::to_value(ActionRequest::new(BackendAction::AddInitialEntry, 1)).unwrap();
        assert_eq!(plain, json!({"action": "addInitialEntry", "data": 1}));
    }

    #[test]
    fn test_write_outcomes() {
        assert_eq!(interpret_write(200, r#"{"success": true}"#), Ok(WriteOutcome::Confirmed));
        assert_eq!(interpret_write(200, "<html>ok</html>"), Ok(WriteOutcome::Unconfirmed));
        assert_eq!(interpret_write(200, ""), Ok(WriteOutcome::Unconfirmed));
        assert_eq!(interpret_write(500, ""), Err(ApiError::Http(500)));
        assert_eq!(
            interpret_write(200, r#"{"success": false, "error": "Row not found"}"#),
            Err(ApiError::Backend("Row not found".into()))
        );
        assert_eq!(
            interpret_write(200, r#"{"error": "Sheet locked"}"#),
            Err(ApiError::Backend("Sheet locked".into()))
        );
    }

    #[test]
    fn test_bridge_write_replies() {
        assert_eq!(confirm_write(&Value::Null), Ok(WriteOutcome::Confirmed));
        assert_eq!(confirm_write(&json!("Row 5 updated")), Ok(WriteOutcome::Confirmed));
        assert_eq!(
            confirm_write(&json!({"success": false})),
            Err(ApiError::Backend("The backend rejected the request".into()))
        );
    }

    #[test]
    fn test_upload_url_from_both_transports() {
        assert_eq!(
            upload_url_from_value(&json!("https://drive/file/1")),
            Ok("https://drive/file/1".to_string())
        );
        assert_eq!(
            upload_url_from_value(&json!({"success": true, "data": "https://drive/file/2"})),
            Ok("https://drive/file/2".to_string())
        );
        assert_eq!(
            upload_url_from_value(&json!({"success": false, "error": "quota"})),
            Err(ApiError::Backend("quota".into()))
        );
        assert!(matches!(
            upload_url_from_value(&json!({"success": true})),
            Err(ApiError::Malformed(_))
        ));
    }

    #[test]
    fn test_only_reads_use_get() {
        assert!(BackendAction::GetAllData.is_read());
        assert!(!BackendAction::UploadToDrive.is_read());
        assert_eq!(BackendAction::UpdateKittingPayment.name(), "updateKittingPayment");
    }
}
