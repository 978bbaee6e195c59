//! Single entry point for backend calls.
//!
//! Picks the script bridge when the page runs inside the script host and
//! falls back to HTTP otherwise. Callers only deal with action names and
//! payloads from `contracts::shared::api`.

use crate::shared::api_utils::{action_url, api_base};
use crate::shared::bridge;
use contracts::shared::api::{
    confirm_write, interpret_write, upload_url_from_value, ActionRequest, ApiError,
    BackendAction, UploadRequest, WriteOutcome,
};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// `google.script.run`
    Bridge,
    Http,
}

impl Transport {
    fn detect() -> Self {
        if bridge::is_available() {
            Transport::Bridge
        } else {
            Transport::Http
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Transport::Bridge)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transport::Bridge => "Live",
            Transport::Http => "HTTP",
        }
    }
}

static TRANSPORT: OnceLock<Transport> = OnceLock::new();

/// Transport detected on first use
pub fn transport() -> Transport {
    *TRANSPORT.get_or_init(|| {
        let detected = Transport::detect();
        log::info!("backend transport: {}", detected.label());
        detected
    })
}

fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Runs a read action and returns the raw reply.
///
/// An unparseable HTTP body is reported as `Null`; callers decide whether
/// that is acceptable.
pub async fn read(action: BackendAction) -> Result<Value, ApiError> {
    match transport() {
        Transport::Bridge => bridge::from_js(bridge::call(action.name(), Vec::new()).await?),
        Transport::Http => {
            let response = Request::get(&action_url(action))
                .send()
                .await
                .map_err(transport_error)?;
            if !response.ok() {
                return Err(ApiError::Http(response.status()));
            }
            let text = response.text().await.map_err(transport_error)?;
            Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("{}: reply is not JSON: {}", action.name(), e);
                Value::Null
            }))
        }
    }
}

/// Runs a write action.
///
/// Over the bridge the arguments are positional: `rowId`, `stepNumber`
/// and `data`, each only when present.
pub async fn write<T: Serialize>(request: ActionRequest<T>) -> Result<WriteOutcome, ApiError> {
    let outcome = match transport() {
        Transport::Bridge => {
            let mut args: Vec<JsValue> = Vec::new();
            if let Some(row_id) = request.row_id {
                args.push(JsValue::from_f64(row_id as f64));
            }
            if let Some(step) = request.step_number {
                args.push(JsValue::from(step));
            }
            if let Some(data) = &request.data {
                args.push(bridge::to_js(data)?);
            }
            let reply = bridge::call(request.action, args).await?;
            confirm_write(&bridge::from_js(reply)?)?
        }
        Transport::Http => {
            let body = serde_json::to_string(&request)?;
            let (status, text) = post_text(body).await?;
            interpret_write(status, &text)?
        }
    };
    if outcome == WriteOutcome::Unconfirmed {
        log::warn!("{}: delivered but not confirmed by the backend", request.action);
    }
    Ok(outcome)
}

/// Uploads a `data:` URL and returns the stored file's URL.
pub async fn upload(data_url: String, file_name: String) -> Result<String, ApiError> {
    match transport() {
        Transport::Bridge => {
            let args = vec![JsValue::from_str(&data_url), JsValue::from_str(&file_name)];
            let reply = bridge::call(BackendAction::UploadToDrive.name(), args).await?;
            upload_url_from_value(&bridge::from_js(reply)?)
        }
        Transport::Http => {
            let body = serde_json::to_string(&UploadRequest::new(data_url, file_name))?;
            let (status, text) = post_text(body).await?;
            if !(200..300).contains(&status) {
                return Err(ApiError::Http(status));
            }
            let value: Value = serde_json::from_str(&text)?;
            upload_url_from_value(&value)
        }
    }
}

/// `text/plain` keeps the POST a simple CORS request (no preflight).
async fn post_text(body: String) -> Result<(u16, String), ApiError> {
    let response = Request::post(&api_base())
        .header("Content-Type", "text/plain;charset=utf-8")
        .body(body)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Ok((status, text))
}
