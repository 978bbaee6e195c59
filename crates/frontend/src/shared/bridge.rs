//! Script bridge (`google.script.run`) available when the page is served
//! by the spreadsheet script itself.

use contracts::shared::api::ApiError;
use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `google.script.run`, if the host page provides it
fn script_runner() -> Option<JsValue> {
    let google = get(&js_sys::global(), "google")?;
    let script = get(&google, "script")?;
    get(&script, "run")
}

pub fn is_available() -> bool {
    script_runner().is_some()
}

fn invoke(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    function.apply(target, args)
}

/// Calls a script function and waits for its success or failure handler.
pub async fn call(function: &str, args: Vec<JsValue>) -> Result<JsValue, ApiError> {
    let runner = script_runner()
        .ok_or_else(|| ApiError::Transport("script bridge is not available".to_string()))?;
    let args: Array = args.into_iter().collect();

    let promise = Promise::new(&mut |resolve, reject| {
        let started = invoke(&runner, "withSuccessHandler", &Array::of1(&resolve))
            .and_then(|r| invoke(&r, "withFailureHandler", &Array::of1(&reject)))
            .and_then(|r| invoke(&r, function, &args));
        if let Err(err) = started {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    JsFuture::from(promise)
        .await
        .map_err(|err| ApiError::Transport(describe_js_error(&err)))
}

pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

/// Rust value to a plain JS object (maps become objects, not `Map`)
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ApiError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

pub fn from_js(value: JsValue) -> Result<serde_json::Value, ApiError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
}
