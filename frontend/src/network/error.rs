//! Error type for every backend call.
//!
//! Whatever goes wrong, the `Display` output is the message the user sees.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-OK HTTP status. Carries the backend's `error` field or the
    /// status text.
    #[error("{0}")]
    RequestFailed(String),

    /// The request never produced a response (offline, CORS, aborted).
    #[error("{0}")]
    Transport(String),

    /// A successful response whose body is not the expected JSON.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The session is missing; the backend redirected to its login page.
    #[error("Please log in to continue.")]
    LoginRequired { login_url: String },
}

impl ApiError {
    /// Build a `RequestFailed` from a failed response.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        ApiError::RequestFailed(failure_message(status, status_text, body))
    }

    /// Describe a rejected `fetch` promise.
    pub fn from_js(value: &JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Transport(message)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Pick the message for a failed response: the JSON `error` field when it is
/// a non-empty string, otherwise the status text. HTTP/2 responses carry no
/// status text, so the status code is the last resort.
pub fn failure_message(status: u16, status_text: &str, body: &str) -> String {
    let from_body = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .filter(|msg| !msg.is_empty());

    match from_body {
        Some(msg) => msg,
        None if !status_text.is_empty() => status_text.to_string(),
        None => format!("HTTP {}", status),
    }
}
