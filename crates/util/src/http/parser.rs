//! # HTTP Utilities
//!
//! Response parsing for the lookup endpoint and extraction of a
//! human-readable message from a rejected lookup.

use relist_types::LookupRejection;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Return a user-friendly error message for common HTTP status codes.
///
/// # Example
/// ```rust
/// use relist_util::http::status_error_message;
///
/// let error_401 = status_error_message(401).unwrap();
/// assert!(error_401.contains("RELIST_API_TOKEN"));
/// assert!(status_error_message(404).is_none());
/// ```
pub fn status_error_message(status_code: u16) -> Option<String> {
    match status_code {
        401 => Some("Unauthorized (401). Hint: set RELIST_API_TOKEN=...".into()),
        403 => Some("Forbidden (403). Hint: check sharing and field-level access for the child object".into()),
        _ => None,
    }
}

/// Message to surface for a rejected lookup.
///
/// Uses the `message` string of the structured body when there is one and
/// falls back to the JSON serialization of the whole rejection.
///
/// # Example
/// ```rust
/// use relist_types::LookupRejection;
/// use relist_util::http::rejection_message;
/// use serde_json::json;
///
/// let rejection = LookupRejection::with_message("INVALID_FIELD");
/// assert_eq!(rejection_message(&rejection), "INVALID_FIELD");
///
/// let rejection = LookupRejection::from_raw(json!({"status": 500}));
/// assert_eq!(rejection_message(&rejection), r#"{"status":500}"#);
/// ```
pub fn rejection_message(rejection: &LookupRejection) -> String {
    rejection
        .body
        .as_ref()
        .and_then(body_message)
        .map(str::to_string)
        .unwrap_or_else(|| serde_json::to_string(&rejection.raw).unwrap_or_else(|_| rejection.raw.to_string()))
}

fn body_message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str).filter(|message| !message.is_empty())
}

/// Normalize an error payload to a single object.
///
/// Some services wrap errors in an array (`[{"message": ..., "errorCode": ...}]`);
/// the first element is taken in that case.
pub fn error_body(payload: Value) -> Option<Value> {
    match payload {
        Value::Array(items) => items.into_iter().find(Value::is_object),
        Value::Object(_) => Some(payload),
        Value::String(s) if !s.is_empty() => Some(serde_json::json!({ "message": s })),
        _ => None,
    }
}

/// Parse response text as JSON, returning `None` when it is not JSON.
pub fn parse_response_json(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text).ok()
}

/// Parse HTTP response text into JSON, providing detailed errors on failure.
///
/// # Errors
/// Returns a [`JsonParseError`] carrying the serde error and up to 200
/// characters of the body with whitespace collapsed.
pub fn parse_response_json_strict(text: &str, status: Option<StatusCode>) -> Result<Value, JsonParseError> {
    serde_json::from_str::<Value>(text).map_err(|error| {
        let status_note = status
            .map(|code| format!("status {code}"))
            .unwrap_or_else(|| "unknown status".to_string());
        let preview = truncate_response_preview(text, 200);

        JsonParseError::new(status_note, error, preview)
    })
}

fn truncate_response_preview(text: &str, limit: usize) -> String {
    if text.trim().is_empty() {
        return "<empty>".to_string();
    }

    let mut preview = String::new();
    for ch in text.chars() {
        if preview.len() >= limit {
            preview.push_str("...");
            break;
        }
        match ch {
            '\n' | '\r' | '\t' => {
                if !preview.ends_with(' ') {
                    preview.push(' ');
                }
            }
            _ => preview.push(ch),
        }
    }

    preview.trim().to_string()
}

/// Error returned when strict JSON parsing of an HTTP response fails.
#[derive(Debug, Error)]
#[error("failed to parse JSON response ({status_note}): {source}. body preview: {body_preview}")]
pub struct JsonParseError {
    status_note: String,
    #[source]
    source: serde_json::Error,
    body_preview: String,
}

impl JsonParseError {
    pub fn new(status_note: String, source: serde_json::Error, body_preview: String) -> Self {
        Self {
            status_note,
            source,
            body_preview,
        }
    }

    pub fn body_preview(&self) -> &str {
        &self.body_preview
    }
}
