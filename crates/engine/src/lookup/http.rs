use std::fmt;

use relist_api::RelistClient;
use relist_types::{LookupRejection, LookupRequest, RawRecord};
use relist_util::http::{error_body, parse_response_json, parse_response_json_strict, status_error_message};
use relist_util::text_processing::{redact_sensitive, truncate_for_summary};
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::RecordLookup;

/// Endpoint path receiving lookup requests.
pub const DEFAULT_LOOKUP_PATH: &str = "/related-records";

/// Lookup adapter that POSTs the request as JSON and expects a JSON array of records.
pub struct HttpRecordLookup {
    client: RelistClient,
    path: String,
}

impl HttpRecordLookup {
    pub fn new(client: RelistClient) -> Self {
        Self {
            client,
            path: DEFAULT_LOOKUP_PATH.to_string(),
        }
    }

    /// Build from `RELIST_API_BASE` / `RELIST_API_TOKEN`.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(RelistClient::new_from_env()?))
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

#[async_trait::async_trait]
impl RecordLookup for HttpRecordLookup {
    async fn fetch_related(&self, request: &LookupRequest) -> Result<Vec<RawRecord>, LookupRejection> {
        debug!(
            parent_id = %request.parent_id,
            child_object = %request.child_object_api_name,
            limit = request.limit_size,
            "sending lookup request"
        );
        let response = self
            .client
            .request(Method::POST, &self.path)
            .json(request)
            .send()
            .await
            .map_err(|error| {
                LookupRejection::with_message(format!(
                    "Network error: {}. Hint: check connection/proxy and RELIST_API_BASE",
                    error
                ))
            })?;

        let status = response.status();
        let text = read_body(response.text().await)?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                body = %truncate_for_summary(&redact_sensitive(&text), 200),
                "lookup rejected"
            );
            return Err(rejection_from_response(status, &text));
        }

        let records = parse_records(&text, status)?;
        debug!(record_count = records.len(), "lookup resolved");
        Ok(records)
    }
}

/// Convert a non-success response into a rejection.
///
/// The structured body is the parsed JSON error payload; when the service
/// returned no usable payload, well-known status codes contribute a hint.
pub fn rejection_from_response(status: StatusCode, text: &str) -> LookupRejection {
    let parsed = parse_response_json(text);
    let body = parsed
        .clone()
        .and_then(error_body)
        .filter(|body| body.get("message").and_then(Value::as_str).is_some())
        .or_else(|| status_error_message(status.as_u16()).map(|hint| json!({ "message": hint })));
    let raw = json!({
        "status": status.as_u16(),
        "body": parsed.unwrap_or_else(|| Value::String(text.to_string())),
    });
    LookupRejection { body, raw }
}

fn read_body<E: fmt::Display>(body: Result<String, E>) -> Result<String, LookupRejection> {
    body.map_err(|error| LookupRejection::with_message(format!("Failed to read response body: {}", error)))
}

fn parse_records(text: &str, status: StatusCode) -> Result<Vec<RawRecord>, LookupRejection> {
    let value = parse_response_json_strict(text, Some(status)).map_err(|error| LookupRejection::with_message(error.to_string()))?;
    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|error| LookupRejection::with_message(format!("Invalid record payload: {}", error))),
        _ => Err(LookupRejection::with_message("Response is not a JSON array")),
    }
}
