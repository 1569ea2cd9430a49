use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

// JSON envelope returned for every translated failure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorResponse {
    // Always false; this envelope never carries a success.
    pub success: bool,
    // Category label, e.g. "Resource not found".
    pub message: String,
    // Serialized as a top-level `error` or `errors` key.
    #[serde(flatten)]
    pub detail: ErrorDetail,
    // Local server time when the response was built.
    pub timestamp: NaiveDateTime,
    // Request descriptor, e.g. "uri=/api/feedbacks/7".
    pub path: String,
}

impl ErrorResponse {
    pub fn new(
        message: &str,
        detail: ErrorDetail,
        timestamp: NaiveDateTime,
        path: &str,
    ) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            detail,
            timestamp,
            path: path.to_string(),
        }
    }
}

// Either a single detail string or field-level validation messages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ErrorDetail {
    #[serde(rename = "error")]
    Error(String),
    #[serde(rename = "errors")]
    Errors(BTreeMap<String, String>),
}

// Response payload for the liveness probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
