use axum::Json;
use axum::http::{Method, Uri};

use crate::domain::errors::Failure;
use crate::frameworks::config::SERVICE_NAME;
use crate::interface_adapters::protocol::HealthResponse;

// Liveness probe for the feedback service.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: SERVICE_NAME,
    })
}

// Fallback for unmatched routes, translated like any other lookup miss.
pub async fn not_found(method: Method, uri: Uri) -> Failure {
    Failure::not_found(format!("No endpoint {method} {}", uri.path()))
}
